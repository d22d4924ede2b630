pub mod routes;
pub mod state;

use axum::{routing::{get, post}, Router};
use crate::adapters::http::state::HttpState;

pub fn router(state: HttpState) -> Router {
    Router::new()
        .route("/api/analyze", post(routes::analyze_image))
        .route("/api/barcode", post(routes::check_barcode))
        .route("/api/diet/:age", get(routes::diet_by_age))
        .route("/api/treats", get(routes::recommend_treats))
        .route("/api/links", get(routes::suggested_links))
        .with_state(state)
}
