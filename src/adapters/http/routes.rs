use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::adapters::http::state::HttpState;
use crate::application::dto::BarcodeRequest;
use crate::domain::errors::DomainError;

fn error_response(err: DomainError) -> axum::response::Response {
    let status = match err {
        DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::OperationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

/// Subida de imagen (multipart, campo "image") → detección + resumen.
pub async fn analyze_image(State(st): State<HttpState>, mut multipart: Multipart) -> impl IntoResponse {
    let mut image = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("image") {
                    match field.bytes().await {
                        Ok(bytes) => {
                            image = Some(bytes);
                            break;
                        }
                        Err(e) => {
                            return (
                                StatusCode::BAD_REQUEST,
                                Json(json!({ "error": format!("upload failed: {e}") })),
                            )
                                .into_response()
                        }
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("malformed multipart body: {e}") })),
                )
                    .into_response()
            }
        }
    }

    let Some(image) = image else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "missing multipart field 'image'" })),
        )
            .into_response();
    };

    match st.analysis.analyze(&image).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn check_barcode(State(st): State<HttpState>, Json(req): Json<BarcodeRequest>) -> impl IntoResponse {
    Json(st.advice.check_barcode(req.barcode.trim()))
}

pub async fn diet_by_age(State(st): State<HttpState>, Path(age): Path<u8>) -> impl IntoResponse {
    // El slider de la página limita la edad a 0..=20; la tabla es total de
    // todas formas, así que valores mayores caen en el tramo senior.
    Json(st.advice.recommend_diet(age))
}

pub async fn recommend_treats(State(st): State<HttpState>) -> impl IntoResponse {
    Json(st.advice.recommend_treats())
}

pub async fn suggested_links(State(st): State<HttpState>) -> impl IntoResponse {
    Json(st.advice.suggested_links())
}
