mod domain;
mod application;
mod adapters;

use std::sync::Arc;
use tower_http::services::ServeDir;
use crate::application::services::{AdviceService, AnalysisService};
use crate::adapters::{
    http::{state::HttpState, router},
    onnx::detector::OnnxDetector,
};
use crate::domain::{
    advice::{BarcodeTable, DietTable},
    model::{InferenceConfig, ModelId, YoloParams},
    summary::SummaryPolicy,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Inicializar logs (RUST_LOG=info por defecto)
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    tracing::info!("🔧 Cargando el modelo de detección...");

    // 2. Instanciar Adaptadores (Capa de Infraestructura)
    // El modelo se carga una única vez aquí; si falta el fichero, fallamos
    // en el arranque en lugar de servir una página a medias.
    let model_path = std::env::var("MODEL_PATH").unwrap_or_else(|_| "models/yolov8s.onnx".into());
    let detector = Arc::new(OnnxDetector::load(InferenceConfig {
        model: ModelId {
            name: "yolov8s".into(),
            onnx_path: model_path,
        },
        params: YoloParams::default(),
    })?);

    // 3. Instanciar Servicios (Capa de Aplicación - Casos de Uso)
    let analysis = Arc::new(AnalysisService::new(detector, SummaryPolicy::FirstInOrder));
    let advice = Arc::new(AdviceService::new(
        BarcodeTable::default(),
        DietTable::default(),
    ));

    // 4. Configurar el Estado de la API
    let state = HttpState { analysis, advice };

    // 5. Configurar el Router de Axum y Archivos Estáticos
    let app = router(state)
        .fallback_service(ServeDir::new("static"));

    // 6. Lanzar el Servidor
    let port: u16 = std::env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8090);
    let addr = format!("0.0.0.0:{}", port);

    tracing::info!("🚀 Pet Care Assistant iniciado en http://{}", addr);
    tracing::info!("📂 Archivos estáticos servidos desde la carpeta './static'");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
