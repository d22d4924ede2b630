use std::sync::Arc;
use crate::application::services::{AdviceService, AnalysisService};

/// Estado compartido para los manejadores HTTP de Axum.
/// Siguiendo la Arquitectura Hexagonal, el estado contiene los servicios (Casos de Uso).
#[derive(Clone)]
pub struct HttpState {
    /// Servicio de análisis de imágenes (detección + resumen).
    pub analysis: Arc<AnalysisService>,
    /// Servicio de recomendaciones sobre tablas fijas.
    pub advice: Arc<AdviceService>,
}
