use async_trait::async_trait;

use crate::domain::{detection::Detection, errors::DomainResult};

/// Frontera con el modelo de detección: bytes de imagen codificados dentro,
/// lote de detecciones fuera. La implementación real carga el modelo una vez
/// al arrancar; los tests inyectan un stub.
#[async_trait]
pub trait DetectorPort: Send + Sync {
    async fn detect(&self, image: &[u8]) -> DomainResult<Vec<Detection>>;
}
