use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use async_trait::async_trait;
use tracing::info;

use crate::adapters::onnx::yolo_engine::OnnxYoloEngine;
use crate::application::ports::DetectorPort;
use crate::domain::{
    detection::Detection,
    errors::{DomainError, DomainResult},
    model::InferenceConfig,
};

/// Adaptador del puerto de detección sobre una sesión ONNX.
///
/// El modelo se carga una sola vez al construir el adaptador; la inferencia
/// es síncrona, así que se despacha a un hilo bloqueante para no parar el
/// runtime de Tokio.
pub struct OnnxDetector {
    engine: Arc<Mutex<OnnxYoloEngine>>,
    config: InferenceConfig,
}

impl OnnxDetector {
    pub fn load(config: InferenceConfig) -> Result<Self> {
        // Validación preventiva antes de tocar la sesión ONNX
        if config.model.onnx_path.trim().is_empty() {
            bail!("onnx_path empty");
        }
        if !Path::new(&config.model.onnx_path).exists() {
            bail!("model file not found: {}", config.model.onnx_path);
        }

        let engine = OnnxYoloEngine::load(&config.model.onnx_path)?;
        info!(
            "Modelo '{}' cargado desde {}",
            config.model.name, config.model.onnx_path
        );

        Ok(Self {
            engine: Arc::new(Mutex::new(engine)),
            config,
        })
    }
}

#[async_trait]
impl DetectorPort for OnnxDetector {
    async fn detect(&self, image: &[u8]) -> DomainResult<Vec<Detection>> {
        let rgb = image::load_from_memory(image)
            .map_err(|e| DomainError::InvalidInput(format!("could not decode image: {e}")))?
            .to_rgb8();

        let engine = self.engine.clone();
        let params = self.config.params.clone();

        // Llamada-y-espera, sin timeout ni reintentos
        tokio::task::spawn_blocking(move || {
            let mut eng = engine
                .lock()
                .map_err(|_| DomainError::OperationFailed("detector lock poisoned".into()))?;
            eng.infer(&rgb, &params)
                .map_err(|e| DomainError::OperationFailed(format!("inference failed: {e}")))
        })
        .await
        .map_err(|e| DomainError::OperationFailed(format!("inference task aborted: {e}")))?
    }
}
