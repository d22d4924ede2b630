use std::sync::Arc;

use crate::{
    application::{
        dto::{AnalysisReport, BarcodeVerdict, DietResponse, LinksResponse, MessageResponse},
        ports::DetectorPort,
    },
    domain::{
        advice::{suggested_links, BarcodeTable, DietTable, TREATS},
        errors::DomainResult,
        summary::{summarize, SummaryPolicy},
    },
};

/// Servicio encargado del análisis de imágenes: delega la detección en el
/// puerto inyectado y resume el lote resultante en una frase.
#[derive(Clone)]
pub struct AnalysisService {
    detector: Arc<dyn DetectorPort>,
    policy: SummaryPolicy,
}

impl AnalysisService {
    pub fn new(detector: Arc<dyn DetectorPort>, policy: SummaryPolicy) -> Self {
        Self { detector, policy }
    }

    /// Una interacción = una llamada bloqueante al detector y un resumen.
    /// Sin reintentos ni timeouts: el usuario puede volver a subir la imagen.
    pub async fn analyze(&self, image: &[u8]) -> DomainResult<AnalysisReport> {
        let detections = self.detector.detect(image).await?;
        let summary = summarize(&detections, self.policy)?;
        Ok(AnalysisReport {
            summary,
            detections,
        })
    }
}

/// Servicio de recomendaciones: puras consultas sobre tablas inmutables.
#[derive(Clone, Default)]
pub struct AdviceService {
    barcodes: BarcodeTable,
    diets: DietTable,
}

impl AdviceService {
    pub fn new(barcodes: BarcodeTable, diets: DietTable) -> Self {
        Self { barcodes, diets }
    }

    pub fn check_barcode(&self, barcode: &str) -> BarcodeVerdict {
        let (suitable, message) = self.barcodes.lookup(barcode);
        BarcodeVerdict {
            suitable,
            message: message.to_string(),
        }
    }

    pub fn recommend_diet(&self, age: u8) -> DietResponse {
        DietResponse {
            age,
            message: self.diets.lookup(age).to_string(),
        }
    }

    pub fn recommend_treats(&self) -> MessageResponse {
        MessageResponse {
            message: TREATS.to_string(),
        }
    }

    pub fn suggested_links(&self) -> LinksResponse {
        LinksResponse {
            links: suggested_links(),
        }
    }
}
