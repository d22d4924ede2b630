use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Una instancia detectada por el modelo: etiqueta, confianza y caja.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub confidence: f32, // 0..1
    pub class_id: usize,
    pub label: String,
}

impl Detection {
    /// Guard for records crossing the detector boundary: a record without a
    /// usable label or with a confidence outside [0, 1] is rejected instead
    /// of being rendered.
    pub fn validate(&self) -> DomainResult<()> {
        if self.label.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "detection record has no label".into(),
            ));
        }
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(DomainError::InvalidInput(format!(
                "detection confidence out of range: {}",
                self.confidence
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(label: &str, confidence: f32) -> Detection {
        Detection {
            x1: 0.0,
            y1: 0.0,
            x2: 10.0,
            y2: 10.0,
            confidence,
            class_id: 16,
            label: label.to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_record() {
        assert!(det("dog", 0.91).validate().is_ok());
    }

    #[test]
    fn rejects_blank_label() {
        assert!(matches!(
            det("  ", 0.5).validate(),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_confidence() {
        assert!(det("dog", 1.5).validate().is_err());
        assert!(det("dog", -0.1).validate().is_err());
        assert!(det("dog", f32::NAN).validate().is_err());
    }
}
