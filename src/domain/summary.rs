use crate::domain::detection::Detection;
use crate::domain::errors::DomainResult;

/// Cómo elegir la detección representativa para la frase de resumen.
///
/// El detector ONNX de este repo entrega sus resultados ordenados por
/// confianza descendente, así que ambas políticas coinciden con él; la
/// distinción importa para detectores que no ordenan su salida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryPolicy {
    /// Trust the detector's own ranking and take the first record.
    #[default]
    FirstInOrder,
    /// Pick the record with the highest confidence, ignoring order.
    HighestConfidence,
}

/// Convierte un lote de detecciones en una sola frase legible.
pub fn summarize(detections: &[Detection], policy: SummaryPolicy) -> DomainResult<String> {
    let representative = match policy {
        SummaryPolicy::FirstInOrder => detections.first(),
        SummaryPolicy::HighestConfidence => detections
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence)),
    };

    let Some(det) = representative else {
        return Ok("No objects detected.".to_string());
    };
    det.validate()?;

    Ok(format!(
        "Detected: {} with confidence {:.2}",
        det.label, det.confidence
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    fn det(label: &str, confidence: f32) -> Detection {
        Detection {
            x1: 1.0,
            y1: 2.0,
            x2: 3.0,
            y2: 4.0,
            confidence,
            class_id: 0,
            label: label.to_string(),
        }
    }

    #[test]
    fn empty_batch_yields_fixed_sentence() {
        let out = summarize(&[], SummaryPolicy::FirstInOrder).unwrap();
        assert_eq!(out, "No objects detected.");
        let out = summarize(&[], SummaryPolicy::HighestConfidence).unwrap();
        assert_eq!(out, "No objects detected.");
    }

    #[test]
    fn first_in_order_takes_the_first_record() {
        let batch = [det("cat", 0.30), det("dog", 0.95)];
        let out = summarize(&batch, SummaryPolicy::FirstInOrder).unwrap();
        assert_eq!(out, "Detected: cat with confidence 0.30");
    }

    #[test]
    fn highest_confidence_ignores_order() {
        let batch = [det("cat", 0.30), det("dog", 0.95)];
        let out = summarize(&batch, SummaryPolicy::HighestConfidence).unwrap();
        assert_eq!(out, "Detected: dog with confidence 0.95");
    }

    #[test]
    fn confidence_is_formatted_to_two_decimals() {
        let out = summarize(&[det("dog", 0.8734)], SummaryPolicy::FirstInOrder).unwrap();
        assert_eq!(out, "Detected: dog with confidence 0.87");

        let out = summarize(&[det("dog", 1.0)], SummaryPolicy::FirstInOrder).unwrap();
        assert_eq!(out, "Detected: dog with confidence 1.00");
    }

    #[test]
    fn summary_starts_with_detected_prefix() {
        let batch = [det("bird", 0.62), det("cat", 0.61)];
        let out = summarize(&batch, SummaryPolicy::FirstInOrder).unwrap();
        assert!(out.starts_with("Detected: "));
        assert!(out.contains("bird"));
    }

    #[test]
    fn malformed_record_is_an_input_error() {
        let err = summarize(&[det("", 0.9)], SummaryPolicy::FirstInOrder).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
