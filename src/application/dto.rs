use serde::{Deserialize, Serialize};

use crate::domain::{advice::FoodLink, detection::Detection};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: String,
    pub detections: Vec<Detection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodeRequest {
    pub barcode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodeVerdict {
    pub suitable: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietResponse {
    pub age: u8,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksResponse {
    pub links: Vec<FoodLink>,
}
