//! OCR text source backed by `pure-onnx-ocr` (pure Rust, no external
//! ONNX Runtime).

use std::path::Path;

use image::DynamicImage;
use tracing::{debug, info};

use crate::error::{OcrError, Result};
use crate::models::config::OcrConfig;
use crate::pipeline::TextSource;

/// Text source for scanned images.
///
/// Model files are loaded once at construction; recognition itself holds
/// no mutable state, so one engine serves all requests.
pub struct OcrTextSource {
    engine: pure_onnx_ocr::engine::OcrEngine,
}

impl OcrTextSource {
    /// Load the OCR engine from the configured model directory (explicit
    /// value, `FORMSIFT_MODEL_DIR`, or the fixed default, in that order).
    pub fn from_config(config: &OcrConfig) -> std::result::Result<Self, OcrError> {
        let model_dir = config.resolved_model_dir();
        Self::from_dir(&model_dir, config)
    }

    /// Load the OCR engine from model files in a directory.
    pub fn from_dir(model_dir: &Path, config: &OcrConfig) -> std::result::Result<Self, OcrError> {
        let det_path = model_dir.join(&config.detection_model);
        let rec_path = model_dir.join(&config.recognition_model);
        let dict_path = model_dir.join(&config.dictionary);

        let engine = pure_onnx_ocr::engine::OcrEngineBuilder::new()
            .det_model_path(&det_path)
            .rec_model_path(&rec_path)
            .dictionary_path(&dict_path)
            .build()
            .map_err(|e| OcrError::ModelLoad(format!("pure-onnx-ocr: {}", e)))?;

        info!("Loaded pure-onnx-ocr engine from {}", model_dir.display());

        Ok(Self { engine })
    }

    /// Run recognition on a decoded image and join the recognized regions
    /// in reading order (top-to-bottom, left-to-right).
    fn recognize(&self, image: &DynamicImage) -> std::result::Result<String, OcrError> {
        let results = self
            .engine
            .run_from_image(image)
            .map_err(|e| OcrError::Recognition(format!("pure-onnx-ocr: {}", e)))?;

        debug!("pure-onnx-ocr returned {} text regions", results.len());

        let mut regions: Vec<((f32, f32), String)> = results
            .iter()
            .map(|r| (polygon_origin(&r.bounding_box), r.text.clone()))
            .collect();

        regions.sort_by(|((ax, ay), _), ((bx, by), _)| {
            // Group by approximate vertical position (within 20 pixels).
            let row_a = (ay / 20.0) as i32;
            let row_b = (by / 20.0) as i32;
            if row_a != row_b {
                row_a.cmp(&row_b)
            } else {
                ax.partial_cmp(bx).unwrap_or(std::cmp::Ordering::Equal)
            }
        });

        let text = regions
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Ok(text)
    }
}

impl TextSource for OcrTextSource {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| OcrError::InvalidImage(e.to_string()))?;
        Ok(self.recognize(&image)?)
    }
}

/// Top-left corner of a recognition polygon, used for reading-order sort.
fn polygon_origin(polygon: &pure_onnx_ocr::Polygon<f64>) -> (f32, f32) {
    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    for coord in polygon.exterior().coords() {
        min_x = min_x.min(coord.x as f32);
        min_y = min_y.min(coord.y as f32);
    }
    (min_x, min_y)
}
