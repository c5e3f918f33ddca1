//! Configuration structures for the formsift pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the OCR model directory.
pub const MODEL_DIR_ENV: &str = "FORMSIFT_MODEL_DIR";

/// Default OCR model directory when neither config nor env specify one.
pub const DEFAULT_MODEL_DIR: &str = "models";

/// Main configuration for the formsift pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsiftConfig {
    /// OCR configuration.
    pub ocr: OcrConfig,

    /// Completion-provider settings used by the structuring endpoints.
    pub llm: LlmSettings,
}

impl Default for FormsiftConfig {
    fn default() -> Self {
        Self {
            ocr: OcrConfig::default(),
            llm: LlmSettings::default(),
        }
    }
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Directory containing model files. When unset in the config file,
    /// the `FORMSIFT_MODEL_DIR` environment variable is consulted, then
    /// a fixed default.
    pub model_dir: Option<PathBuf>,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            detection_model: "det.onnx".to_string(),
            recognition_model: "latin_rec.onnx".to_string(),
            dictionary: "latin_dict.txt".to_string(),
        }
    }
}

impl OcrConfig {
    /// Resolve the model directory: explicit config value, then the
    /// environment variable, then the fixed default path.
    pub fn resolved_model_dir(&self) -> PathBuf {
        if let Some(dir) = &self.model_dir {
            return dir.clone();
        }
        if let Ok(dir) = std::env::var(MODEL_DIR_ENV) {
            return PathBuf::from(dir);
        }
        PathBuf::from(DEFAULT_MODEL_DIR)
    }
}

/// Completion-provider settings. The bearer credential is deliberately not
/// part of the config file; it is injected from the environment at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Model identifier sent with every completion request.
    pub model: String,

    /// Base URL of the chat-completions API.
    pub base_url: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }
}

impl FormsiftConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
