//! Data models for parsed documents and pipeline configuration.

pub mod config;
pub mod document;

pub use config::{FormsiftConfig, LlmSettings, OcrConfig};
pub use document::{FormField, ParsedDocument};
