//! CLI command implementations.

pub mod process;
pub mod serve;

use std::path::Path;

use formsift_core::FormsiftConfig;

/// Load the config file when given, defaults otherwise.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FormsiftConfig> {
    match config_path {
        Some(path) => Ok(FormsiftConfig::from_file(Path::new(path))?),
        None => Ok(FormsiftConfig::default()),
    }
}
