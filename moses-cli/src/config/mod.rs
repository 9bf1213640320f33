//! Configuration loading

use crate::error::CliError;
use anyhow::Result;
use moses_core::MosesConfig;
use std::path::Path;

/// Load the configuration file, or the defaults when none is given
pub fn load(path: Option<&Path>) -> Result<MosesConfig> {
    let Some(path) = path else {
        return Ok(MosesConfig::default());
    };
    log::debug!("Loading configuration from {}", path.display());
    let config = MosesConfig::from_file(path)
        .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
    Ok(config)
}
