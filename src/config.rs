//! User configuration
//!
//! An optional `transported.toml` in the working directory may point at a
//! different classifier artifact. Resolution order for the model path:
//! CLI flag, then config file, then the built-in default.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::classifier::DEFAULT_MODEL_PATH;

/// Config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "transported.toml";

#[derive(Debug, Default, Deserialize)]
pub struct PredictorConfig {
    /// Path to the serialized classifier artifact
    pub model_path: Option<PathBuf>,
}

impl PredictorConfig {
    /// Load `transported.toml` from `dir`. A missing file means defaults;
    /// a malformed one is an error worth surfacing.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config at {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the artifact path: flag > config > default.
    pub fn resolve_model_path(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        self.model_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PredictorConfig::load(dir.path()).unwrap();
        assert_eq!(
            config.resolve_model_path(None),
            PathBuf::from(DEFAULT_MODEL_PATH)
        );
    }

    #[test]
    fn config_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"model_path = "artifacts/other_model.json""#,
        )
        .unwrap();

        let config = PredictorConfig::load(dir.path()).unwrap();
        assert_eq!(
            config.resolve_model_path(None),
            PathBuf::from("artifacts/other_model.json")
        );
    }

    #[test]
    fn flag_beats_config() {
        let config = PredictorConfig {
            model_path: Some(PathBuf::from("from_config.json")),
        };
        assert_eq!(
            config.resolve_model_path(Some(Path::new("from_flag.json"))),
            PathBuf::from("from_flag.json")
        );
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "model_path = [not toml").unwrap();
        assert!(PredictorConfig::load(dir.path()).is_err());
    }
}
