//! Configuration resolution for Veriflow.
//!
//! Implements hierarchical config resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/veriflow/settings.json)
//! 3. Environment variables (highest priority below CLI arguments)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Complete Veriflow configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FlowConfig {
    #[serde(default)]
    pub flow: InquiryConfig,
    #[serde(default)]
    pub surface: SurfaceSettings,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Parameters of the hosted inquiry flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryConfig {
    /// Inquiry template to launch.
    pub template_id: String,
    /// Environment name passed to the flow (e.g. "sandbox").
    pub environment: String,
}

impl Default for InquiryConfig {
    fn default() -> Self {
        Self {
            template_id: "itmpl_Ygs16MKTkA6obnF8C3Rb17dm".to_string(),
            environment: "sandbox".to_string(),
        }
    }
}

/// Settings applied to the embedded content surface at setup time.
///
/// The coordinator itself never reads these; the embedding host applies
/// them before loading the entry URL. The flow requires script execution,
/// DOM storage and gesture-free media playback to run its camera checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurfaceSettings {
    pub javascript: bool,
    pub dom_storage: bool,
    pub media_playback_requires_gesture: bool,
    /// Allow remote inspection of the embedded surface.
    pub debugging: bool,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            javascript: true,
            dom_storage: true,
            media_playback_requires_gesture: false,
            debugging: false,
        }
    }
}

/// Where capture destinations are prepared.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Override for the public pictures directory. When unset, the
    /// platform's standard pictures directory is used.
    pub pictures_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Load configuration with hierarchical resolution.
///
/// `path` overrides the global config location entirely (CLI `--config`).
pub fn load_config(path: Option<&Path>) -> Result<FlowConfig> {
    let mut config = FlowConfig::default();

    let config_path = path.map(Path::to_path_buf).or_else(global_config_path);
    if let Some(config_path) = config_path {
        if config_path.exists() {
            let loaded = load_config_file(&config_path)?;
            config = loaded;
        } else if path.is_some() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
    }

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Get the global config file path.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("veriflow").join("settings.json"))
}

fn load_config_file(path: &Path) -> Result<FlowConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })
}

fn apply_env_overrides(config: &mut FlowConfig) {
    if let Ok(val) = std::env::var("VERIFLOW_TEMPLATE_ID") {
        config.flow.template_id = val;
    }
    if let Ok(val) = std::env::var("VERIFLOW_ENVIRONMENT") {
        config.flow.environment = val;
    }
    if let Ok(val) = std::env::var("VERIFLOW_PICTURES_DIR") {
        config.storage.pictures_dir = Some(PathBuf::from(val));
    }
    if let Ok(val) = std::env::var("VERIFLOW_LOG_LEVEL") {
        config.log.level = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_sandbox() {
        let config = FlowConfig::default();
        assert_eq!(config.flow.environment, "sandbox");
        assert!(config.flow.template_id.starts_with("itmpl_"));
    }

    #[test]
    fn default_surface_allows_gestureless_media() {
        let surface = SurfaceSettings::default();
        assert!(surface.javascript);
        assert!(surface.dom_storage);
        assert!(!surface.media_playback_requires_gesture);
    }

    #[test]
    fn explicit_missing_config_path_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/veriflow.json")));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut config = FlowConfig::default();
        config.flow.environment = "production".to_string();
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.flow.environment, "production");
    }
}
