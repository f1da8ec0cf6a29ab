// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;
use crate::error::Result;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub rendering: RenderConfig,
    pub style: StyleConfig,
    pub export: ExportConfig,
    pub generator: GeneratorConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::exe_dir().map(|dir| dir.join("config.toml")) {
            if exe_config.exists() {
                return Self::load_from_path(&exe_config);
            }
        }

        // Fallback to the current working directory, then to built-in defaults
        let cwd_config = Path::new("config.toml");
        if cwd_config.exists() {
            return Self::load_from_path(cwd_config);
        }

        tracing::info!("No config.toml found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn resolve_output_dir(&self) -> PathBuf {
        let output_dir = Path::new(&self.export.output_directory);
        if output_dir.is_absolute() {
            return output_dir.to_path_buf();
        }

        // If path is relative, resolve it relative to the executable or working directory
        match Self::exe_dir() {
            Some(exe_dir) => exe_dir.join(output_dir),
            None => output_dir.to_path_buf(),
        }
    }

    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }
}
