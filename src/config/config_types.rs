// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 390,
            height: 844,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    pub texture_samples: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { texture_samples: 4 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StyleConfig {
    pub stroke_weight: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self { stroke_weight: 3.0 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ExportConfig {
    pub output_directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_directory: "exports".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: Option<u64>, // fixed seed for reproducible sessions
}
