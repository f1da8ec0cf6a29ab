// src/error.rs
//
// Error types for config loading and image export

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KaleidoscopeError {
    #[error("Failed to parse config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding failed: {0}")]
    Image(#[from] nannou::image::ImageError),

    #[error("Buffer mapping failed: {0}")]
    BufferMap(String),

    #[error("Frame data has {actual} bytes, expected {expected}")]
    InvalidFrame { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, KaleidoscopeError>;
