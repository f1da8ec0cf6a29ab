// src/lib.rs

pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod utilities;
pub mod views;

pub use error::{KaleidoscopeError, Result};
