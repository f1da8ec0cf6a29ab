// src/views/mod.rs

pub mod controls;
pub mod transform;

pub use controls::{ControlAction, Controls};
pub use transform::Transform2D;
