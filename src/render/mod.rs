// src/render/mod.rs
// The kaleidoscope rendering module and the GPU surface it draws into

pub mod kaleidoscope_renderer;
pub mod surface;

pub use kaleidoscope_renderer::{KaleidoscopeRenderer, RenderableSegment, SYMMETRY};
pub use surface::Surface;
