pub mod frame_capture;
pub mod frame_exporter;
pub mod pattern_generator;

pub use frame_capture::{GpuFrameSource, TextureCapture};
pub use frame_exporter::{CapturedFrame, FrameExporter, FrameSource};
pub use pattern_generator::PatternGenerator;
