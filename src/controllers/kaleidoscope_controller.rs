// src/controllers/kaleidoscope_controller.rs
/// Kaleidoscope owns the single current Pattern and the generator that replaces it.
/// Tracks whether the surface needs clearing and whether export is allowed.
use rand::rngs::StdRng;
use rand::Rng;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::Pattern;
use crate::services::{FrameExporter, FrameSource, PatternGenerator};

pub struct Kaleidoscope<R: Rng = StdRng> {
    generator: PatternGenerator<R>,
    pattern: Pattern,
    // set by an explicit Generate, not by the pattern created at startup
    has_pattern: bool,
    clear_requested: bool,
}

impl<R: Rng> Kaleidoscope<R> {
    /// Generates the startup pattern. Export stays disabled until the first Generate.
    pub fn new(mut generator: PatternGenerator<R>) -> Self {
        let pattern = generator.generate();
        Self {
            generator,
            pattern,
            has_pattern: false,
            clear_requested: true,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn generate_new_pattern(&mut self) {
        self.pattern = self.generator.generate();
        self.clear_requested = true;
        self.has_pattern = true;
        tracing::info!("New pattern with {} vertices", self.pattern.len());
    }

    pub fn can_export(&self) -> bool {
        self.has_pattern
    }

    /// Returns true once after each new pattern; the caller clears the surface
    pub fn take_clear_request(&mut self) -> bool {
        std::mem::take(&mut self.clear_requested)
    }

    /// Saves the current frame, or does nothing if no pattern has been generated yet
    pub fn download(
        &self,
        source: &impl FrameSource,
        exporter: &FrameExporter,
    ) -> Result<Option<PathBuf>> {
        if !self.can_export() {
            tracing::debug!("Download ignored: no pattern generated yet");
            return Ok(None);
        }

        let path = exporter.export(source)?;
        tracing::info!("Saved {}", path.display());
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KaleidoscopeError;
    use crate::render::KaleidoscopeRenderer;
    use crate::services::CapturedFrame;
    use std::cell::Cell;

    struct CountingSource {
        captures: Cell<usize>,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                captures: Cell::new(0),
            }
        }
    }

    impl FrameSource for CountingSource {
        fn capture(&self) -> std::result::Result<CapturedFrame, KaleidoscopeError> {
            self.captures.set(self.captures.get() + 1);
            CapturedFrame::new(4, 4, vec![255; 4 * 4 * 4])
        }
    }

    fn kaleidoscope(seed: u64) -> Kaleidoscope {
        Kaleidoscope::new(PatternGenerator::from_seed(seed, 390, 844))
    }

    #[test]
    fn test_startup_state() {
        let mut k = kaleidoscope(1);

        assert!(!k.pattern().is_empty());
        assert!(!KaleidoscopeRenderer::default()
            .segments(k.pattern())
            .is_empty());
        assert!(!k.can_export(), "Download should start disabled");

        assert!(k.take_clear_request(), "Surface starts black");
        assert!(!k.take_clear_request());
    }

    #[test]
    fn test_generate_replaces_pattern() {
        let mut k = kaleidoscope(2);
        k.take_clear_request();
        let before = k.pattern().clone();

        k.generate_new_pattern();

        assert_ne!(k.pattern(), &before);
        assert!(k.take_clear_request());
        assert!(k.can_export());
    }

    #[test]
    fn test_download_before_generate_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FrameExporter::new(dir.path());
        let source = CountingSource::new();
        let k = kaleidoscope(3);

        let result = k.download(&source, &exporter).unwrap();

        assert!(result.is_none());
        assert_eq!(source.captures.get(), 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_download_after_generate_saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FrameExporter::new(dir.path());
        let source = CountingSource::new();
        let mut k = kaleidoscope(4);

        k.generate_new_pattern();
        let path = k.download(&source, &exporter).unwrap().unwrap();

        assert_eq!(source.captures.get(), 1);
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("kaleidoscope-"));
        assert!(name.ends_with(".png"));
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
