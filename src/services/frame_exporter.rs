// src/services/frame_exporter.rs
// Writes a captured frame to disk as a timestamped PNG.
// Capture is behind the FrameSource trait so saving works without a GPU.

use nannou::image::{codecs::png::PngEncoder, ColorType, ImageEncoder};
use std::{
    fs::{create_dir_all, File},
    io::BufWriter,
    path::{Path, PathBuf},
    time::SystemTime,
};

use crate::error::{KaleidoscopeError, Result};
use crate::utilities::export_filename;

const BYTES_PER_PIXEL: usize = 4;

/// Tightly packed RGBA8 pixels, top row first
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl CapturedFrame {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(KaleidoscopeError::InvalidFrame {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }
}

pub trait FrameSource {
    fn capture(&self) -> Result<CapturedFrame>;
}

pub struct FrameExporter {
    output_dir: PathBuf,
}

impl FrameExporter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Captures the current frame and saves it, named after the current time
    pub fn export(&self, source: &impl FrameSource) -> Result<PathBuf> {
        let frame = source.capture()?;
        self.save(&frame, SystemTime::now())
    }

    pub fn save(&self, frame: &CapturedFrame, time: SystemTime) -> Result<PathBuf> {
        create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(export_filename(time));
        write_png(&path, frame)?;
        Ok(path)
    }
}

pub fn write_png(path: &Path, frame: &CapturedFrame) -> Result<()> {
    let file = File::create(path)?;
    let mut buf_writer = BufWriter::new(file);
    PngEncoder::new(&mut buf_writer).write_image(
        &frame.data,
        frame.width,
        frame.height,
        ColorType::Rgba8,
    )?;
    Ok(())
}

/// Strips the per-row padding wgpu requires on texture-to-buffer copies
pub fn unpad_rows(
    padded: &[u8],
    width: u32,
    height: u32,
    padded_bytes_per_row: u32,
) -> Result<Vec<u8>> {
    let row_bytes = width as usize * BYTES_PER_PIXEL;
    let padded_row_bytes = padded_bytes_per_row as usize;
    let height = height as usize;

    // The last row doesn't need its padding present
    let required = match height {
        0 => 0,
        h => padded_row_bytes * (h - 1) + row_bytes,
    };
    if padded_row_bytes < row_bytes || padded.len() < required {
        return Err(KaleidoscopeError::InvalidFrame {
            expected: required,
            actual: padded.len(),
        });
    }

    let mut unpadded = Vec::with_capacity(row_bytes * height);
    for row in 0..height {
        let start = row * padded_row_bytes;
        unpadded.extend_from_slice(&padded[start..start + row_bytes]);
    }
    Ok(unpadded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn create_test_frame(width: u32, height: u32) -> CapturedFrame {
        let size = (width * height * 4) as usize;
        let data = (0..size).map(|i| (i % 255) as u8).collect();
        CapturedFrame::new(width, height, data).unwrap()
    }

    struct StaticSource(CapturedFrame);

    impl FrameSource for StaticSource {
        fn capture(&self) -> Result<CapturedFrame> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl FrameSource for FailingSource {
        fn capture(&self) -> Result<CapturedFrame> {
            Err(KaleidoscopeError::BufferMap("device lost".to_string()))
        }
    }

    #[test]
    fn test_frame_size_is_validated() {
        let result = CapturedFrame::new(2, 2, vec![0; 15]);
        assert!(matches!(
            result,
            Err(KaleidoscopeError::InvalidFrame {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_unpad_rows() {
        // 2x2 frame, rows padded from 8 to 12 bytes
        let padded: Vec<u8> = vec![
            1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0, //
            9, 10, 11, 12, 13, 14, 15, 16, 0, 0, 0, 0,
        ];
        let unpadded = unpad_rows(&padded, 2, 2, 12).unwrap();
        assert_eq!(unpadded, (1..=16).collect::<Vec<u8>>());

        // trailing padding on the last row is optional
        let unpadded = unpad_rows(&padded[..20], 2, 2, 12).unwrap();
        assert_eq!(unpadded.len(), 16);
    }

    #[test]
    fn test_unpad_rows_rejects_short_buffers() {
        assert!(unpad_rows(&[0; 10], 2, 2, 12).is_err());
        // row stride smaller than the row itself
        assert!(unpad_rows(&[0; 64], 4, 2, 8).is_err());
    }

    #[test]
    fn test_save_writes_timestamped_png() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FrameExporter::new(dir.path().join("nested"));
        let frame = create_test_frame(390, 844);
        let time = UNIX_EPOCH + Duration::from_millis(1_700_000_000_123);

        let path = exporter.save(&frame, time).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "kaleidoscope-2023-11-14T22-13-20-123Z.png"
        );
        assert!(std::fs::metadata(&path).unwrap().len() > 0);

        let decoded = nannou::image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.width(), 390);
        assert_eq!(decoded.height(), 844);
        assert_eq!(decoded.as_raw(), &frame.data);
    }

    #[test]
    fn test_export_uses_source() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FrameExporter::new(dir.path());

        let path = exporter
            .export(&StaticSource(create_test_frame(8, 4)))
            .unwrap();
        assert!(path.starts_with(dir.path()));
        assert!(path.exists());
    }

    #[test]
    fn test_export_propagates_capture_errors() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FrameExporter::new(dir.path());

        let result = exporter.export(&FailingSource);
        assert!(matches!(result, Err(KaleidoscopeError::BufferMap(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
