// src/services/frame_capture.rs
// TextureCapture reads the render texture back from the GPU.
// The texture is MSAA-resolved into an 8-bit sRGB texture, copied to a staging
// buffer, mapped synchronously and unpadded into a CapturedFrame.

use nannou::wgpu;
use std::sync::mpsc::channel;

use crate::error::{KaleidoscopeError, Result};
use crate::services::frame_exporter::{unpad_rows, CapturedFrame, FrameSource};

const RESOLVED_TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;
const BYTES_PER_PIXEL: u32 = 4;

pub struct TextureCapture {
    texture_reshaper: wgpu::TextureReshaper,
    resolved_texture: wgpu::Texture, // for MSAA resolution
    staging_buffer: wgpu::Buffer,
    bytes_per_row: u32,
}

impl TextureCapture {
    pub fn new(device: &wgpu::Device, render_texture: &wgpu::Texture) -> Self {
        let resolved_texture = wgpu::TextureBuilder::new()
            .size([render_texture.width(), render_texture.height()])
            .sample_count(1)
            .format(RESOLVED_TEXTURE_FORMAT)
            .usage(
                wgpu::TextureUsages::RENDER_ATTACHMENT
                    | wgpu::TextureUsages::COPY_SRC
                    | wgpu::TextureUsages::TEXTURE_BINDING,
            )
            .build(device);

        let texture_reshaper = wgpu::TextureReshaper::new(
            device,
            &render_texture.view().build(),
            render_texture.sample_count(), // source samples
            render_texture.sample_type(),
            1, // destination samples (no MSAA)
            RESOLVED_TEXTURE_FORMAT,
        );

        // wgpu requires 256-byte aligned rows for texture to buffer copies
        let bytes_per_row = wgpu::util::align_to(render_texture.width() * BYTES_PER_PIXEL, 256);
        let buffer_size = (bytes_per_row * render_texture.height()) as u64;
        let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Export Staging Buffer"),
            size: buffer_size,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        Self {
            texture_reshaper,
            resolved_texture,
            staging_buffer,
            bytes_per_row,
        }
    }

    pub fn capture(&self, device: &wgpu::Device, queue: &wgpu::Queue) -> Result<CapturedFrame> {
        let width = self.resolved_texture.width();
        let height = self.resolved_texture.height();

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Frame export"),
        });

        // Step 1: Use the reshaper to resolve MSAA
        self.texture_reshaper
            .encode_render_pass(&self.resolved_texture.view().build(), &mut encoder);

        // Step 2: Copy from resolved texture to staging buffer
        encoder.copy_texture_to_buffer(
            self.resolved_texture.as_image_copy(),
            wgpu::ImageCopyBuffer {
                buffer: &self.staging_buffer,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(self.bytes_per_row),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        queue.submit(Some(encoder.finish()));

        // Step 3: Map the buffer and wait for it
        let (sender, receiver) = channel();
        let slice = self.staging_buffer.slice(..);
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = sender.send(result);
        });
        device.poll(wgpu::Maintain::Wait);

        match receiver.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(KaleidoscopeError::BufferMap(e.to_string())),
            Err(e) => return Err(KaleidoscopeError::BufferMap(e.to_string())),
        }

        // Step 4: Unpad; the mapped view must drop before unmapping
        let data = {
            let mapped_memory = slice.get_mapped_range();
            unpad_rows(&mapped_memory, width, height, self.bytes_per_row)
        };
        self.staging_buffer.unmap();

        CapturedFrame::new(width, height, data?)
    }

    /// Binds the capture to a device and queue so it can be used as a FrameSource
    pub fn source<'a>(
        &'a self,
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
    ) -> GpuFrameSource<'a> {
        GpuFrameSource {
            capture: self,
            device,
            queue,
        }
    }
}

pub struct GpuFrameSource<'a> {
    capture: &'a TextureCapture,
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
}

impl FrameSource for GpuFrameSource<'_> {
    fn capture(&self) -> Result<CapturedFrame> {
        self.capture.capture(self.device, self.queue)
    }
}
