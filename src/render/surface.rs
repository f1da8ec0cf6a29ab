// src/render/surface.rs
// The drawing surface: an offscreen texture the kaleidoscope is rendered into.
// The texture persists between frames; it is only cleared when a background is drawn.
// The window shows it through a TextureReshaper and exports read it back through TextureCapture.

use nannou::prelude::*;
use nannou::window::Window;

use crate::services::{GpuFrameSource, TextureCapture};

pub struct Surface {
    texture: wgpu::Texture,
    draw_renderer: nannou::draw::Renderer,
    texture_reshaper: wgpu::TextureReshaper,
    capture: TextureCapture,
}

impl Surface {
    pub fn new(window: &Window, width: u32, height: u32, texture_samples: u32) -> Self {
        let device = window.device();

        let texture = wgpu::TextureBuilder::new()
            .size([width, height])
            // RENDER_ATTACHMENT for the `Draw` render pass, sampled by the reshapers.
            .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
            .sample_count(texture_samples)
            .format(wgpu::TextureFormat::Rgba16Float)
            .build(device);

        let draw_renderer = nannou::draw::RendererBuilder::new()
            .build_from_texture_descriptor(device, texture.descriptor());

        // Reshaper from the render texture to the window's swap chain
        let texture_view = texture.view().build();
        let texture_reshaper = wgpu::TextureReshaper::new(
            device,
            &texture_view,
            texture.sample_count(),
            texture.sample_type(),
            window.msaa_samples(),
            Frame::TEXTURE_FORMAT,
        );

        let capture = TextureCapture::new(device, &texture);

        tracing::info!(
            "Surface created: {}x{}, {} samples",
            width,
            height,
            texture_samples
        );

        Self {
            texture,
            draw_renderer,
            texture_reshaper,
            capture,
        }
    }

    /// Renders the draw's pending commands into the texture
    pub fn render(&mut self, window: &Window, draw: &Draw) {
        let device = window.device();
        let ce_desc = wgpu::CommandEncoderDescriptor {
            label: Some("Kaleidoscope renderer"),
        };
        let mut encoder = device.create_command_encoder(&ce_desc);
        let texture_view = self.texture.view().build();

        self.draw_renderer.encode_render_pass(
            device,
            &mut encoder,
            draw,
            1.0,
            self.texture.size(),
            &texture_view,
            None,
        );

        window.queue().submit(Some(encoder.finish()));
    }

    /// Resizes the texture onto the window frame
    pub fn present(&self, frame: &Frame) {
        let mut encoder = frame.command_encoder();
        self.texture_reshaper
            .encode_render_pass(frame.texture_view(), &mut encoder);
    }

    pub fn frame_source<'a>(&'a self, window: &'a Window) -> GpuFrameSource<'a> {
        self.capture.source(window.device(), window.queue())
    }
}
