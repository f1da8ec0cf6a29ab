// src/views/controls.rs
//
// On-screen Generate and Download buttons.
// Drawn over the window in `view`, never into the render texture, so they
// don't appear in exported images.

use nannou::prelude::*;

const BUTTON_HEIGHT: f32 = 44.0;
const MARGIN: f32 = 16.0;
const FONT_SIZE: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Generate,
    Download,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub label: &'static str,
    pub center: Point2,
    pub size: Vec2,
    pub enabled: bool,
}

impl Button {
    pub fn contains(&self, point: Point2) -> bool {
        let offset = (point - self.center).abs();
        let half = self.size / 2.0;
        offset.x <= half.x && offset.y <= half.y
    }
}

pub struct Controls {
    generate: Button,
    download: Button,
}

impl Controls {
    /// Lays both buttons side by side along the bottom of a window of the given size
    pub fn new(window_width: f32, window_height: f32) -> Self {
        let width = (window_width - 3.0 * MARGIN) / 2.0;
        let y = -window_height / 2.0 + MARGIN + BUTTON_HEIGHT / 2.0;
        let size = vec2(width, BUTTON_HEIGHT);

        Self {
            generate: Button {
                label: "Generate New Pattern",
                center: pt2(-(width + MARGIN) / 2.0, y),
                size,
                enabled: true,
            },
            download: Button {
                label: "Download",
                center: pt2((width + MARGIN) / 2.0, y),
                size,
                enabled: false,
            },
        }
    }

    pub fn set_download_enabled(&mut self, enabled: bool) {
        self.download.enabled = enabled;
    }

    pub fn download_enabled(&self) -> bool {
        self.download.enabled
    }

    /// The action under a point in window coordinates, if its button is enabled
    pub fn hit(&self, point: Point2) -> Option<ControlAction> {
        [
            (&self.generate, ControlAction::Generate),
            (&self.download, ControlAction::Download),
        ]
        .into_iter()
        .find(|(button, _)| button.enabled && button.contains(point))
        .map(|(_, action)| action)
    }

    pub fn draw(&self, draw: &Draw) {
        draw_button(draw, &self.generate, rgb(0.58, 0.2, 0.92));
        draw_button(draw, &self.download, rgb(0.09, 0.64, 0.29));
    }
}

fn draw_button(draw: &Draw, button: &Button, color: Rgb) {
    let (fill, text_color) = if button.enabled {
        (color, rgb(1.0, 1.0, 1.0))
    } else {
        (rgb(0.29, 0.33, 0.39), rgb(0.61, 0.64, 0.69))
    };

    draw.rect()
        .xy(button.center)
        .wh(button.size)
        .color(fill);
    draw.text(button.label)
        .xy(button.center)
        .wh(button.size)
        .font_size(FONT_SIZE)
        .color(text_color);
}
