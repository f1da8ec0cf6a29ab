// src/services/pattern_generator.rs
// Produces randomized kaleidoscope wedges.
// Randomness comes from an injected rng so patterns are reproducible from a seed.

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{HsbColor, Pattern};

const MIN_POINTS: usize = 10;
const MAX_POINTS: usize = 20; // exclusive
const MIN_RADIUS: f32 = 20.0;
const HUE_SPREAD: f32 = 30.0;
const MIN_SATURATION: f32 = 70.0;
const MIN_BRIGHTNESS: f32 = 70.0;

pub struct PatternGenerator<R: Rng = StdRng> {
    rng: R,
    max_radius: f32,
}

impl PatternGenerator<StdRng> {
    pub fn from_seed(seed: u64, canvas_width: u32, canvas_height: u32) -> Self {
        Self::new(StdRng::seed_from_u64(seed), canvas_width, canvas_height)
    }

    pub fn from_entropy(canvas_width: u32, canvas_height: u32) -> Self {
        Self::new(StdRng::from_entropy(), canvas_width, canvas_height)
    }
}

impl<R: Rng> PatternGenerator<R> {
    pub fn new(rng: R, canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            rng,
            max_radius: max_radius(canvas_width, canvas_height),
        }
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    pub fn generate(&mut self) -> Pattern {
        let num_points = self.rng.gen_range(MIN_POINTS..MAX_POINTS);
        let base_hue: f32 = self.rng.gen_range(0.0..360.0);

        let vertices = (0..num_points)
            .map(|_| {
                let point = self.random_point();
                let color = self.random_color(base_hue);
                (point, color)
            })
            .collect();

        let pattern = Pattern::closed_from_vertices(vertices);
        tracing::debug!(
            "Generated pattern: {} points, base hue {:.1}",
            num_points,
            base_hue
        );
        pattern
    }

    fn random_point(&mut self) -> Point2 {
        // A canvas too small for the minimum radius collapses to a ring at MIN_RADIUS
        let radius = if self.max_radius > MIN_RADIUS {
            self.rng.gen_range(MIN_RADIUS..self.max_radius)
        } else {
            MIN_RADIUS
        };
        let angle = self.rng.gen_range(0.0f32..360.0).to_radians();
        pt2(radius * angle.cos(), radius * angle.sin())
    }

    fn random_color(&mut self, base_hue: f32) -> HsbColor {
        let hue = base_hue + self.rng.gen_range(-HUE_SPREAD..HUE_SPREAD);
        let saturation = self.rng.gen_range(MIN_SATURATION..=100.0);
        let brightness = self.rng.gen_range(MIN_BRIGHTNESS..=100.0);
        HsbColor::new(hue, saturation, brightness)
    }
}

/// A third of the smaller of the canvas width and half its height
pub fn max_radius(canvas_width: u32, canvas_height: u32) -> f32 {
    (canvas_width as f32).min(canvas_height as f32 / 2.0) / 3.0
}
