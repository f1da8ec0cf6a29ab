// src/models/pattern.rs
// One wedge of the kaleidoscope: an ordered polyline with a color per vertex

use nannou::prelude::*;

/// Color in HSB space using degrees for hue and percent for saturation and brightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsbColor {
    pub hue: f32,        // [0, 360)
    pub saturation: f32, // [0, 100]
    pub brightness: f32, // [0, 100]
}

impl HsbColor {
    pub fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation,
            brightness,
        }
    }

    /// Convert to nannou's normalized HSV color for drawing
    pub fn to_hsv(self) -> Hsv {
        hsv(
            self.hue / 360.0,
            self.saturation / 100.0,
            self.brightness / 100.0,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    points: Vec<Point2>,
    colors: Vec<HsbColor>,
}

impl Pattern {
    /// Builds a closed pattern from unordered vertices.
    ///
    /// Vertices are sorted by angular position around the origin, keeping each
    /// point paired with its color, then the first vertex is appended again to
    /// close the loop. An empty input stays empty.
    pub fn closed_from_vertices(mut vertices: Vec<(Point2, HsbColor)>) -> Self {
        vertices.sort_by(|(a, _), (b, _)| angular_position(*a).total_cmp(&angular_position(*b)));

        if let Some(first) = vertices.first().copied() {
            vertices.push(first);
        }

        let (points, colors) = vertices.into_iter().unzip();
        Self { points, colors }
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn colors(&self) -> &[HsbColor] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive (start, end, color) triples; the stroke color is the start vertex's.
    pub fn segments(&self) -> impl Iterator<Item = (Point2, Point2, HsbColor)> + '_ {
        self.points
            .windows(2)
            .zip(self.colors.iter())
            .map(|(pair, color)| (pair[0], pair[1], *color))
    }
}

/// Wraps a hue into [0, 360)
pub fn normalize_hue(hue: f32) -> f32 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Angle of a point around the origin in radians, (-PI, PI]
pub fn angular_position(point: Point2) -> f32 {
    point.y.atan2(point.x)
}
