// src/render/kaleidoscope_renderer.rs
// Replays a Pattern's wedge under N-fold rotational symmetry plus a y-axis mirror.
// Every frame is a full redraw; the renderer holds no state beyond its settings.

use nannou::lyon::tessellation::LineCap;
use nannou::prelude::*;

use crate::models::{HsbColor, Pattern};
use crate::views::Transform2D;

pub const SYMMETRY: usize = 6;
pub const DEFAULT_STROKE_WEIGHT: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderableSegment {
    pub start: Point2,
    pub end: Point2,
    pub color: HsbColor,
    pub stroke_weight: f32,
}

pub struct KaleidoscopeRenderer {
    symmetry: usize,
    stroke_weight: f32,
}

impl Default for KaleidoscopeRenderer {
    fn default() -> Self {
        Self::new(SYMMETRY, DEFAULT_STROKE_WEIGHT)
    }
}

impl KaleidoscopeRenderer {
    pub fn new(symmetry: usize, stroke_weight: f32) -> Self {
        Self {
            symmetry: symmetry.max(1),
            stroke_weight,
        }
    }

    pub fn symmetry(&self) -> usize {
        self.symmetry
    }

    pub fn wedge_angle(&self) -> f32 {
        360.0 / self.symmetry as f32
    }

    /// All segments drawn for one frame, in draw order.
    ///
    /// For each wedge segment and each rotational copy, the rotated segment is
    /// followed by its mirrored twin. Each copy gets a fresh transform, so
    /// nothing carries over between iterations.
    pub fn segments(&self, pattern: &Pattern) -> Vec<RenderableSegment> {
        let mut segments = Vec::with_capacity(pattern.len() * self.symmetry * 2);

        for (start, end, color) in pattern.segments() {
            for j in 0..self.symmetry {
                let angle = self.wedge_angle() * j as f32;
                for transform in [
                    Transform2D::rotation(angle),
                    Transform2D::mirrored_rotation(angle),
                ] {
                    segments.push(RenderableSegment {
                        start: transform.apply_to_point(start),
                        end: transform.apply_to_point(end),
                        color,
                        stroke_weight: self.stroke_weight,
                    });
                }
            }
        }
        segments
    }

    /// Draws the pattern centered on the draw's origin
    pub fn draw(&self, draw: &Draw, pattern: &Pattern) {
        for segment in self.segments(pattern) {
            draw.line()
                .points(segment.start, segment.end)
                .color(segment.color.to_hsv())
                .stroke_weight(segment.stroke_weight)
                .caps(LineCap::Round);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::PatternGenerator;

    const EPSILON: f32 = 1e-3;

    fn sample_pattern(seed: u64) -> Pattern {
        PatternGenerator::from_seed(seed, 390, 844).generate()
    }

    fn same_segment(a: &RenderableSegment, b: &RenderableSegment) -> bool {
        (a.start - b.start).length() < EPSILON
            && (a.end - b.end).length() < EPSILON
            && a.color == b.color
    }

    fn contains_segment(set: &[RenderableSegment], target: &RenderableSegment) -> bool {
        set.iter().any(|s| same_segment(s, target))
    }

    fn map_segment(
        segment: &RenderableSegment,
        f: impl Fn(Point2) -> Point2,
    ) -> RenderableSegment {
        RenderableSegment {
            start: f(segment.start),
            end: f(segment.end),
            ..*segment
        }
    }

    #[test]
    fn test_segment_count() {
        let renderer = KaleidoscopeRenderer::default();
        let pattern = sample_pattern(1);
        let segments = renderer.segments(&pattern);
        assert_eq!(segments.len(), (pattern.len() - 1) * SYMMETRY * 2);
        assert!(segments
            .iter()
            .all(|s| s.stroke_weight == DEFAULT_STROKE_WEIGHT));
    }

    #[test]
    fn test_short_patterns_draw_nothing() {
        let renderer = KaleidoscopeRenderer::default();
        assert!(renderer.segments(&Pattern::default()).is_empty());
    }

    #[test]
    fn test_first_copies_are_identity_and_mirror() {
        let renderer = KaleidoscopeRenderer::default();
        let pattern = sample_pattern(2);
        let segments = renderer.segments(&pattern);
        let (start, end, color) = pattern.segments().next().unwrap();

        assert!((segments[0].start - start).length() < EPSILON);
        assert!((segments[0].end - end).length() < EPSILON);
        assert_eq!(segments[0].color, color);

        assert!((segments[1].start - pt2(start.x, -start.y)).length() < EPSILON);
        assert!((segments[1].end - pt2(end.x, -end.y)).length() < EPSILON);
        assert_eq!(segments[1].color, color);
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = KaleidoscopeRenderer::default();
        let pattern = sample_pattern(3);
        let before = pattern.clone();

        let first = renderer.segments(&pattern);
        let second = renderer.segments(&pattern);

        assert_eq!(first, second);
        assert_eq!(pattern, before);
    }

    #[test]
    fn test_rotational_symmetry() {
        let renderer = KaleidoscopeRenderer::default();
        let segments = renderer.segments(&sample_pattern(4));
        let rotate = Transform2D::rotation(renderer.wedge_angle());

        for segment in &segments {
            let rotated = map_segment(segment, |p| rotate.apply_to_point(p));
            assert!(contains_segment(&segments, &rotated));
        }
    }

    #[test]
    fn test_mirror_symmetry() {
        let renderer = KaleidoscopeRenderer::default();
        let segments = renderer.segments(&sample_pattern(5));

        for segment in &segments {
            let mirrored = map_segment(segment, |p| pt2(p.x, -p.y));
            assert!(contains_segment(&segments, &mirrored));

            let mirrored = map_segment(segment, |p| pt2(-p.x, p.y));
            assert!(contains_segment(&segments, &mirrored));
        }
    }

    #[test]
    fn test_symmetry_is_clamped() {
        let renderer = KaleidoscopeRenderer::new(0, 1.0);
        assert_eq!(renderer.symmetry(), 1);
        assert_eq!(renderer.wedge_angle(), 360.0);
    }
}
