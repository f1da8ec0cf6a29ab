use nannou::prelude::*;

/// Scale, then rotate (degrees, counter-clockwise), then translate.
/// A negative scale component mirrors across that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub translation: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }
}

impl Transform2D {
    pub fn rotation(degrees: f32) -> Self {
        Self {
            rotation: degrees,
            ..Default::default()
        }
    }

    // mirror the y axis before rotating, matching a scale(1, -1) applied inside a rotation
    pub fn mirrored_rotation(degrees: f32) -> Self {
        Self {
            scale: vec2(1.0, -1.0),
            rotation: degrees,
            ..Default::default()
        }
    }

    pub fn apply_to_point(&self, point: Point2) -> Point2 {
        // 1. Scale
        let scaled = point * self.scale;

        // 2. Rotate
        let rotation = self.rotation.to_radians();
        let cos_rot = rotation.cos();
        let sin_rot = rotation.sin();
        let rotated = pt2(
            scaled.x * cos_rot - scaled.y * sin_rot,
            scaled.x * sin_rot + scaled.y * cos_rot,
        );

        // 3. Translate
        rotated + self.translation
    }
}
