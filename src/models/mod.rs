pub mod pattern;

pub use pattern::{angular_position, normalize_hue, HsbColor, Pattern};
