pub mod timestamp;

pub use timestamp::{export_filename, iso8601_utc};
