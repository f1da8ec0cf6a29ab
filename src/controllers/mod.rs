pub mod kaleidoscope_controller;

pub use kaleidoscope_controller::Kaleidoscope;
