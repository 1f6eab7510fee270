//! Testimonial slider: one controller per slider instance, driven by explicit
//! event handlers and an explicit clock.

pub mod controller;
pub mod settings;

pub use controller::SliderController;
pub use settings::SliderSettings;
