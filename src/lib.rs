//! Testimonial carousel and the content model of the site around it.
//!
//! - `slider`: the carousel controller (index, autoplay, hover pause, strip offset)
//! - `i18n`: translation dictionary and text bindings
//! - `sections`, `contact`, `nav`, `map`: the rest of the page as plain data

pub mod autoplay;
pub mod constants;
pub mod contact;
pub mod engine;
pub mod i18n;
pub mod logging;
pub mod map;
pub mod nav;
pub mod sections;
pub mod slide;
pub mod slider;
pub mod state;
pub mod strip;
