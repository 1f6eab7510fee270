use std::time::Duration;

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4500); // Period of the autoplay timer
pub const SLIDE_WIDTH_PERCENT: usize = 100;                          // One slide spans the whole strip viewport

pub const DEFAULT_LANGUAGE: &str = "id";                             // Used when the requested language is unknown
pub const TESTIMONIALS_KEY: &str = "testimonials.list";

pub const NAV_SCROLL_OFFSET: f32 = 100.0;                            // Probe distance below the top of the viewport

pub const RENDER_WIDTH: i32 = 1920;                                  // Width of the viewer render texture
pub const RENDER_HEIGHT: i32 = 1080;                                 // Height of the viewer render texture
pub const FPS: u32 = 60;                                             // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32;                        // Time per frame (seconds)
pub const STRIP_TRANSITION: f32 = 0.5;                               // Duration of an animated strip move (seconds)
