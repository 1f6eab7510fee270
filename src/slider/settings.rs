use std::time::Duration;
use crate::constants::AUTOPLAY_INTERVAL;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliderSettings {
    /// Period of the autoplay timer. A zero period never fires.
    pub autoplay_interval: Duration,
}

impl SliderSettings {
    pub fn with_interval_ms(ms: u64) -> Self {
        Self {
            autoplay_interval: Duration::from_millis(ms),
        }
    }
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            autoplay_interval: AUTOPLAY_INTERVAL,
        }
    }
}
