use crate::slide::strip_offset;

/// How an offset change should be shown.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Motion {
    Animated, // Slide smoothly to the new offset
    Instant,  // Jump without any transition
}

/// The shared strip holding all slides end to end.
///
/// An instant jump disables the transition for one frame; the next call to
/// `on_frame` turns it back on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    offset_percent: usize,
    motion: Motion,
    transition_enabled: bool,
    restore_pending: bool,
}

impl Strip {
    pub fn new() -> Self {
        Self {
            offset_percent: 0,
            motion: Motion::Instant,
            transition_enabled: true,
            restore_pending: false,
        }
    }

    pub fn slide_to(&mut self, index: usize) {
        self.offset_percent = strip_offset(index);
        self.motion = Motion::Animated;
    }

    pub fn jump_to(&mut self, index: usize) {
        self.transition_enabled = false;
        self.restore_pending = true;
        self.offset_percent = strip_offset(index);
        self.motion = Motion::Instant;
    }

    /// Returns true when this frame re-enabled the transition.
    pub fn on_frame(&mut self) -> bool {
        if !self.restore_pending {
            return false;
        }
        self.restore_pending = false;
        self.transition_enabled = true;
        true
    }

    pub fn offset_percent(&self) -> usize {
        self.offset_percent
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }
}

impl Default for Strip {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_disables_transition_for_one_frame() {
        let mut strip = Strip::new();
        strip.jump_to(3);
        assert_eq!(strip.offset_percent(), 300);
        assert_eq!(strip.motion(), Motion::Instant);
        assert!(!strip.transition_enabled());

        assert!(strip.on_frame());
        assert!(strip.transition_enabled());
        assert!(!strip.on_frame());
    }

    #[test]
    fn slide_keeps_transition() {
        let mut strip = Strip::new();
        strip.slide_to(1);
        assert_eq!(strip.offset_percent(), 100);
        assert_eq!(strip.motion(), Motion::Animated);
        assert!(strip.transition_enabled());
        assert!(!strip.on_frame());
    }

    #[test]
    fn slide_during_pending_restore_leaves_it_pending() {
        let mut strip = Strip::new();
        strip.jump_to(2);
        strip.slide_to(3);
        assert!(!strip.transition_enabled());
        assert!(strip.on_frame());
        assert!(strip.transition_enabled());
    }
}
