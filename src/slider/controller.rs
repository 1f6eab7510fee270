use std::time::Duration;
use tracing::{debug, info, trace, warn};

use crate::autoplay::{Autoplay, TimerId};
use crate::engine::{RenderTarget, SliderFrame};
use crate::slide::{layout, mark_active, Indicator, Slide, SlideItem, SliderView};
use crate::slider::settings::SliderSettings;
use crate::state::SliderState;
use crate::strip::{Motion, Strip};

pub struct SliderController {
    slides: Vec<Slide>,
    indicators: Vec<Indicator>,

    current_slide_index: usize,
    strip: Strip,
    autoplay: Autoplay,
    hovered: bool,

    // Pending work for the next `sync`
    needs_rebuild: bool,
    needs_present: bool,
}

impl SliderController {
    pub fn new(settings: SliderSettings) -> Self {
        Self {
            slides: Vec::new(),
            indicators: Vec::new(),
            current_slide_index: 0,
            strip: Strip::new(),
            autoplay: Autoplay::new(settings.autoplay_interval),
            hovered: false,
            needs_rebuild: true,
            needs_present: true,
        }
    }

    /// Replaces every slide, indicator and timer with ones built from `items`.
    pub fn render(&mut self, items: Vec<SlideItem>) {
        let view = layout(&items, 0);
        self.slides = view.slides;
        self.indicators = view.indicators;
        self.current_slide_index = 0;

        self.autoplay.cancel();
        if !self.is_empty() {
            self.autoplay.start();
        }

        self.strip.slide_to(0);
        self.needs_rebuild = true;
        self.needs_present = true;
        info!(slides = self.len(), "slider rebuilt");
    }

    // --- Navigation ---

    pub fn go_to(&mut self, index: usize) {
        if self.is_empty() {
            trace!(index, "go_to ignored, slider is empty");
            return;
        }
        if index >= self.len() {
            warn!(index, slides = self.len(), "go_to ignored, index out of range");
            return;
        }
        self.current_slide_index = index;
        self.strip.jump_to(index);
        self.refresh_indicators();
        debug!(index, "jumped to slide");
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            trace!("next ignored, slider is empty");
            return;
        }
        self.current_slide_index = (self.current_slide_index + 1) % self.len();
        self.slide_to_current();
    }

    pub fn prev(&mut self) {
        if self.is_empty() {
            trace!("prev ignored, slider is empty");
            return;
        }
        let n = self.len();
        self.current_slide_index = (self.current_slide_index + n - 1) % n;
        self.slide_to_current();
    }

    fn slide_to_current(&mut self) {
        self.strip.slide_to(self.current_slide_index);
        self.refresh_indicators();
        debug!(index = self.current_slide_index, "slid to slide");
    }

    fn refresh_indicators(&mut self) {
        mark_active(&mut self.indicators, self.current_slide_index);
        self.needs_present = true;
    }

    // --- Event handlers ---

    pub fn on_indicator_activated(&mut self, position: usize) {
        self.go_to(position);
    }

    pub fn on_next(&mut self) {
        self.next();
    }

    pub fn on_prev(&mut self) {
        self.prev();
    }

    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
        self.autoplay.cancel();
    }

    pub fn on_pointer_leave(&mut self) {
        self.hovered = false;
        self.autoplay.cancel();
        if !self.is_empty() {
            self.autoplay.start();
        }
    }

    pub fn on_timer_tick(&mut self) {
        self.next();
    }

    /// One rendered frame has passed.
    pub fn on_frame(&mut self) {
        if self.strip.on_frame() {
            self.needs_present = true;
        }
    }

    /// Moves the autoplay clock forward, ticking once per elapsed period.
    pub fn advance(&mut self, dt: Duration) {
        let fired = self.autoplay.advance(dt);
        for _ in 0..fired {
            self.on_timer_tick();
        }
    }

    // --- Output ---

    pub fn frame(&self) -> SliderFrame {
        SliderFrame {
            index: self.state().index(),
            offset_percent: self.strip.offset_percent(),
            motion: self.strip.motion(),
            transition_enabled: self.strip.transition_enabled(),
            active: self.indicators.iter().map(|d| d.active).collect(),
        }
    }

    pub fn view(&self) -> SliderView {
        SliderView {
            slides: self.slides.clone(),
            indicators: self.indicators.clone(),
            offset_percent: self.strip.offset_percent(),
        }
    }

    /// Pushes whatever changed since the last call to `target`.
    pub fn sync(&mut self, target: &mut impl RenderTarget) {
        if self.needs_rebuild {
            target.rebuild(&self.view());
            self.needs_rebuild = false;
        }
        if self.needs_present {
            target.present(&self.frame());
            self.needs_present = false;
        }
    }

    // --- Accessors ---

    pub fn state(&self) -> SliderState {
        SliderState::from_parts(self.len(), self.current_slide_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_slide_index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Time until the next autoplay tick; `None` while paused or empty.
    pub fn autoplay_remaining(&self) -> Option<Duration> {
        self.autoplay.remaining()
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn offset_percent(&self) -> usize {
        self.strip.offset_percent()
    }

    pub fn motion(&self) -> Motion {
        self.strip.motion()
    }

    pub fn transition_enabled(&self) -> bool {
        self.strip.transition_enabled()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.autoplay.current()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

impl Default for SliderController {
    fn default() -> Self {
        Self::new(SliderSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::AUTOPLAY_INTERVAL;
    use crate::engine::RecordingTarget;

    fn items(n: usize) -> Vec<SlideItem> {
        (0..n)
            .map(|i| SlideItem::new(format!("quote {i}"), format!("author {i}"), "Indonesia"))
            .collect()
    }

    fn slider(n: usize) -> SliderController {
        let mut slider = SliderController::default();
        slider.render(items(n));
        slider
    }

    fn active_positions(slider: &SliderController) -> Vec<usize> {
        slider
            .indicators()
            .iter()
            .filter(|d| d.active)
            .map(|d| d.position)
            .collect()
    }

    #[test]
    fn render_starts_at_first_slide() {
        let slider = slider(3);
        assert_eq!(slider.state(), SliderState::Idle(0));
        assert_eq!(active_positions(&slider), vec![0]);
        assert_eq!(slider.offset_percent(), 0);
        assert!(slider.is_autoplaying());
    }

    #[test]
    fn render_replaces_previous_timer_and_indicators() {
        let mut slider = slider(5);
        slider.next();
        slider.next();
        let first_timer = slider.timer();

        slider.render(items(2));
        assert_eq!(slider.current_index(), 0);
        assert_eq!(slider.indicators().len(), 2);
        assert_eq!(active_positions(&slider), vec![0]);
        assert_ne!(slider.timer(), first_timer);
        assert!(slider.is_autoplaying());
    }

    #[test]
    fn render_empty_stops_autoplay() {
        let mut slider = slider(3);
        slider.render(Vec::new());
        assert_eq!(slider.state(), SliderState::Empty);
        assert!(!slider.is_autoplaying());
    }

    #[test]
    fn empty_slider_ignores_everything() {
        let mut slider = slider(0);
        let before = slider.frame();

        slider.next();
        slider.prev();
        slider.go_to(0);
        slider.on_pointer_enter();
        slider.on_pointer_leave();
        slider.on_timer_tick();
        slider.advance(AUTOPLAY_INTERVAL * 3);

        assert_eq!(slider.frame(), before);
        assert_eq!(slider.state(), SliderState::Empty);
        assert!(!slider.is_autoplaying());
    }

    #[test]
    fn next_wraps_after_last() {
        let mut slider = slider(4);
        slider.next();
        slider.next();
        slider.next();
        assert_eq!(slider.current_index(), 3);
        slider.next();
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut slider = slider(4);
        slider.prev();
        assert_eq!(slider.current_index(), 3);
        assert_eq!(slider.offset_percent(), 300);
        assert_eq!(slider.motion(), Motion::Animated);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut slider = slider(1);
        slider.next();
        assert_eq!(slider.current_index(), 0);
        slider.prev();
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn go_to_jumps_without_transition_for_one_frame() {
        let mut slider = slider(5);
        slider.on_indicator_activated(3);

        assert_eq!(slider.state(), SliderState::Idle(3));
        assert_eq!(active_positions(&slider), vec![3]);
        assert_eq!(slider.offset_percent(), 300);
        assert_eq!(slider.motion(), Motion::Instant);
        assert!(!slider.transition_enabled());

        slider.on_frame();
        assert!(slider.transition_enabled());
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut slider = slider(3);
        slider.go_to(1);
        slider.go_to(7);
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn autoplay_advances_animated() {
        let mut slider = slider(3);
        slider.advance(AUTOPLAY_INTERVAL);
        assert_eq!(slider.current_index(), 1);
        assert_eq!(slider.motion(), Motion::Animated);
        assert!(slider.transition_enabled());
    }

    #[test]
    fn go_to_does_not_reset_autoplay_phase() {
        let mut slider = slider(4);
        slider.advance(Duration::from_millis(4000));
        slider.go_to(2);
        slider.advance(Duration::from_millis(500));
        assert_eq!(slider.current_index(), 3);
    }

    #[test]
    fn hover_suspends_autoplay() {
        let mut slider = slider(3);
        slider.on_pointer_enter();
        slider.advance(AUTOPLAY_INTERVAL * 2);
        assert_eq!(slider.current_index(), 0);
        assert!(!slider.is_autoplaying());
        assert!(slider.is_hovered());
    }

    #[test]
    fn remaining_time_counts_down_and_pauses_on_hover() {
        let mut slider = slider(3);
        assert_eq!(slider.autoplay_remaining(), Some(AUTOPLAY_INTERVAL));
        slider.advance(Duration::from_millis(1500));
        assert_eq!(slider.autoplay_remaining(), Some(Duration::from_millis(3000)));

        slider.on_pointer_enter();
        assert_eq!(slider.autoplay_remaining(), None);
        slider.on_pointer_leave();
        assert_eq!(slider.autoplay_remaining(), Some(AUTOPLAY_INTERVAL));
    }

    #[test]
    fn hover_does_not_block_manual_navigation() {
        let mut slider = slider(3);
        slider.on_pointer_enter();
        slider.on_next();
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn leave_restarts_with_fresh_phase() {
        let mut slider = slider(5);
        slider.advance(Duration::from_millis(4000));
        slider.on_pointer_enter();
        slider.on_pointer_leave();

        slider.advance(Duration::from_millis(4000));
        assert_eq!(slider.current_index(), 0);
        slider.advance(Duration::from_millis(500));
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn repeated_leave_keeps_single_timer() {
        let mut slider = slider(10);
        slider.on_pointer_leave();
        slider.on_pointer_leave();
        slider.on_pointer_leave();

        slider.advance(AUTOPLAY_INTERVAL * 2);
        assert_eq!(slider.current_index(), 2);
    }

    #[test]
    fn sync_rebuilds_once_and_presents_changes() {
        let mut slider = slider(3);
        let mut target = RecordingTarget::new();

        slider.sync(&mut target);
        assert_eq!(target.views.len(), 1);
        assert_eq!(target.frames.len(), 1);

        slider.sync(&mut target);
        assert_eq!(target.frames.len(), 1);

        slider.on_next();
        slider.sync(&mut target);
        assert_eq!(target.views.len(), 1);
        let frame = target.last_frame().unwrap();
        assert_eq!(frame.index, Some(1));
        assert_eq!(frame.offset_percent, 100);
        assert_eq!(frame.active, vec![false, true, false]);
    }

    #[test]
    fn sync_presents_transition_restore() {
        let mut slider = slider(3);
        let mut target = RecordingTarget::new();
        slider.go_to(2);
        slider.sync(&mut target);
        assert!(!target.last_frame().unwrap().transition_enabled);

        slider.on_frame();
        slider.sync(&mut target);
        assert!(target.last_frame().unwrap().transition_enabled);
    }
}
