use crate::slide::SliderView;
use crate::strip::Motion;

/// Snapshot of what the strip and the indicators should show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderFrame {
    pub index: Option<usize>,
    pub offset_percent: usize,
    pub motion: Motion,
    pub transition_enabled: bool,
    pub active: Vec<bool>,
}

impl SliderFrame {
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }
}

/// Adapter between the controller and whatever actually draws it.
pub trait RenderTarget {
    /// Called after a rebuild with one slide and one indicator per item.
    fn rebuild(&mut self, view: &SliderView);
    /// Called with the full state after every change.
    fn present(&mut self, frame: &SliderFrame);
}

/// Headless target that keeps everything it was given.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub views: Vec<SliderView>,
    pub frames: Vec<SliderFrame>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&SliderFrame> {
        self.frames.last()
    }

    pub fn last_view(&self) -> Option<&SliderView> {
        self.views.last()
    }
}

impl RenderTarget for RecordingTarget {
    fn rebuild(&mut self, view: &SliderView) {
        self.views.push(view.clone());
    }

    fn present(&mut self, frame: &SliderFrame) {
        self.frames.push(frame.clone());
    }
}
