use serde::{Deserialize, Serialize};
use crate::constants::*;

/// One testimonial as it appears in the translation dictionary.
/// Missing fields read as empty so one incomplete entry keeps its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideItem {
    pub quote: String,
    pub name: String,
    pub country: String,
}

impl Default for SlideItem {
    fn default() -> Self {
        Self::new("", "", "")
    }
}

impl SlideItem {
    pub fn new(quote: impl Into<String>, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            name: name.into(),
            country: country.into(),
        }
    }
}

/// Visual descriptor for one slide in the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub quote: String,
    pub attribution: String,
}

impl Slide {
    pub fn from_item(item: &SlideItem) -> Self {
        Self {
            quote: format!("\"{}\"", item.quote),
            attribution: format!("— {}, {}", item.name, item.country),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub position: usize,
    pub label: String,
    pub active: bool,
}

impl Indicator {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            label: format!("Go to slide {}", position + 1),
            active: false,
        }
    }
}

/// Everything a render target needs to draw the slider at one index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderView {
    pub slides: Vec<Slide>,
    pub indicators: Vec<Indicator>,
    pub offset_percent: usize,
}

/// Maps (items, current index) to slides, indicator flags and strip offset.
pub fn layout(items: &[SlideItem], current: usize) -> SliderView {
    let slides = items.iter().map(Slide::from_item).collect();
    let mut indicators: Vec<Indicator> = (0..items.len()).map(Indicator::new).collect();
    mark_active(&mut indicators, current);

    SliderView {
        slides,
        indicators,
        offset_percent: strip_offset(current),
    }
}

/// Recomputes every indicator flag against `current`.
pub fn mark_active(indicators: &mut [Indicator], current: usize) {
    for indicator in indicators.iter_mut() {
        indicator.active = indicator.position == current;
    }
}

pub fn strip_offset(index: usize) -> usize {
    index * SLIDE_WIDTH_PERCENT
}
