use crate::constants::NAV_SCROLL_OFFSET;

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub href: String, // Target section id, e.g. "#products"
    pub active: bool,
}

impl NavLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            active: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSection {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl PageSection {
    pub fn contains(&self, y: f32) -> bool {
        self.top <= y && self.top + self.height > y
    }
}

/// Marks the links whose section sits under the scroll anchor.
/// Links pointing at a section that does not exist keep their flag.
pub fn highlight(links: &mut [NavLink], sections: &[PageSection], scroll_y: f32) {
    let anchor = scroll_y + NAV_SCROLL_OFFSET;
    for link in links.iter_mut() {
        let target = link.href.trim_start_matches('#');
        if let Some(section) = sections.iter().find(|s| s.id == target) {
            link.active = section.contains(anchor);
        }
    }
}
