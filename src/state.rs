#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SliderState {
    Empty,       // No slides loaded, nothing to navigate
    Idle(usize), // Showing the slide at this index
}

impl SliderState {
    pub fn from_parts(len: usize, current: usize) -> Self {
        if len == 0 {
            SliderState::Empty
        } else {
            SliderState::Idle(current)
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            SliderState::Empty => None,
            SliderState::Idle(i) => Some(*i),
        }
    }
}
