#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransitionState {
    Idle,   // Navigation requests are accepted
    Locked, // A slide change is animating; navigation is ignored
}

/// Mutable slider state. Only the controller writes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    pub current_index: usize,
    pub is_auto_playing: bool,
    pub transition: TransitionState,
}

impl SliderState {
    /// State of a freshly mounted slider.
    pub fn mounted() -> Self {
        Self {
            current_index: 0,
            is_auto_playing: true,
            transition: TransitionState::Idle,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition == TransitionState::Locked
    }
}
