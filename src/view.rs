//! Render-ready snapshot of a slider.
//!
//! A [`SliderView`] is rebuilt on every frame from the controller state. It
//! carries everything a renderer needs to paint the widget: which slide is
//! shown, the dot indicators, the play/pause affordance and the short labels
//! used for each control.

use crate::slide::Slide;
use crate::state::SliderState;

pub const PREVIOUS_LABEL: &str = "Previous slide";
pub const NEXT_LABEL: &str = "Next slide";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoPlayIcon {
    /// Autoplay is running; clicking pauses it.
    Pause,
    /// Autoplay is stopped; clicking starts it.
    Play,
}

impl AutoPlayIcon {
    pub fn label(self) -> &'static str {
        match self {
            AutoPlayIcon::Pause => "Pause slideshow",
            AutoPlayIcon::Play => "Play slideshow",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideView<'a> {
    pub index: usize,
    pub slide: &'a Slide,
    pub visible: bool,
    /// Target opacity; renderers animate towards it.
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotView {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderView<'a> {
    pub current_index: usize,
    pub is_auto_playing: bool,
    pub is_transitioning: bool,
    pub slides: Vec<SlideView<'a>>,
    pub dots: Vec<DotView>,
    pub autoplay: AutoPlayIcon,
    pub previous_label: &'static str,
    pub next_label: &'static str,
}

impl<'a> SliderView<'a> {
    pub fn new(slides: &'a [Slide], state: &SliderState) -> Self {
        let current = state.current_index;

        let slide_views = slides
            .iter()
            .enumerate()
            .map(|(index, slide)| {
                let visible = index == current;
                SlideView {
                    index,
                    slide,
                    visible,
                    opacity: if visible { 1.0 } else { 0.0 },
                }
            })
            .collect();

        let dots = (0..slides.len())
            .map(|index| DotView {
                index,
                active: index == current,
                label: format!("Go to slide {}", index + 1),
            })
            .collect();

        Self {
            current_index: current,
            is_auto_playing: state.is_auto_playing,
            is_transitioning: state.is_transitioning(),
            slides: slide_views,
            dots,
            autoplay: if state.is_auto_playing {
                AutoPlayIcon::Pause
            } else {
                AutoPlayIcon::Play
            },
            previous_label: PREVIOUS_LABEL,
            next_label: NEXT_LABEL,
        }
    }

    /// The slide on display, or `None` for a view built from a state whose
    /// index falls outside `slides`.
    pub fn current(&self) -> Option<&SlideView<'a>> {
        self.slides.get(self.current_index)
    }
}

#[cfg(test)]
mod tests {
    use super::{AutoPlayIcon, SliderView};
    use crate::slide::Slide;
    use crate::state::{SliderState, TransitionState};

    fn slides() -> Vec<Slide> {
        ["Mountain Majesty", "Tropical Paradise", "Urban Dreams"]
            .iter()
            .enumerate()
            .map(|(i, title)| Slide::new(format!("slide-{}.jpg", i + 1), *title, ""))
            .collect()
    }

    #[test]
    fn exactly_one_slide_and_dot_are_active() {
        let slides = slides();
        let state = SliderState {
            current_index: 1,
            is_auto_playing: true,
            transition: TransitionState::Locked,
        };
        let view = SliderView::new(&slides, &state);

        let visible: Vec<usize> = view
            .slides
            .iter()
            .filter(|s| s.visible)
            .map(|s| s.index)
            .collect();
        assert_eq!(visible, vec![1]);
        assert!(
            view.slides
                .iter()
                .filter(|s| !s.visible)
                .all(|s| s.opacity == 0.0)
        );

        let active: Vec<usize> = view
            .dots
            .iter()
            .filter(|d| d.active)
            .map(|d| d.index)
            .collect();
        assert_eq!(active, vec![1]);

        assert_eq!(
            view.current().map(|s| s.slide.title()),
            Some("Tropical Paradise")
        );
        assert!(view.is_transitioning);
    }

    #[test]
    fn out_of_range_state_has_no_current_slide() {
        let slides = slides();
        let state = SliderState {
            current_index: 3,
            ..SliderState::mounted()
        };
        let view = SliderView::new(&slides, &state);
        assert!(view.current().is_none());
        assert!(view.slides.iter().all(|s| !s.visible));
        assert!(view.dots.iter().all(|d| !d.active));

        let empty = SliderView::new(&[], &SliderState::mounted());
        assert!(empty.current().is_none());
        assert!(empty.dots.is_empty());
    }

    #[test]
    fn labels_follow_autoplay_state() {
        let slides = slides();
        let mut state = SliderState::mounted();
        assert_eq!(
            SliderView::new(&slides, &state).autoplay,
            AutoPlayIcon::Pause
        );

        state.is_auto_playing = false;
        let view = SliderView::new(&slides, &state);
        assert_eq!(view.autoplay, AutoPlayIcon::Play);
        assert_eq!(view.autoplay.label(), "Play slideshow");
        assert_eq!(view.dots[2].label, "Go to slide 3");
        assert_eq!(view.previous_label, "Previous slide");
    }
}
