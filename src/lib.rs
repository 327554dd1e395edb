//! Image carousel controller.
//!
//! The crate models a slider that cycles through an ordered list of
//! [`Slide`]s: it advances on an autoplay timer, accepts manual navigation,
//! pauses while hovered, and refuses navigation while a slide change is
//! still animating. Painting is left to a [`Renderer`].

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod events;
pub mod renderer;
pub mod slide;
pub mod state;
pub mod timer;
pub mod view;

pub use config::SliderConfig;
pub use controller::{Navigation, SliderController};
pub use error::SliderError;
pub use events::SliderEvent;
pub use renderer::{Renderer, run};
pub use slide::Slide;
pub use state::{SliderState, TransitionState};
pub use view::{AutoPlayIcon, DotView, SlideView, SliderView};
