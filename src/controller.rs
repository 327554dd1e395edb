//! The slider state machine.
//!
//! [`SliderController`] owns the slide list, the [`SliderState`] and the
//! timers that drive it. Hosts feed it user intents ([`SliderEvent`]) and
//! elapsed frame time ([`SliderController::update`]); renderers read the
//! resulting [`SliderView`].

use std::time::Duration;

use tracing::{debug, trace};

use crate::config::SliderConfig;
use crate::error::SliderError;
use crate::events::SliderEvent;
use crate::slide::Slide;
use crate::state::{SliderState, TransitionState};
use crate::timer::{TimerHandle, TimerQueue};
use crate::view::SliderView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    AutoPlayTick,
    Unlock,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: usize, to: usize },
    /// The slider was mid-transition; nothing changed.
    Ignored,
}

#[derive(Debug)]
pub struct SliderController {
    slides: Vec<Slide>,
    config: SliderConfig,
    state: SliderState,
    timers: TimerQueue<TimerEvent>,
    autoplay_timer: Option<TimerHandle>,
    unlock_timer: Option<TimerHandle>,
}

impl SliderController {
    /// Mounts a slider on the first slide with autoplay running.
    pub fn new(slides: Vec<Slide>, config: SliderConfig) -> Result<Self, SliderError> {
        if slides.is_empty() {
            return Err(SliderError::EmptySlides);
        }

        let mut controller = Self {
            slides,
            config,
            state: SliderState::mounted(),
            timers: TimerQueue::new(),
            autoplay_timer: None,
            unlock_timer: None,
        };
        controller.rearm_autoplay();
        debug!(
            slides = controller.slides.len(),
            interval = ?config.autoplay_interval(),
            "slider mounted"
        );
        Ok(controller)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.state.current_index]
    }

    pub fn is_auto_playing(&self) -> bool {
        self.state.is_auto_playing
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    /// Number of timers still scheduled (autoplay loop and transition lock).
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Time elapsed since the slider was mounted, as seen by its timers.
    pub fn clock(&self) -> Duration {
        self.timers.now()
    }

    /// Jumps to `index`. Ignored while a transition is in progress.
    pub fn go_to(&mut self, index: usize) -> Result<Navigation, SliderError> {
        if index >= self.slides.len() {
            return Err(SliderError::IndexOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        Ok(self.navigate(index))
    }

    pub fn go_to_previous(&mut self) -> Navigation {
        let index = if self.state.current_index == 0 {
            self.slides.len() - 1
        } else {
            self.state.current_index - 1
        };
        self.navigate(index)
    }

    pub fn go_to_next(&mut self) -> Navigation {
        self.navigate(self.next_index())
    }

    pub fn toggle_autoplay(&mut self) {
        self.set_auto_playing(!self.state.is_auto_playing);
    }

    /// Pointer entered the slider.
    ///
    /// Shares the flag with [`toggle_autoplay`](Self::toggle_autoplay), so a
    /// later [`resume_autoplay`](Self::resume_autoplay) also undoes a manual
    /// pause.
    pub fn suspend_autoplay(&mut self) {
        self.set_auto_playing(false);
    }

    /// Pointer left the slider.
    pub fn resume_autoplay(&mut self) {
        self.set_auto_playing(true);
    }

    /// Changes the autoplay period. The countdown restarts from now.
    pub fn set_autoplay_interval(&mut self, interval: Duration) -> Result<(), SliderError> {
        if interval == self.config.autoplay_interval() {
            return Ok(());
        }
        self.config = self.config.with_autoplay_interval(interval)?;
        debug!(interval = ?interval, "autoplay interval changed");
        self.rearm_autoplay();
        Ok(())
    }

    /// Dispatches a renderer-forwarded user intent.
    pub fn handle(&mut self, event: SliderEvent) -> Result<(), SliderError> {
        match event {
            SliderEvent::Previous => {
                self.go_to_previous();
            }
            SliderEvent::Next => {
                self.go_to_next();
            }
            SliderEvent::DotSelect(index) => {
                self.go_to(index)?;
            }
            SliderEvent::ToggleAutoPlay => self.toggle_autoplay(),
            SliderEvent::PointerEnter => self.suspend_autoplay(),
            SliderEvent::PointerLeave => self.resume_autoplay(),
        }
        Ok(())
    }

    /// Advances the slider clock by `elapsed`, firing every timer that falls
    /// due, in deadline order. The clock saturates at `Duration::MAX`.
    pub fn update(&mut self, elapsed: Duration) {
        let until = self.timers.now().saturating_add(elapsed);
        while let Some((handle, event)) = self.timers.pop_due(until) {
            self.fire(handle, event);
        }
        self.timers.advance_to(until);
    }

    pub fn view(&self) -> SliderView<'_> {
        SliderView::new(&self.slides, &self.state)
    }

    fn next_index(&self) -> usize {
        if self.state.current_index == self.slides.len() - 1 {
            0
        } else {
            self.state.current_index + 1
        }
    }

    fn navigate(&mut self, index: usize) -> Navigation {
        if self.state.transition == TransitionState::Locked {
            trace!(requested = index, "navigation ignored during transition");
            return Navigation::Ignored;
        }

        let from = self.state.current_index;
        self.state.current_index = index;
        self.state.transition = TransitionState::Locked;
        self.unlock_timer = Some(
            self.timers
                .schedule_once(self.config.transition_lock(), TimerEvent::Unlock),
        );
        debug!(from, to = index, "slide changed");

        // The next autoplay step is computed from the new index.
        self.rearm_autoplay();
        Navigation::Moved { from, to: index }
    }

    fn set_auto_playing(&mut self, playing: bool) {
        if self.state.is_auto_playing == playing {
            return;
        }
        self.state.is_auto_playing = playing;
        debug!(playing, "autoplay toggled");
        self.rearm_autoplay();
    }

    fn rearm_autoplay(&mut self) {
        if let Some(handle) = self.autoplay_timer.take() {
            self.timers.cancel(handle);
        }
        if self.state.is_auto_playing {
            self.autoplay_timer = Some(
                self.timers
                    .schedule_repeating(self.config.autoplay_interval(), TimerEvent::AutoPlayTick),
            );
        }
    }

    fn fire(&mut self, handle: TimerHandle, event: TimerEvent) {
        match event {
            TimerEvent::Unlock => {
                if self.unlock_timer == Some(handle) {
                    self.unlock_timer = None;
                    self.state.transition = TransitionState::Idle;
                    trace!(at = ?self.timers.now(), "transition lock released");
                }
            }
            TimerEvent::AutoPlayTick => {
                trace!(at = ?self.timers.now(), "autoplay tick");
                self.go_to_next();
            }
        }
    }
}

impl Drop for SliderController {
    fn drop(&mut self) {
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            trace!(cancelled, "slider unmounted, timers cancelled");
        }
    }
}
