use std::collections::VecDeque;
use std::time::Duration;

use carousel::{
    AutoPlayIcon, Navigation, Renderer, Slide, SliderConfig, SliderController, SliderEvent,
    SliderView, run,
};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn four_slides() -> Vec<Slide> {
    vec![
        Slide::new("slide-1.jpg", "A", "Mountain"),
        Slide::new("slide-2.jpg", "B", "Beach"),
        Slide::new("slide-3.jpg", "C", "City"),
        Slide::new("slide-4.jpg", "D", "Forest"),
    ]
}

fn mounted(interval: Duration) -> SliderController {
    let config = SliderConfig::new(interval).unwrap();
    SliderController::new(four_slides(), config).unwrap()
}

fn current_title(slider: &SliderController) -> &str {
    slider.current_slide().title()
}

#[test]
fn forward_then_blocked_back_then_back() {
    let mut slider = mounted(ms(5000));

    slider.handle(SliderEvent::Next).unwrap();
    assert_eq!(current_title(&slider), "B");
    slider.update(ms(600));

    slider.handle(SliderEvent::Next).unwrap();
    assert_eq!(current_title(&slider), "C");

    assert_eq!(slider.go_to_previous(), Navigation::Ignored);
    assert_eq!(slider.current_index(), 2);

    slider.update(ms(600));
    assert_eq!(
        slider.go_to_previous(),
        Navigation::Moved { from: 2, to: 1 }
    );
    assert_eq!(current_title(&slider), "B");
}

#[test]
fn next_from_last_slide_wraps_to_first() {
    let mut slider = mounted(ms(5000));
    slider.go_to(3).unwrap();
    slider.update(ms(600));

    assert_eq!(slider.go_to_next(), Navigation::Moved { from: 3, to: 0 });
    assert_eq!(current_title(&slider), "A");
}

#[test]
fn unattended_autoplay_cycles_forever() {
    let mut slider = mounted(ms(5000));
    let mut seen = Vec::new();
    for _ in 0..8 {
        slider.update(ms(5000));
        seen.push(current_title(&slider).to_string());
    }
    assert_eq!(seen, ["B", "C", "D", "A", "B", "C", "D", "A"]);
}

#[test]
fn hovering_longer_than_the_interval_holds_the_slide() {
    let mut slider = mounted(ms(5000));
    slider.handle(SliderEvent::PointerEnter).unwrap();
    slider.update(ms(12_000));
    assert_eq!(slider.current_index(), 0);
    assert_eq!(slider.view().autoplay, AutoPlayIcon::Play);

    slider.handle(SliderEvent::PointerLeave).unwrap();
    slider.update(ms(4999));
    assert_eq!(slider.current_index(), 0);
    slider.update(ms(1));
    assert_eq!(slider.current_index(), 1);
}

#[test]
fn view_tracks_navigation() {
    let mut slider = mounted(ms(5000));
    slider.handle(SliderEvent::DotSelect(2)).unwrap();

    let view = slider.view();
    assert_eq!(view.current_index, 2);
    assert!(view.is_transitioning);
    assert!(view.slides[2].visible);
    assert_eq!(view.slides.iter().filter(|s| s.visible).count(), 1);
    assert!(view.dots[2].active);
    assert_eq!(view.autoplay.label(), "Pause slideshow");
}

#[test]
fn dropping_a_slider_leaves_others_running() {
    let mut kept = mounted(ms(1000));
    let dropped = mounted(ms(1000));
    assert_eq!(dropped.pending_timers(), 1);
    drop(dropped);

    kept.update(ms(1000));
    assert_eq!(kept.current_index(), 1);
}

/// Host loop driven by a scripted renderer at a fixed frame rate.
struct Headless {
    frames: VecDeque<Vec<SliderEvent>>,
    shown: Vec<String>,
}

impl Headless {
    fn idle(frames: usize) -> Self {
        Self {
            frames: (0..frames).map(|_| Vec::new()).collect(),
            shown: Vec::new(),
        }
    }
}

impl Renderer for Headless {
    type Error = std::convert::Infallible;

    fn is_open(&self) -> bool {
        !self.frames.is_empty()
    }

    fn frame_time(&self) -> Duration {
        ms(250)
    }

    fn poll_events(&mut self) -> Vec<SliderEvent> {
        self.frames.pop_front().unwrap_or_default()
    }

    fn render_frame(&mut self, view: &SliderView<'_>, _dt: Duration) -> Result<(), Self::Error> {
        let title = view.current().map(|s| s.slide.title().to_string());
        if let Some(title) = title {
            if self.shown.last() != Some(&title) {
                self.shown.push(title);
            }
        }
        Ok(())
    }
}

#[test]
fn headless_host_sees_every_autoplay_step() {
    let mut slider = mounted(ms(1000));
    // 20 frames of 250 ms: five seconds of autoplay
    let mut host = Headless::idle(20);

    run(&mut slider, &mut host).unwrap();

    assert_eq!(host.shown, ["A", "B", "C", "D", "A", "B"]);
    assert_eq!(slider.clock(), ms(5000));
}
