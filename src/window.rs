use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use carousel::constants::*;
use carousel::{AutoPlayIcon, Renderer, Slide, SliderEvent, SliderView};
use raylib::prelude::*;
use tracing::warn;

use crate::catalog;
use crate::texture_loader::{load_texture_with_exif_rotation, read_image};

/// One slide's texture plus its crossfade animation.
struct SlideSprite {
    image: Texture2D,

    opacity: f32,
    start_opacity: f32,
    target_opacity: f32,

    animation_timer: f32,
    is_animating: bool,
}

impl SlideSprite {
    fn new(image: Texture2D, opacity: f32) -> Self {
        Self {
            image,
            opacity,
            start_opacity: opacity,
            target_opacity: opacity,
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    fn fade_to(&mut self, target: f32) {
        if target != self.target_opacity {
            self.start_opacity = self.opacity;
            self.target_opacity = target;
            self.animation_timer = 0.0;
            self.is_animating = true;
        }
    }

    fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        let duration = TRANSITION_LOCK.as_secs_f32();
        self.animation_timer += dt;
        let t = (self.animation_timer / duration).min(1.0);
        self.opacity = raylib::core::math::lerp(self.start_opacity, self.target_opacity, t);

        if self.animation_timer >= duration {
            self.is_animating = false;
            self.opacity = self.target_opacity;
        }
    }

    /// Scales the image to cover the whole window, cropping the overflow.
    fn draw(&self, d: &mut RaylibDrawHandle, screen_width: f32, screen_height: f32) {
        if self.opacity <= 0.0 {
            return;
        }
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = (screen_width / tex_width).max(screen_height / tex_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                (screen_width - scaled_width) * 0.5,
                (screen_height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            with_alpha(Color::WHITE, self.opacity),
        );
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    let alpha = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
    Color::new(color.r, color.g, color.b, alpha)
}

/// Hit areas of the controls, as laid out for the last painted frame.
struct Controls {
    previous: Rectangle,
    next: Rectangle,
    toggle: Rectangle,
    dots: Vec<Rectangle>,
}

impl Controls {
    fn layout(screen_width: f32, screen_height: f32, view: &SliderView<'_>) -> Self {
        let arrow = 56.0;
        let arrow_y = (screen_height - arrow) * 0.5;

        let dot_widths: Vec<f32> = view
            .dots
            .iter()
            .map(|dot| if dot.active { ACTIVE_DOT_WIDTH } else { DOT_SIZE })
            .collect();
        let gaps = dot_widths.len().saturating_sub(1) as f32;
        let total = dot_widths.iter().sum::<f32>() + DOT_GAP * gaps;
        let mut x = (screen_width - total) * 0.5;
        let y = screen_height - 16.0 - DOT_SIZE;
        let dots = dot_widths
            .into_iter()
            .map(|width| {
                let rect = Rectangle::new(x, y, width, DOT_SIZE);
                x += width + DOT_GAP;
                rect
            })
            .collect();

        Self {
            previous: Rectangle::new(16.0, arrow_y, arrow, arrow),
            next: Rectangle::new(screen_width - 16.0 - arrow, arrow_y, arrow, arrow),
            toggle: Rectangle::new(screen_width - 16.0 - 48.0, 16.0, 48.0, 48.0),
            dots,
        }
    }

    fn hit(&self, point: Vector2, hovered: bool) -> Option<SliderEvent> {
        // Arrows and the toggle are only painted, and clickable, while hovered
        if hovered {
            if self.previous.check_collision_point_rec(point) {
                return Some(SliderEvent::Previous);
            }
            if self.next.check_collision_point_rec(point) {
                return Some(SliderEvent::Next);
            }
            if self.toggle.check_collision_point_rec(point) {
                return Some(SliderEvent::ToggleAutoPlay);
            }
        }
        self.dots
            .iter()
            .position(|dot| dot.check_collision_point_rec(point))
            .map(SliderEvent::DotSelect)
    }
}

pub struct RaylibWindow {
    rl: RaylibHandle,
    thread: RaylibThread,
    sprites: Vec<SlideSprite>,
    controls: Option<Controls>,
    hovered: bool,
}

impl RaylibWindow {
    pub fn open(width: i32, height: i32) -> Self {
        let (mut rl, thread) = raylib::init()
            .size(width, height)
            .title("Carousel")
            .vsync()
            .resizable()
            .build();
        rl.set_target_fps(FPS);
        rl.set_trace_log(TraceLogLevel::LOG_ERROR);

        Self {
            rl,
            thread,
            sprites: Vec::new(),
            controls: None,
            hovered: false,
        }
    }

    /// Uploads every image it can and returns the matching slides, in order.
    /// Images that fail to load are logged and skipped.
    pub fn load_slides(&mut self, paths: &[PathBuf]) -> Vec<Slide> {
        let mut slides = Vec::new();
        for path in paths {
            match self.load_slide(path) {
                Ok(slide) => slides.push(slide),
                Err(e) => warn!(path = %path.display(), "skipping image: {e:#}"),
            }
        }
        slides
    }

    fn load_slide(&mut self, path: &Path) -> Result<Slide> {
        let image = read_image(path)?;
        let texture = load_texture_with_exif_rotation(&mut self.rl, &self.thread, &image)?;

        let opacity = if self.sprites.is_empty() { 1.0 } else { 0.0 };
        self.sprites.push(SlideSprite::new(texture, opacity));
        Ok(catalog::describe(path, image.exif.as_ref()))
    }

    fn draw_caption(d: &mut RaylibDrawHandle, slide: &Slide, opacity: f32, screen_height: f32) {
        if opacity <= 0.0 {
            return;
        }
        let rise = CAPTION_RISE * (1.0 - opacity);
        let x = 48;
        let title_y = (screen_height - 150.0 + rise) as i32;
        let title_color = with_alpha(Color::WHITE, opacity);
        d.draw_text(slide.title(), x, title_y, 48, title_color);
        d.draw_text(
            slide.description(),
            x,
            title_y + 60,
            22,
            with_alpha(Color::WHITE, opacity * 0.9),
        );
    }
}

impl Renderer for RaylibWindow {
    type Error = anyhow::Error;

    fn is_open(&self) -> bool {
        !self.rl.window_should_close()
    }

    fn frame_time(&self) -> Duration {
        Duration::from_secs_f32(self.rl.get_frame_time())
    }

    fn poll_events(&mut self) -> Vec<SliderEvent> {
        let mut events = Vec::new();

        let hovered = self.rl.is_cursor_on_screen();
        if hovered != self.hovered {
            self.hovered = hovered;
            events.push(if hovered {
                SliderEvent::PointerEnter
            } else {
                SliderEvent::PointerLeave
            });
        }

        if self.rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let point = self.rl.get_mouse_position();
            let hovered = self.hovered;
            let hit = self.controls.as_ref().and_then(|c| c.hit(point, hovered));
            events.extend(hit);
        }

        if self.rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            events.push(SliderEvent::Previous);
        }
        if self.rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            events.push(SliderEvent::Next);
        }
        if self.rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            events.push(SliderEvent::ToggleAutoPlay);
        }
        events
    }

    fn render_frame(&mut self, view: &SliderView<'_>, dt: Duration) -> Result<()> {
        for (sprite, slide) in self.sprites.iter_mut().zip(&view.slides) {
            sprite.fade_to(slide.opacity);
            sprite.update(dt.as_secs_f32());
        }

        let sw = self.rl.get_screen_width() as f32;
        let sh = self.rl.get_screen_height() as f32;
        let controls = Controls::layout(sw, sh, view);
        let hovered = self.hovered;

        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(Color::BLACK);

        // Outgoing slides first so the current one fades in on top
        let order = view
            .slides
            .iter()
            .filter(|s| !s.visible)
            .chain(view.current());
        for slide in order {
            self.sprites[slide.index].draw(&mut d, sw, sh);
        }

        let band = (sh * 0.4) as i32;
        d.draw_rectangle_gradient_v(
            0,
            sh as i32 - band,
            sw as i32,
            band,
            Color::new(0, 0, 0, 0),
            Color::new(0, 0, 0, 200),
        );
        for slide in &view.slides {
            let opacity = self.sprites[slide.index].opacity;
            Self::draw_caption(&mut d, slide.slide, opacity, sh);
        }

        if hovered {
            let button = with_alpha(Color::WHITE, 0.15);
            for (rect, glyph) in [(controls.previous, "<"), (controls.next, ">")] {
                d.draw_rectangle_rounded(rect, 1.0, 16, button);
                d.draw_text(glyph, rect.x as i32 + 20, rect.y as i32 + 12, 32, Color::WHITE);
            }
            let glyph = match view.autoplay {
                AutoPlayIcon::Pause => "||",
                AutoPlayIcon::Play => ">",
            };
            d.draw_rectangle_rounded(controls.toggle, 1.0, 16, button);
            let (x, y) = (controls.toggle.x as i32, controls.toggle.y as i32);
            d.draw_text(glyph, x + 17, y + 12, 24, Color::WHITE);
            d.draw_text(view.autoplay.label(), 16, 16, 16, with_alpha(Color::WHITE, 0.7));
        }

        for (rect, dot) in controls.dots.iter().zip(&view.dots) {
            let color = if dot.active {
                Color::GOLD
            } else {
                with_alpha(Color::WHITE, 0.5)
            };
            d.draw_rectangle_rounded(*rect, 1.0, 8, color);
        }
        drop(d);

        self.controls = Some(controls);
        Ok(())
    }
}
