use std::time::Duration;

pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000); // Time each slide stays up under autoplay
pub const TRANSITION_LOCK: Duration = Duration::from_millis(600);            // Cool-down after a slide change, also the crossfade length

pub const RENDER_WIDTH: i32 = 1280;           // Default viewer window width
pub const RENDER_HEIGHT: i32 = 720;           // Default viewer window height
pub const FPS: u32 = 60;                      // Viewer frame rate cap

pub const CAPTION_RISE: f32 = 32.0;           // Pixels a caption travels while fading in
pub const DOT_SIZE: f32 = 12.0;               // Diameter of an inactive dot indicator
pub const ACTIVE_DOT_WIDTH: f32 = 48.0;       // Width of the active dot indicator
pub const DOT_GAP: f32 = 12.0;                // Space between dot indicators
