use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(6000); // Time each slide stays active
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 40.0; // Horizontal distance before a touch counts as a swipe (px)

pub const ENTRANCE_DURATION: f32 = 0.8;       // Hero text slide-in after each index change (seconds)
pub const ZOOM_AMOUNT: f32 = 0.08;            // Extra scale reached by the slow zoom over one slide duration
