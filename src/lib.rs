//! Hero slider engine.
//!
//! An autoplaying slide carousel that knows nothing about drawing: hosts
//! forward clock ticks and user input, and receive index changes through
//! a [`Renderer`].
//!
//! ```
//! use std::time::Duration;
//! use hero_slider::{FrameScheduler, SlideCarousel};
//!
//! let mut shown = Vec::new();
//! let mut carousel = SlideCarousel::new(
//!     3,
//!     Some(Duration::from_millis(1000)),
//!     |new: usize, _previous: usize| shown.push(new),
//!     FrameScheduler::new(),
//! );
//! carousel.play();
//! carousel.on_tick(Duration::from_millis(0));
//! carousel.on_tick(Duration::from_millis(1000));
//! assert_eq!(carousel.current_index(), 1);
//! ```

pub mod carousel;
pub mod config;
pub mod constants;
pub mod input;
pub mod render;
pub mod schedule;
pub mod state;

pub use carousel::SlideCarousel;
pub use config::{ConfigError, SliderConfig};
pub use input::{InputAdapter, InputEvent, Key, SwipeDirection, SwipeTracker};
pub use render::Renderer;
pub use schedule::{FrameScheduler, FrameTimer, Scheduler};
pub use state::CarouselState;
