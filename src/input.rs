//! Maps host input to carousel operations.

use crate::carousel::SlideCarousel;
use crate::constants::DEFAULT_SWIPE_THRESHOLD;
use crate::render::Renderer;
use crate::schedule::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PreviousClicked,
    NextClicked,
    DotClicked(usize),
    KeyPressed(Key),
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Turns a touch start/end pair into a swipe.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    /// Non-positive or NaN thresholds fall back to [`DEFAULT_SWIPE_THRESHOLD`].
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold > 0.0 {
            threshold
        } else {
            log::debug!("invalid swipe threshold {}, using {}", threshold, DEFAULT_SWIPE_THRESHOLD);
            DEFAULT_SWIPE_THRESHOLD
        };
        Self { threshold, start_x: None }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finishes the gesture. Moving left past the threshold means next,
    /// moving right past it means previous.
    pub fn end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let distance = start - x;
        if distance > self.threshold {
            Some(SwipeDirection::Next)
        } else if distance < -self.threshold {
            Some(SwipeDirection::Previous)
        } else {
            None
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

/// Per-carousel input state. Hosts feed it every relevant event.
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    swipe: SwipeTracker,
}

impl InputAdapter {
    pub fn new(swipe_threshold: f32) -> Self {
        Self { swipe: SwipeTracker::new(swipe_threshold) }
    }

    pub fn dispatch<R: Renderer, S: Scheduler>(&mut self, carousel: &mut SlideCarousel<R, S>, event: InputEvent) {
        match event {
            InputEvent::PreviousClicked | InputEvent::KeyPressed(Key::ArrowLeft) => carousel.previous(),
            InputEvent::NextClicked | InputEvent::KeyPressed(Key::ArrowRight) => carousel.next(),
            InputEvent::DotClicked(index) => carousel.go_to(index),
            InputEvent::TouchStart { x } => self.swipe.begin(x),
            InputEvent::TouchEnd { x } => match self.swipe.end(x) {
                Some(SwipeDirection::Next) => carousel.next(),
                Some(SwipeDirection::Previous) => carousel.previous(),
                None => {}
            },
            InputEvent::PointerEnter | InputEvent::FocusIn => carousel.pause(),
            InputEvent::PointerLeave | InputEvent::FocusOut => carousel.play(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::FrameScheduler;
    use crate::state::CarouselState;

    type Calls = Vec<(usize, usize)>;

    fn carousel() -> SlideCarousel<impl FnMut(usize, usize), FrameScheduler> {
        SlideCarousel::new(4, None, |_: usize, _: usize| {}, FrameScheduler::new())
    }

    #[test]
    fn swipe_needs_to_pass_the_threshold() {
        let mut swipe = SwipeTracker::new(40.0);
        swipe.begin(200.0);
        assert_eq!(swipe.end(150.0), Some(SwipeDirection::Next));
        swipe.begin(200.0);
        assert_eq!(swipe.end(250.0), Some(SwipeDirection::Previous));
        swipe.begin(200.0);
        assert_eq!(swipe.end(160.0), None);
        swipe.begin(200.0);
        assert_eq!(swipe.end(240.0), None);
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.end(0.0), None);
        swipe.begin(100.0);
        swipe.end(0.0);
        assert_eq!(swipe.end(-500.0), None);
    }

    #[test]
    fn invalid_threshold_uses_default() {
        assert_eq!(SwipeTracker::new(0.0).threshold(), DEFAULT_SWIPE_THRESHOLD);
        assert_eq!(SwipeTracker::new(-3.0).threshold(), DEFAULT_SWIPE_THRESHOLD);
        assert_eq!(SwipeTracker::new(f32::NAN).threshold(), DEFAULT_SWIPE_THRESHOLD);
        assert_eq!(SwipeTracker::new(12.5).threshold(), 12.5);
    }

    #[test]
    fn controls_and_keys_navigate() {
        let mut c = carousel();
        let mut input = InputAdapter::default();

        input.dispatch(&mut c, InputEvent::NextClicked);
        input.dispatch(&mut c, InputEvent::KeyPressed(Key::ArrowRight));
        assert_eq!(c.current_index(), 2);

        input.dispatch(&mut c, InputEvent::PreviousClicked);
        assert_eq!(c.current_index(), 1);
        input.dispatch(&mut c, InputEvent::KeyPressed(Key::ArrowLeft));
        input.dispatch(&mut c, InputEvent::KeyPressed(Key::ArrowLeft));
        assert_eq!(c.current_index(), 3);

        input.dispatch(&mut c, InputEvent::DotClicked(1));
        assert_eq!(c.current_index(), 1);
        input.dispatch(&mut c, InputEvent::DotClicked(9));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn swipes_navigate() {
        let mut calls = Calls::new();
        {
            let mut c = SlideCarousel::new(3, None, |new: usize, prev: usize| calls.push((new, prev)), FrameScheduler::new());
            let mut input = InputAdapter::new(40.0);

            input.dispatch(&mut c, InputEvent::TouchStart { x: 300.0 });
            input.dispatch(&mut c, InputEvent::TouchEnd { x: 100.0 });
            input.dispatch(&mut c, InputEvent::TouchStart { x: 100.0 });
            input.dispatch(&mut c, InputEvent::TouchEnd { x: 120.0 });
            input.dispatch(&mut c, InputEvent::TouchStart { x: 100.0 });
            input.dispatch(&mut c, InputEvent::TouchEnd { x: 200.0 });
        }
        assert_eq!(calls, vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn hover_and_focus_pause_and_resume() {
        let mut c = carousel();
        let mut input = InputAdapter::default();
        c.play();

        input.dispatch(&mut c, InputEvent::PointerEnter);
        assert_eq!(c.state(), CarouselState::Paused);
        input.dispatch(&mut c, InputEvent::PointerLeave);
        assert_eq!(c.state(), CarouselState::Playing);

        input.dispatch(&mut c, InputEvent::FocusIn);
        assert!(c.is_paused());
        input.dispatch(&mut c, InputEvent::FocusOut);
        assert!(!c.is_paused());
        assert_eq!(c.scheduler().active_count(), 1);
    }
}
