//! The slide carousel state machine.
//!
//! [`SlideCarousel`] only knows how many slides exist, which one is active
//! and how long the active one has been on screen. Drawing is delegated to a
//! [`Renderer`] and timing to ticks delivered by the host through
//! [`SlideCarousel::on_tick`], started and cancelled through a [`Scheduler`].
//!
//! No operation fails. Out of range targets, empty decks and calls after
//! [`SlideCarousel::destroy`] are absorbed as no-ops and logged at debug
//! level.

use std::time::Duration;

use crate::constants::DEFAULT_SLIDE_DURATION;
use crate::render::Renderer;
use crate::schedule::Scheduler;
use crate::state::CarouselState;

pub struct SlideCarousel<R, S: Scheduler> {
    slide_count: usize,
    current_index: usize,
    state: CarouselState,

    slide_duration: Duration,
    elapsed: Duration,
    last_tick: Option<Duration>,

    timer: Option<S::Handle>,
    scheduler: S,
    renderer: R,
}

impl<R: Renderer, S: Scheduler> SlideCarousel<R, S> {
    /// Creates a carousel over `slide_count` slides, showing slide 0.
    ///
    /// A missing or zero `slide_duration` falls back to
    /// [`DEFAULT_SLIDE_DURATION`]. Nothing is rendered and no timer is
    /// started until the first navigation or [`play`](Self::play).
    pub fn new(slide_count: usize, slide_duration: Option<Duration>, renderer: R, scheduler: S) -> Self {
        let slide_duration = match slide_duration {
            Some(duration) if !duration.is_zero() => duration,
            Some(_) => {
                log::debug!("zero slide duration, using default {:?}", DEFAULT_SLIDE_DURATION);
                DEFAULT_SLIDE_DURATION
            }
            None => DEFAULT_SLIDE_DURATION,
        };

        if slide_count == 0 {
            log::debug!("carousel created without slides, it will stay inert");
        }

        Self {
            slide_count,
            current_index: 0,
            state: CarouselState::Uninitialized,
            slide_duration,
            elapsed: Duration::ZERO,
            last_tick: None,
            timer: None,
            scheduler,
            renderer,
        }
    }

    /// Creates a carousel with one slide per handle. The handles stay with
    /// the caller; only their count matters here.
    pub fn for_slides<T>(slides: &[T], slide_duration: Option<Duration>, renderer: R, scheduler: S) -> Self {
        Self::new(slides.len(), slide_duration, renderer, scheduler)
    }

    pub fn next(&mut self) {
        if !self.can_navigate() {
            return;
        }
        let target = (self.current_index + 1) % self.slide_count;
        self.show(target);
    }

    pub fn previous(&mut self) {
        if !self.can_navigate() {
            return;
        }
        let target = (self.current_index + self.slide_count - 1) % self.slide_count;
        self.show(target);
    }

    /// Jumps to `index`. Stale targets (out of range) and the current index
    /// are ignored, neither renders nor resets the slide timer.
    pub fn go_to(&mut self, index: usize) {
        if self.state == CarouselState::Destroyed {
            log::debug!("go_to({}) ignored, carousel destroyed", index);
            return;
        }
        if index >= self.slide_count {
            log::debug!("go_to({}) ignored, only {} slides", index, self.slide_count);
            return;
        }
        if index == self.current_index {
            return;
        }
        self.show(index);
    }

    /// Starts autoplay, or restarts it with a full slide duration when
    /// already playing or paused.
    ///
    /// Any running timer is cancelled first, so at most one is ever live.
    pub fn play(&mut self) {
        match self.state {
            CarouselState::Destroyed => {
                log::debug!("play ignored, carousel destroyed");
                return;
            }
            _ if self.slide_count == 0 => {
                log::debug!("play ignored, no slides");
                return;
            }
            _ => {}
        }

        self.cancel_timer();
        self.state = CarouselState::Playing;
        self.elapsed = Duration::ZERO;
        self.last_tick = None;
        self.timer = Some(self.scheduler.start());
    }

    /// Suspends auto-advance. Ticks keep arriving but are not counted;
    /// the next [`play`](Self::play) starts a fresh slide duration.
    pub fn pause(&mut self) {
        match self.state {
            CarouselState::Playing => self.state = CarouselState::Paused,
            CarouselState::Paused => {}
            CarouselState::Uninitialized | CarouselState::Destroyed => {
                log::debug!("pause ignored in state {:?}", self.state);
            }
        }
    }

    /// Cancels the timer for good. Idempotent.
    pub fn destroy(&mut self) {
        if self.state == CarouselState::Destroyed {
            return;
        }
        self.cancel_timer();
        self.state = CarouselState::Destroyed;
        self.last_tick = None;
    }

    /// Feeds one tick of the host clock. `now` is a monotonic timestamp
    /// measured from any fixed origin.
    ///
    /// The first tick after [`play`](Self::play) only sets the baseline.
    /// At most one advance happens per tick; time beyond the slide duration
    /// is dropped rather than carried into the next slide.
    pub fn on_tick(&mut self, now: Duration) {
        if !self.state.is_running() || self.timer.is_none() {
            return;
        }

        let last_tick = self.last_tick.replace(now);
        if self.state == CarouselState::Paused {
            return;
        }

        let delta = last_tick.map_or(Duration::ZERO, |last| now.saturating_sub(last));
        self.elapsed += delta;

        if self.elapsed >= self.slide_duration {
            self.next();
            self.elapsed = Duration::ZERO;
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == CarouselState::Paused
    }

    /// Whether a timer is live, i.e. the host should keep forwarding ticks.
    pub fn is_ticking(&self) -> bool {
        self.timer.is_some()
    }

    pub fn slide_duration(&self) -> Duration {
        self.slide_duration
    }

    /// Time counted towards the next automatic advance.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Share of the slide duration already elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.elapsed.as_secs_f32() / self.slide_duration.as_secs_f32()).min(1.0)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn can_navigate(&self) -> bool {
        if self.state == CarouselState::Destroyed {
            log::debug!("navigation ignored, carousel destroyed");
            return false;
        }
        // With a single slide wrapping lands on the same index
        self.slide_count > 1
    }

    fn show(&mut self, index: usize) {
        let previous = self.current_index;
        self.current_index = index;
        self.elapsed = Duration::ZERO;
        self.renderer.render(index, previous);
    }
}

impl<R, S: Scheduler> SlideCarousel<R, S> {
    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<R, S: Scheduler> Drop for SlideCarousel<R, S> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
