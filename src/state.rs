#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselState {
    Uninitialized, // Constructed, autoplay never started
    Playing,       // Timer running, ticks advance slides
    Paused,        // Timer running, ticks ignored
    Destroyed,     // Timer cancelled for good, every operation is a no-op
}

impl CarouselState {
    /// Whether the carousel still owns a live timer.
    pub fn is_running(self) -> bool {
        matches!(self, CarouselState::Playing | CarouselState::Paused)
    }
}
