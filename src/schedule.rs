//! Tick sources.
//!
//! A carousel never loops on its own. The host owns a repeating tick
//! source (an animation frame loop, a timer wheel, ...) and forwards each
//! tick to [`SlideCarousel::on_tick`](crate::carousel::SlideCarousel::on_tick).
//! The carousel starts and cancels that source through a [`Scheduler`] and
//! keeps the returned handle to itself.

/// A host tick source the carousel can start and cancel.
pub trait Scheduler {
    /// Proof that a tick stream is running. Dropped handles do not cancel
    /// anything, only [`Scheduler::cancel`] does.
    type Handle;

    fn start(&mut self) -> Self::Handle;

    /// Consumes the handle, so the same stream can never be cancelled twice.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Identifies one tick stream started by a [`FrameScheduler`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct FrameTimer(u64);

impl FrameTimer {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Scheduler for hosts that already run a frame loop.
///
/// The loop calls `on_tick` every frame; this type only keeps the
/// bookkeeping of which stream is live, which the host and tests can read.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    active: Vec<u64>,
    started: usize,
    cancelled: usize,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of streams started and not yet cancelled.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn started(&self) -> usize {
        self.started
    }

    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl Scheduler for FrameScheduler {
    type Handle = FrameTimer;

    fn start(&mut self) -> FrameTimer {
        let id = self.next_id;
        self.next_id += 1;
        self.started += 1;
        self.active.push(id);
        log::trace!("frame timer {} started", id);
        FrameTimer(id)
    }

    fn cancel(&mut self, handle: FrameTimer) {
        if let Some(pos) = self.active.iter().position(|&id| id == handle.0) {
            self.active.swap_remove(pos);
            self.cancelled += 1;
            log::trace!("frame timer {} cancelled", handle.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_cancel_track_active_streams() {
        let mut scheduler = FrameScheduler::new();
        let a = scheduler.start();
        let b = scheduler.start();
        assert_ne!(a, b);
        assert_eq!(scheduler.active_count(), 2);

        scheduler.cancel(a);
        assert_eq!(scheduler.active_count(), 1);
        assert_eq!(scheduler.started(), 2);
        assert_eq!(scheduler.cancelled(), 1);

        scheduler.cancel(b);
        assert!(!scheduler.is_active());
    }

    #[test]
    fn cancelling_a_foreign_handle_is_ignored() {
        let mut scheduler = FrameScheduler::new();
        let _live = scheduler.start();
        scheduler.cancel(FrameTimer(42));
        assert_eq!(scheduler.active_count(), 1);
        assert_eq!(scheduler.cancelled(), 0);
    }
}
