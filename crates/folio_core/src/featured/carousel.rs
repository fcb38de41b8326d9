//! Timer-driven featured carousel.
//!
//! # Responsibility
//! - Own the rotation state shared with the advance timer.
//! - Cancel and reschedule the timer on pause, resume and manual navigation.
//!
//! # Invariants
//! - No timer runs while paused or when there are no featured slides.
//! - Manual navigation restarts the full interval before the next advance.
//! - Dropping the carousel cancels its timer.

use crate::featured::rotation::FeaturedRotation;
use crate::featured::timer::{ScheduledTick, TickControl};
use log::{info, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Rotation plus its cancelable advance task.
#[derive(Debug)]
pub struct FeaturedCarousel {
    rotation: Arc<Mutex<FeaturedRotation>>,
    interval: Duration,
    tick: Option<ScheduledTick>,
}

impl FeaturedCarousel {
    /// Wraps `rotation` and schedules automatic advancement when applicable.
    pub fn start(rotation: FeaturedRotation, interval: Duration) -> Self {
        info!(
            "event=carousel_start module=featured status=ok slides={} interval_ms={}",
            rotation.len(),
            interval.as_millis()
        );
        let mut carousel = Self {
            rotation: Arc::new(Mutex::new(rotation)),
            interval,
            tick: None,
        };
        carousel.reschedule();
        carousel
    }

    /// Copy of the current rotation state for rendering.
    pub fn snapshot(&self) -> FeaturedRotation {
        self.lock_rotation().clone()
    }

    /// Automatic advance interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// `true` while an advance task is scheduled.
    pub fn is_scheduled(&self) -> bool {
        self.tick.as_ref().is_some_and(ScheduledTick::is_active)
    }

    /// Moves to the next slide and restarts the interval.
    pub fn next(&mut self) -> Option<usize> {
        self.navigate(FeaturedRotation::next)
    }

    /// Moves to the previous slide and restarts the interval.
    pub fn previous(&mut self) -> Option<usize> {
        self.navigate(FeaturedRotation::previous)
    }

    /// Jumps to `index` (wrapping) and restarts the interval.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        self.navigate(|rotation| rotation.go_to(index))
    }

    /// Pauses (e.g. pointer hover) or resumes automatic advancement.
    pub fn set_paused(&mut self, paused: bool) {
        self.lock_rotation().set_paused(paused);
        self.reschedule();
    }

    /// Clears the transition flag after the slide animation.
    pub fn settle_transition(&mut self) {
        self.lock_rotation().settle_transition();
    }

    /// Cancels the advance task; the rotation keeps its state.
    pub fn stop(&mut self) {
        self.tick = None;
    }

    fn navigate(&mut self, step: impl FnOnce(&mut FeaturedRotation) -> Option<usize>) -> Option<usize> {
        let moved = {
            let mut rotation = self.lock_rotation();
            step(&mut *rotation)
        };
        if moved.is_some() {
            self.reschedule();
        }
        moved
    }

    fn reschedule(&mut self) {
        // Drop first so the old worker is joined before a new one starts.
        self.tick = None;
        if !self.lock_rotation().wants_timer() {
            return;
        }

        let rotation = Arc::clone(&self.rotation);
        match ScheduledTick::every(self.interval, move || {
            rotation
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .tick();
            TickControl::Continue
        }) {
            Ok(tick) => self.tick = Some(tick),
            Err(err) => {
                warn!("event=carousel_schedule module=featured status=error error={err}");
            }
        }
    }

    fn lock_rotation(&self) -> MutexGuard<'_, FeaturedRotation> {
        self.rotation.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
