//! Cancelable periodic task used by the featured carousel.
//!
//! # Invariants
//! - After `cancel()` returns, the callback is never invoked again.
//! - Dropping a `ScheduledTick` cancels it.
//! - The callback runs on a dedicated worker thread, one invocation at a time.

use log::debug;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Whether a periodic task keeps running after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Handle to a running periodic task.
#[derive(Debug)]
pub struct ScheduledTick {
    cancel_tx: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl ScheduledTick {
    /// Starts calling `on_tick` every `interval` until canceled or stopped.
    ///
    /// # Errors
    /// - Returns an error when the worker thread cannot be spawned.
    pub fn every<F>(interval: Duration, mut on_tick: F) -> std::io::Result<Self>
    where
        F: FnMut() -> TickControl + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let join = thread::Builder::new()
            .name("folio-featured-tick".to_string())
            .spawn(move || loop {
                match cancel_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if on_tick() == TickControl::Stop {
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        debug!(
            "event=tick_schedule module=featured status=ok interval_ms={}",
            interval.as_millis()
        );
        Ok(Self {
            cancel_tx: Some(cancel_tx),
            join: Some(join),
        })
    }

    /// Stops the task and waits for an in-flight tick to finish.
    ///
    /// Idempotent. Calling it from inside the tick callback does not block.
    pub fn cancel(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(());
        }
        if let Some(join) = self.join.take() {
            if join.thread().id() != thread::current().id() {
                let _ = join.join();
            }
            debug!("event=tick_cancel module=featured status=ok");
        }
    }

    /// `true` until canceled or until the worker stopped on its own.
    pub fn is_active(&self) -> bool {
        self.join
            .as_ref()
            .is_some_and(|join| !join.is_finished())
    }
}

impl Drop for ScheduledTick {
    fn drop(&mut self) {
        self.cancel();
    }
}
