//! Ticker Actor: Dedicated thread that paces animation frames.
//!
//! The ticker is the only place wall-clock time enters the crate. It sends
//! [`Tick`]s over a small bounded channel; the UI thread receives them and
//! uses [`Tick::elapsed`] to advance its [`DeferredQueue`] and to sample
//! layer animations.

use super::queue::DeferredQueue;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::debug;

/// A tick event sent at regular intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Frame number (monotonically increasing).
    pub frame: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

/// Ticker actor that generates regular timing events.
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for tick events.
    tick_rx: Receiver<Tick>,
}

impl TickerActor {
    /// Spawn a ticker that fires every `interval`.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the ticker thread.
    pub fn spawn(interval: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = Arc::clone(&shutdown);

        // Ticks must not queue up behind a slow UI thread
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("typing-dots-ticker".to_string())
            .spawn(move || {
                Self::run_loop(&tick_tx, &shutdown_clone, interval);
            })
            .expect("Failed to spawn ticker thread");

        debug!(?interval, "typing:ticker spawned");

        Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        }
    }

    /// Spawn a ticker targeting `fps` frames per second.
    pub fn with_fps(fps: u32) -> Self {
        Self::spawn(Duration::from_secs(1) / fps.max(1))
    }

    /// Get a reference to the tick receiver, for use with `select!`.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Advance `queue` to the newest tick that is already waiting.
    ///
    /// Older ticks are skipped. Returns the tick used, or `None` if nothing
    /// was waiting.
    pub fn pump(&self, queue: &DeferredQueue) -> Option<Tick> {
        let mut latest = None;
        while let Ok(tick) = self.tick_rx.try_recv() {
            latest = Some(tick);
        }
        if let Some(tick) = latest {
            queue.advance_to(tick.elapsed);
        }
        latest
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main ticker loop.
    fn run_loop(tick_tx: &Sender<Tick>, shutdown: &Arc<AtomicBool>, interval: Duration) {
        let start = Instant::now();
        let mut frame = 0u64;
        let mut next_tick = start + interval;

        while !shutdown.load(Ordering::Relaxed) {
            let now = Instant::now();
            if now < next_tick {
                thread::sleep((next_tick - now).min(Duration::from_millis(1)));
                continue;
            }

            // Full buffer means the receiver is behind; drop this tick
            let _ = tick_tx.try_send(Tick {
                frame,
                elapsed: now - start,
            });

            frame += 1;
            next_tick += interval;
            if next_tick < now {
                next_tick = now + interval;
            }
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
