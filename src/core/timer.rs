//! Live timer: an activity being timed but not stored yet.
//!
//! While a session exists a display worker redraws the elapsed time on the
//! current terminal line once per tick. Stopping signals the worker through a
//! channel and joins it before returning, so nothing the caller prints
//! afterwards can interleave with the live line.

use crate::models::entry::NewEntry;
use crate::utils::time::{format_hms, truncate_seconds};
use chrono::NaiveDateTime;
use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Line shown by the live display and by the final summary.
pub fn elapsed_line(name: &str, elapsed: Duration) -> String {
    format!(
        "{}, Time elapsed: {}",
        name,
        format_hms(elapsed.as_secs() as i64)
    )
}

pub struct TimerSession {
    entry: NewEntry,
    monotonic_start: Instant,
    stop_tx: Sender<()>,
    display: Option<JoinHandle<()>>,
}

/// Result of stopping a timer: the completed entry, ready to be stored.
#[derive(Debug, Clone)]
pub struct StoppedTimer {
    pub entry: NewEntry,
    pub elapsed: Duration,
}

impl StoppedTimer {
    pub fn summary(&self) -> String {
        elapsed_line(&self.entry.name, self.elapsed)
    }
}

impl TimerSession {
    /// Start timing `name` from `start_time`, redrawing on stdout every `tick`.
    pub fn start(name: &str, start_time: NaiveDateTime, tick: Duration) -> Self {
        Self::start_with_output(name, start_time, tick, io::stdout())
    }

    /// Same as [`TimerSession::start`] but the live display writes to `out`.
    pub fn start_with_output<W>(name: &str, start_time: NaiveDateTime, tick: Duration, out: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let entry = NewEntry::new(name.trim(), truncate_seconds(start_time));
        let monotonic_start = Instant::now();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let label = entry.name.clone();
        let display = thread::spawn(move || {
            let mut out = out;
            loop {
                match stop_rx.recv_timeout(tick) {
                    Err(RecvTimeoutError::Timeout) => {
                        let line = elapsed_line(&label, monotonic_start.elapsed());
                        // A broken terminal only costs us the live line.
                        if write!(out, "\r{}", line).and_then(|_| out.flush()).is_err() {
                            break;
                        }
                    }
                    // stop signal, or the session was dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            entry,
            monotonic_start,
            stop_tx,
            display: Some(display),
        }
    }

    pub fn name(&self) -> &str {
        &self.entry.name
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.entry.start_time
    }

    pub fn elapsed(&self) -> Duration {
        self.monotonic_start.elapsed()
    }

    /// Stop the display and close the entry at `end_time`.
    ///
    /// Returns only after the display worker has exited.
    pub fn stop(mut self, end_time: NaiveDateTime) -> StoppedTimer {
        let elapsed = self.monotonic_start.elapsed();
        self.halt_display();

        let end_time = truncate_seconds(end_time).max(self.entry.start_time);
        let entry = self.entry.clone().ending_at(Some(end_time));

        StoppedTimer { entry, elapsed }
    }

    fn halt_display(&mut self) {
        // The worker may already be gone if its output failed.
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.display.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TimerSession {
    fn drop(&mut self) {
        self.halt_display();
    }
}
