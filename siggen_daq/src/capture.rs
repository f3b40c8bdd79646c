//! Capture triggers: the one-shot open → insert → close sequence and the
//! polled wall-clock timer behind the periodic-save toggle.

use std::path::{Path, PathBuf};
use std::time::Duration;

use quanta::{Clock, Instant};

use crate::recorder::{Recorder, RecorderError, RecordingMeta};

/// Write one complete recording of `samples` to a new timestamped file in
/// `dir`. This is the whole capture: header, body, trailer, close, as one
/// synchronous pass on the calling thread.
pub fn capture_buffer(
    dir: &Path,
    meta: &RecordingMeta,
    samples: &[f64],
) -> Result<PathBuf, RecorderError> {
    let mut recorder = Recorder::create(dir, meta)?;
    recorder.insert(samples)?;
    recorder.close()?;
    Ok(recorder.path().to_path_buf())
}

/// Polled periodic-capture timer. The frame loop calls [`poll`] once per
/// frame; when the configured interval has elapsed since the last trigger
/// (or since enabling), `poll` reports due and re-origins. A delayed frame
/// simply triggers late; there is no catch-up and no missed-tick
/// accounting.
///
/// [`poll`]: PeriodicCapture::poll
#[derive(Debug)]
pub struct PeriodicCapture {
    clock: Clock,
    origin: Option<Instant>,
    interval: Duration,
    enabled: bool,
}

impl PeriodicCapture {
    pub fn new(interval: Duration) -> Self {
        Self::with_clock(interval, Clock::new())
    }

    fn with_clock(interval: Duration, clock: Clock) -> Self {
        Self {
            clock,
            origin: None,
            interval,
            enabled: false,
        }
    }

    /// Toggling on re-origins the timer; the first capture happens one full
    /// interval after enabling, not immediately.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.origin = enabled.then(|| self.clock.now());
    }

    /// Changing the interval does not reset the elapsed time; a shorter
    /// interval can make the next poll due at once.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Once-per-frame check. Returns true when a capture is due now.
    pub fn poll(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        let now = self.clock.now();
        let origin = *self.origin.get_or_insert(now);
        if now.saturating_duration_since(origin) >= self.interval {
            self.origin = Some(now);
            true
        } else {
            false
        }
    }
}
