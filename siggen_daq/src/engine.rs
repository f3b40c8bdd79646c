//! Per-frame entry point. The shell (GUI or the headless harness) calls
//! [`Engine::frame`] once per render frame; everything inside runs
//! synchronously on that one thread, so signal mutation, regeneration, and
//! file I/O are strictly serialized and need no locking.

use std::path::{Path, PathBuf};
use std::time::Duration;

use siggen_core::preset::{self, PresetError};
use siggen_core::{SampleGrid, SignalSet};

use crate::capture::{PeriodicCapture, capture_buffer};
use crate::session::SessionConfig;

/// What one frame produced: the regenerated buffer size and, if a save
/// trigger fired, where the recording landed.
#[derive(Debug, Clone, Default)]
pub struct FrameOutcome {
    pub sample_count: usize,
    pub saved: Option<PathBuf>,
}

/// Owns the signal set, the sample grid, and the periodic-capture timer.
pub struct Engine {
    signals: SignalSet,
    grid: SampleGrid,
    periodic: PeriodicCapture,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            signals: SignalSet::new(),
            grid: SampleGrid::new(),
            periodic: PeriodicCapture::new(Duration::from_secs(60)),
        }
    }

    /// Run one frame: rebuild the time axis for the session's window,
    /// regenerate every waveform buffer and their sum, apply deferred
    /// signal removals, then evaluate save triggers (the shell's explicit
    /// `save_now` or the periodic timer).
    ///
    /// A failed capture is logged and skipped; it never stops the frame
    /// loop, and a failed periodic save just waits for the next interval.
    pub fn frame(&mut self, session: &SessionConfig, save_now: bool) -> FrameOutcome {
        // Config is unvalidated pass-through; a non-finite or negative
        // interval keeps the previous one instead of aborting the loop.
        if let Ok(interval) = Duration::try_from_secs_f64(session.save_interval_secs) {
            self.periodic.set_interval(interval);
        }
        self.periodic.set_enabled(session.periodic_save);

        self.grid.rebuild(session.sampling_freq, session.duration);
        self.grid.regenerate(&mut self.signals);
        self.signals.sweep_removed();

        let due = save_now || self.periodic.poll();
        let saved = if due {
            match capture_buffer(
                &session.output_dir,
                &session.recording_meta(),
                self.grid.sum_samples(),
            ) {
                Ok(path) => Some(path),
                Err(err) => {
                    log::error!("capture failed: {err}");
                    None
                }
            }
        } else {
            None
        };

        FrameOutcome {
            sample_count: self.grid.sample_count(),
            saved,
        }
    }

    pub fn signals(&self) -> &SignalSet {
        &self.signals
    }

    pub fn signals_mut(&mut self) -> &mut SignalSet {
        &mut self.signals
    }

    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    /// Replace the signal set with the contents of a preset file.
    pub fn load_preset(&mut self, path: &Path) -> Result<(), PresetError> {
        self.signals = preset::load_preset(path)?;
        Ok(())
    }

    pub fn save_preset(&self, path: &Path) -> Result<(), PresetError> {
        preset::save_preset(path, &self.signals)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
