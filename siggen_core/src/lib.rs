//! Synthesis core for the signal generator: waveform variants, the ordered
//! signal set the UI edits, and the sample grid that turns (sampling
//! frequency, duration) into time/amplitude buffers once per frame.
//!
//! Everything here is synchronous and owned by the caller's frame loop.
//! File recording and capture scheduling live in `siggen-daq`.

pub mod preset;
pub mod sample_grid;
pub mod signal_set;
pub mod waveform;

pub use preset::{PresetError, load_preset, save_preset};
pub use sample_grid::SampleGrid;
pub use signal_set::SignalSet;
pub use waveform::{PulseTrain, Sine, Waveform, WaveformKind, WhiteNoise};
