//! Signal-set presets: the composed waveform list saved to and restored
//! from a JSON file, so a session's signal stack survives a restart.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::signal_set::SignalSet;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("preset file i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("preset parse: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn save_preset(path: &Path, signals: &SignalSet) -> Result<(), PresetError> {
    let json = serde_json::to_string_pretty(signals)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_preset(path: &Path) -> Result<SignalSet, PresetError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
