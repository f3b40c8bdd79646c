//! Session configuration: everything the shell used to keep in
//! free-standing globals (theme, periodic-save flag, folder path) plus the
//! acquisition metadata block, gathered into one struct that is passed into
//! the frame entry point. Persisted as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::recorder::RecordingMeta;

/// Number of channel slots in the acquisition block.
pub const CHANNEL_SLOTS: usize = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// UI color scheme. Plain data here; applying it is the shell's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Per-channel acquisition settings. All values are unvalidated
/// pass-through into the recording header.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// 1 means the channel is usable, 0 means failed.
    pub status: i32,
    pub sensitivity: i32,
    /// e.g. 1 for vibration, 0 for tacho.
    pub sensor_type: i32,
}

/// Acquisition metadata block. The DAQ naming is vestigial; nothing here
/// talks to hardware, the fields just end up in recording headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcqConfig {
    pub daq_serial_number: i32,
    pub acq_interval: i32,
    pub acq_duration: i32,
    pub channels: [ChannelConfig; CHANNEL_SLOTS],
    pub start_channel: usize,
    pub channel_count: usize,
}

impl Default for AcqConfig {
    fn default() -> Self {
        Self {
            daq_serial_number: 1,
            acq_interval: 100,
            acq_duration: 10,
            channels: [ChannelConfig {
                status: 1,
                sensitivity: 1,
                sensor_type: 1,
            }; CHANNEL_SLOTS],
            start_channel: 0,
            channel_count: 1,
        }
    }
}

/// Everything the frame entry point needs from the shell for one frame:
/// the sample window, the output destination, the save cadence, and the
/// acquisition metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub sampling_freq: u32,
    /// Sample window duration in seconds.
    pub duration: f64,
    pub output_dir: PathBuf,
    pub periodic_save: bool,
    /// Periodic capture interval in seconds.
    pub save_interval_secs: f64,
    pub theme: Theme,
    pub acq: AcqConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sampling_freq: 1000,
            duration: 10.0,
            output_dir: PathBuf::from("data"),
            periodic_save: false,
            save_interval_secs: 60.0,
            theme: Theme::Dark,
            acq: AcqConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Header metadata for a capture on the session's start channel. An
    /// out-of-range start channel is clamped to the last slot rather than
    /// failing; configuration is pass-through, not validated.
    pub fn recording_meta(&self) -> RecordingMeta {
        let channel = self.acq.start_channel.min(CHANNEL_SLOTS - 1);
        let settings = self.acq.channels[channel];
        RecordingMeta {
            serial_num: self.acq.daq_serial_number,
            sampling_freq: self.sampling_freq as i32,
            sensor_type: settings.sensor_type,
            sensitivity: settings.sensitivity,
            channel_num: channel as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let mut config = SessionConfig::default();
        config.sampling_freq = 8000;
        config.periodic_save = true;
        config.save_interval_secs = 2.5;
        config.theme = Theme::Light;
        config.acq.channels[1].sensor_type = 0;

        let path = std::env::temp_dir().join(format!(
            "siggen-session-{}.json",
            std::process::id()
        ));
        config.save(&path).unwrap();
        let restored = SessionConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(restored.sampling_freq, 8000);
        assert!(restored.periodic_save);
        assert_eq!(restored.save_interval_secs, 2.5);
        assert_eq!(restored.theme, Theme::Light);
        assert_eq!(restored.acq.channels[1].sensor_type, 0);
    }

    #[test]
    fn recording_meta_uses_the_start_channel() {
        let mut config = SessionConfig::default();
        config.acq.start_channel = 2;
        config.acq.channels[2].sensitivity = 42;

        let meta = config.recording_meta();
        assert_eq!(meta.channel_num, 2);
        assert_eq!(meta.sensitivity, 42);
        assert_eq!(meta.sampling_freq, 1000);
    }

    #[test]
    fn out_of_range_start_channel_falls_back_to_last_slot() {
        let mut config = SessionConfig::default();
        config.acq.start_channel = 99;
        assert_eq!(config.recording_meta().channel_num, (CHANNEL_SLOTS - 1) as i32);
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "siggen-session-bad-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").unwrap();
        let err = SessionConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
