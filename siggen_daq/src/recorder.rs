//! Recorder state machine: `Closed → Open (header written) → insert* →
//! Closed (trailer written)`. One recorder instance owns one output file
//! for its Open lifetime.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, WriteBytesExt};
use chrono::Local;
use thiserror::Error;

use crate::format::FileHeader;

#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("recording i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("recorder is closed")]
    Closed,
}

/// Per-recording metadata stamped into the header, supplied by the shell
/// as plain unvalidated configuration values.
#[derive(Debug, Clone, Copy)]
pub struct RecordingMeta {
    pub serial_num: i32,
    pub sampling_freq: i32,
    pub sensor_type: i32,
    pub sensitivity: i32,
    pub channel_num: i32,
}

/// Writes one PDAT recording. `create` opens the file and writes the
/// header; `insert` appends raw samples; `close` writes the trailer, after
/// which the file is immutable.
///
/// Dropping a recorder that is still open closes it, so the trailer is
/// never silently omitted.
#[derive(Debug)]
pub struct Recorder {
    file: Option<BufWriter<File>>,
    header: FileHeader,
    path: PathBuf,
    record_count: u32,
}

impl Recorder {
    /// Open a new timestamped recording file in `dir` and write its header.
    /// Filename convention: `{YYYY-MM-DD_HH-MM-SS}_{channel}.bin`, with the
    /// timestamp taken here, at open.
    pub fn create(dir: &Path, meta: &RecordingMeta) -> Result<Self, RecorderError> {
        let now = Local::now();
        let filename = format!(
            "{}_{}.bin",
            now.format("%Y-%m-%d_%H-%M-%S"),
            meta.channel_num
        );
        let path = dir.join(filename);

        let header = FileHeader {
            serial_num: meta.serial_num,
            sampling_freq: meta.sampling_freq,
            sensor_type: meta.sensor_type,
            sensitivity: meta.sensitivity,
            channel_num: meta.channel_num,
            created: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let mut file = BufWriter::new(File::create(&path)?);
        header.write_to(&mut file)?;
        log::info!("opened recording file {}", path.display());

        Ok(Self {
            file: Some(file),
            header,
            path,
            record_count: 0,
        })
    }

    /// Append raw little-endian doubles in buffer order. On a write error
    /// the stream state is unspecified (no rollback); the error is returned
    /// and the recorder stays open.
    pub fn insert(&mut self, samples: &[f64]) -> Result<(), RecorderError> {
        let file = self.file.as_mut().ok_or(RecorderError::Closed)?;
        for &sample in samples {
            file.write_f64::<LittleEndian>(sample)?;
        }
        self.record_count += samples.len() as u32;
        Ok(())
    }

    /// Write the trailer and release the file handle. Closing an already
    /// closed recorder is a no-op.
    pub fn close(&mut self) -> Result<(), RecorderError> {
        let Some(mut file) = self.file.take() else {
            return Ok(());
        };
        file.write_u32::<LittleEndian>(self.record_count)?;
        file.flush()?;
        log::info!(
            "saved {} data records to {}",
            self.record_count,
            self.path.display()
        );
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Samples accumulated across all `insert` calls so far.
    pub fn record_count(&self) -> u32 {
        self.record_count
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        if self.file.is_some() {
            if let Err(err) = self.close() {
                log::error!("failed to close recording {}: {err}", self.path.display());
            }
        }
    }
}
