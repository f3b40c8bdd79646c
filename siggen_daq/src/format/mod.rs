//! On-disk layout of a recording (PDAT format).
//!
//! ```text
//! header   100 bytes  signature, metadata ints, timestamp, reserved
//! body     N * 8      IEEE-754 f64, little-endian, one per sample
//! trailer  4 bytes    u32 record count (samples across all inserts)
//! ```
//!
//! All multi-byte fields are little-endian and explicitly packed; the
//! layout does not depend on platform struct padding.

pub mod reader;

pub use reader::Recording;

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use thiserror::Error;

/// 4-byte ASCII signature at offset 0, not NUL-terminated.
pub const SIGNATURE: [u8; 4] = *b"PDAT";
/// Current (and only supported) format version.
pub const FORMAT_VERSION: i32 = 3;
/// Fixed header size: signature + 6 ints + 20-byte timestamp + reserved.
pub const HEADER_LEN: usize = 4 + 6 * 4 + DATE_LEN + RESERVED_LEN;
/// Trailer is a single u32 record count.
pub const TRAILER_LEN: usize = 4;

const DATE_LEN: usize = 20;
const RESERVED_LEN: usize = 52;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("bad signature {0:?}, expected \"PDAT\"")]
    BadSignature([u8; 4]),
    #[error("unsupported format version {0}")]
    UnsupportedVersion(i32),
    #[error("file truncated")]
    Truncated,
    #[error("trailer declares {declared} records but body holds {actual}")]
    CountMismatch { declared: u32, actual: usize },
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}

/// Fixed-size recording header. The version is implicit: writing always
/// stamps [`FORMAT_VERSION`], reading rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    /// DAQ serial number (vestigial; there is no real device).
    pub serial_num: i32,
    /// Sampling frequency the body was generated at, in Hz.
    pub sampling_freq: i32,
    /// Sensor type tag, e.g. 1 vibration, 0 tacho.
    pub sensor_type: i32,
    /// Sensor sensitivity, unvalidated pass-through.
    pub sensitivity: i32,
    /// Channel this recording belongs to.
    pub channel_num: i32,
    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS`, local time.
    pub created: String,
}

impl FileHeader {
    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_all(&SIGNATURE)?;
        w.write_i32::<LittleEndian>(FORMAT_VERSION)?;
        w.write_i32::<LittleEndian>(self.serial_num)?;
        w.write_i32::<LittleEndian>(self.sampling_freq)?;
        w.write_i32::<LittleEndian>(self.sensor_type)?;
        w.write_i32::<LittleEndian>(self.sensitivity)?;
        w.write_i32::<LittleEndian>(self.channel_num)?;

        // Timestamp field is fixed-width, NUL-padded.
        let mut date = [0u8; DATE_LEN];
        let bytes = self.created.as_bytes();
        let len = bytes.len().min(DATE_LEN - 1);
        date[..len].copy_from_slice(&bytes[..len]);
        w.write_all(&date)?;

        w.write_all(&[0u8; RESERVED_LEN])?;
        Ok(())
    }

    pub fn read_from<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        let mut signature = [0u8; 4];
        read_exact(r, &mut signature)?;
        if signature != SIGNATURE {
            return Err(FormatError::BadSignature(signature));
        }

        let version = r.read_i32::<LittleEndian>()?;
        if version != FORMAT_VERSION {
            return Err(FormatError::UnsupportedVersion(version));
        }

        let serial_num = r.read_i32::<LittleEndian>()?;
        let sampling_freq = r.read_i32::<LittleEndian>()?;
        let sensor_type = r.read_i32::<LittleEndian>()?;
        let sensitivity = r.read_i32::<LittleEndian>()?;
        let channel_num = r.read_i32::<LittleEndian>()?;

        let mut date = [0u8; DATE_LEN];
        read_exact(r, &mut date)?;
        let end = date.iter().position(|&b| b == 0).unwrap_or(DATE_LEN);
        let created = String::from_utf8_lossy(&date[..end]).into_owned();

        let mut reserved = [0u8; RESERVED_LEN];
        read_exact(r, &mut reserved)?;

        Ok(Self {
            serial_num,
            sampling_freq,
            sensor_type,
            sensitivity,
            channel_num,
            created,
        })
    }
}

fn read_exact<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<(), FormatError> {
    r.read_exact(buf).map_err(|err| {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            FormatError::Truncated
        } else {
            FormatError::Io(err)
        }
    })
}
