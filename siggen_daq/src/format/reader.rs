//! Parsing a finished recording back into memory. Used by tooling and by
//! tests of the writer; the generator itself only ever writes.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};

use super::{FileHeader, FormatError, TRAILER_LEN};

/// A fully parsed recording: header fields, the sample body in order, and
/// the trailer's declared record count (validated against the body).
#[derive(Debug, Clone)]
pub struct Recording {
    pub header: FileHeader,
    pub samples: Vec<f64>,
    pub record_count: u32,
}

impl Recording {
    pub fn read_from_path(path: &Path) -> Result<Self, FormatError> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::read_from(&mut reader)
    }

    pub fn read_from<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        let header = FileHeader::read_from(r)?;

        let mut rest = Vec::new();
        r.read_to_end(&mut rest)?;
        if rest.len() < TRAILER_LEN {
            return Err(FormatError::Truncated);
        }

        let (body, trailer) = rest.split_at(rest.len() - TRAILER_LEN);
        if body.len() % 8 != 0 {
            return Err(FormatError::Truncated);
        }

        let samples: Vec<f64> = body
            .chunks_exact(8)
            .map(|chunk| LittleEndian::read_f64(chunk))
            .collect();

        let record_count = LittleEndian::read_u32(trailer);
        if record_count as usize != samples.len() {
            return Err(FormatError::CountMismatch {
                declared: record_count,
                actual: samples.len(),
            });
        }

        Ok(Self {
            header,
            samples,
            record_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;

    fn encode(samples: &[f64], declared_count: u32) -> Vec<u8> {
        let header = FileHeader {
            serial_num: 1,
            sampling_freq: 1000,
            sensor_type: 1,
            sensitivity: 1,
            channel_num: 0,
            created: "2026-08-29 00:00:00".into(),
        };
        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();
        for &s in samples {
            buf.write_f64::<LittleEndian>(s).unwrap();
        }
        buf.write_u32::<LittleEndian>(declared_count).unwrap();
        buf
    }

    #[test]
    fn parses_body_and_trailer() {
        let buf = encode(&[1.0, 2.0, 3.0], 3);
        let recording = Recording::read_from(&mut buf.as_slice()).unwrap();
        assert_eq!(recording.samples, vec![1.0, 2.0, 3.0]);
        assert_eq!(recording.record_count, 3);
        assert_eq!(recording.header.sampling_freq, 1000);
    }

    #[test]
    fn empty_body_is_valid() {
        let buf = encode(&[], 0);
        let recording = Recording::read_from(&mut buf.as_slice()).unwrap();
        assert!(recording.samples.is_empty());
        assert_eq!(recording.record_count, 0);
    }

    #[test]
    fn count_mismatch_is_detected() {
        let buf = encode(&[1.0, 2.0], 5);
        let err = Recording::read_from(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            FormatError::CountMismatch { declared: 5, actual: 2 }
        ));
    }

    #[test]
    fn missing_trailer_is_truncated() {
        let mut buf = encode(&[1.0], 1);
        buf.truncate(buf.len() - 5); // chops the trailer plus one body byte
        let err = Recording::read_from(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, FormatError::Truncated));
    }
}
