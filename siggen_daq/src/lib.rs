//! Recording side of the signal generator: the PDAT binary file format,
//! the recorder state machine that writes it, capture scheduling, session
//! configuration, and the per-frame engine the UI shell drives.
//!
//! Everything runs synchronously on the caller's frame loop; a capture is
//! one open → insert → close pass over the current sum buffer.

pub mod capture;
pub mod engine;
pub mod format;
pub mod recorder;
pub mod session;

pub use capture::{PeriodicCapture, capture_buffer};
pub use engine::{Engine, FrameOutcome};
pub use format::{FORMAT_VERSION, FileHeader, FormatError, Recording};
pub use recorder::{Recorder, RecorderError, RecordingMeta};
pub use session::{AcqConfig, ChannelConfig, ConfigError, SessionConfig, Theme};
