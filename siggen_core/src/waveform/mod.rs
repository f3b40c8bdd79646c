pub mod noise;
pub mod pulse;
pub mod sine;

pub use noise::WhiteNoise;
pub use pulse::PulseTrain;
pub use sine::Sine;

use serde::{Deserialize, Serialize};

/// A single synthetic waveform. Closed set of variants; dispatch is a plain
/// match, so adding a variant is a compile-time checklist rather than a
/// downcast hunt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Waveform {
    Sine(Sine),
    WhiteNoise(WhiteNoise),
    PulseTrain(PulseTrain),
}

/// Variant tag for UI panel selection and labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveformKind {
    Sine,
    WhiteNoise,
    PulseTrain,
}

impl WaveformKind {
    pub fn label(self) -> &'static str {
        match self {
            WaveformKind::Sine => "Sine Wave",
            WaveformKind::WhiteNoise => "White Noise",
            WaveformKind::PulseTrain => "Pulse Train",
        }
    }
}

impl Waveform {
    pub fn kind(&self) -> WaveformKind {
        match self {
            Waveform::Sine(_) => WaveformKind::Sine,
            Waveform::WhiteNoise(_) => WaveformKind::WhiteNoise,
            Waveform::PulseTrain(_) => WaveformKind::PulseTrain,
        }
    }

    /// Sample this waveform at time `t` (seconds since the start of the
    /// capture window). Never panics; degenerate parameters produce the
    /// variant's documented fallback output instead.
    ///
    /// Takes `&mut self` because noise advances its generator state on
    /// every call - noise output is a stream, not a function of `t`.
    pub fn evaluate(&mut self, t: f64) -> f64 {
        match self {
            Waveform::Sine(sine) => sine.evaluate(t),
            Waveform::WhiteNoise(noise) => noise.evaluate(t),
            Waveform::PulseTrain(pulse) => pulse.evaluate(t),
        }
    }

    /// Reset variant-specific runtime state: the sine amplitude-ramp clock
    /// and the noise generator seed. Parameters are untouched.
    pub fn reset(&mut self) {
        match self {
            Waveform::Sine(sine) => sine.reset(),
            Waveform::WhiteNoise(noise) => noise.reset(),
            Waveform::PulseTrain(_) => {}
        }
    }
}

impl From<Sine> for Waveform {
    fn from(sine: Sine) -> Self {
        Waveform::Sine(sine)
    }
}

impl From<WhiteNoise> for Waveform {
    fn from(noise: WhiteNoise) -> Self {
        Waveform::WhiteNoise(noise)
    }
}

impl From<PulseTrain> for Waveform {
    fn from(pulse: PulseTrain) -> Self {
        Waveform::PulseTrain(pulse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Waveform::from(Sine::new(1.0, 0.0, 1.0)).kind(), WaveformKind::Sine);
        assert_eq!(Waveform::from(WhiteNoise::new(1.0)).kind(), WaveformKind::WhiteNoise);
        assert_eq!(
            Waveform::from(PulseTrain::new(1.0, 0.5, 1.0)).kind(),
            WaveformKind::PulseTrain
        );
    }

    #[test]
    fn waveform_survives_json_round_trip() {
        let original = Waveform::from(Sine::new(2.5, 0.25, 3.0));
        let json = serde_json::to_string(&original).unwrap();
        let restored: Waveform = serde_json::from_str(&json).unwrap();

        match restored {
            Waveform::Sine(sine) => {
                assert_eq!(sine.frequency(), 2.5);
                assert_eq!(sine.phase(), 0.25);
                assert_eq!(sine.amplitude(), 3.0);
            }
            other => panic!("expected sine, got {:?}", other.kind()),
        }
    }
}
