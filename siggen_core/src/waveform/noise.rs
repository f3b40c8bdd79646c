use serde::{Deserialize, Serialize};

/// Fast pseudo-random number generator for sample synthesis.
/// Linear congruential generator: deterministic, cheap, good enough for
/// test signals (not for anything cryptographic).
#[derive(Debug, Clone)]
struct FastRng {
    state: u32,
}

impl FastRng {
    fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed }, // Avoid zero seed
        }
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.next_u32() as f64) * (1.0 / 4294967296.0) // [0.0, 1.0)
    }

    #[inline]
    fn next_bipolar(&mut self) -> f64 {
        (self.next_f64() - 0.5) * 2.0 // [-1.0, 1.0)
    }
}

const DEFAULT_SEED: u32 = 1;

/// White noise: uniform draws in [-amplitude, amplitude].
///
/// Unlike the periodic variants, output is a stream: every `evaluate` call
/// advances the generator and the time argument is ignored. `reset()`
/// reseeds with the stored seed, so a reset instance replays the same
/// sequence as a fresh one built with that seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "NoiseParams", into = "NoiseParams")]
pub struct WhiteNoise {
    amplitude: f64,
    seed: u32,
    rng: FastRng,
}

/// Persisted form: only the parameters. The generator restarts from the
/// seed on load, same as `reset()`.
#[derive(Serialize, Deserialize)]
struct NoiseParams {
    amplitude: f64,
    seed: u32,
}

impl From<NoiseParams> for WhiteNoise {
    fn from(params: NoiseParams) -> Self {
        Self::with_seed(params.amplitude, params.seed)
    }
}

impl From<WhiteNoise> for NoiseParams {
    fn from(noise: WhiteNoise) -> Self {
        Self {
            amplitude: noise.amplitude,
            seed: noise.seed,
        }
    }
}

impl WhiteNoise {
    pub fn new(amplitude: f64) -> Self {
        Self::with_seed(amplitude, DEFAULT_SEED)
    }

    pub fn with_seed(amplitude: f64, seed: u32) -> Self {
        Self {
            amplitude,
            seed,
            rng: FastRng::new(seed),
        }
    }

    pub fn evaluate(&mut self, _t: f64) -> f64 {
        self.rng.next_bipolar() * self.amplitude
    }

    /// Reseed the generator with the stored seed for a reproducible run.
    pub fn reset(&mut self) {
        self.rng = FastRng::new(self.seed);
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
    }

    /// Change the seed and restart the stream from it.
    pub fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
        self.rng = FastRng::new(seed);
    }
}
