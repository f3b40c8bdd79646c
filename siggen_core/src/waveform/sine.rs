use std::f64::consts::PI;
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Sine wave with an optional wall-clock amplitude ramp.
///
/// `evaluate(t) = (amplitude + ramp_rate * minutes_since_reset) * sin(2π·f·t + phase)`
///
/// Phase is stored and consumed in plain radians. The original tool labeled
/// its phase knob in units of π while feeding the raw value to the formula;
/// the computation here is the authoritative one and any "π units" label is
/// a display concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sine {
    frequency: f64,
    phase: f64,
    amplitude: f64,
    /// Amplitude drift in amplitude units per minute of wall-clock time
    /// since the last `reset()`. Zero disables the ramp.
    ramp_rate: f64,
    #[serde(skip)]
    ramp_started: Option<Instant>,
}

impl Sine {
    /// Create a sine wave. Negative frequencies are clamped to zero.
    pub fn new(frequency: f64, phase: f64, amplitude: f64) -> Self {
        Self {
            frequency: frequency.max(0.0),
            phase,
            amplitude,
            ramp_rate: 0.0,
            ramp_started: Some(Instant::now()),
        }
    }

    pub fn with_ramp_rate(mut self, ramp_rate: f64) -> Self {
        self.ramp_rate = ramp_rate;
        self
    }

    pub fn evaluate(&mut self, t: f64) -> f64 {
        let amplitude = self.effective_amplitude();
        amplitude * (2.0 * PI * self.frequency * t + self.phase).sin()
    }

    /// Re-origin the amplitude-ramp clock to now.
    pub fn reset(&mut self) {
        self.ramp_started = Some(Instant::now());
    }

    /// Current amplitude including ramp drift. With `ramp_rate == 0` this
    /// is exactly the configured amplitude.
    pub fn effective_amplitude(&mut self) -> f64 {
        if self.ramp_rate == 0.0 {
            return self.amplitude;
        }
        // A deserialized sine has no ramp origin; the ramp starts counting
        // from the first evaluation.
        let started = *self.ramp_started.get_or_insert_with(Instant::now);
        let minutes = started.elapsed().as_secs_f64() / 60.0;
        self.amplitude + self.ramp_rate * minutes
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn ramp_rate(&self) -> f64 {
        self.ramp_rate
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency.max(0.0);
    }

    pub fn set_phase(&mut self, phase: f64) {
        self.phase = phase;
    }

    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
    }

    pub fn set_ramp_rate(&mut self, ramp_rate: f64) {
        self.ramp_rate = ramp_rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn sine_is_periodic_without_ramp() {
        let mut sine = Sine::new(5.0, 0.3, 2.0);
        let period = 1.0 / 5.0;

        for i in 0..50 {
            let t = i as f64 * 0.013;
            let a = sine.evaluate(t);
            let b = sine.evaluate(t + period);
            assert!(approx_eq!(f64, a, b, epsilon = 1e-9), "t={t}: {a} vs {b}");
        }
    }

    #[test]
    fn phase_shifts_the_waveform() {
        let mut unshifted = Sine::new(1.0, 0.0, 1.0);
        let mut shifted = Sine::new(1.0, PI / 2.0, 1.0);

        // sin(x + π/2) = cos(x), so at t=0 the shifted wave is at its peak.
        assert!(approx_eq!(f64, unshifted.evaluate(0.0), 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, shifted.evaluate(0.0), 1.0, epsilon = 1e-12));
    }

    #[test]
    fn negative_frequency_clamps_to_zero() {
        let mut sine = Sine::new(-10.0, 0.0, 1.0);
        assert_eq!(sine.frequency(), 0.0);
        // Constant output: sin(phase) scaled, at phase 0 that's 0.
        assert_eq!(sine.evaluate(0.0), sine.evaluate(123.0));
    }

    #[test]
    fn zero_ramp_rate_keeps_amplitude_fixed() {
        let mut sine = Sine::new(1.0, 0.0, 3.5);
        assert_eq!(sine.effective_amplitude(), 3.5);
        sine.reset();
        assert_eq!(sine.effective_amplitude(), 3.5);
    }
}
