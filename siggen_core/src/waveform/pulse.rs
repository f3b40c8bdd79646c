use serde::{Deserialize, Serialize};

/// Rectangular pulse train: `amplitude` for the first `duty_cycle` fraction
/// of each period, `0` for the rest.
///
/// Degenerate-parameter policy: `frequency <= 0` has no finite period, so
/// the output is constant low (0) instead of dividing by zero. `duty_cycle`
/// is clamped to [0, 1] on construction and mutation; 0 is always low,
/// 1 is always high.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PulseTrain {
    frequency: f64,
    duty_cycle: f64,
    amplitude: f64,
}

impl PulseTrain {
    pub fn new(frequency: f64, duty_cycle: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            duty_cycle: duty_cycle.clamp(0.0, 1.0),
            amplitude,
        }
    }

    pub fn evaluate(&self, t: f64) -> f64 {
        if self.frequency <= 0.0 {
            return 0.0;
        }
        let period = 1.0 / self.frequency;
        if t.rem_euclid(period) < self.duty_cycle * period {
            self.amplitude
        } else {
            0.0
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn duty_cycle(&self) -> f64 {
        self.duty_cycle
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    pub fn set_duty_cycle(&mut self, duty_cycle: f64) {
        self.duty_cycle = duty_cycle.clamp(0.0, 1.0);
    }

    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
    }
}
