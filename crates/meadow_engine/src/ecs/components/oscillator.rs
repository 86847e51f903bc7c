//! Sine oscillator shared by the time-driven animators
//!
//! `value(t) = offset + amplitude * sin(t * frequency + phase)`

use super::AnimationError;
use crate::foundation::math::constants::TAU;

/// Pure periodic value generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    frequency: f32,
    amplitude: f32,
    offset: f32,
    phase: f32,
}

impl Oscillator {
    /// Create from an angular frequency in radians per second
    ///
    /// Zero or non-finite frequencies are rejected, as are non-finite
    /// amplitudes and offsets.
    pub fn new(frequency: f32, amplitude: f32, offset: f32) -> Result<Self, AnimationError> {
        if !frequency.is_finite() || frequency == 0.0 {
            return Err(AnimationError::InvalidConfiguration(format!(
                "oscillator frequency must be finite and non-zero, got {frequency}"
            )));
        }
        if !amplitude.is_finite() || !offset.is_finite() {
            return Err(AnimationError::InvalidConfiguration(format!(
                "oscillator amplitude/offset must be finite, got {amplitude}/{offset}"
            )));
        }
        Ok(Self {
            frequency,
            amplitude,
            offset,
            phase: 0.0,
        })
    }

    /// Create from a period in seconds
    pub fn with_period(period: f32, amplitude: f32, offset: f32) -> Result<Self, AnimationError> {
        if !period.is_finite() || period == 0.0 {
            return Err(AnimationError::InvalidConfiguration(format!(
                "oscillator period must be finite and non-zero, got {period}"
            )));
        }
        Self::new(TAU / period, amplitude, offset)
    }

    /// Builder pattern: shift the wave by `phase` radians
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    /// Sample at elapsed time `t` (seconds)
    pub fn value(&self, t: f32) -> f32 {
        self.amplitude.mul_add((t * self.frequency + self.phase).sin(), self.offset)
    }

    /// Angular frequency in radians per second
    pub fn frequency(&self) -> f32 {
        self.frequency
    }
}
