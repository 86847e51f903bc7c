//! Flower bloom state and scale curve

use super::AnimationError;
use crate::core::BloomConfig;
use crate::ecs::Component;
use crate::foundation::math::utils;

/// The two bloom targets a flower alternates between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BloomTarget {
    /// Closed bloom
    Small,
    /// Open bloom
    Large,
}

impl BloomTarget {
    /// The other target
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Small => Self::Large,
            Self::Large => Self::Small,
        }
    }
}

/// Per-flower bloom state, written by the bloom tick and read every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowerComponent {
    /// Current bloom target
    pub bloom_target: BloomTarget,
}

impl Component for FlowerComponent {}

impl Default for FlowerComponent {
    fn default() -> Self {
        Self {
            bloom_target: BloomTarget::Small,
        }
    }
}

/// Maps elapsed time and bloom target to a rendered scale
///
/// `scale = sin(t * frequency) * (target - small) + bias`, clamped to the
/// range spanned by the two targets. With the small target the pulsation
/// amplitude is zero, so the flower rests at `bias`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomCurve {
    small: f32,
    large: f32,
    bias: f32,
    frequency: f32,
}

impl BloomCurve {
    /// Create a curve; the frequency must be finite and non-zero
    pub fn new(small: f32, large: f32, bias: f32, frequency: f32) -> Result<Self, AnimationError> {
        if !frequency.is_finite() || frequency == 0.0 {
            return Err(AnimationError::InvalidConfiguration(format!(
                "bloom frequency must be finite and non-zero, got {frequency}"
            )));
        }
        if !(small.is_finite() && large.is_finite() && bias.is_finite()) {
            return Err(AnimationError::InvalidConfiguration("bloom scales must be finite".to_string()));
        }
        Ok(Self { small, large, bias, frequency })
    }

    /// Build from the scene's bloom section
    pub fn from_config(config: &BloomConfig) -> Result<Self, AnimationError> {
        Self::new(config.small_scale, config.large_scale, config.bias, config.frequency)
    }

    /// Scale value of a target
    pub fn target_scale(&self, target: BloomTarget) -> f32 {
        match target {
            BloomTarget::Small => self.small,
            BloomTarget::Large => self.large,
        }
    }

    /// Rendered scale at elapsed time `t` (seconds)
    pub fn scale_at(&self, t: f32, target: BloomTarget) -> f32 {
        let amplitude = self.target_scale(target) - self.small;
        let raw = (t * self.frequency).sin().mul_add(amplitude, self.bias);
        let (lo, hi) = self.bounds();
        utils::clamp(raw, lo, hi)
    }

    /// Inclusive range every rendered scale falls in
    pub fn bounds(&self) -> (f32, f32) {
        (self.small.min(self.large), self.small.max(self.large))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> BloomCurve {
        BloomCurve::from_config(&BloomConfig::default()).unwrap()
    }

    #[test]
    fn test_small_target_rests_at_bias() {
        let curve = curve();
        for t in [0.0, 0.7, 12.5, 1000.0] {
            assert_relative_eq!(curve.scale_at(t, BloomTarget::Small), 1.5);
        }
    }

    #[test]
    fn test_large_target_pulses() {
        let curve = curve();
        // sin(0.25) * 2 + 1.5
        assert_relative_eq!(curve.scale_at(0.25, BloomTarget::Large), 0.25f32.sin() * 2.0 + 1.5, epsilon = 1e-6);
        // Peak is clamped to the large endpoint
        assert_relative_eq!(curve.scale_at(std::f32::consts::FRAC_PI_2, BloomTarget::Large), 3.0);
        // Trough is clamped to the small endpoint
        assert_relative_eq!(curve.scale_at(3.0 * std::f32::consts::FRAC_PI_2, BloomTarget::Large), 1.0);
    }

    #[test]
    fn test_scale_always_within_endpoints() {
        let curve = curve();
        let mut t = 0.0;
        while t < 60.0 {
            for target in [BloomTarget::Small, BloomTarget::Large] {
                let scale = curve.scale_at(t, target);
                assert!((1.0..=3.0).contains(&scale), "scale {scale} at t={t}");
            }
            t += 0.016;
        }
    }

    #[test]
    fn test_toggle() {
        assert_eq!(BloomTarget::Small.toggled(), BloomTarget::Large);
        assert_eq!(BloomTarget::Large.toggled().toggled(), BloomTarget::Large);
    }

    #[test]
    fn test_zero_frequency_rejected() {
        assert!(BloomCurve::new(1.0, 3.0, 1.5, 0.0).is_err());
    }
}
