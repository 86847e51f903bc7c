//! Moon component

use super::{AnimationError, Oscillator};
use crate::core::MoonConfig;
use crate::ecs::Component;
use crate::foundation::math::{constants::HALF_PI, Vec3};

/// Moon on a fixed elliptical path
///
/// `x = sin(t * w) * rx`, `y = cos(t * w) * ry`; depth stays where the
/// composer put it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonComponent {
    horizontal: Oscillator,
    vertical: Oscillator,
}

impl Component for MoonComponent {}

impl MoonComponent {
    /// Create from the scene's moon section
    pub fn from_config(config: &MoonConfig) -> Result<Self, AnimationError> {
        Ok(Self {
            horizontal: Oscillator::new(config.frequency, config.radius_x, 0.0)?,
            vertical: Oscillator::new(config.frequency, config.radius_y, 0.0)?.with_phase(HALF_PI),
        })
    }

    /// Place `position` on the path at elapsed time `t`
    pub fn place(&self, position: &mut Vec3, t: f32) {
        position.x = self.horizontal.value(t);
        position.y = self.vertical.value(t);
    }
}
