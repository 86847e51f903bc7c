//! Butterfly component

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Keyboard-steered butterfly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButterflyComponent {
    /// Lowest allowed height (keeps the butterfly above the platform)
    pub min_height: f32,
}

impl Component for ButterflyComponent {}

impl ButterflyComponent {
    /// Create with a height floor
    pub fn new(min_height: f32) -> Self {
        Self { min_height }
    }

    /// Apply one frame of movement to `position`
    pub fn advance(&self, position: &mut Vec3, movement: Vec3) {
        position.x += movement.x;
        position.y = (position.y + movement.y).max(self.min_height);
        position.z += movement.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_on_all_axes() {
        let butterfly = ButterflyComponent::new(1.0);
        let mut position = Vec3::new(0.0, 5.0, 5.0);

        butterfly.advance(&mut position, Vec3::new(0.5, 0.5, -0.5));
        assert_eq!(position, Vec3::new(0.5, 5.5, 4.5));
    }

    #[test]
    fn test_height_floor() {
        let butterfly = ButterflyComponent::new(1.0);
        let mut position = Vec3::new(0.0, 1.2, 0.0);

        butterfly.advance(&mut position, Vec3::new(0.0, -0.5, 0.0));
        assert_eq!(position.y, 1.0);
        butterfly.advance(&mut position, Vec3::new(0.0, -100.0, 0.0));
        assert_eq!(position.y, 1.0);
    }
}
