//! Tree components
//!
//! A tree is a root entity with two child entities, trunk and canopy. Each
//! child sways about the y axis on its own oscillator.

use super::Oscillator;
use crate::ecs::{Component, Entity};

/// Links a tree root to its animated parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeComponent {
    /// Trunk child entity
    pub trunk: Entity,
    /// Canopy child entity
    pub canopy: Entity,
}

impl Component for TreeComponent {}

/// Rotation about y driven by elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwayComponent {
    /// Produces the yaw angle in radians
    pub oscillator: Oscillator,
}

impl Component for SwayComponent {}

impl SwayComponent {
    /// Create from an oscillator
    pub fn new(oscillator: Oscillator) -> Self {
        Self { oscillator }
    }

    /// Yaw angle at elapsed time `t`
    pub fn angle_at(&self, t: f32) -> f32 {
        self.oscillator.value(t)
    }
}
