//! Transform component for the ECS system
//!
//! Pure data component (no logic beyond conversions). Coordinates are Y-up
//! right-handed; the platform surface sits near y = 1.

use crate::foundation::math::{Vec3, Mat4, Quat};
use crate::ecs::{Component, Entity};

/// ECS Transform component
///
/// Local transform of an entity. Entities with a [`Parent`] are expressed in
/// their parent's space; everything else is in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    /// Position (Y-up right-handed)
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Component for TransformComponent {}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl TransformComponent {
    /// Create identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create from position only
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Builder pattern: Set scale (uniform)
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Builder pattern: Set scale (non-uniform)
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Set rotation to a pure yaw (rotation about +Y, radians)
    pub fn set_yaw(&mut self, angle: f32) {
        self.rotation = Quat::from_axis_angle(&Vec3::y_axis(), angle);
    }

    /// Set the same scale on all three axes
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::new(scale, scale, scale);
    }
}

/// Parent link for entities positioned relative to another entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent(pub Entity);

impl Component for Parent {}
