//! Math utilities and types
//!
//! Provides fundamental math types for scene transforms.

pub use nalgebra::{
    Vector3,
    Matrix4,
    Quaternion,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}

/// Math utility functions
pub mod utils {
    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Wrap `value` into `[-bound, bound]` by jumping to the opposite edge
    ///
    /// Values past `+bound` land exactly on `-bound` and vice versa; anything
    /// inside the range is returned unchanged.
    pub fn wrap_to_opposite(value: f32, bound: f32) -> f32 {
        if value > bound {
            -bound
        } else if value < -bound {
            bound
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::utils::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_wrap_to_opposite() {
        assert_eq!(wrap_to_opposite(10.001, 10.0), -10.0);
        assert_eq!(wrap_to_opposite(-10.5, 10.0), 10.0);
        assert_eq!(wrap_to_opposite(10.0, 10.0), 10.0);
        assert_eq!(wrap_to_opposite(3.0, 10.0), 3.0);
    }
}
