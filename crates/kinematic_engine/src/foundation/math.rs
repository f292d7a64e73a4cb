//! Math utilities and types
//!
//! Provides the fundamental math types used by the physics core.

pub use nalgebra::{Quaternion, Unit, UnitQuaternion, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

/// Angle in degrees between a surface normal and the world up axis.
///
/// Flat ground returns 0, a vertical wall returns 90. The normal is expected
/// to be unit length; the dot product is clamped so near-unit inputs do not
/// produce NaN from `acos`.
pub fn surface_angle(normal: Vec3) -> f32 {
    utils::rad_to_deg(normal.dot(&Vec3::y_axis()).clamp(-1.0, 1.0).acos())
}
