//! Raycast hit record

use crate::foundation::math::Vec3;
use crate::physics::platform::PlatformKey;

/// Result of a ray intersection test, immutable once produced.
///
/// Produced by the collider collaborator, consumed read-only by the axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// The point of intersection in world space
    pub point: Vec3,
    /// The surface normal at the intersection point (unit length)
    pub normal: Vec3,
    /// Key of the moving platform owning the hit surface, when the hit
    /// object exposes one. Never dereferenced without a registry check.
    pub platform: Option<PlatformKey>,
}

impl RaycastHit {
    /// Create a hit record for plain static geometry
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal,
            platform: None,
        }
    }

    /// Create a hit record for a surface owned by a moving platform
    pub fn on_platform(point: Vec3, normal: Vec3, platform: PlatformKey) -> Self {
        Self {
            point,
            normal,
            platform: Some(platform),
        }
    }
}
