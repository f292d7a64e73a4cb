//! Collider collaborator interface
//!
//! The engine does not implement broad-phase queries or ray-primitive math
//! itself; it drives an externally provided volume through this seam, the
//! same way the collision system consumes a spatial backend behind a trait.

use crate::foundation::math::Vec3;
use crate::physics::collision_layers::LayerMask;
use crate::physics::hit::RaycastHit;

/// Axis-aligned bounds of the body's collision volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Center of the volume in world space
    pub center: Vec3,
    /// Half extent along each axis
    pub half_size: Vec3,
    /// Offset of the volume center from the transform position
    pub offset: Vec3,
}

impl Bounds {
    /// Create bounds centered on `center`
    pub fn new(center: Vec3, half_size: Vec3) -> Self {
        Self {
            center,
            half_size,
            offset: Vec3::zeros(),
        }
    }

    /// Create bounds whose center sits at `offset` from the transform position
    pub fn with_offset(center: Vec3, half_size: Vec3, offset: Vec3) -> Self {
        Self {
            center,
            half_size,
            offset,
        }
    }
}

/// A multi-ray segment cast request.
///
/// `rays` parallel rays are sampled along the segment from `start` to `end`,
/// each cast along `direction` for at most `distance`.
#[derive(Debug, Clone, Copy)]
pub struct RayQuery {
    /// First endpoint of the sampled segment
    pub start: Vec3,
    /// Second endpoint of the sampled segment
    pub end: Vec3,
    /// Cast direction (unit length)
    pub direction: Vec3,
    /// Maximum hit distance from the segment
    pub distance: f32,
    /// Layers the cast may hit
    pub mask: LayerMask,
    /// Slope limit in degrees, forwarded for collider-side visualization
    pub slope_limit: f32,
    /// Number of parallel rays sampled along the segment
    pub rays: u32,
    /// Whether the collider should draw its own debug output for this cast
    pub draw_debug: bool,
}

/// Collision volume collaborator owned by the host scene.
///
/// `bounds` is a cached snapshot: it reflects the scene position as of the
/// last `sync_bounds`, not mid-tick working positions.
pub trait ColliderVolume {
    /// Current cached bounds of the body's volume
    fn bounds(&self) -> Bounds;

    /// Cast the query's parallel rays, returning the nearest filtered hit
    fn raycast(&self, query: &RayQuery) -> Option<RaycastHit>;

    /// Refresh the cached bounds from the current scene position, so
    /// same-frame queries by later systems observe the updated volume
    fn sync_bounds(&mut self);
}
