//! Moving platform registry
//!
//! Platforms are owned by the host scene, not by the bodies riding them. An
//! axis that attaches to a platform holds only a [`PlatformKey`] and must
//! re-validate it through the registry every tick; a key whose entry was
//! removed or deactivated simply stops resolving.

use slotmap::SlotMap;

use crate::foundation::math::Vec3;

slotmap::new_key_type! {
    /// Handle to a platform entry in a [`PlatformRegistry`]
    pub struct PlatformKey;
}

/// A platform the host moves externally.
///
/// `velocity` is the platform's position delta for the current tick, set by
/// the host before bodies update.
#[derive(Debug, Clone)]
pub struct MovingPlatform {
    velocity: Vec3,
    active: bool,
}

impl MovingPlatform {
    /// Create an active platform with zero velocity
    pub fn new() -> Self {
        Self {
            velocity: Vec3::zeros(),
            active: true,
        }
    }

    /// This tick's position delta
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Set this tick's position delta
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Whether the platform is still live in the scene
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate or deactivate the platform
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl Default for MovingPlatform {
    fn default() -> Self {
        Self::new()
    }
}

/// Host-owned storage for moving platforms, addressed by stable keys
#[derive(Debug, Default)]
pub struct PlatformRegistry {
    platforms: SlotMap<PlatformKey, MovingPlatform>,
}

impl PlatformRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a platform, returning its key
    pub fn insert(&mut self, platform: MovingPlatform) -> PlatformKey {
        self.platforms.insert(platform)
    }

    /// Remove a platform. Outstanding keys stop resolving.
    pub fn remove(&mut self, key: PlatformKey) -> Option<MovingPlatform> {
        self.platforms.remove(key)
    }

    /// Look up a platform by key
    pub fn get(&self, key: PlatformKey) -> Option<&MovingPlatform> {
        self.platforms.get(key)
    }

    /// Mutable lookup, for the host's per-tick velocity updates
    pub fn get_mut(&mut self, key: PlatformKey) -> Option<&mut MovingPlatform> {
        self.platforms.get_mut(key)
    }

    /// Whether the key resolves to a live, active platform
    pub fn is_active(&self, key: PlatformKey) -> bool {
        self.platforms.get(key).is_some_and(MovingPlatform::is_active)
    }

    /// This tick's velocity for the keyed platform, if it is live
    pub fn velocity(&self, key: PlatformKey) -> Option<Vec3> {
        self.platforms.get(key).map(MovingPlatform::velocity)
    }

    /// Number of registered platforms
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// Whether the registry holds no platforms
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
