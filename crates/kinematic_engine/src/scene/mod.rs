//! Scene-position collaborator
//!
//! The body never owns scene-graph storage; it reads and writes position and
//! facing through this seam. Hosts embedding the engine implement
//! [`TransformProvider`] over their own scene graph; [`SceneTransform`] is
//! the plain standalone implementation used by tests and the sandbox.

use crate::foundation::math::{Quat, Vec3};

/// External transform storage for a body.
///
/// Read once at tick start and written at most twice per tick: after the
/// main integration, then again in the platform late phase.
pub trait TransformProvider {
    /// Current world position
    fn position(&self) -> Vec3;

    /// Write the world position
    fn set_position(&mut self, position: Vec3);

    /// Write the facing rotation
    fn set_rotation(&mut self, rotation: Quat);
}

/// A free-standing position and rotation pair
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTransform {
    /// World position
    pub position: Vec3,
    /// Facing rotation
    pub rotation: Quat,
}

impl SceneTransform {
    /// Create a transform at `position` with identity rotation
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::identity(),
        }
    }
}

impl Default for SceneTransform {
    fn default() -> Self {
        Self::new(Vec3::zeros())
    }
}

impl TransformProvider for SceneTransform {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}
