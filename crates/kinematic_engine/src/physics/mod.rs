//! Raycast-based kinematic physics
//!
//! A box-shaped body is moved by resolving each spatial dimension
//! independently: every tick each [`Axis`] samples parallel rays through the
//! collider collaborator, filters the hits, accrues gravity, and clamps the
//! body out of penetration. [`KinematicBody`] owns the three axes and runs
//! them in a fixed order, integrates the combined velocity, and folds in
//! moving-platform displacement in a late phase.

pub mod axis;
pub mod body;
pub mod collider;
pub mod collision_layers;
pub mod events;
pub mod hit;
pub mod platform;

pub use axis::{Axis, AxisKind, Side, COLLISION_SKIN, MAX_RAYS, MIN_RAYS};
pub use body::{KinematicBody, MOVE_EPSILON};
pub use collider::{Bounds, ColliderVolume, RayQuery};
pub use collision_layers::LayerMask;
pub use events::{BodyEvent, TickReport};
pub use hit::RaycastHit;
pub use platform::{MovingPlatform, PlatformKey, PlatformRegistry};
