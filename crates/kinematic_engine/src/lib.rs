//! # Kinematic Engine
//!
//! Raycast-based kinematic body physics for platformer-style movement.
//!
//! A [`physics::KinematicBody`] is a box-shaped body that resolves collisions
//! one spatial dimension at a time: each axis samples parallel rays through a
//! host-provided collider, filters hits (walkable slopes do not block
//! horizontal travel), accrues gravity, clamps the body out of penetration,
//! and rides moving platforms. There is no rigid-body dynamics here — no
//! torque, restitution, or contact solving — just deterministic per-tick
//! movement resolution.
//!
//! ## Quick Start
//!
//! ```rust
//! use kinematic_engine::prelude::*;
//!
//! // Hosts supply the collision volume; this stub never hits anything.
//! struct EmptyWorld;
//!
//! impl ColliderVolume for EmptyWorld {
//!     fn bounds(&self) -> Bounds {
//!         Bounds::new(Vec3::zeros(), Vec3::new(0.5, 1.0, 0.5))
//!     }
//!
//!     fn raycast(&self, _query: &RayQuery) -> Option<RaycastHit> {
//!         None
//!     }
//!
//!     fn sync_bounds(&mut self) {}
//! }
//!
//! let mut body = KinematicBody::new(&BodyConfig::default());
//! let mut world = EmptyWorld;
//! let mut transform = SceneTransform::default();
//! let platforms = PlatformRegistry::new();
//!
//! // Fixed tick, then the late phase for platform displacement
//! let report = body.update(Some(&mut world), &mut transform, &platforms, 1.0 / 60.0);
//! body.late_update(Some(&mut world), &mut transform, &platforms);
//!
//! for event in &report.events {
//!     println!("{event}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod debug;
pub mod foundation;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::config::{AxisConfig, BodyConfig, Config, ConfigError, DEFAULT_GRAVITY};
    pub use crate::debug::DebugLine;
    pub use crate::foundation::{
        math::{Quat, Vec3},
        time::FixedStep,
    };
    pub use crate::physics::{
        Axis, AxisKind, BodyEvent, Bounds, ColliderVolume, KinematicBody, LayerMask,
        MovingPlatform, PlatformKey, PlatformRegistry, RayQuery, RaycastHit, Side, TickReport,
    };
    pub use crate::scene::{SceneTransform, TransformProvider};
}
