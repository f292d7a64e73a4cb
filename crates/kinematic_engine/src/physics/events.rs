//! Per-tick transition records
//!
//! Instead of registering callbacks, hosts receive an explicit list of the
//! transitions that happened during a tick. Each transition appears at most
//! once per tick, in the order it was resolved.

use std::fmt;

use crate::debug::DebugLine;
use crate::foundation::math::Vec3;
use crate::physics::axis::{AxisKind, Side};
use crate::physics::platform::PlatformKey;

/// A state transition observed during one fixed tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEvent {
    /// An axis hit an obstacle on either side while moving toward it
    HitAny {
        /// Axis that collided
        axis: AxisKind,
    },
    /// An axis hit an obstacle on a specific side while moving toward it
    Hit {
        /// Axis that collided
        axis: AxisKind,
        /// Side the obstacle was on
        side: Side,
    },
    /// The body moved along an axis this tick
    Moving {
        /// Axis that moved
        axis: AxisKind,
        /// Direction of travel
        side: Side,
    },
    /// An axis attached to a moving platform
    PlatformAttached {
        /// Axis that attached
        axis: AxisKind,
        /// The platform's registry key
        platform: PlatformKey,
    },
    /// Both sides of a stationary axis collided simultaneously; the body was
    /// repositioned to the midpoint between them
    Crushed {
        /// Axis reporting the contradiction
        axis: AxisKind,
    },
}

impl fmt::Display for BodyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::HitAny { axis } => write!(f, "hit on {} axis", axis.name()),
            Self::Hit { axis, side } => write!(f, "hit {}", axis.side_name(side)),
            Self::Moving { axis, side } => write!(f, "moving {}", axis.side_name(side)),
            Self::PlatformAttached { axis, .. } => {
                write!(f, "{} axis attached to platform", axis.name())
            }
            Self::Crushed { axis } => write!(f, "crushed on {} axis", axis.name()),
        }
    }
}

/// Everything a fixed tick produced for the host: transition records, the
/// snapped position delta, and any requested debug geometry
#[derive(Debug, Clone)]
pub struct TickReport {
    /// Transitions in resolution order, at most one record per transition
    pub events: Vec<BodyEvent>,
    /// Position change this tick, with sub-epsilon components snapped to zero
    pub delta: Vec3,
    /// Ray visualization segments, populated for axes with debug draw enabled
    pub debug_lines: Vec<DebugLine>,
}

impl TickReport {
    /// An empty report (also what a tick without a collider returns)
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            delta: Vec3::zeros(),
            debug_lines: Vec::new(),
        }
    }

    /// Whether a specific transition was recorded this tick
    pub fn contains(&self, event: &BodyEvent) -> bool {
        self.events.contains(event)
    }
}

impl Default for TickReport {
    fn default() -> Self {
        Self::new()
    }
}
