//! Debug drawing primitives
//!
//! Based on Game Engine Architecture 3rd Edition, Section 10.2:
//! "Debug drawing facilities allow programmers to render simple shapes like
//! lines, points, spheres and boxes for debugging and visualization purposes."
//!
//! The physics core only ever emits line segments (one per ray cast side), so
//! that is the only primitive carried here. Records are purely diagnostic and
//! have no effect on resolution.

use crate::foundation::math::Vec3;
use crate::physics::axis::{AxisKind, Side};

/// A ray-cast visualization segment emitted by an axis with debug draw on
#[derive(Debug, Clone, Copy)]
pub struct DebugLine {
    /// Segment start (midpoint of the sampled cross-section)
    pub start: Vec3,
    /// Segment end (start plus cast direction times cast distance)
    pub end: Vec3,
    /// Axis that performed the cast
    pub axis: AxisKind,
    /// Side the cast probed
    pub side: Side,
    /// Whether the cast registered a blocking hit
    pub hit: bool,
}
