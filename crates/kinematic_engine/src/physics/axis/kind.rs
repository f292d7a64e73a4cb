//! Axis specialization table
//!
//! The per-axis algorithm is written once in [`super::Axis`]; everything that
//! distinguishes the horizontal, vertical and distal axes is data supplied by
//! [`AxisKind`]: world direction, side naming, cross-section sampling,
//! out-of-collision arithmetic, facing rotation, and whether wall hits are
//! filtered by slope angle.

use crate::foundation::math::{utils, Quat, UnitQuaternion, Vec3};
use crate::physics::collider::Bounds;

use super::RAY_INSET;

/// One side of an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The side facing the axis's negative world direction
    Negative,
    /// The side facing the axis's positive world direction
    Positive,
}

impl Side {
    /// Both sides, negative first (the order resolution checks them)
    pub const BOTH: [Self; 2] = [Self::Negative, Self::Positive];

    /// -1.0 for the negative side, +1.0 for the positive side
    pub fn sign(self) -> f32 {
        match self {
            Self::Negative => -1.0,
            Self::Positive => 1.0,
        }
    }

    /// The opposite side
    pub fn opposite(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }

    /// Side a signed scalar points toward; `None` for zero
    pub fn from_sign(value: f32) -> Option<Self> {
        if value < 0.0 {
            Some(Self::Negative)
        } else if value > 0.0 {
            Some(Self::Positive)
        } else {
            None
        }
    }
}

/// The three spatial dimensions a body resolves collisions along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Left/right movement along world X
    Horizontal,
    /// Down/up movement along world Y
    Vertical,
    /// Backward/forward movement along world Z
    Distal,
}

impl AxisKind {
    /// Fixed per-tick update order. Vertical resolves first so horizontal
    /// slope and ground interactions see this tick's vertical result;
    /// changing this order changes slope-climbing behavior.
    pub const UPDATE_ORDER: [Self; 3] = [Self::Vertical, Self::Horizontal, Self::Distal];

    /// Positive world direction of this axis
    pub fn direction(self) -> Vec3 {
        match self {
            Self::Horizontal => Vec3::x(),
            Self::Vertical => Vec3::y(),
            Self::Distal => Vec3::z(),
        }
    }

    /// Vector component index of this axis
    pub const fn index(self) -> usize {
        match self {
            Self::Horizontal => 0,
            Self::Vertical => 1,
            Self::Distal => 2,
        }
    }

    /// Lowercase axis name, for logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Distal => "distal",
        }
    }

    /// Semantic name of a side of this axis
    pub const fn side_name(self, side: Side) -> &'static str {
        match (self, side) {
            (Self::Horizontal, Side::Negative) => "left",
            (Self::Horizontal, Side::Positive) => "right",
            (Self::Vertical, Side::Negative) => "down",
            (Self::Vertical, Side::Positive) => "up",
            (Self::Distal, Side::Negative) => "backward",
            (Self::Distal, Side::Positive) => "forward",
        }
    }

    /// Whether this axis discards hits on walkable slopes. Only horizontal
    /// travel treats within-limit surfaces as ramps rather than walls.
    pub const fn filters_slope(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// Whether a collision on `side` can attach this axis to a platform.
    /// A body rides platforms only from above on the vertical axis.
    pub const fn platform_qualifies(self, side: Side) -> bool {
        match self {
            Self::Vertical => matches!(side, Side::Negative),
            Self::Horizontal | Self::Distal => true,
        }
    }

    /// The two sample endpoints spanning the box cross-section perpendicular
    /// to this axis, inset to avoid edge-skimming artifacts. Rays are cast
    /// from points along this segment.
    pub fn sample_segment(self, bounds: &Bounds) -> (Vec3, Vec3) {
        let i = self.index();
        let j = (i + 1) % 3;
        let k = (i + 2) % 3;

        let mut spread = Vec3::zeros();
        spread[j] = (bounds.half_size[j] - RAY_INSET).max(0.0);
        spread[k] = (bounds.half_size[k] - RAY_INSET).max(0.0);

        (bounds.center - spread, bounds.center + spread)
    }

    /// Position along this axis at which the body exactly touches, without
    /// penetrating, the obstacle hit at `hit_point` on `side`.
    pub fn out_of_collision_point(self, hit_point: Vec3, bounds: &Bounds, side: Side) -> f32 {
        let i = self.index();
        hit_point[i] - side.sign() * bounds.half_size[i] - bounds.offset[i]
    }

    /// Rotation that turns the body to face the side matching the sign of
    /// `facing`. Zero means "keep the current facing" and yields `None`.
    pub fn facing_rotation(self, facing: f32) -> Option<Quat> {
        let side = Side::from_sign(facing)?;
        let (axis, degrees) = match (self, side) {
            (Self::Horizontal, Side::Positive) => (Vec3::y_axis(), 90.0),
            (Self::Horizontal, Side::Negative) => (Vec3::y_axis(), -90.0),
            (Self::Vertical, Side::Positive) => (Vec3::x_axis(), -90.0),
            (Self::Vertical, Side::Negative) => (Vec3::x_axis(), 90.0),
            (Self::Distal, Side::Positive) => (Vec3::y_axis(), 0.0),
            (Self::Distal, Side::Negative) => (Vec3::y_axis(), 180.0),
        };
        Some(UnitQuaternion::from_axis_angle(&axis, utils::deg_to_rad(degrees)))
    }
}
