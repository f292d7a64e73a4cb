//! Kinematic body orchestration
//!
//! [`KinematicBody`] owns one [`Axis`] per spatial dimension and a cached
//! authoritative position. Each fixed tick it runs the axes in a fixed order,
//! integrates the combined velocity into the scene transform, and reports the
//! tick's transitions. A separate late phase folds in moving-platform
//! displacement after every other position consumer has run.

use crate::config::BodyConfig;
use crate::foundation::math::Vec3;
use crate::physics::axis::{Axis, AxisKind, Side};
use crate::physics::collider::ColliderVolume;
use crate::physics::events::{BodyEvent, TickReport};
use crate::physics::platform::PlatformRegistry;
use crate::scene::TransformProvider;

/// Position-delta components smaller than this snap to exactly zero, so
/// floating-point jitter never reads as movement
pub const MOVE_EPSILON: f32 = 1e-4;

/// A box-shaped body moved by per-axis raycast collision resolution
#[derive(Debug, Clone)]
pub struct KinematicBody {
    horizontal: Axis,
    vertical: Axis,
    distal: Axis,
    current_position: Vec3,
    last_position: Vec3,
    velocity: Vec3,
    was_grounded: bool,
}

impl KinematicBody {
    /// Build a body from a configuration, applying every axis field through
    /// the clamping setters. A planar body's distal axis starts disabled.
    pub fn new(config: &BodyConfig) -> Self {
        let mut horizontal = Axis::horizontal();
        config.horizontal.apply_to(&mut horizontal);

        // Gravity is an explicit configuration value, never ambient state
        let mut vertical = Axis::vertical(config.vertical.gravity);
        config.vertical.apply_to(&mut vertical);

        let mut distal = Axis::distal();
        config.distal.apply_to(&mut distal);
        if config.planar {
            distal.set_enabled(false);
        }

        Self {
            horizontal,
            vertical,
            distal,
            current_position: Vec3::zeros(),
            last_position: Vec3::zeros(),
            velocity: Vec3::zeros(),
            was_grounded: false,
        }
    }

    /// The axis resolving the given dimension
    pub fn axis(&self, kind: AxisKind) -> &Axis {
        match kind {
            AxisKind::Horizontal => &self.horizontal,
            AxisKind::Vertical => &self.vertical,
            AxisKind::Distal => &self.distal,
        }
    }

    /// Mutable access to the axis resolving the given dimension
    pub fn axis_mut(&mut self, kind: AxisKind) -> &mut Axis {
        match kind {
            AxisKind::Horizontal => &mut self.horizontal,
            AxisKind::Vertical => &mut self.vertical,
            AxisKind::Distal => &mut self.distal,
        }
    }

    /// Left/right axis
    pub fn horizontal(&self) -> &Axis {
        &self.horizontal
    }

    /// Mutable left/right axis
    pub fn horizontal_mut(&mut self) -> &mut Axis {
        &mut self.horizontal
    }

    /// Down/up axis
    pub fn vertical(&self) -> &Axis {
        &self.vertical
    }

    /// Mutable down/up axis
    pub fn vertical_mut(&mut self) -> &mut Axis {
        &mut self.vertical
    }

    /// Backward/forward axis
    pub fn distal(&self) -> &Axis {
        &self.distal
    }

    /// Mutable backward/forward axis
    pub fn distal_mut(&mut self) -> &mut Axis {
        &mut self.distal
    }

    /// The authoritative position as of the last tick
    pub fn position(&self) -> Vec3 {
        self.current_position
    }

    /// Combined position delta applied by the last tick's integration
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Whether the vertical axis currently rests on ground
    pub fn is_grounded(&self) -> bool {
        self.vertical.is_colliding(Side::Negative)
    }

    /// Whether the body rested on ground when the last tick began
    pub fn was_grounded(&self) -> bool {
        self.was_grounded
    }

    /// Rotate the body to face the side of `kind` matching the sign of
    /// `facing`. Zero leaves the current facing untouched.
    pub fn face(&self, kind: AxisKind, facing: f32, transform: &mut dyn TransformProvider) {
        if let Some(rotation) = kind.facing_rotation(facing) {
            transform.set_rotation(rotation);
        }
    }

    /// Run one fixed simulation tick.
    ///
    /// Without a collider the body neither moves nor collides: the whole
    /// update is a no-op by design, not an error, and the returned report is
    /// empty. Axis updates run vertical first, then horizontal, then distal;
    /// later axes see position components already resolved by earlier ones.
    pub fn update(
        &mut self,
        collider: Option<&mut dyn ColliderVolume>,
        transform: &mut dyn TransformProvider,
        platforms: &PlatformRegistry,
        tick_duration: f32,
    ) -> TickReport {
        let mut report = TickReport::new();
        let Some(collider) = collider else {
            return report;
        };
        let tick_duration = tick_duration.max(0.0);

        self.was_grounded = self.vertical.is_colliding(Side::Negative);
        self.current_position = transform.position();
        self.last_position = self.current_position;

        self.vertical.update_physics(
            &*collider,
            platforms,
            &mut self.current_position,
            tick_duration,
            &mut report,
        );
        self.horizontal.update_physics(
            &*collider,
            platforms,
            &mut self.current_position,
            tick_duration,
            &mut report,
        );
        self.distal.update_physics(
            &*collider,
            platforms,
            &mut self.current_position,
            tick_duration,
            &mut report,
        );

        self.velocity = Vec3::new(
            self.horizontal.speed(),
            self.vertical.speed(),
            self.distal.speed(),
        ) * tick_duration;
        self.current_position += self.velocity;
        transform.set_position(self.current_position);

        let mut delta = self.current_position - self.last_position;
        for i in 0..3 {
            if delta[i].abs() < MOVE_EPSILON {
                delta[i] = 0.0;
            }
        }

        for kind in AxisKind::UPDATE_ORDER {
            let component = delta[kind.index()];
            if component == 0.0 {
                continue;
            }
            // Direction comes from the axis speed; a zero-speed displacement
            // (platform push) falls back to the delta's own sign
            let side = self
                .axis(kind)
                .moving_side()
                .or_else(|| Side::from_sign(component));
            if let Some(side) = side {
                report.events.push(BodyEvent::Moving { axis: kind, side });
            }
        }

        report.delta = delta;
        report
    }

    /// Late phase, run after all other per-tick position consumers: adds the
    /// attached platforms' per-tick velocities to the matching position
    /// components, writes the transform back, and has the collider refresh
    /// its cached bounds so later same-frame queries see the moved volume.
    pub fn late_update(
        &mut self,
        collider: Option<&mut dyn ColliderVolume>,
        transform: &mut dyn TransformProvider,
        platforms: &PlatformRegistry,
    ) {
        let Some(collider) = collider else {
            return;
        };

        let mut moved = false;
        for kind in AxisKind::UPDATE_ORDER {
            let Some(key) = self.axis(kind).attached_platform() else {
                continue;
            };
            if let Some(velocity) = platforms.velocity(key) {
                let i = kind.index();
                self.current_position[i] += velocity[i];
                moved = true;
            }
        }

        if moved {
            transform.set_position(self.current_position);
            collider.sync_bounds();
        }
    }
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self::new(&BodyConfig::default())
    }
}
