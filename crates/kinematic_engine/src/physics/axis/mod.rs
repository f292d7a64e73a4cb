//! Per-axis collision and movement state machine
//!
//! Each [`Axis`] owns one spatial dimension of a body: its speed, gravity,
//! the raycast results for its two sides, and an optional attachment to a
//! moving platform. The tick algorithm is shared; everything directional is
//! data on [`AxisKind`].

pub mod kind;

pub use kind::{AxisKind, Side};

use crate::debug::DebugLine;
use crate::foundation::math::{surface_angle, Vec3};
use crate::physics::collider::{ColliderVolume, RayQuery};
use crate::physics::collision_layers::LayerMask;
use crate::physics::events::{BodyEvent, TickReport};
use crate::physics::hit::RaycastHit;
use crate::physics::platform::{PlatformKey, PlatformRegistry};

/// Minimum parallel rays per side; both edges of the box are always sampled
pub const MIN_RAYS: u32 = 2;

/// Maximum parallel rays per side
pub const MAX_RAYS: u32 = 32;

/// Margin added to every cast distance so a resting body keeps registering
/// the surface it touches instead of float-flickering out of contact
pub const COLLISION_SKIN: f32 = 0.02;

/// Inset of the sample segment from the box edges, avoiding rays that skim
/// adjacent geometry exactly at a corner
pub const RAY_INSET: f32 = 0.015;

/// Collision and movement state for one spatial dimension of a body
#[derive(Debug, Clone)]
pub struct Axis {
    kind: AxisKind,
    enabled: bool,
    speed: f32,
    max_speed: f32,
    gravity: f32,
    use_gravity: bool,
    rays_count: u32,
    slope_limit: f32,
    layer_mask: LayerMask,
    draw_debug: bool,
    collisions_locked: bool,
    use_platforms: bool,
    negative_hit: Option<RaycastHit>,
    positive_hit: Option<RaycastHit>,
    negative_collision: bool,
    positive_collision: bool,
    attached_platform: Option<PlatformKey>,
}

impl Axis {
    /// Create an axis with neutral defaults: enabled, stationary, no gravity,
    /// three rays, a 45 degree slope limit, and every layer collidable
    pub fn new(kind: AxisKind) -> Self {
        Self {
            kind,
            enabled: true,
            speed: 0.0,
            max_speed: 10.0,
            gravity: 0.0,
            use_gravity: false,
            rays_count: 3,
            slope_limit: 45.0,
            layer_mask: LayerMask::ALL,
            draw_debug: false,
            collisions_locked: false,
            use_platforms: false,
            negative_hit: None,
            positive_hit: None,
            negative_collision: false,
            positive_collision: false,
            attached_platform: None,
        }
    }

    /// Horizontal (left/right) axis
    pub fn horizontal() -> Self {
        Self::new(AxisKind::Horizontal)
    }

    /// Vertical (down/up) axis with gravity and platform riding enabled.
    /// The gravity value is passed in rather than read from any global.
    pub fn vertical(gravity: f32) -> Self {
        let mut axis = Self::new(AxisKind::Vertical);
        axis.gravity = gravity;
        axis.use_gravity = true;
        axis.use_platforms = true;
        axis
    }

    /// Distal (backward/forward) axis
    pub fn distal() -> Self {
        Self::new(AxisKind::Distal)
    }

    /// Which dimension this axis resolves
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    /// Whether the per-tick update runs at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the axis
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Current signed speed along the axis, in units per second
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the speed, clamped to `[-max_speed, max_speed]`
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(-self.max_speed, self.max_speed);
    }

    /// Add to the speed, clamped to `[-max_speed, max_speed]`
    pub fn add_speed(&mut self, delta: f32) {
        self.set_speed(self.speed + delta);
    }

    /// Zero the speed
    pub fn stop(&mut self) {
        self.speed = 0.0;
    }

    /// Speed magnitude cap
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Set the speed cap. Negative values clamp to zero and the current
    /// speed is re-clamped so the invariant holds immediately.
    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed.max(0.0);
        self.speed = self.speed.clamp(-self.max_speed, self.max_speed);
    }

    /// Gravity acceleration along this axis, any sign
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Set the gravity acceleration
    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
    }

    /// Whether gravity accrues into the speed each tick
    pub fn uses_gravity(&self) -> bool {
        self.use_gravity
    }

    /// Enable or disable gravity accrual
    pub fn set_use_gravity(&mut self, use_gravity: bool) {
        self.use_gravity = use_gravity;
    }

    /// Number of parallel rays sampled per side
    pub fn rays_count(&self) -> u32 {
        self.rays_count
    }

    /// Set the ray count, clamped to `[MIN_RAYS, MAX_RAYS]`
    pub fn set_rays_count(&mut self, rays: u32) {
        self.rays_count = rays.clamp(MIN_RAYS, MAX_RAYS);
    }

    /// Maximum walkable surface angle in degrees, measured from the world
    /// up axis
    pub fn slope_limit(&self) -> f32 {
        self.slope_limit
    }

    /// Set the slope limit, clamped to `[0, 90]` degrees
    pub fn set_slope_limit(&mut self, degrees: f32) {
        self.slope_limit = degrees.clamp(0.0, 90.0);
    }

    /// Layers this axis's casts may hit
    pub fn layer_mask(&self) -> LayerMask {
        self.layer_mask
    }

    /// Set the collision layer mask
    pub fn set_layer_mask(&mut self, mask: LayerMask) {
        self.layer_mask = mask;
    }

    /// Whether ray visualization records are emitted
    pub fn draws_debug(&self) -> bool {
        self.draw_debug
    }

    /// Enable or disable ray visualization records
    pub fn set_draw_debug(&mut self, draw: bool) {
        self.draw_debug = draw;
    }

    /// Whether penetration resolution is currently suppressed
    pub fn collisions_locked(&self) -> bool {
        self.collisions_locked
    }

    /// Suppress or restore penetration resolution. Ray sampling still runs
    /// while locked, so collision queries stay current.
    pub fn set_collisions_locked(&mut self, locked: bool) {
        self.collisions_locked = locked;
    }

    /// Whether this axis attaches to moving platforms
    pub fn uses_platforms(&self) -> bool {
        self.use_platforms
    }

    /// Enable or disable platform attachment
    pub fn set_use_platforms(&mut self, use_platforms: bool) {
        self.use_platforms = use_platforms;
    }

    /// Whether the given side currently reports a blocking collision
    pub fn is_colliding(&self, side: Side) -> bool {
        match side {
            Side::Negative => self.negative_collision,
            Side::Positive => self.positive_collision,
        }
    }

    /// Whether either side currently reports a blocking collision
    pub fn is_any_collision(&self) -> bool {
        self.negative_collision || self.positive_collision
    }

    /// Last raycast result for the given side, blocking or not
    pub fn hit(&self, side: Side) -> Option<&RaycastHit> {
        match side {
            Side::Negative => self.negative_hit.as_ref(),
            Side::Positive => self.positive_hit.as_ref(),
        }
    }

    /// Whether the current speed points toward the given side
    pub fn is_moving(&self, side: Side) -> bool {
        Side::from_sign(self.speed) == Some(side)
    }

    /// Side the current speed points toward, if any
    pub fn moving_side(&self) -> Option<Side> {
        Side::from_sign(self.speed)
    }

    /// Key of the platform this axis is riding, if any
    pub fn attached_platform(&self) -> Option<PlatformKey> {
        self.attached_platform
    }

    /// Run the full per-tick algorithm for this axis: sample rays, accrue
    /// gravity, resolve penetration, and maintain the platform attachment.
    /// `position` is the body's working position; resolution writes this
    /// axis's component. No-op while the axis is disabled.
    pub fn update_physics(
        &mut self,
        collider: &dyn ColliderVolume,
        platforms: &PlatformRegistry,
        position: &mut Vec3,
        tick_duration: f32,
        report: &mut TickReport,
    ) {
        if !self.enabled {
            return;
        }
        let tick_duration = tick_duration.max(0.0);

        self.update_collisions(collider, tick_duration, report);
        self.update_gravity(tick_duration);
        if !self.collisions_locked {
            self.restrict_collisions(collider, position, report);
        }
        if self.use_platforms {
            self.update_moving_platform(platforms, report);
        }
    }

    /// Sample both sides of the axis and refresh the hit records and
    /// collision flags. The cast distance covers the half extent plus the
    /// collision skin, extended by this tick's travel distance on the side
    /// the body is moving toward so thin geometry cannot be tunneled.
    pub fn update_collisions(
        &mut self,
        collider: &dyn ColliderVolume,
        tick_duration: f32,
        report: &mut TickReport,
    ) {
        let bounds = collider.bounds();
        let (start, end) = self.kind.sample_segment(&bounds);
        let half = bounds.half_size[self.kind.index()];

        for side in Side::BOTH {
            let direction = self.kind.direction() * side.sign();
            let mut distance = half + COLLISION_SKIN;
            if self.is_moving(side) {
                distance += self.speed.abs() * tick_duration.max(0.0);
            }

            let query = RayQuery {
                start,
                end,
                direction,
                distance,
                mask: self.layer_mask,
                slope_limit: self.slope_limit,
                rays: self.rays_count,
                draw_debug: self.draw_debug,
            };
            let hit = collider.raycast(&query);
            let colliding = hit.as_ref().is_some_and(|h| self.blocks(h));

            if self.draw_debug {
                let mid = (start + end) * 0.5;
                report.debug_lines.push(DebugLine {
                    start: mid,
                    end: mid + direction * distance,
                    axis: self.kind,
                    side,
                    hit: colliding,
                });
            }

            match side {
                Side::Negative => {
                    self.negative_hit = hit;
                    self.negative_collision = colliding;
                }
                Side::Positive => {
                    self.positive_hit = hit;
                    self.positive_collision = colliding;
                }
            }
        }
    }

    /// Whether a raw hit actually blocks travel on this axis. Horizontal
    /// hits on surfaces within the slope limit are walkable ramps, not walls.
    fn blocks(&self, hit: &RaycastHit) -> bool {
        if !self.kind.filters_slope() {
            return true;
        }
        surface_angle(hit.normal) > self.slope_limit
    }

    /// Accrue gravity into the speed unless the side gravity points toward
    /// is blocked by a collision
    fn update_gravity(&mut self, tick_duration: f32) {
        if !self.use_gravity {
            return;
        }
        let blocked = Side::from_sign(self.gravity).map_or(true, |side| self.is_colliding(side));
        if !blocked {
            self.set_speed(self.speed + self.gravity * tick_duration);
        }
    }

    /// Resolve penetration against the current collision flags.
    ///
    /// Branches on the speed at entry: a moving axis clamps against the side
    /// it travels toward (zeroing the speed), a stationary axis snaps out of
    /// one-sided overlap or, with both sides blocked, centers between them
    /// and reports the crush.
    fn restrict_collisions(
        &mut self,
        collider: &dyn ColliderVolume,
        position: &mut Vec3,
        report: &mut TickReport,
    ) {
        let bounds = collider.bounds();
        let i = self.kind.index();

        let out_point = |side: Side, hit: Option<&RaycastHit>, colliding: bool| {
            if !colliding {
                return None;
            }
            hit.map(|h| self.kind.out_of_collision_point(h.point, &bounds, side))
        };
        let negative_point = out_point(
            Side::Negative,
            self.negative_hit.as_ref(),
            self.negative_collision,
        );
        let positive_point = out_point(
            Side::Positive,
            self.positive_hit.as_ref(),
            self.positive_collision,
        );

        if let Some(moving) = Side::from_sign(self.speed) {
            let target = match moving {
                Side::Negative => negative_point,
                Side::Positive => positive_point,
            };
            if let Some(point) = target {
                position[i] = point;
                self.speed = 0.0;
                report.events.push(BodyEvent::HitAny { axis: self.kind });
                report.events.push(BodyEvent::Hit {
                    axis: self.kind,
                    side: moving,
                });
                log::debug!(
                    "{} axis hit {} at {point}",
                    self.kind.name(),
                    self.kind.side_name(moving)
                );
            }
        } else {
            match (negative_point, positive_point) {
                (Some(low), Some(high)) => {
                    position[i] = (low + high) * 0.5;
                    report.events.push(BodyEvent::Crushed { axis: self.kind });
                    log::debug!("{} axis crushed between {low} and {high}", self.kind.name());
                }
                (Some(point), None) | (None, Some(point)) => {
                    // Pushed into geometry while stationary, e.g. by a
                    // platform shoving the body sideways
                    position[i] = point;
                }
                (None, None) => {}
            }
        }
    }

    /// Key of the platform behind the current qualifying collision, if any
    fn qualifying_platform(&self) -> Option<PlatformKey> {
        Side::BOTH.into_iter().find_map(|side| {
            if self.kind.platform_qualifies(side) && self.is_colliding(side) {
                self.hit(side).and_then(|h| h.platform)
            } else {
                None
            }
        })
    }

    /// Maintain the platform attachment: detach from platforms that went
    /// inactive or are no longer the collision source, attach to a platform
    /// newly backing the qualifying collision
    fn update_moving_platform(&mut self, platforms: &PlatformRegistry, report: &mut TickReport) {
        if let Some(key) = self.attached_platform {
            if !platforms.is_active(key) || self.qualifying_platform() != Some(key) {
                log::debug!("{} axis detached from platform", self.kind.name());
                self.attached_platform = None;
            }
        } else if let Some(key) = self.qualifying_platform() {
            if platforms.is_active(key) {
                self.attached_platform = Some(key);
                report.events.push(BodyEvent::PlatformAttached {
                    axis: self.kind,
                    platform: key,
                });
                log::debug!("{} axis attached to platform", self.kind.name());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::platform::MovingPlatform;
    use crate::physics::testing::TestCollider;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    fn collider() -> TestCollider {
        TestCollider::new(Vec3::zeros(), Vec3::new(0.5, 1.0, 0.5))
    }

    fn run(
        axis: &mut Axis,
        collider: &TestCollider,
        platforms: &PlatformRegistry,
        position: &mut Vec3,
    ) -> TickReport {
        let mut report = TickReport::new();
        axis.update_physics(collider, platforms, position, DT, &mut report);
        report
    }

    #[test]
    fn test_speed_clamps_on_every_write() {
        let mut axis = Axis::horizontal();
        axis.set_max_speed(5.0);

        axis.set_speed(12.0);
        assert_relative_eq!(axis.speed(), 5.0);

        axis.add_speed(-20.0);
        assert_relative_eq!(axis.speed(), -5.0);

        // Shrinking the cap re-clamps the current speed immediately
        axis.set_max_speed(2.0);
        assert_relative_eq!(axis.speed(), -2.0);

        axis.set_max_speed(-1.0);
        assert_relative_eq!(axis.max_speed(), 0.0);
        assert_relative_eq!(axis.speed(), 0.0);
    }

    #[test]
    fn test_rays_and_slope_clamp() {
        let mut axis = Axis::horizontal();

        axis.set_rays_count(0);
        assert_eq!(axis.rays_count(), MIN_RAYS);
        axis.set_rays_count(1000);
        assert_eq!(axis.rays_count(), MAX_RAYS);

        axis.set_slope_limit(120.0);
        assert_relative_eq!(axis.slope_limit(), 90.0);
        axis.set_slope_limit(-5.0);
        assert_relative_eq!(axis.slope_limit(), 0.0);
    }

    #[test]
    fn test_disabled_axis_does_nothing() {
        let mut axis = Axis::vertical(-9.81);
        axis.set_enabled(false);
        let collider = collider();
        let platforms = PlatformRegistry::new();
        let mut position = Vec3::zeros();

        let report = run(&mut axis, &collider, &platforms, &mut position);

        assert!(report.events.is_empty());
        assert!(collider.queries.borrow().is_empty());
        assert_relative_eq!(axis.speed(), 0.0);
    }

    #[test]
    fn test_gravity_accrues_until_capped() {
        let mut axis = Axis::vertical(-9.81);
        axis.set_max_speed(0.5);
        let collider = collider();
        let platforms = PlatformRegistry::new();
        let mut position = Vec3::zeros();

        let report = run(&mut axis, &collider, &platforms, &mut position);
        assert!(report.events.is_empty());
        assert_relative_eq!(axis.speed(), -9.81 * DT, epsilon = 1e-6);

        for _ in 0..60 {
            run(&mut axis, &collider, &platforms, &mut position);
        }
        assert_relative_eq!(axis.speed(), -0.5);
    }

    #[test]
    fn test_grounded_axis_accrues_no_gravity() {
        let mut axis = Axis::vertical(-9.81);
        let mut collider = collider();
        collider.plant_hit(
            AxisKind::Vertical,
            Side::Negative,
            RaycastHit::new(Vec3::new(0.0, -1.0, 0.0), Vec3::y()),
        );
        let platforms = PlatformRegistry::new();
        let mut position = Vec3::zeros();

        run(&mut axis, &collider, &platforms, &mut position);

        assert!(axis.is_colliding(Side::Negative));
        assert_relative_eq!(axis.speed(), 0.0);
    }

    #[test]
    fn test_zero_tick_duration_accrues_nothing_and_moves_nothing() {
        let mut axis = Axis::vertical(-9.81);
        let collider = collider();
        let platforms = PlatformRegistry::new();
        let mut position = Vec3::zeros();

        let mut report = TickReport::new();
        axis.update_physics(&collider, &platforms, &mut position, 0.0, &mut report);
        assert_relative_eq!(axis.speed(), 0.0);

        axis.update_physics(&collider, &platforms, &mut position, -0.25, &mut report);
        assert_relative_eq!(axis.speed(), 0.0);
        assert_eq!(position, Vec3::zeros());
    }

    #[test]
    fn test_moving_into_wall_snaps_and_stops() {
        let mut axis = Axis::horizontal();
        axis.set_speed(3.0);
        let mut collider = collider();
        // Wall face just ahead of the box's right face
        collider.plant_hit(
            AxisKind::Horizontal,
            Side::Positive,
            RaycastHit::new(Vec3::new(0.51, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)),
        );
        let platforms = PlatformRegistry::new();
        let mut position = Vec3::zeros();

        let report = run(&mut axis, &collider, &platforms, &mut position);

        assert_relative_eq!(position.x, 0.01, epsilon = 1e-6);
        assert_relative_eq!(axis.speed(), 0.0);
        let hits: Vec<_> = report
            .events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    BodyEvent::Hit {
                        axis: AxisKind::Horizontal,
                        side: Side::Positive
                    }
                )
            })
            .collect();
        assert_eq!(hits.len(), 1);
        assert!(report.contains(&BodyEvent::HitAny {
            axis: AxisKind::Horizontal
        }));
    }

    #[test]
    fn test_stationary_crush_centers_between_walls() {
        let mut axis = Axis::horizontal();
        let mut collider = collider();
        collider.plant_hit(
            AxisKind::Horizontal,
            Side::Negative,
            RaycastHit::new(Vec3::new(-0.4, 0.0, 0.0), Vec3::x()),
        );
        collider.plant_hit(
            AxisKind::Horizontal,
            Side::Positive,
            RaycastHit::new(Vec3::new(0.3, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)),
        );
        let platforms = PlatformRegistry::new();
        let mut position = Vec3::zeros();

        let report = run(&mut axis, &collider, &platforms, &mut position);

        // Out-of-collision points are 0.1 and -0.2; the body centers between
        // them and the speed stays untouched at zero
        assert_relative_eq!(position.x, -0.05, epsilon = 1e-6);
        assert_relative_eq!(axis.speed(), 0.0);
        assert!(report.contains(&BodyEvent::Crushed {
            axis: AxisKind::Horizontal
        }));
        assert!(!report.contains(&BodyEvent::HitAny {
            axis: AxisKind::Horizontal
        }));
    }

    #[test]
    fn test_stationary_one_sided_overlap_snaps_without_hit_events() {
        let mut axis = Axis::horizontal();
        let mut collider = collider();
        collider.plant_hit(
            AxisKind::Horizontal,
            Side::Negative,
            RaycastHit::new(Vec3::new(-0.4, 0.0, 0.0), Vec3::x()),
        );
        let platforms = PlatformRegistry::new();
        let mut position = Vec3::zeros();

        let report = run(&mut axis, &collider, &platforms, &mut position);

        assert_relative_eq!(position.x, 0.1, epsilon = 1e-6);
        assert!(report.events.is_empty());
    }

    #[test]
    fn test_walkable_slope_does_not_block_horizontal_travel() {
        let mut axis = Axis::horizontal();
        axis.set_slope_limit(45.0);
        axis.set_speed(2.0);
        let mut collider = collider();
        // 30 degree ramp ahead: within the slope limit, so not a wall
        let ramp_normal = Vec3::new(-0.5, 0.866, 0.0);
        collider.plant_hit(
            AxisKind::Horizontal,
            Side::Positive,
            RaycastHit::new(Vec3::new(0.5, 0.0, 0.0), ramp_normal),
        );
        let platforms = PlatformRegistry::new();
        let mut position = Vec3::zeros();

        let report = run(&mut axis, &collider, &platforms, &mut position);

        assert!(!axis.is_colliding(Side::Positive));
        // The raw hit is still recorded even though it does not block
        assert!(axis.hit(Side::Positive).is_some());
        assert_relative_eq!(axis.speed(), 2.0);
        assert!(report.events.is_empty());
    }

    #[test]
    fn test_steep_slope_blocks_horizontal_travel() {
        let mut axis = Axis::horizontal();
        axis.set_slope_limit(45.0);
        axis.set_speed(2.0);
        let mut collider = collider();
        // 60 degree face: past the limit, treated as a wall
        let steep_normal = Vec3::new(-0.866, 0.5, 0.0);
        collider.plant_hit(
            AxisKind::Horizontal,
            Side::Positive,
            RaycastHit::new(Vec3::new(0.5, 0.0, 0.0), steep_normal),
        );
        let platforms = PlatformRegistry::new();
        let mut position = Vec3::zeros();

        run(&mut axis, &collider, &platforms, &mut position);

        assert!(axis.is_colliding(Side::Positive));
        assert_relative_eq!(axis.speed(), 0.0);
    }

    #[test]
    fn test_vertical_axis_ignores_slope_filter() {
        let mut axis = Axis::vertical(-9.81);
        let mut collider = collider();
        // Flat ground has angle 0 from up; it must still block the fall
        collider.plant_hit(
            AxisKind::Vertical,
            Side::Negative,
            RaycastHit::new(Vec3::new(0.0, -1.0, 0.0), Vec3::y()),
        );
        let platforms = PlatformRegistry::new();
        let mut position = Vec3::zeros();

        run(&mut axis, &collider, &platforms, &mut position);

        assert!(axis.is_colliding(Side::Negative));
    }

    #[test]
    fn test_look_ahead_extends_cast_with_speed() {
        let mut axis = Axis::horizontal();
        axis.set_max_speed(100.0);
        let mut collider = collider();
        // Wall face one unit past the box face: outside the resting cast
        collider.plant_hit(
            AxisKind::Horizontal,
            Side::Positive,
            RaycastHit::new(Vec3::new(1.5, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)),
        );
        let platforms = PlatformRegistry::new();
        let mut position = Vec3::zeros();

        run(&mut axis, &collider, &platforms, &mut position);
        assert!(!axis.is_colliding(Side::Positive));

        // Fast enough that this tick's travel covers the gap
        axis.set_speed(90.0);
        run(&mut axis, &collider, &platforms, &mut position);
        assert!(axis.is_colliding(Side::Positive));

        let queries = collider.queries.borrow();
        let last = queries.last().unwrap();
        assert_relative_eq!(last.distance, 0.5 + COLLISION_SKIN + 90.0 * DT, epsilon = 1e-5);
    }

    #[test]
    fn test_locked_collisions_sample_but_do_not_resolve() {
        let mut axis = Axis::horizontal();
        axis.set_collisions_locked(true);
        axis.set_speed(3.0);
        let mut collider = collider();
        collider.plant_hit(
            AxisKind::Horizontal,
            Side::Positive,
            RaycastHit::new(Vec3::new(0.51, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)),
        );
        let platforms = PlatformRegistry::new();
        let mut position = Vec3::zeros();

        let report = run(&mut axis, &collider, &platforms, &mut position);

        // Sampling still ran and flagged the side, but nothing was resolved
        assert!(axis.is_colliding(Side::Positive));
        assert_eq!(position, Vec3::zeros());
        assert_relative_eq!(axis.speed(), 3.0);
        assert!(report.events.is_empty());
    }

    #[test]
    fn test_platform_attach_fires_once_and_detaches_on_deactivation() {
        let mut axis = Axis::vertical(-9.81);
        let mut platforms = PlatformRegistry::new();
        let key = platforms.insert(MovingPlatform::new());
        let mut collider = collider();
        collider.plant_hit(
            AxisKind::Vertical,
            Side::Negative,
            RaycastHit::on_platform(Vec3::new(0.0, -1.0, 0.0), Vec3::y(), key),
        );
        let mut position = Vec3::zeros();

        let report = run(&mut axis, &collider, &platforms, &mut position);
        assert_eq!(axis.attached_platform(), Some(key));
        assert!(report.contains(&BodyEvent::PlatformAttached {
            axis: AxisKind::Vertical,
            platform: key,
        }));

        // Still attached next tick, but no second attach record
        let report = run(&mut axis, &collider, &platforms, &mut position);
        assert_eq!(axis.attached_platform(), Some(key));
        assert!(report.events.is_empty());

        // Deactivation clears the attachment on the following tick even
        // though the planted hit has not changed
        platforms.get_mut(key).unwrap().set_active(false);
        run(&mut axis, &collider, &platforms, &mut position);
        assert_eq!(axis.attached_platform(), None);
    }

    #[test]
    fn test_platform_detaches_when_collision_source_changes() {
        let mut axis = Axis::vertical(-9.81);
        let mut platforms = PlatformRegistry::new();
        let key = platforms.insert(MovingPlatform::new());
        let mut collider = collider();
        collider.plant_hit(
            AxisKind::Vertical,
            Side::Negative,
            RaycastHit::on_platform(Vec3::new(0.0, -1.0, 0.0), Vec3::y(), key),
        );
        let mut position = Vec3::zeros();

        run(&mut axis, &collider, &platforms, &mut position);
        assert_eq!(axis.attached_platform(), Some(key));

        // Walked off the platform onto static ground
        collider.plant_hit(
            AxisKind::Vertical,
            Side::Negative,
            RaycastHit::new(Vec3::new(0.0, -1.0, 0.0), Vec3::y()),
        );
        run(&mut axis, &collider, &platforms, &mut position);
        assert_eq!(axis.attached_platform(), None);
    }

    #[test]
    fn test_vertical_axis_never_attaches_from_above() {
        let mut axis = Axis::vertical(-9.81);
        let mut platforms = PlatformRegistry::new();
        let key = platforms.insert(MovingPlatform::new());
        let mut collider = collider();
        // Platform overhead, close enough to register on the up side;
        // pressing into it from below must not attach
        collider.plant_hit(
            AxisKind::Vertical,
            Side::Positive,
            RaycastHit::on_platform(Vec3::new(0.0, 1.01, 0.0), Vec3::new(0.0, -1.0, 0.0), key),
        );
        let mut position = Vec3::zeros();

        run(&mut axis, &collider, &platforms, &mut position);
        assert!(axis.is_colliding(Side::Positive));
        assert_eq!(axis.attached_platform(), None);
    }

    #[test]
    fn test_debug_lines_emitted_only_when_enabled() {
        let mut axis = Axis::horizontal();
        let collider = collider();
        let platforms = PlatformRegistry::new();
        let mut position = Vec3::zeros();

        let report = run(&mut axis, &collider, &platforms, &mut position);
        assert!(report.debug_lines.is_empty());

        axis.set_draw_debug(true);
        let report = run(&mut axis, &collider, &platforms, &mut position);
        assert_eq!(report.debug_lines.len(), 2);
        assert!(report.debug_lines.iter().all(|l| !l.hit));
    }
}
