//! Sandbox demo scene
//!
//! Drops a box body onto a moving platform, rides it for a while, destroys
//! the platform out from under the body, then walks the body across the
//! floor into a wall — logging every transition the engine reports along the
//! way. The scene itself is a handful of static AABBs queried with slab-test
//! raycasts; it stands in for whatever collision backend a real host embeds.

use std::cell::RefCell;
use std::rc::Rc;

use kinematic_engine::prelude::*;

const TICK: f32 = 1.0 / 60.0;
const FRAME: f32 = 1.0 / 50.0;

/// A static box obstacle in the demo scene
struct SceneBox {
    min: Vec3,
    max: Vec3,
    layer: LayerMask,
    platform: Option<PlatformKey>,
}

impl SceneBox {
    fn new(min: Vec3, max: Vec3, layer: LayerMask) -> Self {
        Self {
            min,
            max,
            layer,
            platform: None,
        }
    }

    fn platform(min: Vec3, max: Vec3, key: PlatformKey) -> Self {
        Self {
            min,
            max,
            layer: LayerMask::PLATFORM,
            platform: Some(key),
        }
    }
}

/// Slab-test ray/AABB intersection, returning the entry distance and the
/// normal of the face the ray entered through
fn raycast_box(origin: Vec3, direction: Vec3, max_distance: f32, b: &SceneBox) -> Option<(f32, Vec3)> {
    let mut t_min = 0.0_f32;
    let mut t_max = max_distance;
    let mut entry_axis = None;

    for i in 0..3 {
        if direction[i].abs() < 1e-8 {
            if origin[i] < b.min[i] || origin[i] > b.max[i] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / direction[i];
        let mut t0 = (b.min[i] - origin[i]) * inv;
        let mut t1 = (b.max[i] - origin[i]) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > t_min {
            t_min = t0;
            entry_axis = Some(i);
        }
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }

    let normal = entry_axis.map_or(-direction, |i| {
        let mut n = Vec3::zeros();
        n[i] = -direction[i].signum();
        n
    });
    Some((t_min, normal))
}

/// Scene transform shared between the body update and the collider's cached
/// bounds. Each trait call borrows briefly, so the late-phase sequence of
/// `set_position` followed by `sync_bounds` never overlaps borrows.
struct SharedTransform(Rc<RefCell<SceneTransform>>);

impl TransformProvider for SharedTransform {
    fn position(&self) -> Vec3 {
        self.0.borrow().position
    }

    fn set_position(&mut self, position: Vec3) {
        self.0.borrow_mut().position = position;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.0.borrow_mut().rotation = rotation;
    }
}

/// Collider collaborator over the static boxes: multi-ray segment casts with
/// layer filtering, and body bounds cached against the shared transform
struct SandboxWorld {
    boxes: Vec<SceneBox>,
    half_size: Vec3,
    center: Vec3,
    transform: Rc<RefCell<SceneTransform>>,
}

impl SandboxWorld {
    fn new(transform: Rc<RefCell<SceneTransform>>, half_size: Vec3) -> Self {
        let center = transform.borrow().position;
        Self {
            boxes: Vec::new(),
            half_size,
            center,
            transform,
        }
    }
}

impl ColliderVolume for SandboxWorld {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.center, self.half_size)
    }

    fn raycast(&self, query: &RayQuery) -> Option<RaycastHit> {
        let rays = query.rays.max(2);
        let mut nearest: Option<(f32, RaycastHit)> = None;

        for ray in 0..rays {
            let t = ray as f32 / (rays - 1) as f32;
            let origin = query.start + (query.end - query.start) * t;
            for b in &self.boxes {
                if !query.mask.allows(b.layer) {
                    continue;
                }
                let Some((distance, normal)) = raycast_box(origin, query.direction, query.distance, b)
                else {
                    continue;
                };
                if nearest.as_ref().is_some_and(|(best, _)| distance >= *best) {
                    continue;
                }
                let point = origin + query.direction * distance;
                let hit = match b.platform {
                    Some(key) => RaycastHit::on_platform(point, normal, key),
                    None => RaycastHit::new(point, normal),
                };
                nearest = Some((distance, hit));
            }
        }

        nearest.map(|(_, hit)| hit)
    }

    fn sync_bounds(&mut self) {
        self.center = self.transform.borrow().position;
    }
}

fn main() {
    kinematic_engine::foundation::logging::init();
    log::info!("Creating sandbox scene...");

    let mut platforms = PlatformRegistry::new();
    let elevator = platforms.insert(MovingPlatform::new());

    let transform = Rc::new(RefCell::new(SceneTransform::new(Vec3::new(0.0, 4.0, 0.0))));
    let mut shared = SharedTransform(Rc::clone(&transform));
    let mut world = SandboxWorld::new(Rc::clone(&transform), Vec3::new(0.5, 1.0, 0.5));

    // Floor, a wall to the right, and an elevator platform under the spawn
    world.boxes.push(SceneBox::new(
        Vec3::new(-20.0, -2.0, -20.0),
        Vec3::new(20.0, 0.0, 20.0),
        LayerMask::ENVIRONMENT,
    ));
    world.boxes.push(SceneBox::new(
        Vec3::new(4.0, 0.0, -2.0),
        Vec3::new(5.0, 4.0, 2.0),
        LayerMask::ENVIRONMENT,
    ));
    world.boxes.push(SceneBox::platform(
        Vec3::new(-1.0, 1.5, -1.0),
        Vec3::new(1.0, 2.0, 1.0),
        elevator,
    ));

    let mut body = KinematicBody::new(&BodyConfig::default());
    log::info!(
        "Body spawned at {:?}, gravity {}",
        transform.borrow().position,
        body.vertical().gravity()
    );

    let mut stepper = FixedStep::new(TICK);
    let mut tick = 0_u32;
    let mut reached_wall = false;

    // 50 Hz frames driving a 60 Hz simulation for twelve seconds
    for _frame in 0..600 {
        for _ in 0..stepper.advance(FRAME) {
            tick += 1;

            // Elevator drifts up for a second, then down, until destroyed
            if platforms.get(elevator).is_some() {
                let rising = (tick / 60) % 2 == 0;
                let step = if rising { 0.005 } else { -0.005 };
                let delta = Vec3::new(0.0, step, 0.0);
                if let Some(platform) = platforms.get_mut(elevator) {
                    platform.set_velocity(delta);
                }
                if let Some(cab) = world.boxes.iter_mut().find(|b| b.platform == Some(elevator)) {
                    cab.min += delta;
                    cab.max += delta;
                }
            }

            // Rip the elevator out of the scene mid-ride
            if tick == 360 {
                log::info!("tick {tick}: destroying the elevator");
                platforms.remove(elevator);
                world.boxes.retain(|b| b.platform.is_none());
            }

            // Once back on solid ground, walk toward the wall
            if tick > 420 && !reached_wall && body.is_grounded() {
                body.horizontal_mut().set_speed(2.0);
                body.face(AxisKind::Horizontal, 1.0, &mut shared);
            }

            world.sync_bounds();
            let report = body.update(Some(&mut world), &mut shared, &platforms, TICK);
            body.late_update(Some(&mut world), &mut shared, &platforms);

            for event in &report.events {
                if !matches!(event, BodyEvent::Moving { .. }) {
                    log::info!("tick {tick}: {event}");
                }
            }
            if tick % 120 == 0 {
                log::info!(
                    "tick {tick}: position {:?}, grounded {}",
                    transform.borrow().position,
                    body.is_grounded()
                );
            }

            // Pressing into the wall keeps reporting hits; one is enough
            if tick > 420 && !reached_wall && body.horizontal().is_colliding(Side::Positive) {
                reached_wall = true;
                body.horizontal_mut().stop();
            }
        }
    }

    log::info!(
        "Sandbox complete at {:?} after {tick} ticks",
        transform.borrow().position
    );
}
