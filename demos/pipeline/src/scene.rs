//! The demo course: a start point, a goal, and a field of spherical rocks
//! between them.

use std::rc::Rc;

use ai_core::{Sphere, Vector3};

pub const START: Vector3 = Vector3::new(0.0, 0.0, 0.0);
pub const GOAL:  Vector3 = Vector3::new(120.0, 0.0, 10.0);

/// Rocks placed so the straight line from `START` to `GOAL` hits several.
pub fn build_obstacles() -> Rc<[Sphere]> {
    vec![
        Sphere::new(Vector3::new(20.0, 0.0, 1.0), 4.0),
        Sphere::new(Vector3::new(45.0, 0.0, 5.0), 6.0),
        Sphere::new(Vector3::new(70.0, 0.0, 4.0), 3.0),
        Sphere::new(Vector3::new(90.0, 0.0, 9.0), 5.0),
        Sphere::new(Vector3::new(60.0, 0.0, -25.0), 8.0),
    ]
    .into()
}

/// Smallest gap between `position` and any obstacle surface (negative when
/// inside one).
pub fn clearance(position: Vector3, obstacles: &[Sphere]) -> f32 {
    obstacles
        .iter()
        .map(|o| position.distance(o.position) - o.radius)
        .fold(f32::INFINITY, f32::min)
}
