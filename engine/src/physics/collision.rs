//! Collision detection module
//!
//! Intersection primitives behind the autofocus probes. A point probe is a
//! ray; an area probe is a sphere swept along a ray.
//!
//! # Ray-AABB Intersection
//!
//! The slab method finds entry and exit times for each axis pair of planes.
//! The ray enters the box at the latest entry and leaves at the earliest exit.
//!
//! # Sphere Sweeps
//!
//! Sweeping a sphere of radius `r` against a shape is the same as casting a
//! ray against that shape grown by `r`. Spheres grow exactly (radius `R + r`).
//! Boxes are grown along each axis, which over-covers edges and corners, so a
//! sweep can report contact slightly early near a box corner.
//!
//! In every query, a shape that already contains the ray origin (or overlaps
//! the swept sphere at its start) does not count as a hit.
//!
//! # Example
//!
//! ```ignore
//! use focus_pull_engine::physics::collision::{ray_aabb_intersect, sphere_cast_sphere};
//! use glam::Vec3;
//!
//! let origin = Vec3::new(0.0, 0.0, -5.0);
//! let direction = Vec3::Z;
//!
//! if let Some(t) = ray_aabb_intersect(origin, direction, Vec3::splat(-1.0), Vec3::ONE) {
//!     println!("Hit at distance {}", t);
//! }
//!
//! if let Some(hit) = sphere_cast_sphere(origin, 0.5, direction, Vec3::ZERO, 1.0) {
//!     println!("Sphere touches at {:?} after {}", hit.point, hit.distance);
//! }
//! ```

use glam::Vec3;

/// Result of a successful probe.
///
/// For a ray, `point` lies on the ray and `distance` is how far along it.
/// For a sphere sweep, `distance` is how far the sphere's center travelled
/// before first contact and `point` is the contact on the collider surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    /// World-space contact point
    pub point: Vec3,
    /// Distance travelled along the probe direction
    pub distance: f32,
}

impl ProbeHit {
    pub fn new(point: Vec3, distance: f32) -> Self {
        Self { point, distance }
    }
}

/// Entry and exit times of a ray through an AABB, or `None` if it misses the
/// box or the box lies entirely behind the origin.
fn ray_aabb_slab(ray_origin: Vec3, ray_dir: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Option<(f32, f32)> {
    // Near-zero direction components become huge inverse values so the
    // corresponding slab either spans everything or nothing.
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() > 1e-10 { 1.0 / ray_dir.x } else { f32::MAX * ray_dir.x.signum() },
        if ray_dir.y.abs() > 1e-10 { 1.0 / ray_dir.y } else { f32::MAX * ray_dir.y.signum() },
        if ray_dir.z.abs() > 1e-10 { 1.0 / ray_dir.z } else { f32::MAX * ray_dir.z.signum() },
    );

    let t1 = (aabb_min - ray_origin) * inv_dir;
    let t2 = (aabb_max - ray_origin) * inv_dir;

    let t_enter = t1.min(t2).max_element();
    let t_exit = t1.max(t2).min_element();

    if t_exit >= t_enter && t_exit >= 0.0 {
        Some((t_enter, t_exit))
    } else {
        None
    }
}

/// Performs ray-AABB intersection using the slab method.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the entry point (t >= 0)
/// * `None` - No intersection, box behind the ray, or origin inside the box
pub fn ray_aabb_intersect(ray_origin: Vec3, ray_dir: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Option<f32> {
    match ray_aabb_slab(ray_origin, ray_dir, aabb_min, aabb_max) {
        Some((t_enter, _)) if t_enter >= 0.0 => Some(t_enter),
        _ => None,
    }
}

/// Ray-sphere intersection.
///
/// Ray: `P(t) = origin + t * dir`, sphere: `|P - center|² = radius²`.
/// With a normalized direction this reduces to `t² + 2bt + c = 0` where
/// `b = oc · dir` and `c = oc · oc - radius²`.
///
/// # Returns
///
/// * `Some(t)` - Distance to the entry point (t >= 0)
/// * `None` - Miss, sphere behind the ray, or origin inside the sphere
pub fn ray_sphere_intersect(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let c = oc.dot(oc) - radius * radius;
    if c < 0.0 {
        return None;
    }

    let b = oc.dot(ray_dir);
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let t = -b - discriminant.sqrt();
    if t >= 0.0 { Some(t) } else { None }
}

/// Closest point to `point` on or inside the box.
#[inline]
pub fn closest_point_on_aabb(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    point.clamp(aabb_min, aabb_max)
}

/// Sweeps a sphere of `radius` against a fixed sphere.
///
/// Returns the center travel distance and the contact point on the fixed
/// sphere's surface. Overlap at the start of the sweep is not a hit.
pub fn sphere_cast_sphere(
    origin: Vec3,
    radius: f32,
    direction: Vec3,
    center: Vec3,
    sphere_radius: f32,
) -> Option<ProbeHit> {
    let t = ray_sphere_intersect(origin, direction, center, sphere_radius + radius)?;
    let swept_center = origin + direction * t;
    let outward = (swept_center - center).try_normalize().unwrap_or(-direction);
    Some(ProbeHit::new(center + outward * sphere_radius, t))
}

/// Sweeps a sphere of `radius` against an AABB.
///
/// Casts against the box grown by `radius` on every axis, then takes the
/// closest point on the real box as the contact. Overlap at the start of the
/// sweep is not a hit.
pub fn sphere_cast_aabb(
    origin: Vec3,
    radius: f32,
    direction: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<ProbeHit> {
    let grow = Vec3::splat(radius);
    let t = ray_aabb_intersect(origin, direction, aabb_min - grow, aabb_max + grow)?;
    let swept_center = origin + direction * t;
    let point = closest_point_on_aabb(swept_center, aabb_min, aabb_max);
    Some(ProbeHit::new(point, t))
}
