//! Scene queries
//!
//! [`SceneQuery`] is the contract the autofocus probe calls each frame. Any
//! engine's physics world can implement it; [`SceneGeometry`] is a small
//! brute-force implementation over boxes and spheres that the demo and tests
//! run against.

use glam::Vec3;

use super::collision::{
    ProbeHit, ray_aabb_intersect, ray_sphere_intersect, sphere_cast_aabb, sphere_cast_sphere,
};
use super::layers::LayerMask;

/// Nearest-hit queries against scene geometry.
///
/// Both queries take a normalized `direction`, only report hits with
/// `0 <= distance <= max_distance`, and ignore colliders whose layer is not in
/// `mask`. A miss is `None`, never an error.
pub trait SceneQuery {
    /// Casts a ray and returns the nearest hit.
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: LayerMask) -> Option<ProbeHit>;

    /// Sweeps a sphere of `radius` and returns the first contact.
    ///
    /// `distance` in the result is how far the sphere's center travelled.
    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<ProbeHit>;
}

impl<T: SceneQuery + ?Sized> SceneQuery for &T {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: LayerMask) -> Option<ProbeHit> {
        (**self).raycast(origin, direction, max_distance, mask)
    }

    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<ProbeHit> {
        (**self).sphere_cast(origin, radius, direction, max_distance, mask)
    }
}

/// Collision shape of a [`Collider`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    /// Axis-aligned box given by its corners
    Aabb { min: Vec3, max: Vec3 },
    /// Sphere given by center and radius
    Sphere { center: Vec3, radius: f32 },
}

/// A shape placed on one scene layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub shape: ColliderShape,
    /// Layer index (0-31)
    pub layer: u32,
}

impl Collider {
    /// Box from two opposite corners, in any order.
    pub fn aabb(a: Vec3, b: Vec3, layer: u32) -> Self {
        Self {
            shape: ColliderShape::Aabb {
                min: a.min(b),
                max: a.max(b),
            },
            layer,
        }
    }

    /// Box centered on `center` with the given half extents.
    pub fn cuboid(center: Vec3, half_extents: Vec3, layer: u32) -> Self {
        let half_extents = half_extents.abs();
        Self::aabb(center - half_extents, center + half_extents, layer)
    }

    pub fn sphere(center: Vec3, radius: f32, layer: u32) -> Self {
        Self {
            shape: ColliderShape::Sphere {
                center,
                radius: radius.abs(),
            },
            layer,
        }
    }

    /// Geometric center of the shape.
    pub fn center(&self) -> Vec3 {
        match self.shape {
            ColliderShape::Aabb { min, max } => (min + max) * 0.5,
            ColliderShape::Sphere { center, .. } => center,
        }
    }

    /// Ray hit against this collider alone, ignoring layers.
    pub fn raycast(&self, origin: Vec3, direction: Vec3) -> Option<ProbeHit> {
        match self.shape {
            ColliderShape::Aabb { min, max } => {
                let t = ray_aabb_intersect(origin, direction, min, max)?;
                Some(ProbeHit::new(origin + direction * t, t))
            }
            ColliderShape::Sphere { center, radius } => {
                let t = ray_sphere_intersect(origin, direction, center, radius)?;
                Some(ProbeHit::new(origin + direction * t, t))
            }
        }
    }

    /// Sphere-sweep hit against this collider alone, ignoring layers.
    pub fn sphere_cast(&self, origin: Vec3, radius: f32, direction: Vec3) -> Option<ProbeHit> {
        match self.shape {
            ColliderShape::Aabb { min, max } => sphere_cast_aabb(origin, radius, direction, min, max),
            ColliderShape::Sphere {
                center,
                radius: sphere_radius,
            } => sphere_cast_sphere(origin, radius, direction, center, sphere_radius),
        }
    }
}

/// Flat list of colliders queried by brute force.
///
/// Every query visits every collider. That is fine for the handful of shapes a
/// focus test scene holds; a real world should implement [`SceneQuery`] on top
/// of its own acceleration structure.
#[derive(Debug, Clone, Default)]
pub struct SceneGeometry {
    colliders: Vec<Collider>,
}

impl SceneGeometry {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collider and returns its index.
    pub fn add(&mut self, collider: Collider) -> usize {
        self.colliders.push(collider);
        self.colliders.len() - 1
    }

    /// Removes and returns the collider at `index`, if any.
    ///
    /// Indices of colliders after it shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<Collider> {
        if index < self.colliders.len() {
            Some(self.colliders.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Collider> {
        self.colliders.get(index)
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.iter()
    }

    /// Nearest hit among colliders on `mask` within `max_distance`.
    fn nearest(
        &self,
        max_distance: f32,
        mask: LayerMask,
        probe: impl Fn(&Collider) -> Option<ProbeHit>,
    ) -> Option<ProbeHit> {
        let mut closest: Option<ProbeHit> = None;
        let mut closest_dist = max_distance;

        for collider in self.colliders.iter().filter(|c| mask.contains_layer(c.layer)) {
            if let Some(hit) = probe(collider) {
                if hit.distance <= closest_dist {
                    closest_dist = hit.distance;
                    closest = Some(hit);
                }
            }
        }

        closest
    }
}

impl FromIterator<Collider> for SceneGeometry {
    fn from_iter<I: IntoIterator<Item = Collider>>(iter: I) -> Self {
        Self {
            colliders: iter.into_iter().collect(),
        }
    }
}

impl SceneQuery for SceneGeometry {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: LayerMask) -> Option<ProbeHit> {
        self.nearest(max_distance, mask, |c| c.raycast(origin, direction))
    }

    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<ProbeHit> {
        self.nearest(max_distance, mask, |c| c.sphere_cast(origin, radius, direction))
    }
}
