//! Physics module for the focus engine
//!
//! Scene queries used by the autofocus probe. Built from scratch without an
//! external physics library: the shapes involved are few and the queries are
//! read-only.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**. Probe lengths, radii and reported hit distances are
//! all in meters.
//!
//! # Submodules
//!
//! - [`layers`] - Layer masks for filtering what a probe may hit
//! - [`collision`] - Ray-AABB, ray-sphere and sphere-sweep intersection primitives
//! - [`scene`] - The [`SceneQuery`] service contract and a brute-force reference scene

pub mod collision;
pub mod layers;
pub mod scene;

pub use collision::{
    ProbeHit, closest_point_on_aabb, ray_aabb_intersect, ray_sphere_intersect, sphere_cast_aabb,
    sphere_cast_sphere,
};
pub use layers::LayerMask;
pub use scene::{Collider, ColliderShape, SceneGeometry, SceneQuery};
