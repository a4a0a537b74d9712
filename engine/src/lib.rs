//! Focus Pull Engine Library
//!
//! Camera autofocus for depth-of-field rendering. Every frame a probe is cast
//! along the view direction, a target focus distance is derived from the hit,
//! and the camera's focus is eased toward it at a rate that depends on whether
//! focus is pulling nearer or farther.
//!
//! # Modules
//!
//! - [`focus`] - Autofocus controller: configuration, target estimation, smoothing
//! - [`physics`] - Layer masks, ray/sphere-sweep intersection and a reference scene
//! - [`camera`] - Camera rig (view transform) and depth-of-field lens sink
//!
//! # Example
//!
//! ```ignore
//! use focus_pull_engine::camera::{CameraRig, DepthOfFieldLens};
//! use focus_pull_engine::focus::{AutofocusController, FocusConfig};
//! use focus_pull_engine::physics::{Collider, SceneGeometry};
//! use glam::Vec3;
//!
//! let mut scene = SceneGeometry::new();
//! scene.add(Collider::sphere(Vec3::new(0.0, 0.0, -12.0), 1.0, 0));
//!
//! let rig = CameraRig::new();
//! let mut autofocus = AutofocusController::new(FocusConfig::default())
//!     .with_sink(DepthOfFieldLens::default());
//! autofocus.initialize(&rig)?;
//!
//! // Once per frame
//! autofocus.update(dt, &rig, &scene);
//! ```

pub mod camera;
pub mod focus;
pub mod physics;

pub use camera::{CameraRig, DepthOfFieldLens, LensBinding};
pub use focus::{
    AutofocusController, DebugOverlay, FocusConfig, FocusError, FocusFrame, FocusSink,
    FocusState, MarkerBuffer, ViewTransform,
};
pub use physics::{Collider, LayerMask, ProbeHit, SceneGeometry, SceneQuery};
