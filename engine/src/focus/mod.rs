//! Autofocus Module
//!
//! Drives a camera's depth-of-field focus distance from what the camera is
//! looking at. Each frame:
//!
//! 1. [`estimator`] casts a point or area probe along the view direction and
//!    picks a target point and distance (falling back to a configured default
//!    when nothing is hit).
//! 2. [`smoother`] eases the persistent [`FocusState`] toward that target,
//!    faster when focus pulls nearer than when it pushes farther.
//! 3. [`AutofocusController`] publishes the smoothed distance to the lens
//!    through [`FocusSink`] and optionally draws a marker through
//!    [`DebugOverlay`].
//!
//! This module is engine agnostic: the scene, the camera transform and the
//! lens are all reached through traits.

pub mod config;
pub mod controller;
pub mod error;
pub mod estimator;
pub mod sink;
pub mod smoother;

pub use config::FocusConfig;
pub use controller::{AutofocusController, FocusFrame, FocusPhase};
pub use error::FocusError;
pub use estimator::{FocusTarget, ProbeKind, estimate_target};
pub use sink::{DebugMarker, DebugOverlay, FocusSink, MarkerBuffer, NoOverlay, ViewTransform};
pub use smoother::{FocusState, interpolation_factor, select_rate};
