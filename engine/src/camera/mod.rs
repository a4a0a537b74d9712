//! Camera Module
//!
//! The camera side of autofocus: the rig that supplies the probe's origin and
//! direction, and the lens that receives the focus distance.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod lens;
pub mod rig;

pub use lens::{DepthOfFieldLens, DofUniforms, LensBinding};
pub use rig::CameraRig;
