//! Camera Rig Module
//!
//! Yaw/pitch camera whose transform feeds the autofocus probe. Input and
//! movement belong to the host; the rig only turns and aims.
//!
//! Coordinates: +X right, +Y up, -Z forward at yaw = pitch = 0.

use glam::Vec3;

use crate::focus::ViewTransform;

/// Pitch is held inside ±89 degrees so the view never flips over the pole.
const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Camera rig
///
/// ## Usage
/// ```rust,ignore
/// let mut rig = CameraRig::with_position(Vec3::new(0.0, 1.7, 0.0));
/// rig.look_at(Vec3::new(0.0, 1.0, -10.0));
///
/// // Each frame, before the autofocus update
/// rig.rotate(yaw_delta, 0.0);
/// autofocus.update(dt, &rig, &scene);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CameraRig {
    /// Camera position in world space
    pub position: Vec3,
    /// Heading in radians, unbounded
    pub yaw: f32,
    /// Elevation in radians, within ±89°
    pub pitch: f32,
}

impl CameraRig {
    /// Rig at the origin looking toward -Z
    pub fn new() -> Self {
        Self::default()
    }

    /// Rig at `position` looking toward -Z
    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Turn by yaw and pitch deltas in radians.
    ///
    /// Positive yaw turns right, positive pitch looks up.
    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Unit view direction for the current yaw and pitch.
    #[inline]
    pub fn get_forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    /// Aim the view at a world point.
    ///
    /// Targets closer than a millimetre leave the orientation untouched.
    pub fn look_at(&mut self, target: Vec3) {
        let offset = target - self.position;
        let Some(dir) = offset.try_normalize().filter(|_| offset.length() > 0.001) else {
            return;
        };
        self.yaw = dir.x.atan2(-dir.z);
        self.pitch = dir.y.asin().clamp(-MAX_PITCH, MAX_PITCH);
    }
}

impl ViewTransform for CameraRig {
    #[inline]
    fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    fn forward(&self) -> Vec3 {
        self.get_forward()
    }
}
