//! Depth-of-field lens
//!
//! The lens is where the autofocus output lands. It stores the focus
//! distance alongside the lens settings the depth-of-field pass needs and
//! packs them into a uniform block for the GPU.

use bytemuck::{Pod, Zeroable};

use crate::focus::FocusSink;

/// Depth-of-field uniforms.
/// Must match the WGSL struct layout exactly!
///
/// WGSL layout (16 bytes total):
///   offset  0: focus_distance (f32)   = 4 bytes
///   offset  4: aperture_f_stops (f32) = 4 bytes
///   offset  8: focal_length_mm (f32)  = 4 bytes
///   offset 12: sensor_height_mm (f32) = 4 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DofUniforms {
    pub focus_distance: f32,
    pub aperture_f_stops: f32,
    pub focal_length_mm: f32,
    pub sensor_height_mm: f32,
}

static_assertions::assert_eq_size!(DofUniforms, [u8; 16]);

/// Lens settings plus the current focus distance.
#[derive(Clone, Debug, PartialEq)]
pub struct DepthOfFieldLens {
    /// Distance in meters the lens is focused at
    pub focus_distance: f32,
    /// Aperture as an f-number (lower = shallower depth of field)
    pub aperture_f_stops: f32,
    pub focal_length_mm: f32,
    /// Sensor height in mm (24mm = full frame)
    pub sensor_height_mm: f32,
    /// Number of focus writes received
    focus_writes: u64,
}

impl Default for DepthOfFieldLens {
    fn default() -> Self {
        Self {
            focus_distance: 10.0,
            aperture_f_stops: 2.8,
            focal_length_mm: 50.0,
            sensor_height_mm: 24.0,
            focus_writes: 0,
        }
    }
}

impl DepthOfFieldLens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lens with a custom aperture (f-number)
    pub fn with_aperture(aperture_f_stops: f32) -> Self {
        Self {
            aperture_f_stops,
            ..Default::default()
        }
    }

    pub fn focus_writes(&self) -> u64 {
        self.focus_writes
    }

    /// Pack for upload with `bytemuck::bytes_of`.
    pub fn to_uniforms(&self) -> DofUniforms {
        DofUniforms {
            focus_distance: self.focus_distance,
            aperture_f_stops: self.aperture_f_stops,
            focal_length_mm: self.focal_length_mm,
            sensor_height_mm: self.sensor_height_mm,
        }
    }
}

impl FocusSink for DepthOfFieldLens {
    fn set_focus_distance(&mut self, distance: f32) {
        self.focus_distance = distance;
        self.focus_writes += 1;
    }
}

/// The lens a controller writes to.
///
/// A camera may carry a virtual-camera lens (owned by a camera director) as
/// well as its own physical lens. When both exist the virtual one wins, since
/// it overrides the physical lens every frame anyway.
#[derive(Clone, Debug, PartialEq)]
pub enum LensBinding<V, P> {
    Virtual(V),
    Physical(P),
}

impl<V, P> LensBinding<V, P> {
    /// Picks the virtual lens if present, else the physical one. `None` when
    /// the camera has no lens at all.
    pub fn resolve(virtual_lens: Option<V>, physical_lens: Option<P>) -> Option<Self> {
        match (virtual_lens, physical_lens) {
            (Some(v), _) => Some(LensBinding::Virtual(v)),
            (None, Some(p)) => Some(LensBinding::Physical(p)),
            (None, None) => None,
        }
    }

    pub fn is_virtual(&self) -> bool {
        matches!(self, LensBinding::Virtual(_))
    }
}

impl<V: FocusSink, P: FocusSink> FocusSink for LensBinding<V, P> {
    fn set_focus_distance(&mut self, distance: f32) {
        match self {
            LensBinding::Virtual(v) => v.set_focus_distance(distance),
            LensBinding::Physical(p) => p.set_focus_distance(distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lens_records_focus() {
        let mut lens = DepthOfFieldLens::with_aperture(1.4);
        lens.set_focus_distance(3.25);
        lens.set_focus_distance(3.5);
        assert_eq!(lens.focus_distance, 3.5);
        assert_eq!(lens.focus_writes(), 2);
        assert_eq!(lens.aperture_f_stops, 1.4);
    }

    #[test]
    fn test_uniform_bytes() {
        let mut lens = DepthOfFieldLens::default();
        lens.set_focus_distance(7.0);
        let uniforms = lens.to_uniforms();
        let bytes = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[0..4], &7.0f32.to_ne_bytes());
    }

    #[test]
    fn test_binding_prefers_virtual() {
        let binding = LensBinding::resolve(Some(DepthOfFieldLens::default()), Some(DepthOfFieldLens::default()));
        assert!(binding.unwrap().is_virtual());

        let binding: Option<LensBinding<DepthOfFieldLens, DepthOfFieldLens>> =
            LensBinding::resolve(None, Some(DepthOfFieldLens::default()));
        assert!(!binding.unwrap().is_virtual());

        let binding: Option<LensBinding<DepthOfFieldLens, DepthOfFieldLens>> = LensBinding::resolve(None, None);
        assert!(binding.is_none());
    }

    #[test]
    fn test_binding_forwards_to_selected_lens() {
        let mut binding: LensBinding<DepthOfFieldLens, DepthOfFieldLens> =
            LensBinding::Physical(DepthOfFieldLens::default());
        binding.set_focus_distance(4.0);
        match binding {
            LensBinding::Physical(lens) => assert_eq!(lens.focus_distance, 4.0),
            LensBinding::Virtual(_) => panic!("expected physical lens"),
        }
    }
}
