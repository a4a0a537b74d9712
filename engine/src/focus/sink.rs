//! Collaborator traits
//!
//! The autofocus loop reads a view transform, writes a focus distance and,
//! optionally, draws a debug marker. Each of those is a trait so the loop does
//! not care which camera or renderer sits on the other side.

use glam::Vec3;

/// Cyan, the color of the focus marker.
pub const MARKER_COLOR: Vec3 = Vec3::new(0.0, 1.0, 1.0);

/// Where the camera is and which way it looks, sampled at call time.
pub trait ViewTransform {
    fn position(&self) -> Vec3;
    /// Normalized view direction.
    fn forward(&self) -> Vec3;
}

/// Receives the smoothed focus distance once per frame.
pub trait FocusSink {
    fn set_focus_distance(&mut self, distance: f32);
}

impl<T: FocusSink + ?Sized> FocusSink for &mut T {
    fn set_focus_distance(&mut self, distance: f32) {
        (**self).set_focus_distance(distance);
    }
}

impl<T: FocusSink + ?Sized> FocusSink for Box<T> {
    fn set_focus_distance(&mut self, distance: f32) {
        (**self).set_focus_distance(distance);
    }
}

/// Development overlay for visualizing the focus point.
pub trait DebugOverlay {
    fn draw_wire_sphere(&mut self, center: Vec3, radius: f32, color: Vec3);
}

/// Overlay that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOverlay;

impl DebugOverlay for NoOverlay {
    #[inline]
    fn draw_wire_sphere(&mut self, _center: Vec3, _radius: f32, _color: Vec3) {}
}

/// One wire sphere requested by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugMarker {
    pub center: Vec3,
    pub radius: f32,
    pub color: Vec3,
}

/// Overlay that records markers for a renderer to drain each frame.
#[derive(Clone, Debug, Default)]
pub struct MarkerBuffer {
    markers: Vec<DebugMarker>,
}

impl MarkerBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> &[DebugMarker] {
        &self.markers
    }

    pub fn last(&self) -> Option<&DebugMarker> {
        self.markers.last()
    }

    /// Hands over all recorded markers, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<DebugMarker> {
        std::mem::take(&mut self.markers)
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl DebugOverlay for MarkerBuffer {
    fn draw_wire_sphere(&mut self, center: Vec3, radius: f32, color: Vec3) {
        self.markers.push(DebugMarker { center, radius, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_buffer_records_and_drains() {
        let mut buffer = MarkerBuffer::new();
        buffer.draw_wire_sphere(Vec3::ONE, 0.5, MARKER_COLOR);
        buffer.draw_wire_sphere(Vec3::ZERO, 0.1, MARKER_COLOR);
        assert_eq!(buffer.markers().len(), 2);
        assert_eq!(buffer.last().unwrap().center, Vec3::ZERO);

        let drained = buffer.drain();
        assert_eq!(drained[0].radius, 0.5);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_sink_through_mut_ref() {
        struct Probe(f32);
        impl FocusSink for Probe {
            fn set_focus_distance(&mut self, distance: f32) {
                self.0 = distance;
            }
        }

        fn publish<S: FocusSink>(mut sink: S, distance: f32) {
            sink.set_focus_distance(distance);
        }

        let mut probe = Probe(0.0);
        publish(&mut probe, 3.5);
        assert_eq!(probe.0, 3.5);

        let mut boxed: Box<dyn FocusSink> = Box::new(Probe(0.0));
        publish(&mut boxed, 1.0);
    }
}
