//! Target Estimator
//!
//! Casts one probe along the view direction and turns the result into the
//! focus target for this frame.

use glam::Vec3;

use super::config::FocusConfig;
use crate::physics::SceneQuery;

/// Which probe produced a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeKind {
    /// Ray cast ("spot" metering)
    Point,
    /// Sphere sweep ("center weighted" metering)
    Area,
}

/// Focus target for a single frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusTarget {
    /// Point the camera should focus on
    pub point: Vec3,
    /// Desired focus distance
    pub distance: f32,
    pub kind: ProbeKind,
    /// False when the fallback values were used
    pub hit: bool,
}

/// Computes this frame's focus target.
///
/// On a miss the target is the far end of the probe with the configured
/// default distance. In area mode the probe radius is added to the sweep
/// distance so the result approximates the surface distance along the view
/// axis rather than the distance travelled by the sphere's center. A sweep
/// that touches near its far end can therefore report slightly more than
/// `max_distance`; only point probes are bounded by it.
///
/// # Arguments
/// * `origin` - Camera position in world space
/// * `direction` - Normalized view direction
/// * `config` - Probe settings
/// * `scene` - Scene to probe
pub fn estimate_target<Q: SceneQuery + ?Sized>(
    origin: Vec3,
    direction: Vec3,
    config: &FocusConfig,
    scene: &Q,
) -> FocusTarget {
    let kind = if config.use_area_probe {
        ProbeKind::Area
    } else {
        ProbeKind::Point
    };

    let hit = match kind {
        ProbeKind::Area => scene
            .sphere_cast(origin, config.probe_radius, direction, config.max_distance, config.layer_mask)
            .map(|hit| (hit.point, hit.distance + config.probe_radius)),
        ProbeKind::Point => scene
            .raycast(origin, direction, config.max_distance, config.layer_mask)
            .map(|hit| (hit.point, hit.distance)),
    };

    match hit {
        Some((point, distance)) => {
            log::trace!("focus probe {:?} hit at {:.3}m", kind, distance);
            FocusTarget {
                point,
                distance,
                kind,
                hit: true,
            }
        }
        None => {
            log::trace!("focus probe {:?} missed, using default {:.3}m", kind, config.default_distance);
            FocusTarget {
                point: origin + direction * config.max_distance,
                distance: config.default_distance,
                kind,
                hit: false,
            }
        }
    }
}
