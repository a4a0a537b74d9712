//! Autofocus Configuration
//!
//! Author-facing knobs for the focus probe and the focus smoothing. Defaults
//! give a 100m spot probe on the default layer that settles on nearer targets
//! faster than on farther ones.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::FocusError;
use crate::physics::LayerMask;

/// Marker radius drawn in spot mode, where the probe itself has no size.
pub const SPOT_MARKER_RADIUS: f32 = 0.1;

/// Autofocus configuration.
///
/// Any field may be changed between frames; the controller reads it fresh on
/// every update. Missing JSON fields take their default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    // Probe
    /// Probe length in meters (must be > 0)
    pub max_distance: f32,
    /// Focus distance used when the probe hits nothing
    pub default_distance: f32,
    /// Layers the probe may hit
    pub layer_mask: LayerMask,
    /// Sweep a sphere instead of casting a ray
    pub use_area_probe: bool,
    /// Radius of the swept sphere in area mode
    pub probe_radius: f32,

    // Smoothing (per second; 0 freezes focus)
    /// Rate used while the target is farther than the current focus
    pub speed_when_farthering: f32,
    /// Rate used while the target is nearer than (or equal to) the current focus
    pub speed_when_nearing: f32,

    /// Draw a marker at the current focus point
    pub show_debug_marker: bool,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            max_distance: 100.0,
            default_distance: 5.0,
            layer_mask: LayerMask::DEFAULT,
            use_area_probe: false,
            probe_radius: 0.1,
            speed_when_farthering: 2.0,
            speed_when_nearing: 5.0,
            show_debug_marker: true,
        }
    }
}

impl FocusConfig {
    /// Area-probe preset: sweeps a sphere of `radius` instead of a ray.
    pub fn area(radius: f32) -> Self {
        Self {
            use_area_probe: true,
            probe_radius: radius,
            ..Default::default()
        }
    }

    /// Checks every range constraint.
    ///
    /// `default_distance <= max_distance` is deliberately not enforced.
    pub fn validate(&self) -> Result<(), FocusError> {
        fn check(field: &'static str, value: f32, ok: bool, reason: &'static str) -> Result<(), FocusError> {
            if value.is_finite() && ok {
                Ok(())
            } else {
                Err(FocusError::InvalidConfig { field, reason, value })
            }
        }

        check("max_distance", self.max_distance, self.max_distance > 0.0, "must be positive")?;
        check(
            "default_distance",
            self.default_distance,
            self.default_distance >= 0.0,
            "must not be negative",
        )?;
        check("probe_radius", self.probe_radius, self.probe_radius >= 0.0, "must not be negative")?;
        check(
            "speed_when_farthering",
            self.speed_when_farthering,
            self.speed_when_farthering >= 0.0,
            "must not be negative",
        )?;
        check(
            "speed_when_nearing",
            self.speed_when_nearing,
            self.speed_when_nearing >= 0.0,
            "must not be negative",
        )?;
        Ok(())
    }

    /// Radius of the debug marker: the probe radius in area mode, else a
    /// small fixed sphere.
    pub fn marker_radius(&self) -> f32 {
        if self.use_area_probe {
            self.probe_radius
        } else {
            SPOT_MARKER_RADIUS
        }
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, FocusError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load_json(path: &Path) -> Result<Self, FocusError> {
        let json = std::fs::read_to_string(path).map_err(|source| FocusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, FocusError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FocusConfig::default();
        assert_eq!(config.max_distance, 100.0);
        assert_eq!(config.default_distance, 5.0);
        assert_eq!(config.layer_mask, LayerMask(1));
        assert!(!config.use_area_probe);
        assert_eq!(config.speed_when_farthering, 2.0);
        assert_eq!(config.speed_when_nearing, 5.0);
        assert!(config.show_debug_marker);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_max_distance() {
        let config = FocusConfig {
            max_distance: 0.0,
            ..Default::default()
        };
        match config.validate() {
            Err(FocusError::InvalidConfig { field, .. }) => assert_eq!(field, "max_distance"),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_speed_and_radius() {
        let config = FocusConfig {
            speed_when_nearing: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = FocusConfig {
            probe_radius: -0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan() {
        let config = FocusConfig {
            default_distance: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_speed_is_allowed() {
        let config = FocusConfig {
            speed_when_farthering: 0.0,
            speed_when_nearing: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_beyond_max_is_allowed() {
        let config = FocusConfig {
            max_distance: 10.0,
            default_distance: 50.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_marker_radius() {
        assert_eq!(FocusConfig::default().marker_radius(), SPOT_MARKER_RADIUS);
        assert_eq!(FocusConfig::area(0.75).marker_radius(), 0.75);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FocusConfig::from_json_str(r#"{ "max_distance": 40.0, "use_area_probe": true }"#).unwrap();
        assert_eq!(config.max_distance, 40.0);
        assert!(config.use_area_probe);
        assert_eq!(config.default_distance, 5.0);
        assert_eq!(config.probe_radius, 0.1);
    }

    #[test]
    fn test_json_validation_runs() {
        let err = FocusConfig::from_json_str(r#"{ "max_distance": -3.0 }"#).unwrap_err();
        assert!(matches!(err, FocusError::InvalidConfig { .. }));

        let err = FocusConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, FocusError::Json(_)));
    }

    #[test]
    fn test_json_survives_save() {
        let config = FocusConfig {
            layer_mask: LayerMask(0b1010),
            ..FocusConfig::area(0.3)
        };
        let json = config.to_json_pretty().unwrap();
        assert_eq!(FocusConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = FocusConfig::load_json(Path::new("/nonexistent/focus.json")).unwrap_err();
        assert!(matches!(err, FocusError::Io { .. }));
    }
}
