//! Focus Smoother
//!
//! Directional exponential smoothing of the focus state. Each frame the state
//! moves a fraction `t = clamp(dt * rate, 0, 1)` of the way to the target,
//! with a separate rate for pulling focus nearer and pushing it farther.

use glam::Vec3;

use super::config::FocusConfig;

/// Focus state carried from frame to frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusState {
    /// Smoothed focus distance published to the lens
    pub current_focus_distance: f32,
    /// Smoothed focus point (drives the debug marker)
    pub current_target_point: Vec3,
}

impl FocusState {
    /// Starting state: focused at the far end of the probe, with the focus
    /// point at the camera.
    pub fn new(max_distance: f32, camera_position: Vec3) -> Self {
        Self {
            current_focus_distance: max_distance,
            current_target_point: camera_position,
        }
    }

    /// Moves the state toward a target and returns the rate and factor used.
    pub fn step(
        &mut self,
        target_point: Vec3,
        target_distance: f32,
        dt: f32,
        config: &FocusConfig,
    ) -> (f32, f32) {
        let rate = select_rate(self.current_focus_distance, target_distance, config);
        let t = interpolation_factor(dt, rate);

        self.current_target_point = if t >= 1.0 {
            target_point
        } else {
            self.current_target_point.lerp(target_point, t)
        };
        self.current_focus_distance = lerp(self.current_focus_distance, target_distance, t);

        (rate, t)
    }
}

/// Picks the farthering rate when the target lies strictly beyond the current
/// focus, the nearing rate otherwise (ties included).
#[inline]
pub fn select_rate(current_distance: f32, target_distance: f32, config: &FocusConfig) -> f32 {
    if target_distance > current_distance {
        config.speed_when_farthering
    } else {
        config.speed_when_nearing
    }
}

/// `clamp(dt * rate, 0, 1)`. An infinite product snaps like any other
/// product `>= 1`; NaN counts as no movement.
#[inline]
pub fn interpolation_factor(dt: f32, rate: f32) -> f32 {
    let t = dt * rate;
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Linear interpolation that lands exactly on `b` at `t = 1`.
#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    if t >= 1.0 { b } else { a + (b - a) * t }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FocusConfig {
        FocusConfig {
            speed_when_farthering: 2.0,
            speed_when_nearing: 5.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_state() {
        let state = FocusState::new(100.0, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(state.current_focus_distance, 100.0);
        assert_eq!(state.current_target_point, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_rate_selection() {
        let config = config();
        assert_eq!(select_rate(5.0, 10.0, &config), 2.0, "farther target uses farthering rate");
        assert_eq!(select_rate(5.0, 2.0, &config), 5.0, "nearer target uses nearing rate");
    }

    #[test]
    fn test_tie_uses_nearing_rate() {
        assert_eq!(select_rate(5.0, 5.0, &config()), 5.0);
    }

    #[test]
    fn test_interpolation_factor_clamps() {
        assert_eq!(interpolation_factor(0.1, 2.0), 0.2);
        assert_eq!(interpolation_factor(1.0, 5.0), 1.0);
        assert_eq!(interpolation_factor(-0.5, 5.0), 0.0);
        assert_eq!(interpolation_factor(f32::NAN, 5.0), 0.0);
        assert_eq!(interpolation_factor(0.016, 0.0), 0.0);
    }

    #[test]
    fn test_snap_on_large_step() {
        let mut state = FocusState::new(100.0, Vec3::ZERO);
        let (rate, t) = state.step(Vec3::new(0.0, 0.0, 3.0), 3.0, 0.5, &config());
        assert_eq!(rate, 5.0);
        assert_eq!(t, 1.0);
        assert_eq!(state.current_focus_distance, 3.0);
        assert_eq!(state.current_target_point, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_infinite_dt_snaps_to_target() {
        assert_eq!(interpolation_factor(f32::INFINITY, 5.0), 1.0);
        assert_eq!(interpolation_factor(f32::NEG_INFINITY, 5.0), 0.0);
        // inf * 0 is NaN: a frozen rate stays frozen
        assert_eq!(interpolation_factor(f32::INFINITY, 0.0), 0.0);

        let mut state = FocusState::new(100.0, Vec3::ZERO);
        let (_, t) = state.step(Vec3::new(0.0, 0.0, 5.0), 5.0, f32::INFINITY, &FocusConfig::default());
        assert_eq!(t, 1.0);
        assert_eq!(state.current_focus_distance, 5.0);
        assert_eq!(state.current_target_point, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_partial_step() {
        let mut state = FocusState::new(10.0, Vec3::ZERO);
        // Farther target, rate 2, dt 0.25 -> t = 0.5
        state.step(Vec3::new(0.0, 0.0, 20.0), 20.0, 0.25, &config());
        assert!((state.current_focus_distance - 15.0).abs() < 1e-5);
        assert!((state.current_target_point.z - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_dt_leaves_state_unchanged() {
        let mut state = FocusState::new(42.0, Vec3::new(1.0, 1.0, 1.0));
        let before = state;
        state.step(Vec3::new(9.0, 9.0, 9.0), 3.0, 0.0, &config());
        assert_eq!(state, before);
    }

    #[test]
    fn test_convergence_is_monotonic() {
        let mut state = FocusState::new(100.0, Vec3::ZERO);
        let mut gap = (state.current_focus_distance - 12.0).abs();
        for _ in 0..200 {
            state.step(Vec3::new(0.0, 0.0, 12.0), 12.0, 1.0 / 60.0, &config());
            let next = (state.current_focus_distance - 12.0).abs();
            assert!(next <= gap, "gap grew from {} to {}", gap, next);
            gap = next;
        }
        assert!(gap < 0.01);
    }
}
