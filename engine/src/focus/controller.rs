//! Autofocus Controller
//!
//! Ties the estimator and the smoother to the host's frame loop. The host
//! calls [`AutofocusController::initialize`] once and
//! [`AutofocusController::update`] every frame after that.
//!
//! ## Usage
//! ```rust,ignore
//! let mut autofocus = AutofocusController::new(FocusConfig::default())
//!     .with_sink(DepthOfFieldLens::default())
//!     .with_overlay(MarkerBuffer::new());
//! autofocus.initialize(&rig)?;
//!
//! // Every frame
//! autofocus.update(dt, &rig, &scene);
//! autofocus.draw_debug();
//! ```

use glam::Vec3;

use super::config::FocusConfig;
use super::error::FocusError;
use super::estimator::{ProbeKind, estimate_target};
use super::sink::{DebugOverlay, FocusSink, MARKER_COLOR, NoOverlay, ViewTransform};
use super::smoother::FocusState;
use crate::physics::SceneQuery;

/// Lifecycle of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FocusPhase {
    /// `initialize` has not succeeded yet
    #[default]
    Uninitialized,
    /// Initialized, no frame processed yet
    Ready,
    /// At least one frame processed
    Tracking,
    /// `initialize` failed; updates are ignored until it succeeds
    Disabled,
}

impl FocusPhase {
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, FocusPhase::Ready | FocusPhase::Tracking)
    }
}

/// What one update did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusFrame {
    pub kind: ProbeKind,
    /// Whether the probe hit anything
    pub hit: bool,
    pub target_point: Vec3,
    pub target_distance: f32,
    /// Smoothing rate selected for this frame
    pub rate: f32,
    /// Interpolation factor applied
    pub t: f32,
    /// Distance published to the sink
    pub focus_distance: f32,
}

/// Per-frame autofocus driver.
///
/// Owns the focus state exclusively. `S` receives the focus distance, `D`
/// draws the optional debug marker.
#[derive(Debug)]
pub struct AutofocusController<S, D = NoOverlay> {
    config: FocusConfig,
    sink: Option<S>,
    overlay: D,
    state: FocusState,
    phase: FocusPhase,
}

impl<S: FocusSink> AutofocusController<S, NoOverlay> {
    /// Create a controller with no sink bound and no debug overlay.
    pub fn new(config: FocusConfig) -> Self {
        let state = FocusState::new(config.max_distance, Vec3::ZERO);
        Self {
            config,
            sink: None,
            overlay: NoOverlay,
            state,
            phase: FocusPhase::Uninitialized,
        }
    }
}

impl<S: FocusSink, D: DebugOverlay> AutofocusController<S, D> {
    /// Bind the camera lens that receives the focus distance.
    pub fn with_sink(mut self, sink: S) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace the debug overlay.
    pub fn with_overlay<D2: DebugOverlay>(self, overlay: D2) -> AutofocusController<S, D2> {
        AutofocusController {
            config: self.config,
            sink: self.sink,
            overlay,
            state: self.state,
            phase: self.phase,
        }
    }

    /// Bind (or rebind) the sink after construction.
    ///
    /// Takes effect on the next successful `initialize` if the controller is
    /// not active yet, otherwise on the next update.
    pub fn bind_sink(&mut self, sink: S) {
        self.sink = Some(sink);
    }

    /// One-time setup.
    ///
    /// Validates the configuration, requires a bound sink and seeds the focus
    /// state from the camera's current position. On failure the controller is
    /// disabled and every `update` is a no-op. Calling it again once active
    /// does nothing.
    pub fn initialize<V: ViewTransform + ?Sized>(&mut self, view: &V) -> Result<(), FocusError> {
        if self.phase.is_active() {
            log::warn!("autofocus already initialized, ignoring");
            return Ok(());
        }

        if let Err(e) = self.config.validate() {
            log::warn!("autofocus disabled: {}", e);
            self.phase = FocusPhase::Disabled;
            return Err(e);
        }

        if self.sink.is_none() {
            log::warn!("autofocus disabled: no focus sink bound");
            self.phase = FocusPhase::Disabled;
            return Err(FocusError::MissingSink);
        }

        self.state = FocusState::new(self.config.max_distance, view.position());
        self.phase = FocusPhase::Ready;
        log::info!(
            "autofocus initialized: {} probe, max {:.1}m, default {:.1}m",
            if self.config.use_area_probe { "area" } else { "point" },
            self.config.max_distance,
            self.config.default_distance,
        );
        Ok(())
    }

    /// Advance one frame.
    ///
    /// Probes the scene from the camera's current transform, eases the focus
    /// state toward the result and publishes the new distance to the sink
    /// exactly once. Returns `None` without touching anything when the
    /// controller is not initialized.
    pub fn update<V, Q>(&mut self, dt: f32, view: &V, scene: &Q) -> Option<FocusFrame>
    where
        V: ViewTransform + ?Sized,
        Q: SceneQuery + ?Sized,
    {
        if !self.phase.is_active() {
            return None;
        }
        let sink = self.sink.as_mut()?;

        let target = estimate_target(view.position(), view.forward(), &self.config, scene);
        let (rate, t) = self.state.step(target.point, target.distance, dt, &self.config);
        sink.set_focus_distance(self.state.current_focus_distance);

        if self.phase == FocusPhase::Ready {
            log::debug!("autofocus tracking");
            self.phase = FocusPhase::Tracking;
        }

        Some(FocusFrame {
            kind: target.kind,
            hit: target.hit,
            target_point: target.point,
            target_distance: target.distance,
            rate,
            t,
            focus_distance: self.state.current_focus_distance,
        })
    }

    /// Draw the focus marker if enabled. Never changes focus state.
    pub fn draw_debug(&mut self) {
        if !self.config.show_debug_marker || !self.phase.is_active() {
            return;
        }
        self.overlay.draw_wire_sphere(
            self.state.current_target_point,
            self.config.marker_radius(),
            MARKER_COLOR,
        );
    }

    /// Replace the configuration; the next update uses it.
    ///
    /// Invalid configurations are rejected and the current one is kept.
    pub fn set_config(&mut self, config: FocusConfig) -> Result<(), FocusError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    pub fn state(&self) -> &FocusState {
        &self.state
    }

    #[inline]
    pub fn current_focus_distance(&self) -> f32 {
        self.state.current_focus_distance
    }

    #[inline]
    pub fn current_target_point(&self) -> Vec3 {
        self.state.current_target_point
    }

    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    pub fn overlay(&self) -> &D {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut D {
        &mut self.overlay
    }
}
