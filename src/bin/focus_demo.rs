//! Autofocus Demo
//!
//! Run with: `RUST_LOG=info cargo run --bin focus_demo [config.json]`
//!
//! Headless scripted scene: a camera standing in a ring of pillars and
//! spheres turns a full circle over six seconds while the autofocus pulls
//! focus from object to object. Runs at a fixed 60 fps step and logs the
//! lens focus distance twice per second.
//!
//! Layers:
//! - 0: solid props (focusable)
//! - 3: glass panel (ignored by the default mask)

use std::path::Path;
use std::process::ExitCode;

use glam::Vec3;

use focus_pull_engine::camera::{CameraRig, DepthOfFieldLens, LensBinding};
use focus_pull_engine::focus::{AutofocusController, FocusConfig, MarkerBuffer};
use focus_pull_engine::physics::{Collider, SceneGeometry};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Fixed simulation step (60 fps)
const FRAME_DT: f32 = 1.0 / 60.0;

/// Length of the scripted turn in seconds
const DURATION_SECS: f32 = 6.0;

/// Frames between log lines
const LOG_EVERY: u32 = 30;

/// Camera eye height in meters
const EYE_HEIGHT: f32 = 1.7;

// ============================================================================
// SCENE
// ============================================================================

fn build_scene() -> SceneGeometry {
    let mut scene = SceneGeometry::new();

    // Ground slab, below eye level so a level camera never hits it
    scene.add(Collider::aabb(Vec3::new(-60.0, -1.0, -60.0), Vec3::new(60.0, 0.0, 60.0), 0));

    // Pillars at increasing distance around the camera
    for (i, distance) in [4.0_f32, 9.0, 16.0, 30.0].into_iter().enumerate() {
        let angle = i as f32 * std::f32::consts::FRAC_PI_2;
        let center = Vec3::new(angle.sin() * distance, 2.0, -angle.cos() * distance);
        scene.add(Collider::cuboid(center, Vec3::new(0.5, 2.0, 0.5), 0));
    }

    // A sphere between pillars
    scene.add(Collider::sphere(Vec3::new(6.0, EYE_HEIGHT, -6.0), 1.0, 0));

    // Glass panel in front of the first pillar
    scene.add(Collider::cuboid(Vec3::new(0.0, 2.0, -2.0), Vec3::new(1.0, 2.0, 0.02), 3));

    scene
}

fn load_config() -> Result<FocusConfig, focus_pull_engine::FocusError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading focus config from {}", path);
            FocusConfig::load_json(Path::new(&path))
        }
        None => Ok(FocusConfig::default()),
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() -> ExitCode {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let scene = build_scene();
    let mut rig = CameraRig::with_position(Vec3::new(0.0, EYE_HEIGHT, 0.0));

    // No camera director in this scene, so the physical lens is bound
    let Some(lens) = LensBinding::<DepthOfFieldLens, DepthOfFieldLens>::resolve(None, Some(DepthOfFieldLens::new()))
    else {
        log::error!("camera has no lens");
        return ExitCode::FAILURE;
    };

    let mut autofocus = AutofocusController::new(config)
        .with_sink(lens)
        .with_overlay(MarkerBuffer::new());

    if let Err(e) = autofocus.initialize(&rig) {
        log::error!("autofocus failed to start: {}", e);
        return ExitCode::FAILURE;
    }

    let frames = (DURATION_SECS / FRAME_DT).round() as u32;
    let yaw_per_frame = std::f32::consts::TAU / frames as f32;
    let mut markers = 0usize;

    for frame in 0..frames {
        rig.rotate(yaw_per_frame, 0.0);

        let Some(report) = autofocus.update(FRAME_DT, &rig, &scene) else {
            continue;
        };
        autofocus.draw_debug();
        markers += autofocus.overlay_mut().drain().len();

        if frame % LOG_EVERY == 0 {
            log::info!(
                "t={:5.2}s yaw={:6.1}° target={:6.2}m ({}) focus={:6.2}m",
                frame as f32 * FRAME_DT,
                rig.yaw.to_degrees(),
                report.target_distance,
                if report.hit { "hit" } else { "miss" },
                report.focus_distance,
            );
        }
    }

    if let Some(LensBinding::Physical(lens) | LensBinding::Virtual(lens)) = autofocus.sink() {
        let uniforms = lens.to_uniforms();
        log::info!(
            "Done: {} lens writes, {} debug markers, final focus {:.2}m at f/{:.1}",
            lens.focus_writes(),
            markers,
            uniforms.focus_distance,
            uniforms.aperture_f_stops,
        );
    }

    ExitCode::SUCCESS
}
