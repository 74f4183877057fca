//! Ready-made cubes, cameras and controllers for tests.

use std::sync::Arc;

use cubepeel_core::{CameraFrame, FaceLayerRegistry};
use cubepeel_gesture::SwipeGestureMapper;
use cubepeel_interaction::InteractionController;
use cubepeel_picking::FaceResolver;
use glam::Vec3;

/// Controller over [`FaceLayerRegistry::standard_cube`] with default settings.
pub fn standard_controller() -> InteractionController {
    InteractionController::new(
        FaceResolver::new(Arc::new(FaceLayerRegistry::standard_cube())),
        SwipeGestureMapper::default(),
    )
}

/// Camera looking down +Z, pitched down by `pitch` radians.
///
/// Screen-up then tilts toward +Y, so upward swipes on the top face peel.
pub fn tilted_frame(pitch: f32) -> CameraFrame {
    let forward = Vec3::new(0.0, -pitch.sin(), pitch.cos());
    let up = Vec3::new(0.0, pitch.cos(), pitch.sin());
    CameraFrame::new(forward, Vec3::X, up)
}
