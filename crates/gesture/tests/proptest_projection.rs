//! Property tests for swipe projection
//!
//! Every usable direction must be unit length and lie in the surface plane,
//! whatever the camera orientation.

use cubepeel_core::{CameraFrame, SwipeVector2D};
use cubepeel_gesture::{is_peeling_swipe, SwipeGestureMapper};
use glam::{Quat, Vec3};
use proptest::prelude::*;

const TOLERANCE: f32 = 1e-4;

fn frame_from_rotation(yaw: f32, pitch: f32, roll: f32) -> CameraFrame {
    let rot = Quat::from_euler(glam::EulerRot::YXZ, yaw, pitch, roll);
    CameraFrame::new(rot * Vec3::Z, rot * Vec3::X, rot * Vec3::Y)
}

fn unit_normal() -> impl Strategy<Value = Vec3> {
    (-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0)
        .prop_filter("non-zero normal", |(x, y, z)| {
            Vec3::new(*x, *y, *z).length() > 0.1
        })
        .prop_map(|(x, y, z)| Vec3::new(x, y, z).normalize())
}

proptest! {
    /// Property: non-degenerate results are unit length and tangent
    #[test]
    fn projected_direction_is_unit_and_tangent(
        yaw in -3.14f32..3.14,
        pitch in -1.5f32..1.5,
        roll in -3.14f32..3.14,
        dx in -1.0f32..1.0,
        dy in -1.0f32..1.0,
        normal in unit_normal(),
    ) {
        let frame = frame_from_rotation(yaw, pitch, roll);
        let swipe = SwipeVector2D::new(dx, dy);
        let raw = SwipeGestureMapper::raw_world_vector(swipe, &frame);
        // Keep clear of the degenerate band where rounding dominates.
        prop_assume!(raw.cross(normal).length() > 1e-2);

        let dir = SwipeGestureMapper::default()
            .convert_swipe_to_world_direction(swipe, normal, &frame);
        let unit = dir.as_unit();
        prop_assert!(unit.is_some());
        let unit = unit.unwrap();
        prop_assert!((unit.length() - 1.0).abs() < TOLERANCE);
        prop_assert!(unit.dot(normal).abs() < TOLERANCE);
    }

    /// Property: swipes that lift straight along the normal are degenerate
    #[test]
    fn swipe_along_normal_is_degenerate(
        yaw in -3.14f32..3.14,
        pitch in -1.5f32..1.5,
        dx in -1.0f32..1.0,
        dy in -1.0f32..1.0,
    ) {
        let frame = frame_from_rotation(yaw, pitch, 0.0);
        let swipe = SwipeVector2D::new(dx, dy);
        let raw = SwipeGestureMapper::raw_world_vector(swipe, &frame);
        prop_assume!(raw.length() > 1e-2);

        // Normalizing `raw` leaves a few ulps of tangent behind.
        let dir = SwipeGestureMapper::with_epsilon(1e-4)
            .convert_swipe_to_world_direction(swipe, raw.normalize(), &frame);
        prop_assert!(dir.is_degenerate());
    }

    /// Property: peeling flips with the sign of the normal
    #[test]
    fn peeling_is_antisymmetric(dir in unit_normal(), normal in unit_normal()) {
        prop_assume!(dir.dot(normal).abs() > 1e-4);
        prop_assert_ne!(is_peeling_swipe(dir, normal), is_peeling_swipe(dir, -normal));
    }
}
