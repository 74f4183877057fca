#![warn(missing_docs)]
//! Yaw/pitch camera that produces the orientation frame used by gestures.
//!
//! World axes are Y-up with +Z forward and +X right. At zero yaw and pitch
//! the camera looks down +Z.

use cubepeel_core::CameraFrame;
use glam::Vec3;

/// Pitch is clamped just short of straight up/down so `right` stays defined.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Camera with position and yaw/pitch orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Horizontal rotation in radians (around Y axis).
    pub yaw: f32,
    /// Vertical rotation in radians, positive looks up.
    pub pitch: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -3.0),
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl Camera {
    /// Create a camera at `position` looking down +Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Place a camera `radius` away from `target`, looking at it from the
    /// direction given by `yaw` and `pitch`.
    pub fn orbit(target: Vec3, radius: f32, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        };
        camera.position = target - camera.forward() * radius;
        camera
    }

    /// Aim the camera at `target`. Does nothing if `target` is the camera
    /// position.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(dir) = (target - self.position).try_normalize() else {
            return;
        };
        self.yaw = dir.x.atan2(dir.z).rem_euclid(std::f32::consts::TAU);
        self.pitch = dir.y.asin().clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Get the forward direction vector (where camera is looking).
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Get the right direction vector (camera's local X axis).
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin()).normalize()
    }

    /// Get the up direction vector (camera's local Y axis).
    pub fn up(&self) -> Vec3 {
        self.forward().cross(self.right()).normalize()
    }

    /// Orientation basis for gesture mapping.
    pub fn frame(&self) -> CameraFrame {
        CameraFrame::new(self.forward(), self.right(), self.up())
    }

    /// Rotate the camera (add to yaw and pitch).
    ///
    /// # Arguments
    /// * `delta_yaw` - Horizontal rotation delta in radians
    /// * `delta_pitch` - Vertical rotation delta in radians
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch += delta_pitch;

        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        // Normalize yaw to [0, 2π); rem_euclid rounds tiny negatives up to 2π.
        self.yaw = self.yaw.rem_euclid(std::f32::consts::TAU);
        if self.yaw >= std::f32::consts::TAU {
            self.yaw = 0.0;
        }
    }
}
