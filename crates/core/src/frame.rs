//! Camera orientation basis supplied by the tracking subsystem.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum deviation from unit length accepted by [`CameraFrame::try_new`].
pub const UNIT_TOLERANCE: f32 = 1e-3;

/// Errors raised when validating a [`CameraFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrameError {
    /// An axis contained NaN or infinity.
    #[error("camera {axis} axis is not finite")]
    NonFinite {
        /// Name of the offending axis.
        axis: &'static str,
    },
    /// An axis was not unit length.
    #[error("camera {axis} axis has length {length}, expected 1")]
    NotUnit {
        /// Name of the offending axis.
        axis: &'static str,
        /// Measured length.
        length: f32,
    },
}

/// Viewer orientation: three unit vectors in world space.
///
/// The frame is read-only to the interaction layer; it is refreshed every
/// frame by whatever owns camera tracking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraFrame {
    /// Direction the camera looks along.
    pub forward: Vec3,
    /// Screen-right in world space.
    pub right: Vec3,
    /// Screen-up in world space.
    pub up: Vec3,
}

impl Default for CameraFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CameraFrame {
    /// Camera looking down +Z with +X right and +Y up.
    pub const IDENTITY: Self = Self {
        forward: Vec3::Z,
        right: Vec3::X,
        up: Vec3::Y,
    };

    /// Build a frame from trusted axes without validation.
    pub const fn new(forward: Vec3, right: Vec3, up: Vec3) -> Self {
        Self { forward, right, up }
    }

    /// Build a frame, rejecting axes that are non-finite or not unit length.
    pub fn try_new(forward: Vec3, right: Vec3, up: Vec3) -> Result<Self, FrameError> {
        check_axis("forward", forward)?;
        check_axis("right", right)?;
        check_axis("up", up)?;
        Ok(Self { forward, right, up })
    }
}

pub(crate) fn check_axis(axis: &'static str, v: Vec3) -> Result<(), FrameError> {
    if !v.is_finite() {
        return Err(FrameError::NonFinite { axis });
    }
    let length = v.length();
    if (length - 1.0).abs() > UNIT_TOLERANCE {
        return Err(FrameError::NotUnit { axis, length });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_valid() {
        let f = CameraFrame::IDENTITY;
        assert_eq!(CameraFrame::try_new(f.forward, f.right, f.up), Ok(f));
    }

    #[test]
    fn rejects_scaled_axis() {
        let err = CameraFrame::try_new(Vec3::Z, Vec3::X * 2.0, Vec3::Y).unwrap_err();
        assert!(matches!(err, FrameError::NotUnit { axis: "right", .. }));
    }

    #[test]
    fn rejects_nan_axis() {
        let err = CameraFrame::try_new(Vec3::Z, Vec3::X, Vec3::new(f32::NAN, 1.0, 0.0)).unwrap_err();
        assert_eq!(err, FrameError::NonFinite { axis: "up" });
    }
}
