#![warn(missing_docs)]
//! Core value types shared across the workspace.
//!
//! Everything here is plain data: the camera orientation basis, screen-space
//! swipes, raycast hit records and the ordered registry of cube face layers.

pub mod face;
pub mod frame;
mod loader;
pub mod registry;

use glam::Vec2;
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use face::{CanonicalFace, FaceHandle, FaceLayer, HitError, HitRecord};
pub use frame::{CameraFrame, FrameError, UNIT_TOLERANCE};
pub use loader::{registry_from_file, registry_from_str, FaceLayerDefinition, RegistryError};
pub use registry::FaceLayerRegistry;

/// Swipe delta in normalized screen-space units.
///
/// `dx` grows to the right of the screen and `dy` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SwipeVector2D {
    /// Horizontal component.
    pub dx: f32,
    /// Vertical component.
    pub dy: f32,
}

impl SwipeVector2D {
    /// A swipe that did not move.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Create a swipe from its components.
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Whether both components are exactly zero.
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl From<Vec2> for SwipeVector2D {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<[f32; 2]> for SwipeVector2D {
    fn from([dx, dy]: [f32; 2]) -> Self {
        Self::new(dx, dy)
    }
}
