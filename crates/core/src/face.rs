//! Face identities, canonical cube faces and raycast hit records.

use crate::frame::{check_axis, FrameError};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Opaque identity of a face object owned by the cube.
///
/// Only equality matters; the value carries no geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceHandle(pub u64);

impl fmt::Display for FaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One interactive layer of the cube, as registered by cube construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceLayer {
    /// Back-reference to the face object, used for lookup only.
    pub handle: FaceHandle,
    /// Human-readable name (e.g., "TopFace").
    pub name: String,
}

impl FaceLayer {
    /// Create a face layer entry.
    pub fn new(handle: FaceHandle, name: impl Into<String>) -> Self {
        Self {
            handle,
            name: name.into(),
        }
    }
}

/// Errors raised when validating a [`HitRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HitError {
    /// The normal contained NaN or infinity.
    #[error("hit normal is not finite")]
    NonFinite,
    /// The normal was not unit length.
    #[error("hit normal has length {length}, expected 1")]
    NotUnit {
        /// Measured length.
        length: f32,
    },
}

/// Result of a pointer ray striking scene geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRecord {
    /// Identity of the struck object.
    pub target: FaceHandle,
    /// Unit surface normal at the hit point.
    pub normal: Vec3,
}

impl HitRecord {
    /// Create a hit record from a trusted normal without validation.
    pub fn new(target: FaceHandle, normal: Vec3) -> Self {
        Self { target, normal }
    }

    /// Create a hit record, rejecting a normal that is non-finite or not
    /// unit length within [`UNIT_TOLERANCE`](crate::UNIT_TOLERANCE).
    pub fn try_new(target: FaceHandle, normal: Vec3) -> Result<Self, HitError> {
        check_axis("normal", normal).map_err(|err| match err {
            FrameError::NonFinite { .. } => HitError::NonFinite,
            FrameError::NotUnit { length, .. } => HitError::NotUnit { length },
        })?;
        Ok(Self { target, normal })
    }
}

/// The six faces of an axis-aligned cube.
///
/// World axes follow a left-handed, Y-up convention: +Y is up, +Z is
/// forward and +X is right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalFace {
    /// +Y
    Top,
    /// -Y
    Bottom,
    /// +Z
    Front,
    /// -Z
    Back,
    /// +X
    Right,
    /// -X
    Left,
}

impl CanonicalFace {
    /// Order in which axes are tested when matching a surface normal.
    pub const PRIORITY: [Self; 6] = [
        Self::Top,
        Self::Bottom,
        Self::Front,
        Self::Back,
        Self::Right,
        Self::Left,
    ];

    /// Outward unit axis of this face.
    pub fn axis(self) -> Vec3 {
        match self {
            Self::Top => Vec3::Y,
            Self::Bottom => Vec3::NEG_Y,
            Self::Front => Vec3::Z,
            Self::Back => Vec3::NEG_Z,
            Self::Right => Vec3::X,
            Self::Left => Vec3::NEG_X,
        }
    }

    /// Registry name used for this face.
    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "TopFace",
            Self::Bottom => "BottomFace",
            Self::Front => "FrontFace",
            Self::Back => "BackFace",
            Self::Right => "RightFace",
            Self::Left => "LeftFace",
        }
    }

    /// Parse a registry name back into a canonical face.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::PRIORITY.into_iter().find(|face| face.name() == name)
    }
}

impl fmt::Display for CanonicalFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
