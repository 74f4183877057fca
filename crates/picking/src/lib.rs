#![warn(missing_docs)]
//! Face resolution for pointer hits on the cube.
//!
//! A hit is resolved first by identity: the struck object is looked up among
//! the registered face layers. When the ray struck something else (a proxy or
//! child object) the surface normal is matched against the six cube axes as a
//! fallback, and the matching canonical face is looked up by name.

use std::sync::Arc;

use cubepeel_core::{CanonicalFace, FaceLayerRegistry, HitRecord};
use glam::Vec3;
use tracing::{debug, trace};

/// Minimum dot product between a hit normal and a cube axis for the
/// normal fallback to select that axis.
pub const NORMAL_MATCH_THRESHOLD: f32 = 0.7;

/// Integer form of an unresolved face, for callers that store indices as
/// signed integers.
pub const NOT_FOUND: i32 = -1;

/// How a hit was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceResolution {
    /// The struck object is a registered face layer.
    Identity {
        /// Face index.
        index: usize,
    },
    /// The hit normal matched a cube axis whose face is registered.
    Normal {
        /// Face index.
        index: usize,
        /// Axis that matched.
        face: CanonicalFace,
    },
    /// Neither path matched.
    NotFound,
}

impl FaceResolution {
    /// Face index, if resolved.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Identity { index } | Self::Normal { index, .. } => Some(index),
            Self::NotFound => None,
        }
    }

    /// Face index as a signed integer, [`NOT_FOUND`] when unresolved.
    ///
    /// Indices above `i32::MAX` saturate to `i32::MAX` rather than
    /// collapsing into [`NOT_FOUND`]; a resolved hit is never reported as
    /// unresolved.
    pub fn to_index_or_not_found(self) -> i32 {
        match self.index() {
            Some(index) => i32::try_from(index).unwrap_or(i32::MAX),
            None => NOT_FOUND,
        }
    }
}

/// Maps raycast hits to stable face indices.
///
/// Holds a shared read-only view of the registry; the registry is never
/// mutated after construction, so a resolver can be shared across threads.
#[derive(Debug, Clone)]
pub struct FaceResolver {
    registry: Arc<FaceLayerRegistry>,
    threshold: f32,
}

impl FaceResolver {
    /// Create a resolver over `registry` with the default threshold.
    pub fn new(registry: Arc<FaceLayerRegistry>) -> Self {
        Self {
            registry,
            threshold: NORMAL_MATCH_THRESHOLD,
        }
    }

    /// Override the normal-match threshold.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Registry this resolver reads from.
    pub fn registry(&self) -> &FaceLayerRegistry {
        &self.registry
    }

    /// Normal-match threshold in use.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Face index struck by `hit`, or `None`.
    pub fn determine_face(&self, hit: &HitRecord) -> Option<usize> {
        self.resolve(hit).index()
    }

    /// Resolve `hit`, reporting which path matched.
    pub fn resolve(&self, hit: &HitRecord) -> FaceResolution {
        if let Some(index) = self.registry.position_of_handle(hit.target) {
            return FaceResolution::Identity { index };
        }

        let Some(face) = canonical_face_for_normal(hit.normal, self.threshold) else {
            trace!(handle = %hit.target, normal = ?hit.normal, "Hit normal matches no cube axis");
            return FaceResolution::NotFound;
        };

        match self.registry.position_of_name(face.name()) {
            Some(index) => {
                debug!(
                    handle = %hit.target,
                    %face,
                    index,
                    "Resolved face from hit normal"
                );
                FaceResolution::Normal { index, face }
            }
            None => {
                trace!(handle = %hit.target, %face, "Matched face is not registered");
                FaceResolution::NotFound
            }
        }
    }
}

/// First canonical face, in [`CanonicalFace::PRIORITY`] order, whose axis has
/// a dot product with `normal` strictly above `threshold`.
///
/// Near cube edges a normal can clear the threshold for two axes; the
/// earlier one in priority order wins.
pub fn canonical_face_for_normal(normal: Vec3, threshold: f32) -> Option<CanonicalFace> {
    CanonicalFace::PRIORITY
        .into_iter()
        .find(|face| normal.dot(face.axis()) > threshold)
}
