#![warn(missing_docs)]
//! Reference interaction controller.
//!
//! Resolves the face a pointer hit, projects the accompanying swipe onto the
//! hit surface and decides whether the gesture peels a layer off or rotates
//! it in place. Holds no mutable state; one controller can serve every
//! pointer on every thread.

use cubepeel_core::{CameraFrame, HitRecord, SwipeVector2D};
use cubepeel_gesture::SwipeGestureMapper;
use cubepeel_picking::FaceResolver;
use glam::Vec3;
use serde::Serialize;
use tracing::debug;

/// Why an interaction produced no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The hit could not be mapped to a registered face.
    UnknownFace,
    /// The swipe had no component along the face.
    DegenerateSwipe,
}

/// What the rotation/animation layer should do with an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InteractionOutcome {
    /// Lift the layer off `face` along `direction`.
    Peel {
        /// Face index in the registry.
        face: usize,
        /// Unit world direction tangent to the face.
        direction: Vec3,
    },
    /// Turn `face` in place along `direction`.
    Rotate {
        /// Face index in the registry.
        face: usize,
        /// Unit world direction tangent to the face.
        direction: Vec3,
    },
    /// Do nothing.
    Ignored {
        /// Why nothing happens.
        reason: IgnoreReason,
    },
}

impl InteractionOutcome {
    /// Face index acted on, if any.
    pub fn face(&self) -> Option<usize> {
        match self {
            Self::Peel { face, .. } | Self::Rotate { face, .. } => Some(*face),
            Self::Ignored { .. } => None,
        }
    }

    /// Whether the outcome is a peel.
    pub fn is_peel(&self) -> bool {
        matches!(self, Self::Peel { .. })
    }
}

/// Composes face resolution and swipe classification.
#[derive(Debug, Clone)]
pub struct InteractionController {
    resolver: FaceResolver,
    mapper: SwipeGestureMapper,
}

impl InteractionController {
    /// Create a controller from its two collaborators.
    pub fn new(resolver: FaceResolver, mapper: SwipeGestureMapper) -> Self {
        Self { resolver, mapper }
    }

    /// Face resolver in use.
    pub fn resolver(&self) -> &FaceResolver {
        &self.resolver
    }

    /// Gesture mapper in use.
    pub fn mapper(&self) -> &SwipeGestureMapper {
        &self.mapper
    }

    /// Turn one swipe over one hit into an outcome.
    pub fn handle(
        &self,
        swipe: SwipeVector2D,
        hit: &HitRecord,
        frame: &CameraFrame,
    ) -> InteractionOutcome {
        let Some(face) = self.resolver.determine_face(hit) else {
            return InteractionOutcome::Ignored {
                reason: IgnoreReason::UnknownFace,
            };
        };

        let Some(gesture) = self.mapper.classify(swipe, hit.normal, frame) else {
            debug!(face, ?swipe, "Ignoring swipe with no tangent component");
            return InteractionOutcome::Ignored {
                reason: IgnoreReason::DegenerateSwipe,
            };
        };

        if gesture.peeling {
            InteractionOutcome::Peel {
                face,
                direction: gesture.direction,
            }
        } else {
            InteractionOutcome::Rotate {
                face,
                direction: gesture.direction,
            }
        }
    }
}
