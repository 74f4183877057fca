#![warn(missing_docs)]
//! Swipe-to-world mapping for cube surface gestures.
//!
//! A swipe arrives in screen space. It is lifted into world space through the
//! camera basis (screen-right maps to `CameraFrame::right`, screen-up maps to
//! `CameraFrame::up`), then flattened onto the plane of the touched surface so
//! only the tangential part, the part that can turn a layer, survives.
//!
//! # Example
//!
//! ```rust
//! use cubepeel_core::{CameraFrame, SwipeVector2D};
//! use cubepeel_gesture::SwipeGestureMapper;
//! use glam::Vec3;
//!
//! let mapper = SwipeGestureMapper::default();
//! let dir = mapper.convert_swipe_to_world_direction(
//!     SwipeVector2D::new(1.0, 0.0),
//!     Vec3::Y,
//!     &CameraFrame::IDENTITY,
//! );
//! assert_eq!(dir.as_unit(), Some(Vec3::X));
//! ```

use cubepeel_core::{CameraFrame, SwipeVector2D};
use glam::Vec3;
use tracing::trace;

/// Projected magnitudes below this are treated as "no direction".
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// World-space swipe direction, or the degenerate sentinel.
///
/// A non-degenerate value is unit length. The degenerate value is the zero
/// vector and must never be normalized or fed to [`is_peeling_swipe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldDirection(Vec3);

impl WorldDirection {
    /// The "no usable gesture direction" sentinel.
    pub const DEGENERATE: Self = Self(Vec3::ZERO);

    /// Whether this is the degenerate sentinel.
    pub fn is_degenerate(self) -> bool {
        self.0 == Vec3::ZERO
    }

    /// The unit direction, or `None` for the sentinel.
    pub fn as_unit(self) -> Option<Vec3> {
        (!self.is_degenerate()).then_some(self.0)
    }

    /// Raw vector, zero for the sentinel.
    pub fn vector(self) -> Vec3 {
        self.0
    }
}

/// A swipe that survived projection, with its intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    /// Unit direction tangent to the surface.
    pub direction: Vec3,
    /// Whether the gesture pulls away from the surface.
    pub peeling: bool,
}

/// Converts screen swipes into surface-relative world directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGestureMapper {
    epsilon: f32,
}

impl Default for SwipeGestureMapper {
    fn default() -> Self {
        Self {
            epsilon: DEGENERATE_EPSILON,
        }
    }
}

impl SwipeGestureMapper {
    /// Create a mapper with the default degenerate epsilon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the degenerate epsilon. Negative values are clamped to zero.
    pub fn with_epsilon(epsilon: f32) -> Self {
        Self {
            epsilon: epsilon.max(0.0),
        }
    }

    /// Current degenerate epsilon.
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Lift a screen swipe into world space without projecting it.
    pub fn raw_world_vector(swipe: SwipeVector2D, frame: &CameraFrame) -> Vec3 {
        swipe.dx * frame.right + swipe.dy * frame.up
    }

    /// Map `swipe` onto the plane orthogonal to `surface_normal`.
    ///
    /// Returns [`WorldDirection::DEGENERATE`] when the projected vector is
    /// shorter than the epsilon, e.g. when the swipe points straight along
    /// the normal or did not move at all.
    pub fn convert_swipe_to_world_direction(
        &self,
        swipe: SwipeVector2D,
        surface_normal: Vec3,
        frame: &CameraFrame,
    ) -> WorldDirection {
        let raw = Self::raw_world_vector(swipe, frame);
        let projected = raw - raw.dot(surface_normal) * surface_normal;

        // Scale by the largest component first so the squared length cannot
        // overflow for very large swipes.
        let scale = projected.abs().max_element();
        if !projected.is_finite() || scale == 0.0 {
            trace!(?swipe, ?surface_normal, "Degenerate swipe projection");
            return WorldDirection::DEGENERATE;
        }
        let scaled = projected / scale;
        let scaled_length = scaled.length();
        let magnitude = scale * scaled_length;

        if magnitude < self.epsilon {
            trace!(?swipe, ?surface_normal, magnitude, "Degenerate swipe projection");
            return WorldDirection::DEGENERATE;
        }

        WorldDirection(scaled / scaled_length)
    }

    /// Project and classify a swipe in one step.
    ///
    /// Peeling is judged on the raw world vector, before projection strips
    /// its normal component. Returns `None` for a degenerate projection.
    pub fn classify(
        &self,
        swipe: SwipeVector2D,
        surface_normal: Vec3,
        frame: &CameraFrame,
    ) -> Option<SwipeGesture> {
        let direction = self
            .convert_swipe_to_world_direction(swipe, surface_normal, frame)
            .as_unit()?;
        let raw = Self::raw_world_vector(swipe, frame);
        Some(SwipeGesture {
            direction,
            peeling: is_peeling_swipe(raw, surface_normal),
        })
    }
}

/// True iff `world_swipe_dir` has a strictly positive component along
/// `surface_normal`. Zero counts as sliding.
pub fn is_peeling_swipe(world_swipe_dir: Vec3, surface_normal: Vec3) -> bool {
    world_swipe_dir.dot(surface_normal) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn horizontal_swipe_on_top_face() {
        let mapper = SwipeGestureMapper::default();
        let dir = mapper.convert_swipe_to_world_direction(
            SwipeVector2D::new(1.0, 0.0),
            Vec3::Y,
            &CameraFrame::IDENTITY,
        );
        assert!(approx(dir.as_unit().unwrap(), Vec3::X));
    }

    #[test]
    fn swipe_parallel_to_normal_is_degenerate() {
        let mapper = SwipeGestureMapper::default();
        let dir = mapper.convert_swipe_to_world_direction(
            SwipeVector2D::new(0.0, 1.0),
            Vec3::Y,
            &CameraFrame::IDENTITY,
        );
        assert!(dir.is_degenerate());
        assert_eq!(dir.as_unit(), None);
        assert_eq!(dir.vector(), Vec3::ZERO);
    }

    #[test]
    fn zero_swipe_is_degenerate() {
        let mapper = SwipeGestureMapper::default();
        let dir = mapper.convert_swipe_to_world_direction(
            SwipeVector2D::ZERO,
            Vec3::Z,
            &CameraFrame::IDENTITY,
        );
        assert!(dir.is_degenerate());
    }

    #[test]
    fn non_finite_swipe_is_degenerate() {
        let mapper = SwipeGestureMapper::default();
        let dir = mapper.convert_swipe_to_world_direction(
            SwipeVector2D::new(f32::NAN, 0.0),
            Vec3::Z,
            &CameraFrame::IDENTITY,
        );
        assert!(dir.is_degenerate());
    }

    #[test]
    fn huge_swipe_is_still_normalized() {
        let mapper = SwipeGestureMapper::default();
        let dir = mapper
            .convert_swipe_to_world_direction(
                SwipeVector2D::new(1e20, 1e20),
                Vec3::Z,
                &CameraFrame::IDENTITY,
            )
            .as_unit()
            .unwrap();
        assert!(approx(dir, Vec3::new(1.0, 1.0, 0.0).normalize()));

        let dir = mapper.convert_swipe_to_world_direction(
            SwipeVector2D::new(3e38, 0.0),
            Vec3::Y,
            &CameraFrame::IDENTITY,
        );
        assert!(approx(dir.as_unit().unwrap(), Vec3::X));
    }

    #[test]
    fn diagonal_swipe_keeps_tangent_part() {
        // Front face (+Z) seen head on: the whole swipe is tangent.
        let mapper = SwipeGestureMapper::default();
        let dir = mapper
            .convert_swipe_to_world_direction(
                SwipeVector2D::new(3.0, 4.0),
                Vec3::Z,
                &CameraFrame::IDENTITY,
            )
            .as_unit()
            .unwrap();
        assert!(approx(dir, Vec3::new(0.6, 0.8, 0.0)));
    }

    #[test]
    fn small_swipes_are_still_normalized() {
        let mapper = SwipeGestureMapper::default();
        let dir = mapper
            .convert_swipe_to_world_direction(
                SwipeVector2D::new(0.001, 0.0),
                Vec3::Y,
                &CameraFrame::IDENTITY,
            )
            .as_unit()
            .unwrap();
        assert!((dir.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn custom_epsilon_widens_degenerate_band() {
        let mapper = SwipeGestureMapper::with_epsilon(0.5);
        let dir = mapper.convert_swipe_to_world_direction(
            SwipeVector2D::new(0.1, 0.0),
            Vec3::Y,
            &CameraFrame::IDENTITY,
        );
        assert!(dir.is_degenerate());
        assert_eq!(SwipeGestureMapper::with_epsilon(-1.0).epsilon(), 0.0);
    }

    #[test]
    fn peeling_predicate_is_strict() {
        assert!(is_peeling_swipe(Vec3::Y, Vec3::Y));
        assert!(!is_peeling_swipe(Vec3::NEG_Y, Vec3::Y));
        assert!(!is_peeling_swipe(Vec3::X, Vec3::Y));
    }

    #[test]
    fn classify_uses_raw_vector_for_peeling() {
        // Looking straight down at the top face: screen-up points along -Z,
        // screen-right along +X, so no swipe has a normal component.
        let looking_down = CameraFrame::new(Vec3::NEG_Y, Vec3::X, Vec3::Z);
        let mapper = SwipeGestureMapper::default();
        let gesture = mapper
            .classify(SwipeVector2D::new(0.0, 1.0), Vec3::Y, &looking_down)
            .unwrap();
        assert!(approx(gesture.direction, Vec3::Z));
        assert!(!gesture.peeling);

        // Tilted camera: screen-up has a +Y component, so an upward swipe
        // on the top face pulls away from it.
        let up = Vec3::new(0.0, 1.0, 1.0).normalize();
        let forward = Vec3::new(0.0, -1.0, 1.0).normalize();
        let tilted = CameraFrame::new(forward, Vec3::X, up);
        let gesture = mapper
            .classify(SwipeVector2D::new(0.0, 1.0), Vec3::Y, &tilted)
            .unwrap();
        assert!(approx(gesture.direction, Vec3::Z));
        assert!(gesture.peeling);

        let gesture = mapper
            .classify(SwipeVector2D::new(0.0, -1.0), Vec3::Y, &tilted)
            .unwrap();
        assert!(approx(gesture.direction, Vec3::NEG_Z));
        assert!(!gesture.peeling);
    }

    #[test]
    fn classify_rejects_degenerate() {
        let mapper = SwipeGestureMapper::default();
        assert!(mapper
            .classify(SwipeVector2D::new(0.0, 1.0), Vec3::Y, &CameraFrame::IDENTITY)
            .is_none());
    }
}
