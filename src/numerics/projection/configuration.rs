// src/numerics/projection/configuration.rs
// Viewport settings for perspective projection.

use serde::{Deserialize, Serialize};

use crate::numerics::types::traits::FloatingPoint;

/// Viewport and camera parameters for the perspective projection in
/// [`Vector3::project_with`](crate::Vector3::project_with).
///
/// Points are mapped so that the viewport origin is the top-left corner and
/// the camera looks down +z from `viewer_distance` units in front of the
/// origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig<T: FloatingPoint = f32> {
    /// Viewport width in pixels.
    pub width: u32,

    /// Viewport height in pixels.
    pub height: u32,

    /// Projection scale. Larger values zoom in.
    pub fov: T,

    /// Distance from the camera to the z = 0 plane.
    /// A point with `z == -viewer_distance` sits on the camera and projects
    /// to infinity.
    pub viewer_distance: T,
}

impl<T: FloatingPoint> Default for ProjectionConfig<T> {
    /// A 640x480 viewport with `fov = 256` and `viewer_distance = 4`.
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov: T::from_f64(256.0),
            viewer_distance: T::from_f64(4.0),
        }
    }
}

impl<T: FloatingPoint> ProjectionConfig<T> {
    /// Creates a configuration from all four projection parameters.
    pub fn new(width: u32, height: u32, fov: T, viewer_distance: T) -> Self {
        Self {
            width,
            height,
            fov,
            viewer_distance,
        }
    }

    /// Creates a configuration for the given viewport with the default optics.
    pub fn with_viewport(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Replaces the projection scale.
    pub fn fov(mut self, fov: T) -> Self {
        self.fov = fov;
        self
    }

    /// Replaces the camera distance.
    pub fn viewer_distance(mut self, viewer_distance: T) -> Self {
        self.viewer_distance = viewer_distance;
        self
    }

    /// Screen-space position of the projected origin, `(width / 2, height / 2)`.
    ///
    /// Halving happens in `f64` so odd sizes keep their half pixel.
    pub fn center(&self) -> (T, T) {
        (
            T::from_f64(f64::from(self.width) / 2.0),
            T::from_f64(f64::from(self.height) / 2.0),
        )
    }
}
