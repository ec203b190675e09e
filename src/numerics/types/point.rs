// src/numerics/types/point.rs
// Point3 is an alias for Vector3.

use super::vector::Vector3;

/// Point3 names a position in space, as opposed to a direction.
///
/// Positions are what [`Vector3::project_2d`] expects.
pub type Point3<T = f32> = Vector3<T>;
