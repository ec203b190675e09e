// src/numerics/types/vector.rs
// Vector3 generic implementation with default precision f32.
// Uses the FloatingPoint trait from super::traits.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

use super::error::VectorError;
use super::traits::FloatingPoint;
use crate::numerics::projection::ProjectionConfig;

/// Vector3 is a 3D vector over a floating point scalar.
///
/// It is a plain value: every operation returns a new vector and leaves its
/// inputs untouched. `Vector3` without a parameter is `Vector3<f32>`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// Serialized as an (x, y, z) tuple.
impl<T> Serialize for Vector3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector with the same value on every axis.
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    /// True only for the exact zero vector, which is what [`Vector3::refract`]
    /// returns on total internal reflection.
    pub fn is_zero(&self) -> bool {
        self.x == T::zero() && self.y == T::zero() && self.z == T::zero()
    }

    /// Cross product `self × other`. Anti-commutative.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Return the squared length (avoids sqrt)
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// # Errors
    /// [`VectorError::ZeroLength`] when the magnitude is not positive. That
    /// includes the zero vector and vectors whose magnitude is NaN.
    pub fn normalize(&self) -> Result<Self, VectorError> {
        let length = self.magnitude();
        if length > T::zero() {
            let inv_length = T::one() / length;
            return Ok(*self * inv_length);
        }
        tracing::debug!(vector = %self, "cannot normalize a zero-length vector");
        Err(VectorError::zero_length("normalize"))
    }

    /// Angle between `v1` and `v2` in degrees.
    ///
    /// The cosine is not clamped to `[-1, 1]`, so rounding on nearly
    /// (anti-)parallel inputs can yield NaN.
    ///
    /// # Errors
    /// [`VectorError::ZeroLength`] when the product of the magnitudes is not
    /// positive.
    pub fn angle(v1: &Self, v2: &Self) -> Result<T, VectorError> {
        let dot_product = v1.dot(v2);
        let lengths = v1.magnitude() * v2.magnitude();

        if lengths > T::zero() {
            let cos_angle = dot_product / lengths;
            // Radians to degrees in f64, narrowed once at the end.
            let degrees = cos_angle.acos().widen() * (180.0 / core::f64::consts::PI);
            return Ok(T::from_f64(degrees));
        }
        tracing::debug!(v1 = %v1, v2 = %v2, "cannot measure angle to a zero-length vector");
        Err(VectorError::zero_length("angle"))
    }

    /// Direction of a ray passing through a surface, by Snell's law.
    ///
    /// `eta` is the ratio of refractive indices `n2 / n1`. Returns the zero
    /// vector on total internal reflection. Both inputs are expected to be
    /// unit length.
    pub fn refract(incident: &Self, normal: &Self, eta: T) -> Self {
        let cos_incident = incident.dot(normal);
        // k is evaluated in f64 and narrowed once.
        let k = T::from_f64(1.0 - (eta * eta).widen() * (1.0 - cos_incident.widen().powi(2)));

        if k < T::zero() {
            tracing::trace!(k = %k, "total internal reflection");
            return Self::zero();
        }
        *incident * eta - *normal * (eta * cos_incident + k.sqrt())
    }

    /// Mirror `incident` about a surface with unit `normal`.
    ///
    /// `normal` is used as given.
    pub fn reflect(incident: &Self, normal: &Self) -> Self {
        let two = T::one() + T::one();
        *incident - *normal * (two * incident.dot(normal))
    }

    /// Perspective projection of this point onto a `width` by `height`
    /// viewport with a top-left origin.
    ///
    /// Returns `(screen_x, screen_y, z)`; `z` is carried through unchanged.
    /// A point at `z == -viewer_distance` projects to infinities or NaN.
    pub fn project_2d(&self, width: u32, height: u32, fov: T, viewer_distance: T) -> Self {
        self.project_with(&ProjectionConfig::new(width, height, fov, viewer_distance))
    }

    /// [`Vector3::project_2d`] with the parameters taken from `config`.
    pub fn project_with(&self, config: &ProjectionConfig<T>) -> Self {
        let depth = config.viewer_distance + self.z;
        if depth == T::zero() {
            tracing::trace!(point = %self, "projecting a point on the camera plane");
        }
        let factor = config.fov / depth;
        let (center_x, center_y) = config.center();
        Self::new(
            self.x * factor + center_x,
            -self.y * factor + center_y,
            self.z,
        )
    }
}

impl<T: FloatingPoint> Default for Vector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FloatingPoint> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

// No zero check: dividing by zero yields infinities or NaN per component.
impl<T: FloatingPoint> Div<T> for Vector3<T> {
    type Output = Self;

    fn div(self, factor: T) -> Self {
        Self::new(self.x / factor, self.y / factor, self.z / factor)
    }
}

// Scalar on the left, `k * v`.
macro_rules! impl_scalar_mul {
    ($($scalar:ty),*) => {
        $(
            impl Mul<Vector3<$scalar>> for $scalar {
                type Output = Vector3<$scalar>;

                fn mul(self, vector: Vector3<$scalar>) -> Vector3<$scalar> {
                    vector * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

impl<T: FloatingPoint> From<T> for Vector3<T> {
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

// Conversions between Vector3<T> and tuples

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self { x, y, z }
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

// Conversions between Vector3<T> and arrays [T; 3]

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

// Reference forms

impl<T: FloatingPoint> From<&(T, T, T)> for Vector3<T> {
    fn from(tuple: &(T, T, T)) -> Self {
        Self::from(*tuple)
    }
}

impl<T: FloatingPoint> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self::from(*array)
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for (T, T, T) {
    fn from(v: &Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for [T; 3] {
    fn from(v: &Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}
