//! Vector type and geometric primitives.
//!
//! `Vector3` uses `f32` components.  Game worlds are measured in metres over
//! a few kilometres at most, so single precision keeps every snapshot small
//! without visible drift over a frame's integration step.
//!
//! Orientation follows the XZ-plane convention used throughout the toolkit:
//! an orientation of `0` faces `+z`, and `π/2` faces `+x`.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Scalar type shared by every AI component.
pub type Real = f32;

/// A 3D vector stored as single-precision floats.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// Scalar (dot) product.
    #[inline]
    pub fn dot(self, other: Vector3) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Vector (cross) product, right-handed.
    #[inline]
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn square_magnitude(self) -> Real {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> Real {
        self.square_magnitude().sqrt()
    }

    /// Unit vector in the same direction, or `ZERO` for a zero-length vector.
    ///
    /// Never produces NaN: direction-less inputs yield no direction.
    #[inline]
    pub fn unit(self) -> Vector3 {
        let len = self.magnitude();
        if len > 0.0 { self * (1.0 / len) } else { Vector3::ZERO }
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Vector3::ZERO;
    }

    /// Distance to `other`.
    #[inline]
    pub fn distance(self, other: Vector3) -> Real {
        (other - self).magnitude()
    }

    /// `true` if every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

impl Mul<Real> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Real) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl MulAssign<Real> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Real) {
        *self = *self * rhs;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl std::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

// ── Sphere ────────────────────────────────────────────────────────────────────

/// A spherical obstacle or exclusion zone.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    /// Geometric centre.
    pub position: Vector3,
    pub radius: Real,
}

impl Sphere {
    #[inline]
    pub fn new(position: Vector3, radius: Real) -> Self {
        Self { position, radius }
    }
}
