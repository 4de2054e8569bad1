//! Three-component vectors in Euclidean space.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A point or direction in 3-D space.
///
/// Every operation is available both as a named method and, where Rust has
/// one, as an operator: `a.add(b) == a + b`, `v.scale(s) == v * s`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Named form of `self + other`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        self + other
    }

    /// Named form of `self - other`.
    pub fn subtract(self, other: Self) -> Self {
        self - other
    }

    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// A vector of exactly zero length normalizes to the zero vector instead
    /// of dividing by zero. Any other length, however small, is divided out.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Self::zero();
        }
        self.scale(1.0 / mag)
    }

    pub fn distance(self, other: Self) -> f64 {
        self.subtract(other).magnitude()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<Vector3<f64>> for Vec3 {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3<f64> {
    fn from(v: Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::Vec3;
    use nalgebra::Vector3;

    #[test]
    fn default_is_origin() {
        assert_eq!(Vec3::default(), Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn componentwise_add_and_subtract() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 0.5);
        assert_eq!(a.add(b), Vec3::new(5.0, -3.0, 3.5));
        assert_eq!(a + b, a.add(b));
        assert_eq!(a.subtract(b), Vec3::new(-3.0, 7.0, 2.5));
        assert_eq!(a - b, a.subtract(b));
    }

    #[test]
    fn scale_from_either_side() {
        let v = Vec3::new(1.0, -2.0, 0.25);
        assert_eq!(v.scale(4.0), Vec3::new(4.0, -8.0, 1.0));
        assert_eq!(v * 4.0, v.scale(4.0));
        assert_eq!(4.0 * v, v.scale(4.0));
    }

    #[test]
    fn cross_of_basis_vectors_is_right_handed() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(y.cross(x), -z);
    }

    #[test]
    fn magnitude_and_distance() {
        let v = Vec3::new(3.0, 4.0, 12.0);
        assert_eq!(v.magnitude(), 13.0);
        assert_eq!(v.distance(Vec3::zero()), 13.0);
        assert_eq!(v.distance(v), 0.0);
    }

    #[test]
    fn normalize_zero_vector_returns_zero() {
        let n = Vec3::zero().normalize();
        assert_eq!(n, Vec3::zero());
        assert!(!n.x.is_nan());
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = Vec3::new(0.0, 3.0, 4.0).normalize();
        assert!((n.magnitude() - 1.0).abs() < 1e-15);
        assert!((n.y - 0.6).abs() < 1e-15);
        assert!((n.z - 0.8).abs() < 1e-15);
    }

    #[test]
    fn normalize_tiny_vector_is_not_treated_as_zero() {
        let n = Vec3::new(2f64.powi(-500), 0.0, 0.0).normalize();
        assert_eq!(n, Vec3::new(1.0, 0.0, 0.0));

        // Squared length underflows, so the magnitude is exactly zero.
        assert_eq!(Vec3::new(1e-200, 0.0, 0.0).normalize(), Vec3::zero());
    }

    #[test]
    fn matches_nalgebra_products() {
        let a = Vec3::new(1.5, -2.0, 0.75);
        let b = Vec3::new(-0.5, 4.0, 3.0);
        let na: Vector3<f64> = a.into();
        let nb: Vector3<f64> = b.into();

        assert!((a.dot(b) - na.dot(&nb)).abs() < 1e-12);
        let cross = Vec3::from(na.cross(&nb));
        assert!(a.cross(b).distance(cross) < 1e-12);
        assert!((a.magnitude() - na.norm()).abs() < 1e-12);
    }

    #[test]
    fn array_conversions() {
        let v = Vec3::from([1.0, 2.0, 3.0]);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
        assert_eq!(v.to_string(), "Vec3(1, 2, 3)");
    }
}
