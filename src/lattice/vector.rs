/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Vector3D type for lattice vectors, Cartesian and fractional coordinates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A 3-vector used both for Cartesian positions and fractional coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector3D {
    /// First component
    pub x: f64,
    /// Second component
    pub y: f64,
    /// Third component
    pub z: f64,
}

impl Vector3D {
    /// Create a new 3D vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Euclidean distance to another vector
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    /// Length (magnitude) of the vector
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Angle to another vector in degrees
    pub fn angle_to(&self, other: &Self) -> f64 {
        let cos = self.dot(other) / (self.length() * other.length());
        cos.clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Point at fraction `t` along the straight line from `self` to `end`
    pub fn lerp(&self, end: &Self, t: f64) -> Self {
        *self + (*end - *self) * t
    }

    /// Components as an array
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise map
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vector3D> for [f64; 3] {
    fn from(v: Vector3D) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, rhs: Vector3D) -> Vector3D {
        rhs * self
    }
}

impl Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_operations() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, 5.0, 6.0);

        assert_relative_eq!(v1.distance(&v2), 5.196152, epsilon = 1e-6);
        assert_relative_eq!(v1.length(), 3.741657, epsilon = 1e-6);
        assert_relative_eq!(v1.dot(&v2), 32.0, epsilon = 1e-6);

        let cross = v1.cross(&v2);
        assert_relative_eq!(cross.x, -3.0, epsilon = 1e-6);
        assert_relative_eq!(cross.y, 6.0, epsilon = 1e-6);
        assert_relative_eq!(cross.z, -3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_angle_and_lerp() {
        let x = Vector3D::new(1.0, 0.0, 0.0);
        let y = Vector3D::new(0.0, 2.0, 0.0);
        assert_relative_eq!(x.angle_to(&y), 90.0, epsilon = 1e-12);

        let mid = x.lerp(&y, 0.5);
        assert_relative_eq!(mid.x, 0.5);
        assert_relative_eq!(mid.y, 1.0);
        assert_eq!(x.lerp(&y, 0.0), x);
        assert_eq!(x.lerp(&y, 1.0), y);
    }

    #[test]
    fn test_serializes_as_array() {
        let v = Vector3D::new(0.5, 0.25, 0.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[0.5,0.25,0.0]");
        let back: Vector3D = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
