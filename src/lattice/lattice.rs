/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Direct and reciprocal lattices
//!
//! A [`Lattice`] holds three basis vectors as rows. The same type is used
//! for the direct lattice of a structure and for its reciprocal lattice,
//! in which case fractional coordinates are k-point coordinates.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use super::errors::{LatticeError, Result};
use super::vector::Vector3D;

/// Lengths and angles of a lattice. Angles are in degrees, `alpha`
/// between b and c, `beta` between a and c, `gamma` between a and b.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl LatticeParameters {
    /// Check that lengths are positive and angles lie strictly inside (0°, 180°)
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LatticeError::InvalidParameter { name, value });
            }
        }
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ] {
            if !value.is_finite() || value <= 0.0 || value >= 180.0 {
                return Err(LatticeError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    pub fn lengths(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    pub fn angles(&self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }
}

impl fmt::Display for LatticeParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a={:.6} b={:.6} c={:.6} alpha={:.4} beta={:.4} gamma={:.4}",
            self.a, self.b, self.c, self.alpha, self.beta, self.gamma
        )
    }
}

/// A lattice defined by three basis vectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    vectors: [Vector3D; 3],
}

impl Lattice {
    /// Create a lattice from three basis vectors
    pub fn new(a: Vector3D, b: Vector3D, c: Vector3D) -> Result<Self> {
        let lattice = Self { vectors: [a, b, c] };
        let volume = lattice.signed_volume();
        let scale = a.length() * b.length() * c.length();
        if !volume.is_finite() || volume.abs() <= 1e-12 * scale || scale == 0.0 {
            return Err(LatticeError::DegenerateLattice(volume));
        }
        Ok(lattice)
    }

    /// Create a lattice from a row-major matrix whose rows are the basis vectors
    pub fn from_matrix(matrix: [[f64; 3]; 3]) -> Result<Self> {
        Self::new(matrix[0].into(), matrix[1].into(), matrix[2].into())
    }

    /// Create a lattice from lengths and angles (degrees).
    ///
    /// The orientation puts c along z and a in the xz plane.
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        LatticeParameters {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
        .validate()?;

        let (cos_alpha, sin_alpha) = cos_sin_deg(alpha);
        let (cos_beta, sin_beta) = cos_sin_deg(beta);
        let (cos_gamma, _) = cos_sin_deg(gamma);

        // cos(gamma*), clamped since rounding can push it just past 1
        let val = ((cos_alpha * cos_beta - cos_gamma) / (sin_alpha * sin_beta)).clamp(-1.0, 1.0);
        let sin_gamma_star = (1.0 - val * val).sqrt();

        let vector_a = Vector3D::new(a * sin_beta, 0.0, a * cos_beta);
        let vector_b = Vector3D::new(
            -b * sin_alpha * val,
            b * sin_alpha * sin_gamma_star,
            b * cos_alpha,
        );
        let vector_c = Vector3D::new(0.0, 0.0, c);

        Self::new(vector_a, vector_b, vector_c)
    }

    /// Simple cubic lattice with edge `a`
    pub fn cubic(a: f64) -> Result<Self> {
        Self::from_parameters(a, a, a, 90.0, 90.0, 90.0)
    }

    /// Hexagonal lattice with in-plane edge `a` and height `c`
    pub fn hexagonal(a: f64, c: f64) -> Result<Self> {
        Self::from_parameters(a, a, c, 90.0, 90.0, 120.0)
    }

    /// The three basis vectors
    pub fn vectors(&self) -> &[Vector3D; 3] {
        &self.vectors
    }

    /// Basis vectors as a row-major matrix
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        [
            self.vectors[0].to_array(),
            self.vectors[1].to_array(),
            self.vectors[2].to_array(),
        ]
    }

    /// Lengths of a, b and c
    pub fn lengths(&self) -> [f64; 3] {
        [
            self.vectors[0].length(),
            self.vectors[1].length(),
            self.vectors[2].length(),
        ]
    }

    /// Angles alpha, beta, gamma in degrees
    pub fn angles(&self) -> [f64; 3] {
        let [a, b, c] = self.vectors;
        [b.angle_to(&c), a.angle_to(&c), a.angle_to(&b)]
    }

    /// Lengths and angles together
    pub fn parameters(&self) -> LatticeParameters {
        let [a, b, c] = self.lengths();
        let [alpha, beta, gamma] = self.angles();
        LatticeParameters {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
    }

    // ( a x b ) . c
    fn signed_volume(&self) -> f64 {
        let [a, b, c] = self.vectors;
        a.cross(&b).dot(&c)
    }

    /// Cell volume
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    // b1 = factor x (b x c) / volume
    // b2 = factor x (c x a) / volume
    // b3 = factor x (a x b) / volume
    fn reciprocal_with_factor(&self, factor: f64) -> Result<Self> {
        let [a, b, c] = self.vectors;
        let scale = factor / self.signed_volume();
        Self::new(b.cross(&c) * scale, c.cross(&a) * scale, a.cross(&b) * scale)
    }

    /// Reciprocal lattice including the 2π factor
    pub fn reciprocal_lattice(&self) -> Result<Self> {
        self.reciprocal_with_factor(2.0 * PI)
    }

    /// Reciprocal lattice without the 2π factor
    pub fn reciprocal_lattice_crystallographic(&self) -> Result<Self> {
        self.reciprocal_with_factor(1.0)
    }

    /// Convert fractional coordinates to Cartesian coordinates
    pub fn cartesian_coords(&self, frac: &Vector3D) -> Vector3D {
        let [a, b, c] = self.vectors;
        a * frac.x + b * frac.y + c * frac.z
    }

    /// Convert Cartesian coordinates to fractional coordinates
    pub fn fractional_coords(&self, cart: &Vector3D) -> Result<Vector3D> {
        // a_i . b*_j = delta_ij
        let dual = self.reciprocal_lattice_crystallographic()?;
        let [d1, d2, d3] = dual.vectors;
        Ok(Vector3D::new(cart.dot(&d1), cart.dot(&d2), cart.dot(&d3)))
    }

    /// New lattice whose row i is `sum_j matrix[i][j] * old_row_j`
    pub fn transformed(&self, matrix: &[[f64; 3]; 3]) -> Result<Self> {
        let [a, b, c] = self.vectors;
        let row = |m: &[f64; 3]| a * m[0] + b * m[1] + c * m[2];
        Self::new(row(&matrix[0]), row(&matrix[1]), row(&matrix[2]))
    }
}

// exact for right angles so orthogonal cells have no spurious components
fn cos_sin_deg(angle: f64) -> (f64, f64) {
    if angle == 90.0 {
        (0.0, 1.0)
    } else {
        let radians = angle.to_radians();
        (radians.cos(), radians.sin())
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lattice")?;
        for v in &self.vectors {
            writeln!(f, "{:20.12} {:20.12} {:20.12}", v.x, v.y, v.z)?;
        }
        Ok(())
    }
}
