/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Lattice geometry
//!
//! Basis vectors, lengths and angles, reciprocal lattices and the
//! fractional/Cartesian coordinate conversions the k-path sampler relies on.

mod errors;
mod lattice;
mod vector;

pub use errors::{LatticeError, Result};
pub use lattice::{Lattice, LatticeParameters};
pub use vector::Vector3D;

/// Reciprocal-space view consumed by the k-path sampler.
///
/// Fractional coordinates are k-point coordinates in the reciprocal basis.
pub trait ReciprocalSpace {
    /// Convert fractional reciprocal coordinates to Cartesian coordinates
    fn cartesian_coords(&self, frac: &Vector3D) -> Vector3D;

    /// Lengths of the three reciprocal basis vectors
    fn lengths(&self) -> [f64; 3];

    /// Angles between the reciprocal basis vectors, in degrees
    fn angles(&self) -> [f64; 3];
}

impl ReciprocalSpace for Lattice {
    fn cartesian_coords(&self, frac: &Vector3D) -> Vector3D {
        Lattice::cartesian_coords(self, frac)
    }

    fn lengths(&self) -> [f64; 3] {
        Lattice::lengths(self)
    }

    fn angles(&self) -> [f64; 3] {
        Lattice::angles(self)
    }
}
