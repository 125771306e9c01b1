/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the symmetry module

use crate::crystal::CrystalError;
use crate::lattice::LatticeError;

/// Error types for the symmetry module
#[derive(Debug, thiserror::Error)]
pub enum SymmetryError {
    #[error("Unknown lattice type: {0}")]
    UnknownLatticeType(String),

    #[error("Unsupported centering in space group symbol '{0}'")]
    UnsupportedCentering(String),

    #[error("Lattice is inconsistent with a {lattice_type} cell: {reason}")]
    InconsistentLattice { lattice_type: String, reason: String },

    #[error("Structure has no sites")]
    EmptyStructure,

    #[error("Invalid symmetry settings: {0}")]
    InvalidSettings(String),

    #[error("Lattice error: {0}")]
    Lattice(#[from] LatticeError),

    #[error("Crystal error: {0}")]
    Crystal(#[from] CrystalError),
}

/// Result type for symmetry operations
pub type Result<T> = std::result::Result<T, SymmetryError>;
