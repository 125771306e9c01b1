/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the crystal module

use crate::lattice::LatticeError;

/// Error types for the crystal module
#[derive(Debug, thiserror::Error)]
pub enum CrystalError {
    #[error("Invalid site: {0}")]
    InvalidSite(String),

    #[error("Lattice error: {0}")]
    Lattice(#[from] LatticeError),
}

/// Result type for crystal operations
pub type Result<T> = std::result::Result<T, CrystalError>;
