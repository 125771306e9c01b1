/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the k-path module

use thiserror::Error;

use crate::lattice::LatticeError;
use crate::symmetry::SymmetryError;

/// Errors raised while classifying a lattice, building or sampling a k-path
#[derive(Error, Debug)]
pub enum KpathError {
    /// No row of the classification table matches
    #[error("{lattice_type} with space group '{spacegroup_symbol}' is an unsupported lattice/centering combination")]
    UnsupportedLattice {
        lattice_type: String,
        spacegroup_symbol: String,
    },

    /// A length is not positive or an angle lies outside (0°, 180°)
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Line density must be finite and positive, got {0}")]
    InvalidLineDensity(f64),

    #[error("Line density {line_density} splits a leg of length {distance} into more than {limit} intervals")]
    TooManyDivisions {
        line_density: f64,
        distance: f64,
        limit: usize,
    },

    #[error("Path {path} references unknown k-point '{label}'")]
    UnknownLabel { path: String, label: String },

    #[error("Path {path} has a segment {index} with fewer than two k-points")]
    ShortSegment { path: String, index: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Symmetry error: {0}")]
    Symmetry(#[from] SymmetryError),

    #[error("Lattice error: {0}")]
    Lattice(#[from] LatticeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for k-path operations
pub type Result<T> = std::result::Result<T, KpathError>;
