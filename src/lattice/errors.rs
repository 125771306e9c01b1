/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the lattice module

/// Error types for the lattice module
#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    #[error("Degenerate lattice: volume {0} is zero or not finite")]
    DegenerateLattice(f64),

    #[error("Invalid lattice parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Result type for lattice operations
pub type Result<T> = std::result::Result<T, LatticeError>;
