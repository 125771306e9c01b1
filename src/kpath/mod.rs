/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! High-symmetry k-paths
//!
//! Implements the lattice classification and high-symmetry paths of
//! Setyawan and Curtarolo, Comput. Mater. Sci. 49, 299 (2010).
//!
//! - [`classifier`] maps a standardized cell to one of 23 lattice variants
//! - [`generators`] holds the labelled k-points and segments of each variant
//! - [`sampler`] turns a path into evenly spaced Cartesian k-points
//! - [`HighSymmKpath`] ties these together for a single structure

pub mod classifier;
mod config;
mod errors;
pub mod export;
pub mod generators;
mod high_symm;
mod kpoints;
pub mod sampler;

pub use classifier::{LatticeClassification, LatticeVariant};
pub use config::KpathConfig;
pub use errors::{KpathError, Result};
pub use export::{format_kpath_summary, kpath_from_json, kpath_to_json, kpoints_to_json, write_kpath_json};
pub use high_symm::HighSymmKpath;
pub use kpoints::{KPath, PathSegment, GAMMA, SIGMA, SIGMA_1};
pub use sampler::LabelledKPoint;
