/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Symmetry finder interface
//!
//! Symmetry detection and cell standardization are performed by a
//! collaborator behind the [`SymmetryFinder`] trait. The k-path core only
//! consumes the [`SymmetryReport`] it produces: the lattice system, the
//! space group symbol and the standardized primitive and conventional
//! cells.
//!
//! [`StandardCellFinder`] is a finder for cells that are already in the
//! standard setting. It checks the declared lattice system against the
//! cell shape and derives the primitive cell from the centering.

mod errors;
mod standard;
mod types;

use serde::{Deserialize, Serialize};

use crate::crystal::Structure;
use crate::utils::constants::{DEFAULT_ANGLE_TOLERANCE, DEFAULT_SYMPREC};

pub use errors::{Result, SymmetryError};
pub use standard::StandardCellFinder;
pub use types::{Centering, LatticeType};

/// Tolerances forwarded to the symmetry finder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetrySettings {
    /// Length tolerance
    pub symprec: f64,
    /// Angle tolerance in degrees
    pub angle_tolerance: f64,
}

impl Default for SymmetrySettings {
    fn default() -> Self {
        Self {
            symprec: DEFAULT_SYMPREC,
            angle_tolerance: DEFAULT_ANGLE_TOLERANCE,
        }
    }
}

impl SymmetrySettings {
    pub fn validate(&self) -> Result<()> {
        if !self.symprec.is_finite() || self.symprec <= 0.0 {
            return Err(SymmetryError::InvalidSettings(format!(
                "symprec must be positive, got {}",
                self.symprec
            )));
        }
        if !self.angle_tolerance.is_finite() || self.angle_tolerance < 0.0 {
            return Err(SymmetryError::InvalidSettings(format!(
                "angle_tolerance must be non-negative, got {}",
                self.angle_tolerance
            )));
        }
        Ok(())
    }
}

/// What a symmetry finder reports about a structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetryReport {
    /// Lattice system
    pub lattice_type: LatticeType,
    /// Hermann-Mauguin space group symbol, e.g. "Fm-3m"
    pub spacegroup_symbol: String,
    /// Standardized primitive cell
    pub primitive: Structure,
    /// Standardized conventional cell
    pub conventional: Structure,
}

impl SymmetryReport {
    /// Centering parsed from the space group symbol
    pub fn centering(&self) -> Option<Centering> {
        Centering::from_spacegroup_symbol(&self.spacegroup_symbol)
    }
}

/// A symmetry detection and standardization backend
pub trait SymmetryFinder {
    /// Analyze a structure and return its standardized cells
    fn analyze(&self, structure: &Structure, settings: &SymmetrySettings) -> Result<SymmetryReport>;
}
