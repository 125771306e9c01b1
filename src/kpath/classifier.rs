/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Lattice classification and path selection
//!
//! [`LatticeClassification`] collects what the selection needs from the
//! symmetry finder: the lattice system, the space group symbol, the
//! conventional and primitive cell parameters and the angles of the
//! primitive reciprocal lattice. [`LatticeClassification::classify`] maps it
//! to exactly one [`LatticeVariant`], which carries the lengths and angles
//! its path formulas need and builds the [`KPath`].
//!
//! Equality branches (ORCF3, MCLC2, MCLC4 and triclinic cells with a right
//! reciprocal angle) are decided with [`tolerant_cmp`], so two quantities
//! that agree up to rounding take the equality branch.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::errors::{KpathError, Result};
use super::generators;
use super::kpoints::KPath;
use crate::lattice::{Lattice, LatticeParameters};
use crate::symmetry::{Centering, LatticeType, SymmetryReport};
use crate::utils::constants::RIGHT_ANGLE;
use crate::utils::tolerant_cmp;

/// One of the Setyawan-Curtarolo lattice variants, with the parameters
/// its path depends on. Lengths are conventional, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LatticeVariant {
    Cub,
    Fcc,
    Bcc,
    Tet,
    Bct1 { a: f64, c: f64 },
    Bct2 { a: f64, c: f64 },
    Orc,
    Orcf1 { a: f64, b: f64, c: f64 },
    Orcf2 { a: f64, b: f64, c: f64 },
    Orcf3 { a: f64, b: f64, c: f64 },
    Orci { a: f64, b: f64, c: f64 },
    Orcc { a: f64, b: f64 },
    Hex,
    Rhl1 { alpha: f64 },
    Rhl2 { alpha: f64 },
    Mcl { b: f64, c: f64, alpha: f64 },
    Mclc1 { a: f64, b: f64, c: f64, alpha: f64 },
    Mclc2 { a: f64, b: f64, c: f64, alpha: f64 },
    Mclc3 { a: f64, b: f64, c: f64, alpha: f64 },
    Mclc4 { a: f64, b: f64, c: f64, alpha: f64 },
    Mclc5 { a: f64, b: f64, c: f64, alpha: f64 },
    Tri1a,
    Tri1b,
}

impl LatticeVariant {
    /// Short name, e.g. "BCT1" for body-centred tetragonal in the first setting
    pub fn name(&self) -> &'static str {
        match self {
            LatticeVariant::Cub => "CUB",
            LatticeVariant::Fcc => "FCC",
            LatticeVariant::Bcc => "BCC",
            LatticeVariant::Tet => "TET",
            LatticeVariant::Bct1 { .. } => "BCT1",
            LatticeVariant::Bct2 { .. } => "BCT2",
            LatticeVariant::Orc => "ORC",
            LatticeVariant::Orcf1 { .. } => "ORCF1",
            LatticeVariant::Orcf2 { .. } => "ORCF2",
            LatticeVariant::Orcf3 { .. } => "ORCF3",
            LatticeVariant::Orci { .. } => "ORCI",
            LatticeVariant::Orcc { .. } => "ORCC",
            LatticeVariant::Hex => "HEX",
            LatticeVariant::Rhl1 { .. } => "RHL1",
            LatticeVariant::Rhl2 { .. } => "RHL2",
            LatticeVariant::Mcl { .. } => "MCL",
            LatticeVariant::Mclc1 { .. } => "MCLC1",
            LatticeVariant::Mclc2 { .. } => "MCLC2",
            LatticeVariant::Mclc3 { .. } => "MCLC3",
            LatticeVariant::Mclc4 { .. } => "MCLC4",
            LatticeVariant::Mclc5 { .. } => "MCLC5",
            LatticeVariant::Tri1a => "TRI1a",
            LatticeVariant::Tri1b => "TRI1b",
        }
    }

    /// Build the labelled k-points and path segments of this variant
    pub fn build_path(&self) -> KPath {
        match *self {
            LatticeVariant::Cub => generators::cub(),
            LatticeVariant::Fcc => generators::fcc(),
            LatticeVariant::Bcc => generators::bcc(),
            LatticeVariant::Tet => generators::tet(),
            LatticeVariant::Bct1 { a, c } => generators::bct1(c, a),
            LatticeVariant::Bct2 { a, c } => generators::bct2(c, a),
            LatticeVariant::Orc => generators::orc(),
            LatticeVariant::Orcf1 { a, b, c } => generators::orcf1(a, b, c),
            LatticeVariant::Orcf2 { a, b, c } => generators::orcf2(a, b, c),
            LatticeVariant::Orcf3 { a, b, c } => generators::orcf3(a, b, c),
            LatticeVariant::Orci { a, b, c } => generators::orci(a, b, c),
            LatticeVariant::Orcc { a, b } => generators::orcc(a, b),
            LatticeVariant::Hex => generators::hex(),
            LatticeVariant::Rhl1 { alpha } => generators::rhl1(alpha),
            LatticeVariant::Rhl2 { alpha } => generators::rhl2(alpha),
            LatticeVariant::Mcl { b, c, alpha } => generators::mcl(b, c, alpha),
            LatticeVariant::Mclc1 { a, b, c, alpha } => generators::mclc1(a, b, c, alpha),
            LatticeVariant::Mclc2 { a, b, c, alpha } => generators::mclc2(a, b, c, alpha),
            LatticeVariant::Mclc3 { a, b, c, alpha } => generators::mclc3(a, b, c, alpha),
            LatticeVariant::Mclc4 { a, b, c, alpha } => generators::mclc4(a, b, c, alpha),
            LatticeVariant::Mclc5 { a, b, c, alpha } => generators::mclc5(a, b, c, alpha),
            LatticeVariant::Tri1a => generators::tri1a(),
            LatticeVariant::Tri1b => generators::tri1b(),
        }
    }
}

impl fmt::Display for LatticeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs of the lattice classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeClassification {
    pub lattice_type: LatticeType,
    pub spacegroup_symbol: String,
    /// Conventional cell, angles in degrees
    pub conventional: LatticeParameters,
    /// Primitive cell, angles in degrees
    pub primitive: LatticeParameters,
    /// kalpha, kbeta, kgamma of the primitive reciprocal lattice, in degrees
    pub reciprocal_angles: [f64; 3],
}

impl LatticeClassification {
    /// Derive the classification inputs from conventional and primitive lattices
    pub fn from_lattices(
        lattice_type: LatticeType,
        spacegroup_symbol: &str,
        conventional: &Lattice,
        primitive: &Lattice,
    ) -> Result<Self> {
        let reciprocal = primitive.reciprocal_lattice()?;
        Ok(Self {
            lattice_type,
            spacegroup_symbol: spacegroup_symbol.to_string(),
            conventional: conventional.parameters(),
            primitive: primitive.parameters(),
            reciprocal_angles: reciprocal.angles(),
        })
    }

    /// Derive the classification inputs from a symmetry finder's report
    pub fn from_report(report: &SymmetryReport) -> Result<Self> {
        Self::from_lattices(
            report.lattice_type,
            &report.spacegroup_symbol,
            report.conventional.lattice(),
            report.primitive.lattice(),
        )
    }

    /// Centering letter of the space group symbol
    pub fn centering(&self) -> Option<Centering> {
        Centering::from_spacegroup_symbol(&self.spacegroup_symbol)
    }

    fn unsupported(&self) -> KpathError {
        KpathError::UnsupportedLattice {
            lattice_type: self.lattice_type.to_string(),
            spacegroup_symbol: self.spacegroup_symbol.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        self.conventional
            .validate()
            .map_err(|e| KpathError::DegenerateInput(format!("conventional cell: {}", e)))?;
        self.primitive
            .validate()
            .map_err(|e| KpathError::DegenerateInput(format!("primitive cell: {}", e)))?;
        for (name, angle) in ["kalpha", "kbeta", "kgamma"].iter().zip(self.reciprocal_angles) {
            if !angle.is_finite() || angle <= 0.0 || angle >= 180.0 {
                return Err(KpathError::DegenerateInput(format!(
                    "reciprocal angle {} = {}",
                    name, angle
                )));
            }
        }
        Ok(())
    }

    /// Select the lattice variant
    pub fn classify(&self) -> Result<LatticeVariant> {
        self.validate()?;

        let LatticeParameters { a, b, c, alpha, .. } = self.conventional;
        let centering = self.centering();
        debug!(
            "classifying {} {} (centering {:?}): conventional {}, primitive alpha {:.6}, reciprocal angles {:?}",
            self.lattice_type, self.spacegroup_symbol, centering, self.conventional, self.primitive.alpha,
            self.reciprocal_angles
        );

        let variant = match (self.lattice_type, centering) {
            (LatticeType::Cubic, Some(Centering::Primitive)) => LatticeVariant::Cub,
            (LatticeType::Cubic, Some(Centering::FaceCentered)) => LatticeVariant::Fcc,
            (LatticeType::Cubic, Some(Centering::BodyCentered)) => LatticeVariant::Bcc,

            (LatticeType::Tetragonal, Some(Centering::Primitive)) => LatticeVariant::Tet,
            (LatticeType::Tetragonal, Some(Centering::BodyCentered)) => {
                if tolerant_cmp(c, a) == Ordering::Less {
                    LatticeVariant::Bct1 { a, c }
                } else {
                    LatticeVariant::Bct2 { a, c }
                }
            }

            (LatticeType::Orthorhombic, Some(Centering::Primitive)) => LatticeVariant::Orc,
            (LatticeType::Orthorhombic, Some(Centering::FaceCentered)) => {
                let lhs = 1.0 / a.powi(2);
                let rhs = 1.0 / b.powi(2) + 1.0 / c.powi(2);
                debug!("ORCF: 1/a^2 = {:.12}, 1/b^2 + 1/c^2 = {:.12}", lhs, rhs);
                match tolerant_cmp(lhs, rhs) {
                    Ordering::Greater => LatticeVariant::Orcf1 { a, b, c },
                    Ordering::Less => LatticeVariant::Orcf2 { a, b, c },
                    Ordering::Equal => {
                        warn!("1/a^2 equals 1/b^2 + 1/c^2 within tolerance, selecting ORCF3");
                        LatticeVariant::Orcf3 { a, b, c }
                    }
                }
            }
            (LatticeType::Orthorhombic, Some(Centering::BodyCentered)) => LatticeVariant::Orci { a, b, c },
            (LatticeType::Orthorhombic, Some(Centering::BaseCenteredC)) => LatticeVariant::Orcc { a, b },

            (LatticeType::Hexagonal, _) => LatticeVariant::Hex,

            (LatticeType::Rhombohedral, _) => {
                let alpha_prim = self.primitive.alpha;
                if tolerant_cmp(alpha_prim, RIGHT_ANGLE) == Ordering::Less {
                    LatticeVariant::Rhl1 {
                        alpha: alpha_prim.to_radians(),
                    }
                } else {
                    LatticeVariant::Rhl2 {
                        alpha: alpha_prim.to_radians(),
                    }
                }
            }

            (LatticeType::Monoclinic, Some(Centering::Primitive)) => LatticeVariant::Mcl {
                b,
                c,
                alpha: alpha.to_radians(),
            },
            (LatticeType::Monoclinic, Some(Centering::BaseCenteredC)) => self.classify_base_centered_monoclinic(),

            (LatticeType::Triclinic, _) => self.classify_triclinic()?,

            _ => return Err(self.unsupported()),
        };

        debug!("selected lattice variant {}", variant);
        Ok(variant)
    }

    fn classify_base_centered_monoclinic(&self) -> LatticeVariant {
        let LatticeParameters { a, b, c, alpha, .. } = self.conventional;
        let alpha = alpha.to_radians();
        let kgamma = self.reciprocal_angles[2];

        match tolerant_cmp(kgamma, RIGHT_ANGLE) {
            Ordering::Greater => LatticeVariant::Mclc1 { a, b, c, alpha },
            Ordering::Equal => {
                warn!("reciprocal gamma is 90 degrees within tolerance, selecting MCLC2");
                LatticeVariant::Mclc2 { a, b, c, alpha }
            }
            Ordering::Less => {
                let ratio = b * alpha.cos() / c + b.powi(2) * alpha.sin().powi(2) / a.powi(2);
                debug!("MCLC: kgamma = {:.8}, ratio = {:.12}", kgamma, ratio);
                match tolerant_cmp(ratio, 1.0) {
                    Ordering::Less => LatticeVariant::Mclc3 { a, b, c, alpha },
                    Ordering::Equal => {
                        warn!("MCLC ratio equals 1 within tolerance, selecting MCLC4");
                        LatticeVariant::Mclc4 { a, b, c, alpha }
                    }
                    Ordering::Greater => LatticeVariant::Mclc5 { a, b, c, alpha },
                }
            }
        }
    }

    fn classify_triclinic(&self) -> Result<LatticeVariant> {
        let orderings = self.reciprocal_angles.map(|angle| tolerant_cmp(angle, RIGHT_ANGLE));
        let count = |ordering: Ordering| orderings.iter().filter(|o| **o == ordering).count();

        match (count(Ordering::Greater), count(Ordering::Less), count(Ordering::Equal)) {
            (3, 0, 0) => Ok(LatticeVariant::Tri1a),
            (0, 3, 0) => Ok(LatticeVariant::Tri1b),
            (2, 0, 1) => {
                warn!("one reciprocal angle is 90 degrees, using the TRI1a path");
                Ok(LatticeVariant::Tri1a)
            }
            (0, 2, 1) => {
                warn!("one reciprocal angle is 90 degrees, using the TRI1b path");
                Ok(LatticeVariant::Tri1b)
            }
            _ => Err(self.unsupported()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> LatticeParameters {
        LatticeParameters {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
    }

    fn right(a: f64, b: f64, c: f64) -> LatticeParameters {
        params(a, b, c, 90.0, 90.0, 90.0)
    }

    fn classification(lattice_type: LatticeType, symbol: &str, conventional: LatticeParameters) -> LatticeClassification {
        LatticeClassification {
            lattice_type,
            spacegroup_symbol: symbol.to_string(),
            conventional,
            primitive: conventional,
            reciprocal_angles: [90.0, 90.0, 90.0],
        }
    }

    #[test]
    fn test_cubic_centerings() {
        let cell = right(1.0, 1.0, 1.0);
        for (symbol, name) in [("Pm-3m", "CUB"), ("Fm-3m", "FCC"), ("Im-3m", "BCC")] {
            let variant = classification(LatticeType::Cubic, symbol, cell).classify().unwrap();
            assert_eq!(variant.name(), name);
        }
    }

    #[test]
    fn test_bct_split() {
        let bct1 = classification(LatticeType::Tetragonal, "I4/mmm", right(3.0, 3.0, 2.0));
        assert_eq!(bct1.classify().unwrap(), LatticeVariant::Bct1 { a: 3.0, c: 2.0 });
        let bct2 = classification(LatticeType::Tetragonal, "I4/mmm", right(2.0, 2.0, 3.0));
        assert_eq!(bct2.classify().unwrap(), LatticeVariant::Bct2 { a: 2.0, c: 3.0 });
        let equal = classification(LatticeType::Tetragonal, "I4/mmm", right(2.0, 2.0, 2.0));
        assert_eq!(equal.classify().unwrap().name(), "BCT2");
    }

    #[test]
    fn test_orcf_tie_selects_orcf3() {
        let root2 = 2.0_f64.sqrt();
        let tie = classification(LatticeType::Orthorhombic, "Fmmm", right(1.0, root2, root2));
        assert_eq!(tie.classify().unwrap().name(), "ORCF3");

        let orcf1 = classification(LatticeType::Orthorhombic, "Fddd", right(1.0, 2.0, 3.0));
        assert_eq!(orcf1.classify().unwrap().name(), "ORCF1");
        let orcf2 = classification(LatticeType::Orthorhombic, "Fmmm", right(3.0, 4.0, 5.0));
        assert_eq!(orcf2.classify().unwrap().name(), "ORCF2");
    }

    #[test]
    fn test_triclinic_angle_patterns() {
        let mut tri = classification(LatticeType::Triclinic, "P-1", params(3.0, 4.0, 5.0, 80.0, 85.0, 95.0));
        tri.reciprocal_angles = [100.0, 105.0, 110.0];
        assert_eq!(tri.classify().unwrap(), LatticeVariant::Tri1a);
        tri.reciprocal_angles = [80.0, 75.0, 70.0];
        assert_eq!(tri.classify().unwrap(), LatticeVariant::Tri1b);
        tri.reciprocal_angles = [100.0, 105.0, 90.0];
        assert_eq!(tri.classify().unwrap(), LatticeVariant::Tri1a);
        tri.reciprocal_angles = [90.0, 80.0, 75.0];
        assert_eq!(tri.classify().unwrap(), LatticeVariant::Tri1b);

        tri.reciprocal_angles = [100.0, 80.0, 95.0];
        assert!(matches!(tri.classify(), Err(KpathError::UnsupportedLattice { .. })));
        tri.reciprocal_angles = [90.0, 90.0, 95.0];
        assert!(matches!(tri.classify(), Err(KpathError::UnsupportedLattice { .. })));
    }

    #[test]
    fn test_unsupported_combinations() {
        let cell = right(3.0, 3.0, 5.0);
        for (lattice_type, symbol) in [
            (LatticeType::Tetragonal, "F4/mmm"),
            (LatticeType::Cubic, "Cmmm"),
            (LatticeType::Orthorhombic, "Amm2"),
            (LatticeType::Monoclinic, "I2/m"),
            (LatticeType::Orthorhombic, "mm2"),
        ] {
            let err = classification(lattice_type, symbol, cell).classify().unwrap_err();
            assert!(
                err.to_string().contains("unsupported lattice/centering combination"),
                "{} {}",
                lattice_type,
                symbol
            );
        }
    }

    #[test]
    fn test_degenerate_input() {
        let bad = classification(LatticeType::Cubic, "Pm-3m", right(0.0, 1.0, 1.0));
        assert!(matches!(bad.classify(), Err(KpathError::DegenerateInput(_))));

        let bad = classification(LatticeType::Monoclinic, "P2/m", params(3.0, 4.0, 5.0, 180.0, 90.0, 90.0));
        assert!(matches!(bad.classify(), Err(KpathError::DegenerateInput(_))));

        let mut bad = classification(LatticeType::Cubic, "Pm-3m", right(1.0, 1.0, 1.0));
        bad.reciprocal_angles = [f64::NAN, 90.0, 90.0];
        assert!(matches!(bad.classify(), Err(KpathError::DegenerateInput(_))));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let cls = classification(LatticeType::Orthorhombic, "Immm", right(2.0, 3.0, 4.0));
        let first = cls.classify().unwrap();
        let second = cls.classify().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.build_path(), second.build_path());
    }
}
