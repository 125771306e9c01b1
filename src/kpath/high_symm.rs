/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! High-symmetry k-path of a crystal structure
//!
//! [`HighSymmKpath`] runs the symmetry finder once, classifies the
//! standardized cell and keeps the resulting [`KPath`]. It is immutable
//! after construction; sampling is recomputed on every call.

use log::info;

use super::classifier::{LatticeClassification, LatticeVariant};
use super::config::KpathConfig;
use super::errors::Result;
use super::kpoints::KPath;
use super::sampler::{self, LabelledKPoint};
use crate::crystal::Structure;
use crate::lattice::{Lattice, Vector3D};
use crate::symmetry::{SymmetryFinder, SymmetryReport};

/// The high-symmetry path of one structure
#[derive(Debug, Clone)]
pub struct HighSymmKpath {
    primitive: Structure,
    conventional: Structure,
    reciprocal: Lattice,
    classification: LatticeClassification,
    variant: LatticeVariant,
    kpath: KPath,
    line_density: f64,
}

impl HighSymmKpath {
    /// Standardize `structure` with `finder` and select its k-path.
    ///
    /// `config.symprec` and `config.angle_tolerance` are handed to the finder.
    pub fn new<F>(structure: &Structure, finder: &F, config: &KpathConfig) -> Result<Self>
    where
        F: SymmetryFinder + ?Sized,
    {
        config.validate()?;
        let report = finder.analyze(structure, &config.symmetry_settings())?;
        Self::from_report(report, config)
    }

    /// Select the k-path from an existing symmetry report
    pub fn from_report(report: SymmetryReport, config: &KpathConfig) -> Result<Self> {
        config.validate()?;
        let classification = LatticeClassification::from_report(&report)?;
        let variant = classification.classify()?;
        let kpath = variant.build_path();
        let reciprocal = report.primitive.lattice().reciprocal_lattice()?;

        info!(
            "{} ({}): k-path {} with {} points and {} segments",
            report.spacegroup_symbol,
            report.lattice_type,
            kpath.name(),
            kpath.kpoints().len(),
            kpath.segments().len()
        );

        Ok(Self {
            primitive: report.primitive,
            conventional: report.conventional,
            reciprocal,
            classification,
            variant,
            kpath,
            line_density: config.line_density,
        })
    }

    /// The standardized primitive structure the path refers to
    pub fn structure(&self) -> &Structure {
        &self.primitive
    }

    /// The standardized conventional structure
    pub fn conventional_structure(&self) -> &Structure {
        &self.conventional
    }

    /// Reciprocal lattice of the primitive cell (with the 2π factor)
    pub fn reciprocal_lattice(&self) -> &Lattice {
        &self.reciprocal
    }

    pub fn classification(&self) -> &LatticeClassification {
        &self.classification
    }

    pub fn variant(&self) -> LatticeVariant {
        self.variant
    }

    /// Name of the path, e.g. "BCT1"
    pub fn name(&self) -> &str {
        self.kpath.name()
    }

    /// The labelled k-points and path segments
    pub fn kpath(&self) -> &KPath {
        &self.kpath
    }

    /// Default sampling density from the configuration
    pub fn line_density(&self) -> f64 {
        self.line_density
    }

    /// K-points along the path in Cartesian reciprocal coordinates
    pub fn get_kpoints(&self, line_density: f64) -> Result<Vec<Vector3D>> {
        sampler::sample(&self.kpath, &self.reciprocal, line_density)
    }

    /// [`Self::get_kpoints`] at the configured density
    pub fn get_kpoints_default(&self) -> Result<Vec<Vector3D>> {
        self.get_kpoints(self.line_density)
    }

    /// K-points along the path with high-symmetry labels attached
    pub fn get_labelled_kpoints(&self, line_density: f64) -> Result<Vec<LabelledKPoint>> {
        sampler::sample_labelled(&self.kpath, &self.reciprocal, line_density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpath::KpathError;
    use crate::symmetry::{LatticeType, StandardCellFinder};

    fn silicon() -> Structure {
        let mut structure = Structure::new(Lattice::cubic(5.43).unwrap());
        structure.add_site("Si", Vector3D::origin()).unwrap();
        structure.add_site("Si", Vector3D::new(0.25, 0.25, 0.25)).unwrap();
        structure
    }

    #[test]
    fn test_silicon_is_fcc() {
        let finder = StandardCellFinder::new(LatticeType::Cubic, "Fd-3m");
        let kpath = HighSymmKpath::new(&silicon(), &finder, &KpathConfig::default()).unwrap();
        assert_eq!(kpath.name(), "FCC");
        assert_eq!(kpath.variant(), LatticeVariant::Fcc);
        assert_eq!(kpath.structure().num_sites(), 2);
        assert_eq!(kpath.conventional_structure().num_sites(), 2);
        assert!(kpath.get_kpoints_default().unwrap().len() > kpath.kpath().kpoints().len());
    }

    #[test]
    fn test_unsupported_structure_fails_at_construction() {
        let finder = StandardCellFinder::new(LatticeType::Cubic, "Cmmm");
        let result = HighSymmKpath::new(&silicon(), &finder, &KpathConfig::default());
        assert!(matches!(result, Err(KpathError::UnsupportedLattice { .. })));
    }
}
