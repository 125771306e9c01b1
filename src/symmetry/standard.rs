/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Symmetry finder for cells given in the standard conventional setting

use log::debug;

use super::errors::{Result, SymmetryError};
use super::types::{Centering, LatticeType};
use super::{SymmetryFinder, SymmetryReport, SymmetrySettings};
use crate::crystal::Structure;
use crate::lattice::LatticeParameters;

const IDENTITY: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
const FACE_CENTERED: [[f64; 3]; 3] = [[0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]];
const BODY_CENTERED: [[f64; 3]; 3] = [[-0.5, 0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, -0.5]];
const C_CENTERED_ORTHORHOMBIC: [[f64; 3]; 3] = [[0.5, -0.5, 0.0], [0.5, 0.5, 0.0], [0.0, 0.0, 1.0]];
const C_CENTERED_MONOCLINIC: [[f64; 3]; 3] = [[0.5, 0.5, 0.0], [-0.5, 0.5, 0.0], [0.0, 0.0, 1.0]];
const A_CENTERED: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 0.5, -0.5], [0.0, 0.5, 0.5]];
const B_CENTERED: [[f64; 3]; 3] = [[0.5, 0.0, -0.5], [0.0, 1.0, 0.0], [0.5, 0.0, 0.5]];
// obverse rhombohedral cell from hexagonal axes
const RHOMBOHEDRAL_FROM_HEXAGONAL: [[f64; 3]; 3] = [
    [2.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
    [-1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
    [-1.0 / 3.0, -2.0 / 3.0, 1.0 / 3.0],
];

/// Symmetry finder for structures already in the standard conventional
/// setting, with a known lattice system and space group symbol.
///
/// Monoclinic cells follow the Setyawan-Curtarolo convention: the unique
/// angle is alpha (between b and c), beta and gamma are 90°.
/// Rhombohedral cells may be given on hexagonal axes or on rhombohedral
/// axes.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardCellFinder {
    lattice_type: LatticeType,
    spacegroup_symbol: String,
}

impl StandardCellFinder {
    pub fn new(lattice_type: LatticeType, spacegroup_symbol: &str) -> Self {
        Self {
            lattice_type,
            spacegroup_symbol: spacegroup_symbol.trim().to_string(),
        }
    }

    pub fn lattice_type(&self) -> LatticeType {
        self.lattice_type
    }

    pub fn spacegroup_symbol(&self) -> &str {
        &self.spacegroup_symbol
    }

    fn inconsistent(&self, reason: String) -> SymmetryError {
        SymmetryError::InconsistentLattice {
            lattice_type: self.lattice_type.to_string(),
            reason,
        }
    }

    fn check_shape(&self, p: &LatticeParameters, settings: &SymmetrySettings) -> Result<()> {
        let same_length = |x: f64, y: f64| (x - y).abs() <= settings.symprec;
        let same_angle = |x: f64, y: f64| (x - y).abs() <= settings.angle_tolerance;
        let right = |x: f64| same_angle(x, 90.0);

        let all_right = right(p.alpha) && right(p.beta) && right(p.gamma);
        let hexagonal_axes = on_hexagonal_axes(p, settings);

        let consistent = match self.lattice_type {
            LatticeType::Cubic => all_right && same_length(p.a, p.b) && same_length(p.b, p.c),
            LatticeType::Tetragonal => all_right && same_length(p.a, p.b),
            LatticeType::Orthorhombic => all_right,
            LatticeType::Hexagonal => hexagonal_axes,
            LatticeType::Rhombohedral => {
                let rhombohedral_axes = same_length(p.a, p.b)
                    && same_length(p.b, p.c)
                    && same_angle(p.alpha, p.beta)
                    && same_angle(p.beta, p.gamma);
                hexagonal_axes || rhombohedral_axes
            }
            LatticeType::Monoclinic => right(p.beta) && right(p.gamma),
            LatticeType::Triclinic => true,
        };

        if consistent {
            Ok(())
        } else {
            Err(self.inconsistent(format!("cell parameters {}", p)))
        }
    }

    fn primitive_transformation(
        &self,
        centering: Centering,
        p: &LatticeParameters,
        settings: &SymmetrySettings,
    ) -> [[f64; 3]; 3] {
        match centering {
            Centering::Primitive => IDENTITY,
            Centering::FaceCentered => FACE_CENTERED,
            Centering::BodyCentered => BODY_CENTERED,
            Centering::BaseCenteredC => match self.lattice_type {
                LatticeType::Monoclinic => C_CENTERED_MONOCLINIC,
                _ => C_CENTERED_ORTHORHOMBIC,
            },
            Centering::BaseCenteredA => A_CENTERED,
            Centering::BaseCenteredB => B_CENTERED,
            Centering::Rhombohedral => {
                if on_hexagonal_axes(p, settings) {
                    RHOMBOHEDRAL_FROM_HEXAGONAL
                } else {
                    IDENTITY
                }
            }
        }
    }
}

/// a = b, alpha = beta = 90° and gamma = 120° within the tolerances
fn on_hexagonal_axes(p: &LatticeParameters, settings: &SymmetrySettings) -> bool {
    let same_angle = |x: f64, y: f64| (x - y).abs() <= settings.angle_tolerance;
    (p.a - p.b).abs() <= settings.symprec
        && same_angle(p.alpha, 90.0)
        && same_angle(p.beta, 90.0)
        && same_angle(p.gamma, 120.0)
}

impl SymmetryFinder for StandardCellFinder {
    fn analyze(&self, structure: &Structure, settings: &SymmetrySettings) -> Result<SymmetryReport> {
        settings.validate()?;
        if structure.is_empty() {
            return Err(SymmetryError::EmptyStructure);
        }

        let centering = Centering::from_spacegroup_symbol(&self.spacegroup_symbol)
            .ok_or_else(|| SymmetryError::UnsupportedCentering(self.spacegroup_symbol.clone()))?;

        let parameters = structure.lattice().parameters();
        self.check_shape(&parameters, settings)?;

        let transformation = self.primitive_transformation(centering, &parameters, settings);
        let primitive_lattice = structure.lattice().transformed(&transformation)?;
        let primitive = structure.in_lattice(primitive_lattice, settings.symprec)?;

        debug!(
            "standard cell {} ({}): {} conventional sites, {} primitive sites",
            self.spacegroup_symbol,
            self.lattice_type,
            structure.num_sites(),
            primitive.num_sites()
        );

        Ok(SymmetryReport {
            lattice_type: self.lattice_type,
            spacegroup_symbol: self.spacegroup_symbol.clone(),
            primitive,
            conventional: structure.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{Lattice, Vector3D};
    use approx::assert_relative_eq;

    fn single_site(lattice: Lattice) -> Structure {
        let mut structure = Structure::new(lattice);
        structure.add_site("X", Vector3D::origin()).unwrap();
        structure
    }

    #[test]
    fn test_face_centred_cubic() {
        let finder = StandardCellFinder::new(LatticeType::Cubic, "Fm-3m");
        let report = finder
            .analyze(&single_site(Lattice::cubic(4.0).unwrap()), &SymmetrySettings::default())
            .unwrap();
        assert_eq!(report.centering(), Some(Centering::FaceCentered));
        assert_relative_eq!(report.primitive.lattice().volume(), 16.0, epsilon = 1e-10);
        assert_eq!(report.primitive.num_sites(), 1);
    }

    #[test]
    fn test_rhombohedral_from_hexagonal_axes() {
        let finder = StandardCellFinder::new(LatticeType::Rhombohedral, "R-3m");
        let report = finder
            .analyze(&single_site(Lattice::hexagonal(3.0, 10.0).unwrap()), &SymmetrySettings::default())
            .unwrap();
        let p = report.primitive.lattice().parameters();
        assert_relative_eq!(p.a, p.b, epsilon = 1e-10);
        assert_relative_eq!(p.b, p.c, epsilon = 1e-10);
        assert_relative_eq!(p.alpha, p.beta, epsilon = 1e-8);
        assert_relative_eq!(p.beta, p.gamma, epsilon = 1e-8);
        assert_relative_eq!(
            report.primitive.lattice().volume() * 3.0,
            report.conventional.lattice().volume(),
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_rhombohedral_axes_near_120_degrees() {
        // alpha = beta = gamma = 117 lies within the angle tolerance of 120
        let finder = StandardCellFinder::new(LatticeType::Rhombohedral, "R-3m");
        let lattice = Lattice::from_parameters(3.0, 3.0, 3.0, 117.0, 117.0, 117.0).unwrap();
        let report = finder
            .analyze(&single_site(lattice), &SymmetrySettings::default())
            .unwrap();
        let p = report.primitive.lattice().parameters();
        assert_relative_eq!(p.a, 3.0, epsilon = 1e-10);
        assert_relative_eq!(p.alpha, 117.0, epsilon = 1e-8);
        assert_relative_eq!(p.beta, 117.0, epsilon = 1e-8);
        assert_relative_eq!(p.gamma, 117.0, epsilon = 1e-8);
    }

    #[test]
    fn test_inconsistent_shape_is_rejected() {
        let finder = StandardCellFinder::new(LatticeType::Cubic, "Pm-3m");
        let lattice = Lattice::from_parameters(3.0, 3.0, 4.0, 90.0, 90.0, 90.0).unwrap();
        let err = finder
            .analyze(&single_site(lattice), &SymmetrySettings::default())
            .unwrap_err();
        assert!(matches!(err, SymmetryError::InconsistentLattice { .. }));
    }

    #[test]
    fn test_missing_centering_and_empty_structure() {
        let finder = StandardCellFinder::new(LatticeType::Triclinic, "-1");
        let lattice = Lattice::cubic(3.0).unwrap();
        assert!(matches!(
            finder.analyze(&single_site(lattice.clone()), &SymmetrySettings::default()),
            Err(SymmetryError::UnsupportedCentering(_))
        ));

        let finder = StandardCellFinder::new(LatticeType::Cubic, "Pm-3m");
        assert!(matches!(
            finder.analyze(&Structure::new(lattice), &SymmetrySettings::default()),
            Err(SymmetryError::EmptyStructure)
        ));
    }

    #[test]
    fn test_invalid_settings() {
        let finder = StandardCellFinder::new(LatticeType::Cubic, "Pm-3m");
        let settings = SymmetrySettings {
            symprec: 0.0,
            angle_tolerance: 5.0,
        };
        assert!(matches!(
            finder.analyze(&single_site(Lattice::cubic(3.0).unwrap()), &settings),
            Err(SymmetryError::InvalidSettings(_))
        ));
    }
}
