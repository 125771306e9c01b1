/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodic crystal structure: a lattice plus sites in fractional coordinates

use serde::{Deserialize, Serialize};

use super::errors::{CrystalError, Result};
use crate::lattice::{Lattice, Vector3D};
use crate::utils::wrap_unit;

/// A single occupied site of a periodic structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Species label, e.g. "Si"
    pub species: String,
    /// Position in fractional coordinates of the owning lattice
    pub frac_coords: Vector3D,
}

impl Site {
    /// Create a new site
    pub fn new(species: &str, frac_coords: Vector3D) -> Result<Self> {
        if species.trim().is_empty() {
            return Err(CrystalError::InvalidSite("empty species label".to_string()));
        }
        if !(frac_coords.x.is_finite() && frac_coords.y.is_finite() && frac_coords.z.is_finite()) {
            return Err(CrystalError::InvalidSite(format!(
                "non-finite coordinates {} for {}",
                frac_coords, species
            )));
        }
        Ok(Self {
            species: species.to_string(),
            frac_coords,
        })
    }
}

/// A periodic crystal structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    lattice: Lattice,
    sites: Vec<Site>,
}

impl Structure {
    /// Create a structure with no sites
    pub fn new(lattice: Lattice) -> Self {
        Self {
            lattice,
            sites: Vec::new(),
        }
    }

    /// Create a structure from a lattice and its sites
    pub fn with_sites(lattice: Lattice, sites: Vec<Site>) -> Self {
        Self { lattice, sites }
    }

    /// Add a site, returning its index
    pub fn add_site(&mut self, species: &str, frac_coords: Vector3D) -> Result<usize> {
        let index = self.sites.len();
        self.sites.push(Site::new(species, frac_coords)?);
        Ok(index)
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Cartesian position of a site
    pub fn cartesian_coords(&self, index: usize) -> Option<Vector3D> {
        self.sites
            .get(index)
            .map(|site| self.lattice.cartesian_coords(&site.frac_coords))
    }

    /// Re-express the structure in another lattice that describes the same
    /// periodic crystal (for example a primitive cell of a centred one).
    ///
    /// Sites are wrapped into the new cell; sites that coincide with an
    /// already kept site of the same species within `tolerance` (Cartesian
    /// distance, including periodic images) are dropped.
    pub fn in_lattice(&self, lattice: Lattice, tolerance: f64) -> Result<Structure> {
        let mut sites: Vec<Site> = Vec::with_capacity(self.sites.len());

        for site in &self.sites {
            let cart = self.lattice.cartesian_coords(&site.frac_coords);
            let frac = lattice.fractional_coords(&cart)?.map(wrap_unit);

            let duplicate = sites.iter().any(|kept| {
                kept.species == site.species
                    && periodic_distance(&lattice, &kept.frac_coords, &frac) < tolerance
            });
            if !duplicate {
                sites.push(Site {
                    species: site.species.clone(),
                    frac_coords: frac,
                });
            }
        }

        Ok(Structure { lattice, sites })
    }
}

/// Shortest Cartesian distance between two fractional positions over the
/// nearest periodic images
fn periodic_distance(lattice: &Lattice, f1: &Vector3D, f2: &Vector3D) -> f64 {
    let delta = (*f1 - *f2).map(|d| d - d.round());
    let mut best = f64::INFINITY;
    for i in -1..=1 {
        for j in -1..=1 {
            for k in -1..=1 {
                let shifted = delta + Vector3D::new(i as f64, j as f64, k as f64);
                best = best.min(lattice.cartesian_coords(&shifted).length());
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rocksalt() -> Structure {
        let mut structure = Structure::new(Lattice::cubic(4.0).unwrap());
        for f in [[0.0, 0.0, 0.0], [0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]] {
            structure.add_site("Na", f.into()).unwrap();
        }
        for f in [[0.5, 0.5, 0.5], [0.5, 0.0, 0.0], [0.0, 0.5, 0.0], [0.0, 0.0, 0.5]] {
            structure.add_site("Cl", f.into()).unwrap();
        }
        structure
    }

    #[test]
    fn test_add_site() {
        let structure = rocksalt();
        assert_eq!(structure.num_sites(), 8);
        let cart = structure.cartesian_coords(4).unwrap();
        assert_relative_eq!(cart.length(), (3.0_f64 * 4.0).sqrt(), epsilon = 1e-12);
        assert!(structure.cartesian_coords(8).is_none());
    }

    #[test]
    fn test_invalid_site() {
        let mut structure = Structure::new(Lattice::cubic(1.0).unwrap());
        assert!(structure.add_site("", Vector3D::origin()).is_err());
        assert!(structure
            .add_site("Si", Vector3D::new(f64::NAN, 0.0, 0.0))
            .is_err());
    }

    #[test]
    fn test_primitive_cell_removes_centring_translations() {
        let structure = rocksalt();
        let primitive_lattice = structure
            .lattice()
            .transformed(&[[0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]])
            .unwrap();
        let primitive = structure.in_lattice(primitive_lattice, 0.01).unwrap();
        assert_eq!(primitive.num_sites(), 2);
        assert_eq!(primitive.sites()[0].species, "Na");
        assert_eq!(primitive.sites()[1].species, "Cl");
    }
}
