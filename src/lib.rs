/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # kpath-rs
//!
//! High-symmetry k-point paths through the Brillouin zone for band
//! structure calculations, following Setyawan and Curtarolo (2010).
//!
//! A structure is standardized by a [`symmetry::SymmetryFinder`], its
//! lattice is classified into one of 23 variants and the matching path of
//! labelled k-points is sampled into a dense list of Cartesian k-points.
//!
//! ```
//! use kpath_rs::crystal::Structure;
//! use kpath_rs::kpath::{HighSymmKpath, KpathConfig};
//! use kpath_rs::lattice::{Lattice, Vector3D};
//! use kpath_rs::symmetry::{LatticeType, StandardCellFinder};
//!
//! let mut structure = Structure::new(Lattice::cubic(3.0).unwrap());
//! structure.add_site("Po", Vector3D::origin()).unwrap();
//!
//! let finder = StandardCellFinder::new(LatticeType::Cubic, "Pm-3m");
//! let kpath = HighSymmKpath::new(&structure, &finder, &KpathConfig::default()).unwrap();
//! assert_eq!(kpath.name(), "CUB");
//! assert_eq!(kpath.kpath().path_string(), "GAMMA-X-M-GAMMA-R-X|M-R");
//! ```

pub mod cli;
pub mod crystal;
pub mod kpath;
pub mod lattice;
pub mod symmetry;
pub mod utils;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

pub use kpath::{HighSymmKpath, KPath, KpathConfig, KpathError, LatticeVariant};
