/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! K-path data structures
//!
//! A [`KPath`] is a named set of high-symmetry k-points in fractional
//! reciprocal coordinates plus an ordered list of [`PathSegment`]s, each a
//! polyline through those points. Labels are plain names ("GAMMA",
//! "SIGMA_1", "X_1"); typesetting is left to whoever renders them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::errors::{KpathError, Result};
use crate::lattice::Vector3D;

/// Label of the zone centre
pub const GAMMA: &str = "GAMMA";
/// Label of the BCT2 point Σ
pub const SIGMA: &str = "SIGMA";
/// Label of the BCT2 point Σ₁
pub const SIGMA_1: &str = "SIGMA_1";

/// A connected polyline through labelled k-points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathSegment {
    labels: Vec<String>,
}

impl PathSegment {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.as_ref().to_string()).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Consecutive (start, end) label pairs
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.labels
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels.join("-"))
    }
}

/// A high-symmetry path through the Brillouin zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KPath {
    name: String,
    kpoints: BTreeMap<String, Vector3D>,
    path: Vec<PathSegment>,
}

impl KPath {
    /// Assemble a path from literal tables. Used by the path generators,
    /// whose tables are fixed, so integrity is only debug-checked here.
    pub(crate) fn from_tables(name: &str, kpoints: &[(&str, [f64; 3])], segments: &[&[&str]]) -> Self {
        let kpath = Self {
            name: name.to_string(),
            kpoints: kpoints
                .iter()
                .map(|(label, coords)| (label.to_string(), Vector3D::from(*coords)))
                .collect(),
            path: segments.iter().map(|s| PathSegment::new(*s)).collect(),
        };
        debug_assert!(kpath.check_integrity().is_ok(), "broken table for {}", name);
        kpath
    }

    /// Variant name, e.g. "ORCF1"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All labelled k-points in fractional reciprocal coordinates
    pub fn kpoints(&self) -> &BTreeMap<String, Vector3D> {
        &self.kpoints
    }

    /// Fractional coordinates of one labelled point
    pub fn kpoint(&self, label: &str) -> Option<&Vector3D> {
        self.kpoints.get(label)
    }

    /// Path segments in sampling order
    pub fn segments(&self) -> &[PathSegment] {
        &self.path
    }

    /// Point labels in sorted order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.kpoints.keys().map(String::as_str)
    }

    /// Verify that every segment has at least two points and that every
    /// label it references is defined
    pub fn check_integrity(&self) -> Result<()> {
        for (index, segment) in self.path.iter().enumerate() {
            if segment.len() < 2 {
                return Err(KpathError::ShortSegment {
                    path: self.name.clone(),
                    index,
                });
            }
            if let Some(label) = segment.labels().iter().find(|l| !self.kpoints.contains_key(*l)) {
                return Err(KpathError::UnknownLabel {
                    path: self.name.clone(),
                    label: label.clone(),
                });
            }
        }
        Ok(())
    }

    /// Compact description of the path, e.g. "GAMMA-X-M|M-R"
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(PathSegment::to_string)
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl fmt::Display for KPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.path_string())
    }
}
