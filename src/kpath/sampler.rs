/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Dense sampling of a k-path in Cartesian reciprocal coordinates
//!
//! Every leg (pair of consecutive labels in a segment) of Cartesian length
//! `d` is sampled with `ceil(d * line_density) + 1` evenly spaced points,
//! both end points included. A zero-length leg gives a single point.
//! Shared end points of consecutive legs and segments are repeated so that
//! every leg can be walked on its own.

use log::trace;
use serde::{Deserialize, Serialize};

use super::errors::{KpathError, Result};
use super::kpoints::KPath;
use crate::lattice::{ReciprocalSpace, Vector3D};
use crate::utils::constants::MAX_LEG_DIVISIONS;

/// A sampled k-point, labelled when it is a high-symmetry point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledKPoint {
    /// Cartesian reciprocal coordinates
    pub coords: Vector3D,
    /// High-symmetry label for the first and last point of a leg
    pub label: Option<String>,
}

/// Sample a k-path at `line_density` points per unit of reciprocal length
pub fn sample<R>(kpath: &KPath, reciprocal: &R, line_density: f64) -> Result<Vec<Vector3D>>
where
    R: ReciprocalSpace + ?Sized,
{
    let mut points = Vec::new();
    walk(kpath, reciprocal, line_density, |coords, _| points.push(coords))?;
    Ok(points)
}

/// Same points as [`sample`], with the high-symmetry labels attached
pub fn sample_labelled<R>(kpath: &KPath, reciprocal: &R, line_density: f64) -> Result<Vec<LabelledKPoint>>
where
    R: ReciprocalSpace + ?Sized,
{
    let mut points = Vec::new();
    walk(kpath, reciprocal, line_density, |coords, label| {
        points.push(LabelledKPoint {
            coords,
            label: label.map(str::to_string),
        })
    })?;
    Ok(points)
}

/// Number of intervals a leg of Cartesian length `distance` is split into,
/// at most [`MAX_LEG_DIVISIONS`]
pub fn leg_divisions(distance: f64, line_density: f64) -> Result<usize> {
    let divisions = (distance * line_density).ceil();
    if !divisions.is_finite() || divisions > MAX_LEG_DIVISIONS as f64 {
        return Err(KpathError::TooManyDivisions {
            line_density,
            distance,
            limit: MAX_LEG_DIVISIONS,
        });
    }
    Ok(divisions as usize)
}

fn walk<R, F>(kpath: &KPath, reciprocal: &R, line_density: f64, mut emit: F) -> Result<()>
where
    R: ReciprocalSpace + ?Sized,
    F: FnMut(Vector3D, Option<&str>),
{
    if !line_density.is_finite() || line_density <= 0.0 {
        return Err(KpathError::InvalidLineDensity(line_density));
    }

    let cartesian = |label: &str| -> Result<Vector3D> {
        kpath
            .kpoint(label)
            .map(|frac| reciprocal.cartesian_coords(frac))
            .ok_or_else(|| KpathError::UnknownLabel {
                path: kpath.name().to_string(),
                label: label.to_string(),
            })
    };

    for segment in kpath.segments() {
        for (start_label, end_label) in segment.legs() {
            let start = cartesian(start_label)?;
            let end = cartesian(end_label)?;
            let divisions = leg_divisions(start.distance(&end), line_density)?;
            trace!("{} -> {}: {} divisions", start_label, end_label, divisions);

            if divisions == 0 {
                emit(start, Some(start_label));
                continue;
            }

            emit(start, Some(start_label));
            for i in 1..divisions {
                emit(start.lerp(&end, i as f64 / divisions as f64), None);
            }
            emit(end, Some(end_label));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpath::generators;
    use crate::lattice::Lattice;
    use approx::assert_relative_eq;

    #[test]
    fn test_leg_divisions() {
        assert_eq!(leg_divisions(0.0, 20.0).unwrap(), 0);
        assert_eq!(leg_divisions(0.5, 1.0).unwrap(), 1);
        assert_eq!(leg_divisions(1.0, 3.0).unwrap(), 3);
        assert_eq!(leg_divisions(1.01, 3.0).unwrap(), 4);
    }

    #[test]
    fn test_huge_density_is_rejected() {
        assert!(matches!(
            leg_divisions(1.0, 1e300),
            Err(KpathError::TooManyDivisions { .. })
        ));
        assert!(matches!(
            leg_divisions(1e300, 1e300),
            Err(KpathError::TooManyDivisions { .. })
        ));

        let reciprocal = Lattice::cubic(1.0).unwrap().reciprocal_lattice().unwrap();
        assert!(matches!(
            sample(&generators::cub(), &reciprocal, 1e300),
            Err(KpathError::TooManyDivisions { .. })
        ));
    }

    #[test]
    fn test_cubic_point_count() {
        // crystallographic reciprocal of a unit cube is the unit cube
        let reciprocal = Lattice::cubic(1.0).unwrap().reciprocal_lattice_crystallographic().unwrap();
        let kpath = generators::cub();
        let points = sample(&kpath, &reciprocal, 10.0).unwrap();

        let mut expected = 0;
        for segment in kpath.segments() {
            for (s, e) in segment.legs() {
                let d = kpath.kpoint(s).unwrap().distance(kpath.kpoint(e).unwrap());
                expected += (d * 10.0).ceil() as usize + 1;
            }
        }
        assert_eq!(points.len(), expected);
        assert_eq!(points[0], Vector3D::origin());
    }

    #[test]
    fn test_labels_on_leg_ends() {
        let reciprocal = Lattice::cubic(1.0).unwrap().reciprocal_lattice_crystallographic().unwrap();
        let points = sample_labelled(&generators::cub(), &reciprocal, 4.0).unwrap();
        // GAMMA -> X has length 0.5: 2 divisions, 3 points
        assert_eq!(points[0].label.as_deref(), Some("GAMMA"));
        assert_eq!(points[1].label, None);
        assert_eq!(points[2].label.as_deref(), Some("X"));
        assert_relative_eq!(points[1].coords.y, 0.25, epsilon = 1e-12);
        // next leg restarts at X
        assert_eq!(points[3].label.as_deref(), Some("X"));
        assert_eq!(points.last().unwrap().label.as_deref(), Some("R"));
    }

    #[test]
    fn test_invalid_density() {
        let reciprocal = Lattice::cubic(1.0).unwrap().reciprocal_lattice().unwrap();
        for density in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                sample(&generators::cub(), &reciprocal, density),
                Err(KpathError::InvalidLineDensity(_))
            ));
        }
    }
}
