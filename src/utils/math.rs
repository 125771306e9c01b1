/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Small floating-point helpers
//!
//! The lattice classifier compares derived real quantities against each
//! other and against 90°. Those comparisons go through [`tolerant_cmp`] so
//! that the equality branches are reachable for inputs that are equal up to
//! rounding.

use std::cmp::Ordering;

use super::constants::EQUALITY_TOLERANCE;

/// Compare two values, treating them as equal when they agree within
/// [`EQUALITY_TOLERANCE`] relative to the larger magnitude.
///
/// NaN inputs compare as `Equal` to nothing: they return `Less` when `x` is
/// NaN and `Greater` otherwise, so callers must validate finiteness first.
pub fn tolerant_cmp(x: f64, y: f64) -> Ordering {
    tolerant_cmp_with(x, y, EQUALITY_TOLERANCE)
}

/// [`tolerant_cmp`] with an explicit relative tolerance
pub fn tolerant_cmp_with(x: f64, y: f64, tolerance: f64) -> Ordering {
    let scale = x.abs().max(y.abs());
    if (x - y).abs() <= tolerance * scale {
        return Ordering::Equal;
    }
    match x.partial_cmp(&y) {
        Some(ordering) => ordering,
        None if x.is_nan() => Ordering::Less,
        None => Ordering::Greater,
    }
}

/// Wrap a fractional coordinate into `[0, 1)`
pub fn wrap_unit(value: f64) -> f64 {
    let wrapped = value - value.floor();
    // -1e-17 floors to -1 and wraps to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
