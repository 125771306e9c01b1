/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Numerical constants shared across the crate

/// Relative tolerance used when a branch condition asks for equality
/// between two derived real quantities (ORCF3, MCLC2, MCLC4, TRI with a
/// right reciprocal angle).
pub const EQUALITY_TOLERANCE: f64 = 1e-8;

/// A right angle in degrees
pub const RIGHT_ANGLE: f64 = 90.0;

/// Default number of sampled points per unit of reciprocal length
pub const DEFAULT_LINE_DENSITY: f64 = 20.0;

/// Upper bound on the number of intervals a single path leg is split into
pub const MAX_LEG_DIVISIONS: usize = 10_000_000;

/// Default length tolerance handed to the symmetry finder
pub const DEFAULT_SYMPREC: f64 = 0.01;

/// Default angle tolerance (degrees) handed to the symmetry finder
pub const DEFAULT_ANGLE_TOLERANCE: f64 = 5.0;
