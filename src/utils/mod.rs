/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions shared by the lattice, symmetry and k-path modules

pub mod constants;
pub mod math;

pub use math::{tolerant_cmp, tolerant_cmp_with, wrap_unit};
