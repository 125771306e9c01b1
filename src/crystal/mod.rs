/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Crystal structures
//!
//! A minimal periodic structure container: enough to hand a cell to the
//! symmetry finder and to carry the standardized primitive cell back.

mod errors;
mod structure;

pub use errors::{CrystalError, Result};
pub use structure::{Site, Structure};
