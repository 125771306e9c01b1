/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Configuration for k-path construction

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::errors::{KpathError, Result};
use crate::symmetry::SymmetrySettings;
use crate::utils::constants::{DEFAULT_ANGLE_TOLERANCE, DEFAULT_LINE_DENSITY, DEFAULT_SYMPREC};

/// K-path configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpathConfig {
    /// Length tolerance for the symmetry finder
    pub symprec: f64,
    /// Angle tolerance in degrees for the symmetry finder
    pub angle_tolerance: f64,
    /// Sampled points per unit of reciprocal length
    pub line_density: f64,
}

impl Default for KpathConfig {
    fn default() -> Self {
        Self {
            symprec: DEFAULT_SYMPREC,
            angle_tolerance: DEFAULT_ANGLE_TOLERANCE,
            line_density: DEFAULT_LINE_DENSITY,
        }
    }
}

impl KpathConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: KpathConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Tolerances forwarded to the symmetry finder
    pub fn symmetry_settings(&self) -> SymmetrySettings {
        SymmetrySettings {
            symprec: self.symprec,
            angle_tolerance: self.angle_tolerance,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.line_density.is_finite() || self.line_density <= 0.0 {
            return Err(KpathError::InvalidLineDensity(self.line_density));
        }
        self.symmetry_settings()
            .validate()
            .map_err(|e| KpathError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KpathConfig::default();
        assert_eq!(config.symprec, 0.01);
        assert_eq!(config.angle_tolerance, 5.0);
        assert_eq!(config.line_density, 20.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = KpathConfig::from_json_str(r#"{ "line_density": 50 }"#).unwrap();
        assert_eq!(config.line_density, 50.0);
        assert_eq!(config.symprec, 0.01);
    }

    #[test]
    fn test_invalid_json_values() {
        assert!(matches!(
            KpathConfig::from_json_str(r#"{ "line_density": -1 }"#),
            Err(KpathError::InvalidLineDensity(_))
        ));
        assert!(matches!(
            KpathConfig::from_json_str(r#"{ "symprec": 0 }"#),
            Err(KpathError::InvalidConfig(_))
        ));
        assert!(matches!(
            KpathConfig::from_json_str("{ not json"),
            Err(KpathError::Serialization(_))
        ));
    }
}
