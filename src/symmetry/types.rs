/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Lattice systems and centering symbols

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::SymmetryError;

/// Lattice system reported by a symmetry finder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatticeType {
    Cubic,
    Tetragonal,
    Orthorhombic,
    Hexagonal,
    Rhombohedral,
    Monoclinic,
    Triclinic,
}

impl LatticeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LatticeType::Cubic => "cubic",
            LatticeType::Tetragonal => "tetragonal",
            LatticeType::Orthorhombic => "orthorhombic",
            LatticeType::Hexagonal => "hexagonal",
            LatticeType::Rhombohedral => "rhombohedral",
            LatticeType::Monoclinic => "monoclinic",
            LatticeType::Triclinic => "triclinic",
        }
    }
}

impl fmt::Display for LatticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LatticeType {
    type Err = SymmetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cubic" => Ok(LatticeType::Cubic),
            "tetragonal" => Ok(LatticeType::Tetragonal),
            "orthorhombic" => Ok(LatticeType::Orthorhombic),
            "hexagonal" => Ok(LatticeType::Hexagonal),
            "rhombohedral" | "trigonal" => Ok(LatticeType::Rhombohedral),
            "monoclinic" => Ok(LatticeType::Monoclinic),
            "triclinic" => Ok(LatticeType::Triclinic),
            _ => Err(SymmetryError::UnknownLatticeType(s.to_string())),
        }
    }
}

/// Lattice centering, the leading letter of a Hermann-Mauguin symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Centering {
    /// P
    Primitive,
    /// F
    FaceCentered,
    /// I
    BodyCentered,
    /// C
    BaseCenteredC,
    /// A
    BaseCenteredA,
    /// B
    BaseCenteredB,
    /// R
    Rhombohedral,
}

impl Centering {
    /// Centering from its letter
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'P' => Some(Centering::Primitive),
            'F' => Some(Centering::FaceCentered),
            'I' => Some(Centering::BodyCentered),
            'C' => Some(Centering::BaseCenteredC),
            'A' => Some(Centering::BaseCenteredA),
            'B' => Some(Centering::BaseCenteredB),
            'R' => Some(Centering::Rhombohedral),
            _ => None,
        }
    }

    /// Centering of a space group symbol such as "Fm-3m" or "C2/m".
    ///
    /// The lattice letter is the only upper-case letter of a
    /// Hermann-Mauguin symbol, so the first one found is taken.
    pub fn from_spacegroup_symbol(symbol: &str) -> Option<Self> {
        symbol
            .chars()
            .find(|c| c.is_ascii_uppercase())
            .and_then(Self::from_letter)
    }

    pub fn letter(&self) -> char {
        match self {
            Centering::Primitive => 'P',
            Centering::FaceCentered => 'F',
            Centering::BodyCentered => 'I',
            Centering::BaseCenteredC => 'C',
            Centering::BaseCenteredA => 'A',
            Centering::BaseCenteredB => 'B',
            Centering::Rhombohedral => 'R',
        }
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lattice_type() {
        assert_eq!("Cubic".parse::<LatticeType>().unwrap(), LatticeType::Cubic);
        assert_eq!(" monoclinic ".parse::<LatticeType>().unwrap(), LatticeType::Monoclinic);
        assert!("cubicle".parse::<LatticeType>().is_err());
        assert_eq!(LatticeType::Orthorhombic.to_string(), "orthorhombic");
    }

    #[test]
    fn test_centering_from_symbol() {
        assert_eq!(Centering::from_spacegroup_symbol("Fm-3m"), Some(Centering::FaceCentered));
        assert_eq!(Centering::from_spacegroup_symbol("Im-3m"), Some(Centering::BodyCentered));
        assert_eq!(Centering::from_spacegroup_symbol("P4_2/mnm"), Some(Centering::Primitive));
        assert_eq!(Centering::from_spacegroup_symbol("C2/m"), Some(Centering::BaseCenteredC));
        assert_eq!(Centering::from_spacegroup_symbol("Amm2"), Some(Centering::BaseCenteredA));
        assert_eq!(Centering::from_spacegroup_symbol("R-3m"), Some(Centering::Rhombohedral));
        assert_eq!(Centering::from_spacegroup_symbol("-1"), None);
    }
}
