/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command line interface
//!
//! Builds a one-site structure in the standard conventional setting from
//! the given cell parameters, selects its k-path and prints it.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use crate::crystal::Structure;
use crate::kpath::{self, HighSymmKpath, KpathConfig};
use crate::lattice::{Lattice, Vector3D};
use crate::symmetry::{LatticeType, StandardCellFinder};

#[derive(Parser, Debug)]
#[command(name = "kpath")]
#[command(about = "High-symmetry k-paths for band structure calculations")]
#[command(version)]
pub struct Cli {
    /// Lattice system (cubic, tetragonal, orthorhombic, hexagonal, rhombohedral, monoclinic, triclinic)
    #[arg(short = 't', long)]
    pub lattice_type: LatticeType,

    /// Space group symbol, e.g. Fm-3m; its first letter gives the centering
    #[arg(short, long, allow_hyphen_values = true)]
    pub spacegroup: String,

    /// Conventional cell lengths
    #[arg(long, num_args = 3, value_names = ["A", "B", "C"], required = true)]
    pub abc: Vec<f64>,

    /// Conventional cell angles in degrees
    #[arg(long, num_args = 3, value_names = ["ALPHA", "BETA", "GAMMA"], default_values_t = vec![90.0, 90.0, 90.0])]
    pub angles: Vec<f64>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Points per unit of reciprocal length (overrides the configuration)
    #[arg(long)]
    pub line_density: Option<f64>,

    /// Length tolerance (overrides the configuration)
    #[arg(long)]
    pub symprec: Option<f64>,

    /// Angle tolerance in degrees (overrides the configuration)
    #[arg(long)]
    pub angle_tolerance: Option<f64>,

    /// Print the sampled k-points instead of the path summary
    #[arg(long)]
    pub kpoints: bool,

    /// Print JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Write the k-path as JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Configuration file (or defaults) with command line overrides applied
    pub fn kpath_config(&self) -> Result<KpathConfig> {
        let mut config = match &self.config {
            Some(path) => KpathConfig::from_json_file(path)
                .with_context(|| format!("Failed to read configuration {}", path.display()))?,
            None => KpathConfig::default(),
        };
        if let Some(line_density) = self.line_density {
            config.line_density = line_density;
        }
        if let Some(symprec) = self.symprec {
            config.symprec = symprec;
        }
        if let Some(angle_tolerance) = self.angle_tolerance {
            config.angle_tolerance = angle_tolerance;
        }
        config.validate()?;
        Ok(config)
    }

    /// One-site structure with the requested conventional cell
    pub fn structure(&self) -> Result<Structure> {
        let (a, b, c) = (self.abc[0], self.abc[1], self.abc[2]);
        let (alpha, beta, gamma) = (self.angles[0], self.angles[1], self.angles[2]);
        let lattice = Lattice::from_parameters(a, b, c, alpha, beta, gamma).context("Invalid cell parameters")?;

        let mut structure = Structure::new(lattice);
        structure.add_site("X", Vector3D::origin())?;
        Ok(structure)
    }
}

/// Select the k-path and render it as text or JSON
pub fn render(cli: &Cli) -> Result<String> {
    let config = cli.kpath_config()?;
    let finder = StandardCellFinder::new(cli.lattice_type, &cli.spacegroup);
    let high_symm = HighSymmKpath::new(&cli.structure()?, &finder, &config)?;

    if let Some(path) = &cli.output {
        kpath::write_kpath_json(high_symm.kpath(), path)?;
        info!("Wrote k-path {} to {}", high_symm.name(), path.display());
    }

    let rendered = match (cli.kpoints, cli.json) {
        (false, false) => kpath::format_kpath_summary(high_symm.kpath()),
        (false, true) => kpath::kpath_to_json(high_symm.kpath())?,
        (true, true) => kpath::kpoints_to_json(&high_symm.get_labelled_kpoints(config.line_density)?)?,
        (true, false) => {
            let mut text = String::new();
            for point in high_symm.get_labelled_kpoints(config.line_density)? {
                let k = point.coords;
                text.push_str(&format!("{:>12.6} {:>12.6} {:>12.6}", k.x, k.y, k.z));
                if let Some(label) = point.label {
                    text.push_str(&format!("  {}", label));
                }
                text.push('\n');
            }
            text
        }
    };
    Ok(rendered)
}

/// Run the command line program
pub fn run(cli: &Cli) -> Result<()> {
    let rendered = render(cli)?;
    if cli.output.is_none() || cli.kpoints || cli.json {
        print!("{}", rendered);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("kpath").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_summary_for_bct1() {
        let cli = parse(&["-t", "tetragonal", "-s", "I4/mmm", "--abc", "3", "3", "2"]);
        let summary = render(&cli).unwrap();
        assert!(summary.starts_with("K-path BCT1"));
        assert!(summary.contains("Path: GAMMA-X-M-GAMMA-Z-P-N-Z_1-M|X-P"));
    }

    #[test]
    fn test_overrides_and_defaults() {
        let cli = parse(&["-t", "cubic", "-s", "Pm-3m", "--abc", "4", "4", "4", "--line-density", "5"]);
        assert_eq!(cli.angles, vec![90.0, 90.0, 90.0]);
        let config = cli.kpath_config().unwrap();
        assert_eq!(config.line_density, 5.0);
        assert_eq!(config.symprec, 0.01);

        let bad = parse(&["-t", "cubic", "-s", "Pm-3m", "--abc", "4", "4", "4", "--line-density", "0"]);
        assert!(bad.kpath_config().is_err());
    }

    #[test]
    fn test_rejects_unknown_lattice_type() {
        let result = Cli::try_parse_from(["kpath", "-t", "cubicish", "-s", "Pm-3m", "--abc", "1", "1", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_kpoints_and_output_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("hex.json");
        let cli = parse(&[
            "-t",
            "hexagonal",
            "-s",
            "P6/mmm",
            "--abc",
            "3",
            "3",
            "5",
            "--angles",
            "90",
            "90",
            "120",
            "--kpoints",
            "--output",
            out.to_str().unwrap(),
        ]);
        let text = render(&cli).unwrap();
        let first = text.lines().next().unwrap();
        assert!(first.ends_with("GAMMA"));
        assert!(text.lines().last().unwrap().ends_with('H'));

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(kpath::kpath_from_json(&written).unwrap().name(), "HEX");
    }
}
