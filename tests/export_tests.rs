/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use kpath_rs::crystal::Structure;
use kpath_rs::kpath::{
    format_kpath_summary, kpath_from_json, kpoints_to_json, write_kpath_json, HighSymmKpath, KpathConfig,
    LabelledKPoint,
};
use kpath_rs::lattice::{Lattice, Vector3D};
use kpath_rs::symmetry::{LatticeType, StandardCellFinder};
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

fn orcf1() -> HighSymmKpath {
    let mut structure = Structure::new(Lattice::from_parameters(2.0, 4.0, 5.0, 90.0, 90.0, 90.0).unwrap());
    structure.add_site("Ga", Vector3D::origin()).unwrap();
    let finder = StandardCellFinder::new(LatticeType::Orthorhombic, "Fmmm");
    HighSymmKpath::new(&structure, &finder, &KpathConfig::default()).unwrap()
}

#[test]
fn test_write_and_read_kpath() {
    let high_symm = orcf1();
    let dir = tempdir().unwrap();
    let path = dir.path().join("orcf1.json");

    write_kpath_json(high_symm.kpath(), &path).unwrap();
    let restored = kpath_from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(&restored, high_symm.kpath());
}

#[test]
fn test_kpoints_json_keeps_labels() {
    let high_symm = orcf1();
    let points = high_symm.get_labelled_kpoints(5.0).unwrap();
    let json = kpoints_to_json(&points).unwrap();
    let restored: Vec<LabelledKPoint> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.len(), points.len());
    assert_eq!(restored[0].label.as_deref(), Some("GAMMA"));
    assert!(restored.iter().any(|p| p.label.as_deref() == Some("A_1")));
    assert!(restored.iter().filter(|p| p.label.is_none()).count() > 0);
}

#[test]
fn test_summary_mentions_path() {
    let summary = format_kpath_summary(orcf1().kpath());
    assert!(summary.starts_with("K-path ORCF1"));
    assert!(summary.contains("Path: GAMMA-Y-T-Z-GAMMA-X-A_1-Y|T-X_1|X-A-Z|L-GAMMA"));
}

#[test]
fn test_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("kpath.json");
    let mut file = File::create(&path).unwrap();
    writeln!(file, r#"{{ "line_density": 40.0, "angle_tolerance": 1.0 }}"#).unwrap();

    let config = KpathConfig::from_json_file(&path).unwrap();
    assert_eq!(config.line_density, 40.0);
    assert_eq!(config.angle_tolerance, 1.0);
    assert_eq!(config.symprec, 0.01);

    assert!(KpathConfig::from_json_file(dir.path().join("missing.json")).is_err());
}
