/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Text and JSON output of k-paths and sampled k-points

use std::fs;
use std::path::Path;

use super::errors::Result;
use super::kpoints::KPath;
use super::sampler::LabelledKPoint;

/// Serialize a k-path as pretty-printed JSON
pub fn kpath_to_json(kpath: &KPath) -> Result<String> {
    Ok(serde_json::to_string_pretty(kpath)?)
}

/// Write a k-path as JSON to a file
pub fn write_kpath_json<P: AsRef<Path>>(kpath: &KPath, path: P) -> Result<()> {
    fs::write(path, kpath_to_json(kpath)?)?;
    Ok(())
}

/// Read a k-path back from JSON, checking that its segments only use
/// defined labels
pub fn kpath_from_json(json: &str) -> Result<KPath> {
    let kpath: KPath = serde_json::from_str(json)?;
    kpath.check_integrity()?;
    Ok(kpath)
}

/// Serialize sampled k-points as pretty-printed JSON
pub fn kpoints_to_json(points: &[LabelledKPoint]) -> Result<String> {
    Ok(serde_json::to_string_pretty(points)?)
}

/// Plain-text table of the labelled points followed by the path
pub fn format_kpath_summary(kpath: &KPath) -> String {
    let mut summary = String::new();

    summary.push_str(&format!("K-path {}\n", kpath.name()));
    summary.push_str(&format!(
        "{:<10} {:>12} {:>12} {:>12}\n",
        "Label", "k1", "k2", "k3"
    ));
    summary.push_str(&format!("{}\n", "-".repeat(49)));

    for (label, k) in kpath.kpoints() {
        summary.push_str(&format!(
            "{:<10} {:>12.6} {:>12.6} {:>12.6}\n",
            label, k.x, k.y, k.z
        ));
    }

    summary.push_str(&format!("\nPath: {}\n", kpath.path_string()));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpath::generators;
    use crate::kpath::KpathError;

    #[test]
    fn test_summary_lists_every_point() {
        let kpath = generators::hex();
        let summary = format_kpath_summary(&kpath);
        assert!(summary.starts_with("K-path HEX\n"));
        for label in kpath.labels() {
            assert!(summary.contains(label));
        }
        assert!(summary.contains("Path: GAMMA-M-K-GAMMA-A-L-H-A|L-M|K-H"));
        assert!(summary.contains("0.333333"));
    }

    #[test]
    fn test_json_roundtrip_and_integrity_check() {
        let kpath = generators::bcc();
        let json = kpath_to_json(&kpath).unwrap();
        assert_eq!(kpath_from_json(&json).unwrap(), kpath);

        let broken = json.replacen("\"N\",", "\"Q\",", 1);
        assert!(matches!(
            kpath_from_json(&broken),
            Err(KpathError::UnknownLabel { .. })
        ));
    }
}
