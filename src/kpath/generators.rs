/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! High-symmetry k-paths for each Bravais lattice variant
//!
//! Coordinates are fractional in the primitive reciprocal basis and follow
//! Setyawan, W. & Curtarolo, S. (2010), High-throughput electronic band
//! structure calculations: Challenges and tools, Comput. Mater. Sci. 49,
//! 299-312, doi:10.1016/j.commatsci.2010.05.010.
//!
//! Lengths are those of the conventional cell. Angles are in radians.
//! Inputs are assumed physically valid; the classifier checks them.

use super::kpoints::{KPath, GAMMA, SIGMA, SIGMA_1};

const ORIGIN: [f64; 3] = [0.0, 0.0, 0.0];

/// Simple cubic
pub fn cub() -> KPath {
    KPath::from_tables(
        "CUB",
        &[
            (GAMMA, ORIGIN),
            ("X", [0.0, 0.5, 0.0]),
            ("R", [0.5, 0.5, 0.5]),
            ("M", [0.5, 0.5, 0.0]),
        ],
        &[&[GAMMA, "X", "M", GAMMA, "R", "X"], &["M", "R"]],
    )
}

/// Face-centred cubic
pub fn fcc() -> KPath {
    KPath::from_tables(
        "FCC",
        &[
            (GAMMA, ORIGIN),
            ("K", [3.0 / 8.0, 3.0 / 8.0, 3.0 / 4.0]),
            ("L", [0.5, 0.5, 0.5]),
            ("U", [5.0 / 8.0, 1.0 / 4.0, 5.0 / 8.0]),
            ("W", [0.5, 1.0 / 4.0, 3.0 / 4.0]),
            ("X", [0.5, 0.0, 0.5]),
        ],
        &[&[GAMMA, "X", "W", "K", GAMMA, "L", "U", "W", "L", "K"], &["U", "X"]],
    )
}

/// Body-centred cubic
pub fn bcc() -> KPath {
    KPath::from_tables(
        "BCC",
        &[
            (GAMMA, ORIGIN),
            ("H", [0.5, -0.5, 0.5]),
            ("P", [0.25, 0.25, 0.25]),
            ("N", [0.0, 0.0, 0.5]),
        ],
        &[&[GAMMA, "H", "N", GAMMA, "P", "H"], &["P", "N"]],
    )
}

/// Simple tetragonal
pub fn tet() -> KPath {
    KPath::from_tables(
        "TET",
        &[
            (GAMMA, ORIGIN),
            ("A", [0.5, 0.5, 0.5]),
            ("M", [0.5, 0.5, 0.0]),
            ("R", [0.0, 0.5, 0.5]),
            ("X", [0.0, 0.5, 0.0]),
            ("Z", [0.0, 0.0, 0.5]),
        ],
        &[
            &[GAMMA, "X", "M", GAMMA, "Z", "R", "A", "Z"],
            &["X", "R"],
            &["M", "A"],
        ],
    )
}

/// Body-centred tetragonal with c < a
pub fn bct1(c: f64, a: f64) -> KPath {
    let eta = (1.0 + c.powi(2) / a.powi(2)) / 4.0;
    KPath::from_tables(
        "BCT1",
        &[
            (GAMMA, ORIGIN),
            ("M", [-0.5, 0.5, 0.5]),
            ("N", [0.0, 0.5, 0.0]),
            ("P", [0.25, 0.25, 0.25]),
            ("X", [0.0, 0.0, 0.5]),
            ("Z", [eta, eta, -eta]),
            ("Z_1", [-eta, 1.0 - eta, eta]),
        ],
        &[&[GAMMA, "X", "M", GAMMA, "Z", "P", "N", "Z_1", "M"], &["X", "P"]],
    )
}

/// Body-centred tetragonal with c >= a
pub fn bct2(c: f64, a: f64) -> KPath {
    let eta = (1.0 + a.powi(2) / c.powi(2)) / 4.0;
    let zeta = a.powi(2) / (2.0 * c.powi(2));
    KPath::from_tables(
        "BCT2",
        &[
            (GAMMA, ORIGIN),
            ("N", [0.0, 0.5, 0.0]),
            ("P", [0.25, 0.25, 0.25]),
            (SIGMA, [-eta, eta, eta]),
            (SIGMA_1, [eta, 1.0 - eta, -eta]),
            ("X", [0.0, 0.0, 0.5]),
            ("Y", [-zeta, zeta, 0.5]),
            ("Y_1", [0.5, 0.5, -zeta]),
            ("Z", [0.5, 0.5, -0.5]),
        ],
        &[
            &[GAMMA, "X", "Y", SIGMA, GAMMA, "Z", SIGMA_1, "N", "P", "Y_1", "Z"],
            &["X", "P"],
        ],
    )
}

/// Simple orthorhombic
pub fn orc() -> KPath {
    KPath::from_tables(
        "ORC",
        &[
            (GAMMA, ORIGIN),
            ("R", [0.5, 0.5, 0.5]),
            ("S", [0.5, 0.5, 0.0]),
            ("T", [0.0, 0.5, 0.5]),
            ("U", [0.5, 0.0, 0.5]),
            ("X", [0.5, 0.0, 0.0]),
            ("Y", [0.0, 0.5, 0.0]),
            ("Z", [0.0, 0.0, 0.5]),
        ],
        &[
            &[GAMMA, "X", "S", "Y", GAMMA, "Z", "U", "R", "T", "Z"],
            &["Y", "T"],
            &["U", "X"],
            &["S", "R"],
        ],
    )
}

// ORCF1 and ORCF3 share their points
fn orcf_zeta_eta(a: f64, b: f64, c: f64) -> (f64, f64) {
    let zeta = (1.0 + a.powi(2) / b.powi(2) - a.powi(2) / c.powi(2)) / 4.0;
    let eta = (1.0 + a.powi(2) / b.powi(2) + a.powi(2) / c.powi(2)) / 4.0;
    (zeta, eta)
}

/// Face-centred orthorhombic with 1/a² > 1/b² + 1/c²
pub fn orcf1(a: f64, b: f64, c: f64) -> KPath {
    let (zeta, eta) = orcf_zeta_eta(a, b, c);
    KPath::from_tables(
        "ORCF1",
        &[
            (GAMMA, ORIGIN),
            ("A", [0.5, 0.5 + zeta, zeta]),
            ("A_1", [0.5, 0.5 - zeta, 1.0 - zeta]),
            ("L", [0.5, 0.5, 0.5]),
            ("T", [1.0, 0.5, 0.5]),
            ("X", [0.0, eta, eta]),
            ("X_1", [1.0, 1.0 - eta, 1.0 - eta]),
            ("Y", [0.5, 0.0, 0.5]),
            ("Z", [0.5, 0.5, 0.0]),
        ],
        &[
            &[GAMMA, "Y", "T", "Z", GAMMA, "X", "A_1", "Y"],
            &["T", "X_1"],
            &["X", "A", "Z"],
            &["L", GAMMA],
        ],
    )
}

/// Face-centred orthorhombic with 1/a² < 1/b² + 1/c²
pub fn orcf2(a: f64, b: f64, c: f64) -> KPath {
    let phi = (1.0 + c.powi(2) / b.powi(2) - c.powi(2) / a.powi(2)) / 4.0;
    let eta = (1.0 + a.powi(2) / b.powi(2) - a.powi(2) / c.powi(2)) / 4.0;
    let delta = (1.0 + b.powi(2) / a.powi(2) - b.powi(2) / c.powi(2)) / 4.0;
    KPath::from_tables(
        "ORCF2",
        &[
            (GAMMA, ORIGIN),
            ("C", [0.5, 0.5 - eta, 1.0 - eta]),
            ("C_1", [0.5, 0.5 + eta, eta]),
            ("D", [0.5 - delta, 0.5, 1.0 - delta]),
            ("D_1", [0.5 + delta, 0.5, delta]),
            ("L", [0.5, 0.5, 0.5]),
            ("H", [1.0 - phi, 0.5 - phi, 0.5]),
            ("H_1", [phi, 0.5 + phi, 0.5]),
            ("X", [0.0, 0.5, 0.5]),
            ("Y", [0.5, 0.0, 0.5]),
            ("Z", [0.5, 0.5, 0.0]),
        ],
        &[
            &[GAMMA, "Y", "C", "D", "X", GAMMA, "Z", "D_1", "H", "C"],
            &["C_1", "Z"],
            &["X", "H_1"],
            &["H", "Y"],
            &["L", GAMMA],
        ],
    )
}

/// Face-centred orthorhombic with 1/a² = 1/b² + 1/c²
pub fn orcf3(a: f64, b: f64, c: f64) -> KPath {
    let (zeta, eta) = orcf_zeta_eta(a, b, c);
    KPath::from_tables(
        "ORCF3",
        &[
            (GAMMA, ORIGIN),
            ("A", [0.5, 0.5 + zeta, zeta]),
            ("A_1", [0.5, 0.5 - zeta, 1.0 - zeta]),
            ("L", [0.5, 0.5, 0.5]),
            ("T", [1.0, 0.5, 0.5]),
            ("X", [0.0, eta, eta]),
            ("X_1", [1.0, 1.0 - eta, 1.0 - eta]),
            ("Y", [0.5, 0.0, 0.5]),
            ("Z", [0.5, 0.5, 0.0]),
        ],
        &[
            &[GAMMA, "Y", "T", "Z", GAMMA, "X", "A_1", "Y"],
            &["X", "A", "Z"],
            &["L", GAMMA],
        ],
    )
}

/// Body-centred orthorhombic
pub fn orci(a: f64, b: f64, c: f64) -> KPath {
    let zeta = (1.0 + a.powi(2) / c.powi(2)) / 4.0;
    let eta = (1.0 + b.powi(2) / c.powi(2)) / 4.0;
    let delta = (b.powi(2) - a.powi(2)) / (4.0 * c.powi(2));
    let mu = (a.powi(2) + b.powi(2)) / (4.0 * c.powi(2));
    KPath::from_tables(
        "ORCI",
        &[
            (GAMMA, ORIGIN),
            ("L", [-mu, mu, 0.5 - delta]),
            ("L_1", [mu, -mu, 0.5 + delta]),
            ("L_2", [0.5 - delta, 0.5 + delta, -mu]),
            ("R", [0.0, 0.5, 0.0]),
            ("S", [0.5, 0.0, 0.0]),
            ("T", [0.0, 0.0, 0.5]),
            ("W", [0.25, 0.25, 0.25]),
            ("X", [-zeta, zeta, zeta]),
            ("X_1", [zeta, 1.0 - zeta, -zeta]),
            ("Y", [eta, -eta, eta]),
            ("Y_1", [1.0 - eta, eta, -eta]),
            ("Z", [0.5, 0.5, -0.5]),
        ],
        &[
            &[GAMMA, "X", "L", "T", "W", "R", "X_1", "Z", GAMMA, "Y", "S", "W"],
            &["L_1", "Y"],
            &["Y_1", "Z"],
        ],
    )
}

/// C-centred orthorhombic
pub fn orcc(a: f64, b: f64) -> KPath {
    let zeta = (1.0 + a.powi(2) / b.powi(2)) / 4.0;
    KPath::from_tables(
        "ORCC",
        &[
            (GAMMA, ORIGIN),
            ("A", [zeta, zeta, 0.5]),
            ("A_1", [-zeta, 1.0 - zeta, 0.5]),
            ("R", [0.0, 0.5, 0.5]),
            ("S", [0.0, 0.5, 0.0]),
            ("T", [-0.5, 0.5, 0.5]),
            ("X", [zeta, zeta, 0.0]),
            ("X_1", [-zeta, 1.0 - zeta, 0.0]),
            ("Y", [-0.5, 0.5, 0.0]),
            ("Z", [0.0, 0.0, 0.5]),
        ],
        &[
            &[GAMMA, "X", "S", "R", "A", "Z", GAMMA, "Y", "X_1", "A_1", "T", "Y"],
            &["Z", "T"],
        ],
    )
}

/// Hexagonal
pub fn hex() -> KPath {
    KPath::from_tables(
        "HEX",
        &[
            (GAMMA, ORIGIN),
            ("A", [0.0, 0.0, 0.5]),
            ("H", [1.0 / 3.0, 1.0 / 3.0, 0.5]),
            ("K", [1.0 / 3.0, 1.0 / 3.0, 0.0]),
            ("L", [0.5, 0.0, 0.5]),
            ("M", [0.5, 0.0, 0.0]),
        ],
        &[
            &[GAMMA, "M", "K", GAMMA, "A", "L", "H", "A"],
            &["L", "M"],
            &["K", "H"],
        ],
    )
}

/// Rhombohedral with alpha < 90°
pub fn rhl1(alpha: f64) -> KPath {
    let eta = (1.0 + 4.0 * alpha.cos()) / (2.0 + 4.0 * alpha.cos());
    let nu = 3.0 / 4.0 - eta / 2.0;
    KPath::from_tables(
        "RHL1",
        &[
            (GAMMA, ORIGIN),
            ("B", [eta, 0.5, 1.0 - eta]),
            ("B_1", [0.5, 1.0 - eta, eta - 1.0]),
            ("F", [0.5, 0.5, 0.0]),
            ("L", [0.5, 0.0, 0.0]),
            ("L_1", [0.0, 0.0, -0.5]),
            ("P", [eta, nu, nu]),
            ("P_1", [1.0 - nu, 1.0 - nu, 1.0 - eta]),
            ("P_2", [nu, nu, eta - 1.0]),
            ("Q", [1.0 - nu, nu, 0.0]),
            ("X", [nu, 0.0, -nu]),
            ("Z", [0.5, 0.5, 0.5]),
        ],
        &[
            &[GAMMA, "L", "B_1"],
            &["B", "Z", GAMMA, "X"],
            &["Q", "F", "P_1", "Z"],
            &["L", "P"],
        ],
    )
}

/// Rhombohedral with alpha >= 90°
pub fn rhl2(alpha: f64) -> KPath {
    let eta = 1.0 / (2.0 * (alpha / 2.0).tan().powi(2));
    let nu = 3.0 / 4.0 - eta / 2.0;
    KPath::from_tables(
        "RHL2",
        &[
            (GAMMA, ORIGIN),
            ("F", [0.5, -0.5, 0.0]),
            ("L", [0.5, 0.0, 0.0]),
            ("P", [1.0 - nu, -nu, 1.0 - nu]),
            ("P_1", [nu, nu - 1.0, nu - 1.0]),
            ("Q", [eta, eta, eta]),
            ("Q_1", [1.0 - eta, -eta, -eta]),
            ("Z", [0.5, -0.5, 0.5]),
        ],
        &[&[GAMMA, "P", "Z", "Q", GAMMA, "F", "P_1", "Q_1", "L", "Z"]],
    )
}

/// Simple monoclinic, alpha being the angle between b and c
pub fn mcl(b: f64, c: f64, alpha: f64) -> KPath {
    let eta = (1.0 - b * alpha.cos() / c) / (2.0 * alpha.sin().powi(2));
    let nu = 0.5 - eta * c * alpha.cos() / b;
    KPath::from_tables(
        "MCL",
        &[
            (GAMMA, ORIGIN),
            ("A", [0.5, 0.5, 0.0]),
            ("C", [0.0, 0.5, 0.5]),
            ("D", [0.5, 0.0, 0.5]),
            ("D_1", [0.5, 0.5, -0.5]),
            ("E", [0.5, 0.5, 0.5]),
            ("H", [0.0, eta, 1.0 - nu]),
            ("H_1", [0.0, 1.0 - eta, nu]),
            ("H_2", [0.0, eta, -nu]),
            ("M", [0.5, eta, 1.0 - nu]),
            ("M_1", [0.5, 1.0 - eta, nu]),
            ("M_2", [0.5, eta, -nu]),
            ("X", [0.0, 0.5, 0.0]),
            ("Y", [0.0, 0.0, 0.5]),
            ("Y_1", [0.0, 0.0, -0.5]),
            ("Z", [0.5, 0.0, 0.0]),
        ],
        &[
            &[GAMMA, "Y", "H", "C", "E", "M_1", "A", "X", "H_1"],
            &["M", "D", "Z"],
            &["Y", "D"],
        ],
    )
}

// MCLC1 and MCLC2 share one table of points
fn mclc12_points(name: &str, a: f64, b: f64, c: f64, alpha: f64, segments: &[&[&str]]) -> KPath {
    let zeta = (2.0 - b * alpha.cos() / c) / (4.0 * alpha.sin().powi(2));
    let eta = 0.5 + 2.0 * zeta * c * alpha.cos() / b;
    let psi = 0.75 - a.powi(2) / (4.0 * b.powi(2) * alpha.sin().powi(2));
    let phi = psi + (0.75 - psi) * b * alpha.cos() / c;
    KPath::from_tables(
        name,
        &[
            (GAMMA, ORIGIN),
            ("N", [0.5, 0.0, 0.0]),
            ("N_1", [0.0, -0.5, 0.0]),
            ("F", [1.0 - zeta, 1.0 - zeta, 1.0 - eta]),
            ("F_1", [zeta, zeta, eta]),
            ("F_2", [-zeta, -zeta, 1.0 - eta]),
            ("F_3", [1.0 - zeta, -zeta, 1.0 - eta]),
            ("I", [phi, 1.0 - phi, 0.5]),
            ("I_1", [1.0 - phi, phi - 1.0, 0.5]),
            ("L", [0.5, 0.5, 0.5]),
            ("M", [0.5, 0.0, 0.5]),
            ("X", [1.0 - psi, psi - 1.0, 0.0]),
            ("X_1", [psi, 1.0 - psi, 0.0]),
            ("X_2", [psi - 1.0, -psi, 0.0]),
            ("Y", [0.5, 0.5, 0.0]),
            ("Y_1", [-0.5, -0.5, 0.0]),
            ("Z", [0.0, 0.0, 0.5]),
        ],
        segments,
    )
}

/// C-centred monoclinic with reciprocal gamma > 90°
pub fn mclc1(a: f64, b: f64, c: f64, alpha: f64) -> KPath {
    mclc12_points(
        "MCLC1",
        a,
        b,
        c,
        alpha,
        &[
            &[GAMMA, "Y", "F", "L", "I"],
            &["I_1", "Z", "F_1"],
            &["Y", "X_1"],
            &["X", GAMMA, "N"],
            &["M", GAMMA],
        ],
    )
}

/// C-centred monoclinic with reciprocal gamma = 90°
pub fn mclc2(a: f64, b: f64, c: f64, alpha: f64) -> KPath {
    mclc12_points(
        "MCLC2",
        a,
        b,
        c,
        alpha,
        &[&[GAMMA, "Y", "F", "L", "I"], &["I_1", "Z", "F_1"], &["N", GAMMA, "M"]],
    )
}

// MCLC3 and MCLC4 share one table of points
fn mclc34_points(name: &str, a: f64, b: f64, c: f64, alpha: f64, segments: &[&[&str]]) -> KPath {
    let mu = (1.0 + b.powi(2) / a.powi(2)) / 4.0;
    let delta = b * c * alpha.cos() / (2.0 * a.powi(2));
    let zeta = mu - 0.25 + (1.0 - b * alpha.cos() / c) / (4.0 * alpha.sin().powi(2));
    let eta = 0.5 + 2.0 * zeta * c * alpha.cos() / b;
    let phi = 1.0 + zeta - 2.0 * mu;
    let psi = eta - 2.0 * delta;
    KPath::from_tables(
        name,
        &[
            (GAMMA, ORIGIN),
            ("F", [1.0 - phi, 1.0 - phi, 1.0 - psi]),
            ("F_1", [phi, phi - 1.0, psi]),
            ("F_2", [1.0 - phi, -phi, 1.0 - psi]),
            ("H", [zeta, zeta, eta]),
            ("H_1", [1.0 - zeta, -zeta, 1.0 - eta]),
            ("H_2", [-zeta, -zeta, 1.0 - eta]),
            ("I", [0.5, -0.5, 0.5]),
            ("M", [0.5, 0.0, 0.5]),
            ("N", [0.5, 0.0, 0.0]),
            ("N_1", [0.0, -0.5, 0.0]),
            ("X", [0.5, -0.5, 0.0]),
            ("Y", [mu, mu, delta]),
            ("Y_1", [1.0 - mu, -mu, -delta]),
            ("Y_2", [-mu, -mu, -delta]),
            ("Y_3", [mu, mu - 1.0, delta]),
            ("Z", [0.0, 0.0, 0.5]),
        ],
        segments,
    )
}

/// C-centred monoclinic, reciprocal gamma < 90°, ratio < 1
pub fn mclc3(a: f64, b: f64, c: f64, alpha: f64) -> KPath {
    mclc34_points(
        "MCLC3",
        a,
        b,
        c,
        alpha,
        &[
            &[GAMMA, "Y", "F", "H", "Z", "I", "F_1"],
            &["H_1", "Y_1", "X", GAMMA, "N"],
            &["M", GAMMA],
        ],
    )
}

/// C-centred monoclinic, reciprocal gamma < 90°, ratio = 1
pub fn mclc4(a: f64, b: f64, c: f64, alpha: f64) -> KPath {
    mclc34_points(
        "MCLC4",
        a,
        b,
        c,
        alpha,
        &[
            &[GAMMA, "Y", "F", "H", "Z", "I"],
            &["H_1", "Y_1", "X", GAMMA, "N"],
            &["M", GAMMA],
        ],
    )
}

/// C-centred monoclinic, reciprocal gamma < 90°, ratio > 1
pub fn mclc5(a: f64, b: f64, c: f64, alpha: f64) -> KPath {
    let zeta = (b.powi(2) / a.powi(2) + (1.0 - b * alpha.cos() / c) / alpha.sin().powi(2)) / 4.0;
    let eta = 0.5 + 2.0 * zeta * c * alpha.cos() / b;
    let mu = eta / 2.0 + b.powi(2) / (4.0 * a.powi(2)) - b * c * alpha.cos() / (2.0 * a.powi(2));
    let nu = 2.0 * mu - zeta;
    let rho = 1.0 - zeta * a.powi(2) / b.powi(2);
    let omega = (4.0 * nu - 1.0 - b.powi(2) * alpha.sin().powi(2) / a.powi(2)) * c / (2.0 * b * alpha.cos());
    let delta = zeta * c * alpha.cos() / b + omega / 2.0 - 0.25;
    KPath::from_tables(
        "MCLC5",
        &[
            (GAMMA, ORIGIN),
            ("F", [nu, nu, omega]),
            ("F_1", [1.0 - nu, 1.0 - nu, 1.0 - omega]),
            ("F_2", [nu, nu - 1.0, omega]),
            ("H", [zeta, zeta, eta]),
            ("H_1", [1.0 - zeta, -zeta, 1.0 - eta]),
            ("H_2", [-zeta, -zeta, 1.0 - eta]),
            ("I", [rho, 1.0 - rho, 0.5]),
            ("I_1", [1.0 - rho, rho - 1.0, 0.5]),
            ("L", [0.5, 0.5, 0.5]),
            ("M", [0.5, 0.0, 0.5]),
            ("N", [0.5, 0.0, 0.0]),
            ("N_1", [0.0, -0.5, 0.0]),
            ("X", [0.5, -0.5, 0.0]),
            ("Y", [mu, mu, delta]),
            ("Y_1", [1.0 - mu, -mu, -delta]),
            ("Y_2", [-mu, -mu, -delta]),
            ("Y_3", [mu, mu - 1.0, delta]),
            ("Z", [0.0, 0.0, 0.5]),
        ],
        &[
            &[GAMMA, "Y", "F", "L", "I"],
            &["I_1", "Z", "H", "F_1"],
            &["H_1", "Y_1", "X", GAMMA, "N"],
            &["M", GAMMA],
        ],
    )
}

const TRICLINIC_PATH: &[&[&str]] = &[&["X", GAMMA, "Y"], &["L", GAMMA, "Z"], &["N", GAMMA, "M"], &["R", GAMMA]];

/// Triclinic with all reciprocal angles obtuse (or two obtuse and one right)
pub fn tri1a() -> KPath {
    KPath::from_tables(
        "TRI1a",
        &[
            (GAMMA, ORIGIN),
            ("L", [0.5, 0.5, 0.0]),
            ("M", [0.0, 0.5, 0.5]),
            ("N", [0.5, 0.0, 0.5]),
            ("R", [0.5, 0.5, 0.5]),
            ("X", [0.5, 0.0, 0.0]),
            ("Y", [0.0, 0.5, 0.0]),
            ("Z", [0.0, 0.0, 0.5]),
        ],
        TRICLINIC_PATH,
    )
}

/// Triclinic with all reciprocal angles acute (or two acute and one right)
pub fn tri1b() -> KPath {
    KPath::from_tables(
        "TRI1b",
        &[
            (GAMMA, ORIGIN),
            ("L", [0.5, -0.5, 0.0]),
            ("M", [0.0, 0.0, 0.5]),
            ("N", [-0.5, -0.5, 0.5]),
            ("R", [0.0, -0.5, 0.5]),
            ("X", [0.0, -0.5, 0.0]),
            ("Y", [0.5, 0.0, 0.0]),
            ("Z", [-0.5, 0.0, 0.5]),
        ],
        TRICLINIC_PATH,
    )
}
