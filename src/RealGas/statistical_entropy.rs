//! Absolute molar entropy of an ideal gas from the molecular partition function:
//! S = N·kB·[ln q_trans + ln q_rot + Σ vib_i + ln g0]
//!
//! All terms are summed in logarithmic form, and the vibrational terms use `expm1`/`ln_1p`,
//! so very low temperatures (θv/T of several thousands) give vanishing vibrational
//! contributions instead of overflow.
use super::errors::{RealGasError, ensure_finite, ensure_positive};
use super::substance::{Rotor, StatMechData};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Boltzmann constant, J/K
pub const KB: f64 = 1.380649e-23;
/// Planck constant, J·s
pub const H_PLANCK: f64 = 6.62607015e-34;
/// Avogadro constant, 1/mol
pub const NA: f64 = 6.02214076e23;
/// atomic mass unit, kg
pub const AMU: f64 = 1.66053906660e-27;

/// Entropy split by degrees of freedom, J/(mol·K)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntropyContributions {
    pub translational: f64,
    pub rotational: f64,
    pub vibrational: f64,
    pub electronic: f64,
}

impl EntropyContributions {
    pub fn total(&self) -> f64 {
        self.translational + self.rotational + self.vibrational + self.electronic
    }
}

/// ln of the translational term (2π·m·kB·T/h²)^{3/2}·(V/N)·e^{5/2}
#[allow(non_snake_case)]
fn ln_translational(T: f64, V: f64, molar_mass: f64) -> f64 {
    let m = molar_mass * AMU;
    1.5 * (2.0 * PI * m * KB * T / (H_PLANCK * H_PLANCK)).ln() + (V / NA).ln() + 2.5
}

#[allow(non_snake_case)]
fn ln_rotational(T: f64, sigma: f64, rotor: &Rotor) -> f64 {
    match *rotor {
        // T·e/(σ·θ)
        Rotor::Linear { theta } => (T / (sigma * theta)).ln() + 1.0,
        // (1/σ)·sqrt(π·T³·e³/(θA·θB·θC))
        Rotor::Nonlinear {
            theta_a,
            theta_b,
            theta_c,
        } => {
            -sigma.ln()
                + 0.5 * (PI.ln() + 3.0 * T.ln() + 3.0 - (theta_a * theta_b * theta_c).ln())
        }
    }
}

/// x/(e^x - 1) - ln(1 - e^{-x}) with x = θv/T
pub fn vibrational_mode(x: f64) -> f64 {
    x / x.exp_m1() - (-(-x).exp()).ln_1p()
}

/// Entropy contributions at temperature T (K) and molar volume V (m³/mol)
#[allow(non_snake_case)]
pub fn entropy_contributions(
    T: f64,
    V: f64,
    data: &StatMechData,
) -> Result<EntropyContributions, RealGasError> {
    let context = format!("statistical entropy at T = {} K, V = {:e} m3/mol", T, V);
    ensure_positive("temperature", T, &context)?;
    ensure_positive("molar volume", V, &context)?;
    let r = KB * NA;

    let translational = r * ln_translational(T, V, data.molar_mass);
    let rotational = r * ln_rotational(T, data.symmetry_number, &data.rotor);
    let vibrational = r * data
        .theta_vib
        .iter()
        .map(|theta| vibrational_mode(theta / T))
        .sum::<f64>();
    let electronic = r * data.degeneracy.ln();

    Ok(EntropyContributions {
        translational: ensure_finite("translational entropy", translational, &context)?,
        rotational: ensure_finite("rotational entropy", rotational, &context)?,
        vibrational: ensure_finite("vibrational entropy", vibrational, &context)?,
        electronic,
    })
}

/// Absolute molar entropy of the ideal gas, J/(mol·K)
#[allow(non_snake_case)]
pub fn molar_entropy(T: f64, V: f64, data: &StatMechData) -> Result<f64, RealGasError> {
    Ok(entropy_contributions(T, V, data)?.total())
}
