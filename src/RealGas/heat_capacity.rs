//! Ideal-gas isobaric heat capacity correlations.
//!
//! Coefficients are stored the way they are tabulated (DIPPR, Perry's handbook):
//! temperatures in K and heat capacities in J/(kmol·K). Evaluation returns J/(mol·K).
use super::R;
use super::errors::{RealGasError, ensure_finite, ensure_positive};
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// J/kmol -> J/mol
const PER_KMOL: f64 = 1000.0;

#[enum_dispatch]
#[allow(non_snake_case)]
pub trait HeatCapacity {
    /// Cp in J/(mol·K) without checking the temperature
    fn Cp_value(&self, T: f64) -> f64;
    /// checks the coefficients once, when the substance is built
    fn validate(&self) -> Result<(), String>;

    /// isobaric heat capacity, J/(mol·K)
    fn Cp(&self, T: f64) -> Result<f64, RealGasError> {
        let T = ensure_positive("temperature", T, "heat capacity correlation")?;
        ensure_finite("Cp", self.Cp_value(T), &format!("T = {} K", T))
    }
    /// isochoric heat capacity of the ideal gas Cv = Cp - R, J/(mol·K)
    fn Cv(&self, T: f64) -> Result<f64, RealGasError> {
        Ok(self.Cp(T)? - R)
    }
}

/// DIPPR equation 107 (Aly-Lee hyperbolic form)
/// Cp = A + B·((C/T)/sinh(C/T))² + D·((E/T)/cosh(E/T))²
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct Dippr107 {
    pub A: f64,
    pub B: f64,
    /// K
    pub C: f64,
    pub D: f64,
    /// K
    pub E: f64,
}

impl Dippr107 {
    #[allow(non_snake_case)]
    pub fn new(A: f64, B: f64, C: f64, D: f64, E: f64) -> Self {
        Self { A, B, C, D, E }
    }
}

/// (x/sinh x)², equal to 1 at x = 0 and to 0 once sinh overflows
fn x_over_sinh_sq(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (x / x.sinh()).powi(2)
    }
}

fn x_over_cosh_sq(x: f64) -> f64 {
    (x / x.cosh()).powi(2)
}

impl HeatCapacity for Dippr107 {
    #[allow(non_snake_case)]
    fn Cp_value(&self, T: f64) -> f64 {
        let ct = self.C / T;
        let et = self.E / T;
        (self.A + self.B * x_over_sinh_sq(ct) + self.D * x_over_cosh_sq(et)) / PER_KMOL
    }

    fn validate(&self) -> Result<(), String> {
        let all = [self.A, self.B, self.C, self.D, self.E];
        if all.iter().any(|c| !c.is_finite()) {
            return Err(format!("non-finite DIPPR-107 coefficient in {:?}", all));
        }
        if self.C < 0.0 || self.E < 0.0 {
            return Err("DIPPR-107 temperatures C and E must not be negative".to_string());
        }
        Ok(())
    }
}

/// DIPPR equation 100, Cp = A + B·T + C·T² + ... with any number of terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dippr100 {
    pub coeffs: Vec<f64>,
}

impl Dippr100 {
    pub fn new(coeffs: &[f64]) -> Self {
        Self {
            coeffs: coeffs.to_vec(),
        }
    }
}

impl HeatCapacity for Dippr100 {
    #[allow(non_snake_case)]
    fn Cp_value(&self, T: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, c| T * acc + c) / PER_KMOL
    }

    fn validate(&self) -> Result<(), String> {
        if self.coeffs.is_empty() {
            return Err("DIPPR-100 correlation needs at least one coefficient".to_string());
        }
        if self.coeffs.iter().any(|c| !c.is_finite()) {
            return Err(format!("non-finite DIPPR-100 coefficient in {:?}", self.coeffs));
        }
        Ok(())
    }
}

/// Heat capacity correlation of a substance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[enum_dispatch(HeatCapacity)]
pub enum CpCorrelation {
    DIPPR107(Dippr107),
    DIPPR100(Dippr100),
}

impl fmt::Display for CpCorrelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpCorrelation::DIPPR107(c) => write!(
                f,
                "DIPPR-107 (A={}, B={}, C={}, D={}, E={})",
                c.A, c.B, c.C, c.D, c.E
            ),
            CpCorrelation::DIPPR100(c) => write!(f, "DIPPR-100 {:?}", c.coeffs),
        }
    }
}
