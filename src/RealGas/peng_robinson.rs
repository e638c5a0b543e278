//! # Peng-Robinson departure functions
//!
//! For a state (T, ν) the PR equation of state
//! ```text
//! P = R·T/(ν - b) - a·α(T)/(ν² + 2bν - b²)
//! a = 0.45724·R²·Tc²/Pc,  b = 0.07780·R·Tc/Pc
//! κ = 0.37464 + 1.54226ω - 0.26992ω²,  α(T) = (1 + κ(1 - sqrt(T/Tc)))²
//! ```
//! gives the departures of the real fluid from the ideal gas at the same (T, ν),
//! counted as *ideal minus real*:
//! ```text
//! Δh' = -R·T·b/(ν-b) + a·α·ν/(ν²+2bν-b²) - a·α/(2^{3/2}·b)·[1 + κ·sqrt(T/(α·Tc))]·L
//! Δs' = R·ln[R·T/((ν-b)·P)] - a·κ/(4b)·sqrt(2α/(T·Tc))·L
//! Δv' = R·T/P - ν
//! Δu' = Δh' - P·Δv',  Δg' = Δh' - T·Δs'
//! L = ln[(ν + (1-√2)b)/(ν + (1+√2)b)]
//! ```
//! The volume is an input: no cubic root finding is done, states with ν <= b are rejected.
use super::R;
use super::errors::{RealGasError, ensure_finite, ensure_positive};
use super::state::{PropertyChange, State};
use super::substance::Substance;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;

pub const OMEGA_A: f64 = 0.45724;
pub const OMEGA_B: f64 = 0.07780;
/// logarithm arguments below this are reported as approaching the singularity
const LOG_ARGUMENT_WARNING: f64 = 1e-8;

/// κ(ω) of the 1976 Peng-Robinson alpha function
pub fn kappa(omega: f64) -> f64 {
    0.37464 + 1.54226 * omega - 0.26992 * omega * omega
}

/// Substance constants of the PR equation, computed once per substance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct PengRobinsonParameters {
    /// attraction parameter, Pa·m⁶/mol²
    a: f64,
    /// co-volume, m³/mol
    b: f64,
    kappa: f64,
    /// critical temperature, K
    Tc: f64,
}

/// Departures of one state, ideal-gas value minus real value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct DepartureResult {
    pub T: f64,
    pub nu: f64,
    /// PR pressure of the state, Pa
    pub P: f64,
    /// J/mol
    pub dh: f64,
    /// J/(mol·K)
    pub ds: f64,
    /// m³/mol
    pub dv: f64,
    /// J/mol
    pub du: f64,
    /// J/mol
    pub dg: f64,
}

impl DepartureResult {
    pub fn as_property_change(&self) -> PropertyChange {
        PropertyChange::new(self.du, self.dh, self.ds, self.dg, self.dv)
    }

    /// compressibility factor Z = P·ν/(R·T)
    pub fn compressibility(&self) -> f64 {
        self.P * self.nu / (R * self.T)
    }
}

/// Departure contribution of a process 1 -> 2: departure(1) - departure(2).
/// With departures counted as ideal minus real this is
/// [j(2) - j(1)]_real - [j(2) - j(1)]_ideal.
pub fn departure_change(state1: &DepartureResult, state2: &DepartureResult) -> PropertyChange {
    state1.as_property_change() - state2.as_property_change()
}

#[allow(non_snake_case)]
impl PengRobinsonParameters {
    pub fn from_substance(substance: &Substance) -> Self {
        let (Tc, Pc) = (substance.Tc(), substance.Pc());
        Self {
            a: OMEGA_A * R * R * Tc * Tc / Pc,
            b: OMEGA_B * R * Tc / Pc,
            kappa: kappa(substance.omega()),
            Tc,
        }
    }

    /// Parameters of a hypothetical fluid. `a = b = 0` is the ideal gas.
    pub fn from_raw(a: f64, b: f64, kappa: f64, Tc: f64) -> Result<Self, RealGasError> {
        let context = "Peng-Robinson parameters";
        if !(a.is_finite() && a >= 0.0) {
            return Err(RealGasError::non_positive("attraction parameter a", a, context));
        }
        if !(b.is_finite() && b >= 0.0) {
            return Err(RealGasError::non_positive("co-volume b", b, context));
        }
        ensure_finite("kappa", kappa, context)?;
        ensure_positive("critical temperature", Tc, context)?;
        Ok(Self { a, b, kappa, Tc })
    }

    pub fn a(&self) -> f64 {
        self.a
    }
    pub fn b(&self) -> f64 {
        self.b
    }
    pub fn kappa(&self) -> f64 {
        self.kappa
    }
    pub fn Tc(&self) -> f64 {
        self.Tc
    }

    /// α(T) = (1 + κ(1 - sqrt(T/Tc)))²
    pub fn alpha(&self, T: f64) -> f64 {
        (1.0 + self.kappa * (1.0 - (T / self.Tc).sqrt())).powi(2)
    }

    /// ν² + 2bν - b²
    fn attraction_denominator(&self, nu: f64) -> f64 {
        nu * nu + 2.0 * self.b * nu - self.b * self.b
    }

    fn check_volume(&self, T: f64, nu: f64) -> Result<(), RealGasError> {
        let context = format!("Peng-Robinson state T = {} K, nu = {:e} m3/mol", T, nu);
        ensure_positive("temperature", T, &context)?;
        ensure_positive("molar volume", nu, &context)?;
        if nu <= self.b {
            return Err(RealGasError::VolumeBelowCovolume {
                volume: nu,
                covolume: self.b,
                context,
            });
        }
        Ok(())
    }

    /// PR pressure at (T, ν), Pa. Fails for ν <= b.
    pub fn pressure(&self, T: f64, nu: f64) -> Result<f64, RealGasError> {
        self.check_volume(T, nu)?;
        let P = R * T / (nu - self.b) - self.a * self.alpha(T) / self.attraction_denominator(nu);
        ensure_finite("pressure", P, &format!("T = {} K, nu = {:e} m3/mol", T, nu))
    }

    /// L/b with L = ln[(ν + (1-√2)b)/(ν + (1+√2)b)]; tends to -2√2/ν as b -> 0.
    /// Callers check ν > b, which keeps the ratio above (2-√2)/(2+√2).
    fn log_term_over_b(&self, nu: f64) -> f64 {
        let b = self.b;
        if b == 0.0 {
            return -2.0 * SQRT_2 / nu;
        }
        (-2.0 * SQRT_2 * b / (nu + (1.0 + SQRT_2) * b)).ln_1p() / b
    }

    /// Departure functions at a state
    pub fn departure(&self, state: &State) -> Result<DepartureResult, RealGasError> {
        self.departure_at(state.T(), state.nu())
    }

    pub fn departure_at(&self, T: f64, nu: f64) -> Result<DepartureResult, RealGasError> {
        self.check_volume(T, nu)?;
        let context = format!("departure at T = {} K, nu = {:e} m3/mol", T, nu);
        let (a, b, kappa) = (self.a, self.b, self.kappa);
        let alpha = self.alpha(T);
        let denominator = self.attraction_denominator(nu);
        let P = self.pressure(T, nu)?;

        // R·T/((ν-b)·P) = 1/(1 - y), y = a·α·(ν-b)/(R·T·(ν²+2bν-b²))
        let y = a * alpha * (nu - b) / (R * T * denominator);
        if !(y < 1.0) {
            return Err(RealGasError::invalid_argument(
                "ln",
                "R T/((nu - b) P) in the entropy departure",
                P,
                &format!("{}, non-positive PR pressure", context),
            ));
        }
        if 1.0 - y < LOG_ARGUMENT_WARNING {
            warn!(
                "(nu - b) P / (R T) = {:e} is approaching zero ({})",
                1.0 - y,
                context
            );
        }
        let ln_repulsive = -(-y).ln_1p();

        let log_over_b = self.log_term_over_b(nu);

        // sqrt(T/(α·Tc)) and sqrt(2α/(T·Tc))
        if a > 0.0 && !(alpha > 0.0) {
            return Err(RealGasError::invalid_argument(
                "sqrt",
                "T/(alpha Tc) in the enthalpy departure",
                alpha,
                &context,
            ));
        }
        let (sqrt_h, sqrt_s) = if a > 0.0 {
            ((T / (alpha * self.Tc)).sqrt(), (2.0 * alpha / (T * self.Tc)).sqrt())
        } else {
            (0.0, 0.0)
        };

        let dh = -R * T * b / (nu - b) + a * alpha * nu / denominator
            - a * alpha / 2.0_f64.powf(1.5) * (1.0 + kappa * sqrt_h) * log_over_b;
        let ds = R * ln_repulsive - a * kappa / 4.0 * sqrt_s * log_over_b;
        let dv = R * T / P - nu;
        let du = dh - P * dv;
        let dg = dh - T * ds;

        let result = DepartureResult {
            T,
            nu,
            P,
            dh: ensure_finite("enthalpy departure", dh, &context)?,
            ds: ensure_finite("entropy departure", ds, &context)?,
            dv: ensure_finite("volume departure", dv, &context)?,
            du: ensure_finite("internal energy departure", du, &context)?,
            dg: ensure_finite("Gibbs energy departure", dg, &context)?,
        };
        debug!("{}: {:?}", context, result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RealGas::substance::SubstanceLibrary;
    use approx::assert_relative_eq;

    fn methane_pr() -> PengRobinsonParameters {
        let lib = SubstanceLibrary::builtin().unwrap();
        PengRobinsonParameters::from_substance(lib.get("methane").unwrap())
    }

    #[test]
    fn test_methane_parameters() {
        let pr = methane_pr();
        assert_relative_eq!(pr.b(), 2.6724154e-5, max_relative = 1e-7);
        assert_relative_eq!(pr.a(), 0.45724 * R * R * 190.0 * 190.0 / 4.599e6, max_relative = 1e-14);
        assert_relative_eq!(pr.kappa(), 0.37464 + 1.54226 * 0.012 - 0.26992 * 0.012 * 0.012);
        assert_relative_eq!(pr.alpha(190.0), 1.0);
    }

    #[test]
    fn test_pressure_of_methane_states() {
        let pr = methane_pr();
        assert_relative_eq!(
            pr.pressure(173.15, 1.0 / 18800.0).unwrap(),
            2550175.28,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            pr.pressure(298.15, 1.0 / 750.0).unwrap(),
            1788349.54,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_volume_below_covolume_is_a_domain_error() {
        let pr = methane_pr();
        for nu in [pr.b(), 0.5 * pr.b()] {
            let err = pr.pressure(300.0, nu).unwrap_err();
            assert!(err.is_domain_error());
            assert!(matches!(err, RealGasError::VolumeBelowCovolume { .. }));
        }
        assert!(pr.departure_at(300.0, pr.b()).is_err());
    }

    #[test]
    fn test_negative_pressure_is_reported() {
        let pr = methane_pr();
        // dense liquid-like volume at low temperature: PR pressure is negative
        let nu = 1.3 * pr.b();
        let p = pr.pressure(100.0, nu).unwrap();
        assert!(p < 0.0);
        let err = pr.departure_at(100.0, nu).unwrap_err();
        assert!(err.is_numerical_instability());
    }

    #[test]
    fn test_log_term_limit() {
        let pr = PengRobinsonParameters::from_raw(0.0, 0.0, 0.4, 190.0).unwrap();
        let nu = 1e-3;
        let small = PengRobinsonParameters::from_raw(0.0, 1e-12, 0.4, 190.0).unwrap();
        assert_relative_eq!(
            pr.log_term_over_b(nu),
            small.log_term_over_b(nu),
            max_relative = 1e-8
        );
    }

    #[test]
    fn test_log_term_bounded_just_above_covolume() {
        let pr = methane_pr();
        let b = pr.b();
        // ν -> b+ gives L -> ln((2-√2)/(2+√2)), no singularity of the logarithm
        let limit = ((2.0 - SQRT_2) / (2.0 + SQRT_2)).ln() / b;
        let near = pr.log_term_over_b(b * (1.0 + 1e-12));
        assert!(near.is_finite());
        assert_relative_eq!(near, limit, max_relative = 1e-9);
    }

    #[test]
    fn test_from_raw_validation() {
        assert!(PengRobinsonParameters::from_raw(-1.0, 0.0, 0.4, 190.0).is_err());
        assert!(PengRobinsonParameters::from_raw(0.0, -1.0, 0.4, 190.0).is_err());
        assert!(PengRobinsonParameters::from_raw(0.0, 0.0, f64::NAN, 190.0).is_err());
        assert!(PengRobinsonParameters::from_raw(0.0, 0.0, 0.4, 0.0).is_err());
    }

    #[test]
    fn test_compressibility() {
        let pr = methane_pr();
        let d = pr.departure_at(298.15, 1.0 / 750.0).unwrap();
        assert_relative_eq!(d.compressibility(), d.P / (750.0 * R * 298.15), max_relative = 1e-12);
        assert!(d.compressibility() < 1.0);
    }
}
