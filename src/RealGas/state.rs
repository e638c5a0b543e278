use super::R;
use super::errors::{RealGasError, ensure_positive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Thermodynamic state of one mole of gas given by temperature and molar volume.
/// Pressure is always derived from these two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct State {
    /// K
    T: f64,
    /// m³/mol
    nu: f64,
}

#[allow(non_snake_case)]
impl State {
    pub fn new(T: f64, nu: f64) -> Result<Self, RealGasError> {
        let context = format!("state T = {} K, nu = {} m3/mol", T, nu);
        ensure_positive("temperature", T, &context)?;
        ensure_positive("molar volume", nu, &context)?;
        Ok(Self { T, nu })
    }

    /// state from temperature and molar density, mol/m³
    pub fn from_density(T: f64, rho: f64) -> Result<Self, RealGasError> {
        let rho = ensure_positive("molar density", rho, &format!("state T = {} K", T))?;
        Self::new(T, 1.0 / rho)
    }

    pub fn T(&self) -> f64 {
        self.T
    }

    pub fn nu(&self) -> f64 {
        self.nu
    }

    /// pressure of the ideal gas at (T, nu), Pa
    pub fn ideal_pressure(&self) -> f64 {
        R * self.T / self.nu
    }

    pub fn describe(&self) -> String {
        format!("T = {} K, nu = {:e} m3/mol", self.T, self.nu)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Change of the five state functions between two states, SI units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyChange {
    /// J/mol
    pub du: f64,
    /// J/mol
    pub dh: f64,
    /// J/(mol·K)
    pub ds: f64,
    /// J/mol
    pub dg: f64,
    /// m³/mol
    pub dv: f64,
}

impl PropertyChange {
    pub fn new(du: f64, dh: f64, ds: f64, dg: f64, dv: f64) -> Self {
        Self { du, dh, ds, dg, dv }
    }

    /// (label, value, unit) for every property, in display order
    pub fn entries(&self) -> [(&'static str, f64, &'static str); 5] {
        [
            ("du", self.du, "J/mol"),
            ("dh", self.dh, "J/mol"),
            ("ds", self.ds, "J/(mol K)"),
            ("dg", self.dg, "J/mol"),
            ("dv", self.dv, "m3/mol"),
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.entries().iter().all(|(_, v, _)| v.is_finite())
    }

    /// largest absolute component, handy for tolerance checks
    pub fn max_abs(&self) -> f64 {
        self.entries()
            .iter()
            .fold(0.0_f64, |acc, (_, v, _)| acc.max(v.abs()))
    }
}

impl Add for PropertyChange {
    type Output = PropertyChange;
    fn add(self, rhs: PropertyChange) -> PropertyChange {
        PropertyChange::new(
            self.du + rhs.du,
            self.dh + rhs.dh,
            self.ds + rhs.ds,
            self.dg + rhs.dg,
            self.dv + rhs.dv,
        )
    }
}

impl Sub for PropertyChange {
    type Output = PropertyChange;
    fn sub(self, rhs: PropertyChange) -> PropertyChange {
        self + (-rhs)
    }
}

impl Neg for PropertyChange {
    type Output = PropertyChange;
    fn neg(self) -> PropertyChange {
        PropertyChange::new(-self.du, -self.dh, -self.ds, -self.dg, -self.dv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_state_validation() {
        assert!(State::new(300.0, 1e-3).is_ok());
        let err = State::new(0.0, 1e-3).unwrap_err();
        assert!(err.is_domain_error());
        assert!(err.to_string().contains("temperature"));
        let err = State::new(300.0, -1e-3).unwrap_err();
        assert!(err.to_string().contains("molar volume"));
        assert!(State::from_density(300.0, 0.0).is_err());
    }

    #[test]
    fn test_ideal_pressure() {
        let s = State::from_density(298.15, 750.0).unwrap();
        assert_relative_eq!(s.nu(), 1.0 / 750.0);
        assert_relative_eq!(s.ideal_pressure(), R * 298.15 * 750.0, max_relative = 1e-14);
    }

    #[test]
    fn test_property_change_algebra() {
        let a = PropertyChange::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let b = PropertyChange::new(0.5, 0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b - b, a);
        assert_eq!((-a).dh, -2.0);
        assert_eq!(a.max_abs(), 5.0);
        assert!(a.is_finite());
        assert_eq!(PropertyChange::default().max_abs(), 0.0);
    }
}
