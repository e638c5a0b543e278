//! Ideal-gas part of a process (T1, P1) -> (T2, P2).
//!
//! Temperature integrals of Cv, Cp, Cp/T and of the statistical entropy are evaluated by
//! adaptive quadrature, the pressure terms in closed form:
//! - Δu = ∫Cv dT
//! - Δh = ∫Cp dT
//! - Δs = ∫Cp/T dT - R·ln(P2/P1)
//! - Δg = -∫S(T, ν1) dT + R·T2·ln(P2/P1), entropy taken along the path at the fixed volume ν1
//! - Δv = R·T2/P2 - R·T1/P1
use super::R;
use super::errors::{RealGasError, ensure_finite, ensure_positive};
use super::heat_capacity::HeatCapacity;
use super::quadrature::{QuadratureConfig, integrate};
use super::state::{PropertyChange, State};
use super::statistical_entropy::molar_entropy;
use super::substance::Substance;
use log::info;
use serde::{Deserialize, Serialize};

/// Ideal-gas property change with the integrals it was assembled from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealGasChange {
    pub change: PropertyChange,
    /// ∫Cp dT, J/mol
    pub cp_integral: f64,
    /// ∫Cp/T dT, J/(mol·K)
    pub cp_over_t_integral: f64,
    /// ∫S(T, ν1) dT, J/mol
    pub entropy_integral: f64,
    /// ln(P2/P1)
    pub ln_pressure_ratio: f64,
}

/// ln(P2/P1), exactly zero for equal pressures
#[allow(non_snake_case)]
fn ln_pressure_ratio(P1: f64, P2: f64) -> f64 {
    if P1 == P2 { 0.0 } else { (P2 / P1).ln() }
}

/// Ideal-gas changes between (T1, P1) and (T2, P2); `nu1` is the molar volume (m³/mol)
/// at which the entropy is integrated along the temperature path.
#[allow(non_snake_case)]
pub fn ideal_gas_change(
    T1: f64,
    P1: f64,
    T2: f64,
    P2: f64,
    nu1: f64,
    substance: &Substance,
    config: &QuadratureConfig,
) -> Result<IdealGasChange, RealGasError> {
    ensure_positive("temperature T1", T1, "ideal-gas integration, state 1")?;
    ensure_positive("temperature T2", T2, "ideal-gas integration, state 2")?;
    ensure_positive("pressure P1", P1, "ideal-gas integration, state 1")?;
    ensure_positive("pressure P2", P2, "ideal-gas integration, state 2")?;
    ensure_positive("molar volume nu1", nu1, "ideal-gas entropy path")?;

    let cp = substance.cp();
    let stat_mech = substance.stat_mech();

    let cv_integral = integrate(|T| cp.Cv(T), T1, T2, config, "integral of Cv dT")?.value;
    let cp_integral = integrate(|T| cp.Cp(T), T1, T2, config, "integral of Cp dT")?.value;
    let cp_over_t_integral =
        integrate(|T| Ok(cp.Cp(T)? / T), T1, T2, config, "integral of Cp/T dT")?.value;
    let entropy_integral = integrate(
        |T| molar_entropy(T, nu1, stat_mech),
        T1,
        T2,
        config,
        "integral of S(T, nu1) dT",
    )?
    .value;

    let ln_p = ln_pressure_ratio(P1, P2);
    let ds = cp_over_t_integral - R * ln_p;
    let dg = -entropy_integral + R * T2 * ln_p;
    let dv = R * T2 / P2 - R * T1 / P1;

    let context = format!(
        "ideal-gas change of {} from ({} K, {} Pa) to ({} K, {} Pa)",
        substance.name(),
        T1,
        P1,
        T2,
        P2
    );
    let change = PropertyChange::new(
        ensure_finite("du_ig", cv_integral, &context)?,
        ensure_finite("dh_ig", cp_integral, &context)?,
        ensure_finite("ds_ig", ds, &context)?,
        ensure_finite("dg_ig", dg, &context)?,
        ensure_finite("dv_ig", dv, &context)?,
    );
    info!("{}: {:?}", context, change);

    Ok(IdealGasChange {
        change,
        cp_integral,
        cp_over_t_integral,
        entropy_integral,
        ln_pressure_ratio: ln_p,
    })
}

/// Ideal-gas changes between two states, each at its ideal-gas pressure R·T/ν
pub fn ideal_gas_change_between(
    state1: &State,
    state2: &State,
    substance: &Substance,
    config: &QuadratureConfig,
) -> Result<IdealGasChange, RealGasError> {
    ideal_gas_change(
        state1.T(),
        state1.ideal_pressure(),
        state2.T(),
        state2.ideal_pressure(),
        state1.nu(),
        substance,
        config,
    )
}
