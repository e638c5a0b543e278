///////////////////////TESTS////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::RealGas::R;
    use crate::RealGas::heat_capacity::HeatCapacity;
    use crate::RealGas::ideal_gas::{ideal_gas_change, ideal_gas_change_between};
    use crate::RealGas::quadrature::{QuadratureConfig, integrate};
    use crate::RealGas::state::State;
    use crate::RealGas::statistical_entropy::molar_entropy;
    use crate::RealGas::substance::{Substance, SubstanceLibrary};
    use approx::assert_relative_eq;

    const T1: f64 = 173.15;
    const T2: f64 = 298.15;

    fn methane() -> Substance {
        SubstanceLibrary::builtin()
            .unwrap()
            .get("methane")
            .unwrap()
            .clone()
    }

    fn states() -> (State, State) {
        (
            State::new(T1, 1.0 / 18800.0).unwrap(),
            State::new(T2, 1.0 / 750.0).unwrap(),
        )
    }

    #[test]
    fn test_methane_ideal_gas_change() {
        let (s1, s2) = states();
        let ig = ideal_gas_change_between(&s1, &s2, &methane(), &QuadratureConfig::default())
            .unwrap();
        assert_relative_eq!(ig.change.dh, 4267.88, max_relative = 1e-5);
        assert_relative_eq!(ig.change.ds, 40.77, max_relative = 1e-3);
        assert_relative_eq!(ig.change.dv, 1.2801418e-3, max_relative = 1e-6);
        // Δu = Δh - R·ΔT for the ideal gas
        assert_relative_eq!(ig.change.du, ig.change.dh - R * (T2 - T1), max_relative = 1e-9);
        assert_relative_eq!(ig.change.dg, -22737.1, max_relative = 1e-4);
        assert_relative_eq!(ig.cp_integral, ig.change.dh);
    }

    #[test]
    fn test_closed_form_enthalpy_of_dippr107() {
        // ∫Cp dT = [A·T + B·C·coth(C/T) - D·E·tanh(E/T)] / 1000
        let (a, b, c, d, e) = (0.33298e5, 0.79933e5, 2.0869e3, 0.41602e5, 991.96);
        let h = |t: f64| (a * t + b * c / (c / t).tanh() - d * e * (e / t).tanh()) / 1000.0;
        let ig = ideal_gas_change(T1, 1e5, T2, 1e5, 1e-3, &methane(), &QuadratureConfig::default())
            .unwrap();
        assert_relative_eq!(ig.change.dh, h(T2) - h(T1), max_relative = 1e-9);
    }

    #[test]
    fn test_degenerate_intervals_are_exact_zero() {
        let cfg = QuadratureConfig::default();
        let ig = ideal_gas_change(300.0, 2e5, 300.0, 2e5, 1e-2, &methane(), &cfg).unwrap();
        assert_eq!(ig.change.du, 0.0);
        assert_eq!(ig.change.dh, 0.0);
        assert_eq!(ig.change.ds, 0.0);
        assert_eq!(ig.change.dg, 0.0);
        assert_eq!(ig.change.dv, 0.0);

        // isothermal: only the pressure terms remain
        let ig = ideal_gas_change(300.0, 1e5, 300.0, 2e5, 1e-2, &methane(), &cfg).unwrap();
        assert_eq!(ig.change.dh, 0.0);
        assert_relative_eq!(ig.change.ds, -R * 2.0_f64.ln());
        assert_relative_eq!(ig.change.dg, R * 300.0 * 2.0_f64.ln());

        // isobaric: no logarithmic pressure term
        let ig = ideal_gas_change(300.0, 1e5, 400.0, 1e5, 1e-2, &methane(), &cfg).unwrap();
        assert_eq!(ig.ln_pressure_ratio, 0.0);
        assert_relative_eq!(ig.change.ds, ig.cp_over_t_integral);
    }

    #[test]
    fn test_invalid_pressures_fail() {
        let cfg = QuadratureConfig::default();
        let err = ideal_gas_change(300.0, 0.0, 400.0, 1e5, 1e-2, &methane(), &cfg).unwrap_err();
        assert!(err.is_domain_error());
        assert!(err.to_string().contains("P1"));
        let err = ideal_gas_change(300.0, 1e5, 400.0, -1e5, 1e-2, &methane(), &cfg).unwrap_err();
        assert!(err.to_string().contains("P2"));
        assert!(ideal_gas_change(-1.0, 1e5, 400.0, 1e5, 1e-2, &methane(), &cfg).is_err());
    }

    #[test]
    fn test_gibbs_uses_entropy_at_fixed_first_volume() {
        let cfg = QuadratureConfig::default();
        let substance = methane();
        let nu1 = 1.0 / 18800.0;
        let ig = ideal_gas_change(T1, 2e6, T2, 1e6, nu1, &substance, &cfg).unwrap();
        let s_integral = integrate(
            |t| molar_entropy(t, nu1, substance.stat_mech()),
            T1,
            T2,
            &cfg,
            "check",
        )
        .unwrap()
        .value;
        assert_relative_eq!(ig.entropy_integral, s_integral, max_relative = 1e-12);
        assert_relative_eq!(
            ig.change.dg,
            -s_integral + R * T2 * 0.5_f64.ln(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_volume_change_closed_form_matches_integration() {
        // path (T1, P1) -> (T2, P1) -> (T2, P2): ∂v/∂T|P = R/P, ∂v/∂P|T = -R·T/P²
        let (s1, s2) = states();
        let (p1, p2) = (s1.ideal_pressure(), s2.ideal_pressure());
        let cfg = QuadratureConfig::default();
        let isobaric = integrate(|_t| Ok(R / p1), T1, T2, &cfg, "dv/dT").unwrap();
        let isothermal = integrate(|p| Ok(-R * T2 / (p * p)), p1, p2, &cfg, "dv/dP").unwrap();
        let ig = ideal_gas_change_between(&s1, &s2, &methane(), &cfg).unwrap();
        assert_relative_eq!(
            isobaric.value + isothermal.value,
            ig.change.dv,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_reversed_path_of_ideal_gas() {
        let cfg = QuadratureConfig::default();
        let forward = ideal_gas_change(T1, 1e5, T2, 3e5, 1e-2, &methane(), &cfg).unwrap();
        let backward = ideal_gas_change(T2, 3e5, T1, 1e5, 1e-2, &methane(), &cfg).unwrap();
        assert_relative_eq!(forward.change.du, -backward.change.du, max_relative = 1e-10);
        assert_relative_eq!(forward.change.dh, -backward.change.dh, max_relative = 1e-10);
        assert_relative_eq!(forward.change.ds, -backward.change.ds, max_relative = 1e-10);
        assert_relative_eq!(forward.change.dv, -backward.change.dv, max_relative = 1e-10);
    }

    #[test]
    fn test_cv_integral_uses_heat_capacity() {
        let substance = methane();
        let cfg = QuadratureConfig::default();
        let ig = ideal_gas_change(300.0, 1e5, 301.0, 1e5, 1e-2, &substance, &cfg).unwrap();
        let cv_mid = substance.cp().Cv(300.5).unwrap();
        assert_relative_eq!(ig.change.du, cv_mid, max_relative = 1e-5);
    }
}
