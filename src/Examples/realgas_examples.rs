use crate::RealGas::R;
use crate::RealGas::errors::RealGasError;
use crate::RealGas::heat_capacity::HeatCapacity;
use crate::RealGas::peng_robinson::PengRobinsonParameters;
use crate::RealGas::process::RealGasProcess;
use crate::RealGas::report::{LiteratureValues, print_report};
use crate::RealGas::state::State;
use crate::RealGas::statistical_entropy::entropy_contributions;
use crate::settings::Settings;
use log::info;
use prettytable::{Table, row};

const P_STANDARD: f64 = 1e5;

pub fn realgas_examples(task: usize, settings: &Settings) -> Result<(), RealGasError> {
    let library = settings.substance_library()?;
    let config = settings.quadrature();
    let state1 = State::new(173.15, 1.0 / 18800.0)?;
    let state2 = State::new(298.15, 1.0 / 750.0)?;
    match task {
        0 => {
            // methane compressed near its critical point, then heated and expanded
            let methane = library.get("methane")?.clone();
            let process = RealGasProcess::new(methane, config);
            let result = process.evaluate(&state1, &state2)?;
            let reference = LiteratureValues {
                du: Some(9861.4),
                dh: Some(10031.6),
                ds: Some(72.89),
                dg: None,
                dv: Some(1.74e-3),
                source: Some("methane reference scenario".to_string()),
            };
            print_report(process.substance().name(), &result, Some(&reference));
        }
        1 => {
            let mut table = Table::new();
            table.add_row(row![
                "Substance", "du, J/mol", "dh, J/mol", "ds, J/(mol K)", "dg, J/mol", "dv, m3/mol"
            ]);
            for name in library.names() {
                let process = RealGasProcess::new(library.get(&name)?.clone(), config);
                let change = match process.property_change(&state1, &state2) {
                    Ok(change) => change,
                    Err(e) => {
                        info!("{}: {}", name, e);
                        table.add_row(row![name, "-", "-", "-", "-", "-"]);
                        continue;
                    }
                };
                table.add_row(row![
                    name,
                    format!("{:.2}", change.du),
                    format!("{:.2}", change.dh),
                    format!("{:.3}", change.ds),
                    format!("{:.2}", change.dg),
                    format!("{:.4e}", change.dv)
                ]);
            }
            table.printstd();
        }
        2 => {
            // isotherm of methane: PR pressure and compressibility against volume
            let process = RealGasProcess::new(library.get("CH4")?.clone(), config);
            let T = 250.0;
            let mut table = Table::new();
            table.add_row(row!["nu, m3/mol", "P, bar", "Z", "dh', J/mol", "ds', J/(mol K)"]);
            for nu in [5e-5, 1e-4, 2e-4, 5e-4, 1e-3, 1e-2, 1e-1] {
                let d = process.departure(&State::new(T, nu)?)?;
                table.add_row(row![
                    format!("{:.1e}", nu),
                    format!("{:.3}", d.P / 1e5),
                    format!("{:.4}", d.compressibility()),
                    format!("{:.2}", d.dh),
                    format!("{:.4}", d.ds)
                ]);
            }
            table.printstd();
        }
        3 => {
            // the same process for a fluid with a = b = 0 reduces to the ideal gas
            let methane = library.get("methane")?.clone();
            let ideal = PengRobinsonParameters::from_raw(0.0, 0.0, 0.0, methane.Tc())?;
            let real = RealGasProcess::new(methane.clone(), config).evaluate(&state1, &state2)?;
            let limit = RealGasProcess::with_parameters(methane, ideal, config)
                .evaluate(&state1, &state2)?;
            let mut table = Table::new();
            table.add_row(row!["Property", "Peng-Robinson", "a = b = 0", "ideal gas"]);
            for ((name, r, unit), ((_, l, _), (_, i, _))) in real.total.entries().into_iter().zip(
                limit
                    .total
                    .entries()
                    .into_iter()
                    .zip(limit.ideal.change.entries()),
            ) {
                table.add_row(row![
                    format!("{}, {}", name, unit),
                    format!("{:.5e}", r),
                    format!("{:.5e}", l),
                    format!("{:.5e}", i)
                ]);
            }
            table.printstd();
        }
        4 => {
            // entropy of each substance at 298.15 K and 1 bar from its molecular constants
            let T = 298.15;
            let V = R * T / P_STANDARD;
            let mut table = Table::new();
            table.add_row(row![
                "Substance",
                "translational",
                "rotational",
                "vibrational",
                "electronic",
                "total",
                "Cp, J/(mol K)"
            ]);
            for name in library.names() {
                let substance = library.get(&name)?;
                let s = entropy_contributions(T, V, substance.stat_mech())?;
                table.add_row(row![
                    name,
                    format!("{:.3}", s.translational),
                    format!("{:.3}", s.rotational),
                    format!("{:.3}", s.vibrational),
                    format!("{:.3}", s.electronic),
                    format!("{:.3}", s.total()),
                    format!("{:.3}", substance.cp().Cp(T)?)
                ]);
            }
            table.printstd();
        }
        _ => {
            return Err(RealGasError::invalid_argument(
                "realgas_examples",
                "task",
                task as f64,
                "tasks 0..=4 are available",
            ));
        }
    }
    Ok(())
}
