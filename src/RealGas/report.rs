//! # Comparison report
//!
//! Formatted tables for a [`ProcessResult`]: the two states (pressures shown in bar) and the
//! ideal-gas, departure and total contributions of every property next to literature
//! values (e.g. differences read from NIST tables) when those are supplied.
use super::process::ProcessResult;
use super::state::PropertyChange;
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};

const PA_PER_BAR: f64 = 1e5;

/// Literature property changes for the same process, any of them may be missing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LiteratureValues {
    pub du: Option<f64>,
    pub dh: Option<f64>,
    pub ds: Option<f64>,
    pub dg: Option<f64>,
    pub dv: Option<f64>,
    /// where the numbers come from
    #[serde(default)]
    pub source: Option<String>,
}

impl LiteratureValues {
    fn values(&self) -> [Option<f64>; 5] {
        [self.du, self.dh, self.ds, self.dg, self.dv]
    }
}

/// relative deviation of `computed` from `reference`, percent
pub fn deviation_percent(computed: f64, reference: f64) -> Option<f64> {
    if reference == 0.0 {
        None
    } else {
        Some(100.0 * (computed - reference) / reference.abs())
    }
}

fn fmt_value(x: f64) -> String {
    if x != 0.0 && (x.abs() < 1e-2 || x.abs() >= 1e6) {
        format!("{:.4e}", x)
    } else {
        format!("{:.3}", x)
    }
}

pub fn states_table(result: &ProcessResult) -> Table {
    let mut table = Table::new();
    table.add_row(row![
        "State",
        "T, K",
        "nu, m3/mol",
        "P ideal, bar",
        "P Peng-Robinson, bar",
        "Z"
    ]);
    for (label, state, departure) in [
        ("1", &result.state1, &result.departure1),
        ("2", &result.state2, &result.departure2),
    ] {
        table.add_row(row![
            label,
            format!("{:.2}", state.T()),
            format!("{:.4e}", state.nu()),
            format!("{:.3}", state.ideal_pressure() / PA_PER_BAR),
            format!("{:.3}", departure.P / PA_PER_BAR),
            format!("{:.4}", departure.compressibility())
        ]);
    }
    table
}

pub fn comparison_table(result: &ProcessResult, literature: Option<&LiteratureValues>) -> Table {
    let mut table = Table::new();
    table.add_row(row![
        "Property",
        "Unit",
        "Ideal gas",
        "Departure",
        "Total",
        "Literature",
        "Deviation, %"
    ]);
    let ideal = result.ideal.change.entries();
    let departure = result.departure_change.entries();
    let total = result.total.entries();
    let reference = literature.map(|l| l.values()).unwrap_or([None; 5]);
    for i in 0..5 {
        let (name, total_value, unit) = total[i];
        let (lit, dev) = match reference[i] {
            Some(r) => (
                fmt_value(r),
                deviation_percent(total_value, r)
                    .map(|d| format!("{:.2}", d))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        table.add_row(row![
            name,
            unit,
            fmt_value(ideal[i].1),
            fmt_value(departure[i].1),
            fmt_value(total_value),
            lit,
            dev
        ]);
    }
    table
}

/// Departures of the two states themselves
pub fn departures_table(result: &ProcessResult) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Departure", "State 1", "State 2", "Unit"]);
    let d1: PropertyChange = result.departure1.as_property_change();
    let d2: PropertyChange = result.departure2.as_property_change();
    for ((name, v1, unit), (_, v2, _)) in d1.entries().into_iter().zip(d2.entries()) {
        table.add_row(row![
            format!("{}'", name),
            fmt_value(v1),
            fmt_value(v2),
            unit
        ]);
    }
    table
}

/// Whole report as text
pub fn render_report(
    substance: &str,
    result: &ProcessResult,
    literature: Option<&LiteratureValues>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n=== REAL GAS PROCESS: {} ===\n", substance));
    out.push_str("\nStates:\n");
    out.push_str(&states_table(result).to_string());
    out.push_str("\nDepartures (ideal gas minus real gas):\n");
    out.push_str(&departures_table(result).to_string());
    out.push_str("\nProperty changes 1 -> 2:\n");
    out.push_str(&comparison_table(result, literature).to_string());
    if let Some(source) = literature.and_then(|l| l.source.as_ref()) {
        out.push_str(&format!("Literature: {}\n", source));
    }
    out
}

pub fn print_report(substance: &str, result: &ProcessResult, literature: Option<&LiteratureValues>) {
    println!("{}", render_report(substance, result, literature));
}
