//! Inspect command implementation.

use anyhow::Result;
use console::style;
use qmeas_ir::{Observable, ObservableIr, QuantumOperator};
use serde::Serialize;

use super::common::load_observable;
use crate::config::Config;

/// Everything `inspect` reports about an observable.
#[derive(Debug, Serialize)]
struct InspectReport {
    label: String,
    qubit_count: usize,
    ascii_symbols: Vec<String>,
    ir: ObservableIr,
    eigenvalues: Vec<f64>,
    basis_rotation_gates: Vec<String>,
}

impl InspectReport {
    fn new(observable: &Observable) -> Self {
        Self {
            label: observable.label(),
            qubit_count: observable.qubit_count(),
            ascii_symbols: observable.ascii_symbols(),
            ir: observable.to_ir(),
            eigenvalues: observable.eigenvalues(),
            basis_rotation_gates: observable
                .basis_rotation_gates()
                .iter()
                .map(|g| g.name().to_string())
                .collect(),
        }
    }
}

/// Execute the inspect command.
pub fn execute(input: &str, format: Option<&str>, config: &Config) -> Result<()> {
    let observable = load_observable(input)?;
    let report = InspectReport::new(&observable);

    match format.unwrap_or(config.format.as_str()).to_lowercase().as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "table" => print_table(&report)?,
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    }
    Ok(())
}

fn print_table(report: &InspectReport) -> Result<()> {
    let eigenvalues: Vec<String> = report.eigenvalues.iter().map(|v| format!("{v:.6}")).collect();

    println!("{}", style(&report.label).cyan().bold());
    println!("  Qubits:      {}", report.qubit_count);
    println!("  Symbols:     {}", report.ascii_symbols.join(", "));
    println!("  IR:          {}", serde_json::to_string(&report.ir)?);
    println!("  Eigenvalues: [{}]", eigenvalues.join(", "));
    println!("  Rotation:    [{}]", report.basis_rotation_gates.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_tensor_product() {
        let report = InspectReport::new(&(Observable::x() ^ Observable::y()));
        assert_eq!(report.label, "X@Y");
        assert_eq!(report.qubit_count, 2);
        assert_eq!(report.eigenvalues, vec![1.0, -1.0, -1.0, 1.0]);
        assert_eq!(report.basis_rotation_gates, vec!["h", "z", "s", "h"]);
    }
}
