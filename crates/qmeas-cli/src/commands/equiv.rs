//! Equiv command implementation.

use anyhow::Result;
use console::style;
use qmeas_ir::QuantumOperator;

use super::common::load_observable;
use crate::config::Config;

/// Execute the equiv command.
pub fn execute(lhs: &str, rhs: &str, config: &Config) -> Result<()> {
    let a = load_observable(lhs)?;
    let b = load_observable(rhs)?;

    let equivalent = a.matrix_equivalence_within(&b, config.tolerance);
    tracing::debug!(lhs = %a, rhs = %b, equivalent, "compared matrices");

    let verdict = if equivalent {
        style("equivalent").green().bold()
    } else {
        style("not equivalent").red().bold()
    };
    println!("{a} vs {b}: {verdict}");
    if a == b {
        println!("IR: {}", style("identical").dim());
    }
    Ok(())
}
