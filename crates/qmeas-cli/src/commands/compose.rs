//! Compose command implementation.

use anyhow::Result;
use qmeas_ir::{Observable, QuantumOperator};

use super::common::{load_observable, write_output};

/// Execute the compose command.
pub fn execute(inputs: &[String], output: Option<&str>) -> Result<()> {
    let observables = inputs
        .iter()
        .map(|path| load_observable(path))
        .collect::<Result<Vec<_>>>()?;

    let composed = compose_all(observables)?;
    tracing::info!(
        observable = %composed,
        qubits = composed.qubit_count(),
        "composed observables"
    );

    let json = serde_json::to_string(&composed.to_ir())?;
    write_output(&json, output)
}

/// Tensor-compose left to right.
fn compose_all(observables: Vec<Observable>) -> Result<Observable> {
    let mut iter = observables.into_iter();
    let first = iter
        .next()
        .ok_or_else(|| anyhow::anyhow!("At least one input observable is required"))?;
    Ok(iter.fold(first, |acc, next| acc ^ next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_all() {
        let composed = compose_all(vec![Observable::z(), Observable::x() ^ Observable::y()]).unwrap();
        assert_eq!(composed.label(), "Z@X@Y");
        assert!(compose_all(vec![]).is_err());
    }
}
