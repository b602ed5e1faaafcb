//! Textual circuit diagrams.

use crate::circuit::Circuit;
use crate::operator::QuantumOperator;
use crate::qubit::QubitId;

/// Builds a string diagram of a circuit.
///
/// Implementations must return an empty string for an empty circuit.
pub trait CircuitDiagram {
    /// Build a diagram for `circuit`.
    fn build_diagram(circuit: &Circuit) -> String;
}

/// One line per instruction, then one line per result type.
///
/// ```text
/// H q0
/// C,X q0 q1
/// Expectation(Z@Z) q0 q1
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InstructionListDiagram;

impl CircuitDiagram for InstructionListDiagram {
    fn build_diagram(circuit: &Circuit) -> String {
        let gates = circuit
            .instructions()
            .iter()
            .map(|i| line(&i.gate().ascii_symbols().join(","), i.targets()));
        let results = circuit.result_types().iter().map(|rt| {
            let label = format!("{}({})", rt.kind(), rt.observable().label());
            line(&label, rt.targets())
        });
        gates.chain(results).collect::<Vec<_>>().join("\n")
    }
}

fn line(label: &str, targets: &[QubitId]) -> String {
    let targets: Vec<String> = targets.iter().map(ToString::to_string).collect();
    format!("{label} {}", targets.join(" "))
}
