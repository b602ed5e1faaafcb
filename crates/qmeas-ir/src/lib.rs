//! qmeas Measurement Intermediate Representation
//!
//! This crate provides the observable algebra used to define measurement
//! bases for quantum circuits, together with the gates, result types and
//! circuit container that consume it.
//!
//! # Core Components
//!
//! - **Observables**: [`Observable`] with the standard operators `I`, `X`,
//!   `Y`, `Z`, `H`, arbitrary [`Hermitian`] matrices and [`TensorProduct`]s
//! - **IR**: [`ObservableIr`], the JSON interchange form of an observable
//! - **Gates**: [`StandardGate`] and [`UnitaryGate`], compared with
//!   observables through [`QuantumOperator::matrix_equivalence`]
//! - **Result types**: [`ResultType`] requesting expectation, sample or
//!   variance of an observable on target qubits
//! - **Circuit**: [`Circuit`], with basis-compatibility checks across result types
//! - **Diagrams**: the [`CircuitDiagram`] interface
//!
//! # Example: Composing Observables
//!
//! ```rust
//! use qmeas_ir::{Observable, QuantumOperator};
//!
//! let zix = Observable::tensor_product(vec![Observable::z(), Observable::i(), Observable::x()])
//!     .unwrap();
//! let composed = &zix ^ &Observable::y();
//!
//! assert_eq!(composed.qubit_count(), 4);
//! assert_eq!(composed.ascii_symbols()[0], "Z@I@X@Y");
//! assert_eq!(serde_json::to_string(&composed.to_ir()).unwrap(), r#"["z","i","x","y"]"#);
//! ```
//!
//! # Example: Hermitian Observables
//!
//! ```rust
//! use qmeas_ir::{Observable, QuantumOperator, StandardGate};
//!
//! let x_matrix = StandardGate::X.to_matrix();
//! let herm = Observable::hermitian(x_matrix).unwrap();
//!
//! assert!(herm.matrix_equivalence(&Observable::x()));
//! assert_ne!(herm, Observable::x());
//! ```

pub mod circuit;
pub mod diagram;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod ir;
pub mod matrix;
pub mod observable;
pub mod operator;
pub mod qubit;
pub mod result_type;

pub use circuit::Circuit;
pub use diagram::{CircuitDiagram, InstructionListDiagram};
pub use error::{InvalidInput, IrError, IrResult};
pub use gate::{Gate, StandardGate, UnitaryGate};
pub use instruction::Instruction;
pub use ir::{IrTerm, ObservableIr};
pub use matrix::Tolerance;
pub use observable::{Hermitian, Observable, StandardObservable, TensorProduct};
pub use operator::QuantumOperator;
pub use qubit::QubitId;
pub use result_type::{ResultKind, ResultType, ResultTypeIr};
