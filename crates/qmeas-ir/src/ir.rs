//! Serialized form of observables.
//!
//! An observable serializes to a JSON list with one entry per factor. A
//! standard observable is its lowercase symbol; a Hermitian observable is its
//! matrix, each row a list of `[re, im]` pairs:
//!
//! ```json
//! ["z", "i", [[[1.0, 0.0], [0.0, 0.0]], [[0.0, 0.0], [1.0, 0.0]]], "y"]
//! ```
//!
//! A lone Hermitian observable therefore serializes as its matrix wrapped in
//! a one-element list. Consumers depend on that depth, so it is kept even
//! though it reads as one nesting level too many.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{InvalidInput, IrError, IrResult};
use crate::matrix::c;
use crate::observable::{Hermitian, Observable, StandardObservable, TensorProduct};

/// One factor of an observable's IR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IrTerm {
    /// Symbol of a standard observable, e.g. `"x"`.
    Symbol(String),
    /// Rows of a Hermitian matrix.
    Matrix(Vec<Vec<Complex64>>),
}

/// IR of a complete observable: its factors in left-to-right order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservableIr(pub Vec<IrTerm>);

impl ObservableIr {
    /// The factor entries.
    pub fn terms(&self) -> &[IrTerm] {
        &self.0
    }

    /// Number of factor entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Observable {
    /// Rebuild an observable from its IR.
    ///
    /// A single entry yields that observable; several yield a tensor product.
    pub fn from_ir(ir: &ObservableIr) -> IrResult<Observable> {
        let mut factors = ir
            .terms()
            .iter()
            .map(observable_from_term)
            .collect::<IrResult<Vec<_>>>()?;
        match factors.len() {
            1 => Ok(factors.remove(0)),
            _ => TensorProduct::new(factors).map(Observable::TensorProduct),
        }
    }

    /// Parse an observable from a JSON value in IR form.
    ///
    /// Anything that is not an IR list (a bare string, a number, an object)
    /// is rejected as not being an observable.
    pub fn from_json(value: &Value) -> IrResult<Observable> {
        let Value::Array(entries) = value else {
            return Err(InvalidInput::NotAnObservable(value.to_string()).into());
        };
        let terms = entries
            .iter()
            .map(term_from_json)
            .collect::<IrResult<Vec<_>>>()?;
        Observable::from_ir(&ObservableIr(terms))
    }
}

fn observable_from_term(term: &IrTerm) -> IrResult<Observable> {
    match term {
        IrTerm::Symbol(symbol) => StandardObservable::from_symbol(symbol)
            .map(Observable::Standard)
            .ok_or_else(|| InvalidInput::UnknownSymbol(symbol.clone()).into()),
        IrTerm::Matrix(rows) => Hermitian::from_rows(rows.clone()).map(Observable::Hermitian),
    }
}

fn term_from_json(value: &Value) -> IrResult<IrTerm> {
    match value {
        Value::String(symbol) => Ok(IrTerm::Symbol(symbol.clone())),
        Value::Array(rows) => matrix_from_json(rows).map(IrTerm::Matrix),
        other => Err(InvalidInput::NotAnObservable(other.to_string()).into()),
    }
}

fn matrix_from_json(rows: &[Value]) -> IrResult<Vec<Vec<Complex64>>> {
    rows.iter()
        .enumerate()
        .map(|(row, value)| -> IrResult<Vec<Complex64>> {
            let Value::Array(entries) = value else {
                return Err(InvalidInput::NotTwoDimensional { ndim: 1 }.into());
            };
            entries
                .iter()
                .enumerate()
                .map(|(col, entry)| {
                    entry_from_json(entry).ok_or_else(|| {
                        IrError::from(InvalidInput::NonNumeric {
                            row,
                            col,
                            found: entry.to_string(),
                        })
                    })
                })
                .collect()
        })
        .collect()
}

/// A matrix entry is a real number or a `[re, im]` pair.
fn entry_from_json(entry: &Value) -> Option<Complex64> {
    match entry {
        Value::Number(n) => n.as_f64().map(|re| c(re, 0.0)),
        Value::Array(pair) => match pair.as_slice() {
            [re, im] => Some(c(re.as_f64()?, im.as_f64()?)),
            _ => None,
        },
        _ => None,
    }
}
