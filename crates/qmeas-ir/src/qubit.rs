//! Qubit addressing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{IrError, IrResult};

/// Index of a qubit that a gate or result type acts on.
///
/// Serializes as a bare integer, which is how targets appear in result-type IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The raw index.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// Collect targets, rejecting a qubit that appears twice.
pub(crate) fn collect_targets<T: Into<QubitId>>(
    name: &str,
    targets: impl IntoIterator<Item = T>,
) -> IrResult<Vec<QubitId>> {
    let mut seen = HashSet::new();
    let mut collected = Vec::new();
    for target in targets {
        let qubit: QubitId = target.into();
        if !seen.insert(qubit) {
            return Err(IrError::DuplicateQubit {
                qubit,
                name: name.to_string(),
            });
        }
        collected.push(qubit);
    }
    Ok(collected)
}
