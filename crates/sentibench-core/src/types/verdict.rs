//! Verdicts extracted from an oracle reply

use serde::{Deserialize, Serialize};

/// One `(case index, predicted label)` pair read from the oracle's reply.
///
/// `label` always carries the vocabulary's declared casing. `index` is taken
/// verbatim from the reply and may be out of range for the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedVerdict {
    pub index: usize,
    pub label: String,
}

impl ParsedVerdict {
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }
}
