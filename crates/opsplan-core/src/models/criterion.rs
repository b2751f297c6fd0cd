//! Success criterion model.

use serde::{Deserialize, Serialize};

/// A plan-level pass/fail statement.
///
/// `met` is judged by the live system and stored verbatim; the core reads it
/// but never computes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessCriterion {
    /// What must be true for the criterion to pass
    pub text: String,

    /// Whether the external system currently judges the criterion met
    #[serde(default)]
    pub met: bool,
}

impl SuccessCriterion {
    /// A fresh, unmet criterion.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            met: false,
        }
    }
}
