//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A blood type selection outside the ABO {A, B, AB, O} or Rh {+, -} sets.
    #[error("invalid genotype {input:?}: {reason}")]
    InvalidGenotype { input: String, reason: String },
}

impl DomainError {
    pub fn invalid_genotype(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGenotype {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
