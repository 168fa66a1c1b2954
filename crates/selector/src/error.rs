//! Selector builder error types

use thiserror::Error;

use crate::part::PartKind;

/// Selector builder result type
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Errors raised while appending parts to a selector chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("Element, id and pseudo-element should not occur more than one time inside the selector (repeated {kind})")]
    DuplicatePart { kind: PartKind },

    #[error("Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({kind} after {previous})")]
    OrderViolation { kind: PartKind, previous: PartKind },
}

impl SelectorError {
    pub fn duplicate(kind: PartKind) -> Self {
        Self::DuplicatePart { kind }
    }

    pub fn order(kind: PartKind, previous: PartKind) -> Self {
        Self::OrderViolation { kind, previous }
    }

    /// The part kind whose append was rejected
    pub fn kind(&self) -> PartKind {
        match self {
            Self::DuplicatePart { kind } => *kind,
            Self::OrderViolation { kind, .. } => *kind,
        }
    }
}
