//! Immutable selector builder
//!
//! Every operation borrows the receiver and returns a fresh builder, so a
//! partially built selector can be reused as the start of several chains.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::error::{SelectorError, SelectorResult};
use crate::part::{Combinator, PartKind};

/// Accumulated selector text plus the bookkeeping needed to validate the
/// next append.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorBuilder {
    text: String,
    last: Option<PartKind>,
    seen: FxHashSet<PartKind>,
}

impl SelectorBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a type selector (`div`)
    pub fn element(&self, value: &str) -> SelectorResult<Self> {
        self.append(PartKind::Element, value)
    }

    /// Append an ID selector (`#main`)
    pub fn id(&self, value: &str) -> SelectorResult<Self> {
        self.append(PartKind::Id, value)
    }

    /// Append a class selector (`.container`)
    pub fn class(&self, value: &str) -> SelectorResult<Self> {
        self.append(PartKind::Class, value)
    }

    /// Append an attribute selector. `value` is the raw expression between
    /// the brackets, e.g. `href$=".png"`.
    pub fn attr(&self, value: &str) -> SelectorResult<Self> {
        self.append(PartKind::Attribute, value)
    }

    /// Append a pseudo-class (`:hover`)
    pub fn pseudo_class(&self, value: &str) -> SelectorResult<Self> {
        self.append(PartKind::PseudoClass, value)
    }

    /// Append a pseudo-element (`::before`)
    pub fn pseudo_element(&self, value: &str) -> SelectorResult<Self> {
        self.append(PartKind::PseudoElement, value)
    }

    /// Append a part of the given kind.
    ///
    /// Unique kinds are checked for repetition before the rank is compared
    /// against the previous part, so `element` after `element` reports
    /// [`SelectorError::DuplicatePart`] rather than an ordering problem.
    pub fn append(&self, kind: PartKind, value: &str) -> SelectorResult<Self> {
        if kind.is_unique() && self.seen.contains(&kind) {
            log::debug!("Rejected repeated {} '{}' after '{}'", kind, value, self.text);
            return Err(SelectorError::duplicate(kind));
        }

        if let Some(previous) = self.last {
            if kind.rank() < previous.rank() {
                log::debug!("Rejected {} '{}' after {} in '{}'", kind, value, previous, self.text);
                return Err(SelectorError::order(kind, previous));
            }
        }

        let mut text = String::with_capacity(self.text.len() + value.len() + 2);
        text.push_str(&self.text);
        text.push_str(&kind.fragment(value));
        log::trace!("Appended {} -> '{}'", kind, text);

        let mut seen = self.seen.clone();
        seen.insert(kind);

        Ok(Self {
            text,
            last: Some(kind),
            seen,
        })
    }

    /// Join two selectors with a combinator token, producing
    /// `left combinator right` after this builder's own text.
    ///
    /// The token is inserted verbatim and no checks run. The result carries
    /// the right-hand selector's bookkeeping and is meant to be stringified,
    /// not extended.
    pub fn combine(&self, left: &Self, combinator: &str, right: &Self) -> Self {
        let text = format!("{}{} {} {}", self.text, left.text, combinator, right.text);
        log::debug!("Combined selector '{}'", text);

        Self {
            text,
            last: right.last,
            seen: right.seen.clone(),
        }
    }

    /// [`combine`](Self::combine) with one of the standard combinators
    pub fn combine_with(&self, left: &Self, combinator: Combinator, right: &Self) -> Self {
        self.combine(left, combinator.token(), right)
    }

    /// The selector text built so far
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Rank of the most recent part, 0 for an empty chain
    pub fn last_rank(&self) -> u8 {
        self.last.map_or(0, PartKind::rank)
    }

    /// Kind of the most recent part
    pub fn last_kind(&self) -> Option<PartKind> {
        self.last
    }

    /// Whether a part of `kind` has been appended in this chain
    pub fn has_seen(&self, kind: PartKind) -> bool {
        self.seen.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Start a new selector chain
pub fn selector() -> SelectorBuilder {
    SelectorBuilder::new()
}
