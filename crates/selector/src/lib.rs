//! Katas Selector Builder
//!
//! Builds CSS selector strings from typed parts, enforcing the
//! element, id, class, attribute, pseudo-class, pseudo-element order.
//!
//! ```
//! use katas_selector::selector;
//!
//! let sel = selector().element("a").unwrap().attr("href$=\".png\"").unwrap();
//! assert_eq!(sel.stringify(), "a[href$=\".png\"]");
//! ```

pub mod builder;
pub mod error;
pub mod part;

pub use builder::{selector, SelectorBuilder};
pub use error::{SelectorError, SelectorResult};
pub use part::{Combinator, PartKind};
