//! Selector part kinds and combinators

use std::fmt;

/// Kind of a simple selector part.
///
/// Variants are declared in the order they must appear inside a compound
/// selector, so the derived `Ord` agrees with [`PartKind::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartKind {
    /// Type selector (e.g., div, p, span)
    Element,
    /// ID selector (e.g., #main)
    Id,
    /// Class selector (e.g., .container)
    Class,
    /// Attribute selector (e.g., [type="text"])
    Attribute,
    /// Pseudo-class (e.g., :hover, :nth-child(2n))
    PseudoClass,
    /// Pseudo-element (e.g., ::before, ::after)
    PseudoElement,
}

impl PartKind {
    /// All kinds, lowest rank first
    pub const ALL: [PartKind; 6] = [
        PartKind::Element,
        PartKind::Id,
        PartKind::Class,
        PartKind::Attribute,
        PartKind::PseudoClass,
        PartKind::PseudoElement,
    ];

    /// Ordering position, 1 (element) through 6 (pseudo-element).
    /// Rank 0 is reserved for an empty chain.
    pub fn rank(self) -> u8 {
        match self {
            Self::Element => 1,
            Self::Id => 2,
            Self::Class => 3,
            Self::Attribute => 4,
            Self::PseudoClass => 5,
            Self::PseudoElement => 6,
        }
    }

    /// Whether the kind may occur at most once per chain
    pub fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Render `value` as this kind's selector fragment
    pub fn fragment(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{}", value),
            Self::Class => format!(".{}", value),
            Self::Attribute => format!("[{}]", value),
            Self::PseudoClass => format!(":{}", value),
            Self::PseudoElement => format!("::{}", value),
        }
    }

    /// Human-readable name, as used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }

    /// Look up a kind by name. Accepts the display names plus the short
    /// `attr`, `pseudoClass` and `pseudoElement` spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "element" => Some(Self::Element),
            "id" => Some(Self::Id),
            "class" => Some(Self::Class),
            "attribute" | "attr" => Some(Self::Attribute),
            "pseudo-class" | "pseudoClass" => Some(Self::PseudoClass),
            "pseudo-element" | "pseudoElement" => Some(Self::PseudoElement),
            _ => None,
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selector combinators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant combinator (space)
    Descendant,
    /// Child combinator (>)
    Child,
    /// Next sibling combinator (+)
    NextSibling,
    /// Subsequent sibling combinator (~)
    SubsequentSibling,
}

impl Combinator {
    /// The token inserted between the two joined selectors
    pub fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_declaration_order() {
        let ranks: Vec<u8> = PartKind::ALL.iter().map(|k| k.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
        assert!(PartKind::Element < PartKind::PseudoElement);
    }

    #[test]
    fn test_unique_kinds() {
        assert!(PartKind::Element.is_unique());
        assert!(PartKind::Id.is_unique());
        assert!(PartKind::PseudoElement.is_unique());
        assert!(!PartKind::Class.is_unique());
        assert!(!PartKind::Attribute.is_unique());
        assert!(!PartKind::PseudoClass.is_unique());
    }

    #[test]
    fn test_fragments() {
        assert_eq!(PartKind::Element.fragment("div"), "div");
        assert_eq!(PartKind::Id.fragment("main"), "#main");
        assert_eq!(PartKind::Class.fragment("intro"), ".intro");
        assert_eq!(PartKind::Attribute.fragment("href$=\".png\""), "[href$=\".png\"]");
        assert_eq!(PartKind::PseudoClass.fragment("nth-child(2n)"), ":nth-child(2n)");
        assert_eq!(PartKind::PseudoElement.fragment("before"), "::before");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(PartKind::from_name("attr"), Some(PartKind::Attribute));
        assert_eq!(PartKind::from_name("pseudoClass"), Some(PartKind::PseudoClass));
        assert_eq!(PartKind::from_name("pseudo-element"), Some(PartKind::PseudoElement));
        assert_eq!(PartKind::from_name("universal"), None);
    }

    #[test]
    fn test_combinator_tokens() {
        assert_eq!(Combinator::Child.token(), ">");
        assert_eq!(Combinator::from_token("~"), Some(Combinator::SubsequentSibling));
        assert_eq!(Combinator::from_token("||"), None);
    }
}
