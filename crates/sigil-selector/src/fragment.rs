use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::SelectorError;
use crate::selector::Specificity;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// One syntactic piece of a compound selector. Variants are declared in
/// canonical order, so the derived `Ord` is the order fragments must appear in:
///
/// ```text
/// element#id.class[attr]:pseudo-class::pseudo-element
///           \----/\----/\----------/
///           may occur several times
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Fragment {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:focus`
    PseudoClass,

    /// [§ 3.6.1 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::first-letter`
    PseudoElement,
}

impl Fragment {
    /// Parse a category name (`element`, `id`, `class`, `attr`/`attribute`,
    /// `pseudo-class`, `pseudo-element`).
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownFragment`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, SelectorError> {
        name.parse()
            .map_err(|_| SelectorError::UnknownFragment(name.to_string()))
    }

    /// Whether the category may occur at most once per compound selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Render `value` with this category's syntax.
    #[must_use]
    pub fn wrap(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }

    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    /// Contribution of a single fragment of this category.
    #[must_use]
    pub const fn specificity(self) -> Specificity {
        match self {
            // "count the number of ID selectors in the selector (= A)"
            Self::Id => Specificity::new(1, 0, 0),
            // "count the number of class selectors, attributes selectors,
            // and pseudo-classes in the selector (= B)"
            Self::Class | Self::Attribute | Self::PseudoClass => Specificity::new(0, 1, 0),
            // "count the number of type selectors and pseudo-elements
            // in the selector (= C)"
            Self::Element | Self::PseudoElement => Specificity::new(0, 0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_iteration_follows_canonical_order() {
        let names: Vec<String> = Fragment::iter().map(|f| f.to_string()).collect();
        assert_eq!(
            names,
            [
                "element",
                "id",
                "class",
                "attribute",
                "pseudo-class",
                "pseudo-element"
            ]
        );
        assert!(Fragment::iter().zip(Fragment::iter().skip(1)).all(|(a, b)| a < b));
    }

    #[test]
    fn test_from_name_accepts_attr_alias() {
        assert_eq!(Fragment::from_name("attr"), Ok(Fragment::Attribute));
        assert_eq!(Fragment::from_name("attribute"), Ok(Fragment::Attribute));
        assert_eq!(
            Fragment::from_name("pseudo-class"),
            Ok(Fragment::PseudoClass)
        );
        assert_eq!(
            Fragment::from_name("tag"),
            Err(SelectorError::UnknownFragment("tag".to_string()))
        );
    }

    #[test]
    fn test_wrap_prefixes() {
        assert_eq!(Fragment::Element.wrap("div"), "div");
        assert_eq!(Fragment::Id.wrap("main"), "#main");
        assert_eq!(Fragment::Class.wrap("x"), ".x");
        assert_eq!(Fragment::Attribute.wrap("href"), "[href]");
        assert_eq!(Fragment::PseudoClass.wrap("hover"), ":hover");
        assert_eq!(Fragment::PseudoElement.wrap("after"), "::after");
    }

    #[test]
    fn test_singletons() {
        let singletons: Vec<Fragment> = Fragment::iter().filter(|f| f.is_singleton()).collect();
        assert_eq!(
            singletons,
            [Fragment::Element, Fragment::Id, Fragment::PseudoElement]
        );
    }
}
