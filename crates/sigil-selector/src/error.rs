use thiserror::Error;

use crate::fragment::Fragment;

/// Errors that can occur while building a selector.
///
/// Every builder step borrows its receiver immutably, so on error the
/// previous selector is untouched and can still be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A fragment was appended after a fragment of a later category.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element (got {fragment} after {after})"
    )]
    Order {
        /// The fragment being appended.
        fragment: Fragment,
        /// The latest category already present.
        after: Fragment,
    },

    /// A singleton fragment (element, id, pseudo-element) was appended twice.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector (duplicate {0})"
    )]
    Duplicate(Fragment),

    /// The combinator symbol is not one of `' '`, `'+'`, `'~'`, `'>'`.
    #[error("Unknown combinator: {0:?}")]
    UnknownCombinator(String),

    /// The fragment name is not a known category.
    #[error("Unknown fragment kind: {0:?}")]
    UnknownFragment(String),
}
