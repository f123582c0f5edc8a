//! Fluent CSS selector builder for Sigil.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element fragments
//!   - Canonical ordering: `element#id.class[attr]:pseudo-class::pseudo-element`
//!   - At most one element, id and pseudo-element per compound
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Descendant, child, next-sibling and subsequent-sibling combinators
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! Every builder step returns a fresh [`Selector`]; nothing is shared between
//! independent chains.
//!
//! ```
//! use sigil_selector::{Combinator, combine, element};
//!
//! # fn main() -> Result<(), sigil_selector::SelectorError> {
//! let left = element("div").id("main")?;
//! let right = element("table").id("data")?;
//! assert_eq!(
//!     combine(&left, Combinator::NextSibling, &right).render(),
//!     "div#main + table#data"
//! );
//! # Ok(())
//! # }
//! ```

/// Combinators joining two selectors per [§ 16](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Errors raised while appending fragments.
pub mod error;
/// Fragment categories and their canonical order.
pub mod fragment;
/// The immutable selector value and its builder methods.
pub mod selector;

pub use combinator::Combinator;
pub use error::SelectorError;
pub use fragment::Fragment;
pub use selector::{Selector, Specificity};

/// Start a chain with a type selector: `name`.
#[must_use]
pub fn element(name: &str) -> Selector {
    Selector::new().extended(Fragment::Element, name)
}

/// Start a chain with an id selector: `#name`.
#[must_use]
pub fn id(name: &str) -> Selector {
    Selector::new().extended(Fragment::Id, name)
}

/// Start a chain with a class selector: `.name`.
#[must_use]
pub fn class(name: &str) -> Selector {
    Selector::new().extended(Fragment::Class, name)
}

/// Start a chain with an attribute selector: `[text]`.
#[must_use]
pub fn attr(text: &str) -> Selector {
    Selector::new().extended(Fragment::Attribute, text)
}

/// Start a chain with a pseudo-class: `:name`.
#[must_use]
pub fn pseudo_class(name: &str) -> Selector {
    Selector::new().extended(Fragment::PseudoClass, name)
}

/// Start a chain with a pseudo-element: `::name`.
#[must_use]
pub fn pseudo_element(name: &str) -> Selector {
    Selector::new().extended(Fragment::PseudoElement, name)
}

/// Join two selectors: `left <combinator> right`.
#[must_use]
pub fn combine(left: &Selector, combinator: Combinator, right: &Selector) -> Selector {
    left.combine(combinator, right)
}

/// The accumulated selector text.
#[must_use]
pub fn render(selector: &Selector) -> &str {
    selector.render()
}
