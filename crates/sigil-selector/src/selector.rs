use std::fmt;
use std::ops::{Add, AddAssign};

use serde::Serialize;
use sigil_common::warning::warn_once;

use crate::combinator::Combinator;
use crate::error::SelectorError;
use crate::fragment::Fragment;

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// A CSS selector under construction.
///
/// Each builder method borrows `self` and returns a new value, so a selector
/// can be extended in several directions without the branches seeing each
/// other's fragments:
///
/// ```
/// use sigil_selector::element;
///
/// # fn main() -> Result<(), sigil_selector::SelectorError> {
/// let base = element("a");
/// let hovered = base.pseudo_class("hover")?;
/// let external = base.attr("target=_blank")?;
/// assert_eq!(base.render(), "a");
/// assert_eq!(hovered.render(), "a:hover");
/// assert_eq!(external.render(), "a[target=_blank]");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Selector {
    text: String,
    specificity: Specificity,

    /// Highest category in the rightmost compound.
    #[serde(skip)]
    last: Option<Fragment>,
    #[serde(skip)]
    has_element: bool,
    #[serde(skip)]
    has_id: bool,
    #[serde(skip)]
    has_pseudo_element: bool,
}

impl Selector {
    /// An empty selector. Any fragment may be appended to it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` as a fragment of the given category.
    ///
    /// A repeated singleton (element, id, pseudo-element) is reported as a
    /// duplicate even when it would also be out of order.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::Duplicate`] if `fragment` is a singleton category
    ///   already present in the rightmost compound.
    /// - [`SelectorError::Order`] if a later category is already present.
    pub fn append(&self, fragment: Fragment, value: &str) -> Result<Self, SelectorError> {
        if fragment.is_singleton() && self.has(fragment) {
            return Err(SelectorError::Duplicate(fragment));
        }
        if let Some(after) = self.last.filter(|&last| last > fragment) {
            return Err(SelectorError::Order { fragment, after });
        }
        Ok(self.extended(fragment, value))
    }

    /// Append a type selector.
    ///
    /// # Errors
    ///
    /// See [`Selector::append`].
    pub fn element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Fragment::Element, name)
    }

    /// Append an id selector.
    ///
    /// # Errors
    ///
    /// See [`Selector::append`].
    pub fn id(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Fragment::Id, name)
    }

    /// Append a class selector.
    ///
    /// # Errors
    ///
    /// See [`Selector::append`].
    pub fn class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Fragment::Class, name)
    }

    /// Append an attribute selector. `text` is written between the brackets
    /// verbatim, e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// See [`Selector::append`].
    pub fn attr(&self, text: &str) -> Result<Self, SelectorError> {
        self.append(Fragment::Attribute, text)
    }

    /// Append a pseudo-class.
    ///
    /// # Errors
    ///
    /// See [`Selector::append`].
    pub fn pseudo_class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Fragment::PseudoClass, name)
    }

    /// Append a pseudo-element.
    ///
    /// # Errors
    ///
    /// See [`Selector::append`].
    pub fn pseudo_element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Fragment::PseudoElement, name)
    }

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Join `self` and `right` as `self <combinator> right`.
    ///
    /// Fragments appended to the result extend the rightmost compound, so the
    /// result inherits the ordering state of `right`.
    #[must_use]
    pub fn combine(&self, combinator: Combinator, right: &Self) -> Self {
        Self {
            text: format!("{} {combinator} {}", self.text, right.text),
            specificity: self.specificity + right.specificity,
            last: right.last,
            has_element: right.has_element,
            has_id: right.has_id,
            has_pseudo_element: right.has_pseudo_element,
        }
    }

    /// The accumulated selector text.
    #[must_use]
    pub fn render(&self) -> &str {
        &self.text
    }

    /// Whether no fragment has been appended yet. An empty-valued fragment
    /// such as `element("")` still counts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last.is_none() && self.text.is_empty()
    }

    /// Specificity summed over every compound in the selector.
    #[must_use]
    pub const fn specificity(&self) -> Specificity {
        self.specificity
    }

    /// Whether the rightmost compound already holds a singleton `fragment`.
    /// Always `false` for repeatable categories.
    #[must_use]
    pub const fn has(&self, fragment: Fragment) -> bool {
        match fragment {
            Fragment::Element => self.has_element,
            Fragment::Id => self.has_id,
            Fragment::PseudoElement => self.has_pseudo_element,
            Fragment::Class | Fragment::Attribute | Fragment::PseudoClass => false,
        }
    }

    /// Unchecked append. Callers are responsible for order and duplicates.
    pub(crate) fn extended(&self, fragment: Fragment, value: &str) -> Self {
        check_value(fragment, value);

        let mut next = self.clone();
        next.text.push_str(&fragment.wrap(value));
        next.specificity += fragment.specificity();
        next.last = Some(fragment);
        match fragment {
            Fragment::Element => next.has_element = true,
            Fragment::Id => next.has_id = true,
            Fragment::PseudoElement => next.has_pseudo_element = true,
            Fragment::Class | Fragment::Attribute | Fragment::PseudoClass => {}
        }
        next
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Values that still render but would not read back as the same selector.
fn check_value(fragment: Fragment, value: &str) {
    if value.is_empty() {
        warn_once("Selector", &format!("empty {fragment} value"));
    } else if value.chars().any(char::is_whitespace) && fragment != Fragment::Attribute {
        // Attribute values may be quoted strings containing spaces.
        warn_once(
            "Selector",
            &format!("{fragment} value {value:?} contains whitespace"),
        );
    }
}
