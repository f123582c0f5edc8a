use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::EnumIter;

use crate::error::SelectorError;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// Written as whitespace: `A B`.
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// `A > B`
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// `A + B`
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// `A ~ B`
    SubsequentSibling,
}

impl Combinator {
    /// The literal symbol written between the two selectors.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Only the bare symbol is accepted; `" > "` is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            " " => Ok(Self::Descendant),
            ">" => Ok(Self::Child),
            "+" => Ok(Self::NextSibling),
            "~" => Ok(Self::SubsequentSibling),
            other => Err(SelectorError::UnknownCombinator(other.to_string())),
        }
    }
}
