//! Object helpers for Sigil.
//!
//! A [`Rectangle`] with an area, plus generic helpers that turn any
//! serializable value into JSON and rebuild typed values from JSON fields.
//!
//! ```
//! use sigil_objects::{Rectangle, from_json, to_json};
//!
//! # fn main() -> Result<(), sigil_objects::ObjectError> {
//! let r = Rectangle::new(10, 20);
//! assert_eq!(r.area(), 200);
//! assert_eq!(to_json(&r)?, r#"{"width":10,"height":20}"#);
//! assert_eq!(from_json::<Rectangle>(r#"{"width":10,"height":20}"#)?, r);
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the JSON helpers.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// The value could not be written as JSON.
    #[error("Failed to serialize object: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The input was not valid JSON for the requested type.
    #[error("Failed to parse object from JSON: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent
    pub width: u64,
    /// Vertical extent
    pub height: u64,
}

impl Rectangle {
    /// Create a rectangle from its width and height.
    #[must_use]
    pub const fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }

    /// `width * height`, saturating at `u64::MAX`.
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.width.saturating_mul(self.height)
    }
}

/// Compact JSON for `value`. Struct fields keep their declaration order.
///
/// # Errors
///
/// Returns [`ObjectError::Serialize`] if `value`'s `Serialize` impl fails,
/// e.g. a map with non-string keys.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectError> {
    serde_json::to_string(value).map_err(ObjectError::Serialize)
}

/// Rebuild a `T` from its JSON fields.
///
/// # Errors
///
/// Returns [`ObjectError::Deserialize`] if `json` is malformed or does not
/// describe a `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ObjectError> {
    serde_json::from_str(json).map_err(ObjectError::Deserialize)
}
