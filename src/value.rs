//! Field value representation for Cloacal records.
//!
//! This module provides the [`Value`] enum which represents the content of a
//! single record field. A field is either a short one-line scalar, a longer
//! free-text block, or a list of items.
//!
//! ## Core Types
//!
//! - [`Value`]: A tagged union of the four field shapes (scalar, block, list, empty list)
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use cloacal::Value;
//!
//! // From primitives
//! let scalar = Value::from("seagull");
//! let list = Value::from(vec!["first memory".to_string(), "second memory".to_string()]);
//!
//! // Using the record! macro
//! use cloacal::record;
//! let rec = record! {
//!     "species" => "seagull",
//!     "age" => "99",
//! };
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use cloacal::Value;
//!
//! let value = Value::from("99");
//! assert!(value.is_scalar());
//! assert!(!value.is_list());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use cloacal::Value;
//!
//! let value = Value::from("bird");
//! assert_eq!(value.as_str(), Some("bird"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The content of a single record field.
///
/// Cloacal distinguishes four field shapes:
///
/// - `Scalar`: a single short line of content (an attribute and its value)
/// - `Block`: a longer free-text passage, stored as one whitespace-joined
///   string; original line breaks are not preserved, only word-wrap breaks
///   reintroduced at format time
/// - `List`: an ordered sequence of items, each item one flattened string
///   built from its primary line, continuation lines, and sub-item lines
/// - `EmptyList`: a recognized list block with zero items, kept distinct from
///   an empty `Block` so the formatter re-emits it as a list header rather
///   than a text block
///
/// # Examples
///
/// ```rust
/// use cloacal::Value;
///
/// let scalar = Value::Scalar("99".to_string());
/// let block = Value::Block("a longer passage of text".to_string());
/// let list = Value::List(vec!["first".to_string()]);
///
/// assert!(scalar.is_scalar());
/// assert!(block.is_block());
/// assert!(list.is_list());
/// assert!(Value::EmptyList.is_empty_list());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Scalar(String),
    Block(String),
    List(Vec<String>),
    EmptyList,
}

impl Value {
    /// Returns `true` if the value is a scalar.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Returns `true` if the value is a text block.
    #[inline]
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self, Value::Block(_))
    }

    /// Returns `true` if the value is a non-empty list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns `true` if the value is an empty list.
    #[inline]
    #[must_use]
    pub const fn is_empty_list(&self) -> bool {
        matches!(self, Value::EmptyList)
    }

    /// If the value is a scalar, returns its text. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cloacal::Value;
    ///
    /// assert_eq!(Value::from("bird").as_str(), Some("bird"));
    /// assert_eq!(Value::EmptyList.as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a text block, returns its joined text. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_block(&self) -> Option<&str> {
        match self {
            Value::Block(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a non-empty list, returns its items. Otherwise returns `None`.
    ///
    /// A [`Value::EmptyList`] returns `None`; use [`Value::is_empty_list`] to
    /// distinguish it from a value that is not a list at all.
    #[inline]
    #[must_use]
    pub fn as_items(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Renders the raw field content, not the canonical layout.
///
/// List items are joined with `"; "`. Use [`crate::format`] for the canonical
/// aligned rendering.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) | Value::Block(s) => write!(f, "{}", s),
            Value::List(items) => write!(f, "{}", items.join("; ")),
            Value::EmptyList => Ok(()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(value)
    }
}

/// An empty vector converts to [`Value::EmptyList`], keeping the invariant
/// that `List` always holds at least one item.
impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        if items.is_empty() {
            Value::EmptyList
        } else {
            Value::List(items)
        }
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::from(
            items
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<String>>(),
        )
    }
}
