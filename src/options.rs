//! Configuration options for Cloacal formatting.
//!
//! This module provides [`FormatOptions`], which controls the canonical
//! layout produced by [`crate::format_with_options`].
//!
//! ## Examples
//!
//! ```rust
//! use cloacal::{format_with_options, FormatOptions, Record, Value};
//!
//! let mut record = Record::new();
//! record.insert("notes".to_string(), Value::Block("some longer text".to_string()));
//!
//! // Wider layout than the 44-column default
//! let options = FormatOptions::new().with_max_line_length(60);
//! let text = format_with_options(&record, options);
//! ```

/// The default maximum line length for canonical output.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 44;

/// Configuration options for Cloacal formatting.
///
/// Currently the only knob is the maximum line length, which controls both
/// the dash padding of complex-field headers and the word-wrap width of
/// block text and list items.
///
/// # Examples
///
/// ```rust
/// use cloacal::FormatOptions;
///
/// // Default layout (44 columns)
/// let options = FormatOptions::new();
///
/// // Custom width
/// let options = FormatOptions::new().with_max_line_length(60);
/// assert_eq!(options.max_line_length, 60);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub max_line_length: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl FormatOptions {
    /// Creates default options (44-column layout).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cloacal::FormatOptions;
    ///
    /// let options = FormatOptions::new();
    /// assert_eq!(options.max_line_length, 44);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum line length.
    ///
    /// Complex-field headers are dash-padded to exactly this width; block
    /// text and list items word-wrap within it. A single word longer than
    /// the wrap width still overflows rather than being split.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cloacal::FormatOptions;
    ///
    /// let options = FormatOptions::new().with_max_line_length(60);
    /// assert_eq!(options.max_line_length, 60);
    /// ```
    #[must_use]
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }
}
