//! Cloacal formatting.
//!
//! This module renders a [`Record`] into the canonical Cloacal layout: a
//! bordered name box, alphabetized short fields with their values aligned in
//! one column, then blocks and lists in source order, word-wrapped and
//! indented. The rendering is deterministic and total: any record formats,
//! and formatting the same record twice yields the same text.
//!
//! The canonical form is a normalizing target, not a reproduction: the
//! original layout of the parsed text (spacing, dash counts, line breaks) is
//! discarded and rebuilt from the record's content alone.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use cloacal::{format, parse};
//!
//! let record = parse("species - seagull\nage -- 99");
//! let text = format(&record);
//! assert_eq!(text, "age ------- 99\nspecies --- seagull");
//! ```

use crate::record::NAME_KEY;
use crate::{FormatOptions, Record, Value};

/// Column indent for block text and list items.
const INDENT: usize = 2;

/// Scalars at most this many words long qualify as simple fields.
const SIMPLE_WORD_LIMIT: usize = 5;

/// Minimum inner width of the name box.
const MIN_BOX_WIDTH: usize = 10;

/// The Cloacal formatter.
///
/// Renders records into canonical text. Created via [`Formatter::new`] with
/// the desired options; consumed by [`Formatter::format`].
///
/// # Examples
///
/// ```rust
/// use cloacal::{Formatter, FormatOptions, Record, Value};
///
/// let mut record = Record::new();
/// record.insert("age".to_string(), Value::from("99"));
///
/// let text = Formatter::new(FormatOptions::default()).format(&record);
/// assert_eq!(text, "age --- 99");
/// ```
pub struct Formatter {
    options: FormatOptions,
    lines: Vec<String>,
}

impl Formatter {
    #[must_use]
    pub fn new(options: FormatOptions) -> Self {
        Formatter {
            options,
            // Typical records render in a few dozen lines
            lines: Vec::with_capacity(32),
        }
    }

    /// Renders the record and returns the canonical text.
    #[must_use]
    pub fn format(mut self, record: &Record) -> String {
        if let Some(name) = record.name() {
            self.push_name_box(name);
        }

        let mut simple: Vec<(&str, &str)> = record
            .iter()
            .filter(|(key, _)| key.as_str() != NAME_KEY)
            .filter_map(|(key, value)| match value {
                Value::Scalar(text) if is_simple(text) => Some((key.as_str(), text.as_str())),
                _ => None,
            })
            .collect();
        simple.sort_by_key(|&(key, _)| key);
        self.push_simple_fields(&simple);

        for (key, value) in record.iter() {
            if key == NAME_KEY {
                continue;
            }
            if matches!(value, Value::Scalar(text) if is_simple(text)) {
                continue;
            }
            self.push_complex_field(key, value);
        }

        self.finish()
    }

    /// Bordered box for the subject's name: width fits the name with two
    /// columns of margin each side, at least [`MIN_BOX_WIDTH`] wide, rounded
    /// up to even. Any odd leftover padding lands right of the name.
    fn push_name_box(&mut self, name: &str) {
        let name_len = name.chars().count();
        let mut width = (name_len + 4).max(MIN_BOX_WIDTH);
        if width % 2 != 0 {
            width += 1;
        }

        let border = format!("+{}+", "-".repeat(width - 2));
        let leftover = width - 4 - name_len;
        let pad = " ".repeat(leftover / 2);
        let mut middle = format!("| {}{}{} |", pad, name, pad);
        if leftover % 2 != 0 {
            middle.truncate(middle.len() - 2);
            middle.push_str("  |");
        }

        self.lines.push(border.clone());
        self.lines.push(middle);
        self.lines.push(border);
        self.lines.push(String::new());
    }

    /// Short scalars, alphabetized, with every value starting in the same
    /// column: the dash run after each key is padded so the widest key still
    /// gets three dashes.
    fn push_simple_fields(&mut self, simple: &[(&str, &str)]) {
        let value_column = simple
            .iter()
            .map(|(key, _)| key.chars().count() + 3)
            .max()
            .unwrap_or(0);

        for (key, value) in simple {
            let dashes = "-".repeat(value_column - key.chars().count());
            self.lines.push(format!("{} {} {}", key, dashes, value));
        }
        if !simple.is_empty() {
            self.lines.push(String::new());
        }
    }

    fn push_complex_field(&mut self, key: &str, value: &Value) {
        let dash_count = self
            .options
            .max_line_length
            .saturating_sub(key.chars().count() + 2);
        self.lines.push(format!("{} {}", key, "-".repeat(dash_count)));

        match value {
            Value::List(items) => {
                let width = self.options.max_line_length.saturating_sub(INDENT + 2);
                for item in items {
                    let mut wrapped = wrap(item, width).into_iter();
                    if let Some(first) = wrapped.next() {
                        self.lines.push(format!("  > {}", first));
                    }
                    for rest in wrapped {
                        self.lines.push(format!("    {}", rest));
                    }
                }
            }
            Value::EmptyList => {}
            Value::Scalar(text) | Value::Block(text) => {
                let width = self.options.max_line_length.saturating_sub(INDENT);
                for line in wrap(text, width) {
                    self.lines.push(format!("  {}", line));
                }
            }
        }

        self.lines.push(String::new());
    }

    /// Right-trims every line and trims blank lines from both ends.
    fn finish(self) -> String {
        self.lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
            .trim_matches('\n')
            .to_string()
    }
}

fn is_simple(text: &str) -> bool {
    !text.contains('\n') && text.split_whitespace().count() <= SIMPLE_WORD_LIMIT
}

/// Greedy word wrap at whitespace boundaries, measured in characters.
///
/// A single word longer than `width` is placed on its own line and overflows
/// rather than being split; hyphens are not break points. Text with no words
/// wraps to one empty line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    lines.push(current);
    lines
}
