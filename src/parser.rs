//! Cloacal parsing.
//!
//! This module turns raw Cloacal text into a [`Record`]. The parser is
//! deliberately permissive: the format is meant to be hand-edited, so ugly
//! input is expected. Parsing never fails and never panics; lines that fit
//! no rule are silently dropped rather than rejected.
//!
//! ## Overview
//!
//! - **Single-pass scanning**: the input is materialized as a line buffer and
//!   consumed front to back with one line of lookahead
//! - **Ordered classification**: each line is classified by an explicit,
//!   first-match-wins rule set ([`LineClass`]), testable in isolation
//! - **Region scanning**: a block header opens a region that runs until the
//!   next header or key-value line; inside it, `>`-marked lines accumulate
//!   into list items and indented lines into block text
//!
//! ## Usage
//!
//! Most users should use the high-level function in the crate root:
//!
//! ```rust
//! use cloacal::parse;
//!
//! let record = parse("age -- 99\nspecies - seagull");
//! assert_eq!(record.get("age").and_then(|v| v.as_str()), Some("99"));
//! assert_eq!(record.get("species").and_then(|v| v.as_str()), Some("seagull"));
//! ```

use crate::{Record, Value};
use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\w+)\s*[-~>*]+\s*$").unwrap());
static KEY_VALUE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\w+)\s*[-~>*]+\s*(.+)$").unwrap());

/// Sub-item lines carry the `>` marker at this exact column (two indent
/// levels by convention).
const SUB_ITEM_PREFIX: &str = "        >";

/// How many lines before a region's end are searched for a `>` marker when
/// deciding whether an empty region was a list.
const LIST_LOOKBACK: usize = 10;

/// The classification of a single input line.
///
/// Rules are evaluated top to bottom; the first match wins. Classification
/// is context-free; the scanner decides what each class means in its
/// current state (a `SubItem` line opens a fresh item when no item is open,
/// and an indented `NameBoxTop` line inside a region is plain block text).
///
/// # Examples
///
/// ```rust
/// use cloacal::parser::{classify_line, LineClass};
///
/// assert_eq!(classify_line("age -- 99"), LineClass::KeyValue { key: "age", value: "99" });
/// assert_eq!(classify_line("memories ----"), LineClass::BlockHeader { key: "memories" });
/// assert_eq!(classify_line("> first"), LineClass::ListItem { text: "first" });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Only whitespace.
    Blank,
    /// Trimmed content starts with `+`; candidate top border of a name box.
    NameBoxTop,
    /// `<identifier><marker run>` with nothing after the markers.
    BlockHeader { key: &'a str },
    /// `<identifier><marker run><value>`; the value is trimmed.
    KeyValue { key: &'a str, value: &'a str },
    /// Trimmed content starts with `>` below the sub-item column.
    ListItem { text: &'a str },
    /// A `>` marker at exactly the sub-item column.
    SubItem { text: &'a str },
    /// Any other line with leading whitespace; the text is trimmed.
    Continuation { text: &'a str },
    /// Fits no rule; the scanner drops it.
    Unrecognized,
}

/// Classifies one line by the ordered rule set, first match wins.
#[must_use]
pub fn classify_line(line: &str) -> LineClass<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    if trimmed.starts_with('+') {
        return LineClass::NameBoxTop;
    }
    if let Some(caps) = BLOCK_HEADER_RE.captures(line) {
        return LineClass::BlockHeader {
            key: caps.get(1).map_or("", |m| m.as_str()),
        };
    }
    if let Some(caps) = KEY_VALUE_RE.captures(line) {
        return LineClass::KeyValue {
            key: caps.get(1).map_or("", |m| m.as_str()),
            value: caps.get(2).map_or("", |m| m.as_str()).trim(),
        };
    }
    if line.starts_with(SUB_ITEM_PREFIX) {
        return LineClass::SubItem {
            text: strip_marker(trimmed),
        };
    }
    if trimmed.starts_with('>') {
        return LineClass::ListItem {
            text: strip_marker(trimmed),
        };
    }
    if has_leading_whitespace(line) {
        return LineClass::Continuation { text: trimmed };
    }
    LineClass::Unrecognized
}

/// Strips the leading `>` run and surrounding whitespace from an item line.
fn strip_marker(trimmed: &str) -> &str {
    trimmed.trim_start_matches('>').trim()
}

fn has_leading_whitespace(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}

/// The Cloacal parser.
///
/// Walks the materialized line buffer once, with one line of lookahead to
/// decide when a region or item ends. Created via [`Parser::new`]; most
/// users should call [`crate::parse`] instead.
pub struct Parser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Parser {
            lines: input.trim_matches('\n').split('\n').collect(),
            pos: 0,
        }
    }

    /// Consumes the parser and returns the record. Never fails.
    #[must_use]
    pub fn parse(mut self) -> Record {
        let mut record = Record::new();

        while let Some(line) = self.current() {
            match classify_line(line) {
                LineClass::Blank => {
                    self.pos += 1;
                }
                LineClass::NameBoxTop => self.scan_name_box(&mut record),
                LineClass::BlockHeader { key } => {
                    self.pos += 1;
                    let value = self.scan_region();
                    record.insert(key.to_string(), value);
                }
                LineClass::KeyValue { key, value } => {
                    record.insert(key.to_string(), Value::Scalar(value.to_string()));
                    self.pos += 1;
                }
                // Stray item markers, indentation, and anything else at top
                // level are dropped.
                _ => {
                    self.pos += 1;
                }
            }
        }

        record
    }

    fn current(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// A `+` line followed by a `|` line is a name box. The box spans three
    /// source lines regardless of border length; a lone `+` line is skipped.
    fn scan_name_box(&mut self, record: &mut Record) {
        let inner = self.lines.get(self.pos + 1).copied();
        match inner {
            Some(line) if line.trim().starts_with('|') => {
                let name = line.trim().trim_matches('|').trim();
                record.insert(crate::record::NAME_KEY.to_string(), Value::from(name));
                self.pos += 3;
            }
            _ => {
                self.pos += 1;
            }
        }
    }

    /// Scans the lines following a block header until the next header or
    /// key-value line (or end of input), and decides what the region was.
    fn scan_region(&mut self) -> Value {
        let mut block_lines: Vec<&str> = Vec::new();
        let mut items: Vec<String> = Vec::new();

        while let Some(line) = self.current() {
            match classify_line(line) {
                LineClass::Blank => {
                    self.pos += 1;
                }
                LineClass::BlockHeader { .. } | LineClass::KeyValue { .. } => break,
                // Any `>`-marked line opens an item here; the sub-item column
                // only matters while an item is already being accumulated.
                LineClass::ListItem { text } | LineClass::SubItem { text } => {
                    items.push(self.scan_item(text));
                }
                LineClass::Continuation { text } => {
                    block_lines.push(text);
                    self.pos += 1;
                }
                LineClass::NameBoxTop => {
                    // An indented `+` line is just block text; at column 0 it
                    // fits no rule inside a region.
                    if has_leading_whitespace(line) {
                        block_lines.push(line.trim());
                    }
                    self.pos += 1;
                }
                LineClass::Unrecognized => {
                    self.pos += 1;
                }
            }
        }

        if !items.is_empty() {
            Value::List(items)
        } else if !block_lines.is_empty() {
            Value::Block(block_lines.join(" "))
        } else if self.saw_recent_item_marker() {
            Value::EmptyList
        } else {
            Value::Block(String::new())
        }
    }

    /// Accumulates one list item: the primary line, its continuation lines,
    /// and its sub-item lines. Continuation text precedes all sub-item text
    /// in the flattened result, whatever their original interleaving.
    fn scan_item(&mut self, primary: &str) -> String {
        let mut parts: Vec<&str> = vec![primary];
        let mut sub_parts: Vec<&str> = Vec::new();
        self.pos += 1;

        while let Some(line) = self.current() {
            match classify_line(line) {
                LineClass::Blank => {
                    self.pos += 1;
                }
                LineClass::ListItem { .. }
                | LineClass::BlockHeader { .. }
                | LineClass::KeyValue { .. } => break,
                LineClass::SubItem { text } => {
                    sub_parts.push(text);
                    self.pos += 1;
                }
                LineClass::Continuation { text } => {
                    parts.push(text);
                    self.pos += 1;
                }
                LineClass::NameBoxTop if has_leading_whitespace(line) => {
                    parts.push(line.trim());
                    self.pos += 1;
                }
                _ => break,
            }
        }

        parts.extend(sub_parts);
        parts.join(" ")
    }

    /// A region that produced neither items nor text was still a list if a
    /// `>` marker appears in the lookback window before its end.
    fn saw_recent_item_marker(&self) -> bool {
        let start = self.pos.saturating_sub(LIST_LOOKBACK);
        let end = self.pos.min(self.lines.len());
        self.lines[start..end]
            .iter()
            .any(|line| line.trim().starts_with('>'))
    }
}
