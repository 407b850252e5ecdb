//! # cloacal
//!
//! A forgiving parser and canonical formatter for the Cloacal record format.
//!
//! ## What is Cloacal?
//!
//! Cloacal is a small plain-text format for hand-edited records: a name in a
//! bordered box, short dash-separated attributes, free-text blocks, and
//! `>`-marked lists. Because documents are typed by hand, the input side of
//! the format is deliberately sloppy. This crate turns that loose text into a
//! structured [`Record`] and renders records back out in one tidy canonical
//! layout. Inconsistent spacing, dash counts, and indentation are all
//! accepted on the way in.
//!
//! ## Key Features
//!
//! - **Never fails on input**: parsing is total; unrecognized lines are
//!   dropped, not rejected, and no input can make the parser panic
//! - **Canonical output**: aligned attribute columns, dash-padded headers,
//!   greedy word wrap; the same record always renders the same text
//! - **Order-preserving**: records keep field insertion order, which the
//!   formatter uses for blocks and lists
//! - **Round-trip stable**: formatting parsed canonical text reproduces it
//!   byte for byte
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cloacal = "0.1"
//! ```
//!
//! ### Normalizing a document
//!
//! ```rust
//! use cloacal::reformat;
//!
//! let ugly = "
//! +--+
//! | Carlisle |
//! +-----
//!
//! age -- 99
//! species - seagull
//! ";
//!
//! let tidy = reformat(ugly);
//! assert_eq!(
//!     tidy,
//!     "+----------+\n| Carlisle |\n+----------+\n\nage ------- 99\nspecies --- seagull"
//! );
//! ```
//!
//! ### Working with records
//!
//! ```rust
//! use cloacal::{format, parse, Value};
//!
//! let record = parse("ilk ------------ bird\nage -- 99");
//! assert_eq!(record.get("ilk"), Some(&Value::Scalar("bird".to_string())));
//!
//! let text = format(&record);
//! assert_eq!(text, "age --- 99\nilk --- bird");
//! ```
//!
//! ### Building records in code
//!
//! ```rust
//! use cloacal::{format, record};
//!
//! let rec = record! {
//!     "name" => "Carlisle",
//!     "memories" => ["the harbor before the boats came"],
//! };
//!
//! let text = format(&rec);
//! assert!(text.starts_with("+----------+"));
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - Normalize an ugly document end to end
//! - **`dynamic_records.rs`** - Build records with the record! macro
//! - **`custom_width.rs`** - Change the canonical line length
//!
//! Run any of them with: `cargo run --example <name>`

pub mod error;
pub mod formatter;
pub mod macros;
pub mod options;
pub mod parser;
pub mod record;
pub mod spec;
pub mod value;

pub use error::{Error, Result};
pub use formatter::Formatter;
pub use options::{FormatOptions, DEFAULT_MAX_LINE_LENGTH};
pub use parser::Parser;
pub use record::Record;
pub use value::Value;

use std::io;

/// Parses Cloacal text into a [`Record`].
///
/// Parsing is permissive by design: it never fails, and lines that fit no
/// rule are silently dropped. Leading and trailing blank lines are ignored.
///
/// # Examples
///
/// ```rust
/// use cloacal::parse;
///
/// let record = parse("age -- 99");
/// assert_eq!(record.get("age").and_then(|v| v.as_str()), Some("99"));
/// ```
#[must_use]
pub fn parse(input: &str) -> Record {
    Parser::new(input).parse()
}

/// Renders a [`Record`] in the canonical layout with default options
/// (44-column lines).
///
/// Formatting is deterministic and total: any record renders, and the same
/// record always renders the same text.
///
/// # Examples
///
/// ```rust
/// use cloacal::{format, record};
///
/// let rec = record! { "age" => "99" };
/// assert_eq!(format(&rec), "age --- 99");
/// ```
#[must_use]
pub fn format(record: &Record) -> String {
    format_with_options(record, FormatOptions::default())
}

/// Renders a [`Record`] in the canonical layout with custom options.
///
/// # Examples
///
/// ```rust
/// use cloacal::{format_with_options, record, FormatOptions};
///
/// let rec = record! { "age" => "99" };
/// let options = FormatOptions::new().with_max_line_length(60);
/// assert_eq!(format_with_options(&rec, options), "age --- 99");
/// ```
#[must_use]
pub fn format_with_options(record: &Record, options: FormatOptions) -> String {
    Formatter::new(options).format(record)
}

/// Parses Cloacal text and renders it back in the canonical layout.
///
/// This is the end-to-end normalization entry point. The result is stable:
/// reformatting canonical output reproduces it byte for byte.
///
/// # Examples
///
/// ```rust
/// use cloacal::reformat;
///
/// let tidy = reformat("species    -   seagull\nage -- 99");
/// assert_eq!(tidy, "age ------- 99\nspecies --- seagull");
/// ```
#[must_use]
pub fn reformat(input: &str) -> String {
    reformat_with_options(input, FormatOptions::default())
}

/// Parses Cloacal text and renders it back canonically with custom options.
#[must_use]
pub fn reformat_with_options(input: &str, options: FormatOptions) -> String {
    format_with_options(&parse(input), options)
}

/// Parses a Cloacal document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use cloacal::parse_reader;
/// use std::io::Cursor;
///
/// let record = parse_reader(Cursor::new(b"age -- 99")).unwrap();
/// assert_eq!(record.get("age").and_then(|v| v.as_str()), Some("99"));
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails or the bytes are not
/// valid UTF-8. The parse itself cannot fail.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R: io::Read>(mut reader: R) -> Result<Record> {
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(parse(&string))
}

/// Parses a Cloacal document from bytes.
///
/// # Examples
///
/// ```rust
/// use cloacal::parse_slice;
///
/// let record = parse_slice(b"ilk -- bird").unwrap();
/// assert_eq!(record.get("ilk").and_then(|v| v.as_str()), Some("bird"));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8. The parse itself
/// cannot fail.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(v: &[u8]) -> Result<Record> {
    let s = std::str::from_utf8(v).map_err(Error::utf8)?;
    Ok(parse(s))
}

/// Renders a [`Record`] canonically into a writer.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_writer<W: io::Write>(writer: W, record: &Record) -> Result<()> {
    format_writer_with_options(writer, record, FormatOptions::default())
}

/// Renders a [`Record`] canonically into a writer with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_writer_with_options<W: io::Write>(
    mut writer: W,
    record: &Record,
    options: FormatOptions,
) -> Result<()> {
    let text = format_with_options(record, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
