//! Cloacal Format Specification
//!
//! This module documents the Cloacal record format as implemented by this
//! library.
//!
//! # Overview
//!
//! Cloacal is a small plain-text format for hand-edited records: one subject
//! per document, described by a name, short attributes, free-text passages,
//! and lists. It is designed to be typed quickly and sloppily (inconsistent
//! spacing, dash counts, and indentation are all tolerated) and then
//! normalized into a tidy canonical layout by the formatter.
//!
//! ## Design Philosophy
//!
//! - **Forgiving input**: ugly text is expected; the parser never rejects a
//!   document, it just drops what it cannot place
//! - **Canonical output**: formatting discards the original layout and
//!   rebuilds one deterministic rendering from content alone
//! - **Round-trip stability**: the canonical form uses only unambiguous
//!   markers, so parsing it and formatting again reproduces it byte for byte
//!
//! # Core Syntax
//!
//! ## Name box
//!
//! A bordered box holding the subject's display name:
//!
//! ```text
//! +----------+
//! | Carlisle |
//! +----------+
//! ```
//!
//! **Rules**:
//! - Recognized by a line whose content starts with `+` immediately followed
//!   by a line whose content starts with `|`
//! - The box always spans three source lines; border lengths are irrelevant
//!   (`+--+` above `| Carlisle |` above `+-----` parses the same)
//! - The inner line's text, with `|` delimiters and whitespace trimmed, is
//!   stored under the reserved field name `name`
//! - When formatting, the box is `max(name length + 4, 10)` columns wide,
//!   rounded up to even, with the name centered and any odd leftover space
//!   on the right
//!
//! ## Key-value fields
//!
//! An identifier, a run of marker characters, and a value on one line:
//!
//! ```text
//! age -- 99
//! species - seagull
//! ilk ------------ bird
//! ```
//!
//! **Rules**:
//! - Field names match `\w+` (letters, digits, underscore)
//! - The marker run is one or more characters from `-`, `~`, `>`, `*`; its
//!   length carries no meaning
//! - Everything after the marker run, trimmed, is the value
//! - When formatting, fields whose value is at most five words are sorted
//!   alphabetically and their values aligned in one column; longer values
//!   render as blocks instead
//!
//! ## Block fields
//!
//! An identifier and a marker run with nothing after it opens a block; the
//! indented lines that follow are its text:
//!
//! ```text
//! description ----
//!   Id ipsum elit tempor non incididunt
//!     laborum anim dolore eu fugiat.
//! ```
//!
//! **Rules**:
//! - The block runs until the next header or key-value line, or end of input
//! - Indented lines are trimmed and joined with single spaces; original line
//!   breaks are not preserved
//! - When formatting, block text word-wraps two columns short of the maximum
//!   line length and is indented two spaces
//!
//! ## List fields
//!
//! Inside a block region, lines marked with `>` are list items:
//!
//! ```text
//! memories -----------------------
//!   > Consectetur ut qui Lorem ad.
//!   > Veniam mollit nostrud velit laborum
//!     laborum veniam irure ut aute.
//!         > a nested sub-item
//! ```
//!
//! **Rules**:
//! - A `>`-marked line starts an item; indented lines under it continue it
//! - A `>` marker at column eight exactly (two indent levels) is a sub-item
//!   of the current item
//! - Item text is flattened to one string: primary line, then continuation
//!   lines, then sub-item lines, joined with single spaces. Sub-item text
//!   always sorts after continuation text, whatever the original
//!   interleaving
//! - A region that produced no items and no text still counts as a list,
//!   and formats as a bare list header, if a `>` marker appears within the
//!   ten lines before the region's end
//! - When formatting, items word-wrap four columns short of the maximum line
//!   length; the first line carries a two-space indent and a `> ` marker,
//!   wrap continuations a four-space indent
//!
//! # Tolerance Rules
//!
//! | Input irregularity | Handling |
//! |--------------------|----------|
//! | Inconsistent marker runs (`-`, `--`, `~~~~`) | All equivalent |
//! | Blank lines anywhere | Skipped, never terminate an item |
//! | Arbitrary indentation of headers and key-values | Accepted (leading whitespace ignored) |
//! | Lines that fit no rule | Silently dropped |
//! | Repeated field name | Last write wins; the field keeps its first position |
//! | `+` line with no `\|` line after it | Skipped, not a name box |
//!
//! # Canonical Layout
//!
//! The formatter emits, in order:
//!
//! 1. The name box (if a name is present), then a blank line
//! 2. Simple fields (scalars of at most five words) alphabetized, dash
//!    runs padded so all values start in one column, then a blank line
//! 3. Remaining fields in source order, each as a header dash-padded toward
//!    the maximum line length (default 44) followed by its wrapped content
//!    and a blank line
//!
//! Every line is right-trimmed and the document carries no leading or
//! trailing blank lines. Word wrap is greedy, breaks only at whitespace,
//! and never splits a word: one word longer than the wrap width overflows
//! its line.
//!
//! # Limitations
//!
//! - **One level of nesting**: sub-items flatten into their item; deeper
//!   structure is not representable
//! - **No error reporting**: malformed lines vanish rather than diagnose
//!   themselves
//! - **Lossy round-trip**: original layout, marker lengths, and the
//!   continuation/sub-item interleaving are all normalized away
//!
//! For worked examples, see the crate's `demos/` directory.

// This module contains only documentation; no implementation code
