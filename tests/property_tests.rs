//! Property-based tests - pragmatic approach testing the core guarantees
//!
//! The parser must accept anything without panicking, the formatter must be
//! total over any record, and the canonical form must be a fixed point of
//! reformatting for well-formed documents.

use cloacal::{format, parse, reformat, Record, Value};
use proptest::prelude::*;

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn phrase(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..=max_words).prop_map(|words| words.join(" "))
}

/// A well-formed document: optional name box, key-value lines, text blocks,
/// and lists, assembled with deliberately uneven marker runs and indents.
fn document() -> impl Strategy<Value = String> {
    let name_box = prop::option::of(word().prop_map(|n| format!("+--+\n| {} |\n+----+\n", n)));
    let key_values = prop::collection::vec(
        (ident(), phrase(5), 1..12usize),
        0..4,
    );
    let blocks = prop::collection::vec((ident(), phrase(12)), 0..2);
    let lists = prop::collection::vec(
        (ident(), prop::collection::vec(phrase(8), 1..4)),
        0..2,
    );

    (name_box, key_values, blocks, lists).prop_map(|(name_box, key_values, blocks, lists)| {
        let mut doc = String::new();
        if let Some(name_box) = name_box {
            doc.push_str(&name_box);
        }
        for (key, value, dashes) in key_values {
            doc.push_str(&format!("{} {} {}\n", key, "-".repeat(dashes), value));
        }
        for (key, text) in blocks {
            doc.push_str(&format!("{} ----\n   {}\n", key, text));
        }
        for (key, items) in lists {
            doc.push_str(&format!("{} ~~~~\n", key));
            for item in items {
                doc.push_str(&format!("  > {}\n", item));
            }
        }
        doc
    })
}

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        phrase(8).prop_map(Value::Scalar),
        phrase(20).prop_map(Value::Block),
        prop::collection::vec(phrase(10), 1..4).prop_map(Value::List),
        Just(Value::EmptyList),
    ]
}

fn record() -> impl Strategy<Value = Record> {
    prop::collection::vec((ident(), value()), 0..6)
        .prop_map(|fields| fields.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_parse_never_panics(input in any::<String>()) {
        let _ = parse(&input);
    }

    #[test]
    fn prop_reformat_total_on_arbitrary_input(input in any::<String>()) {
        let _ = reformat(&input);
    }

    #[test]
    fn prop_format_total_over_records(record in record()) {
        let _ = format(&record);
    }

    #[test]
    fn prop_canonical_form_is_fixed_point(doc in document()) {
        let once = reformat(&doc);
        let twice = reformat(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_key_value_lines_survive_any_marker_run(
        key in ident(),
        value in phrase(3),
        dashes in 1..30usize,
    ) {
        let record = parse(&format!("{} {} {}", key, "-".repeat(dashes), value));
        prop_assert_eq!(record.get(&key).and_then(|v| v.as_str()), Some(value.as_str()));
    }

    #[test]
    fn prop_wrapped_content_respects_width(doc in document()) {
        // Generated words are short, so wrapped block and item lines always
        // fit; only a single over-long word may ever overflow, and the
        // generator produces none.
        let text = reformat(&doc);
        for line in text.lines() {
            if line.starts_with("  ") {
                prop_assert!(line.chars().count() <= 44);
            }
        }
    }
}
