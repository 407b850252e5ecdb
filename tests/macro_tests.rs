use cloacal::{format, parse, record, Value};

#[test]
fn test_macro_record_matches_parsed_record() {
    let built = record! {
        "name" => "Carlisle",
        "age" => "99",
        "memories" => ["the harbor", "a very good chip"],
    };

    let parsed = parse(
        "+--+\n| Carlisle |\n+--+\nage -- 99\nmemories ----\n  > the harbor\n  > a very good chip",
    );

    assert_eq!(built, parsed);
}

#[test]
fn test_macro_empty_record() {
    let rec = record! {};
    assert!(rec.is_empty());
    assert_eq!(format(&rec), "");
}

#[test]
fn test_macro_trailing_comma() {
    let rec = record! {
        "age" => "99",
    };
    assert_eq!(rec.len(), 1);
}

#[test]
fn test_macro_value_forms() {
    let rec = record! {
        "scalar" => "short",
        "list" => ["one", "two"],
        "empty" => [],
        "block" => (Value::Block("longer prose".to_string())),
    };

    assert!(rec.get("scalar").unwrap().is_scalar());
    assert!(rec.get("list").unwrap().is_list());
    assert!(rec.get("empty").unwrap().is_empty_list());
    assert!(rec.get("block").unwrap().is_block());
}

#[test]
fn test_macro_records_format_cleanly() {
    let rec = record! {
        "name" => "Edgar",
        "ilk" => "crow",
        "grievances" => ["the scarecrow situation"],
    };

    let text = format(&rec);
    assert!(text.starts_with("+--------+\n| Edgar  |\n+--------+"));
    assert!(text.contains("ilk --- crow"));
    assert!(text.contains("  > the scarecrow situation"));
}
