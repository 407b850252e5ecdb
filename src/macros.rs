/// Builds a [`Record`](crate::Record) literal.
///
/// String values become [`Value::Scalar`](crate::Value::Scalar), bracketed
/// lists become [`Value::List`](crate::Value::List) (empty brackets become
/// [`Value::EmptyList`](crate::Value::EmptyList)), and a parenthesized
/// expression is inserted as-is, which is how a
/// [`Value::Block`](crate::Value::Block) is written.
///
/// # Examples
///
/// ```rust
/// use cloacal::{record, Value};
///
/// let rec = record! {
///     "name" => "Carlisle",
///     "age" => "99",
///     "memories" => ["first flight", "the harbor"],
///     "tricks" => [],
///     "description" => (Value::Block("an old seagull".to_string())),
/// };
///
/// assert_eq!(rec.name(), Some("Carlisle"));
/// assert!(rec.get("tricks").unwrap().is_empty_list());
/// ```
#[macro_export]
macro_rules! record {
    // Value rules, matched per entry

    // Empty list
    (@value []) => {
        $crate::Value::EmptyList
    };

    // Non-empty list; items are anything with a to_string
    (@value [ $($item:expr),+ $(,)? ]) => {
        $crate::Value::List(vec![ $(($item).to_string()),+ ])
    };

    // Anything else: scalars via From, pre-built values via the identity From
    (@value $value:expr) => {
        $crate::Value::from($value)
    };

    // Entry rules

    () => {
        $crate::Record::new()
    };

    ( $( $key:literal => $value:tt ),+ $(,)? ) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert(($key).to_string(), $crate::record!(@value $value));
        )+
        record
    }};
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn test_record_macro_empty() {
        let rec = record! {};
        assert!(rec.is_empty());
    }

    #[test]
    fn test_record_macro_scalars() {
        let rec = record! {
            "age" => "99",
            "species" => "seagull",
        };
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.get("age"), Some(&Value::Scalar("99".to_string())));
        assert_eq!(
            rec.get("species"),
            Some(&Value::Scalar("seagull".to_string()))
        );
    }

    #[test]
    fn test_record_macro_lists() {
        let rec = record! {
            "memories" => ["one", "two"],
            "tricks" => [],
        };
        assert_eq!(
            rec.get("memories"),
            Some(&Value::List(vec!["one".to_string(), "two".to_string()]))
        );
        assert_eq!(rec.get("tricks"), Some(&Value::EmptyList));
    }

    #[test]
    fn test_record_macro_block_passthrough() {
        let rec = record! {
            "description" => (Value::Block("free text".to_string())),
        };
        assert_eq!(
            rec.get("description"),
            Some(&Value::Block("free text".to_string()))
        );
    }

    #[test]
    fn test_record_macro_preserves_order() {
        let rec = record! {
            "zeta" => "1",
            "alpha" => "2",
        };
        let keys: Vec<_> = rec.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
