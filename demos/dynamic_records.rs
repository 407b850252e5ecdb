//! Build records in code with the record! macro.
//!
//! Run with: cargo run --example dynamic_records

use cloacal::{format, record, Value};

fn main() {
    let rec = record! {
        "name" => "Edgar",
        "ilk" => "crow",
        "age" => "7",
        "description" => (Value::Block(
            "A crow of the parking lot, known to the shopping carts and \
             feared by the sandwich carts."
                .to_string(),
        )),
        "grievances" => [
            "the scarecrow situation out by the east field",
            "plastic owls",
        ],
        "tricks" => [],
    };

    println!("{}", format(&rec));
}
