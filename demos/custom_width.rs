//! Change the canonical line length.
//!
//! Run with: cargo run --example custom_width

use cloacal::{parse, format_with_options, FormatOptions};

fn main() {
    let doc = "
story ----
  The gull had been watching the chip van for three summers
  and knew its schedule better than the man who drove it.
";

    let record = parse(doc);

    for width in [30, 44, 72] {
        let options = FormatOptions::new().with_max_line_length(width);
        println!("--- {} columns ---", width);
        println!("{}\n", format_with_options(&record, options));
    }
}
