//! Normalize an ugly Cloacal document end to end.
//!
//! Run with: cargo run --example simple

use cloacal::{parse, reformat};

fn main() {
    let ugly = "
    +--+
    | Carlisle |
    +-----

    age -- 99
    species - seagull
    ilk ------------ bird

    description ----
         Id ipsum elit tempor non incididunt laborum
      anim dolore eu fugiat. Dolor consectetur aute occaecat.

    memories -----------------------
      >    Consectetur ut qui Lorem ad.
      >  Veniam mollit nostrud velit laborum laborum veniam irure ut aute magna labore aliqua.
";

    // Inspect the structured record
    let record = parse(ugly);
    println!("parsed {} fields, name = {:?}\n", record.len(), record.name());

    // One call does parse + canonical format
    println!("{}", reformat(ugly));
}
