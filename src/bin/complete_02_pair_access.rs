// Pair Access Capabilities
// Write-only, read-only, and untyped views over a generic pair

use colored::Colorize;
use pairs_and_paths::{has_empty_slot, read_both, set_same, Pair, PairSink};

fn main() {
    // =========================================================================
    // Part 1: Write-only access accepts wider pairs
    // =========================================================================

    // set_same only ever writes i32 values, so it works against a Pair<f64>
    // just as well as a Pair<i64>: both slot types absorb an i32. A Pair<i16>
    // would be refused at compile time.
    let mut readings = Pair::new(12.3_f64, 4.56);
    let mut counters = Pair::new(123_i64, 456);

    set_same(&mut readings, 100_i32);
    set_same(&mut counters, 200_i32);

    println!("readings after fill: {readings}");
    println!("counters after fill: {counters}");
    println!("{}", "✓ one writer, two slot types".green());

    // The sink view also exposes the slots individually.
    let mut mixed = Pair::new(0.0_f64, 0.0);
    mixed.put_first(1_i32);
    mixed.put_last(2_i32);
    println!("slot-by-slot writes: {mixed}");

    // =========================================================================
    // Part 2: Read-only access widens to a common type
    // =========================================================================

    // Reading never hands back the pair's own slot type; values come out
    // widened to whatever the caller asked for, so a u8 pair and a u32 pair
    // can both feed a u32 computation.
    let bytes = Pair::new(3_u8, 250);
    let (first, last): (u32, u32) = read_both(&bytes);
    println!("u8 slots read as u32: {first} + {last} = {}", first + last);

    let small = Pair::new(40_i32, 2);
    let (a, b): (i64, i64) = read_both(&small);
    println!("i32 slots read as i64: {a} + {b} = {}", a + b);
    println!("{}", "✓ one reader, two slot types".green());

    // =========================================================================
    // Part 3: No typed access at all
    // =========================================================================

    // swap and has_empty_slot never name the slot type, so they work for
    // every pair there is.
    let mut order = Pair::new("first", "last");
    order.swap();
    println!("after swap: {order}");

    let slots: Pair<Option<&str>> = Pair::new(Some("occupied"), None);
    if has_empty_slot(&slots) {
        println!("{}", "✓ vacancy detected without reading a value".green());
    }
}
