// Generic Pair Basics
// Construction with type inference, accessors, and ordering through trait bounds

use colored::Colorize;
use pairs_and_paths::Pair;

fn main() {
    // =========================================================================
    // Part 1: Construction and type inference
    // =========================================================================

    // The slot type is inferred from the arguments, the same way collection
    // element types are.
    let words = Pair::new("hello", "world");
    println!("inferred &str pair: {words}");

    // An annotation pins the parameter when the literal alone is ambiguous.
    let numbers: Pair<i64> = Pair::new(123, 456);
    println!("annotated i64 pair: {numbers}");

    // Tuples convert directly.
    let converted = Pair::from((1.5, 2.5));
    println!("from tuple: {converted}");

    // =========================================================================
    // Part 2: Accessors and mutation
    // =========================================================================

    let mut scores = Pair::new(10, 20);
    println!("before: first={} last={}", scores.first(), scores.last());

    scores.set_first(11);
    scores.set_last(21);
    println!("after:  first={} last={}", scores.first(), scores.last());
    println!("{}", "✓ slots mutate independently".green());

    // =========================================================================
    // Part 3: Ordering through trait bounds
    // =========================================================================

    // larger/smaller only exist when the slot type implements Ord, the same
    // contract sort() asks of its elements.
    let bounds = Pair::new(42, 7);
    println!("larger={} smaller={}", bounds.larger(), bounds.smaller());

    // str already implements Ord, so string slices sort with no extra code.
    let mut fruit = ["banana", "apple", "cherry"];
    fruit.sort();
    println!("sorted strings: {fruit:?}");

    // Pairs themselves order lexicographically by slot, so whole pairs sort
    // whenever their slot type does.
    let mut pairs = vec![Pair::new(2, 1), Pair::new(1, 9), Pair::new(1, 3)];
    pairs.sort();
    for pair in &pairs {
        println!("  {pair}");
    }
    println!("{}", "✓ Ord composes from slots to pairs".green());
}
