//! Read-only and write-only views over [`Pair`].
//!
//! A function that only feeds values into a pair should compile against any
//! pair whose slot type can absorb them, and a function that only reads
//! values out should compile against any pair whose slot type widens into the
//! type it wants. Splitting those capabilities into two traits makes the
//! compiler enforce exactly that: each bound admits every pair on the safe
//! side of the conversion and rejects the rest before the program runs.

use crate::pair::Pair;

/// Write-only view: values of type `V` can be stored, nothing can be read.
pub trait PairSink<V> {
    fn put_first(&mut self, value: V);
    fn put_last(&mut self, value: V);
}

/// Any pair whose slot type `T` can absorb a `V` is a sink for `V`. A
/// `Pair<f64>` therefore accepts `i32` writes, while a `Pair<i32>` refuses
/// `f64` writes at compile time.
impl<T, V: Into<T>> PairSink<V> for Pair<T> {
    fn put_first(&mut self, value: V) {
        self.set_first(value.into());
    }

    fn put_last(&mut self, value: V) {
        self.set_last(value.into());
    }
}

/// Read-only view: values come out widened to `V`, nothing can be written.
pub trait PairSource<V> {
    fn get_first(&self) -> V;
    fn get_last(&self) -> V;
}

/// Any pair whose slot type widens into `V` is a source of `V`. Reading a
/// `Pair<u8>` as `u32` works; reading it back as `u8` from a `Pair<u32>`
/// does not compile.
impl<T: Clone + Into<V>, V> PairSource<V> for Pair<T> {
    fn get_first(&self) -> V {
        self.first().clone().into()
    }

    fn get_last(&self) -> V {
        self.last().clone().into()
    }
}

/// Stores one value in both slots of any pair that can absorb it.
///
/// Widening is accepted, narrowing is not:
///
/// ```
/// use pairs_and_paths::{set_same, Pair};
///
/// let mut wide = Pair::new(12.3_f64, 4.56);
/// set_same(&mut wide, 100_i32);
/// assert_eq!(wide, Pair::new(100.0, 100.0));
/// ```
///
/// ```compile_fail
/// use pairs_and_paths::{set_same, Pair};
///
/// let mut narrow = Pair::new(1_i32, 2_i32);
/// set_same(&mut narrow, 0.5_f64); // f64 does not convert into i32
/// ```
pub fn set_same<V: Clone>(pair: &mut impl PairSink<V>, value: V) {
    pair.put_first(value.clone());
    pair.put_last(value);
}

/// Reads both slots widened to `V`.
pub fn read_both<V>(pair: &impl PairSource<V>) -> (V, V) {
    (pair.get_first(), pair.get_last())
}

/// True when either slot is vacant. Works for every element type because it
/// never touches the element itself.
pub fn has_empty_slot<T>(pair: &Pair<Option<T>>) -> bool {
    pair.first().is_none() || pair.last().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_same_widens_into_float_pair() {
        let mut pair = Pair::new(12.3_f64, 4.56);
        set_same(&mut pair, 100_i32);
        assert_eq!(*pair.first(), 100.0);
        assert_eq!(*pair.last(), 100.0);
    }

    #[test]
    fn test_set_same_on_exact_type() {
        let mut pair = Pair::new(123_i64, 456);
        set_same(&mut pair, 200_i32);
        assert_eq!(*pair.first(), 200);
        assert_eq!(*pair.last(), 200);
    }

    #[test]
    fn test_sink_slots_are_independent() {
        let mut pair = Pair::new(0.0_f64, 0.0);
        pair.put_first(1_i32);
        pair.put_last(2_i32);
        assert_eq!(pair, Pair::new(1.0, 2.0));
    }

    #[test]
    fn test_read_both_widens() {
        let pair = Pair::new(3_u8, 250);
        let (first, last): (u32, u32) = read_both(&pair);
        assert_eq!((first, last), (3, 250));
    }

    #[test]
    fn test_read_both_identity_conversion() {
        let pair = Pair::new(5_i32, 6);
        let (first, last): (i32, i32) = read_both(&pair);
        assert_eq!((first, last), (5, 6));
    }

    #[test]
    fn test_has_empty_slot() {
        let full = Pair::new(Some(1), Some(2));
        let half = Pair::new(Some(1), None);
        let empty: Pair<Option<i32>> = Pair::new(None, None);
        assert!(!has_empty_slot(&full));
        assert!(has_empty_slot(&half));
        assert!(has_empty_slot(&empty));
    }
}
