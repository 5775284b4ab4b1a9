//! Reference generators: the executable specification of the contracts.
//!
//! These are not part of the production surface. They exist so the
//! generation and shrink-tree contracts can be exercised directly in
//! tests: a deterministic counter, source-forwarding generators, a
//! single-use generator whose policy violation is an explicit error, and
//! the canonical halving shrinker.

use crate::error::ArbitreeError;
use crate::gen::{towards_zero, Gen};
use crate::tree::Shrinkable;
use std::cell::Cell;

/// Yields `start`, `start + 1`, ... on successive draws. Never shrinks.
pub fn counter(start: u64) -> Gen<u64> {
    let next = Cell::new(start);
    Gen::new(move |_source| {
        let value = next.get();
        next.set(value + 1);
        Ok(Shrinkable::leaf(value))
    })
}

/// Forwards the source's raw output unchanged. Never shrinks.
pub fn forward() -> Gen<u64> {
    Gen::new(|source| Ok(Shrinkable::leaf(source.next_u64())))
}

/// Forwards `len` raw draws as a vector. Never shrinks.
pub fn forward_vec(len: usize) -> Gen<Vec<u64>> {
    Gen::new(move |source| {
        Ok(Shrinkable::leaf(
            (0..len).map(|_| source.next_u64()).collect(),
        ))
    })
}

/// Yields `value` exactly once; every later draw is
/// [`ArbitreeError::AlreadyConsumed`].
pub fn single_use<T: Clone + 'static>(value: T) -> Gen<T> {
    let consumed = Cell::new(false);
    Gen::new(move |_source| {
        if consumed.replace(true) {
            return Err(ArbitreeError::AlreadyConsumed);
        }
        Ok(Shrinkable::leaf(value.clone()))
    })
}

/// Always yields `value`, shrinking by halving toward zero.
pub fn halving(value: i64) -> Gen<i64> {
    Gen::new(move |_source| Ok(towards_zero(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Source;

    #[test]
    fn test_counter_yields_consecutive_values() {
        let gen = counter(5);
        let mut source = Source::from_u64(0);
        let drawn: Vec<u64> = (0..4)
            .map(|_| gen.generate(&mut source).unwrap().value)
            .collect();
        assert_eq!(drawn, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_forward_matches_the_raw_stream() {
        let gen = forward();
        let mut source = Source::from_u64(9);
        let mut mirror = Source::from_u64(9);
        for _ in 0..8 {
            assert_eq!(gen.generate(&mut source).unwrap().value, mirror.next_u64());
        }
    }

    #[test]
    fn test_forward_vec_draws_in_order() {
        let gen = forward_vec(3);
        let mut source = Source::from_u64(9);
        let mut mirror = Source::from_u64(9);
        let drawn = gen.generate(&mut source).unwrap().value;
        let expected: Vec<u64> = (0..3).map(|_| mirror.next_u64()).collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_single_use_policy() {
        let gen = single_use("once");
        let mut source = Source::from_u64(0);
        assert_eq!(gen.generate(&mut source).unwrap().value, "once");
        assert_eq!(
            gen.generate(&mut source).unwrap_err(),
            ArbitreeError::AlreadyConsumed
        );
    }

    #[test]
    fn test_halving_fixture_shrinks_its_value() {
        let gen = halving(100);
        let mut source = Source::from_u64(0);
        let tree = gen.generate(&mut source).unwrap();
        assert_eq!(tree.value, 100);
        assert_eq!(tree.shrink_values(), vec![50, 25, 12, 6, 3, 1, 0]);
    }
}
