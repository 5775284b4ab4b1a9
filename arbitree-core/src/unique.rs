//! Uniqueness-constrained sequence generation.

use crate::error::{ArbitreeError, Result};
use crate::gen::Gen;
use std::rc::Rc;

/// Remove later duplicates under an arbitrary equivalence predicate.
///
/// An element is kept iff no earlier-indexed element of the *input* is
/// equivalent to it, so the first representative of each group survives in
/// its original position. O(n²) comparisons; no hashing, so the predicate
/// need not be transitive (the pairwise rule above still gives one
/// deterministic answer). Idempotent: re-filtering the output returns it
/// unchanged.
pub fn dedup_first<T, F>(items: &[T], equivalent: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut kept = Vec::with_capacity(items.len());
    for (index, candidate) in items.iter().enumerate() {
        let duplicate = items[..index]
            .iter()
            .any(|earlier| equivalent(earlier, candidate));
        if !duplicate {
            kept.push(candidate.clone());
        }
    }
    kept
}

/// Maximum length granted when only a minimum is specified.
///
/// Small minimums get generous headroom so deduplication has room to work.
pub fn default_max_length(min_length: usize) -> usize {
    2 * min_length + 10
}

type Equivalence<T> = Rc<dyn Fn(&T, &T) -> bool>;

/// Constraints for [`Gen::unique_vec`].
///
/// Every field is optional: `min_length` defaults to 0, `max_length` to
/// [`default_max_length`] of the minimum, and the equivalence to structural
/// equality. Positional shapes convert via `From`: a bare `usize` is a
/// maximum length, a `(min, max)` pair sets both bounds.
pub struct UniqueConstraints<T> {
    min_length: usize,
    max_length: Option<usize>,
    equivalence: Option<Equivalence<T>>,
}

impl<T> UniqueConstraints<T> {
    /// Constraints with every field left to its default.
    pub fn new() -> Self {
        UniqueConstraints {
            min_length: 0,
            max_length: None,
            equivalence: None,
        }
    }

    /// Require at least `min_length` surviving elements.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Allow at most `max_length` elements.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Judge uniqueness with the given predicate instead of equality.
    pub fn with_equivalence<F>(mut self, equivalent: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        self.equivalence = Some(Rc::new(equivalent));
        self
    }
}

impl<T> Default for UniqueConstraints<T> {
    fn default() -> Self {
        UniqueConstraints::new()
    }
}

impl<T> From<()> for UniqueConstraints<T> {
    fn from(_: ()) -> Self {
        UniqueConstraints::new()
    }
}

impl<T> From<usize> for UniqueConstraints<T> {
    fn from(max_length: usize) -> Self {
        UniqueConstraints::new().with_max_length(max_length)
    }
}

impl<T> From<(usize, usize)> for UniqueConstraints<T> {
    fn from((min_length, max_length): (usize, usize)) -> Self {
        UniqueConstraints::new()
            .with_min_length(min_length)
            .with_max_length(max_length)
    }
}

impl<T: PartialEq + 'static> UniqueConstraints<T> {
    /// Fill unspecified fields and reject conflicting bounds.
    fn normalize(self) -> Result<(usize, usize, Equivalence<T>)> {
        let min = self.min_length;
        let max = self
            .max_length
            .unwrap_or_else(|| default_max_length(min));
        if min > max {
            return Err(ArbitreeError::InvalidConstraints {
                message: format!("unique_vec requires min_length <= max_length, got {min} > {max}"),
            });
        }
        let equivalence = self
            .equivalence
            .unwrap_or_else(|| Rc::new(|a: &T, b: &T| a == b));
        Ok((min, max, equivalence))
    }
}

impl<T: Clone + PartialEq + 'static> Gen<Vec<T>> {
    /// Generate vectors with no two elements equivalent to each other.
    ///
    /// Draws a raw vector with length in the normalized `[min, max]`,
    /// passes it and every shrink candidate through [`dedup_first`],
    /// and, when `min_length > 0`, resamples until deduplication leaves at
    /// least that many elements (bounded by the shared
    /// [`filter`](Gen::filter) budget, whose exhaustion surfaces as
    /// [`ArbitreeError::Exhausted`]). Invalid constraint shapes are
    /// rejected here, never deferred to generation.
    pub fn unique_vec<C>(element: Gen<T>, constraints: C) -> Result<Gen<Vec<T>>>
    where
        C: Into<UniqueConstraints<T>>,
    {
        let (min, max, equivalent) = constraints.into().normalize()?;
        let raw = Gen::vec_in_range(element, min, max)?;
        let deduped = raw.map(move |items: Vec<T>| dedup_first(&items, |a, b| equivalent(a, b)));
        if min == 0 {
            Ok(deduped)
        } else {
            Ok(deduped.filter(move |items: &Vec<T>| items.len() >= min))
        }
    }
}
