//! Generator combinators.

use crate::data::Source;
use crate::error::{ArbitreeError, Result};
use crate::lazy::LazySeq;
use crate::tree::Shrinkable;
use std::rc::Rc;

/// Retry budget for [`Gen::filter`] and everything layered on it.
///
/// Exceeding the budget surfaces [`ArbitreeError::Exhausted`] rather than
/// looping; use [`Gen::filter_with_attempts`] for predicates known to be
/// harder to satisfy.
pub const DEFAULT_FILTER_ATTEMPTS: usize = 100;

/// A generator of shrinkable values of type `T`.
///
/// Generators are explicit, first-class values composed with combinator
/// functions. A draw advances the random source's cursor and is otherwise
/// pure; failures (an exhausted filter, a violated usage policy) propagate
/// as [`ArbitreeError`] instead of being retried or substituted silently.
pub struct Gen<T> {
    generator: Box<dyn Fn(&mut Source) -> Result<Shrinkable<T>>>,
}

impl<T> Gen<T> {
    /// Create a generator from a draw function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Source) -> Result<Shrinkable<T>> + 'static,
    {
        Gen {
            generator: Box::new(f),
        }
    }

    /// Draw a shrinkable value, advancing the source.
    pub fn generate(&self, source: &mut Source) -> Result<Shrinkable<T>> {
        (self.generator)(source)
    }
}

impl<T: Clone + 'static> Gen<T> {
    /// A generator that always produces the same unshrinkable value.
    pub fn constant(value: T) -> Self {
        Gen::new(move |_source| Ok(Shrinkable::leaf(value.clone())))
    }

    /// Apply a pure transform to every generated value and all its shrinks.
    ///
    /// The shrink tree's topology is preserved.
    pub fn map<U, F>(self, f: F) -> Gen<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + 'static,
    {
        let f = Rc::new(f);
        Gen::new(move |source| {
            let tree = self.generate(source)?;
            Ok(tree.map_shared(Rc::clone(&f)))
        })
    }

    /// Keep only values satisfying the predicate, with the default budget.
    pub fn filter<F>(self, predicate: F) -> Gen<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.filter_with_attempts(DEFAULT_FILTER_ATTEMPTS, predicate)
    }

    /// Keep only values satisfying the predicate.
    ///
    /// Draws are resampled until the predicate holds, up to `attempts`
    /// times per generation; the surviving shrink tree is pruned with the
    /// same predicate. Running out of budget is
    /// [`ArbitreeError::Exhausted`].
    pub fn filter_with_attempts<F>(self, attempts: usize, predicate: F) -> Gen<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        Gen::new(move |source| {
            for _ in 0..attempts {
                let tree = self.generate(source)?;
                if predicate(&tree.value) {
                    return Ok(tree.retain_shared(Rc::clone(&predicate)));
                }
            }
            Err(ArbitreeError::Exhausted { attempts })
        })
    }
}

impl Gen<bool> {
    /// Generate a random boolean; `true` shrinks to `false`.
    pub fn bool() -> Self {
        Gen::new(|source| {
            if source.next_bool() {
                let children = LazySeq::new(|| std::iter::once(Shrinkable::leaf(false)));
                Ok(Shrinkable::with_children(true, children))
            } else {
                Ok(Shrinkable::leaf(false))
            }
        })
    }
}

impl Gen<i64> {
    /// Generate an integer uniformly in `[min, max]`.
    ///
    /// Shrinks by halving toward zero, sign preserved, skipping candidates
    /// outside the range; each candidate restarts the halving from its own
    /// magnitude.
    pub fn int_range(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(ArbitreeError::InvalidConstraints {
                message: format!("int_range requires min <= max, got {min} > {max}"),
            });
        }
        Ok(Gen::new(move |source| {
            let span = max as i128 - min as i128 + 1;
            // The full domain's span (2^64) does not fit in a bound; a raw
            // draw reinterpreted as i64 is already uniform over it.
            let value = if span > u64::MAX as i128 {
                source.next_u64() as i64
            } else {
                (min as i128 + source.next_bounded(span as u64) as i128) as i64
            };
            Ok(towards_zero_in(value, min, max))
        }))
    }
}

/// Successive halvings of `value` toward zero: v/2, v/4, ..., ±1, 0.
///
/// Rounds toward zero at every step, so the sign never flips.
fn halving_chain(value: i64) -> LazySeq<i64> {
    LazySeq::new(move || {
        let mut cursor = value;
        std::iter::from_fn(move || {
            if cursor == 0 {
                None
            } else {
                cursor /= 2;
                Some(cursor)
            }
        })
    })
}

/// The canonical halving shrink tree rooted at `value`.
pub(crate) fn towards_zero(value: i64) -> Shrinkable<i64> {
    Shrinkable::with_children(value, halving_chain(value).map(towards_zero))
}

/// Halving shrink tree clamped to `[min, max]`.
fn towards_zero_in(value: i64, min: i64, max: i64) -> Shrinkable<i64> {
    let children = halving_chain(value)
        .filter(move |candidate| (min..=max).contains(candidate))
        .map(move |candidate| towards_zero_in(candidate, min, max));
    Shrinkable::with_children(value, children)
}
