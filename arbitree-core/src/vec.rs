//! Bounded, variable-length sequence generation.

use crate::error::{ArbitreeError, Result};
use crate::gen::Gen;
use crate::lazy::LazySeq;
use crate::tree::Shrinkable;
use std::rc::Rc;

const DEFAULT_MAX_LENGTH: usize = 10;

impl<T: Clone + 'static> Gen<Vec<T>> {
    /// Generate vectors of up to ten elements.
    pub fn vec_of(element: Gen<T>) -> Gen<Vec<T>> {
        bounded(element, 0, DEFAULT_MAX_LENGTH)
    }

    /// Generate vectors whose length lies uniformly in `[min, max]`.
    ///
    /// Shrinks toward `min` by dropping elements, then shrinks surviving
    /// elements in place; every candidate is itself a valid-length vector.
    /// `min > max` is a configuration error.
    pub fn vec_in_range(element: Gen<T>, min: usize, max: usize) -> Result<Gen<Vec<T>>> {
        if min > max {
            return Err(ArbitreeError::InvalidConstraints {
                message: format!("vec_in_range requires min <= max, got {min} > {max}"),
            });
        }
        Ok(bounded(element, min, max))
    }
}

fn bounded<T: Clone + 'static>(element: Gen<T>, min: usize, max: usize) -> Gen<Vec<T>> {
    Gen::new(move |source| {
        let len = min + source.next_bounded((max - min + 1) as u64) as usize;
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(element.generate(source)?);
        }
        Ok(sequence_shrinkable(Rc::new(items), min))
    })
}

/// Build a shrinkable vector from per-element trees.
///
/// Candidates, in order: one aggressive truncation to `min` elements, then
/// removal of one element at a time (front to back) while the minimum
/// allows, then each element's own shrinks substituted in place. All
/// candidates carry the same recursive strategy, and the recipe is
/// re-invocable without exhaustion.
fn sequence_shrinkable<T: Clone + 'static>(
    items: Rc<Vec<Shrinkable<T>>>,
    min: usize,
) -> Shrinkable<Vec<T>> {
    let value: Vec<T> = items.iter().map(|item| item.value.clone()).collect();
    let recipe_items = Rc::clone(&items);
    let children = LazySeq::new(move || {
        let items = Rc::clone(&recipe_items);
        let len = items.len();

        let truncation = if len > min + 1 {
            Some(sequence_shrinkable(Rc::new(items[..min].to_vec()), min))
        } else {
            None
        };

        let removals = {
            let items = Rc::clone(&items);
            let indexes = if len > min { 0..len } else { 0..0 };
            indexes.map(move |index| {
                let mut shorter = (*items).clone();
                shorter.remove(index);
                sequence_shrinkable(Rc::new(shorter), min)
            })
        };

        let element_shrinks = (0..len).flat_map(move |index| {
            let slots = Rc::clone(&items);
            items[index].shrink().map(move |candidate| {
                let mut replaced = (*slots).clone();
                replaced[index] = candidate;
                sequence_shrinkable(Rc::new(replaced), min)
            })
        });

        truncation
            .into_iter()
            .chain(removals)
            .chain(element_shrinks)
    });
    Shrinkable::with_children(value, children)
}
