//! Shrinkable values: a generated value plus its lazy shrink tree.

use crate::lazy::LazySeq;
use std::fmt;
use std::rc::Rc;

/// A generated value paired with a lazy recipe for simpler candidates.
///
/// The candidates form a tree, not a list: each child is itself a
/// `Shrinkable` whose own recipe restarts from that smaller value, and
/// exploring one child's subtree never exhausts a sibling's. No candidate
/// is materialized until pulled, and re-requesting [`shrink`](Shrinkable::shrink)
/// always yields the same candidates (the recipe is pure and restartable).
pub struct Shrinkable<T> {
    /// The generated value.
    pub value: T,
    children: LazySeq<Shrinkable<T>>,
}

impl<T: Clone> Clone for Shrinkable<T> {
    fn clone(&self) -> Self {
        Shrinkable {
            value: self.value.clone(),
            children: self.children.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Shrinkable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shrinkable")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> Shrinkable<T> {
    /// A value with no shrink candidates.
    pub fn leaf(value: T) -> Self {
        Shrinkable {
            value,
            children: LazySeq::empty(),
        }
    }

    /// A value with the given shrink candidates.
    pub fn with_children(value: T, children: LazySeq<Shrinkable<T>>) -> Self {
        Shrinkable { value, children }
    }

    /// Start a fresh traversal of the shrink candidates.
    pub fn shrink(&self) -> Box<dyn Iterator<Item = Shrinkable<T>>> {
        self.children.iter()
    }

    /// Whether any shrink candidate exists.
    pub fn has_shrinks(&self) -> bool {
        !self.children.is_empty()
    }

    /// The first-level candidate values.
    pub fn shrink_values(&self) -> Vec<T> {
        self.shrink().map(|child| child.value).collect()
    }

    /// Collect the value and all candidate values down to `max_depth`.
    ///
    /// Intended for inspection and tests; on large trees prefer walking
    /// [`shrink`](Shrinkable::shrink) directly.
    pub fn expand(&self, max_depth: usize) -> Vec<T> {
        let mut values = vec![self.value.clone()];
        self.expand_into(&mut values, max_depth, 0);
        values
    }

    fn expand_into(&self, values: &mut Vec<T>, max_depth: usize, depth: usize) {
        if depth >= max_depth {
            return;
        }
        for child in self.shrink() {
            values.push(child.value.clone());
            child.expand_into(values, max_depth, depth + 1);
        }
    }

    /// Apply a pure transform to the value and, lazily, to every candidate.
    ///
    /// The tree's topology is preserved exactly.
    pub fn map<U, F>(self, f: F) -> Shrinkable<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + 'static,
    {
        self.map_shared(Rc::new(f))
    }

    pub(crate) fn map_shared<U, F>(self, f: Rc<F>) -> Shrinkable<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + 'static,
    {
        let Shrinkable { value, children } = self;
        let value = f(value);
        let recipe_f = Rc::clone(&f);
        let children = children.map(move |child| child.map_shared(Rc::clone(&recipe_f)));
        Shrinkable { value, children }
    }

    /// Prune every candidate (recursively) whose value fails the predicate.
    ///
    /// The root value is kept as-is; the caller is responsible for having
    /// checked it.
    pub fn retain<F>(self, keep: F) -> Shrinkable<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.retain_shared(Rc::new(keep))
    }

    pub(crate) fn retain_shared<F>(self, keep: Rc<F>) -> Shrinkable<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        let Shrinkable { value, children } = self;
        let gate = Rc::clone(&keep);
        let children = children
            .filter(move |child| gate(&child.value))
            .map(move |child| child.retain_shared(Rc::clone(&keep)));
        Shrinkable { value, children }
    }
}
