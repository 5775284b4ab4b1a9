//! Restartable lazy sequences.

use std::rc::Rc;

/// A possibly-infinite, lazily produced, restartable sequence.
///
/// A `LazySeq` holds a production recipe rather than elements or an
/// iteration cursor: every call to [`iter`](LazySeq::iter) re-runs the
/// recipe and yields a fresh iterator from the start. This is what lets a
/// shrink node hand out its candidates any number of times without
/// exhaustion. Cloning shares the recipe and is cheap.
pub struct LazySeq<T> {
    recipe: Rc<dyn Fn() -> Box<dyn Iterator<Item = T>>>,
}

impl<T> Clone for LazySeq<T> {
    fn clone(&self) -> Self {
        LazySeq {
            recipe: Rc::clone(&self.recipe),
        }
    }
}

impl<T: 'static> LazySeq<T> {
    /// Create a sequence from a recipe producing a fresh iterator per call.
    ///
    /// The recipe must be pure: repeated invocations yield equal elements.
    pub fn new<F, I>(recipe: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = T> + 'static,
    {
        LazySeq {
            recipe: Rc::new(move || Box::new(recipe()) as Box<dyn Iterator<Item = T>>),
        }
    }

    /// The empty sequence.
    pub fn empty() -> Self {
        LazySeq::new(|| std::iter::empty())
    }

    /// Start a fresh iteration from the beginning.
    pub fn iter(&self) -> Box<dyn Iterator<Item = T>> {
        (self.recipe)()
    }

    /// Whether the sequence yields no elements.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Lazily apply a function to every element.
    pub fn map<U, F>(&self, f: F) -> LazySeq<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let source = self.clone();
        let f = Rc::new(f);
        LazySeq::new(move || {
            let f = Rc::clone(&f);
            source.iter().map(move |element| f(element))
        })
    }

    /// Lazily drop elements failing the predicate.
    pub fn filter<F>(&self, keep: F) -> LazySeq<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        let source = self.clone();
        let keep = Rc::new(keep);
        LazySeq::new(move || {
            let keep = Rc::clone(&keep);
            source.iter().filter(move |element| keep(element))
        })
    }

    /// Lazily concatenate another sequence after this one.
    pub fn chain(&self, other: &LazySeq<T>) -> LazySeq<T> {
        let first = self.clone();
        let second = other.clone();
        LazySeq::new(move || first.iter().chain(second.iter()))
    }
}
