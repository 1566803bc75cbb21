//! Built-in generators: vectors, step closures and the `map` adapter.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::{Generator, Step};

/// Walks a shared slice by index.
pub struct VecGenerator<T> {
    _item: PhantomData<fn() -> T>,
}

impl<T> VecGenerator<T> {
    pub(crate) fn new() -> Self {
        VecGenerator { _item: PhantomData }
    }
}

impl<T: Clone> Generator for VecGenerator<T> {
    type Target = [T];
    type State = usize;
    type Item = T;

    fn generate(&self, target: &[T], state: &usize) -> Step<T, usize> {
        match target.get(*state) {
            Some(item) => Step::Yield(item.clone(), state.saturating_add(1)),
            None => Step::Done,
        }
    }
}

impl<T> fmt::Debug for VecGenerator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VecGenerator")
    }
}

/// Generator driven by a step closure over its own state; the target is `()`.
pub struct Unfold<S, F> {
    step: F,
    _state: PhantomData<fn(&S)>,
}

impl<S, F> Unfold<S, F> {
    pub(crate) fn new(step: F) -> Self {
        Unfold {
            step,
            _state: PhantomData,
        }
    }
}

impl<S, T, F> Generator for Unfold<S, F>
where
    S: Clone,
    F: Fn(&S) -> Step<T, S>,
{
    type Target = ();
    type State = S;
    type Item = T;

    fn generate(&self, _target: &(), state: &S) -> Step<T, S> {
        (self.step)(state)
    }
}

/// Lazy map adapter produced by [`Seq::map`](crate::Seq::map).
///
/// Shares the source generator, so the mapped sequence walks the same
/// target with the same states as its source.
pub struct Mapped<G, F> {
    source: Arc<G>,
    transform: F,
}

impl<G, F> Mapped<G, F> {
    pub(crate) fn new(source: Arc<G>, transform: F) -> Self {
        Mapped { source, transform }
    }
}

impl<G, U, F> Generator for Mapped<G, F>
where
    G: Generator,
    F: Fn(G::Item, &G::State, &G::Target) -> U,
{
    type Target = G::Target;
    type State = G::State;
    type Item = U;

    fn generate(&self, target: &G::Target, state: &G::State) -> Step<U, G::State> {
        self.source
            .generate(target, state)
            .map_item(|item| (self.transform)(item, state, target))
    }
}
