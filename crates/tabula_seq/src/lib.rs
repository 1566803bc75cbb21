//! Tabula Seq - lazy sequences built from a generator, a target and a state.
//!
//! A sequence is a value, not a cursor. [`Seq::step`] never advances the
//! receiver: it returns the element together with a *new* sequence
//! positioned after it. Two holders of the same sequence therefore always
//! observe the same future, and a sequence can be stepped from any saved
//! point as often as needed.
//!
//! # Model
//!
//! - The **generator** is a pure function from `(target, state)` to a
//!   [`Step`]. It must return the same step for the same inputs, because
//!   [`Seq::has_next`] peeks by calling it.
//! - The **target** is the immutable thing being walked (a slice, a table).
//!   It is shared behind an `Arc`, so cloning a sequence only copies the
//!   state.
//! - The **state** is the generator's cursor.
//!
//! A sequence without a generator is empty. A generator that returns
//! [`Step::Last`] hands out a final element and leaves the sequence empty.
//!
//! # Example
//!
//! ```
//! use tabula_seq::Seq;
//!
//! let squares = Seq::from_vec(vec![1, 2, 3, 4]).map(|n, _, _| n * n);
//! let (head, tail) = squares.slice(2);
//! assert_eq!(head, vec![1, 4]);
//! assert_eq!(tail, vec![9, 16]);
//! ```

mod generators;
mod iter;

use std::fmt;
use std::sync::Arc;

pub use generators::{Mapped, Unfold, VecGenerator};
pub use iter::SeqIter;

/// Outcome of one generator call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step<T, S> {
    /// An element and the state positioned after it.
    Yield(T, S),
    /// The final element; no state follows it.
    Last(T),
    /// Nothing left.
    Done,
}

impl<T, S> Step<T, S> {
    /// Transform the element of this step, keeping the state.
    #[inline]
    pub fn map_item<U>(self, f: impl FnOnce(T) -> U) -> Step<U, S> {
        match self {
            Step::Yield(item, state) => Step::Yield(f(item), state),
            Step::Last(item) => Step::Last(f(item)),
            Step::Done => Step::Done,
        }
    }
}

/// A pure step function over a target and a cursor.
pub trait Generator {
    /// The thing being walked.
    type Target: ?Sized;
    /// Cursor reinterpreted on every call.
    type State: Clone;
    /// Element type.
    type Item;

    /// Produce the element at `state` and the state after it.
    fn generate(&self, target: &Self::Target, state: &Self::State)
        -> Step<Self::Item, Self::State>;
}

struct Parts<G: Generator> {
    generator: Arc<G>,
    target: Arc<G::Target>,
    state: G::State,
}

impl<G: Generator> Clone for Parts<G> {
    fn clone(&self) -> Self {
        Parts {
            generator: Arc::clone(&self.generator),
            target: Arc::clone(&self.target),
            state: self.state.clone(),
        }
    }
}

/// Lazy sequence: a `(generator, target, state)` triple, or nothing.
pub struct Seq<G: Generator> {
    parts: Option<Parts<G>>,
}

impl<G: Generator> Clone for Seq<G> {
    fn clone(&self) -> Self {
        Seq {
            parts: self.parts.clone(),
        }
    }
}

impl<G: Generator> Default for Seq<G> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<G: Generator> Seq<G> {
    /// Create a sequence that walks `target` from `state`.
    pub fn new(generator: G, target: G::Target, state: G::State) -> Self
    where
        G::Target: Sized,
    {
        Self::from_shared(Arc::new(generator), Arc::new(target), state)
    }

    /// Create a sequence over an already shared generator and target.
    pub fn from_shared(generator: Arc<G>, target: Arc<G::Target>, state: G::State) -> Self {
        Seq {
            parts: Some(Parts {
                generator,
                target,
                state,
            }),
        }
    }

    /// The sequence with no generator.
    pub fn empty() -> Self {
        Seq { parts: None }
    }

    /// True iff this sequence has no generator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_none()
    }

    /// Peek whether stepping leaves a non-empty sequence behind.
    ///
    /// Calls the generator once and discards the element. A sequence whose
    /// next step is [`Step::Last`] reports `false` even though it still has
    /// that one element to give.
    pub fn has_next(&self) -> bool {
        match &self.parts {
            None => false,
            Some(parts) => matches!(
                parts.generator.generate(&parts.target, &parts.state),
                Step::Yield(..)
            ),
        }
    }

    /// Produce the next element and the sequence after it.
    ///
    /// Returns `None` when the sequence is empty or the generator is done.
    /// After a [`Step::Last`] the returned sequence is empty.
    pub fn step(&self) -> Option<(G::Item, Self)> {
        let parts = self.parts.as_ref()?;
        match parts.generator.generate(&parts.target, &parts.state) {
            Step::Yield(item, state) => {
                let rest = Seq {
                    parts: Some(Parts {
                        generator: Arc::clone(&parts.generator),
                        target: Arc::clone(&parts.target),
                        state,
                    }),
                };
                Some((item, rest))
            }
            Step::Last(item) => Some((item, Self::empty())),
            Step::Done => None,
        }
    }

    /// The next element, if any.
    pub fn first(&self) -> Option<G::Item> {
        self.step().map(|(item, _)| item)
    }

    /// The sequence after the next element; empty once exhausted.
    pub fn rest(&self) -> Self {
        self.step().map_or_else(Self::empty, |(_, rest)| rest)
    }

    /// Drain every remaining element into a vector, in order.
    ///
    /// Only terminates if the generator eventually reports exhaustion.
    pub fn take(&self) -> Vec<G::Item> {
        let mut items = Vec::new();
        let mut current = self.clone();
        while let Some((item, rest)) = current.step() {
            items.push(item);
            current = rest;
        }
        items
    }

    /// Take at most `n` elements, returning them and the remaining sequence.
    pub fn take_n(&self, n: usize) -> (Vec<G::Item>, Self) {
        let mut items = Vec::with_capacity(n.min(64));
        let mut current = self.clone();
        while items.len() < n {
            match current.step() {
                Some((item, rest)) => {
                    items.push(item);
                    current = rest;
                }
                None => return (items, Self::empty()),
            }
        }
        (items, current)
    }

    /// Skip up to `n` elements.
    pub fn drop(&self, n: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..n {
            match current.step() {
                Some((_, rest)) => current = rest,
                None => return Self::empty(),
            }
        }
        current
    }

    /// Split into the first `n` elements and everything after them.
    pub fn slice(&self, n: usize) -> (Vec<G::Item>, Vec<G::Item>) {
        let (head, rest) = self.take_n(n);
        (head, rest.take())
    }

    /// Lazily apply `f` to each element.
    ///
    /// `f` receives the element, the state it was produced from, and the
    /// target. It is not called until an element of the mapped sequence is
    /// stepped, and it is called again whenever that element is produced
    /// again (by a peek or a replay from a saved sequence).
    pub fn map<U, F>(&self, f: F) -> Seq<Mapped<G, F>>
    where
        F: Fn(G::Item, &G::State, &G::Target) -> U,
    {
        match &self.parts {
            None => Seq::empty(),
            Some(parts) => Seq::from_shared(
                Arc::new(Mapped::new(Arc::clone(&parts.generator), f)),
                Arc::clone(&parts.target),
                parts.state.clone(),
            ),
        }
    }

    /// Iterator over the remaining elements.
    ///
    /// The iterator owns a clone of this sequence (two `Arc` bumps and a
    /// state copy); `self` is left untouched.
    pub fn iter(&self) -> SeqIter<G> {
        SeqIter::new(self.clone())
    }
}

impl<T: Clone> Seq<VecGenerator<T>> {
    /// Sequence over the elements of `items`.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_shared(Arc::new(VecGenerator::new()), Arc::from(items), 0)
    }
}

impl<S: Clone, T, F> Seq<Unfold<S, F>>
where
    F: Fn(&S) -> Step<T, S>,
{
    /// Sequence driven by a pure step closure starting at `seed`.
    pub fn unfold(seed: S, f: F) -> Self {
        Self::new(Unfold::new(f), (), seed)
    }
}

impl<G: Generator> IntoIterator for Seq<G> {
    type Item = G::Item;
    type IntoIter = SeqIter<G>;

    fn into_iter(self) -> SeqIter<G> {
        SeqIter::new(self)
    }
}

impl<G: Generator> IntoIterator for &Seq<G> {
    type Item = G::Item;
    type IntoIter = SeqIter<G>;

    fn into_iter(self) -> SeqIter<G> {
        self.iter()
    }
}

impl<G> fmt::Debug for Seq<G>
where
    G: Generator,
    G::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parts {
            None => f.write_str("Seq(empty)"),
            Some(parts) => f.debug_struct("Seq").field("state", &parts.state).finish(),
        }
    }
}
