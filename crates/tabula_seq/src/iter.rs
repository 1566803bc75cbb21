use super::{Generator, Seq};

/// `Iterator` over a sequence, advancing a private copy of it.
pub struct SeqIter<G: Generator> {
    seq: Seq<G>,
}

impl<G: Generator> SeqIter<G> {
    pub(crate) fn new(seq: Seq<G>) -> Self {
        SeqIter { seq }
    }

    /// The sequence of elements not yet yielded.
    pub fn remaining(&self) -> &Seq<G> {
        &self.seq
    }
}

impl<G: Generator> Iterator for SeqIter<G> {
    type Item = G::Item;

    fn next(&mut self) -> Option<G::Item> {
        match self.seq.step() {
            Some((item, rest)) => {
                self.seq = rest;
                Some(item)
            }
            None => {
                // Fused: the generator is not consulted again.
                self.seq = Seq::empty();
                None
            }
        }
    }
}

impl<G: Generator> std::iter::FusedIterator for SeqIter<G> {}
