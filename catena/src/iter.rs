use std::iter::FusedIterator;

use catena_sequence::{BidirectionalSequence, RandomAccessSequence, Sequence};

/// An iterator over the elements of a sequence.
///
/// Iterates from both ends when the sequence is bidirectional. The back end
/// is only looked up once iteration from the back starts, so unbounded
/// sequences iterate forward fine.
///
/// `size_hint` can't see the sequence's capabilities and only reports
/// `(0, None)` for finite sequences. With random access, [`Iter::remaining`]
/// is the exact count.
pub struct Iter<'v, S>
where
    S: Sequence,
{
    sequences: &'v S,
    front: S::Position,
    sentinel: S::Sentinel,
    back: Option<S::Position>,
}

impl<'v, S> Iter<'v, S>
where
    S: Sequence,
{
    pub(crate) fn new(sequences: &'v S) -> Self {
        Iter {
            sequences,
            front: sequences.begin(),
            sentinel: sequences.sentinel(),
            back: None,
        }
    }

    fn is_done(&self) -> bool {
        match &self.back {
            Some(back) => self.front == *back,
            None => self.sequences.reached(&self.front, &self.sentinel),
        }
    }
}

impl<'v, S> Iter<'v, S>
where
    S: RandomAccessSequence,
{
    /// The number of elements left to iterate.
    pub fn remaining(&self) -> S::Difference {
        match &self.back {
            Some(back) => self.sequences.distance(&self.front, back),
            None => self
                .sequences
                .distance(&self.front, &self.sequences.end()),
        }
    }
}

impl<'v, S> Iterator for Iter<'v, S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.is_done() {
            return None;
        }
        let item = self.sequences.read(&self.front);
        self.sequences.next(&mut self.front);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if S::INFINITE {
            (usize::MAX, None)
        } else {
            (0, None)
        }
    }
}

impl<'v, S> DoubleEndedIterator for Iter<'v, S>
where
    S: BidirectionalSequence,
{
    fn next_back(&mut self) -> Option<S::Item> {
        let sequences = self.sequences;
        let back = self.back.get_or_insert_with(|| sequences.end());
        if self.front == *back {
            return None;
        }
        sequences.prev(back);
        Some(sequences.read(back))
    }
}

impl<'v, S> FusedIterator for Iter<'v, S> where S: Sequence {}

impl<'v, S> Clone for Iter<'v, S>
where
    S: Sequence,
{
    fn clone(&self) -> Self {
        Iter {
            sequences: self.sequences,
            front: self.front.clone(),
            sentinel: self.sentinel.clone(),
            back: self.back.clone(),
        }
    }
}
