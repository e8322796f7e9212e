use std::fmt;
use std::marker::PhantomData;

use catena_sequence::{
    BidirectionalSequence, BoundedSequence, Difference, ForwardSequence, RandomAccessSequence,
    Sequence, SizedSequence,
};

/// A sequence whose elements are those of `base` passed through `fun`.
///
/// Elements are mapped as they are read; nothing is cached. Traversal is
/// delegated to the base, so a transformed sequence can do everything the
/// base can except being written to.
pub struct Transform<S, F, U> {
    base: S,
    fun: F,
    item: PhantomData<fn() -> U>,
}

/// Map the elements of `base` with `fun`.
pub fn transform<S, F, U>(base: S, fun: F) -> Transform<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    Transform {
        base,
        fun,
        item: PhantomData,
    }
}

impl<S, F, U> Transform<S, F, U> {
    pub fn base(&self) -> &S {
        &self.base
    }

    pub fn into_base(self) -> S {
        self.base
    }
}

impl<S, F, U> Clone for Transform<S, F, U>
where
    S: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Transform {
            base: self.base.clone(),
            fun: self.fun.clone(),
            item: PhantomData,
        }
    }
}

impl<S, F, U> fmt::Debug for Transform<S, F, U>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl<S, F, U> Sequence for Transform<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Position = S::Position;
    type Sentinel = S::Sentinel;
    type Item = U;
    type Difference = S::Difference;

    const ARITY: usize = S::ARITY;
    const INFINITE: bool = S::INFINITE;

    #[inline]
    fn begin(&self) -> S::Position {
        self.base.begin()
    }

    #[inline]
    fn sentinel(&self) -> S::Sentinel {
        self.base.sentinel()
    }

    #[inline]
    fn reached(&self, position: &S::Position, sentinel: &S::Sentinel) -> bool {
        self.base.reached(position, sentinel)
    }

    #[inline]
    fn next(&self, position: &mut S::Position) {
        self.base.next(position)
    }

    #[inline]
    fn read(&self, position: &S::Position) -> U {
        (self.fun)(self.base.read(position))
    }

    #[inline]
    fn segment(&self, position: &S::Position) -> usize {
        self.base.segment(position)
    }
}

impl<S, F, U> ForwardSequence for Transform<S, F, U>
where
    S: ForwardSequence,
    F: Fn(S::Item) -> U,
{
}

impl<S, F, U> BoundedSequence for Transform<S, F, U>
where
    S: BoundedSequence,
    F: Fn(S::Item) -> U,
{
    #[inline]
    fn end(&self) -> S::Position {
        self.base.end()
    }
}

impl<S, F, U> BidirectionalSequence for Transform<S, F, U>
where
    S: BidirectionalSequence,
    F: Fn(S::Item) -> U,
{
    #[inline]
    fn prev(&self, position: &mut S::Position) {
        self.base.prev(position)
    }
}

impl<S, F, U> RandomAccessSequence for Transform<S, F, U>
where
    S: RandomAccessSequence,
    F: Fn(S::Item) -> U,
{
    #[inline]
    fn advance(&self, position: &mut S::Position, n: S::Difference) {
        self.base.advance(position, n)
    }

    #[inline]
    fn distance(&self, from: &S::Position, to: &S::Position) -> S::Difference {
        self.base.distance(from, to)
    }
}

impl<S, F, U> SizedSequence for Transform<S, F, U>
where
    S: SizedSequence,
    F: Fn(S::Item) -> U,
{
    #[inline]
    fn size(&self) -> <S::Difference as Difference>::Unsigned {
        self.base.size()
    }
}

#[cfg(test)]
mod tests {
    use crate::{concat_view, Chain};

    use super::*;

    #[test]
    fn test_transform_reads_mapped() {
        let words = vec!["a", "bb", "ccc"];
        let lengths = transform(&words[..], |word: &&str| word.len());
        let mut position = lengths.begin();
        lengths.advance(&mut position, 2);
        assert_eq!(lengths.read(&position), 3);
        assert_eq!(lengths.size(), 3);
    }

    #[test]
    fn test_transform_of_chain_keeps_segments() {
        let doubled = transform(Chain::new(vec![1, 2], vec![3]), |n: i32| n * 2);
        let mut position = doubled.end();
        doubled.prev(&mut position);
        assert_eq!(doubled.read(&position), 6);
        assert_eq!(doubled.segment(&position), 1);
    }

    #[test]
    fn test_transformed_sequences_concatenate() {
        let view = concat_view![
            transform(0u8..3, |n: u8| n as i32),
            transform(vec![-1i32], |n: i32| n * 10)
        ];
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![0, 1, 2, -10]);
    }
}
