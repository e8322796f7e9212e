use std::cell::RefCell;
use std::iter::Peekable;

use crate::traits::Sequence;

/// The sentinel of an input sequence: reached when the source runs dry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exhausted;

/// A single-pass sequence reading from an iterator.
///
/// Stepping forward consumes the underlying iterator, so a position can't be
/// revisited once another copy of it moved on. A position counts the elements
/// consumed so far.
pub struct Input<I>
where
    I: Iterator,
{
    source: RefCell<Peekable<I>>,
}

impl<I> Input<I>
where
    I: Iterator,
{
    pub fn new(source: impl IntoIterator<IntoIter = I>) -> Self {
        Input {
            source: RefCell::new(source.into_iter().peekable()),
        }
    }
}

impl<I> std::fmt::Debug for Input<I>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input").finish_non_exhaustive()
    }
}

impl<I> Sequence for Input<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Position = usize;
    type Sentinel = Exhausted;
    type Item = I::Item;
    type Difference = isize;

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn sentinel(&self) -> Exhausted {
        Exhausted
    }

    #[inline]
    fn reached(&self, _position: &usize, _sentinel: &Exhausted) -> bool {
        self.source.borrow_mut().peek().is_none()
    }

    #[inline]
    fn next(&self, position: &mut usize) {
        let consumed = self.source.borrow_mut().next();
        debug_assert!(consumed.is_some(), "stepped past the end of an input");
        *position += 1;
    }

    fn read(&self, _position: &usize) -> I::Item {
        match self.source.borrow_mut().peek() {
            Some(item) => item.clone(),
            None => panic!("read past the end of an input"),
        }
    }
}
