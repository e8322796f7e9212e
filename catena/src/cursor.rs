use std::fmt;
use std::ptr;

use catena_sequence::{saturating_cast, BidirectionalSequence, RandomAccessSequence, Sequence};

use crate::concat::Concat;
use crate::error::{Error, Result};

/// A position in a [`Concat`] view, together with the view it belongs to.
///
/// A cursor borrows its view, so it can't outlive it. Two cursors compare
/// equal when they are at the same position; comparing cursors of different
/// views is a logic error and panics.
pub struct Cursor<'v, S>
where
    S: Sequence,
{
    view: &'v Concat<S>,
    position: S::Position,
}

impl<'v, S> Cursor<'v, S>
where
    S: Sequence,
{
    pub(crate) fn new(view: &'v Concat<S>, position: S::Position) -> Self {
        Cursor { view, position }
    }

    pub fn view(&self) -> &'v Concat<S> {
        self.view
    }

    pub fn position(&self) -> &S::Position {
        &self.position
    }

    pub fn into_position(self) -> S::Position {
        self.position
    }

    /// The index of the sequence the cursor is in.
    pub fn segment(&self) -> usize {
        self.view.sequences().segment(&self.position)
    }

    /// Whether the cursor is past the last element of the last sequence.
    pub fn is_end(&self) -> bool {
        self.view.sequences().is_end(&self.position)
    }

    /// The element under the cursor.
    ///
    /// The cursor must not be at the end.
    pub fn current(&self) -> S::Item {
        debug_assert!(!self.is_end(), "read past the end of a view");
        self.view.sequences().read(&self.position)
    }

    pub fn try_current(&self) -> Result<S::Item> {
        if self.is_end() {
            return Err(Error::AtEnd);
        }
        Ok(self.view.sequences().read(&self.position))
    }

    /// Step to the next element, moving into the next non-empty sequence
    /// when the current one is done.
    ///
    /// The cursor must not be at the end.
    pub fn step_forward(&mut self) {
        debug_assert!(!self.is_end(), "stepped past the end of a view");
        self.view.sequences().next(&mut self.position);
    }

    pub fn try_step_forward(&mut self) -> Result<()> {
        if self.is_end() {
            return Err(Error::AtEnd);
        }
        self.view.sequences().next(&mut self.position);
        Ok(())
    }

    fn assert_same_view(&self, other: &Cursor<'_, S>) {
        assert!(
            ptr::eq(self.view, other.view),
            "cursors of different views can't be combined"
        );
    }
}

impl<'v, S> Cursor<'v, S>
where
    S: BidirectionalSequence,
{
    /// Step to the previous element, moving back into the previous
    /// non-empty sequence at the start of a sequence.
    ///
    /// The cursor must not be on the first element.
    pub fn step_backward(&mut self) {
        self.view.sequences().prev(&mut self.position);
    }

    pub fn try_step_backward(&mut self) -> Result<()> {
        if self.position == self.view.sequences().begin() {
            return Err(Error::AtBeginning);
        }
        self.view.sequences().prev(&mut self.position);
        Ok(())
    }
}

impl<'v, S> Cursor<'v, S>
where
    S: RandomAccessSequence,
{
    /// Move the cursor by `n` elements; negative `n` moves backward.
    ///
    /// The target must lie between the beginning and the end of the view.
    pub fn advance(&mut self, n: S::Difference) {
        self.view.sequences().advance(&mut self.position, n);
    }

    pub fn try_advance(&mut self, n: S::Difference) -> Result<()> {
        let sequences = self.view.sequences();
        let min = sequences.distance(&self.position, &sequences.begin());
        let max = sequences.distance(&self.position, &sequences.end());
        if n < min || n > max {
            return Err(Error::OutOfRange {
                offset: saturating_cast(n),
                min: saturating_cast(min),
                max: saturating_cast(max),
            });
        }
        sequences.advance(&mut self.position, n);
        Ok(())
    }

    /// The number of elements from this cursor to `other`; negative when
    /// `other` comes first.
    ///
    /// Panics if `other` belongs to another view.
    pub fn distance_to(&self, other: &Cursor<'_, S>) -> S::Difference {
        self.assert_same_view(other);
        self.view
            .sequences()
            .distance(&self.position, &other.position)
    }

    pub fn try_distance_to(&self, other: &Cursor<'_, S>) -> Result<S::Difference> {
        if !ptr::eq(self.view, other.view) {
            return Err(Error::ForeignCursor);
        }
        Ok(self
            .view
            .sequences()
            .distance(&self.position, &other.position))
    }
}

impl<'v, S> Clone for Cursor<'v, S>
where
    S: Sequence,
{
    fn clone(&self) -> Self {
        Cursor {
            view: self.view,
            position: self.position.clone(),
        }
    }
}

impl<'v, S> fmt::Debug for Cursor<'v, S>
where
    S: Sequence,
    S::Position: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl<'v, 'w, S> PartialEq<Cursor<'w, S>> for Cursor<'v, S>
where
    S: Sequence,
{
    fn eq(&self, other: &Cursor<'w, S>) -> bool {
        self.assert_same_view(other);
        self.position == other.position
    }
}

/// The end marker of a view: the sentinel of its last sequence.
///
/// A cursor equals the terminal once it is in the last sequence and has
/// reached that sequence's sentinel.
pub struct Terminal<S>
where
    S: Sequence,
{
    sentinel: S::Sentinel,
}

impl<S> Terminal<S>
where
    S: Sequence,
{
    pub(crate) fn new(sentinel: S::Sentinel) -> Self {
        Terminal { sentinel }
    }

    pub fn sentinel(&self) -> &S::Sentinel {
        &self.sentinel
    }
}

impl<S> Clone for Terminal<S>
where
    S: Sequence,
{
    fn clone(&self) -> Self {
        Terminal {
            sentinel: self.sentinel.clone(),
        }
    }
}

impl<S> fmt::Debug for Terminal<S>
where
    S: Sequence,
    S::Sentinel: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Terminal").field(&self.sentinel).finish()
    }
}

impl<'v, S> PartialEq<Terminal<S>> for Cursor<'v, S>
where
    S: Sequence,
{
    fn eq(&self, other: &Terminal<S>) -> bool {
        self.view
            .sequences()
            .reached(&self.position, &other.sentinel)
    }
}

impl<'v, S> PartialEq<Cursor<'v, S>> for Terminal<S>
where
    S: Sequence,
{
    fn eq(&self, other: &Cursor<'v, S>) -> bool {
        other == self
    }
}
