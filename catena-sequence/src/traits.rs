use num_traits::Zero;

use crate::difference::Difference;

/// The core sequence interface: every sequence must implement this.
///
/// A sequence hands out positions and interprets them. Positions are plain
/// values and never borrow the sequence; every operation takes the sequence
/// they belong to. That lets a composite sequence embed the positions of its
/// parts without boxing.
///
/// The remaining traits in this module add capabilities on top of it. Which
/// of them a sequence implements decides what can be done with it.
pub trait Sequence {
    /// A place in the sequence, possibly one past the last element.
    type Position: Clone + PartialEq;
    /// What a position is compared against to detect the end.
    ///
    /// For bounded sequences this is usually the end position itself, for
    /// unbounded ones a marker type.
    type Sentinel: Clone;
    /// The element read at a position.
    type Item;
    /// The signed type distances are measured in.
    type Difference: Difference;

    /// The number of leaf sequences this sequence is made of.
    const ARITY: usize = 1;
    /// Whether this sequence never reaches its sentinel.
    const INFINITE: bool = false;

    /// The position of the first element.
    fn begin(&self) -> Self::Position;

    /// The end marker of this sequence.
    fn sentinel(&self) -> Self::Sentinel;

    /// Whether `position` has reached `sentinel`.
    fn reached(&self, position: &Self::Position, sentinel: &Self::Sentinel) -> bool;

    /// Step `position` forward by one element.
    ///
    /// `position` must not be at the end.
    fn next(&self, position: &mut Self::Position);

    /// Read the element at `position`.
    ///
    /// `position` must not be at the end.
    fn read(&self, position: &Self::Position) -> Self::Item;

    /// Whether `position` is at the end of this sequence.
    #[inline]
    fn is_end(&self, position: &Self::Position) -> bool {
        self.reached(position, &self.sentinel())
    }

    /// The index of the leaf sequence `position` is in.
    ///
    /// Always 0 for a sequence that is not composed of others.
    #[inline]
    fn segment(&self, _position: &Self::Position) -> usize {
        0
    }
}

/// A sequence that can be traversed more than once.
///
/// Copies of a position stay valid independently of each other. Sequences
/// that consume an underlying source as they go don't implement this.
pub trait ForwardSequence: Sequence {}

/// A sequence with a real end position rather than only a sentinel.
pub trait BoundedSequence: Sequence {
    /// The position one past the last element.
    fn end(&self) -> Self::Position;
}

/// A sequence that can step backward.
///
/// Stepping back into a sequence from its end requires an end position, so
/// every bidirectional sequence is bounded.
pub trait BidirectionalSequence: ForwardSequence + BoundedSequence {
    /// Step `position` backward by one element.
    ///
    /// `position` must not be at the beginning.
    fn prev(&self, position: &mut Self::Position);
}

/// A sequence that can jump by an arbitrary offset and measure distances.
pub trait RandomAccessSequence: BidirectionalSequence {
    /// Move `position` by `n` elements; negative `n` moves backward.
    ///
    /// The target must lie within the sequence.
    fn advance(&self, position: &mut Self::Position, n: Self::Difference);

    /// The number of steps from `from` to `to`; negative if `to` comes first.
    fn distance(&self, from: &Self::Position, to: &Self::Position) -> Self::Difference;

    /// Move `position` by `n` elements but no further than `bound`.
    ///
    /// `bound` must lie in the direction of `n`. Returns the part of `n` that
    /// could not be consumed, which is zero unless `position` ended up on
    /// `bound`.
    fn advance_bounded(
        &self,
        position: &mut Self::Position,
        n: Self::Difference,
        bound: &Self::Position,
    ) -> Self::Difference {
        let zero = <Self::Difference as Zero>::zero();
        let distance = self.distance(position, bound);
        let overshoots = (n > zero && distance >= zero && distance <= n)
            || (n < zero && distance <= zero && distance >= n);
        if overshoots {
            *position = bound.clone();
            n - distance
        } else {
            self.advance(position, n);
            zero
        }
    }
}

/// A sequence that knows its length in constant time.
pub trait SizedSequence: Sequence {
    /// The number of elements.
    fn size(&self) -> <Self::Difference as Difference>::Unsigned;
}

/// A sequence whose elements can be overwritten in place.
pub trait OutputSequence<T>: Sequence {
    /// Replace the element at `position` with `value`.
    ///
    /// `position` must not be at the end.
    fn write(&mut self, position: &Self::Position, value: T);
}
