// A chain glues two sequences together; longer concatenations nest chains in
// the tail (see the `chain!` macro), so every algorithm here only ever deals
// with a head and a tail and the compiler unrolls the recursion per
// instantiation.
//
// What a chain can do is decided by which of the capability traits both of
// its parts implement. Each capability impl below requires it of both head
// and tail, so a chain is only as capable as its weakest part. Infinity is
// the exception: one infinite part makes the whole chain infinite. A
// single-pass part likewise means the chain isn't a `ForwardSequence`.

use num_traits::Zero;

use catena_sequence::{
    saturating_cast, BidirectionalSequence, BoundedSequence, Difference, ForwardSequence,
    OutputSequence, RandomAccessSequence, Sequence, SizedSequence, Widen,
};

/// Two sequences traversed one after the other.
///
/// The element type of the chain is the element type of the head; elements
/// of the tail are converted into it with [`Into`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chain<A, B> {
    head: A,
    tail: B,
}

impl<A, B> Chain<A, B> {
    pub fn new(head: A, tail: B) -> Self {
        Chain { head, tail }
    }

    pub fn head(&self) -> &A {
        &self.head
    }

    pub fn tail(&self) -> &B {
        &self.tail
    }

    pub fn head_mut(&mut self) -> &mut A {
        &mut self.head
    }

    pub fn tail_mut(&mut self) -> &mut B {
        &mut self.tail
    }

    pub fn into_inner(self) -> (A, B) {
        (self.head, self.tail)
    }
}

/// A position in a [`Chain`]: inside the head or inside the tail.
///
/// Only one of the two positions exists at a time. A `Head` position is never
/// at the end of the head; once the head is exhausted the position moves on
/// to the beginning of the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChainPosition<P, Q> {
    Head(P),
    Tail(Q),
}

// two index positions fit in a tag plus one index
#[cfg(target_arch = "x86_64")]
static_assertions::assert_eq_size!(ChainPosition<usize, usize>, [u8; 16]);

type Position<A, B> = ChainPosition<<A as Sequence>::Position, <B as Sequence>::Position>;

#[inline]
fn widen<D: Difference, W: Difference>(value: D) -> W {
    saturating_cast(value)
}

impl<A, B> Chain<A, B>
where
    A: Sequence,
    B: Sequence,
{
    // A position that just landed on the end of the head moves on to the
    // tail. The tail's begin already skips any empty sequences in it.
    #[inline]
    fn satisfy(&self, position: &mut Position<A, B>) {
        let exhausted = matches!(&*position, ChainPosition::Head(p) if self.head.is_end(p));
        if exhausted {
            *position = ChainPosition::Tail(self.tail.begin());
        }
    }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence,
    A::Difference: Widen<B::Difference>,
    B::Item: Into<A::Item>,
{
    type Position = Position<A, B>;
    type Sentinel = B::Sentinel;
    type Item = A::Item;
    type Difference = <A::Difference as Widen<B::Difference>>::Output;

    const ARITY: usize = A::ARITY + B::ARITY;
    const INFINITE: bool = A::INFINITE || B::INFINITE;

    fn begin(&self) -> Self::Position {
        let mut position = ChainPosition::Head(self.head.begin());
        self.satisfy(&mut position);
        position
    }

    #[inline]
    fn sentinel(&self) -> B::Sentinel {
        self.tail.sentinel()
    }

    #[inline]
    fn reached(&self, position: &Self::Position, sentinel: &B::Sentinel) -> bool {
        match position {
            // a head position is never at the end
            ChainPosition::Head(_) => false,
            ChainPosition::Tail(q) => self.tail.reached(q, sentinel),
        }
    }

    fn next(&self, position: &mut Self::Position) {
        match position {
            ChainPosition::Head(p) => {
                self.head.next(p);
                self.satisfy(position);
            }
            ChainPosition::Tail(q) => self.tail.next(q),
        }
    }

    #[inline]
    fn read(&self, position: &Self::Position) -> A::Item {
        match position {
            ChainPosition::Head(p) => self.head.read(p),
            ChainPosition::Tail(q) => self.tail.read(q).into(),
        }
    }

    #[inline]
    fn segment(&self, position: &Self::Position) -> usize {
        match position {
            ChainPosition::Head(p) => self.head.segment(p),
            ChainPosition::Tail(q) => A::ARITY + self.tail.segment(q),
        }
    }
}

impl<A, B> ForwardSequence for Chain<A, B>
where
    A: ForwardSequence,
    B: ForwardSequence,
    A::Difference: Widen<B::Difference>,
    B::Item: Into<A::Item>,
{
}

impl<A, B> BoundedSequence for Chain<A, B>
where
    A: BoundedSequence,
    B: BoundedSequence,
    A::Difference: Widen<B::Difference>,
    B::Item: Into<A::Item>,
{
    #[inline]
    fn end(&self) -> Self::Position {
        ChainPosition::Tail(self.tail.end())
    }
}

impl<A, B> BidirectionalSequence for Chain<A, B>
where
    A: BidirectionalSequence,
    B: BidirectionalSequence,
    A::Difference: Widen<B::Difference>,
    B::Item: Into<A::Item>,
{
    fn prev(&self, position: &mut Self::Position) {
        match position {
            ChainPosition::Head(p) => {
                debug_assert!(
                    *p != self.head.begin(),
                    "stepped back past the beginning of a chain"
                );
                self.head.prev(p);
            }
            ChainPosition::Tail(q) => {
                if *q == self.tail.begin() {
                    // the head's own prev cascades through any empty
                    // sequences at its end
                    let mut p = self.head.end();
                    self.head.prev(&mut p);
                    *position = ChainPosition::Head(p);
                } else {
                    self.tail.prev(q);
                }
            }
        }
    }
}

impl<A, B> RandomAccessSequence for Chain<A, B>
where
    A: RandomAccessSequence,
    B: RandomAccessSequence,
    A::Difference: Widen<B::Difference>,
    B::Item: Into<A::Item>,
{
    fn advance(&self, position: &mut Self::Position, n: Self::Difference) {
        let zero = <Self::Difference as Zero>::zero();
        if n > zero {
            self.advance_forward(position, n);
        } else if n < zero {
            self.advance_backward(position, n);
        }
    }

    fn distance(&self, from: &Self::Position, to: &Self::Position) -> Self::Difference {
        match (from, to) {
            (ChainPosition::Head(f), ChainPosition::Head(t)) => {
                widen::<_, Self::Difference>(self.head.distance(f, t))
            }
            (ChainPosition::Tail(f), ChainPosition::Tail(t)) => {
                widen::<_, Self::Difference>(self.tail.distance(f, t))
            }
            (ChainPosition::Head(f), ChainPosition::Tail(t)) => {
                // the tail's distance from its begin covers every sequence
                // in it up to `t`, empty ones included
                let in_head = self.head.distance(f, &self.head.end());
                let in_tail = self.tail.distance(&self.tail.begin(), t);
                widen::<_, Self::Difference>(in_head) + widen::<_, Self::Difference>(in_tail)
            }
            (ChainPosition::Tail(_), ChainPosition::Head(_)) => -self.distance(to, from),
        }
    }
}

impl<A, B> Chain<A, B>
where
    A: RandomAccessSequence,
    B: RandomAccessSequence,
    A::Difference: Widen<B::Difference>,
    B::Item: Into<A::Item>,
{
    fn advance_forward(&self, position: &mut Position<A, B>, n: <Self as Sequence>::Difference) {
        let zero = <<Self as Sequence>::Difference as Zero>::zero();
        let mut rest = n;
        while rest != zero {
            match position {
                ChainPosition::Head(p) => {
                    // This walks all the way to the end of the head when the
                    // jump leaves it, even though only the remainder is
                    // needed to continue in the tail.
                    let step: A::Difference = saturating_cast(rest);
                    let left = self.head.advance_bounded(p, step, &self.head.end());
                    rest = rest - widen::<_, <Self as Sequence>::Difference>(step - left);
                    self.satisfy(position);
                }
                ChainPosition::Tail(q) => {
                    self.tail.advance(q, saturating_cast(rest));
                    return;
                }
            }
        }
    }

    fn advance_backward(&self, position: &mut Position<A, B>, n: <Self as Sequence>::Difference) {
        let zero = <<Self as Sequence>::Difference as Zero>::zero();
        let mut rest = n;
        while rest != zero {
            match position {
                ChainPosition::Head(p) => {
                    self.head.advance(p, saturating_cast(rest));
                    return;
                }
                ChainPosition::Tail(q) => {
                    let begin = self.tail.begin();
                    if *q == begin {
                        *position = ChainPosition::Head(self.head.end());
                    } else {
                        let step: B::Difference = saturating_cast(rest);
                        let left = self.tail.advance_bounded(q, step, &begin);
                        rest = rest - widen::<_, <Self as Sequence>::Difference>(step - left);
                    }
                }
            }
        }
    }
}

impl<A, B> SizedSequence for Chain<A, B>
where
    A: SizedSequence,
    B: SizedSequence,
    A::Difference: Widen<B::Difference>,
    B::Item: Into<A::Item>,
{
    #[inline]
    fn size(&self) -> <Self::Difference as Difference>::Unsigned {
        let head: <Self::Difference as Difference>::Unsigned = saturating_cast(self.head.size());
        let tail: <Self::Difference as Difference>::Unsigned = saturating_cast(self.tail.size());
        head + tail
    }
}

impl<A, B, T> OutputSequence<T> for Chain<A, B>
where
    A: OutputSequence<T>,
    B: OutputSequence<T>,
    A::Difference: Widen<B::Difference>,
    B::Item: Into<A::Item>,
{
    #[inline]
    fn write(&mut self, position: &Self::Position, value: T) {
        match position {
            ChainPosition::Head(p) => self.head.write(p, value),
            ChainPosition::Tail(q) => self.tail.write(q, value),
        }
    }
}
