use catena_sequence::{BoundedSequence, Difference, OutputSequence, Sequence, SizedSequence};

use crate::cursor::{Cursor, Terminal};
use crate::generate::generate;
use crate::iter::Iter;

/// A view presenting its sequences as one sequence, in order.
///
/// The sequences are stored as given; `S` is a single sequence or a
/// [`Chain`](crate::Chain) of them, usually built with
/// [`concat_view!`](crate::concat_view). Nothing is copied: traversal happens
/// through [`Cursor`]s or [`Iter`].
///
/// Which operations exist depends on the capabilities of `S`. [`Concat::end`]
/// needs every sequence to be bounded, [`Concat::size`] needs every sequence
/// to be sized, and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Concat<S> {
    sequences: S,
}

impl<S> Concat<S> {
    pub fn new(sequences: S) -> Self {
        Concat { sequences }
    }

    pub fn sequences(&self) -> &S {
        &self.sequences
    }

    pub fn sequences_mut(&mut self) -> &mut S {
        &mut self.sequences
    }

    pub fn into_inner(self) -> S {
        self.sequences
    }
}

impl<S> Concat<S>
where
    S: Sequence,
{
    /// The number of sequences in this view.
    pub fn arity(&self) -> usize {
        S::ARITY
    }

    /// Whether any of the sequences is infinite.
    pub fn is_infinite(&self) -> bool {
        S::INFINITE
    }

    /// A cursor on the first element.
    ///
    /// Empty sequences at the front are skipped, so for a view whose
    /// sequences are all empty this is already the end.
    pub fn begin(&self) -> Cursor<'_, S> {
        Cursor::new(self, self.sequences.begin())
    }

    /// The end marker of the last sequence.
    ///
    /// Unlike [`Concat::end`] this is available for unbounded sequences too.
    pub fn terminal(&self) -> Terminal<S> {
        Terminal::new(self.sequences.sentinel())
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_end(&self.sequences.begin())
    }

    pub fn iter(&self) -> Iter<'_, S> {
        Iter::new(&self.sequences)
    }
}

impl<S> Concat<S>
where
    S: BoundedSequence,
{
    /// A cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, S> {
        Cursor::new(self, self.sequences.end())
    }
}

impl<S> Concat<S>
where
    S: SizedSequence,
{
    /// The total number of elements, in the unsigned counterpart of the
    /// common difference type.
    pub fn size(&self) -> <S::Difference as Difference>::Unsigned {
        self.sequences.size()
    }
}

impl<S> Concat<S> {
    /// Overwrite every element with values from `fun`, front to back.
    ///
    /// Returns a cursor at the end together with the generator.
    pub fn generate<T, F>(&mut self, fun: F) -> (Cursor<'_, S>, F)
    where
        S: OutputSequence<T>,
        F: FnMut() -> T,
    {
        let (position, fun) = generate(&mut self.sequences, fun);
        (Cursor::new(self, position), fun)
    }
}

impl<'v, S> IntoIterator for &'v Concat<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type IntoIter = Iter<'v, S>;

    fn into_iter(self) -> Iter<'v, S> {
        self.iter()
    }
}
