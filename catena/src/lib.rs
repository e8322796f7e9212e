//! Lazy concatenation of sequences.
//!
//! A [`Concat`] view presents a fixed number of sequences as one logical
//! sequence without copying anything. The sequences may be of different
//! types: slices, vectors, ranges, infinite or single-pass sequences, or
//! anything else implementing [`Sequence`].
//!
//! ```
//! use catena::concat_view;
//!
//! let view = concat_view![vec![1, 2], Vec::<i32>::new(), vec![3]];
//! let items: Vec<i32> = view.iter().collect();
//! assert_eq!(items, vec![1, 2, 3]);
//!
//! let mut cursor = view.end();
//! cursor.step_backward();
//! assert_eq!(cursor.current(), 3);
//! assert_eq!(cursor.segment(), 2);
//! ```
//!
//! What a view can do is decided at compile time from what all of its
//! sequences can do. Stepping backward, jumping, measuring distances and
//! knowing the size are only available when every sequence supports them; a
//! view is infinite as soon as one of its sequences is.
//!
//! Traversal skips over empty sequences in both directions, so a cursor is
//! never left on the end of anything but the last sequence.

mod chain;
mod concat;
mod cursor;
pub mod error;
mod generate;
mod iter;
mod macros;
mod transform;

pub use catena_sequence as sequence;
pub use catena_sequence::{
    BidirectionalSequence, BoundedSequence, Difference, ForwardSequence, OutputSequence,
    RandomAccessSequence, Sequence, SizedSequence,
};

pub use chain::{Chain, ChainPosition};
pub use concat::Concat;
pub use cursor::{Cursor, Terminal};
pub use error::{Error, Result};
pub use generate::generate;
pub use iter::Iter;
pub use transform::{transform, Transform};
