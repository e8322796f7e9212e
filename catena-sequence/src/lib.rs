//! Sequences as Catena sees them.
//!
//! A sequence is anything that can hand out positions, step them forward and
//! read the element at a position. What else a sequence can do (step back,
//! jump, measure, report its size) is expressed by implementing further
//! traits from [`traits`]; composite sequences use those traits to decide
//! what they can do in turn.
//!
//! Implementations are provided for borrowed and mutable slices, vectors and
//! integer ranges, plus [`Iota`] (infinite) and [`Input`] (single pass).

pub mod difference;
pub mod traits;
mod variant;

pub use difference::{saturating_cast, Difference, Widen};
pub use traits::{
    BidirectionalSequence, BoundedSequence, ForwardSequence, OutputSequence,
    RandomAccessSequence, Sequence, SizedSequence,
};
pub use variant::{Exhausted, Input, Iota, Unreachable};
