mod indexed;
mod input;
mod iota;
mod range;
mod slice;
mod vec;

pub use input::{Exhausted, Input};
pub use iota::{Iota, Unreachable};
