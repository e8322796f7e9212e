use num_traits::{Bounded, One};

use crate::difference::Difference;
use crate::traits::{ForwardSequence, Sequence};

/// The sentinel of a sequence that never ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unreachable;

/// An infinite sequence counting up from a start value.
///
/// Infinite as far as the view is concerned; stepping past the maximum of
/// `T` is a precondition violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iota<T> {
    start: T,
}

impl<T> Iota<T> {
    pub fn new(start: T) -> Self {
        Iota { start }
    }

    pub fn start(&self) -> &T {
        &self.start
    }
}

impl<T> Sequence for Iota<T>
where
    T: Difference,
{
    type Position = T;
    type Sentinel = Unreachable;
    type Item = T;
    type Difference = T;

    const INFINITE: bool = true;

    #[inline]
    fn begin(&self) -> T {
        self.start
    }

    #[inline]
    fn sentinel(&self) -> Unreachable {
        Unreachable
    }

    #[inline]
    fn reached(&self, _position: &T, _sentinel: &Unreachable) -> bool {
        false
    }

    #[inline]
    fn next(&self, position: &mut T) {
        debug_assert!(
            *position < <T as Bounded>::max_value(),
            "counted past the maximum of {:?}",
            position
        );
        *position = *position + <T as One>::one();
    }

    #[inline]
    fn read(&self, position: &T) -> T {
        *position
    }
}

impl<T> ForwardSequence for Iota<T> where T: Difference {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iota_counts() {
        let iota = Iota::new(-2i32);
        let mut position = iota.begin();
        let mut seen = Vec::new();
        for _ in 0..4 {
            assert!(!iota.is_end(&position));
            seen.push(iota.read(&position));
            iota.next(&mut position);
        }
        assert_eq!(seen, vec![-2, -1, 0, 1]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "counted past the maximum of 127")]
    fn test_iota_overflow() {
        let iota = Iota::new(i8::MAX - 1);
        let mut position = iota.begin();
        iota.next(&mut position);
        iota.next(&mut position);
    }

    #[test]
    fn test_iota_is_infinite() {
        assert!(<Iota<i64> as Sequence>::INFINITE);
        assert!(!<Vec<i64> as Sequence>::INFINITE);
    }
}
