use std::ops::Range;

use crate::traits::{
    BidirectionalSequence, BoundedSequence, ForwardSequence, RandomAccessSequence, Sequence,
    SizedSequence,
};

// Integer ranges yield their values. A range with `end < start` is empty, as
// it is for the std iterator, so the effective end is never below the start.
//
// The difference type is wide enough to hold the distance between any two
// values of the range type, except for i128 which has nothing wider. Its
// sizes still fit the unsigned counterpart, so they're computed wrapping.
macro_rules! range_sequence {
    ($($value:ty => $difference:ty, $size:ty);* $(;)?) => {
        $(
            impl Sequence for Range<$value> {
                type Position = $value;
                type Sentinel = $value;
                type Item = $value;
                type Difference = $difference;

                #[inline]
                fn begin(&self) -> $value {
                    self.start
                }

                #[inline]
                fn sentinel(&self) -> $value {
                    self.end.max(self.start)
                }

                #[inline]
                fn reached(&self, position: &$value, sentinel: &$value) -> bool {
                    position == sentinel
                }

                #[inline]
                fn next(&self, position: &mut $value) {
                    debug_assert!(*position < self.sentinel(), "stepped past the end of a range");
                    *position += 1;
                }

                #[inline]
                fn read(&self, position: &$value) -> $value {
                    *position
                }
            }

            impl ForwardSequence for Range<$value> {}

            impl BoundedSequence for Range<$value> {
                #[inline]
                fn end(&self) -> $value {
                    self.sentinel()
                }
            }

            impl BidirectionalSequence for Range<$value> {
                #[inline]
                fn prev(&self, position: &mut $value) {
                    debug_assert!(*position > self.start, "stepped back past the beginning of a range");
                    *position -= 1;
                }
            }

            impl RandomAccessSequence for Range<$value> {
                #[inline]
                fn advance(&self, position: &mut $value, n: $difference) {
                    let target = *position as $difference + n;
                    debug_assert!(
                        target >= self.start as $difference && target <= self.sentinel() as $difference,
                        "jumped {n} from {position} outside of the range"
                    );
                    *position = target as $value;
                }

                #[inline]
                fn distance(&self, from: &$value, to: &$value) -> $difference {
                    let (to, from) = (*to as $difference, *from as $difference);
                    debug_assert!(
                        to.checked_sub(from).is_some(),
                        "distance from {from} to {to} overflows {}",
                        stringify!($difference)
                    );
                    to.wrapping_sub(from)
                }
            }

            impl SizedSequence for Range<$value> {
                #[inline]
                fn size(&self) -> $size {
                    (self.sentinel() as $difference).wrapping_sub(self.start as $difference) as $size
                }
            }
        )*
    };
}

range_sequence!(
    i8 => i16, u16;
    i16 => i32, u32;
    i32 => i64, u64;
    i64 => i128, u128;
    i128 => i128, u128;
    isize => i128, u128;
    u8 => i16, u16;
    u16 => i32, u32;
    u32 => i64, u64;
    u64 => i128, u128;
    usize => i128, u128;
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_values() {
        let r = 3i32..6;
        let mut position = r.begin();
        let mut seen = Vec::new();
        while !r.is_end(&position) {
            seen.push(r.read(&position));
            r.next(&mut position);
        }
        assert_eq!(seen, vec![3, 4, 5]);
        assert_eq!(r.size(), 3u64);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let r = 5u8..2;
        assert!(r.is_end(&r.begin()));
        assert_eq!(r.size(), 0u16);
    }

    #[test]
    fn test_range_distance_is_signed() {
        let r = 0u8..255;
        assert_eq!(r.distance(&250, &10), -240i16);
        assert_eq!(r.distance(&r.begin(), &r.end()), 255i16);
    }

    #[test]
    fn test_range_advance_and_prev() {
        let r = -5i64..5;
        let mut position = r.begin();
        r.advance(&mut position, 7);
        assert_eq!(r.read(&position), 2);
        r.prev(&mut position);
        assert_eq!(r.read(&position), 1);
        r.advance(&mut position, -6);
        assert_eq!(position, r.begin());
    }
}
