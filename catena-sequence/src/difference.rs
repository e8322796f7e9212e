use std::fmt::Debug;

use num_traits::{Bounded, NumCast, PrimInt, Signed, Unsigned};

/// A signed integer type measuring the distance between two positions.
///
/// Every difference type has an unsigned counterpart that is used for sizes.
pub trait Difference: PrimInt + Signed + Debug + 'static {
    /// The unsigned type of the same width, used for sizes.
    type Unsigned: PrimInt + Unsigned + Debug + 'static;
}

/// The common difference type of `Self` and `Rhs`: the narrowest signed
/// type that can hold either.
///
/// Concatenating sequences with different difference types folds this over
/// the inputs, so the view measures distances in the widest of them.
pub trait Widen<Rhs: Difference>: Difference {
    type Output: Difference;
}

/// Convert between primitive integers, clamping values that don't fit.
///
/// Widening conversions are always exact.
#[inline]
pub fn saturating_cast<T, U>(value: T) -> U
where
    T: PrimInt,
    U: PrimInt,
{
    match <U as NumCast>::from(value) {
        Some(converted) => converted,
        None => {
            if value < T::zero() {
                <U as Bounded>::min_value()
            } else {
                <U as Bounded>::max_value()
            }
        }
    }
}

macro_rules! difference_impl {
    ($($signed:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl Difference for $signed {
                type Unsigned = $unsigned;
            }
        )*
    };
}

difference_impl!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

macro_rules! widen_impl {
    ($lhs:ty => [$($rhs:ty : $output:ty),* $(,)?]) => {
        $(
            impl Widen<$rhs> for $lhs {
                type Output = $output;
            }
        )*
    };
}

// isize is ranked between i32 and i64; on 64-bit targets isize and i64
// have the same width and i64 wins.
widen_impl!(i8 => [i8: i8, i16: i16, i32: i32, isize: isize, i64: i64, i128: i128]);
widen_impl!(i16 => [i8: i16, i16: i16, i32: i32, isize: isize, i64: i64, i128: i128]);
widen_impl!(i32 => [i8: i32, i16: i32, i32: i32, isize: isize, i64: i64, i128: i128]);
widen_impl!(isize => [i8: isize, i16: isize, i32: isize, isize: isize, i64: i64, i128: i128]);
widen_impl!(i64 => [i8: i64, i16: i64, i32: i64, isize: i64, i64: i64, i128: i128]);
widen_impl!(i128 => [i8: i128, i16: i128, i32: i128, isize: i128, i64: i128, i128: i128]);

#[cfg(test)]
mod tests {
    use super::*;

    fn widened<A: Widen<B>, B: Difference>(a: A, b: B) -> (<A as Widen<B>>::Output, <A as Widen<B>>::Output) {
        (saturating_cast(a), saturating_cast(b))
    }

    #[test]
    fn test_widen_picks_wider_type() {
        let (a, b) = widened(-3i8, 70_000i32);
        let check: (i32, i32) = (a, b);
        assert_eq!(check, (-3, 70_000));
    }

    #[test]
    fn test_widen_is_symmetric() {
        let (a, b) = widened(70_000i32, -3i8);
        let check: (i32, i32) = (a, b);
        assert_eq!(check, (70_000, -3));
    }

    #[test]
    fn test_widen_isize_with_i64() {
        let (a, _) = widened(5isize, 1i64);
        let check: i64 = a;
        assert_eq!(check, 5);
    }

    #[test]
    fn test_saturating_cast_widening_is_exact() {
        assert_eq!(saturating_cast::<i8, i64>(i8::MIN), -128i64);
        assert_eq!(saturating_cast::<u32, u64>(u32::MAX), <u64 as From<u32>>::from(u32::MAX));
    }

    #[test]
    fn test_saturating_cast_clamps_narrowing() {
        assert_eq!(saturating_cast::<i64, i8>(1_000), i8::MAX);
        assert_eq!(saturating_cast::<i64, i8>(-1_000), i8::MIN);
        assert_eq!(saturating_cast::<i32, u8>(-1), 0u8);
        assert_eq!(saturating_cast::<i32, i16>(12), 12i16);
    }

    #[test]
    fn test_unsigned_counterpart() {
        fn max_size<D: Difference>() -> D::Unsigned {
            <D::Unsigned as Bounded>::max_value()
        }
        assert_eq!(max_size::<i16>(), u16::MAX);
        assert_eq!(max_size::<isize>(), usize::MAX);
    }
}
