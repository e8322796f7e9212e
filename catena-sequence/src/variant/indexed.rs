// Shared plumbing for the sequences addressed by a `usize` index: slices and
// vectors. Their positions are indices, their sentinel is the length.

#[inline]
pub(crate) fn step_back(position: &mut usize) {
    debug_assert!(*position > 0, "stepped back past the beginning");
    *position -= 1;
}

#[inline]
pub(crate) fn offset(position: &mut usize, n: isize, len: usize) {
    debug_assert!(
        position.checked_add_signed(n).is_some_and(|target| target <= len),
        "jumped {n} from {position} outside of 0..={len}"
    );
    *position = position.wrapping_add_signed(n);
}

#[inline]
pub(crate) fn distance(from: usize, to: usize) -> isize {
    to.wrapping_sub(from) as isize
}

/// Implement every capability apart from `Sequence` itself for a type with a
/// `len()` method and `usize` positions.
macro_rules! indexed_capabilities {
    (impl[$($generics:tt)*] for $ty:ty $(where $($bounds:tt)*)?) => {
        impl<$($generics)*> $crate::traits::ForwardSequence for $ty $(where $($bounds)*)? {}

        impl<$($generics)*> $crate::traits::BoundedSequence for $ty $(where $($bounds)*)? {
            #[inline]
            fn end(&self) -> usize {
                self.len()
            }
        }

        impl<$($generics)*> $crate::traits::BidirectionalSequence for $ty $(where $($bounds)*)? {
            #[inline]
            fn prev(&self, position: &mut usize) {
                $crate::variant::indexed::step_back(position)
            }
        }

        impl<$($generics)*> $crate::traits::RandomAccessSequence for $ty $(where $($bounds)*)? {
            #[inline]
            fn advance(&self, position: &mut usize, n: isize) {
                $crate::variant::indexed::offset(position, n, self.len())
            }

            #[inline]
            fn distance(&self, from: &usize, to: &usize) -> isize {
                $crate::variant::indexed::distance(*from, *to)
            }
        }

        impl<$($generics)*> $crate::traits::SizedSequence for $ty $(where $($bounds)*)? {
            #[inline]
            fn size(&self) -> usize {
                self.len()
            }
        }
    };
}

pub(crate) use indexed_capabilities;
