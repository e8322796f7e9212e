/// Chain sequences together, nesting in the tail.
///
/// `chain!(a, b, c)` is `Chain::new(a, Chain::new(b, c))`; a single argument
/// is returned as is.
#[macro_export]
macro_rules! chain {
    ($only:expr $(,)?) => {
        $only
    };
    ($head:expr, $($tail:expr),+ $(,)?) => {
        $crate::Chain::new($head, $crate::chain!($($tail),+))
    };
}

/// Build a [`Concat`](crate::Concat) view over the given sequences.
#[macro_export]
macro_rules! concat_view {
    ($($sequence:expr),+ $(,)?) => {
        $crate::Concat::new($crate::chain!($($sequence),+))
    };
}
