use catena_sequence::OutputSequence;

/// Overwrite every element of `sequence` with successive results of `fun`.
///
/// Returns the end position reached and the generator, so a stateful
/// generator can carry on elsewhere.
pub fn generate<S, T, F>(sequence: &mut S, mut fun: F) -> (S::Position, F)
where
    S: OutputSequence<T>,
    F: FnMut() -> T,
{
    let mut position = sequence.begin();
    while !sequence.is_end(&position) {
        sequence.write(&position, fun());
        sequence.next(&mut position);
    }
    (position, fun)
}

#[cfg(test)]
mod tests {
    use crate::{Chain, ChainPosition};

    use super::*;

    #[test]
    fn test_generate_returns_generator() {
        let mut chain = Chain::new(vec![0u8; 2], vec![0u8; 3]);
        let mut next = 0u8;
        let (position, mut fun) = generate(&mut chain, move || {
            next += 1;
            next
        });
        assert_eq!(position, ChainPosition::Tail(3));
        assert_eq!(chain.into_inner(), (vec![1, 2], vec![3, 4, 5]));
        // the generator kept its state
        assert_eq!(fun(), 6);
    }

    #[test]
    fn test_generate_on_mutable_slice() {
        let mut values = [0i32; 3];
        let mut slice = &mut values[..];
        generate(&mut slice, || 7);
        assert_eq!(values, [7, 7, 7]);
    }
}
