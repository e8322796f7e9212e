//! Property tests for traversal of concatenated views.

use proptest::prelude::*;

use catena::{concat_view, Concat, Sequence};

fn part_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop_oneof![
        1 => Just(Vec::new()),
        3 => prop::collection::vec(any::<i32>(), 1..6),
    ]
}

fn parts_strategy() -> impl Strategy<Value = (Vec<i32>, Vec<i32>, Vec<i32>, Vec<i32>)> {
    (
        part_strategy(),
        part_strategy(),
        part_strategy(),
        part_strategy(),
    )
}

fn flattened(parts: &(Vec<i32>, Vec<i32>, Vec<i32>, Vec<i32>)) -> Vec<i32> {
    let (a, b, c, d) = parts;
    a.iter().chain(b).chain(c).chain(d).copied().collect()
}

proptest! {
    #[test]
    fn prop_iterating_yields_the_concatenation(parts in parts_strategy()) {
        let expected = flattened(&parts);
        let (a, b, c, d) = parts;
        let view = concat_view![a, b, c, d];
        prop_assert_eq!(view.iter().collect::<Vec<_>>(), expected.clone());
        let mut reversed = expected;
        reversed.reverse();
        prop_assert_eq!(view.iter().rev().collect::<Vec<_>>(), reversed);
    }

    #[test]
    fn prop_empty_parts_are_transparent(parts in parts_strategy()) {
        let (a, b, c, d) = parts.clone();
        let view = concat_view![a, b, c, d];
        let mut cursor = view.begin();
        let mut seen = Vec::new();
        while !cursor.is_end() {
            seen.push(cursor.current());
            cursor.step_forward();
        }
        prop_assert_eq!(seen, flattened(&parts));
    }

    #[test]
    fn prop_steps_match_jump(parts in parts_strategy(), n in 0usize..24) {
        let view = {
            let (a, b, c, d) = parts;
            concat_view![a, b, c, d]
        };
        let n = n.min(view.size());
        let mut stepped = view.begin();
        for _ in 0..n {
            stepped.step_forward();
        }
        let mut jumped = view.begin();
        jumped.advance(n as isize);
        prop_assert!(stepped == jumped);
    }

    #[test]
    fn prop_jump_by_distance_reaches_target(
        parts in parts_strategy(),
        from in 0usize..24,
        to in 0usize..24
    ) {
        let view = {
            let (a, b, c, d) = parts;
            concat_view![a, b, c, d]
        };
        let size = view.size();
        let mut source = view.begin();
        source.advance(from.min(size) as isize);
        let mut target = view.begin();
        target.advance(to.min(size) as isize);

        let distance = source.distance_to(&target);
        prop_assert_eq!(distance, to.min(size) as isize - from.min(size) as isize);
        let mut jumped = source.clone();
        jumped.advance(distance);
        prop_assert!(jumped == target);
    }

    #[test]
    fn prop_backward_undoes_forward(parts in parts_strategy(), at in 0usize..24) {
        let view = {
            let (a, b, c, d) = parts;
            concat_view![a, b, c, d]
        };
        let size = view.size();
        let mut cursor = view.begin();
        cursor.advance(at.min(size) as isize);
        if !cursor.is_end() {
            let mut moved = cursor.clone();
            moved.step_forward();
            moved.step_backward();
            prop_assert!(moved == cursor);
        }
        if cursor != view.begin() {
            let mut moved = cursor.clone();
            moved.step_backward();
            moved.step_forward();
            prop_assert!(moved == cursor);
        }
    }

    #[test]
    fn prop_size_is_sum_of_sizes(parts in parts_strategy()) {
        let expected = parts.0.len() + parts.1.len() + parts.2.len() + parts.3.len();
        let (a, b, c, d) = parts;
        let view = concat_view![a, b, c, d];
        prop_assert_eq!(view.size(), expected);
        prop_assert_eq!(view.is_empty(), expected == 0);
    }

    #[test]
    fn prop_single_sequence_matches_sequence(values in prop::collection::vec(any::<u16>(), 0..8)) {
        let view = Concat::new(values.clone());
        prop_assert_eq!(view.iter().collect::<Vec<_>>(), values.clone());
        prop_assert_eq!(view.size(), values.len());
        prop_assert_eq!(view.begin().into_position(), values.begin());
    }

    #[test]
    fn prop_ranges_with_mixed_widths(
        first in -50i64..50,
        len in 0u8..10,
        second in 0u8..200,
        width in 0u8..10
    ) {
        let view = concat_view![first..first + len as i64, second..second.saturating_add(width)];
        let expected: Vec<i64> = (first..first + len as i64)
            .chain((second..second.saturating_add(width)).map(i64::from))
            .collect();
        let distance: i128 = view.begin().distance_to(&view.end());
        prop_assert_eq!(distance, expected.len() as i128);
        prop_assert_eq!(view.iter().collect::<Vec<_>>(), expected);
    }
}
