//! Cursor arithmetic over a circular category sequence.
//!
//! The engine keeps each sequence fixed and moves an offset. [`rotate_left`]
//! is the equivalent mutate-in-place view: the sequence as it would look if
//! the players already used this cycle had been moved to the back.

/// Bring any stored cursor into `0..len` (0 for an empty sequence).
pub fn normalize(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        cursor % len
    }
}

/// Cursor after consuming `count` players.
///
/// Consuming as many or more players than exist does not move the cursor:
/// the whole category plays every line and nobody waits.
pub fn advance_cursor(cursor: usize, count: usize, len: usize) -> usize {
    let cursor = normalize(cursor, len);
    if len <= count {
        cursor
    } else {
        (cursor + count) % len
    }
}

/// Up to `count` elements starting at `start`, wrapping around the end.
/// Never repeats an element; returns fewer than `count` when `seq` is short.
pub fn window<T: Clone>(seq: &[T], start: usize, count: usize) -> Vec<T> {
    let len = seq.len();
    let start = normalize(start, len);
    (0..count.min(len)).map(|i| seq[(start + i) % len].clone()).collect()
}

/// Move the first `k` elements to the back, keeping their relative order.
/// No-op when `k >= seq.len()`.
pub fn rotate_left<T: Clone>(seq: &[T], k: usize) -> Vec<T> {
    let mut rotated = seq.to_vec();
    if k < rotated.len() {
        rotated.rotate_left(k);
    }
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_window_wraps() {
        let seq = [1, 2, 3, 4, 5];
        assert_eq!(window(&seq, 3, 4), vec![4, 5, 1, 2]);
        assert_eq!(window(&seq, 8, 2), vec![4, 5]);
    }

    #[test]
    fn test_window_short_sequence() {
        let seq = ['a', 'b'];
        assert_eq!(window(&seq, 1, 4), vec!['b', 'a']);
        assert!(window::<u8>(&[], 3, 4).is_empty());
    }

    #[test]
    fn test_advance_cursor() {
        assert_eq!(advance_cursor(0, 4, 5), 4);
        assert_eq!(advance_cursor(4, 3, 5), 2);
        // Not enough players to cycle: stays put
        assert_eq!(advance_cursor(1, 4, 3), 1);
        assert_eq!(advance_cursor(2, 3, 3), 2);
        assert_eq!(advance_cursor(7, 3, 0), 0);
    }

    #[test]
    fn test_rotate_left_examples() {
        assert_eq!(rotate_left(&["A1", "A2", "A3", "A4", "A5"], 4), ["A5", "A1", "A2", "A3", "A4"]);
        assert_eq!(rotate_left(&["B1", "B2", "B3", "B4", "B5"], 3), ["B4", "B5", "B1", "B2", "B3"]);
        assert_eq!(rotate_left(&[1, 2, 3], 5), [1, 2, 3]);
    }

    proptest! {
        #[test]
        fn prop_rotate_moves_prefix_to_back(len in 1usize..30, k_seed in 0usize..30) {
            let k = k_seed % len;
            let seq: Vec<usize> = (0..len).collect();
            let rotated = rotate_left(&seq, k);
            prop_assert_eq!(rotated.len(), len);
            prop_assert_eq!(&rotated[..len - k], &seq[k..]);
            prop_assert_eq!(&rotated[len - k..], &seq[..k]);
        }

        #[test]
        fn prop_rotate_by_len_is_identity(len in 0usize..30) {
            let seq: Vec<usize> = (0..len).collect();
            prop_assert_eq!(rotate_left(&seq, len), seq);
        }

        #[test]
        fn prop_rotations_compose(len in 1usize..30, k in 0usize..30, j in 0usize..30) {
            let (k, j) = (k % len, j % len);
            let seq: Vec<usize> = (0..len).collect();
            let twice = rotate_left(&rotate_left(&seq, k), j);
            prop_assert_eq!(twice, rotate_left(&seq, (k + j) % len));
        }

        #[test]
        fn prop_window_matches_rotated_prefix(len in 1usize..30, cursor in 0usize..60, count in 0usize..10) {
            let seq: Vec<usize> = (0..len).collect();
            let rotated = rotate_left(&seq, normalize(cursor, len));
            let expected: Vec<usize> = rotated.into_iter().take(count).collect();
            prop_assert_eq!(window(&seq, cursor, count), expected);
        }
    }
}
