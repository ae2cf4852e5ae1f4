//! Fisher-Yates shuffle over an injected source.
//!
//! # Algorithm
//! For `i` from `len - 1` down to `1`, draw `j` in `[0, i]` and swap
//! positions `i` and `j`. Every permutation is reachable when the source
//! is uniform.
//!
//! # Reference
//! Knuth (1997), "The Art of Computer Programming", Vol. 2, Algorithm 3.4.2P

use super::RandomSource;

/// Returns a shuffled copy of `items`, leaving the input untouched.
///
/// # Example
///
/// ```
/// use mug_seed::random::{shuffle, LowerBound};
///
/// // Always drawing 0 rotates the sequence left by one.
/// assert_eq!(shuffle(&[1, 2, 3, 4], &mut LowerBound), vec![2, 3, 4, 1]);
/// ```
pub fn shuffle<T: Clone, S: RandomSource + ?Sized>(items: &[T], source: &mut S) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, source);
    out
}

/// Shuffles `items` in place.
///
/// Draws `len - 1` numbers; empty and single-element slices draw none.
pub fn shuffle_in_place<T, S: RandomSource + ?Sized>(items: &mut [T], source: &mut S) {
    for i in (1..items.len()).rev() {
        let j = source.random_int(0, i);
        items.swap(i, j);
    }
}
