//! Binary search over an ascending slice.
//!
//! Both variants bisect the half-open window `[left, right)` with
//! `mid = left + (right - left) / 2`, so they probe the same indices and return
//! the same answer for the same input, duplicates included.

use std::cmp::Ordering;

/// Index of `target` in `sorted`, or None. `sorted` must be ascending.
pub fn binary_search_iterative(sorted: &[i32], target: i32) -> Option<usize> {
    let (mut left, mut right) = (0, sorted.len());
    while left < right {
        let mid = left + (right - left) / 2;
        match sorted[mid].cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }
    None
}

/// Recursive twin of [`binary_search_iterative`]; O(log n) call depth.
pub fn binary_search_recursive(sorted: &[i32], target: i32) -> Option<usize> {
    fn bisect(sorted: &[i32], target: i32, left: usize, right: usize) -> Option<usize> {
        if left >= right {
            return None;
        }
        let mid = left + (right - left) / 2;
        match sorted[mid].cmp(&target) {
            Ordering::Equal => Some(mid),
            Ordering::Less => bisect(sorted, target, mid + 1, right),
            Ordering::Greater => bisect(sorted, target, left, mid),
        }
    }
    bisect(sorted, target, 0, sorted.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ODDS: [i32; 6] = [1, 3, 5, 7, 9, 11];

    #[rstest]
    #[case(7, Some(3))]
    #[case(1, Some(0))]
    #[case(11, Some(5))]
    #[case(4, None)]
    #[case(0, None)]
    #[case(12, None)]
    fn given_sorted_odds_when_searching_then_variants_agree(
        #[case] target: i32,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(binary_search_iterative(&ODDS, target), expected);
        assert_eq!(binary_search_recursive(&ODDS, target), expected);
    }

    #[test]
    fn given_empty_slice_when_searching_then_not_found() {
        assert_eq!(binary_search_iterative(&[], 1), None);
        assert_eq!(binary_search_recursive(&[], 1), None);
    }
}
