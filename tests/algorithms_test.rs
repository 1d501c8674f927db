//! Integration tests for the algorithm exercises

use proptest::prelude::*;
use rstest::rstest;

use drills::algorithms::{
    are_parentheses_balanced, binary_search_iterative, binary_search_recursive, bubble_sort,
    frequencies, gcd, is_palindrome, is_prime, lcm, primes_in_range, swap,
};
use drills::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn naive_is_prime(n: i32) -> bool {
    n >= 2 && (2..n).all(|d| n % d != 0)
}

// ============================================================
// Primes
// ============================================================

#[test]
fn given_first_ten_thousand_integers_when_testing_primality_then_matches_naive_division() {
    for n in -10..=10_000 {
        assert_eq!(is_prime(n), naive_is_prime(n), "n = {n}");
    }
}

#[rstest]
#[case(i32::MAX, true)]
#[case(2_147_117_569, false)]
#[case(2_147_395_600, false)]
#[case(i32::MIN, false)]
fn given_extreme_values_when_testing_primality_then_no_overflow(
    #[case] n: i32,
    #[case] expected: bool,
) {
    assert_eq!(is_prime(n), expected);
}

#[test]
fn given_reversed_range_when_listing_primes_then_empty() {
    assert!(primes_in_range(20, 10).is_empty());
    assert_eq!(primes_in_range(-5, 5), vec![2, 3, 5]);
}

// ============================================================
// GCD / LCM / swap
// ============================================================

#[rstest]
#[case(48, 18, 6, 144)]
#[case(7, 13, 1, 91)]
#[case(0, 5, 5, 0)]
#[case(0, 0, 0, 0)]
#[case(-4, 6, 2, 12)]
#[case(i32::MIN, 0, 1 << 31, 0)]
#[case(i32::MIN, -1, 1, 1 << 31)]
fn given_pair_when_computing_gcd_and_lcm_then_classic_results(
    #[case] a: i32,
    #[case] b: i32,
    #[case] expected_gcd: i64,
    #[case] expected_lcm: i64,
) {
    assert_eq!(gcd(a, b), expected_gcd);
    assert_eq!(lcm(a, b), expected_lcm);
}

#[test]
fn given_large_coprimes_when_computing_lcm_then_widens_instead_of_overflowing() {
    assert_eq!(lcm(i32::MAX, i32::MAX - 1), i64::from(i32::MAX) * i64::from(i32::MAX - 1));
}

#[test]
fn given_two_values_when_swapping_then_exchanged() {
    let (mut a, mut b) = (3, -4);
    swap(&mut a, &mut b);
    assert_eq!((a, b), (-4, 3));
}

// ============================================================
// Search / sort
// ============================================================

#[rstest]
#[case(&[], 1, None)]
#[case(&[5], 5, Some(0))]
#[case(&[1, 3, 5, 7, 9], 1, Some(0))]
#[case(&[1, 3, 5, 7, 9], 9, Some(4))]
#[case(&[1, 3, 5, 7, 9], 4, None)]
#[case(&[1, 3, 5, 7, 9], 10, None)]
fn given_sorted_slice_when_searching_then_both_variants_agree(
    #[case] sorted: &[i32],
    #[case] target: i32,
    #[case] expected: Option<usize>,
) {
    assert_eq!(binary_search_iterative(sorted, target), expected);
    assert_eq!(binary_search_recursive(sorted, target), expected);
}

#[test]
fn given_sorted_input_when_bubble_sorting_then_one_pass_suffices() {
    let mut values = [1, 2, 3, 4];
    assert_eq!(bubble_sort(&mut values), 1);
    assert_eq!(values, [1, 2, 3, 4]);
}

proptest! {
    #[test]
    fn bubble_sort_matches_std_sort(mut values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut expected = values.clone();
        expected.sort();
        bubble_sort(&mut values);
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn search_variants_agree_and_find_present_values(
        mut values in prop::collection::vec(-50i32..50, 0..60),
        target in -60i32..60,
    ) {
        values.sort();
        let iterative = binary_search_iterative(&values, target);
        prop_assert_eq!(iterative, binary_search_recursive(&values, target));
        match iterative {
            Some(index) => prop_assert_eq!(values[index], target),
            None => prop_assert!(!values.contains(&target)),
        }
    }

    #[test]
    fn frequencies_sum_to_input_length(values in prop::collection::vec(-5i32..5, 0..60)) {
        let counted = frequencies(&values);
        prop_assert_eq!(counted.iter().map(|(_, count)| count).sum::<usize>(), values.len());
        for (value, count) in counted {
            prop_assert_eq!(values.iter().filter(|v| **v == value).count(), count);
        }
    }
}

// ============================================================
// Text
// ============================================================

#[rstest]
#[case("", true)]
#[case("a", true)]
#[case("racecar", true)]
#[case("Never odd or even", true)]
#[case("A man a plan a canal Panama", true)]
#[case("hello", false)]
#[case("A man a man", false)]
fn given_text_when_checking_palindrome_then_ignores_spaces_and_case(
    #[case] text: &str,
    #[case] expected: bool,
) {
    assert_eq!(is_palindrome(text), expected);
}

#[rstest]
#[case("", true)]
#[case("{[()]}", true)]
#[case("a(b[c]{d}e)f", true)]
#[case("{[(])}", false)]
#[case("(((", false)]
#[case(")(", false)]
#[case("]", false)]
fn given_expression_when_checking_brackets_then_nesting_must_match(
    #[case] expr: &str,
    #[case] expected: bool,
) {
    assert_eq!(are_parentheses_balanced(expr), expected);
}
