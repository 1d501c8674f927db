//! Integration tests for LinkedList and LinkedChain
//!
//! LinkedList owns its nodes and is acyclic by construction; LinkedChain is
//! the arena-backed variant whose tail can be rewired into a cycle.

use proptest::prelude::*;
use rstest::rstest;

use drills::domain::{DomainError, LinkedChain, LinkedList};
use drills::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Classic insert sequence: front 10, front 20, back 5, back 15.
fn classic_list() -> LinkedList {
    let mut list = LinkedList::new();
    list.insert_front(10);
    list.insert_front(20);
    list.insert_back(5);
    list.insert_back(15);
    list
}

// ============================================================
// LinkedList
// ============================================================

#[test]
fn given_classic_inserts_when_displayed_then_shows_arrows_and_null() {
    let list = classic_list();
    assert_eq!(list.to_string(), "20 -> 10 -> 5 -> 15 -> NULL");
    assert_eq!(list.len(), 4);
}

#[test]
fn given_empty_list_when_displayed_then_says_empty() {
    assert_eq!(LinkedList::new().to_string(), "empty");
}

#[rstest]
#[case(20, Some(0))]
#[case(5, Some(2))]
#[case(15, Some(3))]
#[case(99, None)]
fn given_classic_list_when_searching_then_reports_first_position(
    #[case] value: i32,
    #[case] expected: Option<usize>,
) {
    assert_eq!(classic_list().search(value), expected);
}

#[test]
fn given_duplicates_when_deleting_then_only_first_match_goes() {
    let mut list: LinkedList = [1, 2, 1, 3].into_iter().collect();
    assert!(list.delete_value(1));
    assert_eq!(list.to_vec(), vec![2, 1, 3]);
    assert_eq!(list.len(), 3);
}

#[test]
fn given_missing_value_when_deleting_then_list_unchanged() {
    let mut list = classic_list();
    assert!(!list.delete_value(42));
    assert_eq!(list.to_vec(), vec![20, 10, 5, 15]);
}

#[test]
fn given_tail_value_when_deleting_then_insert_back_still_appends() {
    let mut list = classic_list();
    assert!(list.delete_value(15));
    list.insert_back(7);
    assert_eq!(list.to_vec(), vec![20, 10, 5, 7]);
}

#[test]
fn given_empty_list_when_reversing_then_stays_empty() {
    let mut list = LinkedList::new();
    list.reverse();
    list.reverse_recursive();
    assert!(list.is_empty());
}

#[rstest]
#[case(vec![1], 1)]
#[case(vec![1, 2], 2)]
#[case(vec![1, 2, 3], 2)]
#[case(vec![1, 2, 3, 4], 3)]
#[case(vec![1, 2, 3, 4, 5], 3)]
fn given_list_when_finding_middle_then_upper_middle_for_even_lengths(
    #[case] values: Vec<i32>,
    #[case] expected: i32,
) {
    let list: LinkedList = values.into_iter().collect();
    assert_eq!(list.find_middle(), Ok(expected));
}

#[test]
fn given_empty_list_when_finding_middle_then_empty_list_error() {
    assert_eq!(LinkedList::new().find_middle(), Err(DomainError::EmptyList));
}

#[test]
fn given_owned_list_when_detecting_cycle_then_never_finds_one() {
    assert!(!LinkedList::new().detect_cycle());
    assert!(!classic_list().detect_cycle());
}

#[test]
fn given_list_when_cleared_then_reports_released_nodes_and_is_reusable() {
    let mut list = classic_list();
    assert_eq!(list.clear(), 4);
    assert!(list.is_empty());
    list.insert_back(1);
    assert_eq!(list.to_vec(), vec![1]);
}

#[test]
fn given_long_list_when_dropped_then_does_not_overflow_the_stack() {
    let list: LinkedList = (0..500_000).collect();
    assert_eq!(list.len(), 500_000);
    drop(list);
}

#[test]
fn given_list_when_extended_then_appends_in_order() {
    let mut list = classic_list();
    list.extend([1, 2]);
    assert_eq!(list.to_vec(), vec![20, 10, 5, 15, 1, 2]);
    assert_eq!(list.len(), 6);
}

/// Node allocation failure is not a recoverable error. List nodes are `Box`ed
/// and chain nodes live in a growing arena; both allocate through the global
/// allocator, which aborts the process on out-of-memory. Insertion therefore
/// returns `()` instead of a `Result`.
#[test]
#[allow(clippy::let_unit_value)]
fn given_node_allocation_when_out_of_memory_then_process_aborts() {
    let mut list = LinkedList::new();
    let () = list.insert_front(1);
    let () = list.insert_back(2);
    list.extend([3]);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);

    let mut chain = LinkedChain::new();
    chain.push_back(1);
    assert_eq!(chain.len(), 1);
}

proptest! {
    #[test]
    fn reverse_matches_vec_reverse(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut list: LinkedList = values.iter().copied().collect();
        list.reverse();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(list.to_vec(), expected);
    }

    #[test]
    fn recursive_and_iterative_reverse_agree(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut iterative: LinkedList = values.iter().copied().collect();
        let mut recursive: LinkedList = values.iter().copied().collect();
        iterative.reverse();
        recursive.reverse_recursive();
        prop_assert_eq!(iterative.to_vec(), recursive.to_vec());
    }

    #[test]
    fn reversing_twice_restores_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut list: LinkedList = values.iter().copied().collect();
        list.reverse();
        list.reverse_recursive();
        prop_assert_eq!(list.to_vec(), values);
    }

    #[test]
    fn middle_is_at_half_length(values in prop::collection::vec(any::<i32>(), 1..64)) {
        let list: LinkedList = values.iter().copied().collect();
        prop_assert_eq!(list.find_middle(), Ok(values[values.len() / 2]));
    }
}

// ============================================================
// LinkedChain
// ============================================================

#[test]
fn given_chain_when_tail_rewired_to_head_then_cycle_detected() {
    let mut chain: LinkedChain = [20, 10, 5, 15].into_iter().collect();
    assert!(!chain.is_cyclic());
    chain.link_tail_to(0).unwrap();
    assert!(chain.is_cyclic());
    assert_eq!(chain.to_string(), "20 -> 10 -> 5 -> 15 -> (20)");
}

#[test]
fn given_single_node_when_linked_to_itself_then_cycle_detected() {
    let mut chain: LinkedChain = [7].into_iter().collect();
    chain.link_tail_to(0).unwrap();
    assert!(chain.is_cyclic());
}

#[test]
fn given_cyclic_chain_when_finding_middle_then_refuses() {
    let mut chain: LinkedChain = (1..=4).collect();
    chain.link_tail_to(1).unwrap();
    assert_eq!(chain.find_middle(), Err(DomainError::CycleDetected));
    assert_eq!(chain.values(), vec![1, 2, 3, 4]);
}

#[test]
fn given_short_chain_when_linking_past_end_then_position_error() {
    let mut chain: LinkedChain = (1..=3).collect();
    assert_eq!(
        chain.link_tail_to(3),
        Err(DomainError::PositionOutOfRange {
            position: 3,
            len: 3
        })
    );
    assert!(!chain.is_cyclic());
}

#[test]
fn given_cyclic_chain_when_pushing_then_cycle_stays_closed() {
    let mut chain: LinkedChain = (1..=3).collect();
    chain.link_tail_to(0).unwrap();
    chain.push_back(4);
    assert!(chain.is_cyclic());
    assert_eq!(chain.values(), vec![1, 2, 3, 4]);
    assert_eq!(chain.get(3), Some(4));
}
