//! Property-based tests for SortedList.
//!
//! These tests check that the ordering, size and duplicate-placement
//! guarantees hold for arbitrary sequences of operations.

use std::cmp::Ordering;

use proptest::prelude::*;
use sorted_chain::{Comparator, Direction, DuplicatesPolicy, SortedList, SortedListOptions, Value};

// =============================================================================
// Strategies
// =============================================================================

#[derive(Debug, Clone)]
enum Operation {
    Insert(i64),
    Remove(i64),
    RemoveAll(i64),
    PopFirst,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => (-20_i64..20).prop_map(Operation::Insert),
        1 => (-20_i64..20).prop_map(Operation::Remove),
        1 => (-20_i64..20).prop_map(Operation::RemoveAll),
        1 => Just(Operation::PopFirst),
    ]
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Ascending), Just(Direction::Descending)]
}

fn policy() -> impl Strategy<Value = DuplicatesPolicy> {
    prop_oneof![Just(DuplicatesPolicy::Head), Just(DuplicatesPolicy::Tail)]
}

fn options() -> impl Strategy<Value = SortedListOptions> {
    (direction(), policy(), any::<bool>()).prop_map(|(direction, policy, allow_duplicates)| {
        SortedListOptions::new()
            .direction(direction)
            .duplicates_policy(policy)
            .allow_duplicates(allow_duplicates)
    })
}

/// Compares by first character only, so equal runs show placement order.
fn by_initial() -> Comparator {
    Comparator::new(|left: &Value, right: &Value| {
        let initial = |value: &Value| value.as_text().and_then(|text| text.chars().next());
        initial(left).cmp(&initial(right))
    })
}

fn is_ordered(list: &SortedList, direction: Direction) -> bool {
    let values = list.to_vec();
    values.windows(2).all(|pair| {
        let ordering = pair[0].cmp(&pair[1]);
        match direction {
            Direction::Ascending => ordering != Ordering::Greater,
            Direction::Descending => ordering != Ordering::Less,
        }
    })
}

proptest! {
    // =========================================================================
    // Ordering and Size
    // =========================================================================

    #[test]
    fn prop_operations_keep_order_and_size(
        options in options(),
        operations in prop::collection::vec(operation(), 0..60),
    ) {
        let direction = options.direction;
        let allow_duplicates = options.allow_duplicates;
        let mut list = SortedList::for_ints(options);
        for operation in operations {
            match operation {
                Operation::Insert(value) => {
                    if let Err(error) = list.insert(value) {
                        prop_assert!(!allow_duplicates);
                        prop_assert!(error.is_duplicate_rejected());
                    }
                }
                Operation::Remove(value) => {
                    list.remove(value);
                }
                Operation::RemoveAll(value) => {
                    list.remove_all(value);
                    prop_assert!(!list.contains(value));
                }
                Operation::PopFirst => {
                    list.pop_first();
                }
            }
            prop_assert!(is_ordered(&list, direction));
            prop_assert_eq!(list.len(), list.iter().count());
            prop_assert_eq!(list.is_empty(), list.len() == 0);
        }
    }

    #[test]
    fn prop_from_array_is_a_sort(values in prop::collection::vec(any::<i64>(), 0..50)) {
        let list = SortedList::from_array(values.iter().copied(), SortedListOptions::new()).unwrap();
        let mut expected = values;
        expected.sort_unstable();
        let stored: Vec<i64> = list.iter().filter_map(Value::as_integer).collect();
        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn prop_unique_list_has_no_equal_neighbours(
        values in prop::collection::vec(-10_i64..10, 0..50),
    ) {
        let mut list = SortedList::for_ints(SortedListOptions::new().allow_duplicates(false));
        for value in &values {
            let already_present = list.contains(*value);
            let outcome = list.insert(*value);
            prop_assert_eq!(outcome.is_err(), already_present);
        }
        let stored = list.to_vec();
        prop_assert!(stored.windows(2).all(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn prop_first_and_last_are_extremes(values in prop::collection::vec(any::<i64>(), 1..40)) {
        let list = SortedList::from_array(values.iter().copied(), SortedListOptions::new()).unwrap();
        let minimum = values.iter().copied().min().map(Value::from);
        let maximum = values.iter().copied().max().map(Value::from);
        prop_assert_eq!(list.first().ok().cloned(), minimum);
        prop_assert_eq!(list.last().ok().cloned(), maximum);
    }

    // =========================================================================
    // Kind Lock
    // =========================================================================

    #[test]
    fn prop_other_kind_is_always_rejected(
        values in prop::collection::vec(any::<i64>(), 1..20),
        text in "[a-z]{0,8}",
    ) {
        let mut list = SortedList::from_array(values, SortedListOptions::new()).unwrap();
        let before = list.to_vec();
        let error = list.insert(text.as_str()).unwrap_err();
        prop_assert!(error.is_type_mismatch());
        prop_assert_eq!(list.to_vec(), before);
    }

    // =========================================================================
    // Duplicate Placement
    // =========================================================================

    #[test]
    fn prop_tail_policy_keeps_insertion_order_in_runs(
        words in prop::collection::vec("[a-c][a-zA-Z]{0,3}", 0..30),
    ) {
        let options = SortedListOptions::new().comparator(by_initial());
        let list = SortedList::from_array(words.iter().map(String::as_str), options).unwrap();

        let mut expected = words.clone();
        expected.sort_by_key(|word| word.chars().next());
        let stored: Vec<&str> = list.iter().filter_map(Value::as_text).collect();
        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn prop_head_policy_reverses_insertion_order_in_runs(
        words in prop::collection::vec("[a-c][a-zA-Z]{0,3}", 0..30),
    ) {
        let options = SortedListOptions::new()
            .comparator(by_initial())
            .duplicates_policy(DuplicatesPolicy::Head);
        let list = SortedList::from_array(words.iter().map(String::as_str), options).unwrap();

        let mut expected: Vec<String> = words.iter().rev().cloned().collect();
        expected.sort_by_key(|word| word.chars().next());
        let stored: Vec<&str> = list.iter().filter_map(Value::as_text).collect();
        prop_assert_eq!(stored, expected);
    }

    // =========================================================================
    // Derived Lists
    // =========================================================================

    #[test]
    fn prop_slice_matches_vec_slice(
        values in prop::collection::vec(-50_i64..50, 0..30),
        start in -40_isize..40,
        length in prop::option::of(-5_isize..40),
    ) {
        let list = SortedList::from_array(values, SortedListOptions::new()).unwrap();
        let snapshot = list.to_vec();
        let size = isize::try_from(snapshot.len()).unwrap();
        let begin = if start < 0 { (size + start).max(0) } else { start.min(size) };
        let end = match length {
            Some(length) if length <= 0 => begin,
            Some(length) => (begin + length).min(size),
            None => size,
        };
        let range = usize::try_from(begin).unwrap()..usize::try_from(end).unwrap();
        prop_assert_eq!(list.slice(start, length).to_vec(), snapshot[range].to_vec());
    }

    #[test]
    fn prop_merge_is_sorted_union(
        left in prop::collection::vec(any::<i64>(), 0..30),
        right in prop::collection::vec(any::<i64>(), 0..30),
    ) {
        let left_list = SortedList::from_array(left.clone(), SortedListOptions::new()).unwrap();
        let right_list = SortedList::from_array(right.clone(), SortedListOptions::new()).unwrap();
        let merged = left_list.merge(&right_list).unwrap();

        let mut expected: Vec<i64> = left.into_iter().chain(right).collect();
        expected.sort_unstable();
        let stored: Vec<i64> = merged.iter().filter_map(Value::as_integer).collect();
        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn prop_map_result_is_sorted(values in prop::collection::vec(-1000_i64..1000, 0..30)) {
        let list = SortedList::from_array(values, SortedListOptions::new()).unwrap();
        let mapped = list.map(|value| -(value.as_integer().unwrap_or(0) % 7)).unwrap();
        prop_assert_eq!(mapped.len(), list.len());
        prop_assert!(is_ordered(&mapped, Direction::Ascending));
    }

    #[test]
    fn prop_filter_matches_iterator_filter(
        options in options(),
        values in prop::collection::vec(-100_i64..100, 0..40),
    ) {
        let allow_duplicates = options.allow_duplicates;
        let mut list = SortedList::for_ints(options);
        for value in values {
            if let Err(error) = list.insert(value) {
                prop_assert!(!allow_duplicates && error.is_duplicate_rejected());
            }
        }
        let is_odd = |value: &Value| value.as_integer().is_some_and(|number| number % 2 != 0);
        let expected: Vec<Value> = list.iter().filter(|value| is_odd(*value)).cloned().collect();
        prop_assert_eq!(list.filter(is_odd).to_vec(), expected);
    }

    #[test]
    fn prop_derived_lists_match_fresh_insertion(
        options in options(),
        words in prop::collection::vec("[a-cA-C]{1,2}", 0..30),
        start in -10_isize..10,
    ) {
        let options = options.case_insensitive(true);
        let mut list = SortedList::for_strings(options.clone());
        for word in &words {
            if let Err(error) = list.insert(word.as_str()) {
                prop_assert!(error.is_duplicate_rejected());
            }
        }

        let reinserted = |values: Vec<Value>| {
            let mut fresh = SortedList::for_strings(options.clone());
            fresh.add_all(values).unwrap();
            fresh.to_vec()
        };
        let keep = |value: &Value| value.as_text().is_some_and(|text| text.len() == 1);
        let kept: Vec<Value> = list.iter().filter(|value| keep(*value)).cloned().collect();
        prop_assert_eq!(list.filter(keep).to_vec(), reinserted(kept));

        let sliced = list.slice(start, None);
        let skip = usize::try_from(if start < 0 {
            (isize::try_from(list.len()).unwrap() + start).max(0)
        } else {
            start
        })
        .unwrap();
        let tail: Vec<Value> = list.iter().skip(skip).cloned().collect();
        prop_assert_eq!(sliced.to_vec(), reinserted(tail));

        let merged = list.merge(&SortedList::new()).unwrap();
        prop_assert_eq!(merged.to_vec(), reinserted(list.to_vec()));
    }
}
