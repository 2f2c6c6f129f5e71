#![cfg(feature = "memo")]
//! Tests for continuation-passing recursive memoization.
//!
//! Tests cover:
//! - Agreement with the plain recursive definition
//! - One body evaluation per distinct input across the whole call graph
//! - Store sharing between the outer wrapper, continuations and clones
//! - Failure handling in fallible bodies

use memolambda::memo::{RecursiveMemo, memoize_recursive, try_memoize_recursive};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};

fn fibonacci(n: u64) -> u64 {
    if n < 2 { n } else { fibonacci(n - 1) + fibonacci(n - 2) }
}

fn fibonacci_step(recurse: &dyn Fn(u64) -> u64, n: u64) -> u64 {
    if n < 2 { n } else { recurse(n - 1) + recurse(n - 2) }
}

// =============================================================================
// Correctness
// =============================================================================

#[rstest]
fn memoized_fibonacci_matches_plain_fibonacci() {
    let fibonacci_memo = memoize_recursive(fibonacci_step);

    for n in 0..=10 {
        assert_eq!(fibonacci_memo(n), fibonacci(n));
    }
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(10, 55)]
#[case(50, 12_586_269_025)]
#[case(93, 12_200_160_415_121_876_738)]
fn memoized_fibonacci_known_values(#[case] n: u64, #[case] expected: u64) {
    let fibonacci_memo = memoize_recursive(fibonacci_step);

    assert_eq!(fibonacci_memo(n), expected);
}

#[rstest]
fn body_without_recursion_behaves_like_memoize() {
    let calls = Cell::new(0);
    let double = memoize_recursive(|_recurse: &dyn Fn(i32) -> i32, n: i32| {
        calls.set(calls.get() + 1);
        n * 2
    });

    assert_eq!(double(4), 8);
    assert_eq!(double(4), 8);
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Sharing
// =============================================================================

#[rstest]
fn fibonacci_of_ten_evaluates_body_eleven_times() {
    let evaluations = Cell::new(0);
    let fibonacci_memo = memoize_recursive(|recurse: &dyn Fn(u64) -> u64, n: u64| {
        evaluations.set(evaluations.get() + 1);
        fibonacci_step(recurse, n)
    });

    assert_eq!(fibonacci_memo(10), 55);
    assert_eq!(evaluations.get(), 11);

    assert_eq!(fibonacci_memo(10), 55);
    assert_eq!(fibonacci_memo(7), 13);
    assert_eq!(evaluations.get(), 11);
}

#[rstest]
fn each_input_is_evaluated_at_most_once() {
    let per_input: RefCell<HashMap<u64, usize>> = RefCell::new(HashMap::new());
    let fibonacci_memo = memoize_recursive(|recurse: &dyn Fn(u64) -> u64, n: u64| {
        *per_input.borrow_mut().entry(n).or_insert(0) += 1;
        fibonacci_step(recurse, n)
    });

    fibonacci_memo(30);
    fibonacci_memo(25);

    let per_input = per_input.borrow();
    assert_eq!(per_input.len(), 31);
    assert!(per_input.values().all(|count| *count == 1));
}

#[rstest]
fn later_calls_reuse_earlier_subresults() {
    let evaluations = Cell::new(0);
    let memo = RecursiveMemo::new(|recurse: &dyn Fn(u64) -> u64, n: u64| {
        evaluations.set(evaluations.get() + 1);
        fibonacci_step(recurse, n)
    });

    memo.call(20);
    assert_eq!(evaluations.get(), 21);

    memo.call(25);
    assert_eq!(evaluations.get(), 26);
    assert_eq!(memo.cache_len(), 26);
}

#[rstest]
fn clones_observe_the_same_store() {
    let memo = RecursiveMemo::new(fibonacci_step);
    let clone = memo.clone();

    memo.call(15);

    assert!(clone.is_cached(&15));
    assert!(clone.is_cached(&0));
    assert_eq!(clone.cache_len(), 16);
}

#[rstest]
fn multiple_recursive_arguments_share_store() {
    let evaluations = Cell::new(0);
    let binomial = memoize_recursive(|recurse: &dyn Fn((u32, u32)) -> u64, (n, k): (u32, u32)| {
        evaluations.set(evaluations.get() + 1);
        if k == 0 || k == n {
            1
        } else {
            recurse((n - 1, k - 1)) + recurse((n - 1, k))
        }
    });

    assert_eq!(binomial((30, 15)), 155_117_520);
    assert!(evaluations.get() < 30 * 30);
}

// =============================================================================
// Failure
// =============================================================================

#[rstest]
fn panic_in_body_leaves_completed_subresults_cached() {
    let armed = Cell::new(true);
    let memo = RecursiveMemo::new(|recurse: &dyn Fn(u64) -> u64, n: u64| {
        let value = fibonacci_step(recurse, n);
        if n == 5 && armed.replace(false) {
            panic!("fails once at five");
        }
        value
    });

    let outcome = catch_unwind(AssertUnwindSafe(|| memo.call(8)));
    assert!(outcome.is_err());
    assert!(memo.is_cached(&4));
    assert!(!memo.is_cached(&5));
    assert!(!memo.is_cached(&8));

    assert_eq!(memo.call(8), 21);
    assert!(memo.is_cached(&5));
}

#[rstest]
fn error_propagates_from_any_depth_and_is_retried() {
    let fail_at = Cell::new(Some(3_u32));
    let evaluations = Cell::new(0);
    let sum_to = try_memoize_recursive(|recurse: &dyn Fn(u32) -> Result<u32, String>, n: u32| {
        evaluations.set(evaluations.get() + 1);
        if fail_at.get() == Some(n) {
            return Err(format!("failed at {n}"));
        }
        if n == 0 { Ok(0) } else { Ok(recurse(n - 1)? + n) }
    });

    assert_eq!(sum_to(6), Err("failed at 3".to_string()));
    // 6, 5, 4, 3
    assert_eq!(evaluations.get(), 4);

    fail_at.set(None);
    assert_eq!(sum_to(6), Ok(21));
    // 6, 5, 4, 3 again plus 2, 1, 0
    assert_eq!(evaluations.get(), 11);

    assert_eq!(sum_to(6), Ok(21));
    assert_eq!(evaluations.get(), 11);
}
