//! Custom Test Assertions

use std::collections::HashSet;
use std::fmt::Display;

use core_kernel::{Lifecycle, Money};

/// Asserts two amounts are equal to the cent
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.round_to_currency().amount(),
        expected.round_to_currency().amount(),
        "Money mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that `allowed` is exactly the transition table of `S`
///
/// Every listed pair must be accepted and every other pair refused.
pub fn assert_transition_table<S: Lifecycle>(allowed: &[(S, S)]) {
    for &from in S::all() {
        for &to in S::all() {
            let expected = allowed.contains(&(from, to));
            assert_eq!(
                from.can_transition_to(to),
                expected,
                "{} transition {} -> {} should be {}",
                S::ENTITY,
                from.as_str(),
                to.as_str(),
                if expected { "allowed" } else { "refused" }
            );
        }
    }
}

/// Asserts every status without actions is one of `terminal`
pub fn assert_terminal_statuses<S: Lifecycle>(terminal: &[S]) {
    for status in S::all() {
        assert_eq!(
            status.is_terminal(),
            terminal.contains(status),
            "{} status {} terminal mismatch",
            S::ENTITY,
            status.as_str()
        );
    }
}

/// Asserts no id appears twice
pub fn assert_unique_ids<I, T>(ids: I)
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut seen = HashSet::new();
    for id in ids {
        let id = id.to_string();
        assert!(seen.insert(id.clone()), "Duplicate id {}", id);
    }
}
