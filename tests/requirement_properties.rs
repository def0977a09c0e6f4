//! Property-based tests for requirement evaluation and case tables

use proptest::prelude::*;
use requisite::predicate::{Chain, Connective, Predicate};
use requisite::testing::{test_cases, EmptyTable};
use requisite::require;
use std::cell::{Cell, RefCell};

fn connective() -> impl Strategy<Value = Connective> {
    prop_oneof![Just(Connective::And), Just(Connective::Or)]
}

/// First predicate result, then (connective, result) for every further link.
fn chain_shape() -> impl Strategy<Value = (bool, Vec<(Connective, bool)>)> {
    (
        any::<bool>(),
        prop::collection::vec((connective(), any::<bool>()), 0..12),
    )
}

/// Plain left fold with no short-circuiting and no precedence.
fn reference_fold(first: bool, links: &[(Connective, bool)]) -> bool {
    links.iter().fold(first, |acc, (connective, value)| match connective {
        Connective::And => acc & value,
        Connective::Or => acc | value,
    })
}

fn constant(value: bool) -> impl Fn(&()) -> bool {
    move |_: &()| value
}

proptest! {
    #[test]
    fn prop_chain_matches_left_fold((first, links) in chain_shape()) {
        let mut chain = Chain::new(constant(first));
        for (connective, value) in &links {
            chain.push(*connective, constant(*value));
        }

        prop_assert_eq!(chain.len(), links.len() + 1);
        prop_assert_eq!(chain.check(&()), reference_fold(first, &links));
    }

    #[test]
    fn prop_builder_matches_left_fold((first, links) in chain_shape()) {
        let mut builder = require(&()).to_satisfy(constant(first));
        for (connective, value) in &links {
            builder = match connective {
                Connective::And => builder.and(constant(*value)),
                Connective::Or => builder.or(constant(*value)),
            };
        }

        let expected = reference_fold(first, &links);
        prop_assert_eq!(builder.otherwise(|| ()).is_ok(), expected);
    }

    #[test]
    fn prop_only_undecided_steps_are_evaluated((first, links) in chain_shape()) {
        let calls = RefCell::new(Vec::new());
        let probe = |index: usize, value: bool| {
            let calls = &calls;
            move |_: &()| {
                calls.borrow_mut().push(index);
                value
            }
        };

        let mut chain = Chain::new(probe(0, first));
        for (offset, (connective, value)) in links.iter().enumerate() {
            chain.push(*connective, probe(offset + 1, *value));
        }
        chain.check(&());
        drop(chain);

        let mut expected = vec![0];
        let mut acc = first;
        for (offset, (connective, value)) in links.iter().enumerate() {
            let decided = match connective {
                Connective::And => !acc,
                Connective::Or => acc,
            };
            if !decided {
                expected.push(offset + 1);
                acc = *value;
            }
        }

        prop_assert_eq!(calls.into_inner(), expected);
    }

    #[test]
    fn prop_error_factory_runs_only_on_failure(subject in any::<i64>(), threshold in any::<i64>()) {
        let calls = Cell::new(0);
        let result = require(&subject)
            .to_satisfy(move |n: &i64| *n >= threshold)
            .otherwise(|| {
                calls.set(calls.get() + 1);
                subject
            });

        if subject >= threshold {
            prop_assert_eq!(result, Ok(()));
            prop_assert_eq!(calls.get(), 0);
        } else {
            prop_assert_eq!(result, Err(subject));
            prop_assert_eq!(calls.get(), 1);
        }
    }

    #[test]
    fn prop_table_keeps_insertion_order(rows in prop::collection::vec(any::<(u8, i32)>(), 0..50)) {
        let table = rows
            .iter()
            .copied()
            .fold(test_cases(), |cases, row| cases.add(row))
            .build();

        if rows.is_empty() {
            prop_assert_eq!(table, Err(EmptyTable));
        } else {
            let table = table.unwrap();
            prop_assert_eq!(table.len(), rows.len());
            prop_assert_eq!(table.first(), &rows[0]);
            prop_assert_eq!(table.into_vec(), rows);
        }
    }
}
