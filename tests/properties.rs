//! Property-based tests for the roster contracts.
//!
//! These properties pin down the ordering, equality, hashing, and sorting
//! guarantees over generated records: the comparator is a total order
//! consistent with numeric pay for non-NaN values, equality is an
//! equivalence relation that never crosses variants, equal records hash
//! equal, and sorting is stable and idempotent.

use std::cmp::Ordering;

use chrono::NaiveDate;
use proptest::prelude::*;

use pay_roster::calculation::{compare_by_pay, sort_by_pay, sorted_by_pay, total_monthly_pay};
use pay_roster::models::{EmployeeRecord, HourlyEmployee, SalariedEmployee};

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2026, 1u32..13, 1u32..29)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8} [A-Z][a-z]{1,8}"
}

fn arb_hourly() -> impl Strategy<Value = EmployeeRecord> {
    (arb_name(), arb_date(), 0.0f64..500.0, 0.0f64..300.0).prop_map(|(name, hired, rate, hours)| {
        HourlyEmployee::new(name, hired, rate, hours)
            .unwrap()
            .into()
    })
}

fn arb_salaried() -> impl Strategy<Value = EmployeeRecord> {
    (arb_name(), arb_date(), 0.0f64..1.0e6).prop_map(|(name, hired, salary)| {
        SalariedEmployee::new(name, hired, salary).unwrap().into()
    })
}

fn arb_record() -> impl Strategy<Value = EmployeeRecord> {
    prop_oneof![arb_hourly(), arb_salaried()]
}

fn arb_roster() -> impl Strategy<Value = Vec<EmployeeRecord>> {
    prop::collection::vec(arb_record(), 0..32)
}

proptest! {
    #[test]
    fn compare_is_consistent_with_numeric_pay(a in arb_record(), b in arb_record()) {
        let expected = if a.monthly_pay() < b.monthly_pay() {
            Ordering::Less
        } else if a.monthly_pay() > b.monthly_pay() {
            Ordering::Greater
        } else {
            Ordering::Equal
        };
        prop_assert_eq!(compare_by_pay(&a, &b), expected);
    }

    #[test]
    fn compare_is_antisymmetric(a in arb_record(), b in arb_record()) {
        prop_assert_eq!(compare_by_pay(&a, &b), compare_by_pay(&b, &a).reverse());
    }

    #[test]
    fn compare_is_transitive(a in arb_record(), b in arb_record(), c in arb_record()) {
        if compare_by_pay(&a, &b) != Ordering::Greater
            && compare_by_pay(&b, &c) != Ordering::Greater
        {
            prop_assert_ne!(compare_by_pay(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn equality_is_reflexive_and_symmetric(a in arb_record(), b in arb_record()) {
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn equality_never_crosses_variants(a in arb_hourly(), b in arb_salaried()) {
        prop_assert_ne!(a, b);
    }

    #[test]
    fn clones_are_equal_and_hash_equal(a in arb_record()) {
        let clone = a.clone();
        prop_assert_eq!(&a, &clone);
        prop_assert_eq!(a.hash_code(), clone.hash_code());
    }

    #[test]
    fn hash_is_stable_across_calls(a in arb_record()) {
        prop_assert_eq!(a.hash_code(), a.hash_code());
    }

    #[test]
    fn sort_orders_every_adjacent_pair(roster in arb_roster()) {
        let sorted = sorted_by_pay(roster);
        for window in sorted.windows(2) {
            prop_assert_ne!(compare_by_pay(&window[0], &window[1]), Ordering::Greater);
        }
    }

    #[test]
    fn sort_is_idempotent(roster in arb_roster()) {
        let mut sorted = sorted_by_pay(roster);
        let once = sorted.clone();
        sort_by_pay(&mut sorted);
        prop_assert_eq!(sorted, once);
    }

    #[test]
    fn sort_is_a_permutation(roster in arb_roster()) {
        let sorted = sorted_by_pay(roster.clone());
        prop_assert_eq!(sorted.len(), roster.len());
        for record in &roster {
            let in_input = roster.iter().filter(|r| *r == record).count();
            let in_output = sorted.iter().filter(|r| *r == record).count();
            prop_assert_eq!(in_input, in_output);
        }
    }

    #[test]
    fn sort_is_stable_under_equal_pay(
        rate in 1.0f64..100.0,
        hours in 1.0f64..200.0,
        count in 2usize..8,
    ) {
        // Identical pay, distinguishable names: input order must survive.
        let hired = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let roster: Vec<EmployeeRecord> = (0..count)
            .map(|i| {
                HourlyEmployee::new(format!("Employee {i}"), hired, rate, hours)
                    .unwrap()
                    .into()
            })
            .collect();
        let sorted = sorted_by_pay(roster.clone());
        prop_assert_eq!(sorted, roster);
    }

    #[test]
    fn total_of_concatenation_adds_up(a in arb_roster(), b in arb_roster()) {
        // Encounter-order accumulation: summing b after a equals one pass
        // over the concatenation.
        let mut combined = a.clone();
        combined.extend(b.iter().cloned());
        let split = a.iter().chain(b.iter()).fold(0.0, |acc, r| acc + r.monthly_pay());
        prop_assert_eq!(total_monthly_pay(&combined), split);
    }
}
