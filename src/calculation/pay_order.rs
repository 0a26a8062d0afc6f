//! Pay-based ordering of employee records.
//!
//! This module provides the total order over monthly pay used for sorting
//! rosters. The order is intentionally separate from value equality:
//! records with the same pay but different fields compare equal here while
//! remaining unequal under `==`, so [`EmployeeRecord`] exposes a named
//! comparator rather than implementing `PartialOrd`.

use std::cmp::Ordering;

use crate::error::{RosterError, RosterResult};
use crate::models::EmployeeRecord;

/// Compares two pay figures under a total order.
///
/// Non-NaN values order numerically, with `-0.0` and `+0.0` comparing
/// equal. NaN sorts greater than every non-NaN value and ties with NaN,
/// so a sequence containing NaN pay still sorts deterministically.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use pay_roster::calculation::compare_pay;
///
/// assert_eq!(compare_pay(6250.0, 8080.0), Ordering::Less);
/// assert_eq!(compare_pay(-0.0, 0.0), Ordering::Equal);
/// assert_eq!(compare_pay(f64::NAN, f64::INFINITY), Ordering::Greater);
/// ```
pub fn compare_pay(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        // partial_cmp only fails when at least one side is NaN.
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Compares two employee records by their monthly pay.
///
/// The order is total over all constructible records and uniform across
/// variants: an hourly and a salaried record with the same pay compare
/// equal here even though they are never equal under `==`.
pub fn compare_by_pay(a: &EmployeeRecord, b: &EmployeeRecord) -> Ordering {
    compare_pay(a.monthly_pay(), b.monthly_pay())
}

/// Compares a record against an optionally-present counterpart.
///
/// Callers that hold the counterpart from a fallible lookup can compare
/// without unwrapping first.
///
/// # Errors
///
/// Returns [`RosterError::MissingComparand`] when `other` is `None`.
pub fn compare_by_pay_checked(
    record: &EmployeeRecord,
    other: Option<&EmployeeRecord>,
) -> RosterResult<Ordering> {
    let other = other.ok_or(RosterError::MissingComparand)?;
    Ok(compare_by_pay(record, other))
}
