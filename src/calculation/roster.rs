//! Roster operations over sequences of employee records.
//!
//! A roster is any caller-owned ordered sequence of [`EmployeeRecord`]
//! values, mixing variants freely. The operations here are pure: they
//! read pay through the record union and never touch variant internals.

use tracing::debug;

use crate::calculation::pay_order::compare_by_pay;
use crate::models::EmployeeRecord;

/// Sorts a roster in place, ascending by monthly pay.
///
/// The sort is stable: records with equal pay keep their relative input
/// order, and sorting an already-sorted roster leaves it unchanged.
///
/// # Examples
///
/// ```
/// use pay_roster::calculation::sort_by_pay;
/// use pay_roster::models::{EmployeeRecord, HourlyEmployee, SalariedEmployee};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let mut roster = vec![
///     EmployeeRecord::Hourly(HourlyEmployee::new("John", date, 50.5, 160.0).unwrap()),
///     EmployeeRecord::Salaried(SalariedEmployee::new("Moe", date, 75000.0).unwrap()),
/// ];
/// sort_by_pay(&mut roster);
/// assert_eq!(roster[0].name(), "Moe");
/// ```
pub fn sort_by_pay(roster: &mut [EmployeeRecord]) {
    debug!(roster_size = roster.len(), "sorting roster by monthly pay");
    roster.sort_by(compare_by_pay);
}

/// Returns a roster sorted ascending by monthly pay, consuming the input.
///
/// Equivalent to [`sort_by_pay`] for callers that prefer an owned result.
pub fn sorted_by_pay(mut roster: Vec<EmployeeRecord>) -> Vec<EmployeeRecord> {
    sort_by_pay(&mut roster);
    roster
}

/// Sums monthly pay over a roster in encounter order.
///
/// Accumulation order affects floating rounding for large mixed rosters;
/// the contract promises the encounter-order sum, not a particular
/// rounding association.
pub fn total_monthly_pay(roster: &[EmployeeRecord]) -> f64 {
    let total = roster.iter().map(EmployeeRecord::monthly_pay).sum();
    debug!(
        roster_size = roster.len(),
        total_monthly_pay = total,
        "totalled roster pay"
    );
    total
}
