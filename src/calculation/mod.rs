//! Calculation logic for the pay roster.
//!
//! This module contains the pay-based ordering comparator and the roster
//! operations that sort and total monthly pay across mixed-variant
//! sequences of employee records.

mod pay_order;
mod roster;

pub use pay_order::{compare_by_pay, compare_by_pay_checked, compare_pay};
pub use roster::{sort_by_pay, sorted_by_pay, total_monthly_pay};
