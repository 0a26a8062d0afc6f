//! Core data models for the pay roster.
//!
//! This module contains the employee record types operated on by the
//! roster calculations.

mod employee;

pub use employee::{EmployeeRecord, HourlyEmployee, SalariedEmployee};
