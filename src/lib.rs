//! Employee pay modelling and roster operations.
//!
//! This crate provides a closed set of employee record variants (hourly and
//! salaried), each computing a comparable monthly pay figure, together with
//! roster operations for sorting and totalling pay across mixed variants.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
