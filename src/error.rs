//! Error types for the pay roster.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the few failure conditions the roster model can produce.

use thiserror::Error;

/// The main error type for the pay roster.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pay_roster::error::RosterError;
///
/// let error = RosterError::MissingComparand;
/// assert_eq!(error.to_string(), "Comparison requires a counterpart record, but none was supplied");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// A checked comparison was invoked without a counterpart record.
    #[error("Comparison requires a counterpart record, but none was supplied")]
    MissingComparand,

    /// An employee record field was invalid at construction.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidField {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
