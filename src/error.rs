//! Error types for the contractor payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions raised by the calculation pipeline and the
//! record lifecycle manager.

use thiserror::Error;
use uuid::Uuid;

use crate::models::{RecordStatus, ReferenceMonth};

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. The calling
/// layer is responsible for translating these into user-facing responses;
/// the engine itself never swallows or downgrades them.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::Validation {
///     field: "advance_value".to_string(),
///     message: "advance exceeds base salary".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid value for 'advance_value': advance exceeds base salary"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A payroll record already exists for the contractor and reference month.
    #[error("Payroll record already exists for contractor {contractor_id} in {month}")]
    DuplicateRecord {
        /// The contractor the duplicate create was attempted for.
        contractor_id: Uuid,
        /// The reference month of the existing record.
        month: ReferenceMonth,
    },

    /// A lifecycle operation was attempted from a state that does not permit it.
    #[error("Cannot {operation} a record in status '{status}'")]
    InvalidTransition {
        /// The operation that was attempted (e.g. "close", "reopen").
        operation: &'static str,
        /// The status the record was in when the operation was attempted.
        status: RecordStatus,
    },

    /// Malformed or out-of-range input was supplied.
    #[error("Invalid value for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// The referenced payroll record does not exist.
    #[error("Payroll record not found: {id}")]
    RecordNotFound {
        /// The record identifier that was looked up.
        id: Uuid,
    },
}

impl EngineError {
    /// Shorthand constructor for a [`EngineError::Validation`] error.
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
