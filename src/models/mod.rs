//! Core data models for the contractor payroll engine.
//!
//! This module contains the contractor profile, the payroll record with
//! its monthly inputs, the line-item read model, and the reference-month
//! key that records are unique over.

mod contractor;
mod line_item;
mod record;
mod reference_month;

pub use contractor::ContractorProfile;
pub use line_item::{LineItemKind, PayrollLineItem};
pub use record::{MonthlyInputs, PayrollDetails, PayrollRecord, RecordStatus, RecordUpdate};
pub use reference_month::ReferenceMonth;
