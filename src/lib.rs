//! Payroll Engine for Independent Contractors
//!
//! This crate calculates monthly pay for independent contractors (advance,
//! premium hours, weekly-rest compensation and discounts) and manages the
//! lifecycle of the resulting payroll records from creation through
//! closing and payment.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod models;
