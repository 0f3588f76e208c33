//! Payroll line item read model.
//!
//! Line items are the itemized breakdown of a payroll record: one credit
//! per earnings component and one debit per deduction. They are owned
//! exclusively by their parent record and regenerated as a batch every
//! time the record is computed; they are never mutated independently.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a line item adds to or subtracts from the contractor's pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    /// An amount paid to the contractor.
    Credit,
    /// An amount withheld from the contractor.
    Debit,
}

impl std::fmt::Display for LineItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineItemKind::Credit => write!(f, "credit"),
            LineItemKind::Debit => write!(f, "debit"),
        }
    }
}

/// A single line in a payroll record's itemized breakdown.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{LineItemKind, PayrollLineItem};
/// use rust_decimal::Decimal;
///
/// let item = PayrollLineItem {
///     kind: LineItemKind::Credit,
///     description: "Overtime hours".to_string(),
///     amount: Decimal::new(15000, 2),
/// };
/// assert_eq!(item.kind, LineItemKind::Credit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLineItem {
    /// Whether this line is paid out or withheld.
    pub kind: LineItemKind,
    /// Human-readable description of the component.
    pub description: String,
    /// The component's amount, quantized to 2 decimal places.
    pub amount: Decimal,
}

impl PayrollLineItem {
    /// Creates a credit line.
    pub fn credit(description: impl Into<String>, amount: Decimal) -> Self {
        PayrollLineItem {
            kind: LineItemKind::Credit,
            description: description.into(),
            amount,
        }
    }

    /// Creates a debit line.
    pub fn debit(description: impl Into<String>, amount: Decimal) -> Self {
        PayrollLineItem {
            kind: LineItemKind::Debit,
            description: description.into(),
            amount,
        }
    }
}
