//! Multiplier configuration for the payroll engine.
//!
//! Companies may define their own premium multipliers for overtime,
//! holiday and night-shift work, plus a default advance percentage. When
//! a company has no configuration of its own, a system-wide default
//! applies. The default is a pure constant value resolved through
//! [`resolve_config`], never a mutable singleton.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Premium multipliers and the default advance percentage.
///
/// Each premium is expressed as an *additional* percentage over the base
/// hourly rate: an overtime percentage of 50 means overtime hours pay
/// `1.5 ×` the base rate.
///
/// # Example
///
/// ```
/// use payroll_engine::config::MultiplierConfig;
/// use rust_decimal::Decimal;
///
/// let config = MultiplierConfig::system_default();
/// assert_eq!(config.overtime_factor(), Decimal::new(15, 1)); // 1.5
/// assert_eq!(config.holiday_factor(), Decimal::from(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierConfig {
    /// Additional percentage paid on overtime hours.
    pub overtime_percentage: Decimal,
    /// Additional percentage paid on Sunday/holiday hours.
    pub holiday_percentage: Decimal,
    /// Additional percentage paid on night-shift hours. Applied to the
    /// full hour, not merely the premium fraction; a percentage of 20
    /// pays the whole hour at 1.2 times the base rate.
    pub night_shift_percentage: Decimal,
    /// Default advance payment percentage of the base salary, used when
    /// the contractor profile does not override it.
    pub advance_percentage: Decimal,
}

impl MultiplierConfig {
    /// The system-wide default configuration: overtime 50%, holiday 100%,
    /// night shift 20%, advance 40%.
    pub fn system_default() -> Self {
        MultiplierConfig {
            overtime_percentage: Decimal::from(50),
            holiday_percentage: Decimal::from(100),
            night_shift_percentage: Decimal::from(20),
            advance_percentage: Decimal::from(40),
        }
    }

    /// The multiplicative factor applied to overtime hours.
    pub fn overtime_factor(&self) -> Decimal {
        factor(self.overtime_percentage)
    }

    /// The multiplicative factor applied to Sunday/holiday hours.
    pub fn holiday_factor(&self) -> Decimal {
        factor(self.holiday_percentage)
    }

    /// The multiplicative factor applied to night-shift hours.
    pub fn night_shift_factor(&self) -> Decimal {
        factor(self.night_shift_percentage)
    }
}

impl Default for MultiplierConfig {
    fn default() -> Self {
        MultiplierConfig::system_default()
    }
}

/// Converts an additional percentage into a multiplicative factor.
fn factor(percentage: Decimal) -> Decimal {
    Decimal::ONE + percentage / Decimal::ONE_HUNDRED
}

/// Returns the company's configuration when present, else the system
/// default.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{resolve_config, MultiplierConfig};
///
/// let resolved = resolve_config(None);
/// assert_eq!(resolved, MultiplierConfig::system_default());
/// ```
pub fn resolve_config(company: Option<&MultiplierConfig>) -> MultiplierConfig {
    company.copied().unwrap_or_else(MultiplierConfig::system_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_system_default_values() {
        let config = MultiplierConfig::system_default();
        assert_eq!(config.overtime_percentage, dec("50"));
        assert_eq!(config.holiday_percentage, dec("100"));
        assert_eq!(config.night_shift_percentage, dec("20"));
        assert_eq!(config.advance_percentage, dec("40"));
    }

    #[test]
    fn test_factors_from_default() {
        let config = MultiplierConfig::system_default();
        assert_eq!(config.overtime_factor(), dec("1.5"));
        assert_eq!(config.holiday_factor(), dec("2"));
        assert_eq!(config.night_shift_factor(), dec("1.2"));
    }

    #[test]
    fn test_zero_percentage_yields_factor_one() {
        let config = MultiplierConfig {
            overtime_percentage: Decimal::ZERO,
            holiday_percentage: Decimal::ZERO,
            night_shift_percentage: Decimal::ZERO,
            advance_percentage: Decimal::ZERO,
        };
        assert_eq!(config.overtime_factor(), Decimal::ONE);
        assert_eq!(config.holiday_factor(), Decimal::ONE);
        assert_eq!(config.night_shift_factor(), Decimal::ONE);
    }

    #[test]
    fn test_resolve_prefers_company_config() {
        let company = MultiplierConfig {
            overtime_percentage: dec("60"),
            holiday_percentage: dec("100"),
            night_shift_percentage: dec("30"),
            advance_percentage: dec("50"),
        };
        let resolved = resolve_config(Some(&company));
        assert_eq!(resolved, company);
    }

    #[test]
    fn test_resolve_falls_back_to_system_default() {
        assert_eq!(resolve_config(None), MultiplierConfig::system_default());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = MultiplierConfig::system_default();
        let json = serde_json::to_string(&config).unwrap();
        let back: MultiplierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
