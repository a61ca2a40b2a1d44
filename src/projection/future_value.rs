//! Future value projection from an Effective Annual Rate

use crate::error::{RateError, RateResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default principal when the field is left blank
pub const DEFAULT_PRINCIPAL: f64 = 1000.0;

/// Default horizon when the field is left blank
pub const DEFAULT_TIME_VALUE: f64 = 1.0;

/// Sentinel shown when the projection inputs are unusable
pub const INVALID_INPUT_TEXT: &str = "Invalid Input";

/// Unit of the projection horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Days,
    Months,
    #[default]
    Years,
}

impl TimeUnit {
    /// Convert a horizon in this unit to years
    pub fn to_years(&self, time_value: f64) -> f64 {
        match self {
            TimeUnit::Days => time_value / 365.0,
            TimeUnit::Months => time_value / 12.0,
            TimeUnit::Years => time_value,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = std::convert::Infallible;

    /// Unrecognised units fall back to years
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "days" | "day" | "d" => TimeUnit::Days,
            "months" | "month" | "m" => TimeUnit::Months,
            _ => TimeUnit::Years,
        })
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Days => "days",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        };
        write!(f, "{name}")
    }
}

/// Raw projection inputs as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureValueInputs {
    pub principal: String,
    pub time_value: String,
    pub time_unit: TimeUnit,
}

impl FutureValueInputs {
    pub fn new(principal: impl Into<String>, time_value: impl Into<String>, time_unit: TimeUnit) -> Self {
        Self {
            principal: principal.into(),
            time_value: time_value.into(),
            time_unit,
        }
    }

    /// Parse the raw fields, substituting defaults for blank ones
    pub fn parse(&self, default_principal: f64, default_time_value: f64) -> RateResult<(f64, f64)> {
        let principal = parse_or_default("principal", &self.principal, default_principal)?;
        let time_value = parse_or_default("time_value", &self.time_value, default_time_value)?;
        Ok((principal, time_value))
    }
}

impl Default for FutureValueInputs {
    fn default() -> Self {
        Self::new(DEFAULT_PRINCIPAL.to_string(), DEFAULT_TIME_VALUE.to_string(), TimeUnit::Years)
    }
}

fn parse_or_default(field: &str, raw: &str, default: f64) -> RateResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed.parse().map_err(|_| RateError::invalid(field, raw))
}

/// Project `principal` forward by `time_value` units at `ear`, rounded to cents
///
/// # Arguments
/// * `principal` - Starting amount, finite and >= 0
/// * `time_value` - Horizon length, finite and >= 0
/// * `time_unit` - Unit of `time_value`
/// * `ear` - Effective annual rate as a decimal (0 when no rate is active)
pub fn project(principal: f64, time_value: f64, time_unit: TimeUnit, ear: f64) -> RateResult<f64> {
    if !principal.is_finite() || principal < 0.0 {
        return Err(RateError::invalid("principal", principal));
    }
    if !time_value.is_finite() || time_value < 0.0 {
        return Err(RateError::invalid("time_value", time_value));
    }

    let years = time_unit.to_years(time_value);
    let amount = principal * (1.0 + ear).powf(years);

    Ok(round_to_cents(amount))
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format an amount as `$1,234.56`; non-finite amounts are shown as-is
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// What the future value field shows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "amount", rename_all = "snake_case")]
pub enum FutureValueDisplay {
    Amount(f64),
    InvalidInput,
}

impl FutureValueDisplay {
    pub fn amount(&self) -> Option<f64> {
        match self {
            FutureValueDisplay::Amount(a) => Some(*a),
            FutureValueDisplay::InvalidInput => None,
        }
    }
}

impl From<RateResult<f64>> for FutureValueDisplay {
    fn from(result: RateResult<f64>) -> Self {
        match result {
            Ok(amount) => FutureValueDisplay::Amount(amount),
            Err(e) => {
                log::debug!("future value not computed: {}", e);
                FutureValueDisplay::InvalidInput
            }
        }
    }
}

impl fmt::Display for FutureValueDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FutureValueDisplay::Amount(a) => write!(f, "{}", format_currency(*a)),
            FutureValueDisplay::InvalidInput => write!(f, "{INVALID_INPUT_TEXT}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_one_year() {
        let fv = project(1000.0, 1.0, TimeUnit::Years, 0.05).unwrap();
        assert_abs_diff_eq!(fv, 1050.0, epsilon = 1e-9);
    }

    #[test]
    fn test_twelve_months_is_one_year() {
        let fv = project(1000.0, 12.0, TimeUnit::Months, 0.05).unwrap();
        assert_abs_diff_eq!(fv, 1050.0, epsilon = 1e-9);
    }

    #[test]
    fn test_days() {
        let fv = project(1000.0, 365.0, TimeUnit::Days, 0.05).unwrap();
        assert_abs_diff_eq!(fv, 1050.0, epsilon = 1e-9);

        // 1000 * 1.05^(100/365) = 1013.46
        let fv = project(1000.0, 100.0, TimeUnit::Days, 0.05).unwrap();
        assert_abs_diff_eq!(fv, 1013.46, epsilon = 1e-9);
    }

    #[test]
    fn test_rounds_to_cents() {
        // 1000 * 1.05^1.5 = 1075.9297...
        let fv = project(1000.0, 18.0, TimeUnit::Months, 0.05).unwrap();
        assert_abs_diff_eq!(fv, 1075.93, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_ear_returns_principal() {
        let fv = project(2500.0, 7.0, TimeUnit::Years, 0.0).unwrap();
        assert_abs_diff_eq!(fv, 2500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(project(-100.0, 1.0, TimeUnit::Years, 0.05).is_err());
        assert!(project(100.0, -1.0, TimeUnit::Years, 0.05).is_err());
        assert!(project(f64::NAN, 1.0, TimeUnit::Years, 0.05).is_err());
        assert!(project(100.0, f64::INFINITY, TimeUnit::Years, 0.05).is_err());
    }

    #[test]
    fn test_time_unit_parsing() {
        assert_eq!("days".parse::<TimeUnit>().unwrap(), TimeUnit::Days);
        assert_eq!("Months".parse::<TimeUnit>().unwrap(), TimeUnit::Months);
        assert_eq!("years".parse::<TimeUnit>().unwrap(), TimeUnit::Years);
        assert_eq!("fortnights".parse::<TimeUnit>().unwrap(), TimeUnit::Years);
    }

    #[test]
    fn test_inputs_use_defaults_when_blank() {
        let inputs = FutureValueInputs::new("", " ", TimeUnit::Years);
        assert_eq!(inputs.parse(DEFAULT_PRINCIPAL, DEFAULT_TIME_VALUE).unwrap(), (1000.0, 1.0));
        assert_eq!(inputs.parse(2500.0, 3.0).unwrap(), (2500.0, 3.0));
    }

    #[test]
    fn test_inputs_reject_garbage() {
        let inputs = FutureValueInputs::new("lots", "1", TimeUnit::Years);
        assert!(inputs.parse(DEFAULT_PRINCIPAL, DEFAULT_TIME_VALUE).is_err());

        // Parses, but a negative principal cannot be projected
        let inputs = FutureValueInputs::new("-5", "1", TimeUnit::Years);
        let (principal, time_value) = inputs.parse(DEFAULT_PRINCIPAL, DEFAULT_TIME_VALUE).unwrap();
        assert!(project(principal, time_value, inputs.time_unit, 0.05).is_err());
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1050.0), "$1,050.00");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(100.0), "$100.00");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::INFINITY), "inf");
        assert_eq!(format_currency(f64::NAN), "NaN");

        // An unbounded rate can overflow the projection
        let fv = project(1000.0, 1000.0, TimeUnit::Years, 1e300).unwrap();
        assert_eq!(FutureValueDisplay::Amount(fv).to_string(), "inf");
    }

    #[test]
    fn test_display_sentinel() {
        assert_eq!(FutureValueDisplay::InvalidInput.to_string(), "Invalid Input");
        assert_eq!(FutureValueDisplay::Amount(1050.0).to_string(), "$1,050.00");
        let display: FutureValueDisplay = project(-1.0, 1.0, TimeUnit::Years, 0.0).into();
        assert_eq!(display, FutureValueDisplay::InvalidInput);
    }
}
