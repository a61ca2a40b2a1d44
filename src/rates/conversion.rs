//! Conversion between a quoted rate and the Effective Annual Rate (EAR)
//!
//! Every representation is converted through EAR:
//! - Effective period rate `r`: EAR = (1 + r)^m - 1
//! - Nominal rate `j`:          EAR = (1 + j/m)^m - 1
//!
//! Rates are quoted in percent; EAR is a decimal.

use super::representation::{RateKind, RateRepresentation};
use crate::error::{RateError, RateResult};

/// Decimal places used when displaying a derived rate
pub const RATE_DISPLAY_DECIMALS: usize = 6;

/// Parse a raw percent string. Empty, non-numeric, non-finite or negative input is rejected.
pub fn parse_percent(field: &str, raw: &str) -> RateResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| RateError::invalid(field, raw))?;

    if !value.is_finite() || value < 0.0 {
        return Err(RateError::invalid(field, raw));
    }
    Ok(value)
}

/// Convert a percent value in the given representation to EAR
pub fn to_ear(representation: RateRepresentation, percent_value: f64) -> RateResult<f64> {
    if !percent_value.is_finite() || percent_value < 0.0 {
        return Err(RateError::invalid(representation.id(), percent_value));
    }

    let rate = percent_value / 100.0;
    let m = representation.periods_per_year() as f64;

    let period_rate = match representation.kind {
        RateKind::EffectivePeriod => rate,
        RateKind::Nominal => rate / m,
    };

    // (1 + r)^m - 1 without cancellation for small r
    Ok((period_rate.ln_1p() * m).exp_m1())
}

/// Parse a raw field value and convert it to EAR
pub fn ear_from_raw(representation: RateRepresentation, raw: &str) -> RateResult<f64> {
    let percent = parse_percent(&representation.id(), raw)?;
    to_ear(representation, percent)
}

/// Convert EAR to a percent value in the target representation (full precision)
pub fn from_ear(ear: f64, target: RateRepresentation) -> f64 {
    let m = target.periods_per_year() as f64;
    let period_rate = (ear.ln_1p() / m).exp_m1();

    match target.kind {
        RateKind::EffectivePeriod => period_rate * 100.0,
        RateKind::Nominal => period_rate * m * 100.0,
    }
}

/// Render a percent value for display
pub fn format_rate(percent: f64) -> String {
    format!("{:.*}", RATE_DISPLAY_DECIMALS, percent)
}
