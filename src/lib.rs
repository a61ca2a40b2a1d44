//! Rate Converter - interest rate equivalence and future value projection
//!
//! This library provides:
//! - Conversion between nominal and effective period rates across daily,
//!   monthly, quarterly and annual compounding, pivoting through the
//!   Effective Annual Rate (EAR)
//! - A rate matrix that derives all eight representations from one entry
//! - Future value projection at an EAR over days, months or years
//! - A calculator session driven by discrete edit events

pub mod error;
pub mod rates;
pub mod projection;
pub mod config;
pub mod session;

// Re-export commonly used types
pub use error::{RateError, RateResult, ConfigError, ParseEventError};
pub use rates::{CompoundingPeriod, RateKind, RateRepresentation, RateMatrix, recompute_matrix, to_ear, from_ear};
pub use projection::{project, FutureValueInputs, FutureValueDisplay, TimeUnit};
pub use config::CalculatorConfig;
pub use session::{Calculator, CalculatorView, EditEvent};
