//! Rate representations and the EAR conversion matrix

mod representation;
mod conversion;
mod matrix;

pub use representation::{CompoundingPeriod, RateKind, RateRepresentation};
pub use conversion::{
    parse_percent, to_ear, ear_from_raw, from_ear, format_rate, RATE_DISPLAY_DECIMALS,
};
pub use matrix::{RateMatrix, RateCell, recompute_matrix};
