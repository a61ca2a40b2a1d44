//! Future value projection

mod future_value;

pub use future_value::{
    project, format_currency, FutureValueInputs, FutureValueDisplay, TimeUnit,
    DEFAULT_PRINCIPAL, DEFAULT_TIME_VALUE, INVALID_INPUT_TEXT,
};
