//! Calculator session: applies edit events to the rate matrix and projection inputs
//!
//! Holds the most recent edit and re-runs the pure conversions on every event.
//!
//! # Example
//! ```ignore
//! let mut calc = Calculator::new();
//! let view = calc.apply(EditEvent::Rate {
//!     representation: "nominal_Monthly".parse()?,
//!     raw: "6".into(),
//! });
//! println!("{}", view.future_value);
//! ```

use crate::config::CalculatorConfig;
use crate::error::{ConfigError, ParseEventError};
use crate::projection::{project, FutureValueDisplay, FutureValueInputs, TimeUnit};
use crate::rates::{recompute_matrix, CompoundingPeriod, RateKind, RateMatrix, RateRepresentation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single user edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditEvent {
    /// A rate field was edited; it becomes the active representation
    Rate {
        representation: RateRepresentation,
        raw: String,
    },
    Principal(String),
    TimeValue(String),
    TimeUnit(TimeUnit),
}

impl EditEvent {
    /// Parse `<field>=<value>`, where field is a representation id,
    /// `principal`, `time` or `unit`
    pub fn parse_line(line: &str) -> Result<Self, ParseEventError> {
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| ParseEventError::Malformed(line.to_string()))?;
        let key = key.trim();
        let value = value.trim().to_string();

        if key.is_empty() {
            return Err(ParseEventError::Malformed(line.to_string()));
        }

        match key.to_ascii_lowercase().as_str() {
            "principal" => Ok(EditEvent::Principal(value)),
            "time" | "time_value" => Ok(EditEvent::TimeValue(value)),
            "unit" | "time_unit" => {
                // Infallible: unknown units are years
                let unit = value.parse::<TimeUnit>().unwrap_or_default();
                Ok(EditEvent::TimeUnit(unit))
            }
            _ => {
                let representation = key.parse().map_err(|e| match e {
                    ParseEventError::UnknownRepresentation(_) => {
                        ParseEventError::UnknownField(key.to_string())
                    }
                    other => other,
                })?;
                Ok(EditEvent::Rate { representation, raw: value })
            }
        }
    }
}

impl FromStr for EditEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s)
    }
}

/// Everything the UI displays after an edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorView {
    pub matrix: RateMatrix,
    pub inputs: FutureValueInputs,
    pub future_value: FutureValueDisplay,
}

/// Interactive calculator state
#[derive(Debug, Clone)]
pub struct Calculator {
    config: CalculatorConfig,
    active: RateRepresentation,
    active_raw: String,
    matrix: RateMatrix,
    inputs: FutureValueInputs,
}

impl Calculator {
    /// Session seeded with the default startup values (5% nominal annual, $1,000, 1 year)
    pub fn new() -> Self {
        let active = RateRepresentation::new(RateKind::Nominal, CompoundingPeriod::Annual);
        Self::seeded(CalculatorConfig::default(), active)
    }

    /// Session seeded from a configuration
    pub fn with_config(config: CalculatorConfig) -> Result<Self, ConfigError> {
        let active = config.initial_representation()?;
        Ok(Self::seeded(config, active))
    }

    fn seeded(config: CalculatorConfig, active: RateRepresentation) -> Self {
        let inputs = FutureValueInputs::new(
            config.default_principal.to_string(),
            config.default_time_value.to_string(),
            config.default_time_unit,
        );
        let active_raw = config.initial_rate_value.clone();
        let matrix = recompute_matrix(active, &active_raw);

        Self {
            config,
            active,
            active_raw,
            matrix,
            inputs,
        }
    }

    /// Apply an edit and return the refreshed view
    pub fn apply(&mut self, event: EditEvent) -> CalculatorView {
        match event {
            EditEvent::Rate { representation, raw } => {
                self.active = representation;
                self.active_raw = raw;
                self.matrix = recompute_matrix(self.active, &self.active_raw);
            }
            EditEvent::Principal(raw) => self.inputs.principal = raw,
            EditEvent::TimeValue(raw) => self.inputs.time_value = raw,
            EditEvent::TimeUnit(unit) => self.inputs.time_unit = unit,
        }
        self.view()
    }

    /// Apply several edits in order, returning the final view
    pub fn apply_all<I>(&mut self, events: I) -> CalculatorView
    where
        I: IntoIterator<Item = EditEvent>,
    {
        for event in events {
            self.apply(event);
        }
        self.view()
    }

    /// Current view
    pub fn view(&self) -> CalculatorView {
        CalculatorView {
            matrix: self.matrix.clone(),
            inputs: self.inputs.clone(),
            future_value: self.future_value(),
        }
    }

    /// Project the current inputs at the active EAR (0 if no valid rate)
    pub fn future_value(&self) -> FutureValueDisplay {
        let ear = self.matrix.ear.unwrap_or(0.0);
        self.inputs
            .parse(self.config.default_principal, self.config.default_time_value)
            .and_then(|(principal, time_value)| {
                project(principal, time_value, self.inputs.time_unit, ear)
            })
            .into()
    }

    pub fn active(&self) -> RateRepresentation {
        self.active
    }

    pub fn matrix(&self) -> &RateMatrix {
        &self.matrix
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
