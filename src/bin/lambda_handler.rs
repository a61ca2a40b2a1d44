//! AWS Lambda handler for the rate calculator
//!
//! Accepts a JSON edit (one rate plus optional projection inputs) and returns
//! the full rate matrix with the projected future value.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use rate_converter::{
    Calculator, CalculatorView, EditEvent, FutureValueDisplay, RateRepresentation, TimeUnit,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input for one calculation
#[derive(Debug, Default, Deserialize)]
pub struct CalculationRequest {
    /// Representation id being entered, e.g. "nominal_Monthly" (default: nominal_Annual)
    #[serde(default)]
    pub representation: Option<String>,

    /// Rate in percent as typed (default: the startup rate)
    #[serde(default)]
    pub value: Option<String>,

    /// Principal (blank or missing: 1000)
    #[serde(default)]
    pub principal: Option<String>,

    /// Horizon length (blank or missing: 1)
    #[serde(default)]
    pub time_value: Option<String>,

    /// "days", "months" or "years" (default: years)
    #[serde(default)]
    pub time_unit: Option<String>,
}

/// Output for one calculation
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub active: String,
    pub ear_pct: Option<f64>,
    /// Representation id -> displayed value (null when empty)
    pub rates: BTreeMap<String, Option<String>>,
    pub future_value: Option<f64>,
    pub future_value_text: String,
}

impl From<CalculatorView> for CalculationResponse {
    fn from(view: CalculatorView) -> Self {
        let rates = view
            .matrix
            .cells()
            .map(|cell| (cell.representation.id(), cell.value))
            .collect();

        Self {
            active: view.matrix.active.id(),
            ear_pct: view.matrix.ear.map(|e| e * 100.0),
            rates,
            future_value: view.future_value.amount(),
            future_value_text: view.future_value.to_string(),
        }
    }
}

/// Turn a request into edit events; an unknown representation id is rejected
fn request_events(request: CalculationRequest, calc: &Calculator) -> Result<Vec<EditEvent>, String> {
    let mut events = Vec::new();

    if let Some(raw) = request.principal {
        events.push(EditEvent::Principal(raw));
    }
    if let Some(raw) = request.time_value {
        events.push(EditEvent::TimeValue(raw));
    }
    if let Some(raw) = request.time_unit {
        events.push(EditEvent::TimeUnit(raw.parse::<TimeUnit>().unwrap_or_default()));
    }

    if request.representation.is_some() || request.value.is_some() {
        let representation = match request.representation {
            Some(id) => id.parse::<RateRepresentation>().map_err(|e| e.to_string())?,
            None => calc.active(),
        };
        let raw = request.value.unwrap_or_default();
        events.push(EditEvent::Rate { representation, raw });
    }

    Ok(events)
}

fn calculate(request: CalculationRequest) -> Result<CalculationResponse, String> {
    let mut calc = Calculator::new();
    let events = request_events(request, &calc)?;
    let view = calc.apply_all(events);

    if view.future_value == FutureValueDisplay::InvalidInput {
        log::debug!("projection inputs rejected: {:?}", view.inputs);
    }

    Ok(view.into())
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message }).to_string();
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body))?)
}

fn json_response(body: &CalculationResponse) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: CalculationRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    match calculate(request) {
        Ok(response) => json_response(&response),
        Err(message) => error_response(400, &message),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
