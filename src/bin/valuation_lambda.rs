//! HTTP function wrapping the valuation engine
//!
//! POST a JSON assumptions body (camelCase, missing fields default) and get
//! back the valuation result. Query parameters `lenient=true` and
//! `indexFixedCosts=true` select the engine configuration. The horizon limit
//! applies in both modes.

use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use log::{info, warn};
use restaurant_valuation::{
    projection::MAX_PROJECTION_YEARS, FixedCostIndexing, ProjectionConfig, ValidationMode,
    ValuationAssumptions, ValuationEngine, ValuationError,
};
use serde_json::{json, Value};

fn json_response(status: u16, body: Value) -> Result<Response<Body>, Error> {
    let resp = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .map_err(Box::new)?;
    Ok(resp)
}

fn flag(event: &Request, name: &str) -> bool {
    event
        .query_string_parameters_ref()
        .and_then(|params| params.first(name))
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn config_for(event: &Request) -> ProjectionConfig {
    ProjectionConfig {
        validation: if flag(event, "lenient") {
            ValidationMode::Lenient
        } else {
            ValidationMode::Strict
        },
        fixed_cost_indexing: if flag(event, "indexFixedCosts") {
            FixedCostIndexing::Inflation
        } else {
            FixedCostIndexing::None
        },
    }
}

/// Status code and JSON body for one request body
fn evaluate(body: &[u8], config: ProjectionConfig) -> (u16, Value) {
    let assumptions: ValuationAssumptions = if body.is_empty() {
        ValuationAssumptions::default()
    } else {
        match serde_json::from_slice(body) {
            Ok(a) => a,
            Err(e) => {
                warn!("Rejected assumptions body: {}", e);
                return (400, json!({ "error": e.to_string() }));
            }
        }
    };

    // Lenient requests still may not ask for an unbounded table
    if assumptions.years_remaining > MAX_PROJECTION_YEARS {
        let e = ValuationError::HorizonTooLong {
            years: assumptions.years_remaining,
            max: MAX_PROJECTION_YEARS,
        };
        warn!("Valuation refused: {}", e);
        return (400, json!({ "error": e.to_string() }));
    }

    match ValuationEngine::new(config).value(&assumptions) {
        Ok(result) => {
            info!("Valued {} years at {:.2}", result.years(), result.final_valuation);
            match serde_json::to_value(&result) {
                Ok(v) => (200, v),
                Err(e) => (500, json!({ "error": e.to_string() })),
            }
        }
        Err(e) => {
            warn!("Valuation refused: {}", e);
            (400, json!({ "error": e.to_string() }))
        }
    }
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let config = config_for(&event);
    let (status, body) = evaluate(event.body().as_ref(), config);
    json_response(status, body)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
