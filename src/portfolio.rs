//! Parallel valuation across a portfolio of restaurants

use crate::assumptions::ValuationAssumptions;
use crate::projection::{ValuationEngine, ValuationResult};
use chrono::{DateTime, Utc};
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One restaurant to value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantInput {
    pub restaurant_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub assumptions: ValuationAssumptions,
}

/// Successful valuation of one restaurant
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantValuation {
    pub restaurant_id: String,
    pub name: Option<String>,
    pub result: ValuationResult,
}

/// Restaurant whose assumptions the engine refused
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationFailure {
    pub restaurant_id: String,
    pub name: Option<String>,
    pub error: String,
}

/// Batch output, in input order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub valued_at: DateTime<Utc>,
    pub valuations: Vec<RestaurantValuation>,
    pub failures: Vec<ValuationFailure>,
    /// Sum of final valuations over successful restaurants
    pub total_valuation: f64,
}

/// CSV summary row
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioRow<'a> {
    restaurant_id: &'a str,
    name: &'a str,
    years: Option<usize>,
    first_year_sales: Option<f64>,
    final_valuation: Option<f64>,
    error: &'a str,
}

/// Value every restaurant in parallel
///
/// A failed restaurant is recorded in `failures` and does not stop the batch.
pub fn value_portfolio(engine: &ValuationEngine, restaurants: &[RestaurantInput]) -> PortfolioValuation {
    let outcomes: Vec<Result<RestaurantValuation, ValuationFailure>> = restaurants
        .par_iter()
        .map(|r| {
            engine
                .value(&r.assumptions)
                .map(|result| RestaurantValuation {
                    restaurant_id: r.restaurant_id.clone(),
                    name: r.name.clone(),
                    result,
                })
                .map_err(|e| ValuationFailure {
                    restaurant_id: r.restaurant_id.clone(),
                    name: r.name.clone(),
                    error: e.to_string(),
                })
        })
        .collect();

    let mut valuations = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(v) => valuations.push(v),
            Err(f) => {
                warn!("Restaurant {} not valued: {}", f.restaurant_id, f.error);
                failures.push(f);
            }
        }
    }

    let total_valuation = valuations.iter().map(|v| v.result.final_valuation).sum();
    info!(
        "Valued {} restaurants ({} failed), total {:.2}",
        valuations.len(),
        failures.len(),
        total_valuation
    );

    PortfolioValuation {
        valued_at: Utc::now(),
        valuations,
        failures,
        total_valuation,
    }
}

/// Write one summary row per restaurant
///
/// Valued restaurants come first, in input order, followed by refused ones
/// with blank figures and the refusal in the `error` column.
pub fn write_portfolio_csv<W: Write>(portfolio: &PortfolioValuation, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for v in &portfolio.valuations {
        wtr.serialize(PortfolioRow {
            restaurant_id: &v.restaurant_id,
            name: v.name.as_deref().unwrap_or(""),
            years: Some(v.result.years()),
            first_year_sales: v.result.first_year().map(|r| r.sales),
            final_valuation: Some(v.result.final_valuation),
            error: "",
        })?;
    }
    for f in &portfolio.failures {
        wtr.serialize(PortfolioRow {
            restaurant_id: &f.restaurant_id,
            name: f.name.as_deref().unwrap_or(""),
            years: None,
            first_year_sales: None,
            final_valuation: None,
            error: &f.error,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::calculate_restaurant_valuation;
    use approx::assert_relative_eq;

    fn restaurant(id: &str, initial_sales: f64, years_remaining: u32) -> RestaurantInput {
        RestaurantInput {
            restaurant_id: id.to_string(),
            name: Some(format!("Store {}", id)),
            assumptions: ValuationAssumptions {
                initial_sales,
                years_remaining,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_portfolio_preserves_order_and_totals() {
        let restaurants: Vec<_> = (0..50)
            .map(|i| restaurant(&format!("R{:03}", i), 1_000_000.0 + 10_000.0 * i as f64, 10))
            .collect();
        let portfolio = value_portfolio(&ValuationEngine::default(), &restaurants);

        assert_eq!(portfolio.valuations.len(), 50);
        assert!(portfolio.failures.is_empty());
        for (input, v) in restaurants.iter().zip(&portfolio.valuations) {
            assert_eq!(input.restaurant_id, v.restaurant_id);
            assert_eq!(v.result, calculate_restaurant_valuation(&input.assumptions));
        }

        let expected: f64 = restaurants
            .iter()
            .map(|r| calculate_restaurant_valuation(&r.assumptions).final_valuation)
            .sum();
        assert_relative_eq!(portfolio.total_valuation, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_failures_do_not_abort_batch() {
        let restaurants = vec![
            restaurant("A", 2_000_000.0, 5),
            restaurant("B", 2_000_000.0, 0),
            restaurant("C", 2_500_000.0, 5),
        ];
        let portfolio = value_portfolio(&ValuationEngine::default(), &restaurants);

        assert_eq!(portfolio.valuations.len(), 2);
        assert_eq!(portfolio.valuations[0].restaurant_id, "A");
        assert_eq!(portfolio.valuations[1].restaurant_id, "C");
        assert_eq!(portfolio.failures.len(), 1);
        assert_eq!(portfolio.failures[0].restaurant_id, "B");
        assert!(portfolio.failures[0].error.contains("yearsRemaining"));
    }

    #[test]
    fn test_lenient_engine_values_everything() {
        let restaurants = vec![restaurant("A", 2_000_000.0, 0)];
        let portfolio = value_portfolio(&ValuationEngine::lenient(), &restaurants);
        assert_eq!(portfolio.valuations.len(), 1);
        assert_eq!(portfolio.total_valuation, 0.0);
    }

    #[test]
    fn test_portfolio_csv() {
        let restaurants = vec![restaurant("A", 2_000_000.0, 5)];
        let portfolio = value_portfolio(&ValuationEngine::default(), &restaurants);

        let mut buf = Vec::new();
        write_portfolio_csv(&portfolio, &mut buf).expect("Failed to write CSV");
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("restaurantId,name,years,firstYearSales,finalValuation,error")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("A,Store A,5,2060000"));
        assert!(row.ends_with(','));
    }

    #[test]
    fn test_portfolio_csv_includes_refused_restaurants() {
        let restaurants = vec![
            restaurant("A", 2_000_000.0, 5),
            restaurant("B", 2_000_000.0, 0),
        ];
        let portfolio = value_portfolio(&ValuationEngine::default(), &restaurants);

        let mut buf = Vec::new();
        write_portfolio_csv(&portfolio, &mut buf).expect("Failed to write CSV");

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), restaurants.len());

        let refused = &records[1];
        assert_eq!(&refused[0], "B");
        assert_eq!(&refused[1], "Store B");
        assert_eq!(&refused[2], "");
        assert_eq!(&refused[4], "");
        assert!(refused[5].contains("yearsRemaining"));
    }
}
