//! Valuation sensitivity to discount and growth rates

use crate::assumptions::ValuationAssumptions;
use crate::error::ValuationError;
use crate::projection::ValuationEngine;
use rayon::prelude::*;
use serde::Serialize;

/// Valuations over a discount-rate × growth-rate grid
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityGrid {
    pub discount_rates: Vec<f64>,
    pub growth_rates: Vec<f64>,
    /// `valuations[i][j]` is the valuation at `discount_rates[i]`, `growth_rates[j]`
    pub valuations: Vec<Vec<f64>>,
}

impl SensitivityGrid {
    pub fn get(&self, discount_idx: usize, growth_idx: usize) -> Option<f64> {
        self.valuations.get(discount_idx)?.get(growth_idx).copied()
    }
}

/// Re-value `base` at every (discount, growth) pair
///
/// Rows are computed in parallel. The first error in row-major order is
/// returned.
pub fn sensitivity_grid(
    engine: &ValuationEngine,
    base: &ValuationAssumptions,
    discount_rates: &[f64],
    growth_rates: &[f64],
) -> Result<SensitivityGrid, ValuationError> {
    let valuations = discount_rates
        .par_iter()
        .map(|&discount_rate| {
            growth_rates
                .iter()
                .map(|&sales_growth_rate| {
                    let scenario = ValuationAssumptions {
                        discount_rate,
                        sales_growth_rate,
                        ..base.clone()
                    };
                    engine.value(&scenario).map(|r| r.final_valuation)
                })
                .collect::<Result<Vec<f64>, ValuationError>>()
        })
        .collect::<Vec<Result<Vec<f64>, ValuationError>>>()
        .into_iter()
        .collect::<Result<Vec<Vec<f64>>, ValuationError>>()?;

    Ok(SensitivityGrid {
        discount_rates: discount_rates.to_vec(),
        growth_rates: growth_rates.to_vec(),
        valuations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::calculate_restaurant_valuation;

    #[test]
    fn test_grid_shape_and_values() {
        let base = ValuationAssumptions::default();
        let discounts = [10.0, 15.0, 21.0];
        let growths = [0.0, 3.0];
        let grid = sensitivity_grid(&ValuationEngine::default(), &base, &discounts, &growths)
            .expect("grid should compute");

        assert_eq!(grid.valuations.len(), 3);
        assert!(grid.valuations.iter().all(|row| row.len() == 2));

        // Fixture point reproduces the plain valuation
        let plain = calculate_restaurant_valuation(&base).final_valuation;
        assert_eq!(grid.get(2, 1), Some(plain));
        assert_eq!(grid.get(3, 0), None);
    }

    #[test]
    fn test_grid_monotonic() {
        let base = ValuationAssumptions::default();
        let grid = sensitivity_grid(
            &ValuationEngine::default(),
            &base,
            &[8.0, 12.0, 16.0],
            &[0.0, 2.0, 4.0],
        )
        .unwrap();

        // Higher discount lowers value, higher growth raises it
        for j in 0..3 {
            assert!(grid.valuations[0][j] > grid.valuations[1][j]);
            assert!(grid.valuations[1][j] > grid.valuations[2][j]);
        }
        for row in &grid.valuations {
            assert!(row[0] < row[1] && row[1] < row[2]);
        }
    }

    #[test]
    fn test_grid_propagates_validation_error() {
        let base = ValuationAssumptions::default();
        let err = sensitivity_grid(&ValuationEngine::default(), &base, &[10.0, -100.0], &[3.0])
            .unwrap_err();
        assert_eq!(err, ValuationError::SingularDiscount(-100.0));
    }
}
