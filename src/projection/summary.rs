//! Summary figures derived from a completed valuation

use super::cashflows::ValuationResult;
use serde::Serialize;

/// Headline figures for display next to the projection table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSummary {
    pub years: usize,
    pub total_sales: f64,
    pub total_soi: f64,
    /// Total SOI / total sales (0 when there are no sales)
    pub average_soi_margin: f64,
    pub total_free_cash_flow: f64,
    pub final_year_sales: Option<f64>,
    /// First year whose discounted FCF is negative
    pub first_negative_year: Option<u32>,
    pub final_valuation: f64,
}

impl ValuationSummary {
    pub fn from_result(result: &ValuationResult) -> Self {
        let rows = &result.yearly_projections;
        let total_sales: f64 = rows.iter().map(|r| r.sales).sum();
        let total_soi: f64 = rows.iter().map(|r| r.soi).sum();

        let average_soi_margin = if total_sales != 0.0 {
            total_soi / total_sales
        } else {
            0.0
        };

        Self {
            years: rows.len(),
            total_sales,
            total_soi,
            average_soi_margin,
            total_free_cash_flow: result.projected_cash_flows.iter().sum(),
            final_year_sales: result.last_year().map(|r| r.sales),
            first_negative_year: rows.iter().find(|r| r.discounted_fcf < 0.0).map(|r| r.year),
            final_valuation: result.final_valuation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::ValuationAssumptions;
    use crate::projection::calculate_restaurant_valuation;
    use approx::assert_relative_eq;

    #[test]
    fn test_margin_equals_percentage_complement() {
        let result = calculate_restaurant_valuation(&ValuationAssumptions::default());
        let summary = ValuationSummary::from_result(&result);

        assert_eq!(summary.years, 20);
        // 100% - 32% - 11.47% - 5%
        assert_relative_eq!(summary.average_soi_margin, 0.5153, max_relative = 1e-9);
        assert_eq!(summary.first_negative_year, None);
        assert_eq!(summary.final_valuation, result.final_valuation);
        assert_eq!(summary.final_year_sales, Some(result.yearly_projections[19].sales));
    }

    #[test]
    fn test_declining_restaurant_turns_negative() {
        let a = ValuationAssumptions {
            sales_growth_rate: -15.0,
            ..Default::default()
        };
        let summary = ValuationSummary::from_result(&calculate_restaurant_valuation(&a));
        let year = summary.first_negative_year.expect("should turn negative");
        assert!(year > 1);
    }

    #[test]
    fn test_empty_result() {
        let a = ValuationAssumptions { years_remaining: 0, ..Default::default() };
        let summary = ValuationSummary::from_result(&calculate_restaurant_valuation(&a));
        assert_eq!(summary.years, 0);
        assert_eq!(summary.average_soi_margin, 0.0);
        assert_eq!(summary.final_year_sales, None);
        assert_eq!(summary.final_valuation, 0.0);
    }
}
