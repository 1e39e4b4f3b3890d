//! Core valuation engine
//!
//! Single forward pass over the projection years:
//! 1. Compound sales from the year-0 base
//! 2. Percentage-of-sales costs (PAC, rent, service fees) and SOI
//! 3. Fixed charges to reach cash flow, depreciation added back for FCF
//! 4. Discount FCF to present value and accumulate

use super::cashflows::{ValuationResult, YearlyProjection};
use super::MAX_PROJECTION_YEARS;
use crate::assumptions::ValuationAssumptions;
use crate::error::ValuationError;
use log::debug;
use serde::{Deserialize, Serialize};

/// How strictly the engine treats degenerate assumptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Fail fast on an empty or oversized horizon, a singular discount rate
    /// or non-finite input
    #[default]
    Strict,
    /// Compute whatever the arithmetic yields, never fail
    Lenient,
}

/// Treatment of the five fixed annual charges over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FixedCostIndexing {
    /// Same nominal amount every year; `inflation_rate` is carried but unused
    #[default]
    None,
    /// Year n charges grow by (1 + inflation)^(n-1)
    Inflation,
}

/// Configuration for a valuation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionConfig {
    #[serde(default)]
    pub validation: ValidationMode,

    #[serde(default)]
    pub fixed_cost_indexing: FixedCostIndexing,
}

/// Valuation engine
///
/// Stateless apart from its configuration; one engine can be shared across
/// threads and reused for any number of restaurants.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    config: ProjectionConfig,
}

impl ValuationEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Engine reproducing `calculate_restaurant_valuation` exactly
    pub fn lenient() -> Self {
        Self::new(ProjectionConfig {
            validation: ValidationMode::Lenient,
            fixed_cost_indexing: FixedCostIndexing::None,
        })
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Value one restaurant
    ///
    /// In strict mode all checks run before any computation, so an error
    /// never comes with a partial table.
    pub fn value(&self, assumptions: &ValuationAssumptions) -> Result<ValuationResult, ValuationError> {
        if self.config.validation == ValidationMode::Strict {
            validate(assumptions)?;
        }

        let result = project(assumptions, self.config.fixed_cost_indexing);
        debug!(
            "Valued {} years at {:.2} (discount {}%, growth {}%)",
            result.years(),
            result.final_valuation,
            assumptions.discount_rate,
            assumptions.sales_growth_rate
        );
        Ok(result)
    }
}

/// Value one restaurant without validation
///
/// Total over finite input: a zero horizon yields an empty table and a zero
/// valuation, a discount rate of -100% yields infinite or NaN discounted
/// figures. No logging, no side effects.
pub fn calculate_restaurant_valuation(assumptions: &ValuationAssumptions) -> ValuationResult {
    project(assumptions, FixedCostIndexing::None)
}

/// Strict-mode preconditions
pub fn validate(assumptions: &ValuationAssumptions) -> Result<(), ValuationError> {
    for (field, value) in assumptions.numeric_fields() {
        if !value.is_finite() {
            return Err(ValuationError::NonFinite { field });
        }
    }

    if assumptions.years_remaining == 0 {
        return Err(ValuationError::InvalidPeriod(assumptions.years_remaining));
    }

    if assumptions.years_remaining > MAX_PROJECTION_YEARS {
        return Err(ValuationError::HorizonTooLong {
            years: assumptions.years_remaining,
            max: MAX_PROJECTION_YEARS,
        });
    }

    if 1.0 + assumptions.discount_rate / 100.0 <= 0.0 {
        return Err(ValuationError::SingularDiscount(assumptions.discount_rate));
    }

    Ok(())
}

fn project(a: &ValuationAssumptions, indexing: FixedCostIndexing) -> ValuationResult {
    let growth_factor = 1.0 + a.sales_growth_rate / 100.0;
    let discount_factor = 1.0 + a.discount_rate / 100.0;
    let inflation_factor = 1.0 + a.inflation_rate / 100.0;

    let pac_rate = a.pac_percentage / 100.0;
    let rent_rate = a.rent_percentage / 100.0;
    let service_fee_rate = a.service_fees_percentage / 100.0;

    // Lenient horizons may exceed the limit; the table grows past it on demand
    let capacity = a.years_remaining.min(MAX_PROJECTION_YEARS) as usize;
    let mut result = ValuationResult::with_capacity(capacity);

    for year in 1..=a.years_remaining {
        let n = periods(year);
        let sales = a.initial_sales * growth_factor.powi(n);

        let pac = sales * pac_rate;
        let rent = sales * rent_rate;
        let service_fees = sales * service_fee_rate;
        let soi = sales - pac - rent - service_fees;

        let index = match indexing {
            FixedCostIndexing::None => 1.0,
            FixedCostIndexing::Inflation => inflation_factor.powi(n - 1),
        };
        let depreciation = a.depreciation * index;

        let cashflow = soi
            - depreciation
            - a.interest * index
            - a.loan_payment * index
            - a.rent_index * index
            - a.miscellaneous * index;
        let free_cash_flow = cashflow + depreciation;
        let discounted_fcf = free_cash_flow / discount_factor.powi(n);

        result.push(YearlyProjection {
            year,
            sales,
            pac,
            rent,
            service_fees,
            soi,
            cashflow,
            free_cash_flow,
            discounted_fcf,
        });
    }

    result
}

/// Exponent for year `year`, saturating beyond `i32::MAX`
fn periods(year: u32) -> i32 {
    i32::try_from(year).unwrap_or(i32::MAX)
}
