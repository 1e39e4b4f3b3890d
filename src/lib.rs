//! Restaurant Valuation - discounted cash flow engine for franchise restaurants
//!
//! This library provides:
//! - Year-by-year sales, cost and cash flow projections
//! - Discounted free cash flow valuation
//! - Parallel portfolio valuation across many restaurants
//! - Discount/growth sensitivity grids

pub mod error;
pub mod assumptions;
pub mod projection;
pub mod portfolio;
pub mod sensitivity;
pub mod format;

// Re-export commonly used types
pub use error::{ValuationError, LoadError};
pub use assumptions::ValuationAssumptions;
pub use projection::{
    calculate_restaurant_valuation, ValuationEngine, ProjectionConfig, ValidationMode,
    FixedCostIndexing, YearlyProjection, ValuationResult, ValuationSummary,
};
pub use portfolio::{RestaurantInput, PortfolioValuation, value_portfolio};
pub use sensitivity::{SensitivityGrid, sensitivity_grid};
pub use format::format_currency;
