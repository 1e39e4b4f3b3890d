//! Projection engine for single restaurant valuations

mod engine;
mod cashflows;
mod summary;

pub use engine::{
    calculate_restaurant_valuation, ValuationEngine, ProjectionConfig, ValidationMode,
    FixedCostIndexing, validate,
};
pub use cashflows::{YearlyProjection, ValuationResult, write_projection_csv};
pub use summary::ValuationSummary;

// ============================================================================
// Observed Horizon
// ============================================================================
// Forms cap the remaining franchise term at 20 years. The engine accepts any
// horizon; the constant is used by callers that need a sensible upper bound.

/// Longest projection horizon offered by the valuation forms
pub const MAX_FORM_YEARS: u32 = 20;

/// Longest horizon the strict engine accepts
pub const MAX_PROJECTION_YEARS: u32 = 100;
