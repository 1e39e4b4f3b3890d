//! Error types for valuation and assumption loading

use thiserror::Error;

/// Reasons the strict engine refuses a set of assumptions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    /// Projection horizon must be at least one year
    #[error("invalid projection period: yearsRemaining must be a positive integer, got {0}")]
    InvalidPeriod(u32),

    /// Projection horizon beyond the engine limit
    #[error("projection period too long: yearsRemaining is {years}, the limit is {max}")]
    HorizonTooLong { years: u32, max: u32 },

    /// Discount factor (1 + rate/100) would be zero or negative
    #[error("singular discount rate: {0}% makes the discount factor non-positive")]
    SingularDiscount(f64),

    #[error("assumption `{field}` is not a finite number")]
    NonFinite { field: &'static str },
}

/// Failures reading assumptions from JSON or CSV
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid assumptions JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid assumptions CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("duplicate restaurant id `{0}`")]
    DuplicateRestaurant(String),
}
