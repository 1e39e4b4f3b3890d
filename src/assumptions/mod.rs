//! Business assumptions feeding a restaurant valuation
//!
//! Percentages are whole numbers (`5.0` means 5%) and are divided by 100 at
//! the point of use. Field names serialize in camelCase to match the form
//! payloads and stored fixtures.

pub mod loader;

pub use loader::{
    load_assumptions, load_assumptions_from_reader, load_restaurants, load_restaurants_from_reader,
};

use serde::{Deserialize, Serialize};

/// Inputs to a single valuation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationAssumptions {
    /// Year-0 revenue base
    #[serde(default = "default_initial_sales")]
    pub initial_sales: f64,

    /// Annual compound revenue growth (%)
    #[serde(default = "default_sales_growth_rate")]
    pub sales_growth_rate: f64,

    /// Annual inflation (%)
    /// Only applied when the engine is configured to index fixed costs
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f64,

    /// Annual discount rate for present value (%)
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,

    /// Number of projection years
    #[serde(default = "default_years_remaining")]
    pub years_remaining: u32,

    /// Product and paper cost (% of sales)
    #[serde(default = "default_pac_percentage")]
    pub pac_percentage: f64,

    /// Rent (% of sales)
    #[serde(default = "default_rent_percentage")]
    pub rent_percentage: f64,

    /// Franchise service fees (% of sales)
    #[serde(default = "default_service_fees_percentage")]
    pub service_fees_percentage: f64,

    // Fixed annual charges, identical every year
    #[serde(default = "default_depreciation")]
    pub depreciation: f64,
    #[serde(default = "default_interest")]
    pub interest: f64,
    #[serde(default = "default_loan_payment")]
    pub loan_payment: f64,
    #[serde(default = "default_rent_index")]
    pub rent_index: f64,
    #[serde(default = "default_miscellaneous")]
    pub miscellaneous: f64,
}

fn default_initial_sales() -> f64 { 2_454_919.0 }
fn default_sales_growth_rate() -> f64 { 3.0 }
fn default_inflation_rate() -> f64 { 2.0 }
fn default_discount_rate() -> f64 { 21.0 }
fn default_years_remaining() -> u32 { 20 }
fn default_pac_percentage() -> f64 { 32.0 }
fn default_rent_percentage() -> f64 { 11.47 }
fn default_service_fees_percentage() -> f64 { 5.0 }
fn default_depreciation() -> f64 { 72_092.0 }
fn default_interest() -> f64 { 19_997.0 }
fn default_loan_payment() -> f64 { 31_478.0 }
fn default_rent_index() -> f64 { 75_925.0 }
fn default_miscellaneous() -> f64 { 85_521.0 }

impl Default for ValuationAssumptions {
    fn default() -> Self {
        Self {
            initial_sales: default_initial_sales(),
            sales_growth_rate: default_sales_growth_rate(),
            inflation_rate: default_inflation_rate(),
            discount_rate: default_discount_rate(),
            years_remaining: default_years_remaining(),
            pac_percentage: default_pac_percentage(),
            rent_percentage: default_rent_percentage(),
            service_fees_percentage: default_service_fees_percentage(),
            depreciation: default_depreciation(),
            interest: default_interest(),
            loan_payment: default_loan_payment(),
            rent_index: default_rent_index(),
            miscellaneous: default_miscellaneous(),
        }
    }
}

impl ValuationAssumptions {
    /// Sum of the five fixed annual charges
    pub fn total_fixed_charges(&self) -> f64 {
        self.depreciation + self.interest + self.loan_payment + self.rent_index + self.miscellaneous
    }

    /// Every floating-point field paired with its serialized name
    pub(crate) fn numeric_fields(&self) -> [(&'static str, f64); 12] {
        [
            ("initialSales", self.initial_sales),
            ("salesGrowthRate", self.sales_growth_rate),
            ("inflationRate", self.inflation_rate),
            ("discountRate", self.discount_rate),
            ("pacPercentage", self.pac_percentage),
            ("rentPercentage", self.rent_percentage),
            ("serviceFeesPercentage", self.service_fees_percentage),
            ("depreciation", self.depreciation),
            ("interest", self.interest),
            ("loanPayment", self.loan_payment),
            ("rentIndex", self.rent_index),
            ("miscellaneous", self.miscellaneous),
        ]
    }
}
