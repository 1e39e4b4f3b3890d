//! Projection output rows and the aggregate valuation result

use serde::{Deserialize, Serialize};
use std::io::Write;

/// One projected year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProjection {
    /// Projection year (1-indexed)
    pub year: u32,

    pub sales: f64,

    /// Product and paper cost
    pub pac: f64,
    pub rent: f64,
    pub service_fees: f64,

    /// Store operating income: sales less PAC, rent and service fees
    pub soi: f64,

    /// SOI less all fixed charges, loan payment included
    pub cashflow: f64,

    /// Cash flow with non-cash depreciation added back
    pub free_cash_flow: f64,

    /// Free cash flow discounted to present value
    pub discounted_fcf: f64,
}

/// Complete output of one valuation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    /// Rows in year order, one per projection year
    pub yearly_projections: Vec<YearlyProjection>,

    /// Free cash flow per year, in year order
    pub projected_cash_flows: Vec<f64>,

    /// Sum of discounted free cash flows
    pub final_valuation: f64,
}

impl ValuationResult {
    pub(crate) fn with_capacity(years: usize) -> Self {
        Self {
            yearly_projections: Vec::with_capacity(years),
            projected_cash_flows: Vec::with_capacity(years),
            final_valuation: 0.0,
        }
    }

    /// Append a row and accumulate its discounted free cash flow
    pub(crate) fn push(&mut self, row: YearlyProjection) {
        self.final_valuation += row.discounted_fcf;
        self.projected_cash_flows.push(row.free_cash_flow);
        self.yearly_projections.push(row);
    }

    /// Number of projected years
    pub fn years(&self) -> usize {
        self.yearly_projections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.yearly_projections.is_empty()
    }

    pub fn first_year(&self) -> Option<&YearlyProjection> {
        self.yearly_projections.first()
    }

    pub fn last_year(&self) -> Option<&YearlyProjection> {
        self.yearly_projections.last()
    }
}

/// Write the yearly projection table as CSV with a header row
pub fn write_projection_csv<W: Write>(result: &ValuationResult, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in &result.yearly_projections {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
