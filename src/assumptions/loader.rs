//! Load assumptions from JSON documents and restaurant CSV files
//!
//! Restaurant CSV files carry one restaurant per row. Headers use the same
//! camelCase names as the JSON payload; `restaurantId` is required, every
//! other column may be omitted or left blank to take the fixture default.

use super::ValuationAssumptions;
use crate::error::LoadError;
use crate::portfolio::RestaurantInput;
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raw CSV row before defaults are applied
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestaurantRow {
    restaurant_id: String,
    name: Option<String>,
    initial_sales: Option<f64>,
    sales_growth_rate: Option<f64>,
    inflation_rate: Option<f64>,
    discount_rate: Option<f64>,
    years_remaining: Option<u32>,
    pac_percentage: Option<f64>,
    rent_percentage: Option<f64>,
    service_fees_percentage: Option<f64>,
    depreciation: Option<f64>,
    interest: Option<f64>,
    loan_payment: Option<f64>,
    rent_index: Option<f64>,
    miscellaneous: Option<f64>,
}

impl RestaurantRow {
    fn into_input(self) -> RestaurantInput {
        let d = ValuationAssumptions::default();
        let assumptions = ValuationAssumptions {
            initial_sales: self.initial_sales.unwrap_or(d.initial_sales),
            sales_growth_rate: self.sales_growth_rate.unwrap_or(d.sales_growth_rate),
            inflation_rate: self.inflation_rate.unwrap_or(d.inflation_rate),
            discount_rate: self.discount_rate.unwrap_or(d.discount_rate),
            years_remaining: self.years_remaining.unwrap_or(d.years_remaining),
            pac_percentage: self.pac_percentage.unwrap_or(d.pac_percentage),
            rent_percentage: self.rent_percentage.unwrap_or(d.rent_percentage),
            service_fees_percentage: self
                .service_fees_percentage
                .unwrap_or(d.service_fees_percentage),
            depreciation: self.depreciation.unwrap_or(d.depreciation),
            interest: self.interest.unwrap_or(d.interest),
            loan_payment: self.loan_payment.unwrap_or(d.loan_payment),
            rent_index: self.rent_index.unwrap_or(d.rent_index),
            miscellaneous: self.miscellaneous.unwrap_or(d.miscellaneous),
        };

        RestaurantInput {
            restaurant_id: self.restaurant_id,
            name: self.name.filter(|n| !n.trim().is_empty()),
            assumptions,
        }
    }
}

/// Load a single set of assumptions from a JSON file
pub fn load_assumptions<P: AsRef<Path>>(path: P) -> Result<ValuationAssumptions, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let assumptions = load_assumptions_from_reader(BufReader::new(file))?;
    debug!("Loaded assumptions from {}", path.display());
    Ok(assumptions)
}

/// Load a single set of assumptions from any JSON reader
pub fn load_assumptions_from_reader<R: Read>(reader: R) -> Result<ValuationAssumptions, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load restaurants from a CSV file
pub fn load_restaurants<P: AsRef<Path>>(path: P) -> Result<Vec<RestaurantInput>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let restaurants = load_restaurants_from_reader(file)?;
    info!("Loaded {} restaurants from {}", restaurants.len(), path.display());
    Ok(restaurants)
}

/// Load restaurants from any CSV reader
pub fn load_restaurants_from_reader<R: Read>(reader: R) -> Result<Vec<RestaurantInput>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut restaurants = Vec::new();

    for result in rdr.deserialize() {
        let row: RestaurantRow = result?;
        if !seen.insert(row.restaurant_id.clone()) {
            return Err(LoadError::DuplicateRestaurant(row.restaurant_id));
        }
        restaurants.push(row.into_input());
    }

    Ok(restaurants)
}
