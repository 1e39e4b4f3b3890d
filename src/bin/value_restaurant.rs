//! Value a single restaurant and print the projection table
//!
//! Assumptions come from an optional JSON file, falling back to the fixture
//! defaults, with individual fields overridable from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use restaurant_valuation::{
    assumptions::load_assumptions,
    format_currency,
    projection::{write_projection_csv, MAX_FORM_YEARS},
    sensitivity_grid, FixedCostIndexing, ProjectionConfig, ValidationMode, ValuationAssumptions,
    ValuationEngine, ValuationSummary,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "value_restaurant", about = "Discounted cash flow valuation of one restaurant")]
struct Args {
    /// JSON file with assumptions (camelCase fields, missing fields use defaults)
    #[arg(short, long)]
    assumptions: Option<PathBuf>,

    #[arg(long)]
    initial_sales: Option<f64>,

    /// Annual sales growth (%)
    #[arg(long)]
    growth: Option<f64>,

    /// Annual discount rate (%)
    #[arg(long)]
    discount: Option<f64>,

    #[arg(long)]
    years: Option<u32>,

    /// Compute degenerate input instead of rejecting it
    #[arg(long)]
    lenient: bool,

    /// Grow fixed charges with the inflation rate
    #[arg(long)]
    index_fixed_costs: bool,

    /// Rows of the projection table to print
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Write the full projection table as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the full result as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print a discount × growth sensitivity grid around the inputs
    #[arg(long)]
    sensitivity: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut assumptions = match &args.assumptions {
        Some(path) => load_assumptions(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => ValuationAssumptions::default(),
    };
    if let Some(v) = args.initial_sales { assumptions.initial_sales = v; }
    if let Some(v) = args.growth { assumptions.sales_growth_rate = v; }
    if let Some(v) = args.discount { assumptions.discount_rate = v; }
    if let Some(v) = args.years { assumptions.years_remaining = v; }

    if assumptions.years_remaining > MAX_FORM_YEARS {
        warn!(
            "Projecting {} years, beyond the {}-year form limit",
            assumptions.years_remaining, MAX_FORM_YEARS
        );
    }

    let engine = ValuationEngine::new(ProjectionConfig {
        validation: if args.lenient { ValidationMode::Lenient } else { ValidationMode::Strict },
        fixed_cost_indexing: if args.index_fixed_costs {
            FixedCostIndexing::Inflation
        } else {
            FixedCostIndexing::None
        },
    });

    let result = engine.value(&assumptions).context("valuation failed")?;
    let summary = ValuationSummary::from_result(&result);

    println!(
        "{:>4} | {:>14} | {:>12} | {:>12} | {:>12} | {:>14} | {:>14} | {:>14}",
        "Year", "Sales", "PAC", "Rent", "Fees", "SOI", "FCF", "Discounted"
    );
    for row in result.yearly_projections.iter().take(args.rows) {
        println!(
            "{:>4} | {:>14} | {:>12} | {:>12} | {:>12} | {:>14} | {:>14} | {:>14}",
            row.year,
            format_currency(row.sales),
            format_currency(row.pac),
            format_currency(row.rent),
            format_currency(row.service_fees),
            format_currency(row.soi),
            format_currency(row.free_cash_flow),
            format_currency(row.discounted_fcf),
        );
    }
    if result.years() > args.rows {
        println!("  ... {} more years", result.years() - args.rows);
    }

    println!("\nValuation Summary:");
    println!("  Years projected:    {}", summary.years);
    println!("  Total sales:        {}", format_currency(summary.total_sales));
    println!("  SOI margin:         {:.2}%", summary.average_soi_margin * 100.0);
    println!("  Total free cash:    {}", format_currency(summary.total_free_cash_flow));
    if let Some(year) = summary.first_negative_year {
        println!("  Negative from year: {}", year);
    }
    println!("  Final valuation:    {}", format_currency(summary.final_valuation));

    if args.sensitivity {
        let d = assumptions.discount_rate;
        let g = assumptions.sales_growth_rate;
        let discounts = [d - 4.0, d - 2.0, d, d + 2.0, d + 4.0];
        let growths = [g - 2.0, g - 1.0, g, g + 1.0, g + 2.0];
        let grid = sensitivity_grid(&engine, &assumptions, &discounts, &growths)
            .context("sensitivity grid failed")?;

        println!("\nSensitivity (rows: discount %, columns: growth %):");
        print!("{:>8}", "");
        for g in &grid.growth_rates {
            print!(" | {:>14.2}", g);
        }
        println!();
        for (i, d) in grid.discount_rates.iter().enumerate() {
            print!("{:>8.2}", d);
            for v in &grid.valuations[i] {
                print!(" | {:>14}", format_currency(*v));
            }
            println!();
        }
    }

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_projection_csv(&result, BufWriter::new(file))?;
        info!("Projection written to {}", path.display());
    }

    if let Some(path) = &args.json {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &result)?;
        info!("Result written to {}", path.display());
    }

    Ok(())
}
