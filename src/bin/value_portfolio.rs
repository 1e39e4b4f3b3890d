//! Value every restaurant in a CSV file
//!
//! Outputs one summary row per restaurant plus an optional JSON report with
//! the full projection tables.

use anyhow::{Context, Result};
use clap::Parser;
use restaurant_valuation::{
    assumptions::load_restaurants,
    format_currency,
    portfolio::write_portfolio_csv,
    value_portfolio, FixedCostIndexing, ProjectionConfig, ValidationMode, ValuationEngine,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "value_portfolio", about = "Parallel valuation of a restaurant portfolio")]
struct Args {
    /// Restaurant CSV (restaurantId plus camelCase assumption columns)
    input: PathBuf,

    #[arg(short, long, default_value = "portfolio_valuation.csv")]
    output: PathBuf,

    /// Full JSON report including every projection table
    #[arg(long)]
    json: Option<PathBuf>,

    #[arg(long)]
    lenient: bool,

    #[arg(long)]
    index_fixed_costs: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let restaurants = load_restaurants(&args.input)
        .with_context(|| format!("loading restaurants from {}", args.input.display()))?;
    println!("Loaded {} restaurants in {:?}", restaurants.len(), start.elapsed());

    let engine = ValuationEngine::new(ProjectionConfig {
        validation: if args.lenient { ValidationMode::Lenient } else { ValidationMode::Strict },
        fixed_cost_indexing: if args.index_fixed_costs {
            FixedCostIndexing::Inflation
        } else {
            FixedCostIndexing::None
        },
    });

    let proj_start = Instant::now();
    let portfolio = value_portfolio(&engine, &restaurants);
    println!("Valuations complete in {:?}", proj_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_portfolio_csv(&portfolio, BufWriter::new(file))?;
    println!("Output written to {}", args.output.display());

    if let Some(path) = &args.json {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &portfolio)?;
        println!("Report written to {}", path.display());
    }

    println!("\nPortfolio Summary:");
    println!("  Valued:          {}", portfolio.valuations.len());
    println!("  Failed:          {}", portfolio.failures.len());
    for failure in &portfolio.failures {
        println!("    {}: {}", failure.restaurant_id, failure.error);
    }
    println!("  Total valuation: {}", format_currency(portfolio.total_valuation));
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
