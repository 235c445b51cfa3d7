use std::{path::PathBuf, time::Instant};

use log::debug;

use crate::{
    catalogue::{create_price_catalogue, Product},
    error::Error,
    loader::load_records,
    report::{write_results, SalesReport},
    sales::{compute_cost, Sale},
};

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub catalogue_path: PathBuf,
    pub sales_path: PathBuf,
    pub report_path: PathBuf,
}

/**
 * Loads both inputs, prices every sale and writes the report.
 *
 * The measured time covers loading and aggregation only. Fails with
 * [`Error::NoInput`] when either input yields no records, in which case no
 * report is written. A total that overflows to infinity is
 * [`Error::TotalOverflow`], also without a report.
 */
pub fn run(config: &RunConfig) -> Result<SalesReport, Error> {
    let start = Instant::now();

    let products: Vec<Product> = load_records(&config.catalogue_path)?;
    let sales: Vec<Sale> = load_records(&config.sales_path)?;
    if products.is_empty() || sales.is_empty() {
        return Err(Error::NoInput);
    }

    let catalogue = create_price_catalogue(products);
    let total_cost = compute_cost(&catalogue, &sales);
    if !total_cost.is_finite() {
        return Err(Error::TotalOverflow);
    }
    let elapsed = start.elapsed();
    debug!("Priced {} sales in {:?}", sales.len(), elapsed);

    let report = SalesReport {
        total_cost,
        elapsed,
    };
    write_results(&report, &config.report_path)?;
    Ok(report)
}
