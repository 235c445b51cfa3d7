mod catalogue;
mod driver;
mod error;
mod loader;
#[cfg(test)]
mod log_capture;
mod report;
mod sales;

use clap::Parser;
use log::{error, Level};
use std::{io::Write, path::PathBuf, process::ExitCode};

use crate::driver::RunConfig;
use crate::error::Error;
use crate::report::{SalesReport, REPORT_FILE_NAME};

/// Computes the total cost of a sales record against a price catalogue.
#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    /// JSON array of products with `title` and `price`
    price_catalogue: PathBuf,
    /// JSON array of sales with `Product` and `Quantity`
    sales_record: PathBuf,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            let label = match record.level() {
                Level::Error => "Error",
                Level::Warn => "Warning",
                Level::Info => "INFO",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            writeln!(buf, "{}: {}", label, record.args())
        })
        .init();
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    let config = RunConfig {
        catalogue_path: args.price_catalogue,
        sales_path: args.sales_record,
        report_path: PathBuf::from(REPORT_FILE_NAME),
    };

    ExitCode::from(exit_status(driver::run(&config)))
}

fn exit_status(result: Result<SalesReport, Error>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(err) => {
            error!("{}", err);
            1
        }
    }
}
