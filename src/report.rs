use std::{fmt::Display, fs, path::Path, time::Duration};

use crate::error::Error;

pub const REPORT_FILE_NAME: &str = "SalesResults.txt";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesReport {
    pub total_cost: f64,
    pub elapsed: Duration,
}

impl Display for SalesReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total cost of all sales: ${:.2}\nExecution time: {:.4} seconds",
            self.total_cost,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Prints the report and writes the same text to `path`, replacing any previous report.
pub fn write_results(report: &SalesReport, path: &Path) -> Result<(), Error> {
    let text = report.to_string();
    println!("{}", text);
    fs::write(path, text).map_err(|err| Error::io(path, err))
}
