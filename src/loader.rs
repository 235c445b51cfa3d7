use std::{fs, io, path::Path};

use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/**
 * Reads a JSON array from `path` and converts each element into `T`.
 *
 * A missing file or malformed JSON is reported and yields an empty vector,
 * the caller decides whether that is fatal. Elements that do not convert
 * into `T` are dropped with a warning so that nothing downstream has to
 * deal with half-formed records. Any other I/O failure is returned.
 */
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Error> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            error!("File not found: {}", path.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(Error::io(path, err)),
    };

    let elements: Vec<Value> = match serde_json::from_str(&contents) {
        Ok(elements) => elements,
        Err(_) => {
            error!("Invalid JSON format in {}", path.display());
            return Ok(Vec::new());
        }
    };

    let records: Vec<T> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(record) => Some(record),
            Err(msg) => {
                warn!(
                    "Skipping record {} in {}: {}",
                    index,
                    path.display(),
                    msg
                );
                None
            }
        })
        .collect();

    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
