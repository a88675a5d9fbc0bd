//! Import command helpers

mod csv;
pub use self::csv::*;

use netloc_core::prelude::{DemandPoint, GenericError};
use std::io::{BufReader, Read};

/// Imports demand table from specific format.
pub fn import_demand<R: Read>(input_format: &str, reader: BufReader<R>) -> Result<Vec<DemandPoint>, GenericError> {
    match input_format {
        "csv" => read_csv_demand(reader).map_err(|err| format!("cannot read csv: {err}").into()),
        _ => Err(format!("unknown format: '{input_format}'").into()),
    }
}
