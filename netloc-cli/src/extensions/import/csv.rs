//! Import demand table from a simple csv format.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

pub use self::actual::read_csv_demand;

#[cfg(feature = "csv-format")]
mod actual {
    use netloc_core::prelude::{Coordinate, DemandPoint, GenericError};
    use serde::Deserialize;
    use std::io::{BufReader, Read};

    #[derive(Debug, Deserialize)]
    struct CsvStore {
        #[serde(rename = "Longitude")]
        lng: f64,
        #[serde(rename = "Latitude")]
        lat: f64,
        #[serde(rename = "DemandLbs")]
        demand: f64,
    }

    fn read_csv_entries<T, R: Read>(reader: BufReader<R>) -> Result<Vec<T>, GenericError>
    where
        for<'de> T: Deserialize<'de>,
    {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        reader
            .deserialize()
            .enumerate()
            .map(|(idx, entry)| entry.map_err(|err| GenericError::from(format!("row {}: {err}", idx + 1))))
            .collect()
    }

    /// Reads demand table with `Longitude`, `Latitude`, `DemandLbs` columns, other columns are ignored.
    pub fn read_csv_demand<R: Read>(reader: BufReader<R>) -> Result<Vec<DemandPoint>, GenericError> {
        let stores = read_csv_entries::<CsvStore, _>(reader)?;

        Ok(stores
            .into_iter()
            .map(|store| DemandPoint::new(Coordinate::new(store.lng, store.lat), store.demand))
            .collect())
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use netloc_core::prelude::{DemandPoint, GenericError};
    use std::io::{BufReader, Read};

    /// A stub method for reading demand table from csv format.
    pub fn read_csv_demand<R: Read>(_reader: BufReader<R>) -> Result<Vec<DemandPoint>, GenericError> {
        Err("csv-format feature is not included".into())
    }
}
