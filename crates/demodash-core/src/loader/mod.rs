// crates/demodash-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and hands the byte stream
//! to the CSV parser. The dataset is read once at startup; any failure here
//! is meant to stop the process.

use crate::error::{DemoError, Result};
use crate::table::{Record, Table};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod common_io;

pub use common_io::is_gzip_path;

impl Table {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "migration.csv"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// **Standard Loader:** reads a CSV (or `.csv.gz`) file into a table.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let table = Self::from_reader(reader)?;
        info!(
            path = %path.display(),
            rows = table.len(),
            "dataset loaded"
        );
        Ok(table)
    }

    /// Parses CSV from any reader. The header row is required; columns not
    /// named by [`Record`] are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in rdr.deserialize::<Record>() {
            let record = row?;
            validate(&record)?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(DemoError::InvalidData("dataset has no rows".into()));
        }
        debug!(rows = records.len(), "parsed csv rows");
        Ok(Self::from_records(records))
    }
}

fn validate(r: &Record) -> Result<()> {
    if !(-90.0..=90.0).contains(&r.lat) || !(-180.0..=180.0).contains(&r.lon) {
        return Err(DemoError::InvalidData(format!(
            "coordinates out of range for {} ({}, {})",
            r.city, r.lat, r.lon
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
YEAR,CITY,COUNTRY,NATIVE_MOTHER_COUNTRY_CODE,LAT,LON,POPULATION,EXTRA
2010, City A ,USA,57,41.25,-95.93,100,x
2010,City B,Mexico,303,29.42,-98.49,50.4,y
";

    #[test]
    fn parses_rows_and_ignores_extra_columns() {
        let t = Table::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(t.len(), 2);
        let a = &t.records()[0];
        assert_eq!(a.city, "City A");
        assert_eq!(a.origin_code, 57);
        assert_eq!(a.year, 2010);
        assert_eq!(t.records()[1].population, 50);
    }

    #[test]
    fn rejects_negative_population() {
        let csv = "CITY,COUNTRY,NATIVE_MOTHER_COUNTRY_CODE,LAT,LON,YEAR,POPULATION\n\
                   A,USA,57,41.0,-96.0,2010,-3\n";
        assert!(matches!(
            Table::from_reader(csv.as_bytes()),
            Err(DemoError::Csv(_))
        ));
    }

    #[test]
    fn rejects_missing_column() {
        let csv = "CITY,COUNTRY,LAT,LON,YEAR,POPULATION\nA,USA,41.0,-96.0,2010,3\n";
        assert!(matches!(
            Table::from_reader(csv.as_bytes()),
            Err(DemoError::Csv(_))
        ));
    }

    #[test]
    fn rejects_empty_dataset_and_bad_coordinates() {
        let header = "CITY,COUNTRY,NATIVE_MOTHER_COUNTRY_CODE,LAT,LON,YEAR,POPULATION\n";
        assert!(matches!(
            Table::from_reader(header.as_bytes()),
            Err(DemoError::InvalidData(_))
        ));

        let bad = format!("{header}A,USA,57,141.0,-96.0,2010,3\n");
        assert!(matches!(
            Table::from_reader(bad.as_bytes()),
            Err(DemoError::InvalidData(_))
        ));
    }
}
