// crates/demodash-core/src/table.rs
use crate::common::TableStats;
use crate::origin::Origin;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashSet};

/// One row of the migration dataset: a population count for a
/// (city, country of origin, census year) triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "CITY")]
    pub city: String,
    #[serde(rename = "COUNTRY")]
    pub country: String,
    #[serde(rename = "NATIVE_MOTHER_COUNTRY_CODE")]
    pub origin_code: u32,
    #[serde(rename = "LAT")]
    pub lat: f64,
    #[serde(rename = "LON")]
    pub lon: f64,
    #[serde(rename = "YEAR")]
    pub year: u16,
    #[serde(rename = "POPULATION", deserialize_with = "de_count")]
    pub population: u64,
}

impl Record {
    pub fn origin(&self) -> Origin {
        Origin::from_code(self.origin_code)
    }
}

/// Population columns are sometimes exported as weighted floats (`1234.0`).
fn de_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let v = f64::deserialize(deserializer)?;
    if !v.is_finite() || v < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "population must be a non-negative number, got {v}"
        )));
    }
    Ok(v.round() as u64)
}

/// The in-memory dataset.
///
/// A `Table` is never modified after construction: filters return new
/// tables. The canonical one is loaded once and shared behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Distinct country names in order of first appearance.
    pub fn countries(&self) -> Vec<&str> {
        distinct_in_order(self.records.iter().map(|r| r.country.as_str()))
    }

    /// Distinct city names in order of first appearance.
    pub fn cities(&self) -> Vec<&str> {
        distinct_in_order(self.records.iter().map(|r| r.city.as_str()))
    }

    /// Distinct census years, ascending.
    pub fn years(&self) -> Vec<u16> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn stats(&self) -> TableStats {
        let years = self.years();
        TableStats {
            rows: self.records.len(),
            countries: self.countries().len(),
            cities: self.cities().len(),
            years: years.len(),
            first_year: years.first().copied(),
            last_year: years.last().copied(),
            total_population: self.records.iter().map(|r| r.population).sum(),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

fn distinct_in_order<'a>(it: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    it.filter(|s| seen.insert(*s)).collect()
}
