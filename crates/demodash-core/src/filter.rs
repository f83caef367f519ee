// crates/demodash-core/src/filter.rs

//! # Filter Engine
//!
//! Pure functions from the canonical table plus the current widget values to
//! a derived table. Nothing here mutates its input.
//!
//! An empty selection is a pass-through, never "exclude everything": no
//! countries picked keeps every country, no city picked keeps every city.

use crate::origin::OriginSet;
use crate::table::{Record, Table};
use crate::text::non_blank;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Dropdown selections: a set of countries and at most one city.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl Selection {
    pub fn new<I, S>(countries: I, city: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
            city: city.map(str::to_string),
        }
    }

    pub fn countries_only(countries: &[String]) -> Self {
        Self {
            countries: countries.to_vec(),
            city: None,
        }
    }

    /// The city, with blank values treated as unselected.
    pub fn city(&self) -> Option<&str> {
        non_blank(self.city.as_deref())
    }
}

/// Removes rows whose origin is cleared in `origins`.
///
/// With both flags set the result equals the input.
pub fn filter_by_origin(table: &Table, origins: &OriginSet) -> Table {
    if origins.is_all() {
        return table.clone();
    }
    table
        .iter()
        .filter(|r| origins.includes(r.origin()))
        .cloned()
        .collect()
}

/// Keeps rows matching the selection, sorted by (year, country).
///
/// - non-empty `countries`: the row's country must be a member
/// - a city: the row's city must be equal to it
///
/// Both conditions are ANDed. The sort is stable, so rows sharing a year and
/// country keep their table order.
pub fn filter_by_selection(table: &Table, selection: &Selection) -> Table {
    let countries: HashSet<&str> = selection.countries.iter().map(String::as_str).collect();
    let city = selection.city();

    let mut rows: Vec<Record> = table
        .iter()
        .filter(|r| countries.is_empty() || countries.contains(r.country.as_str()))
        .filter(|r| city.map_or(true, |c| r.city == c))
        .cloned()
        .collect();

    sort_by_year_country(&mut rows);
    Table::from_records(rows)
}

/// Origin filter followed by the selection filter.
pub fn apply_filters(table: &Table, origins: &OriginSet, selection: &Selection) -> Table {
    let by_origin = filter_by_origin(table, origins);
    filter_by_selection(&by_origin, selection)
}

pub fn sort_by_year_country(rows: &mut [Record]) {
    rows.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.country.cmp(&b.country)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::origin::Origin;

    fn rec(city: &str, country: &str, code: u32, year: u16, population: u64) -> Record {
        Record {
            city: city.into(),
            country: country.into(),
            origin_code: code,
            lat: 40.0,
            lon: -100.0,
            year,
            population,
        }
    }

    fn two_rows() -> Table {
        Table::from_records(vec![
            rec("City A", "USA", 57, 2010, 100),
            rec("City B", "Mexico", 303, 2010, 50),
        ])
    }

    #[test]
    fn mexico_only_drops_usa_rows() {
        let out = filter_by_origin(&two_rows(), &OriginSet::only(Origin::Mexico));
        assert_eq!(out.records(), &[rec("City B", "Mexico", 303, 2010, 50)]);
    }

    #[test]
    fn both_flags_leave_table_unchanged() {
        let t = two_rows();
        assert_eq!(filter_by_origin(&t, &OriginSet::all()), t);
    }

    #[test]
    fn no_flags_keep_other_origins() {
        let mut rows = two_rows().into_records();
        rows.push(rec("City C", "India", 210, 2012, 7));
        let out = filter_by_origin(&Table::from_records(rows), &OriginSet::none());
        assert_eq!(out.len(), 1);
        assert_eq!(out.records()[0].country, "India");
    }

    #[test]
    fn empty_selection_is_pass_through() {
        let t = Table::from_records(vec![
            rec("B", "Mexico", 303, 2012, 1),
            rec("A", "India", 210, 2010, 2),
            rec("C", "Canada", 1, 2012, 3),
        ]);
        let out = filter_by_selection(&t, &Selection::default());
        assert_eq!(out.len(), 3);
        let keys: Vec<_> = out.iter().map(|r| (r.year, r.country.as_str())).collect();
        assert_eq!(keys, vec![(2010, "India"), (2012, "Canada"), (2012, "Mexico")]);
    }

    #[test]
    fn blank_city_counts_as_unselected() {
        let out = filter_by_selection(&two_rows(), &Selection::new(Vec::<String>::new(), Some("  ")));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn country_and_city_are_anded() {
        let t = Table::from_records(vec![
            rec("X", "Mexico", 303, 2011, 1),
            rec("X", "India", 210, 2011, 2),
            rec("Y", "Mexico", 303, 2011, 3),
            rec("X", "Mexico", 303, 2010, 4),
        ]);
        let out = filter_by_selection(&t, &Selection::new(["Mexico"], Some("X")));
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.country == "Mexico" && r.city == "X"));
        assert_eq!(out.records()[0].year, 2010);
    }

    #[test]
    fn unknown_values_yield_empty_table() {
        let out = filter_by_selection(&two_rows(), &Selection::new(["Atlantis"], None));
        assert!(out.is_empty());
        let out = filter_by_selection(&two_rows(), &Selection::new(Vec::<String>::new(), Some("Nowhere")));
        assert!(out.is_empty());
    }

    #[test]
    fn sort_is_stable_within_year_and_country() {
        let t = Table::from_records(vec![
            rec("Second", "Mexico", 303, 2010, 1),
            rec("First", "India", 210, 2011, 2),
            rec("Third", "Mexico", 303, 2010, 3),
        ]);
        let out = filter_by_selection(&t, &Selection::default());
        let cities: Vec<_> = out.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, vec!["Second", "Third", "First"]);
    }

    #[test]
    fn input_table_is_not_modified() {
        let t = two_rows();
        let before = t.clone();
        let _ = apply_filters(&t, &OriginSet::none(), &Selection::new(["USA"], Some("City A")));
        assert_eq!(t, before);
    }
}
