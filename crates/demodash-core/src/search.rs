// crates/demodash-core/src/search.rs

//! Option lookup for the dropdowns.
//!
//! The dropdowns are searchable: typing narrows the option list. Matching is
//! accent and case insensitive on the folded name.

use crate::table::Table;
use crate::text::fold_key;

impl Table {
    /// Cities whose name contains `substr`, in dropdown order.
    /// An empty query returns every city.
    pub fn find_cities_by_substring(&self, substr: &str) -> Vec<&str> {
        let q = fold_key(substr.trim());
        let cities = self.cities();
        if q.is_empty() {
            return cities;
        }
        cities
            .into_iter()
            .filter(|c| fold_key(c).contains(&q))
            .collect()
    }

    /// Countries whose name contains `substr`, in dropdown order.
    pub fn find_countries_by_substring(&self, substr: &str) -> Vec<&str> {
        let q = fold_key(substr.trim());
        let countries = self.countries();
        if q.is_empty() {
            return countries;
        }
        countries
            .into_iter()
            .filter(|c| fold_key(c).contains(&q))
            .collect()
    }

    /// Exact city lookup, used to tell "unknown city" apart from "no rows left".
    pub fn has_city(&self, city: &str) -> bool {
        self.iter().any(|r| r.city == city)
    }
}

#[cfg(test)]
mod tests {
    use crate::table::{Record, Table};

    fn table() -> Table {
        ["Omaha-Council Bluffs NE-IA", "San José CA", "Austin TX"]
            .into_iter()
            .map(|city| Record {
                city: city.into(),
                country: "Mexico".into(),
                origin_code: 303,
                lat: 30.0,
                lon: -97.0,
                year: 2015,
                population: 1,
            })
            .collect()
    }

    #[test]
    fn substring_search_folds_accents() {
        let t = table();
        assert_eq!(t.find_cities_by_substring("jose"), vec!["San José CA"]);
        assert_eq!(t.find_cities_by_substring("OMAHA").len(), 1);
        assert_eq!(t.find_cities_by_substring("").len(), 3);
        assert!(t.find_cities_by_substring("zzz").is_empty());
    }

    #[test]
    fn country_search_and_exact_city() {
        let t = table();
        assert_eq!(t.find_countries_by_substring("mex"), vec!["Mexico"]);
        assert!(t.has_city("Austin TX"));
        assert!(!t.has_city("austin tx"));
    }
}
