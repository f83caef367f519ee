use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a table.
///
/// Returned by [`Table::stats`](crate::Table::stats), these counts reflect
/// whatever table they were computed on, so calling it on a filtered copy
/// describes the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub rows: usize,
    pub countries: usize,
    pub cities: usize,
    pub years: usize,
    pub first_year: Option<u16>,
    pub last_year: Option<u16>,
    pub total_population: u64,
}
