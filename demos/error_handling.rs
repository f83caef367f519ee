//! Error handling example for demodash-rs
//!
//! Shows which inputs are errors (bad files, unknown checklist labels) and
//! which are not (selections that match nothing).

use demodash_core::{
    filter_by_selection, DemoError, OriginSet, Result, Selection, Table,
};

const CSV: &str = "\
CITY,COUNTRY,NATIVE_MOTHER_COUNTRY_CODE,LAT,LON,YEAR,POPULATION
Omaha-Council Bluffs NE-IA,Mexico,303,41.26,-95.94,2010,1200
";

fn main() -> Result<()> {
    println!("=== demodash-rs Error Handling Example ===\n");

    // Example 1: Missing dataset
    println!("--- Example 1: Loading a missing file ---");
    match Table::load_from_path("does/not/exist.csv") {
        Ok(t) => println!("✓ loaded {} rows", t.len()),
        Err(DemoError::NotFound(msg)) => println!("✗ {msg}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 2: Malformed row
    println!("--- Example 2: Malformed population ---");
    let bad = CSV.replace("1200", "lots");
    match Table::from_reader(bad.as_bytes()) {
        Ok(_) => println!("✓ unexpectedly parsed"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 3: Unknown checklist label
    println!("--- Example 3: Unknown origin label ---");
    match OriginSet::from_labels(["Canada"]) {
        Ok(set) => println!("✓ {set:?}"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 4: Selections that match nothing are not errors
    println!("--- Example 4: Empty results ---");
    let table = Table::from_reader(CSV.as_bytes())?;
    let out = filter_by_selection(&table, &Selection::new(["Atlantis"], Some("Nowhere")));
    println!("  rows matching Atlantis / Nowhere: {}", out.len());

    Ok(())
}
