//! Filter walkthrough for demodash-rs
//!
//! Loads the bundled sample dataset and steps through the same widget
//! changes a viewer would make on the dashboard.

use demodash_core::{
    CellId, Origin, OriginSet, Result, Session, Table, WidgetChange, WidgetState,
};
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== demodash-rs Filter Walkthrough ===\n");

    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "data", "migration.csv"]
        .iter()
        .collect();
    let table = Arc::new(Table::load_from_path(&path)?);
    let stats = table.stats();
    println!(
        "Loaded {} rows: {} countries, {} metro areas, {} census years\n",
        stats.rows, stats.countries, stats.cities, stats.years
    );

    let mut session = Session::new(table, WidgetState::default());
    summarize("Initial view", &session);

    println!("--- Uncheck United States ---");
    session.apply(WidgetChange::Origins(OriginSet::only(Origin::Mexico)));
    summarize("Mexico-born and other origins", &session);

    println!("--- Pick India and Mexico ---");
    session.apply(WidgetChange::Countries(vec!["India".into(), "Mexico".into()]));
    summarize("India + Mexico", &session);

    println!("--- Switch metro area ---");
    let updates = session.apply(WidgetChange::City(Some("Austin-Round Rock TX".into())));
    println!("  cells recomputed: {:?}", updates.iter().map(|u| u.cell).collect::<Vec<_>>());
    summarize("Austin", &session);

    println!("--- Clear the city ---");
    session.apply(WidgetChange::City(None));
    summarize("All metro areas", &session);

    Ok(())
}

fn summarize(label: &str, session: &Session) {
    let geo = session.figure(CellId::Geo);
    let bar = session.figure(CellId::Bar);
    println!("{label}:");
    println!("  geo: {} frames, {} traces", geo.frames.len(), geo.data.len());
    println!("  bar: \"{}\"", bar.layout.title.text);
    for trace in &bar.data {
        println!("    - {}", trace.name());
    }
    println!();
}
