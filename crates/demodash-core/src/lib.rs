// crates/demodash-core/src/lib.rs

//! demodash-core
//! =============
//!
//! Data side of the demographic migration dashboard: a CSV of population by
//! metro city, country of origin and census year, two filters over it, and
//! builders that turn the filtered rows into plotly figures.
//!
//! ```rust
//! use std::sync::Arc;
//! use demodash_core::{CellId, Session, Table, WidgetChange, WidgetState};
//!
//! let csv = "CITY,COUNTRY,NATIVE_MOTHER_COUNTRY_CODE,LAT,LON,YEAR,POPULATION\n\
//!            Omaha-Council Bluffs NE-IA,Mexico,303,41.26,-95.94,2010,1200\n";
//! let table = Arc::new(Table::from_reader(csv.as_bytes()).unwrap());
//!
//! let mut session = Session::new(table, WidgetState::default());
//! let updates = session.apply(WidgetChange::City(None));
//! assert_eq!(updates[0].cell, CellId::Bar);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod chart;
pub mod common;
pub mod error;
pub mod filter;
pub mod loader; // The public loader
pub mod origin;
pub mod reactive;
pub mod search;
pub mod table;
pub mod text;

// Re-exports
pub use crate::common::TableStats;
pub use crate::error::{DemoError, Result};
pub use chart::{build_bar_chart, build_geo_chart, Figure};
pub use filter::{apply_filters, filter_by_origin, filter_by_selection, Selection};
pub use origin::{Origin, OriginSet, MEXICO_ORIGIN_CODE, USA_ORIGIN_CODE};
pub use reactive::{
    cells_for, Binder, CellId, CellUpdate, InputId, Session, WidgetChange, WidgetState,
    DEFAULT_CITY,
};
pub use table::{Record, Table};
