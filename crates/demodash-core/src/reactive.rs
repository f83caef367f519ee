// crates/demodash-core/src/reactive.rs

//! # Reactive Binder
//!
//! Two output cells subscribe to the three input widgets:
//!
//! | cell  | inputs                              |
//! |-------|-------------------------------------|
//! | `Geo` | countries, origins                  |
//! | `Bar` | city, countries, origins            |
//!
//! When an input changes, every subscribed cell is recomputed from scratch
//! out of the canonical table and the full widget state. There is no delta
//! update and the two cells do not depend on each other.

use crate::chart::{build_bar_chart, build_geo_chart, Figure};
use crate::filter::{apply_filters, Selection};
use crate::origin::OriginSet;
use crate::table::Table;
use crate::text::non_blank;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// City preselected when the page opens.
pub const DEFAULT_CITY: &str = "Omaha-Council Bluffs NE-IA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputId {
    Countries,
    City,
    Origins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellId {
    Geo,
    Bar,
}

impl CellId {
    pub const ALL: [CellId; 2] = [CellId::Geo, CellId::Bar];

    /// The inputs this cell subscribes to.
    pub fn inputs(self) -> &'static [InputId] {
        match self {
            CellId::Geo => &[InputId::Countries, InputId::Origins],
            CellId::Bar => &[InputId::City, InputId::Countries, InputId::Origins],
        }
    }

    pub fn depends_on(self, input: InputId) -> bool {
        self.inputs().contains(&input)
    }
}

/// Cells that must be recomputed when `input` changes.
pub fn cells_for(input: InputId) -> Vec<CellId> {
    CellId::ALL
        .into_iter()
        .filter(|c| c.depends_on(input))
        .collect()
}

/// Current value of every input widget for one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetState {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub origins: OriginSet,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            countries: Vec::new(),
            city: Some(DEFAULT_CITY.to_string()),
            origins: OriginSet::all(),
        }
    }
}

impl WidgetState {
    pub fn city(&self) -> Option<&str> {
        non_blank(self.city.as_deref())
    }

    /// Selection seen by `cell`. The geo cell ignores the city dropdown.
    pub fn selection_for(&self, cell: CellId) -> Selection {
        match cell {
            CellId::Geo => Selection::countries_only(&self.countries),
            CellId::Bar => Selection {
                countries: self.countries.clone(),
                city: self.city().map(str::to_string),
            },
        }
    }

    pub fn apply(&mut self, change: WidgetChange) {
        match change {
            WidgetChange::Countries(c) => self.countries = c,
            WidgetChange::City(c) => self.city = c,
            WidgetChange::Origins(o) => self.origins = o,
        }
    }
}

/// A new value for one input widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "input", content = "value", rename_all = "snake_case")]
pub enum WidgetChange {
    Countries(Vec<String>),
    City(Option<String>),
    Origins(OriginSet),
}

impl WidgetChange {
    pub fn input(&self) -> InputId {
        match self {
            WidgetChange::Countries(_) => InputId::Countries,
            WidgetChange::City(_) => InputId::City,
            WidgetChange::Origins(_) => InputId::Origins,
        }
    }
}

/// A recomputed cell ready to replace what is displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellUpdate {
    pub cell: CellId,
    pub figure: Figure,
}

/// Recomputes cells from the shared canonical table.
///
/// Cloning is cheap; every viewer can hold its own `Binder`.
#[derive(Debug, Clone)]
pub struct Binder {
    table: Arc<Table>,
}

impl Binder {
    pub fn new(table: Arc<Table>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn recompute(&self, cell: CellId, state: &WidgetState) -> Figure {
        let filtered = apply_filters(&self.table, &state.origins, &state.selection_for(cell));
        debug!(?cell, rows = filtered.len(), "recomputed cell");
        match cell {
            CellId::Geo => build_geo_chart(&filtered),
            CellId::Bar => build_bar_chart(&filtered, state.city()),
        }
    }

    /// Recomputes the cells subscribed to `changed`.
    pub fn on_change(&self, changed: InputId, state: &WidgetState) -> Vec<CellUpdate> {
        cells_for(changed)
            .into_iter()
            .map(|cell| CellUpdate {
                cell,
                figure: self.recompute(cell, state),
            })
            .collect()
    }

    pub fn render_all(&self, state: &WidgetState) -> Vec<CellUpdate> {
        CellId::ALL
            .into_iter()
            .map(|cell| CellUpdate {
                cell,
                figure: self.recompute(cell, state),
            })
            .collect()
    }
}

/// One viewer: widget state plus the figures currently on screen.
#[derive(Debug, Clone)]
pub struct Session {
    binder: Binder,
    state: WidgetState,
    geo: Figure,
    bar: Figure,
}

impl Session {
    pub fn new(table: Arc<Table>, state: WidgetState) -> Self {
        let binder = Binder::new(table);
        let geo = binder.recompute(CellId::Geo, &state);
        let bar = binder.recompute(CellId::Bar, &state);
        Self {
            binder,
            state,
            geo,
            bar,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn figure(&self, cell: CellId) -> &Figure {
        match cell {
            CellId::Geo => &self.geo,
            CellId::Bar => &self.bar,
        }
    }

    /// Applies a widget change and swaps in the recomputed figures.
    /// Returns the updates in [`CellId::ALL`] order.
    pub fn apply(&mut self, change: WidgetChange) -> Vec<CellUpdate> {
        let input = change.input();
        self.state.apply(change);
        let updates = self.binder.on_change(input, &self.state);
        for u in &updates {
            match u.cell {
                CellId::Geo => self.geo = u.figure.clone(),
                CellId::Bar => self.bar = u.figure.clone(),
            }
        }
        updates
    }
}
