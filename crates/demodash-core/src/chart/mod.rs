// crates/demodash-core/src/chart/mod.rs

//! # Chart Builders
//!
//! Turn a (filtered) table into figure descriptions. Builders borrow the
//! table and never modify it.

mod bar;
mod figure;
mod geo;

pub use bar::{bar_title, build_bar_chart, BAR_TITLE_PREFIX};
pub use figure::*;
pub use geo::{build_geo_chart, GEO_SIZE_MAX, GEO_TITLE};

use std::collections::HashMap;

/// plotly's default qualitative colorway.
pub const PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Country → color assignment in order of first appearance, cycling the palette.
#[derive(Debug, Clone, Default)]
pub struct ColorMap<'a> {
    order: Vec<&'a str>,
    index: HashMap<&'a str, usize>,
}

impl<'a> ColorMap<'a> {
    pub fn new(countries: impl IntoIterator<Item = &'a str>) -> Self {
        let mut map = Self::default();
        for c in countries {
            if !map.index.contains_key(c) {
                map.index.insert(c, map.order.len());
                map.order.push(c);
            }
        }
        map
    }

    pub fn countries(&self) -> &[&'a str] {
        &self.order
    }

    pub fn color(&self, country: &str) -> &'static str {
        let i = self.index.get(country).copied().unwrap_or(0);
        PALETTE[i % PALETTE.len()]
    }
}
