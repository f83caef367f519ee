// crates/demodash-core/src/origin.rs

//! Origin classification for the USA / Mexico checklist.
//!
//! The source data carries the country twice: as a display name (`COUNTRY`)
//! and as a numeric mother-country code (`NATIVE_MOTHER_COUNTRY_CODE`). Only
//! two codes matter to the dashboard, so the code is reduced to an [`Origin`]
//! and the name stays the grouping identity everywhere else.

use crate::error::{DemoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// CPS mother-country code for the United States.
pub const USA_ORIGIN_CODE: u32 = 57;
/// CPS mother-country code for Mexico.
pub const MEXICO_ORIGIN_CODE: u32 = 303;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    UnitedStates,
    Mexico,
    Other,
}

impl Origin {
    pub fn from_code(code: u32) -> Self {
        match code {
            USA_ORIGIN_CODE => Origin::UnitedStates,
            MEXICO_ORIGIN_CODE => Origin::Mexico,
            _ => Origin::Other,
        }
    }

    /// Checklist label, `None` for origins that cannot be toggled.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Origin::UnitedStates => Some("United States"),
            Origin::Mexico => Some("Mexico"),
            Origin::Other => None,
        }
    }

    /// Parses a checklist label (case-insensitive, surrounding whitespace ignored).
    pub fn from_label(label: &str) -> Result<Self> {
        let l = label.trim();
        if l.eq_ignore_ascii_case("United States") || l.eq_ignore_ascii_case("USA") {
            Ok(Origin::UnitedStates)
        } else if l.eq_ignore_ascii_case("Mexico") {
            Ok(Origin::Mexico)
        } else {
            Err(DemoError::UnknownOption {
                kind: "origin",
                value: label.to_string(),
            })
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("Other"))
    }
}

/// Inclusion flags from the origin checklist.
///
/// A cleared flag removes every row of that origin; rows of
/// [`Origin::Other`] are never affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginSet {
    pub united_states: bool,
    pub mexico: bool,
}

impl Default for OriginSet {
    fn default() -> Self {
        Self::all()
    }
}

impl OriginSet {
    /// Labels offered by the checklist, in display order.
    pub const LABELS: [&'static str; 2] = ["United States", "Mexico"];

    pub const fn all() -> Self {
        Self {
            united_states: true,
            mexico: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            united_states: false,
            mexico: false,
        }
    }

    pub fn only(origin: Origin) -> Self {
        let mut set = Self::none();
        set.insert(origin);
        set
    }

    pub fn insert(&mut self, origin: Origin) {
        match origin {
            Origin::UnitedStates => self.united_states = true,
            Origin::Mexico => self.mexico = true,
            Origin::Other => {}
        }
    }

    pub fn remove(&mut self, origin: Origin) {
        match origin {
            Origin::UnitedStates => self.united_states = false,
            Origin::Mexico => self.mexico = false,
            Origin::Other => {}
        }
    }

    /// Whether rows of `origin` survive this set.
    pub fn includes(&self, origin: Origin) -> bool {
        match origin {
            Origin::UnitedStates => self.united_states,
            Origin::Mexico => self.mexico,
            Origin::Other => true,
        }
    }

    pub fn is_all(&self) -> bool {
        self.united_states && self.mexico
    }

    /// Builds a set from checklist labels. An empty iterator clears both flags.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::none();
        for label in labels {
            set.insert(Origin::from_label(label.as_ref())?);
        }
        Ok(set)
    }

    /// Checked labels, in display order.
    pub fn labels(&self) -> Vec<&'static str> {
        [Origin::UnitedStates, Origin::Mexico]
            .into_iter()
            .filter(|o| self.includes(*o))
            .filter_map(Origin::label)
            .collect()
    }
}
