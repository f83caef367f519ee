// crates/demodash-core/src/chart/figure.rs

//! Serializable figure model.
//!
//! The shapes follow plotly.js' JSON schema (`data`, `layout`, `frames`) so
//! a figure can be handed to `Plotly.react` unchanged. Only the attributes
//! the dashboard sets are modelled.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

impl Figure {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scattergeo(GeoTrace),
    Bar(BarTrace),
}

impl Trace {
    pub fn name(&self) -> &str {
        match self {
            Trace::Scattergeo(t) => &t.name,
            Trace::Bar(t) => &t.name,
        }
    }
}

/// Bubbles for one country in one animation frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoTrace {
    pub name: String,
    pub legendgroup: String,
    pub mode: String,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    /// City names, shown as the hover title.
    pub hovertext: Vec<String>,
    /// `[country, population]` per point, referenced by the hover template.
    pub customdata: Vec<(String, u64)>,
    pub hovertemplate: String,
    pub marker: BubbleMarker,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleMarker {
    pub color: String,
    pub size: Vec<u64>,
    pub sizemode: String,
    pub sizeref: f64,
    pub sizemin: f64,
}

/// Population per census year for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    pub name: String,
    pub legendgroup: String,
    pub x: Vec<u16>,
    pub y: Vec<u64>,
    pub marker: BarMarker,
    pub hovertemplate: String,
    pub offsetgroup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarMarker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub margin: Margin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    pub legend: Legend,
    /// Animation slider; opaque plotly JSON.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sliders: Vec<Value>,
    /// Play / pause buttons; opaque plotly JSON.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub r: u32,
    pub t: u32,
    pub l: u32,
    pub b: u32,
}

/// Fixed margins shared by both panels.
pub const PANEL_MARGIN: Margin = Margin {
    r: 0,
    t: 25,
    l: 10,
    b: 0,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLayout {
    pub scope: String,
    pub projection: Projection,
    pub showland: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: Title,
    pub tracegrouporder: String,
}

impl Legend {
    pub fn countries() -> Self {
        Self {
            title: Title::new("COUNTRY"),
            tracegrouporder: "normal".into(),
        }
    }
}
