// crates/demodash-core/src/chart/geo.rs
use super::figure::{
    BubbleMarker, Figure, Frame, GeoLayout, GeoTrace, Layout, Legend, Projection, Title, Trace,
    PANEL_MARGIN,
};
use super::ColorMap;
use crate::table::{Record, Table};
use serde_json::{json, Value};

pub const GEO_TITLE: &str = "Changing demographics in US cities";

/// Diameter in pixels of the largest bubble.
pub const GEO_SIZE_MAX: f64 = 30.0;

const GEO_HOVER: &str = "<b>%{hovertext}</b><br>COUNTRY=%{customdata[0]}<br>POPULATION=%{customdata[1]}<extra></extra>";

/// Bubble map of the table over the continental USA.
///
/// One frame per distinct year; each frame holds one trace per country
/// (possibly empty) so trace indices line up across frames. The figure's
/// initial `data` is the first year's frame.
pub fn build_geo_chart(table: &Table) -> Figure {
    let colors = ColorMap::new(table.iter().map(|r| r.country.as_str()));
    let years = table.years();
    let sizeref = size_ref(table);

    let frames: Vec<Frame> = years
        .iter()
        .map(|&year| Frame {
            name: year.to_string(),
            data: colors
                .countries()
                .iter()
                .map(|&country| {
                    let rows = table
                        .iter()
                        .filter(|r| r.year == year && r.country == country);
                    Trace::Scattergeo(geo_trace(country, colors.color(country), rows, sizeref))
                })
                .collect(),
        })
        .collect();

    let data = frames.first().map(|f| f.data.clone()).unwrap_or_default();

    let (sliders, updatemenus) = if frames.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        (vec![year_slider(&years)], vec![play_buttons()])
    };

    Figure {
        data,
        layout: Layout {
            title: Title::new(GEO_TITLE),
            margin: PANEL_MARGIN,
            geo: Some(GeoLayout {
                scope: "usa".into(),
                projection: Projection {
                    kind: "albers usa".into(),
                },
                showland: true,
            }),
            xaxis: None,
            yaxis: None,
            barmode: None,
            legend: Legend::countries(),
            sliders,
            updatemenus,
        },
        frames,
    }
}

fn geo_trace<'a>(
    country: &str,
    color: &str,
    rows: impl Iterator<Item = &'a Record>,
    sizeref: f64,
) -> GeoTrace {
    let mut trace = GeoTrace {
        name: country.to_string(),
        legendgroup: country.to_string(),
        mode: "markers".into(),
        lat: Vec::new(),
        lon: Vec::new(),
        hovertext: Vec::new(),
        customdata: Vec::new(),
        hovertemplate: GEO_HOVER.into(),
        marker: BubbleMarker {
            color: color.to_string(),
            size: Vec::new(),
            sizemode: "area".into(),
            sizeref,
            sizemin: 0.0,
        },
        showlegend: true,
    };
    for r in rows {
        trace.lat.push(r.lat);
        trace.lon.push(r.lon);
        trace.hovertext.push(r.city.clone());
        trace.customdata.push((r.country.clone(), r.population));
        trace.marker.size.push(r.population);
    }
    trace
}

/// plotly's area sizing: the largest value maps to `GEO_SIZE_MAX` pixels.
fn size_ref(table: &Table) -> f64 {
    let max = table.iter().map(|r| r.population).max().unwrap_or(0);
    if max == 0 {
        return 1.0;
    }
    2.0 * max as f64 / (GEO_SIZE_MAX * GEO_SIZE_MAX)
}

fn year_slider(years: &[u16]) -> Value {
    let steps: Vec<Value> = years
        .iter()
        .map(|y| {
            json!({
                "label": y.to_string(),
                "method": "animate",
                "args": [[y.to_string()], {
                    "mode": "immediate",
                    "frame": {"duration": 0, "redraw": true},
                    "transition": {"duration": 0}
                }]
            })
        })
        .collect();
    json!({
        "active": 0,
        "currentvalue": {"prefix": "YEAR="},
        "len": 0.9,
        "x": 0.1,
        "y": 0,
        "pad": {"b": 10, "t": 60},
        "steps": steps
    })
}

fn play_buttons() -> Value {
    json!({
        "type": "buttons",
        "direction": "left",
        "showactive": false,
        "x": 0.1,
        "y": 0,
        "xanchor": "right",
        "yanchor": "top",
        "pad": {"r": 10, "t": 70},
        "buttons": [
            {
                "label": "&#9654;",
                "method": "animate",
                "args": [null, {
                    "frame": {"duration": 500, "redraw": true},
                    "mode": "immediate",
                    "fromcurrent": true,
                    "transition": {"duration": 500, "easing": "linear"}
                }]
            },
            {
                "label": "&#9724;",
                "method": "animate",
                "args": [[null], {
                    "frame": {"duration": 0, "redraw": true},
                    "mode": "immediate",
                    "fromcurrent": true,
                    "transition": {"duration": 0, "easing": "linear"}
                }]
            }
        ]
    })
}
