// crates/demodash-core/src/chart/bar.rs
use super::figure::{Axis, BarMarker, BarTrace, Figure, Layout, Legend, Title, Trace, PANEL_MARGIN};
use super::ColorMap;
use crate::table::Table;
use std::collections::BTreeMap;

pub const BAR_TITLE_PREFIX: &str = "Changing demographics for Metro Area: ";

const BAR_HOVER: &str = "COUNTRY=%{fullData.name}<br>YEAR=%{x}<br>POPULATION=%{y}<extra></extra>";

/// Grouped bars: census year on x, population on y, one bar group member
/// per country.
///
/// Rows sharing a (country, year) are summed, which matters when no city is
/// selected and several metro areas report the same country.
pub fn build_bar_chart(table: &Table, city_label: Option<&str>) -> Figure {
    let colors = ColorMap::new(table.iter().map(|r| r.country.as_str()));

    let data = colors
        .countries()
        .iter()
        .map(|&country| {
            let mut per_year: BTreeMap<u16, u64> = BTreeMap::new();
            for r in table.iter().filter(|r| r.country == country) {
                *per_year.entry(r.year).or_default() += r.population;
            }
            Trace::Bar(BarTrace {
                name: country.to_string(),
                legendgroup: country.to_string(),
                x: per_year.keys().copied().collect(),
                y: per_year.values().copied().collect(),
                marker: BarMarker {
                    color: colors.color(country).to_string(),
                },
                hovertemplate: BAR_HOVER.into(),
                offsetgroup: country.to_string(),
            })
        })
        .collect();

    Figure {
        data,
        layout: Layout {
            title: Title::new(bar_title(city_label)),
            margin: PANEL_MARGIN,
            geo: None,
            xaxis: Some(Axis {
                title: Title::new("Census Year"),
                kind: Some("category".into()),
            }),
            yaxis: Some(Axis {
                title: Title::new("Population"),
                kind: None,
            }),
            barmode: Some("group".into()),
            legend: Legend::countries(),
            sliders: Vec::new(),
            updatemenus: Vec::new(),
        },
        frames: Vec::new(),
    }
}

pub fn bar_title(city_label: Option<&str>) -> String {
    format!("{BAR_TITLE_PREFIX}{}", city_label.unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Record;

    fn rec(city: &str, country: &str, year: u16, population: u64) -> Record {
        Record {
            city: city.into(),
            country: country.into(),
            origin_code: 0,
            lat: 41.0,
            lon: -96.0,
            year,
            population,
        }
    }

    #[test]
    fn sums_per_country_and_year() {
        let t = Table::from_records(vec![
            rec("Omaha", "Mexico", 2010, 100),
            rec("Austin", "Mexico", 2010, 40),
            rec("Omaha", "India", 2012, 7),
            rec("Omaha", "Mexico", 2012, 1),
        ]);
        let fig = build_bar_chart(&t, None);
        assert_eq!(fig.data.len(), 2);
        let Trace::Bar(mexico) = &fig.data[0] else {
            panic!("expected bar");
        };
        assert_eq!(mexico.name, "Mexico");
        assert_eq!(mexico.x, vec![2010, 2012]);
        assert_eq!(mexico.y, vec![140, 1]);
        assert_eq!(fig.layout.barmode.as_deref(), Some("group"));
    }

    #[test]
    fn title_carries_city_label() {
        let fig = build_bar_chart(&Table::default(), Some("Omaha-Council Bluffs NE-IA"));
        assert_eq!(
            fig.layout.title.text,
            "Changing demographics for Metro Area: Omaha-Council Bluffs NE-IA"
        );
        assert!(fig.data.is_empty());
        assert_eq!(bar_title(None), BAR_TITLE_PREFIX);
        assert_eq!(
            fig.layout.xaxis.as_ref().map(|a| a.title.text.as_str()),
            Some("Census Year")
        );
    }
}
