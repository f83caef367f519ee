//! The single dashboard page.
//!
//! Widgets are plain HTML controls; plotly.js draws whatever figure JSON the
//! API returns. Option lists are embedded at render time so the first paint
//! needs only one round trip for the figures.

use demodash_core::{OriginSet, Table, WidgetState, DEFAULT_CITY};
use serde_json::json;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Demographic Changes in USA</title>
<script src="__PLOTLY__"></script>
<style>
  body { font-family: sans-serif; margin: 0 2em; }
  h1 { text-align: center; margin-top: 40px; margin-bottom: 5px; }
  .half { width: 50%; display: inline-block; vertical-align: top; box-sizing: border-box; padding-right: 1em; }
  select { width: 100%; }
  #plots { width: 100%; margin-top: 20px; }
  .plot { height: 520px; }
</style>
</head>
<body>
<div id="parent">
  <h1 id="H1">Demographic Changes in USA (2007 - 2021)</h1>
  <div>
    <div class="half">
      <h3>Select Demographics Country(ies):</h3>
      <select id="dropdown_country" multiple size="6"></select>
    </div><div class="half">
      <h3>Select a Metro Area:</h3>
      <input id="city_search" type="search" placeholder="Select a Metro City">
      <select id="dropdown_city"></select>
    </div>
  </div>
  <div id="filter_country"></div>
  <div id="plots">
    <div class="half"><div id="geo_plot" class="plot"></div></div><div class="half"><div id="bar_plot" class="plot"></div></div>
  </div>
  <div><cite>Source for CPS data - https://www.census.gov/data/developers/data-sets/census-microdata-api/cps/basic.html</cite></div>
  <div><cite>Source for GPS coordinates for Metro Cities - https://www2.census.gov/geo/docs/maps-data/data/gazetteer/2021_Gazetteer/</cite></div>
</div>
<script>
const OPTIONS = __OPTIONS__;

const countrySel = document.getElementById("dropdown_country");
const citySel = document.getElementById("dropdown_city");
const citySearch = document.getElementById("city_search");
const checklist = document.getElementById("filter_country");

function option(value, selected) {
  const o = document.createElement("option");
  o.value = value; o.textContent = value; o.selected = selected;
  return o;
}

OPTIONS.countries.forEach(c => countrySel.appendChild(option(c, false)));

// The chosen city lives here, not in the <select>: searching rebuilds the
// option list and must not change what the charts were built for.
let selectedCity = OPTIONS.defaults.city || "";

function fillCities(list) {
  const names = selectedCity === "" || list.includes(selectedCity) ? list : [selectedCity, ...list];
  citySel.replaceChildren(option("", selectedCity === ""));
  names.forEach(c => citySel.appendChild(option(c, c === selectedCity)));
}
fillCities(OPTIONS.cities);

OPTIONS.origins.forEach(label => {
  const l = document.createElement("label");
  const cb = document.createElement("input");
  cb.type = "checkbox"; cb.value = label; cb.checked = true;
  l.appendChild(cb); l.appendChild(document.createTextNode(" " + label + " "));
  checklist.appendChild(l);
});

function widgetState() {
  const labels = Array.from(checklist.querySelectorAll("input:checked")).map(cb => cb.value);
  return {
    countries: Array.from(countrySel.selectedOptions).map(o => o.value),
    city: selectedCity === "" ? null : selectedCity,
    origins: { united_states: labels.includes("United States"), mexico: labels.includes("Mexico") },
  };
}

// Requests are numbered; a panel only accepts a figure newer than the one it shows.
let nextSeq = 0;
const shown = { geo: -1, bar: -1 };

function draw(resp, seq) {
  for (const cell of ["geo", "bar"]) {
    if (resp[cell] && seq > shown[cell]) {
      shown[cell] = seq;
      Plotly.react(cell + "_plot", resp[cell]);
    }
  }
}

async function changed(input) {
  const seq = ++nextSeq;
  const r = await fetch("/api/update", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({ state: widgetState(), changed: input, seq }),
  });
  if (r.ok) {
    const resp = await r.json();
    draw(resp, resp.seq);
  }
}

countrySel.addEventListener("change", () => changed("countries"));
citySel.addEventListener("change", () => {
  selectedCity = citySel.value;
  changed("city");
});
checklist.addEventListener("change", () => changed("origins"));
citySearch.addEventListener("input", async () => {
  const r = await fetch("/api/cities?q=" + encodeURIComponent(citySearch.value));
  if (r.ok) fillCities(await r.json());
});

(async () => {
  const seq = ++nextSeq;
  const q = new URLSearchParams();
  if (selectedCity !== "") q.append("city", selectedCity);
  const r = await fetch("/api/figures?" + q.toString());
  if (r.ok) draw(await r.json(), seq);
})();
</script>
</body>
</html>
"##;

/// Renders the page with the table's dropdown options baked in.
pub fn render(table: &Table) -> String {
    let defaults = WidgetState {
        city: table.has_city(DEFAULT_CITY).then(|| DEFAULT_CITY.to_string()),
        ..WidgetState::default()
    };
    let options = json!({
        "countries": table.countries(),
        "cities": table.cities(),
        "origins": OriginSet::LABELS,
        "defaults": defaults,
    });
    TEMPLATE
        .replace("__PLOTLY__", PLOTLY_CDN)
        .replace("__OPTIONS__", &script_safe(&options.to_string()))
}

/// Keeps embedded JSON from closing the surrounding `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
