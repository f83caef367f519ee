//! HTTP routes.
//!
//! The browser keeps the widget state; every request carries it in full and
//! the server answers with freshly built figures. The only thing shared
//! between requests is the read-only table.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::Query as MultiQuery;
use demodash_core::text::non_blank;
use demodash_core::{
    Binder, CellId, CellUpdate, Figure, InputId, OriginSet, Table, WidgetState, DEFAULT_CITY,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::page;

#[derive(Clone)]
pub struct AppState {
    binder: Binder,
    page: Arc<str>,
}

impl AppState {
    pub fn new(table: Arc<Table>) -> Self {
        let page = page::render(&table).into();
        Self {
            binder: Binder::new(table),
            page,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/api/options", get(options))
        .route("/api/cities", get(cities))
        .route("/api/figures", get(figures))
        .route("/api/update", post(update))
        .with_state(state)
}

/// A 400 with a JSON `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError(String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": self.0 }))).into_response()
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FiguresResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Figure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar: Option<Figure>,
    /// Echo of the request's sequence number, so the page can drop late answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<u64>,
}

impl From<Vec<CellUpdate>> for FiguresResponse {
    fn from(updates: Vec<CellUpdate>) -> Self {
        let mut out = Self::default();
        for u in updates {
            match u.cell {
                CellId::Geo => out.geo = Some(u.figure),
                CellId::Bar => out.bar = Some(u.figure),
            }
        }
        out
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub countries: Vec<String>,
    pub cities: Vec<String>,
    pub origins: Vec<String>,
    pub defaults: WidgetState,
}

/// Query for `/api/figures`. List values use repeated keys
/// (`countries=Mexico&countries=Korea,%20South`), so names may contain commas.
#[derive(Debug, Default, Deserialize)]
pub struct FiguresQuery {
    #[serde(default)]
    pub countries: Vec<String>,
    pub city: Option<String>,
    /// No key means both origins; a single empty value (`origins=`) means neither.
    #[serde(default)]
    pub origins: Vec<String>,
}

impl FiguresQuery {
    fn into_state(self) -> Result<WidgetState, ApiError> {
        let origins = if self.origins.is_empty() {
            OriginSet::all()
        } else {
            let labels = self.origins.iter().filter(|l| !l.trim().is_empty());
            OriginSet::from_labels(labels).map_err(|e| {
                warn!(error = %e, "rejected origins query");
                ApiError(e.to_string())
            })?
        };
        Ok(WidgetState {
            countries: self
                .countries
                .into_iter()
                .filter(|c| !c.trim().is_empty())
                .collect(),
            city: non_blank(self.city.as_deref()).map(str::to_string),
            origins,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub state: WidgetState,
    pub changed: InputId,
    #[serde(default)]
    pub seq: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CitiesQuery {
    #[serde(default)]
    pub q: String,
}

async fn index(State(st): State<AppState>) -> Html<String> {
    Html(st.page.to_string())
}

async fn healthz(State(st): State<AppState>) -> impl IntoResponse {
    Json(json!({ "ok": true, "rows": st.binder.table().len() }))
}

async fn options(State(st): State<AppState>) -> Json<OptionsResponse> {
    let table = st.binder.table();
    Json(OptionsResponse {
        countries: table.countries().into_iter().map(str::to_string).collect(),
        cities: table.cities().into_iter().map(str::to_string).collect(),
        origins: OriginSet::LABELS.iter().map(|s| s.to_string()).collect(),
        defaults: WidgetState {
            city: table.has_city(DEFAULT_CITY).then(|| DEFAULT_CITY.to_string()),
            ..WidgetState::default()
        },
    })
}

async fn cities(State(st): State<AppState>, Query(q): Query<CitiesQuery>) -> Json<Vec<String>> {
    let found = st.binder.table().find_cities_by_substring(&q.q);
    Json(found.into_iter().map(str::to_string).collect())
}

async fn figures(
    State(st): State<AppState>,
    MultiQuery(q): MultiQuery<FiguresQuery>,
) -> Result<Json<FiguresResponse>, ApiError> {
    let state = q.into_state()?;
    debug!(?state, "render all cells");
    Ok(Json(st.binder.render_all(&state).into()))
}

async fn update(
    State(st): State<AppState>,
    body: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<FiguresResponse>, ApiError> {
    let Json(req) = body.map_err(|e| {
        warn!(error = %e, "rejected update body");
        ApiError(e.body_text())
    })?;
    debug!(changed = ?req.changed, "widget changed");
    let mut resp: FiguresResponse = st.binder.on_change(req.changed, &req.state).into();
    resp.seq = req.seq;
    Ok(Json(resp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use demodash_core::{Origin, Record};

    fn rec(city: &str, country: &str, code: u32, year: u16, population: u64) -> Record {
        Record {
            city: city.into(),
            country: country.into(),
            origin_code: code,
            lat: 41.0,
            lon: -96.0,
            year,
            population,
        }
    }

    fn app_state() -> AppState {
        AppState::new(Arc::new(Table::from_records(vec![
            rec(DEFAULT_CITY, "United States", 57, 2010, 100),
            rec(DEFAULT_CITY, "Mexico", 303, 2010, 50),
            rec("Austin TX", "India", 210, 2011, 30),
        ])))
    }

    #[test]
    fn query_parsing_defaults() {
        let s = FiguresQuery::default().into_state().unwrap();
        assert_eq!(s.origins, OriginSet::all());
        assert!(s.countries.is_empty());
        assert_eq!(s.city, None);

        let s = FiguresQuery {
            countries: vec!["Mexico".into(), " ".into(), "India".into()],
            city: Some("  ".into()),
            origins: vec!["".into()],
        }
        .into_state()
        .unwrap();
        assert_eq!(s.countries, vec!["Mexico", "India"]);
        assert_eq!(s.city, None);
        assert_eq!(s.origins, OriginSet::none());

        let s = FiguresQuery {
            origins: vec!["Mexico".into()],
            ..FiguresQuery::default()
        }
        .into_state()
        .unwrap();
        assert_eq!(s.origins, OriginSet::only(Origin::Mexico));
    }

    #[test]
    fn unknown_origin_is_rejected() {
        let err = FiguresQuery {
            origins: vec!["Mexico".into(), "Canada".into()],
            ..FiguresQuery::default()
        }
        .into_state()
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn repeated_keys_keep_commas_in_names() {
        let q: FiguresQuery = serde_html_form::from_str(
            "countries=Korea%2C+South&countries=Mexico&city=Austin+TX&origins=Mexico",
        )
        .unwrap();
        let s = q.into_state().unwrap();
        assert_eq!(s.countries, vec!["Korea, South", "Mexico"]);
        assert_eq!(s.city.as_deref(), Some("Austin TX"));
        assert_eq!(s.origins, OriginSet::only(Origin::Mexico));

        let q: FiguresQuery = serde_html_form::from_str("origins=").unwrap();
        assert_eq!(q.into_state().unwrap().origins, OriginSet::none());
    }

    #[tokio::test]
    async fn figures_returns_both_cells() {
        let Json(resp) = figures(
            State(app_state()),
            MultiQuery(FiguresQuery {
                city: Some("Austin TX".into()),
                ..FiguresQuery::default()
            }),
        )
        .await
        .unwrap();
        let bar = resp.bar.unwrap();
        assert_eq!(bar.data.len(), 1);
        assert!(bar.layout.title.text.ends_with("Austin TX"));
        assert_eq!(resp.geo.unwrap().frames.len(), 2);
    }

    #[tokio::test]
    async fn update_returns_only_subscribed_cells() {
        let req = UpdateRequest {
            state: WidgetState::default(),
            changed: InputId::City,
            seq: Some(7),
        };
        let Json(resp) = update(State(app_state()), Ok(Json(req))).await.unwrap();
        assert!(resp.geo.is_none());
        assert_eq!(resp.seq, Some(7));
        assert_eq!(resp.bar.unwrap().data.len(), 2);
    }

    #[tokio::test]
    async fn update_echoes_sequence_number() {
        let req: UpdateRequest = serde_json::from_value(json!({
            "state": { "countries": ["India"], "city": null,
                       "origins": { "united_states": true, "mexico": true } },
            "changed": "countries",
            "seq": 42,
        }))
        .unwrap();
        let Json(resp) = update(State(app_state()), Ok(Json(req))).await.unwrap();
        let body = serde_json::to_value(&resp).unwrap();
        assert_eq!(body["seq"], 42);
        assert!(body.get("geo").is_some() && body.get("bar").is_some());

        let Json(resp) = figures(State(app_state()), MultiQuery(FiguresQuery::default()))
            .await
            .unwrap();
        assert!(serde_json::to_value(&resp).unwrap().get("seq").is_none());
    }

    #[tokio::test]
    async fn options_lists_widgets() {
        let Json(opts) = options(State(app_state())).await;
        assert_eq!(opts.countries, vec!["United States", "Mexico", "India"]);
        assert_eq!(opts.cities.len(), 2);
        assert_eq!(opts.origins, vec!["United States", "Mexico"]);
        assert_eq!(opts.defaults.city.as_deref(), Some(DEFAULT_CITY));
    }

    #[tokio::test]
    async fn city_search() {
        let Json(found) = cities(
            State(app_state()),
            Query(CitiesQuery { q: "aus".into() }),
        )
        .await;
        assert_eq!(found, vec!["Austin TX"]);
    }

    #[tokio::test]
    async fn index_serves_page() {
        let Html(body) = index(State(app_state())).await;
        assert!(body.contains("Demographic Changes in USA (2007 - 2021)"));
    }
}
