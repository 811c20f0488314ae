use askama::Template;
use axum::{
    Router,
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use crate::app::AppState;
use crate::history::{self, HistoryRecord};
use crate::routes::index::render_main;
use crate::weather::WeatherSummary;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/current-weather", get(get_current_weather))
        .route("/past-weather", get(get_past_weather))
        .with_state(state)
}

#[derive(Deserialize, Debug)]
struct CityQuery {
    city: String,
}

#[derive(Template)]
#[template(path = "result.html")]
struct ResultTemplate {
    city: String,
    current: Option<WeatherSummary>,
    error: Option<String>,
    history: Vec<HistoryRecord>,
}

impl ResultTemplate {
    fn render_page(self) -> Response {
        let content = self
            .render()
            .expect("Template rendering should always succeed");
        Html(render_main(content)).into_response()
    }
}

/// Live conditions for the selected city, with the recent days below them.
/// A failed lookup still renders the page, with the error where the live
/// conditions would have been.
async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Response {
    let history = history::fetch_history(&query.city);
    let (current, error) = match state.weather.fetch_current(&query.city).await {
        Ok(summary) => (Some(summary), None),
        Err(err) => (None, Some(err.message)),
    };
    ResultTemplate {
        city: query.city,
        current,
        error,
        history,
    }
    .render_page()
}

async fn get_past_weather(Query(query): Query<CityQuery>) -> Response {
    let history = history::fetch_history(&query.city);
    ResultTemplate {
        city: query.city,
        current: None,
        error: None,
        history,
    }
    .render_page()
}
