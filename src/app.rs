use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::routes;
use crate::weather::WeatherClient;

// Anything that goes in here must be cheap to clone. The weather client
// already shares its connection pool between clones.
#[derive(Clone)]
pub struct AppState {
    pub weather: WeatherClient,
}

impl AppState {
    pub fn from_config(config: &Config) -> AppState {
        AppState {
            weather: WeatherClient::new(config.api_key.clone()),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index::get_index))
        .merge(routes::weather::routes(state))
        .layer(TraceLayer::new_for_http())
}
