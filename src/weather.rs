use chrono::{Local, TimeZone};
use log::error;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

const OPENWEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

// Callers only ever see this fixed message; the cause goes to the log.
const LOOKUP_FAILED: &str = "Could not retrieve weather data";

/// Current conditions for one city, normalized and ready for rendering.
#[derive(Debug, Clone)]
pub struct WeatherSummary {
    pub city: String,
    pub temperature: String,
    pub feels_like: String,
    pub condition: String,
    pub observed_at: String,
}

/// What a failed lookup yields instead of a [`WeatherSummary`].
#[derive(Debug, Clone)]
pub struct WeatherError {
    pub message: String,
}

impl WeatherError {
    fn sentinel() -> WeatherError {
        WeatherError {
            message: LOOKUP_FAILED.to_string(),
        }
    }
}

#[derive(Debug, Error)]
enum ProviderError {
    #[error("request to the weather provider failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
    #[error("weather provider answered {status}: {body}")]
    BadStatus { status: StatusCode, body: String },
    #[error("could not decode the weather provider response: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
    #[error("weather provider response contained no conditions")]
    MissingCondition,
    #[error("weather provider reported unrepresentable observation time {0}")]
    BadTimestamp(i64),
}

// Payload of the current-conditions endpoint. Temperatures arrive in Kelvin.
#[derive(Debug, Deserialize)]
struct CurrentConditions {
    name: String,
    dt: i64,
    main: Readings,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct Readings {
    temp: f64,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> WeatherClient {
        WeatherClient::with_endpoint(api_key, OPENWEATHER_ENDPOINT.to_string())
    }

    /// Client that queries `endpoint` instead of the real provider. Tests
    /// point this at a local mock server.
    pub fn with_endpoint(api_key: String, endpoint: String) -> WeatherClient {
        WeatherClient {
            http: Client::new(),
            api_key,
            endpoint,
        }
    }

    /// Look up current conditions for `city`.
    ///
    /// The city is passed to the provider verbatim, unvalidated. Any failure
    /// on the way, transport, provider status or malformed payload alike,
    /// collapses into the same generic [`WeatherError`].
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherSummary, WeatherError> {
        match self.request_current(city).await {
            Ok(summary) => Ok(summary),
            Err(err) => {
                error!("failed to fetch weather for {city:?}: {err}");
                Err(WeatherError::sentinel())
            }
        }
    }

    async fn request_current(&self, city: &str) -> Result<WeatherSummary, ProviderError> {
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(ProviderError::BadStatus {
                status,
                body: truncate_body(&body),
            });
        }

        let payload: CurrentConditions = serde_json::from_str(&body)?;
        summarize(payload)
    }
}

fn summarize(payload: CurrentConditions) -> Result<WeatherSummary, ProviderError> {
    let condition = payload
        .weather
        .first()
        .map(|condition| condition.description.clone())
        .ok_or(ProviderError::MissingCondition)?;
    let observed_at = Local
        .timestamp_opt(payload.dt, 0)
        .single()
        .ok_or(ProviderError::BadTimestamp(payload.dt))?;

    Ok(WeatherSummary {
        city: payload.name,
        temperature: format_celsius(payload.main.temp),
        feels_like: format_celsius(payload.main.feels_like),
        condition,
        observed_at: observed_at.format("%c").to_string(),
    })
}

fn format_celsius(kelvin: f64) -> String {
    format!("{:.2}°C", kelvin - 273.15)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
