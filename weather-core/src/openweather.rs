//! OpenWeather API client: geocoding (geo/1.0) and One Call 3.0.
//!
//! Two sequential calls per lookup: `geocode` resolves a free-text
//! city/region pair to coordinates, `one_call` fetches current conditions
//! plus the daily forecast for those coordinates.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::WeatherError;
use crate::model::{ForecastDay, Location, WeatherReport};

// The geocoding endpoint is only served over plain HTTP.
const GEO_API_BASE: &str = "http://api.openweathermap.org/geo/1.0";
const ONECALL_API_BASE: &str = "https://api.openweathermap.org/data/3.0";

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    http: Client,
    geo_base: String,
    onecall_base: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            api_key,
            http,
            geo_base: GEO_API_BASE.to_string(),
            onecall_base: ONECALL_API_BASE.to_string(),
        })
    }

    #[cfg(test)]
    fn new_with_base_urls(api_key: &str, geo_base: &str, onecall_base: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            http: Client::new(),
            geo_base: geo_base.to_string(),
            onecall_base: onecall_base.to_string(),
        }
    }

    /// Resolve a city/region pair into coordinates and a display label.
    ///
    /// Only the first candidate is used (`limit=1`); an empty candidate
    /// list means the city is unknown to the geocoder.
    pub async fn geocode(&self, city: &str, region: &str) -> Result<Location, WeatherError> {
        let url = format!("{}/direct", self.geo_base);
        let query = format!("{city},{region}");

        tracing::debug!(%query, "geocoding location");

        let res = self
            .http
            .get(&url)
            .query(&[("q", query.as_str()), ("limit", "1"), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(WeatherError::GeocodeFailed { city: city.to_string() });
        }

        let body = res.text().await?;
        let candidates: Vec<GeoCandidate> = serde_json::from_str(&body)
            .map_err(|source| WeatherError::Decode { operation: "geocoding", source })?;

        let first = candidates
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::CityNotFound { city: city.to_string() })?;

        let label = match first.state.as_deref() {
            Some(state) if !state.is_empty() => format!("{}, {}", first.name, state),
            _ => format!("{}, {}", first.name, first.country),
        };

        Ok(Location { lat: first.lat, lon: first.lon, label })
    }

    /// Fetch current conditions and the 7-day forecast for coordinates.
    ///
    /// Daily index 0 duplicates the current conditions and is dropped;
    /// the remaining entries keep their 1-based position as the day number.
    pub async fn one_call(&self, lat: f64, lon: f64) -> Result<WeatherReport, WeatherError> {
        let url = format!("{}/onecall", self.onecall_base);
        let lat_s = lat.to_string();
        let lon_s = lon.to_string();

        tracing::debug!(lat, lon, "fetching one-call weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat_s.as_str()),
                ("lon", lon_s.as_str()),
                ("exclude", "minutely,hourly,alerts"),
                ("units", "imperial"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(WeatherError::WeatherFailed { status });
        }

        let body = res.text().await?;
        let parsed: OneCallResponse = serde_json::from_str(&body)
            .map_err(|source| WeatherError::Decode { operation: "one-call", source })?;

        let description = first_description(&parsed.current.weather)?;

        let daily = parsed
            .daily
            .iter()
            .enumerate()
            .skip(1)
            .map(|(day, entry)| {
                Ok(ForecastDay {
                    day,
                    temp_f: entry.temp.day,
                    description: first_description(&entry.weather)?,
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        Ok(WeatherReport { temp_f: parsed.current.temp, description, daily })
    }
}

fn first_description(weather: &[OwCondition]) -> Result<String, WeatherError> {
    weather
        .first()
        .map(|w| w.description.clone())
        .ok_or(WeatherError::MissingConditions)
}

#[derive(Debug, Deserialize)]
struct GeoCandidate {
    name: String,
    lat: f64,
    lon: f64,
    state: Option<String>,
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrent {
    temp: f64,
    weather: Vec<OwCondition>,
}

#[derive(Debug, Deserialize)]
struct OwDailyTemp {
    day: f64,
}

#[derive(Debug, Deserialize)]
struct OwDaily {
    temp: OwDailyTemp,
    weather: Vec<OwCondition>,
}

#[derive(Debug, Deserialize)]
struct OneCallResponse {
    current: OwCurrent,
    daily: Vec<OwDaily>,
}
