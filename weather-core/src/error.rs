use reqwest::StatusCode;

/// Failure modes of a single weather lookup.
///
/// Every variant is terminal for the CLI: nothing is retried, the caller
/// prints one diagnostic line and exits nonzero.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// DNS, connect, timeout or body-read failures on either API call.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-200 status from the geocoding endpoint.
    #[error("unable to fetch coordinates for city {city}")]
    GeocodeFailed { city: String },

    /// Geocoding returned 200 with an empty candidate list.
    #[error("city {city} not found")]
    CityNotFound { city: String },

    /// Non-200 status from the one-call endpoint.
    #[error("weather request failed with status {status}")]
    WeatherFailed { status: StatusCode },

    /// Malformed or schema-mismatched JSON, naming the failing call.
    #[error("failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A `weather` description list came back empty. The API contract says
    /// it never is, but we refuse to index into it blindly.
    #[error("weather data contained no condition description")]
    MissingConditions,
}
