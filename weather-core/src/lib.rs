//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather API client (geocoding + One Call 3.0)
//! - Shared domain models and the error type
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod openweather;

pub use config::Config;
pub use error::WeatherError;
pub use model::{ForecastDay, Location, WeatherReport};
pub use openweather::OpenWeatherClient;
