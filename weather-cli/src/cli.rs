use clap::Parser;
use weather_core::{Config, OpenWeatherClient};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather and 7-day forecast lookup")]
pub struct Cli {
    /// City name, e.g. "Austin".
    pub city: String,

    /// State or country name/code, e.g. "Texas" or "FR".
    pub region: String,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let client = OpenWeatherClient::new(config.api_key)?;

        let location = client.geocode(&self.city, &self.region).await?;
        println!("Fetching weather for: {}", location.label);

        let report = client.one_call(location.lat, location.lon).await?;
        print!("{report}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_city_and_region() {
        let cli = Cli::try_parse_from(["weather", "Austin", "Texas"]).unwrap();

        assert_eq!(cli.city, "Austin");
        assert_eq!(cli.region, "Texas");
    }

    #[test]
    fn rejects_missing_region() {
        assert!(Cli::try_parse_from(["weather", "Austin"]).is_err());
    }

    #[test]
    fn rejects_missing_arguments() {
        assert!(Cli::try_parse_from(["weather"]).is_err());
    }
}
