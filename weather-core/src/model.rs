use serde::{Deserialize, Serialize};
use std::fmt;

/// A geocoded place: coordinates plus the label shown to the user.
///
/// The label is `"<name>, <state>"` when the geocoder returned a non-empty
/// state, otherwise `"<name>, <country>"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

/// One day of the forecast. `day` is 1-based: day 1 is tomorrow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: usize,
    pub temp_f: f64,
    pub description: String,
}

/// Current conditions plus the daily forecast, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp_f: f64,
    pub description: String,
    pub daily: Vec<ForecastDay>,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Weather: {:.1}°F, {}", self.temp_f, self.description)?;
        writeln!(f, "7-Day Forecast:")?;
        for day in &self.daily {
            writeln!(f, "Day {}: {:.1}°F, {}", day.day, day.temp_f, day.description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> WeatherReport {
        WeatherReport {
            temp_f: 72.849,
            description: "clear sky".to_string(),
            daily: (1..=7)
                .map(|day| ForecastDay {
                    day,
                    temp_f: 70.0 + day as f64,
                    description: "few clouds".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn current_line_rounds_to_one_decimal() {
        let rendered = sample_report().to_string();
        assert!(rendered.starts_with("Current Weather: 72.8°F, clear sky\n"));
    }

    #[test]
    fn renders_header_and_seven_numbered_lines() {
        let rendered = sample_report().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1], "7-Day Forecast:");
        assert_eq!(lines[2], "Day 1: 71.0°F, few clouds");
        assert_eq!(lines[8], "Day 7: 77.0°F, few clouds");
    }

    #[test]
    fn empty_forecast_renders_header_only() {
        let report = WeatherReport {
            temp_f: 50.0,
            description: "mist".to_string(),
            daily: Vec::new(),
        };

        assert_eq!(report.to_string(), "Current Weather: 50.0°F, mist\n7-Day Forecast:\n");
    }
}
