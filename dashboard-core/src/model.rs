use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unit system sent to the API and used for display suffixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Value of the `units` query parameter.
    pub const fn as_query(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub const fn temp_suffix(self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub const fn speed_suffix(self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query())
    }
}

/// One parsed weather observation, used for a single render and then
/// discarded. Read-only after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Location name as reported by the API.
    pub location_name: String,
    pub observed_at: DateTime<Utc>,
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Relative humidity, percent (0-100).
    pub humidity: u8,
    /// Atmospheric pressure, hPa.
    pub pressure: u32,
    /// Coarse condition category, e.g. "Clear" or "Rain".
    pub condition: String,
    /// Free-text condition description, lower-case on the wire.
    pub description: String,
    pub wind_speed: f64,
    /// Wind direction in degrees, 0 when the API omits it.
    pub wind_deg: u16,
}
