use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{config::Config, error::DashboardError, model::{Units, WeatherReading}};

use super::WeatherProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the OpenWeatherMap current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    http: Client,
    base_url: String,
    api_key: String,
    location: String,
    units: Units,
}

impl OpenWeatherProvider {
    /// Build a provider from config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &Config) -> Result<Self, DashboardError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("weather-dashboard/0.1")
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            location: config.location.clone(),
            units: config.units,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self) -> Result<WeatherReading, DashboardError> {
        debug!(location = %self.location, "requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", self.location.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_query()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(DashboardError::Status { status, body: truncate_body(&body) });
        }

        let parsed: OwResponse =
            serde_json::from_str(&body).map_err(|e| DashboardError::Shape(e.to_string()))?;

        parsed.into_reading()
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: u32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    #[serde(default)]
    deg: u16,
}

#[derive(Debug, Deserialize)]
struct OwResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl OwResponse {
    fn into_reading(self) -> Result<WeatherReading, DashboardError> {
        let observed_at = DateTime::<Utc>::from_timestamp(self.dt, 0).ok_or_else(|| {
            DashboardError::Shape(format!("observation timestamp {} out of range", self.dt))
        })?;

        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| DashboardError::Shape("weather array was empty".to_string()))?;

        Ok(WeatherReading {
            location_name: self.name,
            observed_at,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            temp_min: self.main.temp_min,
            temp_max: self.main.temp_max,
            humidity: self.main.humidity,
            pressure: self.main.pressure,
            condition: condition.main,
            description: condition.description,
            wind_speed: self.wind.speed,
            wind_deg: self.wind.deg,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let cut: String = body.chars().take(MAX).collect();
        format!("{cut}...")
    } else {
        body.to_string()
    }
}
