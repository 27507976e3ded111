use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::DashboardError, model::WeatherReading};

pub mod openweather;

/// A source of current weather observations for a fixed location.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the current observation. One attempt, no retries.
    async fn current(&self) -> Result<WeatherReading, DashboardError>;
}
