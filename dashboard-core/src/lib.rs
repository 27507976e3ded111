//! Core library for the `weather-dashboard` binary.
//!
//! This crate defines:
//! - Configuration handling (location, units, credentials, output path)
//! - The OpenWeatherMap provider behind the [`WeatherProvider`] seam
//! - The dashboard renderer and its five panels
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod render;

pub use config::Config;
pub use error::DashboardError;
pub use model::{Units, WeatherReading};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use render::render_dashboard;
