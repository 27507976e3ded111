//! "Current Conditions" panel: condition symbol, description, and the
//! current/feels-like temperatures as stacked centered text.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::DashboardError;
use crate::model::{Units, WeatherReading};

use super::{symbols, theme};

pub(super) fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    reading: &WeatherReading,
    units: Units,
) -> Result<(), DashboardError> {
    let panel = area
        .titled("Current Conditions", theme::panel_title())
        .map_err(DashboardError::render)?;

    let (width, height) = panel.dim_in_pixel();
    let center_x = (width / 2) as i32;
    let line_y = |frac: f64| (f64::from(height) * frac) as i32;

    let symbol = symbols::symbol_for(&reading.condition);
    let lines = [
        Text::new(
            symbol.to_string(),
            (center_x, line_y(0.30)),
            theme::centered(100.0, &theme::TITLE),
        ),
        Text::new(
            capitalize(&reading.description),
            (center_x, line_y(0.50)),
            theme::centered(37.0, &theme::DESCRIPTION),
        ),
        Text::new(
            format!("{:.1}{}", reading.temperature, units.temp_suffix()),
            (center_x, line_y(0.70)),
            theme::centered(60.0, &theme::ACCENT),
        ),
        Text::new(
            format!("Feels like: {:.1}{}", reading.feels_like, units.temp_suffix()),
            (center_x, line_y(0.90)),
            theme::centered(23.0, &theme::MUTED),
        ),
    ];

    for line in lines {
        panel.draw(&line).map_err(DashboardError::render)?;
    }

    Ok(())
}

/// Sentence-case for the wire's lower-case descriptions.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
