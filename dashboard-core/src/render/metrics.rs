//! "Weather Metrics" panel: five fixed-size labeled cards in a single row,
//! colored by position from the fixed palette.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::DashboardError;
use crate::model::{Units, WeatherReading};

use super::theme;

pub(crate) const CARD_WIDTH: f64 = 0.18;
pub(crate) const CARD_SPACING: f64 = 0.05;
pub(crate) const CARD_LEFT_MARGIN: f64 = 0.05;
pub(crate) const CARD_BOTTOM: f64 = 0.1;
pub(crate) const CARD_HEIGHT: f64 = 0.8;

/// Left edge of the card at `index`, in panel-relative coordinates.
pub(crate) fn card_left(index: usize) -> f64 {
    CARD_LEFT_MARGIN + index as f64 * (CARD_WIDTH + CARD_SPACING)
}

fn metric_values(reading: &WeatherReading, units: Units) -> [(&'static str, String); 5] {
    [
        ("Temperature", format!("{:.1}{}", reading.temperature, units.temp_suffix())),
        ("Feels Like", format!("{:.1}{}", reading.feels_like, units.temp_suffix())),
        ("Humidity", format!("{}%", reading.humidity)),
        ("Pressure", format!("{} hPa", reading.pressure)),
        ("Wind Speed", format!("{} {}", reading.wind_speed, units.speed_suffix())),
    ]
}

pub(super) fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    reading: &WeatherReading,
    units: Units,
) -> Result<(), DashboardError> {
    let mut chart = ChartBuilder::on(area)
        .caption("Weather Metrics", theme::panel_title())
        .margin(12)
        .build_cartesian_2d(0f64..1f64, 0f64..1f64)
        .map_err(DashboardError::render)?;

    for (index, (name, value)) in metric_values(reading, units).into_iter().enumerate() {
        let left = card_left(index);
        let right = left + CARD_WIDTH;
        let top = CARD_BOTTOM + CARD_HEIGHT;
        let color = theme::CARD_PALETTE[index % theme::CARD_PALETTE.len()];

        chart
            .draw_series([
                Rectangle::new([(left, CARD_BOTTOM), (right, top)], color.mix(0.8).filled()),
            ])
            .map_err(DashboardError::render)?;
        chart
            .draw_series([Rectangle::new(
                [(left, CARD_BOTTOM), (right, top)],
                ShapeStyle::from(&theme::CARD_BORDER).stroke_width(2),
            )])
            .map_err(DashboardError::render)?;

        let center_x = left + CARD_WIDTH / 2.0;
        chart
            .draw_series([
                Text::new(name.to_string(), (center_x, top - 0.15), theme::centered_bold(23.0, &WHITE)),
                Text::new(value, (center_x, CARD_BOTTOM + CARD_HEIGHT / 2.0 - 0.1), theme::centered(37.0, &WHITE)),
            ])
            .map_err(DashboardError::render)?;
    }

    Ok(())
}
