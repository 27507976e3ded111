//! "Humidity" panel: one stacked vertical bar on a 0-100 axis with a
//! centered percentage label. The unfilled segment carries the fixed "Dry"
//! label regardless of the value.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::DashboardError;
use crate::model::WeatherReading;

use super::theme;

const BAR_HALF_WIDTH: f64 = 0.3;

/// Vertical spans of the filled and unfilled bar segments.
pub(crate) fn bar_segments(humidity: u8) -> ((f64, f64), (f64, f64)) {
    let level = f64::from(humidity);
    ((0.0, level), (level, 100.0))
}

pub(super) fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    reading: &WeatherReading,
) -> Result<(), DashboardError> {
    let (filled, empty) = bar_segments(reading.humidity);

    let mut chart = ChartBuilder::on(area)
        .caption("Humidity", theme::panel_title())
        .margin(16)
        .y_label_area_size(44)
        .build_cartesian_2d(-0.5f64..0.5f64, 0f64..100f64)
        .map_err(DashboardError::render)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_x_axis()
        .y_labels(6)
        .label_style(theme::label(18.0, &theme::TITLE))
        .light_line_style(BLACK.mix(0.15))
        .draw()
        .map_err(DashboardError::render)?;

    chart
        .draw_series([
            Rectangle::new(
                [(-BAR_HALF_WIDTH, filled.0), (BAR_HALF_WIDTH, filled.1)],
                theme::HUMIDITY_FILL.filled(),
            ),
            Rectangle::new(
                [(-BAR_HALF_WIDTH, empty.0), (BAR_HALF_WIDTH, empty.1)],
                theme::HUMIDITY_EMPTY.filled(),
            ),
        ])
        .map_err(DashboardError::render)?;

    chart
        .draw_series([
            Text::new(
                format!("{}%", reading.humidity),
                (0.0, (filled.0 + filled.1) / 2.0),
                theme::centered(40.0, &WHITE),
            ),
            Text::new(
                "Dry".to_string(),
                (0.0, (empty.0 + empty.1) / 2.0),
                theme::centered(20.0, &theme::MUTED),
            ),
        ])
        .map_err(DashboardError::render)?;

    Ok(())
}
