//! "Temperature Range" panel: a horizontal track spanning [min, max], a
//! filled sub-bar from min to the current value, and a marker line at the
//! current value.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::DashboardError;
use crate::model::{Units, WeatherReading};

use super::theme;

/// Horizontal axis bounds: two degrees of headroom on either side.
pub(crate) fn axis_bounds(temp_min: f64, temp_max: f64) -> (f64, f64) {
    (temp_min - 2.0, temp_max + 2.0)
}

pub(super) fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    reading: &WeatherReading,
    units: Units,
) -> Result<(), DashboardError> {
    let (low, high) = axis_bounds(reading.temp_min, reading.temp_max);
    let current = reading.temperature;

    let mut chart = ChartBuilder::on(area)
        .caption("Temperature Range", theme::panel_title())
        .margin(16)
        .x_label_area_size(36)
        .build_cartesian_2d(low..high, 0f64..1f64)
        .map_err(DashboardError::render)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .disable_y_axis()
        .x_labels(8)
        .label_style(theme::label(18.0, &theme::TITLE))
        .light_line_style(BLACK.mix(0.15))
        .draw()
        .map_err(DashboardError::render)?;

    chart
        .draw_series([
            Rectangle::new([(reading.temp_min, 0.35), (reading.temp_max, 0.65)], theme::TRACK.filled()),
            Rectangle::new([(reading.temp_min, 0.35), (current, 0.65)], theme::ACCENT.filled()),
        ])
        .map_err(DashboardError::render)?;

    // marker line at the current value
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(current, 0.30), (current, 0.70)],
            ShapeStyle::from(&theme::TITLE).stroke_width(3),
        )))
        .map_err(DashboardError::render)?;

    let suffix = units.temp_suffix();
    chart
        .draw_series([
            Text::new(
                format!("Min: {:.1}{suffix}", reading.temp_min),
                (reading.temp_min, 0.72),
                theme::label(18.0, &theme::TITLE).pos(Pos::new(HPos::Left, VPos::Bottom)),
            ),
            Text::new(
                format!("Max: {:.1}{suffix}", reading.temp_max),
                (reading.temp_max, 0.72),
                theme::label(18.0, &theme::TITLE).pos(Pos::new(HPos::Right, VPos::Bottom)),
            ),
            Text::new(
                format!("Current: {:.1}{suffix}", current),
                (current, 0.18),
                theme::centered_bold(21.0, &theme::TITLE),
            ),
        ])
        .map_err(DashboardError::render)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_add_two_degrees_of_headroom() {
        let (low, high) = axis_bounds(27.0, 31.2);
        assert!((low - 25.0).abs() < f64::EPSILON);
        assert!((high - 33.2).abs() < f64::EPSILON);
    }

    #[test]
    fn bounds_work_below_zero() {
        let (low, high) = axis_bounds(-12.5, -3.0);
        assert!((low - -14.5).abs() < f64::EPSILON);
        assert!((high - -1.0).abs() < f64::EPSILON);
    }
}
