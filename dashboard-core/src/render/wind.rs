//! "Wind Direction" panel: a hand-drawn compass with ring grid, eight
//! labeled spokes, and a single vector from the origin to
//! (direction, speed).

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::DashboardError;
use crate::model::{Units, WeatherReading};

use super::theme;

/// Tick labels at 45-degree increments starting at North.
const COMPASS_LABELS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Offset from the compass center for a bearing, in screen coordinates
/// (y grows downwards): 0 degrees points up, angles increase clockwise.
pub(crate) fn compass_offset(bearing_deg: f64, radius: f64) -> (f64, f64) {
    let radians = bearing_deg.to_radians();
    (radius * radians.sin(), -radius * radians.cos())
}

pub(super) fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    reading: &WeatherReading,
    units: Units,
) -> Result<(), DashboardError> {
    let panel = area
        .titled("Wind Direction", theme::panel_title())
        .map_err(DashboardError::render)?;

    let (width, height) = panel.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = f64::from(height.min(width)) * 0.38;

    for step in 1..=3 {
        let ring = radius * f64::from(step) / 3.0;
        panel
            .draw(&Circle::new(center, ring as i32, ShapeStyle::from(&theme::TRACK)))
            .map_err(DashboardError::render)?;
    }

    for (index, label) in COMPASS_LABELS.iter().enumerate() {
        let bearing = 45.0 * index as f64;

        let (dx, dy) = compass_offset(bearing, radius);
        panel
            .draw(&PathElement::new(
                vec![center, (center.0 + dx as i32, center.1 + dy as i32)],
                ShapeStyle::from(&theme::TRACK),
            ))
            .map_err(DashboardError::render)?;

        let (lx, ly) = compass_offset(bearing, radius + 18.0);
        panel
            .draw(&Text::new(
                (*label).to_string(),
                (center.0 + lx as i32, center.1 + ly as i32),
                theme::centered(22.0, &theme::MUTED),
            ))
            .map_err(DashboardError::render)?;
    }

    // Radial scale leaves headroom beyond the observed speed so the tip
    // stays inside the outer ring.
    let scale_max = (reading.wind_speed * 1.25).max(1.0);
    let tip_radius = radius * (reading.wind_speed / scale_max);
    let bearing = f64::from(reading.wind_deg);

    let (dx, dy) = compass_offset(bearing, tip_radius);
    let tip = (center.0 + dx as i32, center.1 + dy as i32);
    panel
        .draw(&PathElement::new(
            vec![center, tip],
            ShapeStyle::from(&theme::ACCENT).stroke_width(3),
        ))
        .map_err(DashboardError::render)?;
    panel
        .draw(&Circle::new(tip, 5, theme::ACCENT.filled()))
        .map_err(DashboardError::render)?;

    let (sx, sy) = compass_offset(bearing, tip_radius + 22.0);
    panel
        .draw(&Text::new(
            format!("{} {}", reading.wind_speed, units.speed_suffix()),
            (center.0 + sx as i32, center.1 + sy as i32),
            theme::centered(22.0, &theme::TITLE),
        ))
        .map_err(DashboardError::render)?;

    // boxed bearing readout at the center
    let readout = format!("{}°", reading.wind_deg);
    panel
        .draw(&Rectangle::new(
            [(center.0 - 36, center.1 - 18), (center.0 + 36, center.1 + 18)],
            WHITE.mix(0.8).filled(),
        ))
        .map_err(DashboardError::render)?;
    panel
        .draw(&Rectangle::new(
            [(center.0 - 36, center.1 - 18), (center.0 + 36, center.1 + 18)],
            ShapeStyle::from(&theme::MUTED),
        ))
        .map_err(DashboardError::render)?;
    panel
        .draw(&Text::new(readout, center, theme::centered(26.0, &theme::TITLE)))
        .map_err(DashboardError::render)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn north_points_up() {
        assert_close(compass_offset(0.0, 10.0), (0.0, -10.0));
    }

    #[test]
    fn cardinal_directions_rotate_clockwise() {
        assert_close(compass_offset(90.0, 10.0), (10.0, 0.0));
        assert_close(compass_offset(180.0, 10.0), (0.0, 10.0));
        assert_close(compass_offset(270.0, 10.0), (-10.0, 0.0));
    }

    #[test]
    fn zero_radius_stays_at_the_center() {
        assert_close(compass_offset(250.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn default_bearing_label_reads_zero_degrees() {
        assert_eq!(format!("{}°", 0u16), "0°");
    }
}
