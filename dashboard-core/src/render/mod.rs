//! Dashboard renderer.
//!
//! Draws one [`WeatherReading`] onto a fixed-layout canvas: a title banner,
//! three panels in the top row (current conditions, temperature range,
//! humidity), a metric-card row, and a wind compass. The canvas is
//! 14x10 in at 120 DPI.

use std::path::Path;

use plotters::prelude::*;
use tracing::{info, warn};

use crate::error::DashboardError;
use crate::model::{Units, WeatherReading};

mod conditions;
mod humidity;
mod metrics;
mod symbols;
mod temp_range;
mod theme;
mod wind;

pub use symbols::symbol_for;

pub const CANVAS_WIDTH: u32 = 1680;
pub const CANVAS_HEIGHT: u32 = 1200;

const TITLE_STRIP_HEIGHT: i32 = 72;

/// Render the full dashboard for one reading and write it to `path`.
///
/// Any failed drawing step aborts the render before the image is written;
/// there is no partial-output recovery.
pub fn render_dashboard(
    reading: &WeatherReading,
    display_name: &str,
    units: Units,
    path: &Path,
) -> Result<(), DashboardError> {
    let root = BitMapBackend::new(path, (CANVAS_WIDTH, CANVAS_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(DashboardError::render)?;

    let banner = format!(
        "{display_name} Weather Dashboard | {} UTC",
        reading.observed_at.format("%Y-%m-%d %H:%M")
    );
    let (title_area, canvas) = root.split_vertically(TITLE_STRIP_HEIGHT);
    let (w, h) = title_area.dim_in_pixel();
    title_area
        .draw(&Text::new(
            banner,
            ((w / 2) as i32, (h / 2) as i32),
            theme::centered_bold(44.0, &theme::TITLE),
        ))
        .map_err(DashboardError::render)?;

    // Row heights in ratio 1 : 1 : 0.5.
    let (_, canvas_height) = canvas.dim_in_pixel();
    let row_height = (canvas_height * 2 / 5) as i32;
    let (top_row, rest) = canvas.split_vertically(row_height);
    let (middle_row, bottom_row) = rest.split_vertically(row_height);

    let top_panels = top_row.split_evenly((1, 3));
    conditions::draw(&top_panels[0], reading, units)?;
    temp_range::draw(&top_panels[1], reading, units)?;
    humidity::draw(&top_panels[2], reading)?;
    metrics::draw(&middle_row, reading, units)?;
    wind::draw(&bottom_row, reading, units)?;

    root.present().map_err(DashboardError::render)?;
    info!(path = %path.display(), "dashboard saved");

    Ok(())
}

/// Hand the saved image to the system handler.
///
/// Best-effort: the artifact already exists, so a viewer failure is reported
/// but does not fail the run.
pub fn present_image(path: &Path) {
    let absolute = match std::fs::canonicalize(path) {
        Ok(p) => p,
        Err(err) => {
            warn!(%err, path = %path.display(), "could not resolve image path");
            return;
        }
    };

    if let Err(err) = webbrowser::open(&format!("file://{}", absolute.display())) {
        warn!(%err, "could not open the image viewer");
    }
}
