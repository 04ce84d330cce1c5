use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::core::ballistics::TrajectoryResult;
use crate::core::window::AxisWindow;

pub const DEFAULT_TITLE: &str = "Bullet Trajectory of Beretta M9 Handgun";
pub const DISTANCE_LABEL: &str = "Distance (m)";
pub const HEIGHT_LABEL: &str = "Height (m)";

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Trajectory has no samples; nothing to plot.")]
    EmptyTrajectory,

    #[error("Unsupported chart format for '{0}'. Use .png, .bmp, .jpg or .svg.")]
    UnsupportedFormat(String),

    #[error("Drawing failed: {0}")]
    Drawing(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    pub grid: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            x_label: DISTANCE_LABEL.to_string(),
            y_label: HEIGHT_LABEL.to_string(),
            // 10x5 inch figure at 100 dpi
            width: 1000,
            height: 500,
            grid: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartFormat {
    Bitmap,
    Svg,
}

impl ChartFormat {
    pub fn from_path(path: &Path) -> Result<Self, PlotError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("png" | "bmp" | "jpg" | "jpeg") => Ok(Self::Bitmap),
            _ => Err(PlotError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

fn drawing_error(err: impl std::fmt::Display) -> PlotError {
    PlotError::Drawing(err.to_string())
}

/// Draws the `(x, y)` arc as a line chart and writes it to `path`.
///
/// The backend follows the file extension. Empty trajectories are rejected
/// up front so callers never get a blank chart.
pub fn render_chart(
    result: &TrajectoryResult,
    options: &ChartOptions,
    path: &Path,
) -> Result<(), PlotError> {
    if result.is_empty() {
        return Err(PlotError::EmptyTrajectory);
    }

    let size = (options.width, options.height);
    match ChartFormat::from_path(path)? {
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_chart(&root, result, options)?;
        }
        ChartFormat::Bitmap => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_chart(&root, result, options)?;
        }
    }

    info!(path = %path.display(), samples = result.len(), "wrote trajectory chart");
    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    result: &TrajectoryResult,
    options: &ChartOptions,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(drawing_error)?;

    let window = AxisWindow::fit(result);
    let mut chart = ChartBuilder::on(root)
        .caption(&options.title, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(window.x_min..window.x_max, window.y_min..window.y_max)
        .map_err(drawing_error)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(options.x_label.as_str())
        .y_desc(options.y_label.as_str());
    if !options.grid {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(drawing_error)?;

    chart
        .draw_series(LineSeries::new(
            result.points(),
            RGBColor(54, 123, 245).stroke_width(2),
        ))
        .map_err(drawing_error)?;

    root.present().map_err(drawing_error)?;
    Ok(())
}
