//! Static Chart Renderer
//! Draws the price comparison chart off-screen with plotters and encodes it
//! as PNG via the image crate.
//!
//! Layout matches the interactive viewer:
//! 1. Title with APY and maturity
//! 2. Solid zero-coupon curve, dashed linear curve
//! 3. Countdown x-axis (100% on the left, 0% on the right), grid and legend

use crate::charts::plotter::{
    format_countdown_tick, ChartData, LINEAR_LABEL, LINEAR_RGB, X_AXIS_LABEL, Y_AXIS_LABEL,
    ZERO_COUPON_LABEL, ZERO_COUPON_RGB,
};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;
use thiserror::Error;

/// figsize=(10, 6) at 100 dpi
pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Largest accepted width or height in pixels
pub const MAX_DIMENSION: u32 = 16_384;

const DASH_SIZE: i32 = 8;
const DASH_SPACING: i32 = 5;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Drawing error: {0}")]
    Draw(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid image size {width}x{height} (each side must be 1..={})", MAX_DIMENSION)]
    InvalidSize { width: u32, height: u32 },
    #[error("Rendered buffer does not match image size")]
    BufferSizeMismatch,
}

impl ChartError {
    fn draw(e: impl std::fmt::Display) -> Self {
        ChartError::Draw(e.to_string())
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the chart into an in-memory RGB image.
    pub fn render_image(
        data: &ChartData,
        width: u32,
        height: u32,
    ) -> Result<RgbImage, ChartError> {
        let invalid = ChartError::InvalidSize { width, height };
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(invalid);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(3))
            .ok_or(invalid)?;

        let mut buffer = vec![0u8; len];
        {
            let root =
                BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw_chart(&root, data)?;
            root.present().map_err(ChartError::draw)?;
        }

        RgbImage::from_raw(width, height, buffer).ok_or(ChartError::BufferSizeMismatch)
    }

    /// Render the chart and write it to `path` as PNG.
    pub fn save_png(
        data: &ChartData,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), ChartError> {
        let img = Self::render_image(data, width, height)?;
        img.save_with_format(path, ImageFormat::Png)?;
        tracing::info!(path = %path.display(), width, height, "chart written");
        Ok(())
    }

    fn draw_chart(
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        data: &ChartData,
    ) -> Result<(), ChartError> {
        root.fill(&WHITE).map_err(ChartError::draw)?;

        let (y_min, y_max) = data.y_range();
        let zero_coupon_style = rgb(ZERO_COUPON_RGB).stroke_width(2);
        let linear_style = rgb(LINEAR_RGB).stroke_width(2);

        let mut chart = ChartBuilder::on(root)
            .caption(&data.title, ("sans-serif", 20))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(-100f64..0f64, y_min..y_max)
            .map_err(ChartError::draw)?;

        chart
            .configure_mesh()
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .x_label_formatter(&|x| format_countdown_tick(*x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .bold_line_style(BLACK.mix(0.15))
            .light_line_style(BLACK.mix(0.05))
            .draw()
            .map_err(ChartError::draw)?;

        chart
            .draw_series(LineSeries::new(
                data.countdown_points(&data.zero_coupon),
                zero_coupon_style,
            ))
            .map_err(ChartError::draw)?
            .label(ZERO_COUPON_LABEL)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], zero_coupon_style)
            });

        chart
            .draw_series(DashedLineSeries::new(
                data.countdown_points(&data.linear),
                DASH_SIZE,
                DASH_SPACING,
                linear_style,
            ))
            .map_err(ChartError::draw)?
            .label(LINEAR_LABEL)
            .legend(move |(x, y)| {
                // Two short strokes read as a dash in the legend
                EmptyElement::at((x, y))
                    + PathElement::new(vec![(0, 0), (8, 0)], linear_style)
                    + PathElement::new(vec![(12, 0), (20, 0)], linear_style)
            });

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(ChartError::draw)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{PriceCalculator, PricingParameters};

    fn sample_chart() -> ChartData {
        ChartData::from_curves(&PriceCalculator::curves(PricingParameters::default()))
    }

    #[test]
    fn test_rejects_zero_size() {
        let data = sample_chart();
        assert!(matches!(
            StaticChartRenderer::render_image(&data, 0, 600),
            Err(ChartError::InvalidSize {
                width: 0,
                height: 600
            })
        ));
        assert!(matches!(
            StaticChartRenderer::render_image(&data, 800, 0),
            Err(ChartError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        let data = sample_chart();
        assert!(matches!(
            StaticChartRenderer::render_image(&data, u32::MAX, u32::MAX),
            Err(ChartError::InvalidSize { .. })
        ));
        assert!(matches!(
            StaticChartRenderer::render_image(&data, 100_000, 100_000),
            Err(ChartError::InvalidSize { .. })
        ));
        assert!(matches!(
            StaticChartRenderer::render_image(&data, MAX_DIMENSION + 1, 600),
            Err(ChartError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_render_png_in_memory() {
        let data = sample_chart();
        let img = StaticChartRenderer::render_image(&data, 640, 400).unwrap();
        assert_eq!(img.dimensions(), (640, 400));

        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (640, 400));

        // Background is white, curves are drawn on top
        assert!(img.pixels().any(|p| p.0 == [255, 255, 255]));
        assert!(img.pixels().any(|p| p.0 != [255, 255, 255]));
    }

    #[test]
    fn test_draw_error_message() {
        let err = ChartError::draw("font not found");
        assert_eq!(err.to_string(), "Drawing error: font not found");
    }

    #[test]
    fn test_render_png_file() {
        let data = sample_chart();
        let path = std::env::temp_dir().join("pt_curve_render_test.png");

        StaticChartRenderer::save_png(&data, &path, 640, 400).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (640, 400));
        std::fs::remove_file(&path).unwrap();
    }
}
