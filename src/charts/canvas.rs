//! Off-screen drawing surface
//!
//! Charts draw into an in-memory RGB buffer through the plotters bitmap
//! backend; the finished buffer is encoded as PNG.

use std::error::Error;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::{BitMapBackend, IntoDrawingArea, WHITE};

use crate::error::{DashboardError, DashboardResult};

pub(crate) type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

pub(crate) type DrawResult = Result<(), Box<dyn Error>>;

/// Upper bound on either side of a chart, in pixels
pub const MAX_SIDE: u32 = 4096;

/// Draw onto a white `width` x `height` canvas and return the PNG bytes
pub(crate) fn render_png<F>(width: u32, height: u32, draw: F) -> DashboardResult<Vec<u8>>
where
    F: FnOnce(&Canvas<'_>) -> DrawResult,
{
    if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
        return Err(DashboardError::Chart(format!(
            "invalid canvas size {}x{}",
            width, height
        )));
    }

    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;
        draw(&root).map_err(|e| DashboardError::Chart(e.to_string()))?;
        root.present().map_err(chart_error)?;
    }

    encode_png(&buffer, width, height)
}

/// Encode a packed RGB8 buffer as PNG
pub(crate) fn encode_png(buffer: &[u8], width: u32, height: u32) -> DashboardResult<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(buffer, width, height, ColorType::Rgb8)
        .map_err(chart_error)?;
    Ok(png)
}

fn chart_error<E: std::fmt::Display>(err: E) -> DashboardError {
    DashboardError::Chart(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;
    use plotters::prelude::{Color, Rectangle, RED};

    #[test]
    fn test_render_png_produces_png() {
        let png = render_png(40, 20, |root| {
            root.draw(&Rectangle::new([(0, 0), (10, 10)], RED.filled()))?;
            Ok(())
        })
        .unwrap();

        assert_eq!(&png[1..4], b"PNG");
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 20));
    }

    #[test]
    fn test_render_png_rejects_zero_size() {
        assert!(render_png(0, 10, |_| Ok(())).is_err());
        assert!(render_png(10, MAX_SIDE + 1, |_| Ok(())).is_err());
    }
}
