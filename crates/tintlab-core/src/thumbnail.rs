//! Filter thumbnails for the catalog grid.
//!
//! The source frame is downscaled once to a fixed width, then every catalog
//! filter is rendered onto a copy at full strength with neutral saturation
//! and contrast. Slider values never affect thumbnails.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgba};
use log::debug;

use crate::filters::{self, FilterDefinition};
use crate::frame::FrameBuffer;
use crate::pipeline::process;
use crate::AdjustmentParameters;

/// Width of every thumbnail in pixels. Height follows the aspect ratio.
pub const THUMBNAIL_WIDTH: u32 = 120;

/// A rendered preview of one filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    /// Id of the filter this thumbnail shows.
    pub filter_id: &'static str,
    /// Display name of the filter.
    pub name: &'static str,
    /// The rendered pixels.
    pub frame: FrameBuffer,
}

/// Calculate thumbnail dimensions for a source of `width × height`.
///
/// Width is always [`THUMBNAIL_WIDTH`]; height is scaled and rounded, and
/// never below 1. Zero-area sources give `(0, 0)`.
pub fn thumbnail_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    let scaled = (height as f64 / width as f64 * THUMBNAIL_WIDTH as f64).round() as u32;
    (THUMBNAIL_WIDTH, scaled.max(1))
}

/// Downscale a frame to thumbnail size using bilinear interpolation.
///
/// Empty frames come back empty.
pub fn downscale_for_thumbnail(frame: &FrameBuffer) -> FrameBuffer {
    let (width, height) = thumbnail_dimensions(frame.width(), frame.height());
    if width == 0 {
        return FrameBuffer::default();
    }

    // Fast path: if dimensions match, just clone
    if frame.width() == width && frame.height() == height {
        return frame.clone();
    }

    let Some(view) =
        ImageBuffer::<Rgba<u8>, &[u8]>::from_raw(frame.width(), frame.height(), frame.pixels())
    else {
        return FrameBuffer::default();
    };

    FrameBuffer::from_rgba_image(imageops::resize(&view, width, height, FilterType::Triangle))
}

/// Render one filter onto an already-downscaled base frame.
pub fn render_thumbnail(base: &FrameBuffer, filter: &'static FilterDefinition) -> Thumbnail {
    Thumbnail {
        filter_id: filter.id,
        name: filter.name,
        frame: process(base, filter, &AdjustmentParameters::default()),
    }
}

/// Render a thumbnail for every catalog filter, in catalog order.
///
/// Returns an empty list for an empty source.
pub fn render_thumbnails(source: &FrameBuffer) -> Vec<Thumbnail> {
    let base = downscale_for_thumbnail(source);
    if base.is_empty() {
        return Vec::new();
    }

    debug!(
        "rendering {} thumbnails at {}x{}",
        filters::list().len(),
        base.width(),
        base.height()
    );

    filters::list()
        .iter()
        .map(|filter| render_thumbnail(&base, filter))
        .collect()
}
