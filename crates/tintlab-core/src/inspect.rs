//! Per-pixel "show the math" inspector.
//!
//! Recomputes the pipeline for one source pixel and keeps every stage for
//! display. It shares [`trace_pixel`] with the frame loop, so the final
//! values shown always equal what the preview rendered.
//!
//! Also provides the display helpers (bit patterns, float formatting),
//! pointer→image coordinate mapping and a latest-wins [`PointerQueue`] that
//! limits inspection to one computation per animation frame.

use serde::Serialize;
use thiserror::Error;

use crate::filters::FilterDefinition;
use crate::frame::FrameBuffer;
use crate::pipeline::trace_pixel;
use crate::AdjustmentParameters;

/// Shown in every field when there is nothing to inspect.
pub const PLACEHOLDER: &str = "—";

/// Shown as the position when the pointer is outside the image.
pub const OUTSIDE_IMAGE: &str = "outside image";

/// Errors from pixel inspection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InspectError {
    /// The requested coordinate is not inside the frame
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Every intermediate value for one inspected pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelTrace {
    pub x: u32,
    pub y: u32,
    /// Source RGBA.
    pub original: [u8; 4],
    /// After the filter's color transform (unclamped).
    pub after_filter: [f64; 3],
    /// After saturation and contrast (unclamped).
    pub after_tone: [f64; 3],
    /// After strength blending, before clamping and rounding.
    pub blended: [f64; 3],
    /// Final RGB as rendered.
    pub final_rgb: [u8; 3],
}

/// Inspect the pixel at `(x, y)` of the source frame.
///
/// # Errors
///
/// Returns `InspectError::OutOfBounds` if `(x, y)` is outside the frame.
pub fn inspect_pixel(
    frame: &FrameBuffer,
    x: u32,
    y: u32,
    filter: &FilterDefinition,
    params: &AdjustmentParameters,
) -> Result<PixelTrace, InspectError> {
    let original = frame.pixel(x, y).ok_or(InspectError::OutOfBounds {
        x,
        y,
        width: frame.width(),
        height: frame.height(),
    })?;

    let stages = trace_pixel(original, filter, params);

    Ok(PixelTrace {
        x,
        y,
        original,
        after_filter: stages.after_filter,
        after_tone: stages.after_tone,
        blended: stages.blended,
        final_rgb: [stages.output[0], stages.output[1], stages.output[2]],
    })
}

/// Format a byte as 8 zero-padded binary digits.
pub fn to_bits(value: u8) -> String {
    format!("{:08b}", value)
}

/// Format a stage value: integers print bare, others with two decimals.
///
/// Values within 0.005 of an integer count as integers.
pub fn format_float(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 0.005 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn format_triple(values: &[f64; 3]) -> String {
    format!(
        "{} , {} , {}",
        format_float(values[0]),
        format_float(values[1]),
        format_float(values[2])
    )
}

/// Text lines for the inspector panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceSummary {
    pub position: String,
    pub original_rgb: String,
    pub original_bits: String,
    pub after_filter: String,
    pub after_tone: String,
    pub final_rgb: String,
    pub final_bits: String,
}

impl TraceSummary {
    /// Every line set to [`PLACEHOLDER`].
    pub fn placeholder() -> Self {
        Self {
            position: PLACEHOLDER.to_string(),
            original_rgb: PLACEHOLDER.to_string(),
            original_bits: PLACEHOLDER.to_string(),
            after_filter: PLACEHOLDER.to_string(),
            after_tone: PLACEHOLDER.to_string(),
            final_rgb: PLACEHOLDER.to_string(),
            final_bits: PLACEHOLDER.to_string(),
        }
    }

    /// Placeholder lines with the position reading [`OUTSIDE_IMAGE`].
    pub fn outside_image() -> Self {
        Self {
            position: OUTSIDE_IMAGE.to_string(),
            ..Self::placeholder()
        }
    }
}

impl PixelTrace {
    /// Render this trace as inspector text lines.
    pub fn summary(&self) -> TraceSummary {
        let [r, g, b, a] = self.original;
        let [fr, fg, fb] = self.final_rgb;
        TraceSummary {
            position: format!("({}, {})", self.x, self.y),
            original_rgb: format!("R: {}  G: {}  B: {}", r, g, b),
            original_bits: format!(
                "bits: R {}  •  G {}  •  B {}  •  A {}",
                to_bits(r),
                to_bits(g),
                to_bits(b),
                a
            ),
            after_filter: format_triple(&self.after_filter),
            after_tone: format_triple(&self.after_tone),
            final_rgb: format!("{} , {} , {}", fr, fg, fb),
            final_bits: format!(
                "final bits: R {}  •  G {}  •  B {}",
                to_bits(fr),
                to_bits(fg),
                to_bits(fb)
            ),
        }
    }
}

/// On-screen rectangle the image is drawn into, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Map a client-space pointer position to an image pixel.
///
/// Returns `None` if the pointer falls outside the image, the display
/// rectangle has no area, or any input is not finite.
pub fn map_pointer(
    client_x: f64,
    client_y: f64,
    rect: &DisplayRect,
    image_width: u32,
    image_height: u32,
) -> Option<(u32, u32)> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }

    let x = ((client_x - rect.left) * (image_width as f64 / rect.width)).floor();
    let y = ((client_y - rect.top) * (image_height as f64 / rect.height)).floor();

    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    if x < 0.0 || y < 0.0 || x >= image_width as f64 || y >= image_height as f64 {
        return None;
    }
    Some((x as u32, y as u32))
}

/// Latest-wins pointer coalescing.
///
/// Pointer moves arrive faster than the display refreshes. Each move
/// overwrites the pending position; only the newest one is inspected when
/// the next frame fires.
#[derive(Debug, Clone, Default)]
pub struct PointerQueue {
    pending: Option<(u32, u32)>,
    frame_requested: bool,
}

impl PointerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer position.
    ///
    /// Returns `true` when the caller must schedule a frame callback, i.e.
    /// when none is already outstanding.
    pub fn push(&mut self, pos: (u32, u32)) -> bool {
        self.pending = Some(pos);
        if self.frame_requested {
            false
        } else {
            self.frame_requested = true;
            true
        }
    }

    /// Drop the pending position, e.g. when the pointer leaves the image.
    ///
    /// An outstanding frame request stays outstanding and will find nothing.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Called from the frame callback; yields the newest position, if any.
    pub fn take(&mut self) -> Option<(u32, u32)> {
        self.frame_requested = false;
        self.pending.take()
    }

    /// Check whether a frame request is outstanding.
    pub fn is_frame_requested(&self) -> bool {
        self.frame_requested
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::filters::list;
    use crate::pipeline::process_pixel;
    use proptest::prelude::*;

    proptest! {
        /// Property: the inspector's final values equal the frame pipeline's.
        #[test]
        fn prop_trace_matches_pipeline(
            px in prop::array::uniform4(any::<u8>()),
            idx in 0..list().len(),
            strength in -1.0f64..2.0,
            saturation in -3.0f64..3.0,
            contrast in -3.0f64..3.0,
        ) {
            let params = AdjustmentParameters { strength, saturation, contrast };
            let frame = FrameBuffer::new(1, 1, px.to_vec()).unwrap();
            let trace = inspect_pixel(&frame, 0, 0, &list()[idx], &params).unwrap();
            let out = process_pixel(px, &list()[idx], &params);
            prop_assert_eq!(trace.final_rgb, [out[0], out[1], out[2]]);
            prop_assert_eq!(trace.original, px);
        }

        /// Property: bit strings are always 8 binary digits that parse back.
        #[test]
        fn prop_bits_parse_back(value in any::<u8>()) {
            let bits = to_bits(value);
            prop_assert_eq!(bits.len(), 8);
            prop_assert_eq!(u8::from_str_radix(&bits, 2).unwrap(), value);
        }
    }
}
