//! Full-frame filter pipeline.
//!
//! ## Stage Order
//! 1. Color transform (the selected filter)
//! 2. Tone adjustment (saturation, then contrast)
//! 3. Strength blend against the untouched channel, clamp and round
//!
//! Alpha passes through unchanged. Pixels are independent of each other.

use log::debug;

use crate::blend::{clamp_byte, mix};
use crate::filters::FilterDefinition;
use crate::frame::{FrameBuffer, CHANNELS};
use crate::tone::apply_tone;
use crate::AdjustmentParameters;

/// Intermediate values for one pixel through every stage.
///
/// The frame loop only keeps `output`; the inspector shows all of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelStages {
    /// Channel values after the filter's color transform.
    pub after_filter: [f64; 3],
    /// Channel values after saturation and contrast.
    pub after_tone: [f64; 3],
    /// Strength-blended values before clamping and rounding.
    pub blended: [f64; 3],
    /// Final RGBA output.
    pub output: [u8; 4],
}

/// Run a single RGBA pixel through the pipeline, keeping every stage.
pub fn trace_pixel(
    rgba: [u8; 4],
    filter: &FilterDefinition,
    params: &AdjustmentParameters,
) -> PixelStages {
    let r = rgba[0] as f64;
    let g = rgba[1] as f64;
    let b = rgba[2] as f64;

    let (fr, fg, fb) = filter.apply(r, g, b);
    let (tr, tg, tb) = apply_tone(fr, fg, fb, params.saturation, params.contrast);

    let s = params.strength;
    let blended = [mix(r, tr, s), mix(g, tg, s), mix(b, tb, s)];
    PixelStages {
        after_filter: [fr, fg, fb],
        after_tone: [tr, tg, tb],
        blended,
        output: [
            clamp_byte(blended[0]),
            clamp_byte(blended[1]),
            clamp_byte(blended[2]),
            rgba[3],
        ],
    }
}

/// Run a single RGBA pixel through the pipeline.
#[inline]
pub fn process_pixel(
    rgba: [u8; 4],
    filter: &FilterDefinition,
    params: &AdjustmentParameters,
) -> [u8; 4] {
    trace_pixel(rgba, filter, params).output
}

/// Apply a filter and adjustments to a frame in place.
///
/// Each pixel's channels are read before any of them is written.
pub fn process_in_place(
    frame: &mut FrameBuffer,
    filter: &FilterDefinition,
    params: &AdjustmentParameters,
) {
    if frame.is_empty() {
        return;
    }

    debug!(
        "processing {}x{} frame with filter '{}'",
        frame.width(),
        frame.height(),
        filter.id
    );

    for chunk in frame.pixels_mut().chunks_exact_mut(CHANNELS) {
        let out = process_pixel([chunk[0], chunk[1], chunk[2], chunk[3]], filter, params);
        chunk.copy_from_slice(&out);
    }
}

/// Apply a filter and adjustments, returning a new frame.
///
/// The source frame is left untouched.
///
/// # Example
/// ```
/// use tintlab_core::{filters, pipeline::process, AdjustmentParameters, FrameBuffer};
///
/// let frame = FrameBuffer::new(1, 1, vec![200, 100, 50, 255]).unwrap();
/// let out = process(&frame, filters::lookup("aden"), &AdjustmentParameters::default());
/// assert_eq!(out.pixels(), &[200, 89, 42, 255]);
/// ```
pub fn process(
    frame: &FrameBuffer,
    filter: &FilterDefinition,
    params: &AdjustmentParameters,
) -> FrameBuffer {
    let mut output = frame.clone();
    process_in_place(&mut output, filter, params);
    output
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::filters::{list, lookup};
    use proptest::prelude::*;

    fn rgba() -> impl Strategy<Value = [u8; 4]> {
        prop::array::uniform4(any::<u8>())
    }

    fn filter_index() -> impl Strategy<Value = usize> {
        0..list().len()
    }

    proptest! {
        /// Property: strength 0 returns the input for every filter and
        /// any tone parameters.
        #[test]
        fn prop_zero_strength_identity(
            px in rgba(),
            idx in filter_index(),
            saturation in -5.0f64..5.0,
            contrast in -5.0f64..5.0,
        ) {
            let p = AdjustmentParameters { strength: 0.0, saturation, contrast };
            prop_assert_eq!(process_pixel(px, &list()[idx], &p), px);
        }

        /// Property: `original` at default parameters is the identity.
        #[test]
        fn prop_original_default_identity(px in rgba()) {
            prop_assert_eq!(
                process_pixel(px, lookup("original"), &AdjustmentParameters::default()),
                px
            );
        }

        /// Property: `moon` always yields equal RGB channels at full strength.
        #[test]
        fn prop_moon_is_gray(px in rgba(), saturation in -3.0f64..3.0, contrast in -3.0f64..3.0) {
            let p = AdjustmentParameters { strength: 1.0, saturation, contrast };
            let out = process_pixel(px, lookup("moon"), &p);
            prop_assert_eq!(out[0], out[1]);
            prop_assert_eq!(out[1], out[2]);
        }

        /// Property: alpha is preserved for any filter and parameters.
        #[test]
        fn prop_alpha_preserved(
            px in rgba(),
            idx in filter_index(),
            strength in -2.0f64..3.0,
            saturation in -5.0f64..5.0,
            contrast in -5.0f64..5.0,
        ) {
            let p = AdjustmentParameters { strength, saturation, contrast };
            prop_assert_eq!(process_pixel(px, &list()[idx], &p)[3], px[3]);
        }
    }
}
