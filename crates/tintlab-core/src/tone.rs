//! Saturation and contrast, applied after the filter's color stage.
//!
//! ## Order
//! 1. Saturation: each channel moves toward (or away from) the luma of the
//!    incoming pixel. Luma is computed once, before any channel changes.
//! 2. Contrast: each channel is scaled about the fixed midpoint 128.
//!
//! Neither step clamps. The midpoint stays at 128 whatever the pixel's
//! actual range, so output matches existing renders bit for bit.

use crate::luminance::luma;

/// Pivot for the contrast step, on the 0-255 scale.
pub const CONTRAST_MIDPOINT: f64 = 128.0;

/// Apply saturation then contrast to an RGB triple.
///
/// `saturation = 1` and `contrast = 1` leave the input unchanged.
#[inline]
pub fn apply_tone(r: f64, g: f64, b: f64, saturation: f64, contrast: f64) -> (f64, f64, f64) {
    let (r, g, b) = apply_saturation(r, g, b, saturation);
    apply_contrast(r, g, b, contrast)
}

/// Interpolate each channel toward the pixel's luma.
///
/// `0` gives full grayscale, `1` is unchanged, values above `1` push
/// channels further from gray.
#[inline]
pub fn apply_saturation(r: f64, g: f64, b: f64, saturation: f64) -> (f64, f64, f64) {
    let gray = luma(r, g, b);
    (
        gray + (r - gray) * saturation,
        gray + (g - gray) * saturation,
        gray + (b - gray) * saturation,
    )
}

/// Scale each channel about [`CONTRAST_MIDPOINT`].
#[inline]
pub fn apply_contrast(r: f64, g: f64, b: f64, contrast: f64) -> (f64, f64, f64) {
    (
        (r - CONTRAST_MIDPOINT) * contrast + CONTRAST_MIDPOINT,
        (g - CONTRAST_MIDPOINT) * contrast + CONTRAST_MIDPOINT,
        (b - CONTRAST_MIDPOINT) * contrast + CONTRAST_MIDPOINT,
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: saturation 1 and contrast 1 is the identity.
        #[test]
        fn prop_unit_parameters_are_identity(
            r in -300.0f64..600.0,
            g in -300.0f64..600.0,
            b in -300.0f64..600.0,
        ) {
            let (nr, ng, nb) = apply_tone(r, g, b, 1.0, 1.0);
            prop_assert!((nr - r).abs() < 1e-9);
            prop_assert!((ng - g).abs() < 1e-9);
            prop_assert!((nb - b).abs() < 1e-9);
        }

        /// Property: saturation never changes a pixel's luma.
        #[test]
        fn prop_saturation_preserves_luma(
            r in 0.0f64..255.0,
            g in 0.0f64..255.0,
            b in 0.0f64..255.0,
            saturation in -2.0f64..4.0,
        ) {
            let (nr, ng, nb) = apply_saturation(r, g, b, saturation);
            prop_assert!((luma(nr, ng, nb) - luma(r, g, b)).abs() < 1e-6);
        }
    }
}
