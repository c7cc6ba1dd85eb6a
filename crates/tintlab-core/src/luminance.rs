//! Luma calculation using ITU-R BT.601 weights.
//!
//! Shared by the `moon` grayscale transform and the saturation step of the
//! tone adjustment, so both agree on what "gray" means for a pixel.

/// BT.601 weight for the red channel.
pub const LUMA_R: f64 = 0.299;

/// BT.601 weight for the green channel.
pub const LUMA_G: f64 = 0.587;

/// BT.601 weight for the blue channel.
pub const LUMA_B: f64 = 0.114;

/// Calculate luma from channel values on the 0-255 scale.
///
/// Inputs are not clamped; out-of-range values from an earlier stage are
/// weighted the same as in-range ones.
#[inline]
pub fn luma(r: f64, g: f64, b: f64) -> f64 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}
