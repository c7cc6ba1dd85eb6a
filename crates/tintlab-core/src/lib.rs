//! Tintlab Core - Photo filter preview library
//!
//! This crate provides the core processing for Tintlab: the filter catalog,
//! the per-pixel color/tone/blend pipeline, thumbnail rendering, the pixel
//! inspector, image decode/encode and the edit session that ties them together.

pub mod blend;
pub mod color;
pub mod decode;
pub mod encode;
pub mod filters;
pub mod frame;
pub mod inspect;
pub mod luminance;
pub mod pipeline;
pub mod session;
pub mod thumbnail;
pub mod tone;

pub use color::{ColorMatrix, ColorTransform};
pub use filters::{FilterDefinition, DEFAULT_FILTER_ID};
pub use frame::{FrameBuffer, FrameError};
pub use inspect::{inspect_pixel, InspectError, PixelTrace};
pub use pipeline::{process, process_in_place, process_pixel};
pub use session::{EditSession, SessionError};
pub use thumbnail::{render_thumbnails, Thumbnail, THUMBNAIL_WIDTH};

/// Strength, saturation and contrast for a render.
///
/// No bounds are enforced. Values far outside the slider ranges simply
/// saturate through the final clamp.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AdjustmentParameters {
    /// Blend between original (0.0) and fully filtered (1.0)
    pub strength: f64,
    /// Saturation factor (1.0 = unchanged, 0.0 = grayscale)
    pub saturation: f64,
    /// Contrast factor about the midpoint 128 (1.0 = unchanged)
    pub contrast: f64,
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self {
            strength: 1.0,
            saturation: 1.0,
            contrast: 1.0,
        }
    }
}

impl AdjustmentParameters {
    /// Create parameters with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Strength as a slider label, e.g. `"100%"`.
    pub fn strength_label(&self) -> String {
        format!("{}%", (self.strength * 100.0).round() as i64)
    }

    /// Saturation as a slider label, e.g. `"1.00"`.
    pub fn saturation_label(&self) -> String {
        format!("{:.2}", self.saturation)
    }

    /// Contrast as a slider label, e.g. `"1.00"`.
    pub fn contrast_label(&self) -> String {
        format!("{:.2}", self.contrast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustment_parameters_default() {
        let params = AdjustmentParameters::new();
        assert!(params.is_default());
        assert_eq!(params.strength, 1.0);
        assert_eq!(params.saturation, 1.0);
        assert_eq!(params.contrast, 1.0);
    }

    #[test]
    fn test_adjustment_parameters_not_default() {
        let mut params = AdjustmentParameters::new();
        params.contrast = 1.5;
        assert!(!params.is_default());
    }

    #[test]
    fn test_labels() {
        let mut params = AdjustmentParameters::new();
        assert_eq!(params.strength_label(), "100%");
        assert_eq!(params.saturation_label(), "1.00");
        assert_eq!(params.contrast_label(), "1.00");

        params.strength = 0.456;
        params.saturation = 1.234;
        params.contrast = 0.5;
        assert_eq!(params.strength_label(), "46%");
        assert_eq!(params.saturation_label(), "1.23");
        assert_eq!(params.contrast_label(), "0.50");

        params.strength = 0.0;
        assert_eq!(params.strength_label(), "0%");
    }
}
