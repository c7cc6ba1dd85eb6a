//! Per-pixel color transforms.
//!
//! A filter's color stage is either a 3x4 affine matrix, the luma-weighted
//! grayscale special case, or identity. Transforms never clamp: values may
//! leave the 0-255 range here and are clamped only by the blend stage.

use serde::{Deserialize, Serialize};

use crate::luminance::luma;

/// 3x4 affine color matrix.
///
/// Stored row-major: `[m0, m1, m2, m3]` produces red, `[m4..m7]` green and
/// `[m8..m11]` blue. The first three entries of each row weight the input
/// channels and the fourth is a bias on the 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorMatrix(pub [f64; 12]);

impl ColorMatrix {
    /// The matrix that leaves every channel unchanged.
    pub const IDENTITY: ColorMatrix = ColorMatrix([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0,
    ]);

    /// Create a matrix from its 12 coefficients.
    pub const fn new(coefficients: [f64; 12]) -> Self {
        Self(coefficients)
    }

    /// Multiply an RGB triple through the matrix.
    #[inline]
    pub fn apply(&self, r: f64, g: f64, b: f64) -> (f64, f64, f64) {
        let m = &self.0;
        (
            m[0] * r + m[1] * g + m[2] * b + m[3],
            m[4] * r + m[5] * g + m[6] * b + m[7],
            m[8] * r + m[9] * g + m[10] * b + m[11],
        )
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The color stage of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "matrix", rename_all = "snake_case")]
pub enum ColorTransform {
    /// Pass channels through unchanged.
    #[default]
    Identity,
    /// Replace every channel with the pixel's luma.
    Grayscale,
    /// Apply a 3x4 affine matrix.
    Affine(ColorMatrix),
}

impl ColorTransform {
    /// Map an RGB triple through this transform.
    #[inline]
    pub fn apply(&self, r: f64, g: f64, b: f64) -> (f64, f64, f64) {
        match self {
            ColorTransform::Identity => (r, g, b),
            ColorTransform::Grayscale => {
                let gray = luma(r, g, b);
                (gray, gray, gray)
            }
            ColorTransform::Affine(matrix) => matrix.apply(r, g, b),
        }
    }

    /// Check if this transform leaves every input unchanged.
    pub fn is_identity(&self) -> bool {
        match self {
            ColorTransform::Identity => true,
            ColorTransform::Grayscale => false,
            ColorTransform::Affine(matrix) => *matrix == ColorMatrix::IDENTITY,
        }
    }
}
