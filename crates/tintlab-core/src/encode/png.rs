//! PNG encoding for export.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use log::info;
use thiserror::Error;

use crate::frame::{byte_len, FrameBuffer};

/// File name offered for downloads.
pub const DEFAULT_EXPORT_FILENAME: &str = "filtered.png";

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
///
/// Returns an error if either dimension is zero, the buffer length doesn't
/// match, or the encoder fails.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = byte_len(width, height).ok_or(EncodeError::InvalidDimensions { width, height })?;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    info!("encoded {}x{} PNG ({} bytes)", width, height, buffer.len());
    Ok(buffer)
}

/// Encode a frame to PNG bytes.
pub fn encode_frame_png(frame: &FrameBuffer) -> Result<Vec<u8>, EncodeError> {
    encode_png(frame.pixels(), frame.width(), frame.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_image;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_basic() {
        let pixels = vec![128u8; 10 * 10 * 4];
        let png = encode_png(&pixels, 10, 10).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_is_lossless() {
        let mut pixels = Vec::with_capacity(16 * 9 * 4);
        for i in 0..(16 * 9) {
            pixels.extend_from_slice(&[(i * 3) as u8, (i * 7) as u8, (255 - i) as u8, (i % 256) as u8]);
        }
        let png = encode_png(&pixels, 16, 9).unwrap();
        let decoded = decode_image(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 9));
        assert_eq!(decoded.pixels(), pixels.as_slice());
    }

    #[test]
    fn test_encode_frame_png() {
        let frame = FrameBuffer::filled(3, 2, [1, 2, 3, 4]);
        let png = encode_frame_png(&frame).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_invalid_pixel_data_short() {
        let pixels = vec![0u8; 9 * 10 * 4];
        let result = encode_png(&pixels, 10, 10);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_png_rgb_length_rejected() {
        let pixels = vec![0u8; 10 * 10 * 3];
        let result = encode_png(&pixels, 10, 10);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidPixelData {
                expected: 400,
                actual: 300
            })
        ));
    }

    #[test]
    fn test_encode_png_zero_dimensions() {
        assert!(matches!(
            encode_png(&[], 0, 10),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_frame_png(&FrameBuffer::default()),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_png_overflowing_dimensions() {
        assert!(matches!(
            encode_png(&[], u32::MAX, u32::MAX),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_default_filename() {
        assert_eq!(DEFAULT_EXPORT_FILENAME, "filtered.png");
    }
}
