//! Image encoding WASM bindings.
//!
//! Encodes RGBA pixels as PNG for the download button.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png_from_frame } from '@tintlab/wasm';
//!
//! const png = encode_png_from_frame(session.output());
//! const url = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! ```

use crate::types::JsFrameBuffer;
use tintlab_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGBA pixel data to PNG bytes.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 4
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a `JsFrameBuffer` to PNG bytes.
#[wasm_bindgen]
pub fn encode_png_from_frame(frame: &JsFrameBuffer) -> Result<Vec<u8>, JsValue> {
    encode::encode_frame_png(frame.frame()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Name offered for the downloaded file.
#[wasm_bindgen]
pub fn default_export_filename() -> String {
    encode::DEFAULT_EXPORT_FILENAME.to_string()
}
