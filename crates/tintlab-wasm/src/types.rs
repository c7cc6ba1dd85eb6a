//! WASM-compatible wrapper types for image data.
//!
//! `JsFrameBuffer` wraps the core `FrameBuffer` and converts to and from the
//! canvas `ImageData` the page draws with.

use tintlab_core::{FrameBuffer, FrameError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::ImageData;

/// An RGBA image for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` and
/// `to_image_data()` copy it out to JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsFrameBuffer {
    inner: FrameBuffer,
}

#[wasm_bindgen]
impl JsFrameBuffer {
    /// Create a frame from dimensions and RGBA pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    ///
    /// # Errors
    /// Returns an error if `pixels.length != width * height * 4`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsFrameBuffer, JsValue> {
        Self::from_parts(width, height, pixels).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Read a frame back from a canvas `ImageData`.
    pub fn from_image_data(image_data: &ImageData) -> Result<JsFrameBuffer, JsValue> {
        Self::new(image_data.width(), image_data.height(), image_data.data().0)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns RGBA pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Build a canvas `ImageData` for `putImageData`.
    ///
    /// # Errors
    /// Fails for zero-sized frames, which `ImageData` rejects.
    pub fn to_image_data(&self) -> Result<ImageData, JsValue> {
        ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(self.inner.pixels()),
            self.inner.width(),
            self.inner.height(),
        )
    }
}

impl JsFrameBuffer {
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, FrameError> {
        Ok(Self {
            inner: FrameBuffer::new(width, height, pixels)?,
        })
    }

    pub(crate) fn from_frame(frame: FrameBuffer) -> Self {
        Self { inner: frame }
    }

    pub(crate) fn frame(&self) -> &FrameBuffer {
        &self.inner
    }

    pub(crate) fn into_frame(self) -> FrameBuffer {
        self.inner
    }
}
