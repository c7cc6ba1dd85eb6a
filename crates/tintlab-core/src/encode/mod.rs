//! Image export for Tintlab.
//!
//! Encodes the rendered frame as a lossless RGBA PNG for download.
//!
//! # Examples
//!
//! ```ignore
//! use tintlab_core::encode::{encode_png, DEFAULT_EXPORT_FILENAME};
//!
//! let pixels = vec![128u8; 100 * 100 * 4]; // Gray, half-transparent image
//! let png_bytes = encode_png(&pixels, 100, 100).unwrap();
//! println!("Encoded {} bytes for {}", png_bytes.len(), DEFAULT_EXPORT_FILENAME);
//! ```

mod png;

pub use png::{encode_frame_png, encode_png, EncodeError, DEFAULT_EXPORT_FILENAME};
