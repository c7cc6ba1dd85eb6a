//! Image ingestion for Tintlab.
//!
//! Turns user-supplied file bytes into an RGBA [`FrameBuffer`]:
//! - Format is guessed from the content (JPEG and PNG are enabled)
//! - EXIF orientation is applied, matching how browsers draw photos
//! - Pixels are converted to 8-bit RGBA
//!
//! All operations are synchronous and single-threaded.
//!
//! [`FrameBuffer`]: crate::frame::FrameBuffer

mod file;
mod types;

pub use file::decode_image;
pub use types::DecodeError;
use types::Orientation;
