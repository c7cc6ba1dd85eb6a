//! Tintlab WASM - WebAssembly bindings for Tintlab
//!
//! This crate exposes the tintlab-core filter preview to a web page.
//!
//! # Module Structure
//!
//! - `types` - `JsFrameBuffer`, the RGBA pixel wrapper and its `ImageData` conversion
//! - `filters` - Filter catalog listing for building the menu and thumbnail grid
//! - `session` - `JsEditSession`, the stateful preview driven by UI events
//! - `encode` - PNG export
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditSession, list_filters } from '@tintlab/wasm';
//!
//! await init();
//!
//! const session = new JsEditSession();
//! session.load_image(new Uint8Array(await file.arrayBuffer()));
//! session.select_filter('aden');
//! ctx.putImageData(session.output().to_image_data(), 0, 0);
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod filters;
mod session;
mod types;

// Re-export public types
pub use encode::{default_export_filename, encode_png, encode_png_from_frame};
pub use filters::{filter_ids, filter_name, list_filters};
pub use session::{JsEditSession, PointerAction};
pub use types::JsFrameBuffer;

/// Initialize the WASM module (called automatically on load).
///
/// Routes panics and `log` records to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A logger may already be installed if the module is initialized twice.
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Tintlab WASM {} initialized", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
