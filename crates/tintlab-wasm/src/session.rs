//! Edit session bindings.
//!
//! `JsEditSession` is the page's single handle on the preview state. Each
//! UI event maps to one call; calls that change the image re-render before
//! returning, so `output()` is always current.
//!
//! # Example (TypeScript)
//! ```typescript
//! const session = new JsEditSession();
//! session.load_image(bytes);
//!
//! strengthSlider.oninput = () => {
//!   session.strength = Number(strengthSlider.value) / 100;
//!   strengthLabel.textContent = session.strength_label;
//!   ctx.putImageData(session.output().to_image_data(), 0, 0);
//! };
//!
//! canvas.onmousemove = (ev) => {
//!   const r = canvas.getBoundingClientRect();
//!   switch (session.pointer_move(ev.clientX, ev.clientY, r.left, r.top, r.width, r.height)) {
//!     case PointerAction.RequestFrame:
//!       requestAnimationFrame(() => show(session.pointer_frame()));
//!       break;
//!     case PointerAction.ShowOutside:
//!       show(JsEditSession.outside_summary());
//!       break;
//!   }
//! };
//! ```

use crate::types::JsFrameBuffer;
use tintlab_core::encode::DEFAULT_EXPORT_FILENAME;
use tintlab_core::inspect::{map_pointer, DisplayRect, PointerQueue, TraceSummary};
use tintlab_core::{AdjustmentParameters, EditSession, SessionError};
use wasm_bindgen::prelude::*;

/// What the page should do after a pointer move.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Nothing to do: no image, or a frame callback is already scheduled
    Ignore = 0,
    /// Schedule `requestAnimationFrame` and call `pointer_frame()` from it
    RequestFrame = 1,
    /// The pointer is off the image; show `outside_summary()`
    ShowOutside = 2,
}

/// Stateful filter preview for JavaScript.
#[wasm_bindgen]
pub struct JsEditSession {
    inner: EditSession,
    pointer: PointerQueue,
}

#[wasm_bindgen]
impl JsEditSession {
    /// Create an empty session with the `original` filter selected
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: EditSession::new(),
            pointer: PointerQueue::new(),
        }
    }

    /// Decode an uploaded file and render it.
    ///
    /// # Errors
    /// Returns the decode error message. The previous image stays loaded.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.try_load_image(bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Load pixels that were already decoded, e.g. read back from a canvas.
    pub fn load_frame(&mut self, frame: JsFrameBuffer) {
        self.pointer.clear();
        self.inner.load_frame(frame.into_frame());
    }

    /// Check if an image is loaded
    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.inner.has_image()
    }

    /// Select a filter by id. Unknown ids select `original`.
    pub fn select_filter(&mut self, id: &str) {
        self.inner.select_filter(id);
    }

    /// Id of the selected filter
    #[wasm_bindgen(getter)]
    pub fn filter_id(&self) -> String {
        self.inner.selected_filter().id.to_string()
    }

    /// Display name of the selected filter
    #[wasm_bindgen(getter)]
    pub fn filter_name(&self) -> String {
        self.inner.selected_filter().name.to_string()
    }

    /// Get strength value
    #[wasm_bindgen(getter)]
    pub fn strength(&self) -> f64 {
        self.inner.params().strength
    }

    /// Set strength value and re-render
    #[wasm_bindgen(setter)]
    pub fn set_strength(&mut self, value: f64) {
        self.inner.set_strength(value);
    }

    /// Get saturation value
    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f64 {
        self.inner.params().saturation
    }

    /// Set saturation value and re-render
    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: f64) {
        self.inner.set_saturation(value);
    }

    /// Get contrast value
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f64 {
        self.inner.params().contrast
    }

    /// Set contrast value and re-render
    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f64) {
        self.inner.set_contrast(value);
    }

    /// Strength slider label, e.g. `"100%"`
    #[wasm_bindgen(getter)]
    pub fn strength_label(&self) -> String {
        self.inner.params().strength_label()
    }

    /// Saturation slider label, e.g. `"1.00"`
    #[wasm_bindgen(getter)]
    pub fn saturation_label(&self) -> String {
        self.inner.params().saturation_label()
    }

    /// Contrast slider label, e.g. `"1.00"`
    #[wasm_bindgen(getter)]
    pub fn contrast_label(&self) -> String {
        self.inner.params().contrast_label()
    }

    /// Serialize the slider values to `{ strength, saturation, contrast }`
    pub fn params_to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.params()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Restore slider values and re-render. Missing fields take their defaults.
    pub fn params_from_json(&mut self, value: JsValue) -> Result<(), JsValue> {
        let params: AdjustmentParameters =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.set_params(params);
        Ok(())
    }

    /// Back to `original` with default sliders. The image stays loaded.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// The rendered preview, or `undefined` if no image is loaded.
    pub fn output(&self) -> Option<JsFrameBuffer> {
        self.inner.output().cloned().map(JsFrameBuffer::from_frame)
    }

    /// Re-render the thumbnail grid. Returns the number of thumbnails.
    pub fn regenerate_thumbnails(&mut self) -> usize {
        self.inner.regenerate_thumbnails().len()
    }

    /// Number of thumbnails currently rendered
    #[wasm_bindgen(getter)]
    pub fn thumbnail_count(&self) -> usize {
        self.inner.thumbnails().len()
    }

    /// Thumbnail at `index`, in catalog order.
    pub fn thumbnail(&self, index: usize) -> Option<JsFrameBuffer> {
        self.inner
            .thumbnails()
            .get(index)
            .map(|t| JsFrameBuffer::from_frame(t.frame.clone()))
    }

    /// Filter id of the thumbnail at `index`.
    pub fn thumbnail_filter_id(&self, index: usize) -> Option<String> {
        self.inner.thumbnails().get(index).map(|t| t.filter_id.to_string())
    }

    /// All thumbnails as `JsFrameBuffer`s, in catalog order.
    pub fn thumbnails(&self) -> js_sys::Array {
        self.inner
            .thumbnails()
            .iter()
            .map(|t| JsValue::from(JsFrameBuffer::from_frame(t.frame.clone())))
            .collect()
    }

    /// Encode the preview as PNG for download.
    ///
    /// # Errors
    /// Fails with "No image loaded" if nothing is loaded.
    pub fn export_png(&self) -> Result<Vec<u8>, JsValue> {
        self.inner
            .export_png()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Name offered for the downloaded file
    pub fn default_filename() -> String {
        DEFAULT_EXPORT_FILENAME.to_string()
    }

    /// Full pipeline trace for the source pixel at `(x, y)`.
    pub fn inspect(&self, x: u32, y: u32) -> Result<JsValue, JsValue> {
        let trace = self
            .inner
            .inspect(x, y)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&trace).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Record a pointer move over the displayed image.
    ///
    /// `left`, `top`, `width` and `height` are the canvas bounding rect.
    pub fn pointer_move(
        &mut self,
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> PointerAction {
        let rect = DisplayRect {
            left,
            top,
            width,
            height,
        };
        self.queue_pointer(client_x, client_y, &rect)
    }

    /// The pointer left the image; the page should show `placeholder_summary()`.
    pub fn pointer_leave(&mut self) {
        self.pointer.clear();
    }

    /// Inspect the newest queued pointer position.
    ///
    /// Call once from the animation frame callback. Returns the inspector
    /// text lines, or `null` when there is nothing to show.
    pub fn pointer_frame(&mut self) -> Result<JsValue, JsValue> {
        match self.take_pointer_summary() {
            Some(summary) => serde_wasm_bindgen::to_value(&summary).map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::NULL),
        }
    }

    /// Inspector lines with every field set to "—"
    pub fn placeholder_summary() -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&TraceSummary::placeholder()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Inspector lines for a pointer outside the image
    pub fn outside_summary() -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&TraceSummary::outside_image()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for JsEditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl JsEditSession {
    fn try_load_image(&mut self, bytes: &[u8]) -> Result<(), SessionError> {
        self.inner.load_image(bytes)?;
        self.pointer.clear();
        Ok(())
    }

    fn queue_pointer(&mut self, client_x: f64, client_y: f64, rect: &DisplayRect) -> PointerAction {
        let Some(source) = self.inner.source() else {
            return PointerAction::Ignore;
        };

        match map_pointer(client_x, client_y, rect, source.width(), source.height()) {
            Some(pos) if self.pointer.push(pos) => PointerAction::RequestFrame,
            Some(_) => PointerAction::Ignore,
            None => {
                self.pointer.clear();
                PointerAction::ShowOutside
            }
        }
    }

    fn take_pointer_summary(&mut self) -> Option<TraceSummary> {
        let (x, y) = self.pointer.take()?;
        self.inner.inspect(x, y).ok().map(|trace| trace.summary())
    }
}
