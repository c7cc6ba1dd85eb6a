//! Edit session: the state behind one preview window.
//!
//! Holds the loaded source image, the selected filter, the slider values,
//! the last rendered frame and the filter thumbnails. Every mutating call
//! re-renders synchronously, so the output always reflects the current
//! state and a new call simply supersedes the previous render.

use log::{info, warn};
use thiserror::Error;

use crate::decode::{decode_image, DecodeError};
use crate::encode::{encode_frame_png, EncodeError};
use crate::filters::{self, FilterDefinition};
use crate::frame::FrameBuffer;
use crate::inspect::{inspect_pixel, InspectError, PixelTrace};
use crate::pipeline::process_in_place;
use crate::thumbnail::{render_thumbnails, Thumbnail};
use crate::AdjustmentParameters;

/// Errors surfaced to the user by session actions.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The action needs an image and none is loaded
    #[error("No image loaded. Upload an image first")]
    NoImage,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Inspect(#[from] InspectError),
}

/// The state of one preview session.
#[derive(Debug, Clone)]
pub struct EditSession {
    source: Option<FrameBuffer>,
    filter: &'static FilterDefinition,
    params: AdjustmentParameters,
    output: Option<FrameBuffer>,
    thumbnails: Vec<Thumbnail>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self {
            source: None,
            filter: filters::original(),
            params: AdjustmentParameters::default(),
            output: None,
            thumbnails: Vec::new(),
        }
    }
}

impl EditSession {
    /// Create an empty session with the `original` filter selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and load an image file.
    ///
    /// On success the thumbnails are regenerated and the preview rendered.
    /// On failure the session is left exactly as it was.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<(), SessionError> {
        let frame = decode_image(bytes)?;
        self.load_frame(frame);
        Ok(())
    }

    /// Load an already-decoded frame.
    pub fn load_frame(&mut self, frame: FrameBuffer) {
        info!("loaded {}x{} image", frame.width(), frame.height());
        self.source = Some(frame);
        self.regenerate_thumbnails();
        self.render();
    }

    /// Check if an image is loaded.
    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    /// The loaded source image, unmodified.
    pub fn source(&self) -> Option<&FrameBuffer> {
        self.source.as_ref()
    }

    /// The currently selected filter.
    pub fn selected_filter(&self) -> &'static FilterDefinition {
        self.filter
    }

    /// Current slider values.
    pub fn params(&self) -> &AdjustmentParameters {
        &self.params
    }

    /// The last rendered frame, if an image is loaded.
    pub fn output(&self) -> Option<&FrameBuffer> {
        self.output.as_ref()
    }

    /// Thumbnails for every catalog filter, in catalog order.
    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    /// Select a filter by id and re-render.
    ///
    /// Unknown ids select `original`.
    pub fn select_filter(&mut self, id: &str) {
        self.filter = filters::lookup(id);
        self.render();
    }

    /// Set the blend strength and re-render.
    pub fn set_strength(&mut self, strength: f64) {
        self.params.strength = strength;
        self.render();
    }

    /// Set the saturation factor and re-render.
    pub fn set_saturation(&mut self, saturation: f64) {
        self.params.saturation = saturation;
        self.render();
    }

    /// Set the contrast factor and re-render.
    pub fn set_contrast(&mut self, contrast: f64) {
        self.params.contrast = contrast;
        self.render();
    }

    /// Replace all slider values at once and re-render.
    pub fn set_params(&mut self, params: AdjustmentParameters) {
        self.params = params;
        self.render();
    }

    /// Return to the `original` filter with default sliders and re-render.
    ///
    /// The loaded image is kept.
    pub fn reset(&mut self) {
        self.filter = filters::original();
        self.params = AdjustmentParameters::default();
        self.render();
    }

    /// Render the preview from the source image.
    ///
    /// With no image loaded the output is cleared and `None` returned.
    pub fn render(&mut self) -> Option<&FrameBuffer> {
        let Some(source) = &self.source else {
            self.output = None;
            return None;
        };

        // Reuse the previous output allocation when the size is unchanged.
        let mut output = match self.output.take() {
            Some(mut previous) if previous.width() == source.width() && previous.height() == source.height() => {
                previous.pixels_mut().copy_from_slice(source.pixels());
                previous
            }
            _ => source.clone(),
        };
        process_in_place(&mut output, self.filter, &self.params);
        self.output = Some(output);
        self.output.as_ref()
    }

    /// Re-render the thumbnail grid from the source image.
    ///
    /// With no image loaded the grid is emptied.
    pub fn regenerate_thumbnails(&mut self) -> &[Thumbnail] {
        self.thumbnails = match &self.source {
            Some(source) => render_thumbnails(source),
            None => Vec::new(),
        };
        &self.thumbnails
    }

    /// Encode the rendered preview as PNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoImage` if nothing is loaded.
    pub fn export_png(&self) -> Result<Vec<u8>, SessionError> {
        let Some(output) = &self.output else {
            warn!("export requested with no image loaded");
            return Err(SessionError::NoImage);
        };
        Ok(encode_frame_png(output)?)
    }

    /// Trace the pipeline for one source pixel with the current settings.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoImage` if nothing is loaded, or
    /// `SessionError::Inspect` if `(x, y)` is outside the image.
    pub fn inspect(&self, x: u32, y: u32) -> Result<PixelTrace, SessionError> {
        let source = self.source.as_ref().ok_or(SessionError::NoImage)?;
        Ok(inspect_pixel(source, x, y, self.filter, &self.params)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_png;
    use crate::pipeline::process;

    fn reference_frame() -> FrameBuffer {
        FrameBuffer::new(2, 1, vec![200, 100, 50, 255, 10, 20, 30, 128]).unwrap()
    }

    fn loaded_session() -> EditSession {
        let mut session = EditSession::new();
        session.load_frame(reference_frame());
        session
    }

    #[test]
    fn test_new_session_defaults() {
        let session = EditSession::new();
        assert!(!session.has_image());
        assert_eq!(session.selected_filter().id, "original");
        assert!(session.params().is_default());
        assert!(session.output().is_none());
        assert!(session.thumbnails().is_empty());
    }

    #[test]
    fn test_render_without_image_is_noop() {
        let mut session = EditSession::new();
        assert!(session.render().is_none());
        session.select_filter("aden");
        session.set_strength(0.3);
        assert!(session.output().is_none());
        assert!(session.regenerate_thumbnails().is_empty());
    }

    #[test]
    fn test_export_without_image_errors() {
        let session = EditSession::new();
        assert!(matches!(session.export_png(), Err(SessionError::NoImage)));
    }

    #[test]
    fn test_inspect_without_image_errors() {
        let session = EditSession::new();
        assert!(matches!(session.inspect(0, 0), Err(SessionError::NoImage)));
    }

    #[test]
    fn test_load_renders_and_builds_thumbnails() {
        let session = loaded_session();
        assert!(session.has_image());
        assert_eq!(session.output(), Some(&reference_frame()));
        assert_eq!(session.thumbnails().len(), filters::list().len());
    }

    #[test]
    fn test_select_filter_renders() {
        let mut session = loaded_session();
        session.select_filter("aden");
        assert_eq!(session.selected_filter().id, "aden");
        let out = session.output().unwrap();
        assert_eq!(out.pixel(0, 0), Some([200, 89, 42, 255]));
        assert_eq!(out.pixel(1, 0).unwrap()[3], 128);
    }

    #[test]
    fn test_unknown_filter_selects_original() {
        let mut session = loaded_session();
        session.select_filter("aden");
        session.select_filter("vaporwave");
        assert_eq!(session.selected_filter().id, "original");
        assert_eq!(session.output(), Some(&reference_frame()));
    }

    #[test]
    fn test_sliders_render_from_source_not_output() {
        let mut session = loaded_session();
        session.select_filter("clarendon");
        session.set_contrast(1.5);
        session.set_contrast(1.5);
        let expected = process(
            &reference_frame(),
            filters::lookup("clarendon"),
            &AdjustmentParameters {
                contrast: 1.5,
                ..Default::default()
            },
        );
        assert_eq!(session.output(), Some(&expected));
    }

    #[test]
    fn test_zero_strength_shows_original() {
        let mut session = loaded_session();
        session.select_filter("moon");
        session.set_saturation(2.0);
        session.set_strength(0.0);
        assert_eq!(session.output(), Some(&reference_frame()));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = loaded_session();
        session.select_filter("slumber");
        session.set_params(AdjustmentParameters {
            strength: 0.4,
            saturation: 0.2,
            contrast: 1.8,
        });
        session.reset();
        assert_eq!(session.selected_filter().id, "original");
        assert!(session.params().is_default());
        assert!(session.has_image());
        assert_eq!(session.output(), Some(&reference_frame()));
    }

    #[test]
    fn test_thumbnails_ignore_sliders() {
        let mut session = loaded_session();
        let before = session.thumbnails().to_vec();
        session.set_saturation(0.0);
        session.regenerate_thumbnails();
        assert_eq!(session.thumbnails(), before.as_slice());
    }

    #[test]
    fn test_load_image_from_png() {
        let png = encode_png(reference_frame().pixels(), 2, 1).unwrap();
        let mut session = EditSession::new();
        session.load_image(&png).unwrap();
        assert_eq!(session.source(), Some(&reference_frame()));
    }

    #[test]
    fn test_failed_load_keeps_state() {
        let mut session = loaded_session();
        session.select_filter("aden");
        let before = session.output().cloned();

        let err = session.load_image(b"not an image").unwrap_err();
        assert!(matches!(err, SessionError::Decode(_)));
        assert_eq!(session.source(), Some(&reference_frame()));
        assert_eq!(session.output().cloned(), before);
        assert_eq!(session.selected_filter().id, "aden");
    }

    #[test]
    fn test_new_image_supersedes_old() {
        let mut session = loaded_session();
        session.select_filter("aden");
        session.load_frame(FrameBuffer::filled(3, 3, [0, 0, 0, 255]));
        let out = session.output().unwrap();
        assert_eq!((out.width(), out.height()), (3, 3));
        // Aden's negative bias clamps black to black.
        assert_eq!(out.pixel(1, 1), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_export_round_trips_output() {
        let mut session = loaded_session();
        session.select_filter("gingham");
        let png = session.export_png().unwrap();
        let decoded = crate::decode::decode_image(&png).unwrap();
        assert_eq!(Some(&decoded), session.output());
    }

    #[test]
    fn test_inspect_matches_output() {
        let mut session = loaded_session();
        session.select_filter("juno");
        session.set_strength(0.6);
        let trace = session.inspect(1, 0).unwrap();
        let px = session.output().unwrap().pixel(1, 0).unwrap();
        assert_eq!(trace.final_rgb, [px[0], px[1], px[2]]);
    }

    #[test]
    fn test_inspect_out_of_bounds() {
        let session = loaded_session();
        assert!(matches!(
            session.inspect(2, 0),
            Err(SessionError::Inspect(InspectError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SessionError::NoImage.to_string(),
            "No image loaded. Upload an image first"
        );
        let err: SessionError = DecodeError::InvalidFormat.into();
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
