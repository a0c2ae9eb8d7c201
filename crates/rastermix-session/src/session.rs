use std::path::Path;

use rastermix_image::{Image, ImageError};
use rastermix_imgproc::{blend, flip, rotate, segment};
use rastermix_io::functional as io;

use crate::error::SessionError;
use crate::frames::FrameSequence;

/// The lifecycle state of an [`ImageSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No image has been loaded yet.
    Empty,
    /// An original and a working result are present; no animation is active.
    Loaded,
    /// An animation frame sequence is active and the result tracks its cursor.
    Animating,
}

/// A stateful image editing session.
///
/// The session owns the `original` snapshot, the current `result` matrix
/// every transform replaces, an optional second image for cross-fading and
/// the active animation frame sequence. It is the single mutable state the
/// presentation layer drives; callers serialize all operations against one
/// instance (no internal locking).
///
/// While a frame sequence is active, `result` always equals the frame under
/// the sequence cursor.
#[derive(Clone, Debug, Default)]
pub struct ImageSession {
    original: Option<Image<u8, 3>>,
    result: Option<Image<u8, 3>>,
    second: Option<Image<u8, 3>>,
    frames: Option<FrameSequence>,
}

impl ImageSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lifecycle state of the session.
    pub fn state(&self) -> SessionState {
        match (&self.original, &self.frames) {
            (None, _) => SessionState::Empty,
            (Some(_), None) => SessionState::Loaded,
            (Some(_), Some(_)) => SessionState::Animating,
        }
    }

    /// The original image as loaded, if any.
    pub fn original(&self) -> Option<&Image<u8, 3>> {
        self.original.as_ref()
    }

    /// The current working image, if any.
    pub fn result(&self) -> Option<&Image<u8, 3>> {
        self.result.as_ref()
    }

    /// The second image loaded for blending, if any.
    pub fn second(&self) -> Option<&Image<u8, 3>> {
        self.second.as_ref()
    }

    /// The active animation frame sequence, if any.
    pub fn frames(&self) -> Option<&FrameSequence> {
        self.frames.as_ref()
    }

    /// Load an image file and make it the session original.
    ///
    /// The working result becomes a copy of the original and any active
    /// animation is discarded. A previously loaded second image stays
    /// available for reuse.
    pub fn load(&mut self, file_path: impl AsRef<Path>) -> Result<(), SessionError> {
        let image = io::read_image_rgb8(file_path.as_ref())?;
        log::debug!(
            "loaded {}x{} image from {:?}",
            image.width(),
            image.height(),
            file_path.as_ref()
        );
        self.result = Some(image.clone());
        self.original = Some(image);
        self.frames = None;
        Ok(())
    }

    /// Load the second image used by [`ImageSession::apply_cross_fade`].
    ///
    /// Does not touch the original, the result or an active animation.
    pub fn load_second(&mut self, file_path: impl AsRef<Path>) -> Result<(), SessionError> {
        let image = io::read_image_rgb8(file_path.as_ref())?;
        log::debug!(
            "loaded {}x{} second image from {:?}",
            image.width(),
            image.height(),
            file_path.as_ref()
        );
        self.second = Some(image);
        Ok(())
    }

    /// Reset the working result to a copy of the original and discard any
    /// active animation.
    pub fn restore_original(&mut self) -> Result<(), SessionError> {
        let original = self.original.as_ref().ok_or(SessionError::NoImage)?;
        self.result = Some(original.clone());
        self.frames = None;
        Ok(())
    }

    /// Mirror the working result left-to-right.
    pub fn apply_mirror_horizontal(&mut self) -> Result<(), SessionError> {
        self.apply(flip::horizontal_flip)
    }

    /// Mirror the working result top-to-bottom.
    pub fn apply_mirror_vertical(&mut self) -> Result<(), SessionError> {
        self.apply(flip::vertical_flip)
    }

    /// Rotate the working result 90 degrees clockwise.
    pub fn apply_rotate_cw(&mut self) -> Result<(), SessionError> {
        self.apply(rotate::rotate_cw90)
    }

    /// Rotate the working result 90 degrees counter-clockwise.
    pub fn apply_rotate_ccw(&mut self) -> Result<(), SessionError> {
        self.apply(rotate::rotate_ccw90)
    }

    /// Segment the working result by distance to a target color.
    ///
    /// See [`segment::segment_by_color`] for the tolerance semantics.
    pub fn apply_segmentation(
        &mut self,
        target: [i32; 3],
        tolerance: i32,
    ) -> Result<(), SessionError> {
        self.apply(|image| segment::segment_by_color(image, target, tolerance))
    }

    /// Generate a fade-in-from-black animation from the original image.
    ///
    /// The result is set to the first (fully black) frame and the cursor to 0.
    pub fn apply_fade_from_black(&mut self) -> Result<(), SessionError> {
        let original = self.original.as_ref().ok_or(SessionError::NoImage)?;
        let frames = blend::fade_from_black(original)?;
        self.set_frames(frames);
        Ok(())
    }

    /// Generate a cross-fade animation between the original and the second
    /// image.
    ///
    /// Both images must be loaded and have identical dimensions. The result
    /// is set to the first frame (the original) and the cursor to 0.
    pub fn apply_cross_fade(&mut self) -> Result<(), SessionError> {
        let original = self.original.as_ref().ok_or(SessionError::NoImage)?;
        let second = self.second.as_ref().ok_or(SessionError::NoSecondImage)?;
        let frames = blend::cross_fade(original, second)?;
        self.set_frames(frames);
        Ok(())
    }

    /// Advance the active animation by one frame, wrapping at the end.
    ///
    /// A no-op when no animation is active.
    pub fn advance_frame(&mut self) {
        if let Some(seq) = &mut self.frames {
            self.result = Some(seq.advance().clone());
        }
    }

    /// Serialize the current working result to the given path.
    pub fn save(&self, file_path: impl AsRef<Path>) -> Result<(), SessionError> {
        let result = self.result.as_ref().ok_or(SessionError::NoImage)?;
        io::write_image_rgb8(file_path.as_ref(), result)?;
        log::debug!("saved result to {:?}", file_path.as_ref());
        Ok(())
    }

    /// Replace the result with a transform of the current result and discard
    /// any active animation. One-shot transforms are not animations.
    fn apply<F>(&mut self, f: F) -> Result<(), SessionError>
    where
        F: FnOnce(&Image<u8, 3>) -> Result<Image<u8, 3>, ImageError>,
    {
        let result = self.result.as_ref().ok_or(SessionError::NoImage)?;
        self.result = Some(f(result)?);
        self.frames = None;
        Ok(())
    }

    fn set_frames(&mut self, frames: Vec<Image<u8, 3>>) {
        // generators always produce non-empty sequences
        if let Some(seq) = FrameSequence::new(frames) {
            self.result = Some(seq.current().clone());
            self.frames = Some(seq);
        }
    }
}
