use rastermix_image::Image;

/// An ordered, non-empty sequence of animation frames with a wrapping cursor.
///
/// Frames are immutable once generated; regenerating an animation replaces
/// the whole sequence and resets the cursor to 0.
#[derive(Clone, Debug)]
pub struct FrameSequence {
    frames: Vec<Image<u8, 3>>,
    cursor: usize,
}

impl FrameSequence {
    /// Create a sequence from generated frames, with the cursor at 0.
    ///
    /// Returns `None` for an empty frame list.
    pub fn new(frames: Vec<Image<u8, 3>>) -> Option<Self> {
        if frames.is_empty() {
            None
        } else {
            Some(Self { frames, cursor: 0 })
        }
    }

    /// The number of frames in the sequence.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence is empty. Always false by construction.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The current 0-based cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The frame under the cursor.
    pub fn current(&self) -> &Image<u8, 3> {
        &self.frames[self.cursor]
    }

    /// Advance the cursor by one, wrapping modulo the sequence length, and
    /// return the new current frame.
    pub fn advance(&mut self) -> &Image<u8, 3> {
        self.cursor = (self.cursor + 1) % self.frames.len();
        self.current()
    }

    /// All frames in order.
    pub fn frames(&self) -> &[Image<u8, 3>] {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::FrameSequence;
    use rastermix_image::{Image, ImageError, ImageSize};

    fn solid(val: u8) -> Result<Image<u8, 3>, ImageError> {
        Image::from_size_val(
            ImageSize {
                width: 1,
                height: 1,
            },
            val,
        )
    }

    #[test]
    fn empty_sequence_is_none() {
        assert!(FrameSequence::new(vec![]).is_none());
    }

    #[test]
    fn advance_wraps() -> Result<(), ImageError> {
        let frames = vec![solid(0)?, solid(1)?, solid(2)?];
        let mut seq = FrameSequence::new(frames).unwrap();
        assert_eq!(seq.cursor(), 0);
        assert_eq!(seq.current().as_slice(), &[0, 0, 0]);

        seq.advance();
        seq.advance();
        assert_eq!(seq.cursor(), 2);

        // a full cycle returns to the start
        seq.advance();
        assert_eq!(seq.cursor(), 0);
        assert_eq!(seq.current().as_slice(), &[0, 0, 0]);
        Ok(())
    }
}
