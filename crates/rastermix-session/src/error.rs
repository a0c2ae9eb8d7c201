/// An error type for session operations.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// An operation requiring a loaded image was attempted on an empty session.
    #[error("No image loaded in the session")]
    NoImage,

    /// A cross-fade was attempted before loading a second image.
    #[error("No second image loaded for blending")]
    NoSecondImage,

    /// Error to read or write an image file.
    #[error("Failed to read or write the image. {0}")]
    Io(#[from] rastermix_io::IoError),

    /// Error from a pixel transform.
    #[error("Image operation failed. {0}")]
    Image(#[from] rastermix_image::ImageError),
}
