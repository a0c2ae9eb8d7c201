/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] rastermix_image::ImageError),

    /// Error to decode or encode via the image crate.
    #[error("Failed to decode or encode the image. {0}")]
    ImageDecodeError(#[from] image::ImageError),

    /// Error to construct the encode buffer.
    #[error("Failed to encode the image. {0}")]
    ImageEncodeError(String),

    /// Malformed header of a plain-text PPM file.
    #[error("Invalid PPM header. {0}")]
    InvalidPpmHeader(String),

    /// A pixel token of a plain-text PPM file is not an 8-bit integer.
    #[error("Invalid PPM pixel value: {0}")]
    InvalidPpmValue(String),

    /// Pixel count of a plain-text PPM file does not match its dimensions.
    #[error("PPM pixel count ({0}) does not match width*height*3 ({1})")]
    InvalidPixelCount(usize, usize),
}
