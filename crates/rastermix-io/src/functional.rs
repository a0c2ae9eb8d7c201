use std::path::Path;

use rastermix_image::{Image, ImageSize};

use crate::error::IoError;
use crate::ppm;

/// Reads an image from the given file path.
///
/// Files with the `ppm` extension go through the plain-text P3 codec;
/// anything else is decoded by the `image` crate and forced to 8-bit RGB.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGB image containing the decoded pixel data.
pub fn read_image_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_extension(file_path)? == "ppm" {
        ppm::read_image_ppm(file_path)
    } else {
        read_image_any_rgb8(file_path)
    }
}

/// Reads an image in any format supported by the `image` crate.
///
/// The decoded pixels are converted to 8-bit RGB regardless of the stored
/// color type.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::open(file_path)?.to_rgb8();

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_raw())?)
}

/// Writes an image to the given file path.
///
/// Files with the `ppm` extension go through the plain-text P3 codec;
/// anything else is encoded by the `image` crate with the format inferred
/// from the extension.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `image` - The RGB image to serialize.
pub fn write_image_rgb8(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    if file_extension(file_path)? == "ppm" {
        ppm::write_image_ppm(file_path, image)
    } else {
        let buf = image::RgbImage::from_raw(
            image.width() as u32,
            image.height() as u32,
            image.as_slice().to_vec(),
        )
        .ok_or_else(|| IoError::ImageEncodeError("pixel buffer size mismatch".to_string()))?;
        buf.save(file_path)?;
        Ok(())
    }
}

fn file_extension(file_path: &Path) -> Result<String, IoError> {
    file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .ok_or_else(|| IoError::InvalidFileExtension(file_path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use crate::error::IoError;
    use rastermix_image::{Image, ImageSize};

    fn gradient_image() -> Result<Image<u8, 3>, IoError> {
        Ok(Image::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120],
        )?)
    }

    #[test]
    fn read_write_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.png");

        let image = gradient_image()?;
        super::write_image_rgb8(&file_path, &image)?;
        assert!(file_path.exists());

        let image_back = super::read_image_rgb8(&file_path)?;
        assert_eq!(image_back, image);
        Ok(())
    }

    #[test]
    fn read_write_ppm_dispatch() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.ppm");

        let image = gradient_image()?;
        super::write_image_rgb8(&file_path, &image)?;

        let contents = std::fs::read_to_string(&file_path)?;
        assert!(contents.starts_with("P3\n"));

        let image_back = super::read_image_rgb8(&file_path)?;
        assert_eq!(image_back, image);
        Ok(())
    }

    #[test]
    fn read_missing_file() {
        let result = super::read_image_rgb8("/nonexistent/missing.png");
        assert!(matches!(result, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_no_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("noext");
        std::fs::write(&file_path, b"not an image")?;

        let result = super::read_image_rgb8(&file_path);
        assert!(matches!(result, Err(IoError::InvalidFileExtension(_))));
        Ok(())
    }
}
