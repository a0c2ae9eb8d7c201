use std::io::{BufWriter, Write};
use std::path::Path;

use rastermix_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads a plain-text PPM (P3) image from the given file path.
///
/// The expected grammar is the literal magic token `P3` on the first line,
/// `<width> <height>` on the second, a maximum channel value on the third
/// (read and discarded), and exactly `width * height * 3` whitespace
/// separated integers for the remainder, row-major, one R G B triple per
/// pixel.
///
/// # Arguments
///
/// * `file_path` - The path to the PPM image.
///
/// # Returns
///
/// An RGB image containing the decoded pixel data.
pub fn read_image_ppm(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(file_path)?;
    decode_ppm(&contents)
}

/// Decodes a plain-text PPM (P3) image from a string.
///
/// See [`read_image_ppm`] for the expected grammar.
pub fn decode_ppm(contents: &str) -> Result<Image<u8, 3>, IoError> {
    let mut lines = contents.lines();

    let magic = lines
        .next()
        .ok_or_else(|| IoError::InvalidPpmHeader("missing magic token".to_string()))?;
    if magic.trim() != "P3" {
        return Err(IoError::InvalidPpmHeader(format!(
            "expected P3, got {:?}",
            magic.trim()
        )));
    }

    let dims = lines
        .next()
        .ok_or_else(|| IoError::InvalidPpmHeader("missing dimensions".to_string()))?;
    let mut dims_it = dims.split_whitespace();
    let width = parse_dimension(dims_it.next(), "width")?;
    let height = parse_dimension(dims_it.next(), "height")?;

    // the maximum channel value is read and discarded, not validated
    lines
        .next()
        .ok_or_else(|| IoError::InvalidPpmHeader("missing max value".to_string()))?;

    let values = lines
        .flat_map(str::split_whitespace)
        .map(|token| {
            token
                .parse::<u8>()
                .map_err(|_| IoError::InvalidPpmValue(token.to_string()))
        })
        .collect::<Result<Vec<u8>, IoError>>()?;

    let expected = width * height * 3;
    if values.len() != expected {
        return Err(IoError::InvalidPixelCount(values.len(), expected));
    }

    Ok(Image::new(ImageSize { width, height }, values)?)
}

fn parse_dimension(token: Option<&str>, name: &str) -> Result<usize, IoError> {
    token
        .and_then(|t| t.parse::<usize>().ok())
        .filter(|&d| d > 0)
        .ok_or_else(|| IoError::InvalidPpmHeader(format!("invalid {}", name)))
}

/// Writes an image to the given file path as plain-text PPM (P3).
///
/// The header is `P3`, `<width> <height>` and `255` on the first three
/// lines; each image row follows on its own line with channel values
/// separated by single spaces.
///
/// # Arguments
///
/// * `file_path` - The path to write the PPM image to.
/// * `image` - The RGB image to serialize.
pub fn write_image_ppm(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    let file = std::fs::File::create(file_path.as_ref())?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;

    for row in image.as_slice().chunks_exact(image.width() * 3) {
        let line = row
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{}", line)?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::IoError;
    use rastermix_image::{Image, ImageSize};

    #[test]
    fn decode_single_pixel() -> Result<(), IoError> {
        let image = super::decode_ppm("P3\n1 1\n255\n10 20 30\n")?;
        assert_eq!(image.size().width, 1);
        assert_eq!(image.size().height, 1);
        assert_eq!(image.as_slice(), &[10, 20, 30]);
        Ok(())
    }

    #[test]
    fn decode_rejects_bad_magic() {
        let result = super::decode_ppm("P6\n1 1\n255\n10 20 30\n");
        assert!(matches!(result, Err(IoError::InvalidPpmHeader(_))));
    }

    #[test]
    fn decode_rejects_wrong_pixel_count() {
        let result = super::decode_ppm("P3\n2 1\n255\n10 20 30\n");
        assert!(matches!(result, Err(IoError::InvalidPixelCount(3, 6))));
    }

    #[test]
    fn decode_rejects_out_of_range_value() {
        let result = super::decode_ppm("P3\n1 1\n255\n10 20 300\n");
        assert!(matches!(result, Err(IoError::InvalidPpmValue(_))));
    }

    #[test]
    fn decode_ignores_max_value() -> Result<(), IoError> {
        let image = super::decode_ppm("P3\n1 1\n65535\n10 20 30\n")?;
        assert_eq!(image.as_slice(), &[10, 20, 30]);
        Ok(())
    }

    #[test]
    fn read_write_roundtrip() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.ppm");

        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120],
        )?;

        super::write_image_ppm(&file_path, &image)?;
        let image_back = super::read_image_ppm(&file_path)?;

        assert_eq!(image_back, image);
        Ok(())
    }

    #[test]
    fn write_layout_is_row_per_line() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("tiny.ppm");

        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![1, 2, 3, 4, 5, 6],
        )?;
        super::write_image_ppm(&file_path, &image)?;

        let contents = std::fs::read_to_string(&file_path)?;
        assert_eq!(contents, "P3\n2 1\n255\n1 2 3 4 5 6\n");
        Ok(())
    }

    #[test]
    fn read_missing_file() {
        let result = super::read_image_ppm("/nonexistent/missing.ppm");
        assert!(matches!(result, Err(IoError::FileDoesNotExist(_))));
    }
}
