use rastermix_image::{Image, ImageError};

use crate::parallel;

/// Number of frames generated by [`fade_from_black`].
pub const FADE_STEPS: u16 = 6;

/// Number of frames generated by [`cross_fade`].
pub const CROSS_FADE_STEPS: u16 = 11;

/// Generate the frames of a fade-in from black.
///
/// Frame `k` (k = 0..6) scales every channel by `k / 5`, truncating toward
/// zero. Frame 0 is fully black and frame 5 equals the input exactly.
///
/// # Arguments
///
/// * `src` - The input RGB image.
///
/// # Returns
///
/// The ordered list of 6 frames.
///
/// # Example
///
/// ```
/// use rastermix_image::{Image, ImageSize};
/// use rastermix_imgproc::blend::fade_from_black;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![100, 150, 200],
/// )
/// .unwrap();
///
/// let frames = fade_from_black(&image).unwrap();
///
/// assert_eq!(frames.len(), 6);
/// assert_eq!(frames[0].as_slice(), &[0, 0, 0]);
/// assert_eq!(frames[5].as_slice(), &[100, 150, 200]);
/// ```
pub fn fade_from_black(src: &Image<u8, 3>) -> Result<Vec<Image<u8, 3>>, ImageError> {
    let mut frames = Vec::with_capacity(FADE_STEPS as usize);

    for k in 0..FADE_STEPS {
        let mut dst = Image::from_size_val(src.size(), 0u8)?;
        // c * k / 5 in u16 is an exact floor of c * (k / 5)
        parallel::par_iter_rows_val(src, &mut dst, |&src_val, dst_val| {
            *dst_val = (u16::from(src_val) * k / 5) as u8;
        });
        frames.push(dst);
    }

    Ok(frames)
}

/// Generate the frames of a linear cross-fade between two images.
///
/// Frame `k` (k = 0..11) interpolates each channel as
/// `c1 * (1 - k / 10) + c2 * (k / 10)`, truncating toward zero. Frame 0
/// equals the first image and frame 10 equals the second.
///
/// # Arguments
///
/// * `src1` - The image faded out.
/// * `src2` - The image faded in. Must have the same size as `src1`.
///
/// # Returns
///
/// The ordered list of 11 frames.
///
/// # Errors
///
/// Returns an error if the sizes of `src1` and `src2` do not match.
pub fn cross_fade(
    src1: &Image<u8, 3>,
    src2: &Image<u8, 3>,
) -> Result<Vec<Image<u8, 3>>, ImageError> {
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }

    let mut frames = Vec::with_capacity(CROSS_FADE_STEPS as usize);

    for k in 0..CROSS_FADE_STEPS {
        let mut dst = Image::from_size_val(src1.size(), 0u8)?;
        parallel::par_iter_rows_val_two(src1, src2, &mut dst, |&a, &b, dst_val| {
            *dst_val = ((u16::from(a) * (10 - k) + u16::from(b) * k) / 10) as u8;
        });
        frames.push(dst);
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use rastermix_image::{Image, ImageError, ImageSize};

    fn gradient_image() -> Result<Image<u8, 3>, ImageError> {
        Image::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120],
        )
    }

    #[test]
    fn test_fade_endpoints() -> Result<(), ImageError> {
        let image = gradient_image()?;
        let frames = super::fade_from_black(&image)?;
        assert_eq!(frames.len(), 6);
        assert!(frames[0].as_slice().iter().all(|&v| v == 0));
        assert_eq!(frames[5], image);
        Ok(())
    }

    #[test]
    fn test_fade_truncates() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![7, 13, 255],
        )?;
        let frames = super::fade_from_black(&image)?;
        // frame 2 scales by 2/5: floor(7*2/5)=2, floor(13*2/5)=5, floor(255*2/5)=102
        assert_eq!(frames[2].as_slice(), &[2, 5, 102]);
        Ok(())
    }

    #[test]
    fn test_cross_fade_endpoints() -> Result<(), ImageError> {
        let a = gradient_image()?;
        let b = Image::from_size_val(a.size(), 200u8)?;
        let frames = super::cross_fade(&a, &b)?;
        assert_eq!(frames.len(), 11);
        assert_eq!(frames[0], a);
        assert_eq!(frames[10], b);
        Ok(())
    }

    #[test]
    fn test_cross_fade_identical_inputs() -> Result<(), ImageError> {
        let a = gradient_image()?;
        let frames = super::cross_fade(&a, &a)?;
        assert_eq!(frames.len(), 11);
        for frame in &frames {
            assert_eq!(frame, &a);
        }
        Ok(())
    }

    #[test]
    fn test_cross_fade_size_mismatch() -> Result<(), ImageError> {
        let a = gradient_image()?;
        let b = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0u8,
        )?;
        let result = super::cross_fade(&a, &b);
        assert!(matches!(
            result,
            Err(ImageError::InvalidImageSize(2, 2, 3, 2))
        ));
        Ok(())
    }

    #[test]
    fn test_cross_fade_midpoint() -> Result<(), ImageError> {
        let a = Image::<u8, 3>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![0, 100, 255],
        )?;
        let b = Image::<u8, 3>::new(a.size(), vec![10, 0, 255])?;
        let frames = super::cross_fade(&a, &b)?;
        // k=5: floor((c1*5 + c2*5) / 10)
        assert_eq!(frames[5].as_slice(), &[5, 50, 255]);
        Ok(())
    }
}
