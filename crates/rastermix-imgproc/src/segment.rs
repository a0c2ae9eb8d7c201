use rastermix_image::{Image, ImageError};

use crate::parallel;

/// Default per-channel tolerance for [`segment_by_color`].
pub const DEFAULT_TOLERANCE: i32 = 30;

/// Segment an image by distance to a target color.
///
/// A pixel is kept unchanged when every channel is within `tolerance`
/// (inclusive) of the corresponding `target` channel; otherwise it becomes
/// black. The target components are used as given, without clamping, so
/// out-of-range values simply make the comparison stricter or laxer.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `target` - The target color as an RGB triple.
/// * `tolerance` - The inclusive per-channel threshold.
///
/// # Returns
///
/// The segmented image with the same dimensions.
///
/// # Example
///
/// ```
/// use rastermix_image::{Image, ImageSize};
/// use rastermix_imgproc::segment::{segment_by_color, DEFAULT_TOLERANCE};
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![250, 5, 2],
/// )
/// .unwrap();
///
/// let segmented = segment_by_color(&image, [255, 0, 0], DEFAULT_TOLERANCE).unwrap();
///
/// assert_eq!(segmented.as_slice(), &[250, 5, 2]);
/// ```
pub fn segment_by_color(
    src: &Image<u8, 3>,
    target: [i32; 3],
    tolerance: i32,
) -> Result<Image<u8, 3>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0u8)?;

    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        let close = src_pixel
            .iter()
            .zip(target.iter())
            .all(|(&p, &t)| (i32::from(p) - t).abs() <= tolerance);
        // pixels outside the tolerance stay at the black fill
        if close {
            dst_pixel.copy_from_slice(src_pixel);
        }
    });

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use rastermix_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_segment_keeps_and_zeroes() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![250, 5, 2, 200, 0, 0],
        )?;
        let segmented = super::segment_by_color(&image, [255, 0, 0], 10)?;
        // (250,5,2) is within 10 of (255,0,0); (200,0,0) differs by 55 on red
        assert_eq!(segmented.as_slice(), &[250, 5, 2, 0, 0, 0]);
        Ok(())
    }

    #[test]
    fn test_segment_idempotent() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![120, 130, 140, 10, 20, 30, 125, 125, 125],
        )?;
        let once = super::segment_by_color(&image, [128, 128, 128], super::DEFAULT_TOLERANCE)?;
        let twice = super::segment_by_color(&once, [128, 128, 128], super::DEFAULT_TOLERANCE)?;
        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn test_segment_target_out_of_range() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![255, 255, 255],
        )?;
        // a target beyond the channel range is used as-is
        let segmented = super::segment_by_color(&image, [300, 300, 300], 40)?;
        assert_eq!(segmented.as_slice(), &[0, 0, 0]);

        let segmented = super::segment_by_color(&image, [300, 300, 300], 45)?;
        assert_eq!(segmented.as_slice(), &[255, 255, 255]);
        Ok(())
    }
}
