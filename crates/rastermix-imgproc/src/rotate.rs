use rastermix_image::{Image, ImageError, ImageSize};
use rayon::{iter::IndexedParallelIterator, iter::ParallelIterator, slice::ParallelSliceMut};

/// Rotate the input image 90 degrees clockwise.
///
/// For an input of H rows and W columns the output has W rows and H columns,
/// with `dst[j][H - 1 - i] = src[i][j]`.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The rotated image with shape (W, H, C).
///
/// # Example
///
/// ```
/// use rastermix_image::{Image, ImageSize};
/// use rastermix_imgproc::rotate::rotate_cw90;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0u8; 2 * 3 * 3],
/// )
/// .unwrap();
///
/// let rotated = rotate_cw90(&image).unwrap();
///
/// assert_eq!(rotated.size().width, 3);
/// assert_eq!(rotated.size().height, 2);
/// ```
pub fn rotate_cw90<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default + Send + Sync,
{
    let (h, w) = (src.rows(), src.cols());
    let src_data = src.as_slice();

    let mut dst = Image::from_size_val(
        ImageSize {
            width: h,
            height: w,
        },
        T::default(),
    )?;

    // dst row j holds column j of the source, read bottom-up
    dst.as_slice_mut()
        .par_chunks_exact_mut(h * C)
        .enumerate()
        .for_each(|(j, dst_row)| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(t, dst_pixel)| {
                    let i = h - 1 - t;
                    let idx = (i * w + j) * C;
                    dst_pixel.copy_from_slice(&src_data[idx..idx + C]);
                });
        });

    Ok(dst)
}

/// Rotate the input image 90 degrees counter-clockwise.
///
/// For an input of H rows and W columns the output has W rows and H columns,
/// with `dst[W - 1 - j][i] = src[i][j]`.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The rotated image with shape (W, H, C).
pub fn rotate_ccw90<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default + Send + Sync,
{
    let (h, w) = (src.rows(), src.cols());
    let src_data = src.as_slice();

    let mut dst = Image::from_size_val(
        ImageSize {
            width: h,
            height: w,
        },
        T::default(),
    )?;

    // dst row r holds column (W - 1 - r) of the source, read top-down
    dst.as_slice_mut()
        .par_chunks_exact_mut(h * C)
        .enumerate()
        .for_each(|(r, dst_row)| {
            let j = w - 1 - r;
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(i, dst_pixel)| {
                    let idx = (i * w + j) * C;
                    dst_pixel.copy_from_slice(&src_data[idx..idx + C]);
                });
        });

    Ok(dst)
}
