use rgbx_tensor::TensorRead;

use super::{ColorConverter, ColorError};
use rgbx_image::{color_spaces::Bgr8, ImageDtype};

/// Reverse the channel order of an `[r, g, b]` pixel.
#[inline]
pub(crate) fn bgr_pixel(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    [b, g, r]
}

/// Convert an RGB image to BGR by swapping the red and blue channels.
///
/// # Arguments
///
/// * `src` - The input RGB image with shape `(H, W, 3)`.
///
/// # Returns
///
/// A new BGR image of the same size with 8-bit channels.
///
/// # Errors
///
/// [`ColorError::InvalidShape`] if `src` is not a rank-3 buffer with 3 channels,
/// [`ColorError::TypeMismatch`] if its samples are not readable in row-major order.
///
/// # Example
///
/// ```
/// use rgbx_tensor::Tensor;
/// use rgbx_imgproc::color::rgb_to_bgr;
///
/// let rgb = Tensor::<u8, 3>::from_shape_vec([1, 1, 3], vec![255, 0, 0]).unwrap();
/// let bgr = rgb_to_bgr(&rgb).unwrap();
/// assert_eq!(bgr.as_slice(), &[0, 0, 255]);
/// ```
pub fn rgb_to_bgr<T, B>(src: &B) -> Result<Bgr8, ColorError>
where
    T: ImageDtype,
    B: TensorRead<T> + ?Sized,
{
    ColorConverter::default().rgb_to_bgr(src)
}
