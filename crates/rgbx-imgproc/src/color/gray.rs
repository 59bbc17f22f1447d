use rgbx_tensor::TensorRead;

use super::{ColorConverter, ColorError};
use rgbx_image::{color_spaces::Gray8, ImageDtype};

/// Define the RGB weights for the grayscale conversion.
const RW: f64 = 0.299;
const GW: f64 = 0.587;
const BW: f64 = 0.114;

/// Luma of an `[r, g, b]` pixel, rounded half away from zero and clamped to `u8`.
#[inline]
pub(crate) fn luma_u8(rgb: [f32; 3]) -> u8 {
    let [r, g, b] = rgb.map(f64::from);
    (RW * r + GW * g + BW * b).round().clamp(0.0, 255.0) as u8
}

/// Convert an RGB image to grayscale using the formula:
///
/// Y = round(0.299 * R + 0.587 * G + 0.114 * B)
///
/// # Arguments
///
/// * `src` - The input RGB image with shape `(H, W, 3)`.
///
/// # Returns
///
/// A new 8-bit grayscale image with shape `(H, W, 1)`.
///
/// # Errors
///
/// [`ColorError::InvalidShape`] if `src` is not a rank-3 buffer with 3 channels,
/// [`ColorError::TypeMismatch`] if its samples are not readable in row-major order.
///
/// # Example
///
/// ```
/// use rgbx_image::{Image, ImageSize};
/// use rgbx_imgproc::color::rgb_to_gray;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let gray = rgb_to_gray(&image).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.size().width, 4);
/// assert_eq!(gray.size().height, 5);
/// ```
pub fn rgb_to_gray<T, B>(src: &B) -> Result<Gray8, ColorError>
where
    T: ImageDtype,
    B: TensorRead<T> + ?Sized,
{
    ColorConverter::default().rgb_to_gray(src)
}
