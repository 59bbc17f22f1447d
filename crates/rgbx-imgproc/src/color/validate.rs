use rgbx_image::ImageSize;
use rgbx_tensor::{TensorLike, TensorRead};

use super::{ColorConversion, ColorError};

/// Check whether a buffer is laid out as an RGB image.
///
/// Returns `true` iff the buffer has exactly 3 dimensions and the last one has size 3.
/// The channel order is not inspected; it is the caller's contract.
///
/// # Example
///
/// ```
/// use rgbx_tensor::Tensor;
/// use rgbx_imgproc::color::is_rgb_image;
///
/// let rgb = Tensor::<u8, 3>::from_shape_val([4, 5, 3], 0);
/// let gray = Tensor::<u8, 2>::from_shape_val([4, 5], 0);
///
/// assert!(is_rgb_image(&rgb));
/// assert!(!is_rgb_image(&gray));
/// ```
pub fn is_rgb_image<B: TensorLike + ?Sized>(buffer: &B) -> bool {
    matches!(buffer.shape(), [_, _, 3])
}

/// A validated RGB input: its size and its samples in row-major order.
pub(crate) struct RgbInput<'a, T> {
    pub size: ImageSize,
    pub samples: &'a [T],
}

/// Validate `buffer` as the input of `transform`.
pub(crate) fn check_rgb_image<T, B>(
    buffer: &B,
    transform: ColorConversion,
) -> Result<RgbInput<'_, T>, ColorError>
where
    B: TensorRead<T> + ?Sized,
{
    let shape = buffer.shape();
    if !is_rgb_image(buffer) {
        log::trace!("{transform}: rejecting buffer of shape {shape:?}");
        return Err(ColorError::InvalidShape {
            transform,
            rank: shape.len(),
            shape: shape.to_vec(),
        });
    }

    let samples = buffer
        .as_contiguous_slice()
        .ok_or_else(|| ColorError::TypeMismatch {
            transform,
            reason: "samples are not stored contiguously in row-major order".to_string(),
        })?;

    let expected = shape.iter().product::<usize>();
    if samples.len() != expected {
        return Err(ColorError::TypeMismatch {
            transform,
            reason: format!(
                "shape {shape:?} holds {expected} samples but the buffer has {}",
                samples.len()
            ),
        });
    }

    Ok(RgbInput {
        size: ImageSize {
            width: shape[1],
            height: shape[0],
        },
        samples,
    })
}
