use rgbx_image::{
    color_spaces::{Hls8, Hlsf32},
    ImageDtype,
};
use rgbx_tensor::TensorRead;

use super::{hsv, ColorConverter, ColorError};

/// `[h, l, s]` of an `[r, g, b]` pixel on the 0-255 scale.
#[inline]
pub(crate) fn hls_pixel(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let sum = max + min;

    let h = hsv::hue_degrees(rgb, max, delta);
    let l = sum / 2.0 / 255.0;
    let s = if delta == 0.0 {
        0.0
    } else if sum / 2.0 < 127.5 {
        delta / sum
    } else {
        delta / (510.0 - sum)
    };

    [h, l, s]
}

/// Pack a float HLS pixel into 8 bits: H in half-degrees, L and S times 255.
#[inline]
pub(crate) fn pack_hls_u8(hls: [f32; 3]) -> [u8; 3] {
    let [h, l, s] = hls;
    [
        hsv::half_degrees_u8(h),
        u8::from_f32(l * 255.0),
        u8::from_f32(s * 255.0),
    ]
}

/// Convert an RGB image to an HLS image.
///
/// The output channels are stored in the order H, L, S:
///
/// * H: The hue channel in degrees, in the range [0, 360). Same as [`super::rgb_to_hsv`].
/// * L: The lightness `(max + min) / 2` in the range [0, 1].
/// * S: The saturation in the range [0, 1], 0 for achromatic pixels.
///
/// # Errors
///
/// See [`super::rgb_to_hsv`].
///
/// # Example
///
/// ```
/// use rgbx_image::{Image, ImageSize};
/// use rgbx_imgproc::color::rgb_to_hls;
///
/// let image = Image::<u8, 3>::new(ImageSize { width: 1, height: 1 }, vec![255, 0, 0]).unwrap();
///
/// let hls = rgb_to_hls(&image).unwrap();
/// assert_eq!(hls.as_slice(), &[0.0, 0.5, 1.0]);
/// ```
pub fn rgb_to_hls<T, B>(src: &B) -> Result<Hlsf32, ColorError>
where
    T: ImageDtype,
    B: TensorRead<T> + ?Sized,
{
    ColorConverter::default().rgb_to_hls(src)
}

/// Convert an RGB image to an 8-bit HLS image.
///
/// H is stored in half-degrees `[0, 180)`, L and S are scaled to `[0, 255]`.
pub fn rgb_to_hls_u8<T, B>(src: &B) -> Result<Hls8, ColorError>
where
    T: ImageDtype,
    B: TensorRead<T> + ?Sized,
{
    ColorConverter::default().rgb_to_hls_u8(src)
}
