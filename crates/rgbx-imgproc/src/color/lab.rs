use rgbx_image::{
    color_spaces::{Lab8, Labf32},
    ImageDtype,
};
use rgbx_tensor::TensorRead;

use super::{ColorConverter, ColorError};

/// Linear sRGB to CIE XYZ, D65 illuminant.
const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
];

/// The D65 reference white, the row sums of [`SRGB_TO_XYZ`].
const WHITE_POINT: [f32; 3] = [0.950456, 1.0, 1.088754];

/// CIE epsilon, `(6/29)^3`.
const EPSILON: f32 = 216.0 / 24389.0;

/// CIE kappa, `(29/3)^3`.
const KAPPA: f32 = 24389.0 / 27.0;

/// Undo the sRGB transfer curve of a channel in `[0, 1]`.
#[inline]
pub(crate) fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// `[l, a, b]` of an `[r, g, b]` pixel on the 0-255 scale.
#[inline]
pub(crate) fn lab_pixel(rgb: [f32; 3]) -> [f32; 3] {
    let linear = rgb.map(|c| srgb_to_linear(c / 255.0));

    let xyz = SRGB_TO_XYZ.map(|row| row[0] * linear[0] + row[1] * linear[1] + row[2] * linear[2]);

    let [fx, fy, fz] = [0, 1, 2].map(|i| lab_f(xyz[i] / WHITE_POINT[i]));

    let l = (116.0 * fy - 16.0).max(0.0);
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    [l, a, b]
}

/// Pack a float Lab pixel into 8 bits: `L * 255 / 100`, `a + 128`, `b + 128`.
#[inline]
pub(crate) fn pack_lab_u8(lab: [f32; 3]) -> [u8; 3] {
    let [l, a, b] = lab;
    [
        u8::from_f32(l * 255.0 / 100.0),
        u8::from_f32(a + 128.0),
        u8::from_f32(b + 128.0),
    ]
}

/// Convert an RGB image to a CIE L*a*b* image.
///
/// The input is treated as sRGB: each channel is linearized, projected to XYZ
/// with the D65 matrix and normalized by the D65 white point.
///
/// # Returns
///
/// * L: The lightness in the range [0, 100].
/// * a: The green-red axis, roughly in [-86, 98] for sRGB inputs.
/// * b: The blue-yellow axis, roughly in [-108, 95] for sRGB inputs.
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
/// use rgbx_imgproc::color::rgb_to_lab;
///
/// let image = Image::<u8, 3>::new(ImageSize { width: 1, height: 1 }, vec![0, 0, 0]).unwrap();
///
/// let lab = rgb_to_lab(&image).unwrap();
/// assert!(lab.as_slice().iter().all(|v| v.abs() < 1e-4));
/// ```
pub fn rgb_to_lab<T, B>(src: &B) -> Result<Labf32, ColorError>
where
    T: ImageDtype,
    B: TensorRead<T> + ?Sized,
{
    ColorConverter::default().rgb_to_lab(src)
}

/// Convert an RGB image to an 8-bit CIE L*a*b* image.
///
/// L is scaled to `[0, 255]`, a and b are offset by 128.
pub fn rgb_to_lab_u8<T, B>(src: &B) -> Result<Lab8, ColorError>
where
    T: ImageDtype,
    B: TensorRead<T> + ?Sized,
{
    ColorConverter::default().rgb_to_lab_u8(src)
}
