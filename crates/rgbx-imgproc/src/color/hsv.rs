use rgbx_tensor::TensorRead;

use super::{ColorConverter, ColorError};
use rgbx_image::{
    color_spaces::{Hsv8, Hsvf32},
    HueRange, ImageDtype,
};

/// Hue in degrees `[0, 360)` of a pixel whose largest channel is `max`.
///
/// `delta` is `max - min`; an achromatic pixel (`delta == 0`) has hue 0.
#[inline]
pub(crate) fn hue_degrees(rgb: [f32; 3], max: f32, delta: f32) -> f32 {
    let [r, g, b] = rgb;

    if delta == 0.0 {
        return 0.0;
    }

    let h = if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    // Ensure h is in the range [0, 360)
    let h = if h < 0.0 { h + 360.0 } else { h };
    if h >= 360.0 {
        h - 360.0
    } else {
        h
    }
}

/// Scale a hue in degrees to half-degrees, wrapping 180 to 0.
#[inline]
pub(crate) fn half_degrees_u8(h: f32) -> u8 {
    let h = HueRange::HalfDegrees.from_degrees(h).round();
    if h >= HueRange::HalfDegrees.max() {
        0
    } else {
        u8::from_f32(h)
    }
}

/// `[h, s, v]` of an `[r, g, b]` pixel on the 0-255 scale.
///
/// H is in degrees, S and V in `[0, 1]`.
#[inline]
pub(crate) fn hsv_pixel(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = hue_degrees(rgb, max, delta);
    let s = if max == 0.0 { 0.0 } else { delta / max };
    let v = max / 255.0;

    [h, s, v]
}

/// Pack a float HSV pixel into 8 bits: H in half-degrees, S and V times 255.
#[inline]
pub(crate) fn pack_hsv_u8(hsv: [f32; 3]) -> [u8; 3] {
    let [h, s, v] = hsv;
    [
        half_degrees_u8(h),
        u8::from_f32(s * 255.0),
        u8::from_f32(v * 255.0),
    ]
}

/// Convert an RGB image to an HSV image.
///
/// The input image is assumed to have 3 channels in the order R, G, B with samples
/// on the 0-255 scale.
///
/// # Returns
///
/// The HSV image with the following channels:
///
/// * H: The hue channel in degrees, in the range [0, 360).
/// * S: The saturation channel in the range [0, 1].
/// * V: The value channel in the range [0, 1].
///
/// Achromatic pixels have H = 0 and S = 0.
///
/// # Errors
///
/// [`ColorError::InvalidShape`] if `src` is not a rank-3 buffer with 3 channels,
/// [`ColorError::TypeMismatch`] if its samples are not readable in row-major order.
///
/// # Example
///
/// ```
/// use rgbx_image::{HueRange, Image, ImageSize};
/// use rgbx_imgproc::color::rgb_to_hsv;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///        width: 4,
///        height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let hsv = rgb_to_hsv(&image).unwrap();
///
/// assert_eq!(hsv.num_channels(), 3);
/// assert_eq!(hsv.hue_range(), HueRange::Degrees);
/// assert_eq!(hsv.size(), image.size());
/// ```
pub fn rgb_to_hsv<T, B>(src: &B) -> Result<Hsvf32, ColorError>
where
    T: ImageDtype,
    B: TensorRead<T> + ?Sized,
{
    ColorConverter::default().rgb_to_hsv(src)
}

/// Convert an RGB image to an 8-bit HSV image.
///
/// H is stored in half-degrees `[0, 180)`, S and V are scaled to `[0, 255]`.
pub fn rgb_to_hsv_u8<T, B>(src: &B) -> Result<Hsv8, ColorError>
where
    T: ImageDtype,
    B: TensorRead<T> + ?Sized,
{
    ColorConverter::default().rgb_to_hsv_u8(src)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rgbx_image::{Image, ImageSize};

    #[test]
    fn hsv_from_rgb() -> Result<(), Box<dyn std::error::Error>> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![
                0, 128, 255, 255, 128, 0, 128, 255, 0, 255, 0, 128, 0, 128, 255, 255, 128, 0,
            ],
        )?;

        let expected: [f32; 18] = [
            209.88235, 1.0, 1.0, 30.117647, 1.0, 1.0, 89.88235, 1.0, 1.0, 329.88235, 1.0, 1.0,
            209.88235, 1.0, 1.0, 30.117647, 1.0, 1.0,
        ];

        let hsv = super::rgb_to_hsv(&image)?;

        assert_eq!(hsv.num_channels(), 3);
        assert_eq!(hsv.size().width, 2);
        assert_eq!(hsv.size().height, 3);

        for (a, b) in hsv.as_slice().iter().zip(expected.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-3);
        }

        Ok(())
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(super::hsv_pixel([255.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
        assert_eq!(super::hsv_pixel([0.0, 255.0, 0.0]), [120.0, 1.0, 1.0]);
        assert_eq!(super::hsv_pixel([0.0, 0.0, 255.0]), [240.0, 1.0, 1.0]);
        assert_eq!(super::hsv_pixel([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn hsv_u8_packing() -> Result<(), Box<dyn std::error::Error>> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![0, 128, 255, 255, 0, 0, 64, 64, 64],
        )?;

        let hsv = super::rgb_to_hsv_u8(&image)?;
        assert_eq!(hsv.as_slice(), &[105, 255, 255, 0, 255, 255, 0, 0, 64]);

        Ok(())
    }

    #[test]
    fn half_degree_hue_wraps() {
        assert_eq!(super::half_degrees_u8(359.5), 0);
        assert_eq!(super::half_degrees_u8(240.0), 120);
    }
}
