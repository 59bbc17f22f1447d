use rgbx_image::color_spaces::{Bgr8, Gray8, Hls8, Hlsf32, Hsv8, Hsvf32, Lab8, Labf32, Rgb8};

use super::ColorError;

/// Trait for type-safe color space conversion
///
/// The transform is selected by the destination type, so a conversion into a
/// colorspace that has no route from the source does not compile.
///
/// # Example
///
/// ```
/// use rgbx_image::ImageSize;
/// use rgbx_imgproc::color::{ConvertColor, Gray8, Hsv8, Rgb8};
///
/// let rgb = Rgb8::from_size_vec(
///     ImageSize { width: 2, height: 1 },
///     vec![255, 0, 0, 0, 0, 255],
/// )
/// .unwrap();
///
/// let gray: Gray8 = rgb.convert().unwrap();
/// assert_eq!(gray.as_slice(), &[76, 29]);
///
/// let hsv: Hsv8 = rgb.convert().unwrap();
/// assert_eq!(hsv.as_slice(), &[0, 255, 255, 120, 255, 255]);
/// ```
pub trait ConvertColor<Dst> {
    /// Convert this image to another color space
    fn convert(&self) -> Result<Dst, ColorError>;
}

/// Macro to implement color conversions
macro_rules! impl_convert {
    ($src:ty => $dst:ty, $func:path) => {
        impl ConvertColor<$dst> for $src {
            fn convert(&self) -> Result<$dst, ColorError> {
                $func(&self.0)
            }
        }
    };
}

impl_convert!(Rgb8 => Bgr8, crate::color::rgb_to_bgr);
impl_convert!(Rgb8 => Gray8, crate::color::rgb_to_gray);
impl_convert!(Rgb8 => Hsvf32, crate::color::rgb_to_hsv);
impl_convert!(Rgb8 => Hsv8, crate::color::rgb_to_hsv_u8);
impl_convert!(Rgb8 => Labf32, crate::color::rgb_to_lab);
impl_convert!(Rgb8 => Lab8, crate::color::rgb_to_lab_u8);
impl_convert!(Rgb8 => Hlsf32, crate::color::rgb_to_hls);
impl_convert!(Rgb8 => Hls8, crate::color::rgb_to_hls_u8);

#[cfg(test)]
mod tests {
    use super::*;
    use rgbx_image::{ColorSpace, HueRange, ImageSize};

    fn rgb() -> Result<Rgb8, Box<dyn std::error::Error>> {
        Ok(Rgb8::from_size_vec(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 128, 128, 128],
        )?)
    }

    #[test]
    fn test_rgb_to_bgr() -> Result<(), Box<dyn std::error::Error>> {
        let bgr: Bgr8 = rgb()?.convert()?;
        assert_eq!(bgr.color_space(), ColorSpace::Bgr);
        assert_eq!(
            bgr.as_slice(),
            &[0, 0, 255, 0, 255, 0, 255, 0, 0, 128, 128, 128]
        );
        Ok(())
    }

    #[test]
    fn test_rgb_to_gray() -> Result<(), Box<dyn std::error::Error>> {
        let gray: Gray8 = rgb()?.convert()?;
        assert_eq!(gray.num_channels(), 1);
        assert_eq!(gray.as_slice(), &[76, 150, 29, 128]);
        Ok(())
    }

    #[test]
    fn test_trait_matches_functions() -> Result<(), Box<dyn std::error::Error>> {
        let rgb = rgb()?;

        let hsv: Hsvf32 = rgb.convert()?;
        assert_eq!(hsv, crate::color::rgb_to_hsv(&rgb)?);
        assert_eq!(hsv.hue_range(), HueRange::Degrees);

        let hsv8: Hsv8 = rgb.convert()?;
        assert_eq!(hsv8.hue_range(), HueRange::HalfDegrees);
        assert_eq!(hsv8.as_slice()[..6], [0, 255, 255, 60, 255, 255]);

        let lab: Labf32 = rgb.convert()?;
        assert_eq!(lab, crate::color::rgb_to_lab(&rgb)?);

        let lab8: Lab8 = rgb.convert()?;
        assert_eq!(lab8, crate::color::rgb_to_lab_u8(&rgb)?);

        let hls: Hlsf32 = rgb.convert()?;
        assert_eq!(hls.color_space(), ColorSpace::Hls);
        assert_eq!(hls, crate::color::rgb_to_hls(&rgb)?);

        let hls8: Hls8 = rgb.convert()?;
        assert_eq!(hls8, crate::color::rgb_to_hls_u8(&rgb)?);

        Ok(())
    }
}
