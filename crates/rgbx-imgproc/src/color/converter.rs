use rgbx_image::{
    color_spaces::{Bgr8, Gray8, Hls8, Hlsf32, Hsv8, Hsvf32, Lab8, Labf32},
    ColorSpace, Image, ImageDtype,
};
use rgbx_tensor::TensorRead;

use super::{bgr, gray, hls, hsv, lab, validate, ColorConversion, ColorError};
use crate::parallel::{self, ExecutionStrategy};

/// Runs the RGB conversions with a chosen execution strategy.
///
/// The free functions in [`crate::color`] use `ColorConverter::default()`, which
/// processes rows in parallel. Every strategy produces identical output.
///
/// # Example
///
/// ```
/// use rgbx_image::ImageSize;
/// use rgbx_image::color_spaces::Rgb8;
/// use rgbx_imgproc::color::ColorConverter;
/// use rgbx_imgproc::parallel::ExecutionStrategy;
///
/// let rgb = Rgb8::from_size_vec(ImageSize { width: 1, height: 1 }, vec![255, 0, 0]).unwrap();
///
/// let converter = ColorConverter::new(ExecutionStrategy::Serial);
/// let gray = converter.rgb_to_gray(&rgb).unwrap();
/// assert_eq!(gray.as_slice(), &[76]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorConverter {
    strategy: ExecutionStrategy,
}

impl ColorConverter {
    /// Create a converter running with `strategy`.
    pub fn new(strategy: ExecutionStrategy) -> Self {
        Self { strategy }
    }

    /// The execution strategy of the pixel loop.
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Convert an RGB image to BGR. See [`crate::color::rgb_to_bgr`].
    pub fn rgb_to_bgr<T, B>(&self, src: &B) -> Result<Bgr8, ColorError>
    where
        T: ImageDtype,
        B: TensorRead<T> + ?Sized,
    {
        self.run(src, ColorConversion::RgbToBgr, |rgb, dst| {
            let bgr = bgr::bgr_pixel(rgb);
            dst.iter_mut()
                .zip(bgr)
                .for_each(|(d, s)| *d = u8::from_f32(s));
        })
        .map(Bgr8)
    }

    /// Convert an RGB image to grayscale. See [`crate::color::rgb_to_gray`].
    pub fn rgb_to_gray<T, B>(&self, src: &B) -> Result<Gray8, ColorError>
    where
        T: ImageDtype,
        B: TensorRead<T> + ?Sized,
    {
        self.run(src, ColorConversion::RgbToGray, |rgb, dst| {
            dst[0] = gray::luma_u8(rgb);
        })
        .map(Gray8)
    }

    /// Convert an RGB image to HSV. See [`crate::color::rgb_to_hsv`].
    pub fn rgb_to_hsv<T, B>(&self, src: &B) -> Result<Hsvf32, ColorError>
    where
        T: ImageDtype,
        B: TensorRead<T> + ?Sized,
    {
        self.run(src, ColorConversion::RgbToHsv, |rgb, dst| {
            dst.copy_from_slice(&hsv::hsv_pixel(rgb));
        })
        .map(Hsvf32)
    }

    /// Convert an RGB image to 8-bit HSV. See [`crate::color::rgb_to_hsv_u8`].
    pub fn rgb_to_hsv_u8<T, B>(&self, src: &B) -> Result<Hsv8, ColorError>
    where
        T: ImageDtype,
        B: TensorRead<T> + ?Sized,
    {
        self.run(src, ColorConversion::RgbToHsv, |rgb, dst| {
            dst.copy_from_slice(&hsv::pack_hsv_u8(hsv::hsv_pixel(rgb)));
        })
        .map(Hsv8)
    }

    /// Convert an RGB image to CIE L*a*b*. See [`crate::color::rgb_to_lab`].
    pub fn rgb_to_lab<T, B>(&self, src: &B) -> Result<Labf32, ColorError>
    where
        T: ImageDtype,
        B: TensorRead<T> + ?Sized,
    {
        self.run(src, ColorConversion::RgbToLab, |rgb, dst| {
            dst.copy_from_slice(&lab::lab_pixel(rgb));
        })
        .map(Labf32)
    }

    /// Convert an RGB image to 8-bit CIE L*a*b*. See [`crate::color::rgb_to_lab_u8`].
    pub fn rgb_to_lab_u8<T, B>(&self, src: &B) -> Result<Lab8, ColorError>
    where
        T: ImageDtype,
        B: TensorRead<T> + ?Sized,
    {
        self.run(src, ColorConversion::RgbToLab, |rgb, dst| {
            dst.copy_from_slice(&lab::pack_lab_u8(lab::lab_pixel(rgb)));
        })
        .map(Lab8)
    }

    /// Convert an RGB image to HLS. See [`crate::color::rgb_to_hls`].
    pub fn rgb_to_hls<T, B>(&self, src: &B) -> Result<Hlsf32, ColorError>
    where
        T: ImageDtype,
        B: TensorRead<T> + ?Sized,
    {
        self.run(src, ColorConversion::RgbToHls, |rgb, dst| {
            dst.copy_from_slice(&hls::hls_pixel(rgb));
        })
        .map(Hlsf32)
    }

    /// Convert an RGB image to 8-bit HLS. See [`crate::color::rgb_to_hls_u8`].
    pub fn rgb_to_hls_u8<T, B>(&self, src: &B) -> Result<Hls8, ColorError>
    where
        T: ImageDtype,
        B: TensorRead<T> + ?Sized,
    {
        self.run(src, ColorConversion::RgbToHls, |rgb, dst| {
            dst.copy_from_slice(&hls::pack_hls_u8(hls::hls_pixel(rgb)));
        })
        .map(Hls8)
    }

    /// Validate `src`, allocate the output and apply `f` to every pixel.
    ///
    /// `f` receives the source pixel as `[r, g, b]` on the 0-255 scale.
    fn run<T, B, U, const C: usize>(
        &self,
        src: &B,
        transform: ColorConversion,
        f: impl Fn([f32; 3], &mut [U]) + Send + Sync,
    ) -> Result<Image<U, C>, ColorError>
    where
        T: ImageDtype,
        B: TensorRead<T> + ?Sized,
        U: ImageDtype,
    {
        let input = validate::check_rgb_image(src, transform)?;

        log::debug!(
            "{transform}: {} -> {} on {} ({:?})",
            ColorSpace::Rgb,
            transform.target(),
            input.size,
            self.strategy
        );

        let mut dst = Image::<U, C>::from_size_val(input.size, U::default());
        if input.size.width == 0 || input.size.height == 0 {
            return Ok(dst);
        }

        parallel::par_iter_rows::<T, 3, U, C>(input.samples, &mut dst, self.strategy, |s, d| {
            f([sample(s[0]), sample(s[1]), sample(s[2])], d);
        });

        Ok(dst)
    }
}

/// Read a sample on the 0-255 scale, saturating values outside it. NaN reads as 0.
#[inline]
fn sample<T: ImageDtype>(x: T) -> f32 {
    x.to_f32().max(0.0).min(255.0)
}
