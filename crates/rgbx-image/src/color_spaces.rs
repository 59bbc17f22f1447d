use crate::{
    error::ImageError,
    image::{Image, ImageSize},
};
use rgbx_tensor::{TensorLike, TensorRead};
use std::ops::{Deref, DerefMut};

/// The colorspace a buffer represents.
///
/// The tag is never stored in the pixel data. It is carried by the typed wrappers
/// below through their associated `COLOR_SPACE` constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Red, green, blue.
    Rgb,
    /// Blue, green, red.
    Bgr,
    /// Single luma channel.
    Gray,
    /// Hue, saturation, value.
    Hsv,
    /// CIE L*a*b* against the D65 white point.
    Lab,
    /// Hue, lightness, saturation.
    Hls,
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ColorSpace::Rgb => "RGB",
            ColorSpace::Bgr => "BGR",
            ColorSpace::Gray => "Grayscale",
            ColorSpace::Hsv => "HSV",
            ColorSpace::Lab => "LAB",
            ColorSpace::Hls => "HLS",
        };
        write!(f, "{name}")
    }
}

/// How a hue channel is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HueRange {
    /// Degrees in `[0, 360)`.
    Degrees,
    /// Degrees divided by two, in `[0, 180)`, so the hue fits an 8-bit sample.
    HalfDegrees,
}

impl HueRange {
    /// The exclusive upper bound of the hue channel.
    pub fn max(&self) -> f32 {
        match self {
            HueRange::Degrees => 360.0,
            HueRange::HalfDegrees => 180.0,
        }
    }

    /// Scale a hue in degrees to this range.
    pub fn from_degrees(&self, degrees: f32) -> f32 {
        match self {
            HueRange::Degrees => degrees,
            HueRange::HalfDegrees => degrees / 2.0,
        }
    }
}

/// Macro to define a color space wrapper type with explicit bit depth
macro_rules! define_color_space {
    ($name:ident, $type:ty, $channels:expr, $space:expr, hue: $hue:expr, $doc:expr) => {
        define_color_space!($name, $type, $channels, $space, $doc);

        impl $name {
            /// The scaling of the hue channel.
            pub const HUE_RANGE: HueRange = $hue;

            /// The scaling of the hue channel.
            pub fn hue_range(&self) -> HueRange {
                Self::HUE_RANGE
            }
        }
    };

    ($name:ident, $type:ty, $channels:expr, $space:expr, $doc:expr) => {
        #[doc = $doc]
        ///
        /// This is a zero-cost wrapper that provides compile-time type safety.
        #[derive(Clone, Debug, PartialEq)]
        #[repr(transparent)]
        pub struct $name(pub Image<$type, $channels>);

        impl $name {
            /// The colorspace of the wrapped pixels.
            pub const COLOR_SPACE: ColorSpace = $space;

            #[doc = concat!("Create ", stringify!($name), " image from size and data")]
            pub fn from_size_vec(size: ImageSize, data: Vec<$type>) -> Result<Self, ImageError> {
                Ok(Self(Image::new(size, data)?))
            }

            #[doc = concat!("Create ", stringify!($name), " image from size with default value")]
            pub fn from_size_val(size: ImageSize, val: $type) -> Self {
                Self(Image::from_size_val(size, val))
            }

            /// The colorspace of the wrapped pixels.
            pub fn color_space(&self) -> ColorSpace {
                Self::COLOR_SPACE
            }

            /// Unwrap into the underlying Image
            pub fn into_inner(self) -> Image<$type, $channels> {
                self.0
            }

            /// Get a reference to the underlying Image
            pub fn as_image(&self) -> &Image<$type, $channels> {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = Image<$type, $channels>;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl AsRef<Image<$type, $channels>> for $name {
            fn as_ref(&self) -> &Image<$type, $channels> {
                &self.0
            }
        }

        impl From<Image<$type, $channels>> for $name {
            fn from(image: Image<$type, $channels>) -> Self {
                Self(image)
            }
        }

        impl TensorLike for $name {
            fn shape(&self) -> &[usize] {
                TensorLike::shape(&self.0)
            }
        }

        impl TensorRead<$type> for $name {
            fn as_contiguous_slice(&self) -> Option<&[$type]> {
                self.0.as_contiguous_slice()
            }
        }
    };
}

define_color_space!(
    Rgb8,
    u8,
    3,
    ColorSpace::Rgb,
    "RGB color space with 8-bit unsigned integer channels"
);
define_color_space!(
    Bgr8,
    u8,
    3,
    ColorSpace::Bgr,
    "BGR color space with 8-bit unsigned integer channels"
);
define_color_space!(
    Gray8,
    u8,
    1,
    ColorSpace::Gray,
    "Grayscale with 8-bit unsigned integer channels"
);
define_color_space!(
    Hsvf32,
    f32,
    3,
    ColorSpace::Hsv,
    hue: HueRange::Degrees,
    "HSV color space with 32-bit floating point channels: H in degrees, S and V in [0, 1]"
);
define_color_space!(
    Hsv8,
    u8,
    3,
    ColorSpace::Hsv,
    hue: HueRange::HalfDegrees,
    "HSV color space with 8-bit channels: H in half-degrees, S and V scaled to [0, 255]"
);
define_color_space!(
    Hlsf32,
    f32,
    3,
    ColorSpace::Hls,
    hue: HueRange::Degrees,
    "HLS color space with 32-bit floating point channels: H in degrees, L and S in [0, 1]"
);
define_color_space!(
    Hls8,
    u8,
    3,
    ColorSpace::Hls,
    hue: HueRange::HalfDegrees,
    "HLS color space with 8-bit channels: H in half-degrees, L and S scaled to [0, 255]"
);
define_color_space!(
    Labf32,
    f32,
    3,
    ColorSpace::Lab,
    "CIE L*a*b* color space with 32-bit floating point channels: L in [0, 100]"
);
define_color_space!(
    Lab8,
    u8,
    3,
    ColorSpace::Lab,
    "CIE L*a*b* color space with 8-bit channels: L scaled by 255/100, a and b offset by 128"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_metadata() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let hsv = Hsvf32::from_size_val(size, 0.0);
        assert_eq!(hsv.color_space(), ColorSpace::Hsv);
        assert_eq!(hsv.hue_range(), HueRange::Degrees);
        assert_eq!(Hsv8::HUE_RANGE, HueRange::HalfDegrees);
        assert_eq!(Hls8::COLOR_SPACE, ColorSpace::Hls);

        let gray = Gray8::from_size_vec(size, vec![1, 2])?;
        assert_eq!(gray.num_channels(), 1);
        assert_eq!(TensorLike::shape(&gray), &[1, 2, 1]);
        assert_eq!(gray.into_inner().as_slice(), &[1, 2]);

        Ok(())
    }

    #[test]
    fn color_space_names() {
        assert_eq!(ColorSpace::Lab.to_string(), "LAB");
        assert_eq!(ColorSpace::Gray.to_string(), "Grayscale");
    }

    #[test]
    fn hue_scaling() {
        assert_eq!(HueRange::Degrees.from_degrees(210.0), 210.0);
        assert_eq!(HueRange::HalfDegrees.from_degrees(210.0), 105.0);
        assert_eq!(HueRange::HalfDegrees.max(), 180.0);
    }
}
