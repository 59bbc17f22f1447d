use rgbx_image::{ColorSpace, ImageError};

/// The colorspace transforms offered by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorConversion {
    /// RGB to BGR.
    RgbToBgr,
    /// RGB to grayscale.
    RgbToGray,
    /// RGB to HSV.
    RgbToHsv,
    /// RGB to CIE L*a*b*.
    RgbToLab,
    /// RGB to HLS.
    RgbToHls,
}

impl ColorConversion {
    /// All transforms, in declaration order.
    pub const ALL: [ColorConversion; 5] = [
        ColorConversion::RgbToBgr,
        ColorConversion::RgbToGray,
        ColorConversion::RgbToHsv,
        ColorConversion::RgbToLab,
        ColorConversion::RgbToHls,
    ];

    /// The name of the routine performing the transform.
    pub fn name(&self) -> &'static str {
        match self {
            ColorConversion::RgbToBgr => "rgb_to_bgr",
            ColorConversion::RgbToGray => "rgb_to_gray",
            ColorConversion::RgbToHsv => "rgb_to_hsv",
            ColorConversion::RgbToLab => "rgb_to_lab",
            ColorConversion::RgbToHls => "rgb_to_hls",
        }
    }

    /// The colorspace produced by the transform.
    pub fn target(&self) -> ColorSpace {
        match self {
            ColorConversion::RgbToBgr => ColorSpace::Bgr,
            ColorConversion::RgbToGray => ColorSpace::Gray,
            ColorConversion::RgbToHsv => ColorSpace::Hsv,
            ColorConversion::RgbToLab => ColorSpace::Lab,
            ColorConversion::RgbToHls => ColorSpace::Hls,
        }
    }
}

impl std::fmt::Display for ColorConversion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An error type for the color conversion routines.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ColorError {
    /// The input is not a rank-3 buffer with 3 channels in its last dimension.
    #[error(
        "{transform}: image of rank 3 with 3 channels expected, found rank {rank} with shape {shape:?}. This method converts an RGB image to its {} counterpart",
        .transform.target()
    )]
    InvalidShape {
        /// The transform that was attempted.
        transform: ColorConversion,
        /// The observed number of dimensions.
        rank: usize,
        /// The observed shape.
        shape: Vec<usize>,
    },

    /// The input exposes a shape but its samples cannot be read densely in row-major order.
    #[error("{transform}: input buffer cannot be read as a dense row-major image: {reason}")]
    TypeMismatch {
        /// The transform that was attempted.
        transform: ColorConversion,
        /// Why the buffer was rejected.
        reason: String,
    },

    /// Allocating the output image failed.
    #[error(transparent)]
    Image(#[from] ImageError),
}

impl ColorError {
    /// The transform that failed, when the error carries one.
    pub fn transform(&self) -> Option<ColorConversion> {
        match self {
            ColorError::InvalidShape { transform, .. }
            | ColorError::TypeMismatch { transform, .. } => Some(*transform),
            ColorError::Image(_) => None,
        }
    }
}
