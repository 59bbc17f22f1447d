#![deny(missing_docs)]
//! Image types and traits for generating and manipulating images

/// image representation for computer vision purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// Colorspace tags and typed image wrappers.
pub mod color_spaces;

pub use crate::color_spaces::{ColorSpace, HueRange};
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize};
