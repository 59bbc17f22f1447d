mod bgr;
mod convert;
mod converter;
mod error;
mod gray;
mod hls;
mod hsv;
mod lab;
mod validate;

pub use bgr::rgb_to_bgr;
pub use convert::ConvertColor;
pub use converter::ColorConverter;
pub use error::{ColorConversion, ColorError};
pub use gray::rgb_to_gray;
pub use hls::{rgb_to_hls, rgb_to_hls_u8};
pub use hsv::{rgb_to_hsv, rgb_to_hsv_u8};
pub use lab::{rgb_to_lab, rgb_to_lab_u8};
pub use validate::is_rgb_image;

pub use rgbx_image::color_spaces::{
    Bgr8, Gray8, Hls8, Hlsf32, Hsv8, Hsvf32, Lab8, Labf32, Rgb8,
};
