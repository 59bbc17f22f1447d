#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use rgbx_tensor as tensor;

#[doc(inline)]
pub use rgbx_image as image;

#[doc(inline)]
pub use rgbx_imgproc as imgproc;
