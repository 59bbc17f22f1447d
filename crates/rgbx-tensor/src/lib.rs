#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `rgbx-tensor` provides the container that the rest of the workspace moves pixels
//! around in: a dense, row-major [`Tensor`] with a compile-time rank, plus the two
//! capability traits the conversion routines are written against.
//!
//! - [`TensorLike`]: anything exposing an ordered shape.
//! - [`TensorRead`]: a [`TensorLike`] that can also hand out its samples as one
//!   contiguous row-major slice.
//!
//! With the `ndarray` feature both traits are implemented for `ndarray` arrays of any
//! dimensionality.
//!
//! # Quick Start
//!
//! ```rust
//! use rgbx_tensor::{Tensor, TensorLike};
//!
//! let data = vec![1u8, 2, 3, 4, 5, 6];
//! let tensor = Tensor::<u8, 3>::from_shape_vec([1, 2, 3], data).unwrap();
//!
//! assert_eq!(tensor.get([0, 1, 2]), Some(&6));
//! assert_eq!(TensorLike::shape(&tensor), &[1, 2, 3]);
//! assert_eq!(tensor.rank(), 3);
//! ```

/// Buffer capability traits implemented by tensors, views and foreign arrays.
pub mod buffer;

/// Tensor module containing the main tensor implementation and error types.
pub mod tensor;

/// View module containing non-owning tensor view implementations.
pub mod view;

pub use crate::buffer::{TensorLike, TensorRead};
pub(crate) use crate::tensor::get_strides_from_shape;
pub use crate::tensor::{Tensor, TensorError};
pub use crate::view::TensorView;

/// Type alias for a 3-dimensional tensor.
pub type Tensor3<T> = Tensor<T, 3>;
