use thiserror::Error;

use crate::view::TensorView;

/// An error type for tensor operations.
#[derive(Error, Debug, PartialEq)]
pub enum TensorError {
    /// Type casting operation failed.
    ///
    /// This occurs when a sample cannot be represented in the target type,
    /// e.g. casting a negative value to an unsigned type.
    #[error("Type cast failed: source data cannot be safely converted to target type. Check value ranges.")]
    CastError,

    /// Tensor shape does not match the provided data.
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },
}

impl TensorError {
    /// Creates an InvalidShape error with clear context.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }
}

/// Computes the strides for a row-major (C-contiguous) tensor layout.
///
/// The rightmost dimension has stride 1, and each dimension's stride is the product
/// of all dimensions to its right.
///
/// # Examples
///
/// ```rust
/// use rgbx_tensor::tensor::get_strides_from_shape;
///
/// let strides = get_strides_from_shape([2, 3, 4]);
/// assert_eq!(strides, [12, 4, 1]);
/// ```
pub fn get_strides_from_shape<const N: usize>(shape: [usize; N]) -> [usize; N] {
    let mut strides: [usize; N] = [0; N];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// A multi-dimensional array (tensor) with owned data.
///
/// The tensor owns a contiguous buffer and describes it with a shape and a set of
/// row-major strides. The rank `N` is checked at compile time; the sizes of each
/// dimension are runtime values.
///
/// # Examples
///
/// ```rust
/// use rgbx_tensor::Tensor;
///
/// let t = Tensor::<u8, 2>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(t.shape, [2, 2]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T, const N: usize> {
    /// The storage of the tensor.
    pub storage: Vec<T>,
    /// The shape of the tensor.
    pub shape: [usize; N],
    /// The strides of the tensor data in memory.
    pub strides: [usize; N],
}

impl<T, const N: usize> Tensor<T, N> {
    /// Creates a new `Tensor` with the given shape and data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape of the tensor,
    /// an error is returned.
    pub fn from_shape_vec(shape: [usize; N], data: Vec<T>) -> Result<Self, TensorError> {
        let numel = shape.iter().product::<usize>();
        if numel != data.len() {
            return Err(TensorError::invalid_shape(numel, data.len()));
        }
        Ok(Self {
            storage: data,
            shape,
            strides: get_strides_from_shape(shape),
        })
    }

    /// Creates a new `Tensor` with the given shape filled with `value`.
    ///
    /// ```
    /// use rgbx_tensor::Tensor3;
    ///
    /// let t = Tensor3::<u8>::from_shape_val([2, 1, 3], 2);
    /// assert_eq!(t.as_slice(), vec![2, 2, 2, 2, 2, 2]);
    /// ```
    pub fn from_shape_val(shape: [usize; N], value: T) -> Self
    where
        T: Clone,
    {
        let numel = shape.iter().product::<usize>();
        Self {
            storage: vec![value; numel],
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Get the data of the tensor as a slice, in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Get the data of the tensor as a mutable slice, in storage order.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.storage
    }

    /// Returns the number of elements in the tensor.
    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Get the offset of the element at the given index.
    ///
    /// Returns `None` if any index is out of bounds for its dimension.
    pub fn get_iter_offset(&self, index: [usize; N]) -> Option<usize> {
        let mut offset = 0;
        for ((&idx, dim_size), stride) in index.iter().zip(self.shape).zip(self.strides) {
            if idx >= dim_size {
                return None;
            }
            offset += idx * stride;
        }
        Some(offset)
    }

    /// Get the element at the given index.
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        self.get_iter_offset(index)
            .and_then(|offset| self.storage.get(offset))
    }

    /// Checks if the tensor has a standard contiguous (row-major) memory layout.
    ///
    /// ```
    /// use rgbx_tensor::Tensor3;
    ///
    /// let mut t = Tensor3::<u8>::from_shape_val([2, 2, 3], 0);
    /// assert!(t.is_standard_layout());
    /// t.strides = [10, 5, 1];
    /// assert!(!t.is_standard_layout());
    /// ```
    pub fn is_standard_layout(&self) -> bool {
        is_standard_layout(&self.shape, &self.strides)
    }

    /// Permutes (reorders) the dimensions of the tensor.
    ///
    /// This is a zero-copy operation: the returned view shares the storage and only
    /// the shape and strides are reordered. `axes[i]` names the source dimension that
    /// becomes dimension `i`.
    pub fn permute_axes(&self, axes: [usize; N]) -> TensorView<'_, T, N> {
        let mut shape = [0; N];
        let mut strides = [0; N];
        for (i, &axis) in axes.iter().enumerate() {
            shape[i] = self.shape[axis];
            strides[i] = self.strides[axis];
        }

        TensorView {
            storage: &self.storage,
            shape,
            strides,
        }
    }

    /// Return a view of the tensor with the same shape and strides.
    pub fn view(&self) -> TensorView<'_, T, N> {
        TensorView {
            storage: &self.storage,
            shape: self.shape,
            strides: self.strides,
        }
    }

    /// Cast the tensor samples to another numeric type.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::CastError`] if a sample is not representable in `U`.
    pub fn cast<U>(&self) -> Result<Tensor<U, N>, TensorError>
    where
        T: Copy + num_traits::ToPrimitive,
        U: num_traits::NumCast,
    {
        let storage = self
            .storage
            .iter()
            .map(|&x| U::from(x).ok_or(TensorError::CastError))
            .collect::<Result<Vec<U>, TensorError>>()?;

        Ok(Tensor {
            storage,
            shape: self.shape,
            strides: self.strides,
        })
    }
}

pub(crate) fn is_standard_layout(shape: &[usize], strides: &[usize]) -> bool {
    let mut expected_stride: usize = 1;
    for (&dim, &stride) in shape.iter().rev().zip(strides.iter().rev()) {
        if stride != expected_stride {
            return false;
        }
        expected_stride = expected_stride.saturating_mul(dim);
    }
    true
}
