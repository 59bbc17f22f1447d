use crate::{get_strides_from_shape, tensor::is_standard_layout, Tensor};

/// A non-owning view into tensor data.
///
/// `TensorView` borrows the storage of a [`Tensor`] and carries its own shape and
/// strides, which is how zero-copy permutations are expressed. A permuted view is in
/// general not row-major, so its storage cannot be read as a dense slice in index order.
///
/// ```rust
/// use rgbx_tensor::Tensor;
///
/// let tensor = Tensor::<i32, 2>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
///
/// let view = tensor.permute_axes([1, 0]);
/// assert_eq!(*view.get_unchecked([0, 1]), 3);
///
/// let contiguous = view.as_contiguous();
/// assert_eq!(contiguous.as_slice(), &[1, 3, 2, 4]);
/// ```
#[derive(Debug)]
pub struct TensorView<'a, T, const N: usize> {
    /// Reference to the storage held by another tensor.
    pub storage: &'a [T],

    /// The shape of the tensor view.
    pub shape: [usize; N],

    /// The strides for accessing elements in the view.
    pub strides: [usize; N],
}

impl<T, const N: usize> TensorView<'_, T, N> {
    /// Returns the whole underlying storage, in storage order.
    ///
    /// This is not the view's index order unless [`Self::is_standard_layout`] holds.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage
    }

    /// Returns the number of elements addressed by the view.
    #[inline]
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Checks if the view addresses its storage in row-major order.
    pub fn is_standard_layout(&self) -> bool {
        is_standard_layout(&self.shape, &self.strides)
    }

    /// Gets the element at the given index.
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        let mut offset = 0;
        for ((&idx, dim_size), stride) in index.iter().zip(self.shape).zip(self.strides) {
            if idx >= dim_size {
                return None;
            }
            offset += idx * stride;
        }
        self.storage.get(offset)
    }

    /// Gets the element at the given index without checking dimension sizes.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset falls outside the storage.
    pub fn get_unchecked(&self, index: [usize; N]) -> &T {
        let offset = index
            .iter()
            .zip(self.strides)
            .map(|(&idx, stride)| idx * stride)
            .sum::<usize>();
        &self.storage[offset]
    }

    /// Copies the view into a new tensor with standard row-major layout.
    pub fn as_contiguous(&self) -> Tensor<T, N>
    where
        T: Clone,
    {
        let numel = self.numel();
        let mut storage = Vec::with_capacity(numel);
        let mut index = [0usize; N];
        for _ in 0..numel {
            storage.push(self.get_unchecked(index).clone());
            for k in (0..N).rev() {
                index[k] += 1;
                if index[k] < self.shape[k] {
                    break;
                }
                index[k] = 0;
            }
        }

        Tensor {
            storage,
            shape: self.shape,
            strides: get_strides_from_shape(self.shape),
        }
    }
}
