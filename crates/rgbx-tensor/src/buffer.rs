use crate::{Tensor, TensorView};

/// A value that exposes an ordered sequence of dimension sizes.
///
/// This is the only capability needed to decide whether a buffer is an image of a
/// given layout. Implemented for [`Tensor`] and [`TensorView`] of any rank and, with the
/// `ndarray` feature, for `ndarray` arrays.
pub trait TensorLike {
    /// The dimension sizes, outermost first.
    fn shape(&self) -> &[usize];

    /// The number of dimensions.
    fn rank(&self) -> usize {
        self.shape().len()
    }
}

/// A [`TensorLike`] whose samples can be read as one dense row-major slice.
pub trait TensorRead<T>: TensorLike {
    /// The samples in row-major index order.
    ///
    /// Returns `None` when the buffer does not store its samples contiguously in
    /// row-major order, e.g. a permuted view.
    fn as_contiguous_slice(&self) -> Option<&[T]>;
}

impl<T, const N: usize> TensorLike for Tensor<T, N> {
    fn shape(&self) -> &[usize] {
        &self.shape
    }
}

impl<T, const N: usize> TensorRead<T> for Tensor<T, N> {
    fn as_contiguous_slice(&self) -> Option<&[T]> {
        self.is_standard_layout().then(|| self.as_slice())
    }
}

impl<T, const N: usize> TensorLike for TensorView<'_, T, N> {
    fn shape(&self) -> &[usize] {
        &self.shape
    }
}

impl<T, const N: usize> TensorRead<T> for TensorView<'_, T, N> {
    fn as_contiguous_slice(&self) -> Option<&[T]> {
        self.is_standard_layout().then(|| self.as_slice())
    }
}

impl<B: TensorLike + ?Sized> TensorLike for &B {
    fn shape(&self) -> &[usize] {
        (**self).shape()
    }
}

impl<T, B: TensorRead<T> + ?Sized> TensorRead<T> for &B {
    fn as_contiguous_slice(&self) -> Option<&[T]> {
        (**self).as_contiguous_slice()
    }
}

#[cfg(feature = "ndarray")]
mod ndarray_impl {
    use super::{TensorLike, TensorRead};
    use ndarray::{ArrayBase, Data, Dimension};

    impl<S, D> TensorLike for ArrayBase<S, D>
    where
        S: Data,
        D: Dimension,
    {
        fn shape(&self) -> &[usize] {
            ArrayBase::shape(self)
        }
    }

    impl<T, S, D> TensorRead<T> for ArrayBase<S, D>
    where
        S: Data<Elem = T>,
        D: Dimension,
    {
        fn as_contiguous_slice(&self) -> Option<&[T]> {
            self.as_slice()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TensorError;

    #[test]
    fn tensor_exposes_shape_and_slice() -> Result<(), TensorError> {
        let t = Tensor::<u8, 3>::from_shape_vec([1, 2, 3], vec![0, 1, 2, 3, 4, 5])?;
        assert_eq!(TensorLike::shape(&t), &[1, 2, 3]);
        assert_eq!(t.rank(), 3);
        assert_eq!(t.as_contiguous_slice(), Some(&[0u8, 1, 2, 3, 4, 5][..]));
        Ok(())
    }

    #[test]
    fn permuted_view_has_no_contiguous_slice() -> Result<(), TensorError> {
        let t = Tensor::<u8, 3>::from_shape_vec([2, 1, 3], vec![0; 6])?;
        let view = t.permute_axes([2, 1, 0]);
        assert_eq!(TensorLike::shape(&view), &[3, 1, 2]);
        assert_eq!(view.as_contiguous_slice(), None);
        Ok(())
    }

    #[test]
    fn references_forward() -> Result<(), TensorError> {
        let t = Tensor::<u8, 2>::from_shape_vec([2, 2], vec![0; 4])?;
        let r = &t;
        assert_eq!(TensorLike::shape(&r), &[2, 2]);
        assert_eq!(TensorRead::<u8>::as_contiguous_slice(&r).map(<[u8]>::len), Some(4));
        Ok(())
    }

    #[cfg(feature = "ndarray")]
    #[test]
    fn ndarray_layouts() {
        let array = ndarray::Array3::<u8>::zeros((2, 4, 3));
        assert_eq!(TensorLike::shape(&array), &[2, 4, 3]);
        assert!(array.as_contiguous_slice().is_some());

        let transposed = array.view().reversed_axes();
        assert_eq!(TensorLike::shape(&transposed), &[3, 4, 2]);
        assert!(transposed.as_contiguous_slice().is_none());
    }
}
