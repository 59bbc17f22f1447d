use rayon::prelude::*;

use rgbx_image::Image;

/// Controls how the pixel loop of a conversion is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the caller already parallelizes
    /// across images.
    Serial,
}

/// Apply a function to each pixel of a row-major source slice, writing into `dst`.
///
/// `src` holds `C1` samples per pixel and `dst.cols()` pixels per row. The closure
/// receives the source pixel and the matching destination pixel.
///
/// Precondition: `src` has as many pixels as `dst` and `dst.cols() > 0`.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &[T1],
    dst: &mut Image<T2, C2>,
    strategy: ExecutionStrategy,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let cols = dst.cols();
    let per_row = |(src_chunk, dst_chunk): (&[T1], &mut [T2])| {
        src_chunk
            .chunks_exact(C1)
            .zip(dst_chunk.chunks_exact_mut(C2))
            .for_each(|(src_pixel, dst_pixel)| {
                f(src_pixel, dst_pixel);
            });
    };

    match strategy {
        ExecutionStrategy::ParallelRows => {
            src.par_chunks_exact(C1 * cols)
                .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
                .for_each(per_row);
        }
        ExecutionStrategy::Serial => {
            src.chunks_exact(C1 * cols)
                .zip(dst.as_slice_mut().chunks_exact_mut(C2 * cols))
                .for_each(per_row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgbx_image::{ImageError, ImageSize};

    #[test]
    fn strategies_agree() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 4,
        };
        let src = (0..size.width * size.height * 3)
            .map(|x| x as u8)
            .collect::<Vec<_>>();

        let mut serial = Image::<u16, 1>::from_size_val(size, 0);
        par_iter_rows::<_, 3, _, 1>(&src, &mut serial, ExecutionStrategy::Serial, |s, d| {
            d[0] = s.iter().map(|&x| x as u16).sum();
        });

        let mut parallel = Image::<u16, 1>::from_size_val(size, 0);
        par_iter_rows::<_, 3, _, 1>(
            &src,
            &mut parallel,
            ExecutionStrategy::ParallelRows,
            |s, d| {
                d[0] = s.iter().map(|&x| x as u16).sum();
            },
        );

        assert_eq!(serial, parallel);
        assert_eq!(serial.as_slice()[..2], [3, 12]);

        Ok(())
    }

    #[test]
    fn default_is_parallel() {
        assert_eq!(ExecutionStrategy::default(), ExecutionStrategy::ParallelRows);
    }
}
