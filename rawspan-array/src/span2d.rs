use crate::stride::{StrideIter, StrideIterMut};
use rawspan_common::error::{Error, Result};
use rawspan_common::shape::{offset_2d, Shape};
use std::num::NonZeroUsize;

/// Span2D is an immutable row-major 2D view over caller-owned memory.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Span2D<'a, T> {
    data: &'a [T],
    height: usize,
    width: usize,
}

impl<T> Clone for Span2D<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span2D<'_, T> {}

impl<'a, T> Span2D<'a, T> {
    /// Create a view of `height` rows and `width` columns.
    /// The slice length must equal `height * width`.
    #[inline]
    pub fn new(data: &'a [T], height: usize, width: usize) -> Result<Self> {
        check_shape(data.len(), &[height, width])?;
        Ok(Span2D {
            data,
            height,
            width,
        })
    }

    /// # Safety
    ///
    /// Slice length must equal `height * width`.
    #[inline]
    pub unsafe fn new_unchecked(data: &'a [T], height: usize, width: usize) -> Self {
        debug_assert_eq!(data.len(), height * width);
        Span2D {
            data,
            height,
            width,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns flattened row-major elements.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Result<&'a T> {
        check_index("row", i, self.height)?;
        check_index("column", j, self.width)?;
        Ok(unsafe { self.element_ref_at(i, j) })
    }

    #[inline]
    pub fn row(&self, i: usize) -> Result<&'a [T]> {
        check_index("row", i, self.height)?;
        let start = i * self.width;
        Ok(&self.data[start..start + self.width])
    }

    #[inline]
    pub fn column(&self, j: usize) -> Result<StrideIter<'a, T>> {
        check_index("column", j, self.width)?;
        let stride = column_stride(self.width)?;
        Ok(StrideIter::from_slice(self.data, j, self.height, stride))
    }

    /// Iterate all rows from top to bottom.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &'a [T]> + 'a {
        let width = self.width;
        let height = self.height;
        let data = self.data;
        (0..height).map(move |i| &data[i * width..(i + 1) * width])
    }

    #[inline]
    pub fn first_element_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// # Safety
    ///
    /// Span must not be empty.
    #[inline]
    pub unsafe fn first_element_ref(&self) -> &'a T {
        debug_assert!(!self.is_empty());
        &*self.data.as_ptr()
    }

    /// Returns reference at row `i` and column `j` without bounds check.
    ///
    /// # Safety
    ///
    /// Caller must guarantee `i < height` and `j < width`.
    #[inline]
    pub unsafe fn element_ref_at(&self, i: usize, j: usize) -> &'a T {
        debug_assert!(i < self.height && j < self.width);
        &*self.data.as_ptr().add(offset_2d(self.width, i, j))
    }
}

/// Span2DMut is a mutable row-major 2D view over caller-owned memory.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Span2DMut<'a, T> {
    data: &'a mut [T],
    height: usize,
    width: usize,
}

impl<'a, T> Span2DMut<'a, T> {
    #[inline]
    pub fn new(data: &'a mut [T], height: usize, width: usize) -> Result<Self> {
        check_shape(data.len(), &[height, width])?;
        Ok(Span2DMut {
            data,
            height,
            width,
        })
    }

    /// # Safety
    ///
    /// Slice length must equal `height * width`.
    #[inline]
    pub unsafe fn new_unchecked(data: &'a mut [T], height: usize, width: usize) -> Self {
        debug_assert_eq!(data.len(), height * width);
        Span2DMut {
            data,
            height,
            width,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn as_span(&self) -> Span2D<'_, T> {
        Span2D {
            data: &*self.data,
            height: self.height,
            width: self.width,
        }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        check_index("row", i, self.height)?;
        check_index("column", j, self.width)?;
        Ok(unsafe { self.element_mut_at(i, j) })
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> Result<&mut [T]> {
        check_index("row", i, self.height)?;
        let start = i * self.width;
        Ok(&mut self.data[start..start + self.width])
    }

    #[inline]
    pub fn column_mut(&mut self, j: usize) -> Result<StrideIterMut<'_, T>> {
        check_index("column", j, self.width)?;
        let stride = column_stride(self.width)?;
        Ok(StrideIterMut::from_slice(&mut *self.data, j, self.height, stride))
    }

    #[inline]
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value)
    }

    #[inline]
    pub fn first_element_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// # Safety
    ///
    /// Caller must guarantee `i < height` and `j < width`.
    #[inline]
    pub unsafe fn element_mut_at(&mut self, i: usize, j: usize) -> &mut T {
        debug_assert!(i < self.height && j < self.width);
        &mut *self.data.as_mut_ptr().add(offset_2d(self.width, i, j))
    }
}

#[inline]
pub(crate) fn check_index(axis: &str, idx: usize, dim: usize) -> Result<()> {
    if idx >= dim {
        return Err(Error::IndexOutOfBound(format!(
            "{} {} >= {} count {}",
            axis, idx, axis, dim
        )));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_shape(len: usize, dims: &[usize]) -> Result<()> {
    let expected = Shape::checked(dims)?.len();
    if expected != len {
        return Err(Error::ShapeMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

#[inline]
pub(crate) fn column_stride(width: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(width)
        .ok_or_else(|| Error::InvalidArgument("column of zero-width block".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span2d_access() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let span = Span2D::new(&data, 3, 3).unwrap();
        assert_eq!(6, unsafe { *span.element_ref_at(1, 2) });
        assert_eq!(&6, span.get(1, 2).unwrap());
        assert_eq!(&[4, 5, 6], span.row(1).unwrap());
        assert_eq!(vec![3, 6, 9], span.column(2).unwrap().copied().collect::<Vec<_>>());
        assert_eq!(3, span.rows().count());
        assert_eq!(1, unsafe { *span.first_element_ref() });
    }

    #[test]
    fn test_span2d_range_errors() {
        let data = [0u8; 6];
        let span = Span2D::new(&data, 2, 3).unwrap();
        assert!(matches!(span.get(2, 0), Err(Error::IndexOutOfBound(_))));
        assert!(matches!(span.get(0, 3), Err(Error::IndexOutOfBound(_))));
        assert!(matches!(span.row(2), Err(Error::IndexOutOfBound(_))));
        assert!(span.column(3).is_err());
        assert_eq!(
            Err(Error::ShapeMismatch {
                expected: 8,
                actual: 6
            }),
            Span2D::new(&data, 2, 4)
        );
    }

    #[test]
    fn test_span2d_mut() {
        let mut data = vec![0i32; 12];
        let mut span = Span2DMut::new(&mut data, 3, 4).unwrap();
        span.row_mut(1).unwrap().copy_from_slice(&[1, 1, 1, 1]);
        span.column_mut(2).unwrap().for_each(|v| *v += 2);
        *span.get_mut(2, 0).unwrap() = 7;
        unsafe { *span.element_mut_at(0, 3) = 9 };
        assert_eq!(3, *span.as_span().get(1, 2).unwrap());
        assert_eq!(
            vec![0, 0, 2, 9, 1, 1, 3, 1, 7, 0, 2, 0],
            data
        );
    }

    #[test]
    fn test_span2d_degenerate() {
        let data: [u32; 0] = [];
        let span = Span2D::new(&data, 4, 0).unwrap();
        assert!(span.is_empty());
        assert_eq!(0, span.row(3).unwrap().len());
        assert!(span.column(0).is_err());
        let span = Span2D::new(&data, 0, 5).unwrap();
        assert_eq!(0, span.column(4).unwrap().len());
    }
}
