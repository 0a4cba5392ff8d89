use crate::span2d::{check_index, check_shape, column_stride, Span2D, Span2DMut};
use crate::stride::{StrideIter, StrideIterMut};
use rawspan_common::error::Result;
use rawspan_common::shape::{offset_2d, Shape};

/// Array2D owns a rectangular block of `height * width` elements
/// stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array2D<T> {
    data: Box<[T]>,
    height: usize,
    width: usize,
}

impl<T: Default + Clone> Array2D<T> {
    /// Create an array filled with default values.
    #[inline]
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Self::from_elem(height, width, T::default())
    }
}

impl<T> Array2D<T> {
    #[inline]
    pub fn from_elem(height: usize, width: usize, value: T) -> Result<Self>
    where
        T: Clone,
    {
        let len = Shape::checked(&[height, width])?.len();
        Ok(Array2D {
            data: vec![value; len].into_boxed_slice(),
            height,
            width,
        })
    }

    /// Take ownership of a flattened row-major vector.
    #[inline]
    pub fn from_vec(data: Vec<T>, height: usize, width: usize) -> Result<Self> {
        check_shape(data.len(), &[height, width])?;
        Ok(Array2D {
            data: data.into_boxed_slice(),
            height,
            width,
        })
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

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    #[inline]
    pub fn as_span(&self) -> Span2D<'_, T> {
        // # SAFETY
        //
        // Shape is validated on construction and never changes.
        unsafe { Span2D::new_unchecked(&self.data, self.height, self.width) }
    }

    #[inline]
    pub fn as_span_mut(&mut self) -> Span2DMut<'_, T> {
        unsafe { Span2DMut::new_unchecked(&mut self.data, self.height, self.width) }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Result<&T> {
        self.as_span().get(i, j)
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        check_index("row", i, self.height)?;
        check_index("column", j, self.width)?;
        Ok(unsafe { self.element_mut_at(i, j) })
    }

    #[inline]
    pub fn row(&self, i: usize) -> Result<&[T]> {
        self.as_span().row(i)
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> Result<&mut [T]> {
        check_index("row", i, self.height)?;
        let start = i * self.width;
        Ok(&mut self.data[start..start + self.width])
    }

    #[inline]
    pub fn column(&self, j: usize) -> Result<StrideIter<'_, T>> {
        self.as_span().column(j)
    }

    #[inline]
    pub fn column_mut(&mut self, j: usize) -> Result<StrideIterMut<'_, T>> {
        check_index("column", j, self.width)?;
        let stride = column_stride(self.width)?;
        Ok(StrideIterMut::from_slice(&mut self.data, j, self.height, stride))
    }

    #[inline]
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value)
    }

    #[inline]
    pub fn first_element_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline]
    pub fn first_element_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// # Safety
    ///
    /// Array must not be empty.
    #[inline]
    pub unsafe fn first_element_ref(&self) -> &T {
        debug_assert!(!self.is_empty());
        &*self.data.as_ptr()
    }

    /// Returns reference at row `i` and column `j`, located at flat
    /// offset `i * width + j`, without bounds check.
    ///
    /// # Safety
    ///
    /// Caller must guarantee `i < height` and `j < width`.
    #[inline]
    pub unsafe fn element_ref_at(&self, i: usize, j: usize) -> &T {
        debug_assert!(i < self.height && j < self.width);
        &*self.data.as_ptr().add(offset_2d(self.width, i, j))
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

impl<T, const H: usize, const W: usize> From<[[T; W]; H]> for Array2D<T> {
    #[inline]
    fn from(src: [[T; W]; H]) -> Self {
        let data: Vec<T> = src.into_iter().flatten().collect();
        Array2D {
            data: data.into_boxed_slice(),
            height: H,
            width: W,
        }
    }
}
