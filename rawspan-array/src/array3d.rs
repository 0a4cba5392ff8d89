use crate::span2d::{check_index, check_shape, Span2D, Span2DMut};
use rawspan_common::error::Result;
use rawspan_common::shape::{offset_3d, Shape};

/// Array3D owns a block of `depth * height * width` elements.
/// Each of the `depth` layers is a row-major `height * width` plane.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array3D<T> {
    data: Box<[T]>,
    depth: usize,
    height: usize,
    width: usize,
}

impl<T: Default + Clone> Array3D<T> {
    #[inline]
    pub fn new(depth: usize, height: usize, width: usize) -> Result<Self> {
        Self::from_elem(depth, height, width, T::default())
    }
}

impl<T> Array3D<T> {
    #[inline]
    pub fn from_elem(depth: usize, height: usize, width: usize, value: T) -> Result<Self>
    where
        T: Clone,
    {
        let len = Shape::checked(&[depth, height, width])?.len();
        Ok(Array3D {
            data: vec![value; len].into_boxed_slice(),
            depth,
            height,
            width,
        })
    }

    #[inline]
    pub fn from_vec(data: Vec<T>, depth: usize, height: usize, width: usize) -> Result<Self> {
        check_shape(data.len(), &[depth, height, width])?;
        Ok(Array3D {
            data: data.into_boxed_slice(),
            depth,
            height,
            width,
        })
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
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
    pub fn get(&self, i: usize, j: usize, k: usize) -> Result<&T> {
        self.check_coord(i, j, k)?;
        Ok(unsafe { self.element_ref_at(i, j, k) })
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize, k: usize) -> Result<&mut T> {
        self.check_coord(i, j, k)?;
        Ok(unsafe { self.element_mut_at(i, j, k) })
    }

    /// Returns the `i`-th plane as a 2D view.
    #[inline]
    pub fn layer(&self, i: usize) -> Result<Span2D<'_, T>> {
        check_index("layer", i, self.depth)?;
        let plane = self.height * self.width;
        let data = &self.data[i * plane..(i + 1) * plane];
        Ok(unsafe { Span2D::new_unchecked(data, self.height, self.width) })
    }

    #[inline]
    pub fn layer_mut(&mut self, i: usize) -> Result<Span2DMut<'_, T>> {
        check_index("layer", i, self.depth)?;
        let plane = self.height * self.width;
        let (height, width) = (self.height, self.width);
        let data = &mut self.data[i * plane..(i + 1) * plane];
        Ok(unsafe { Span2DMut::new_unchecked(data, height, width) })
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

    /// Returns reference at flat offset `i * (height * width) + j * width + k`
    /// without bounds check.
    ///
    /// # Safety
    ///
    /// Caller must guarantee `i < depth`, `j < height` and `k < width`.
    #[inline]
    pub unsafe fn element_ref_at(&self, i: usize, j: usize, k: usize) -> &T {
        debug_assert!(i < self.depth && j < self.height && k < self.width);
        &*self
            .data
            .as_ptr()
            .add(offset_3d(self.height, self.width, i, j, k))
    }

    /// # Safety
    ///
    /// Caller must guarantee `i < depth`, `j < height` and `k < width`.
    #[inline]
    pub unsafe fn element_mut_at(&mut self, i: usize, j: usize, k: usize) -> &mut T {
        debug_assert!(i < self.depth && j < self.height && k < self.width);
        &mut *self
            .data
            .as_mut_ptr()
            .add(offset_3d(self.height, self.width, i, j, k))
    }

    #[inline]
    fn check_coord(&self, i: usize, j: usize, k: usize) -> Result<()> {
        check_index("layer", i, self.depth)?;
        check_index("row", j, self.height)?;
        check_index("column", k, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rawspan_common::error::Error;

    #[test]
    fn test_array3d_flat_offset() {
        let (d, h, w) = (3, 4, 5);
        let data: Vec<usize> = (0..d * h * w).collect();
        let arr = Array3D::from_vec(data, d, h, w).unwrap();
        for i in 0..d {
            for j in 0..h {
                for k in 0..w {
                    let expected = i * (h * w) + j * w + k;
                    assert_eq!(expected, unsafe { *arr.element_ref_at(i, j, k) });
                    assert_eq!(&expected, arr.get(i, j, k).unwrap());
                }
            }
        }
        assert_eq!(0, unsafe { *arr.first_element_ref() });
    }

    #[test]
    fn test_array3d_layers() {
        let mut arr = Array3D::<i32>::new(2, 2, 3).unwrap();
        arr.layer_mut(1).unwrap().fill(7);
        *arr.get_mut(0, 1, 2).unwrap() = 5;
        unsafe { *arr.element_mut_at(1, 0, 0) = -7 };
        assert_eq!(&[0, 0, 5], arr.layer(0).unwrap().row(1).unwrap());
        assert_eq!(&[-7, 7, 7, 7, 7, 7], arr.layer(1).unwrap().as_slice());
        arr.fill(1);
        assert_eq!(12, arr.as_slice().iter().sum::<i32>());
    }

    #[test]
    fn test_array3d_range_errors() {
        let arr = Array3D::<u8>::new(2, 3, 4).unwrap();
        assert!(matches!(arr.get(2, 0, 0), Err(Error::IndexOutOfBound(_))));
        assert!(matches!(arr.get(0, 3, 0), Err(Error::IndexOutOfBound(_))));
        assert!(matches!(arr.get(0, 0, 4), Err(Error::IndexOutOfBound(_))));
        assert!(matches!(arr.layer(2), Err(Error::IndexOutOfBound(_))));
        assert!(matches!(
            Array3D::from_vec(vec![0u8; 23], 2, 3, 4),
            Err(Error::ShapeMismatch {
                expected: 24,
                actual: 23
            })
        ));
    }
}
