use std::marker::PhantomData;
use std::num::NonZeroUsize;

/// Offset of the last visited element, or None if it overflows usize.
#[inline]
fn last_offset(start: usize, len: usize, stride: NonZeroUsize) -> Option<usize> {
    (len - 1).checked_mul(stride.get())?.checked_add(start)
}

#[inline]
fn assert_in_slice(slice_len: usize, start: usize, len: usize, stride: NonZeroUsize) {
    if len > 0 {
        match last_offset(start, len, stride) {
            Some(last) if last < slice_len => (),
            _ => panic!(
                "strided range out of slice: start={}, len={}, stride={}, slice length={}",
                start, len, stride, slice_len
            ),
        }
    }
}

/// Iterator over elements spaced `stride` apart, e.g. a column of
/// a row-major 2D block.
pub struct StrideIter<'a, T: 'a> {
    ptr: *const T,
    len: usize,
    stride: NonZeroUsize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a> StrideIter<'a, T> {
    /// # Safety
    ///
    /// For every `n < len`, `ptr.add(n * stride)` must point to an
    /// initialized element valid for reads during lifetime `'a`.
    #[inline]
    pub unsafe fn new(ptr: *const T, len: usize, stride: NonZeroUsize) -> Self {
        StrideIter {
            ptr,
            len,
            stride,
            _marker: PhantomData,
        }
    }

    /// Iterate `len` elements of `slice` starting at `start`.
    /// Panics if the last element lies outside the slice or its offset
    /// overflows usize.
    #[inline]
    pub fn from_slice(slice: &'a [T], start: usize, len: usize, stride: NonZeroUsize) -> Self {
        assert_in_slice(slice.len(), start, len, stride);
        // # SAFETY
        //
        // All visited offsets are checked to be within the slice.
        unsafe { StrideIter::new(slice.as_ptr().wrapping_add(start), len, stride) }
    }
}

impl<'a, T: 'a> Iterator for StrideIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            None
        } else {
            unsafe {
                let v = &*self.ptr;
                self.len -= 1;
                if self.len > 0 {
                    self.ptr = self.ptr.add(self.stride.get());
                }
                Some(v)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for StrideIter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            unsafe { Some(&*self.ptr.add(self.len * self.stride.get())) }
        }
    }
}

impl<'a, T: 'a> ExactSizeIterator for StrideIter<'a, T> {}

/// Mutable counterpart of [`StrideIter`].
pub struct StrideIterMut<'a, T: 'a> {
    ptr: *mut T,
    len: usize,
    stride: NonZeroUsize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T: 'a> StrideIterMut<'a, T> {
    /// # Safety
    ///
    /// For every `n < len`, `ptr.add(n * stride)` must point to an
    /// initialized element valid for writes during lifetime `'a`
    /// and not aliased elsewhere.
    #[inline]
    pub unsafe fn new(ptr: *mut T, len: usize, stride: NonZeroUsize) -> Self {
        StrideIterMut {
            ptr,
            len,
            stride,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn from_slice(
        slice: &'a mut [T],
        start: usize,
        len: usize,
        stride: NonZeroUsize,
    ) -> Self {
        assert_in_slice(slice.len(), start, len, stride);
        unsafe { StrideIterMut::new(slice.as_mut_ptr().wrapping_add(start), len, stride) }
    }
}

impl<'a, T: 'a> Iterator for StrideIterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            None
        } else {
            unsafe {
                let v = &mut *self.ptr;
                self.len -= 1;
                if self.len > 0 {
                    self.ptr = self.ptr.add(self.stride.get());
                }
                Some(v)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for StrideIterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            unsafe { Some(&mut *self.ptr.add(self.len * self.stride.get())) }
        }
    }
}

impl<'a, T: 'a> ExactSizeIterator for StrideIterMut<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn stride(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_stride_iter() {
        let vs = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
        let col: Vec<_> = StrideIter::from_slice(&vs, 1, 3, stride(3)).copied().collect();
        assert_eq!(vec![2, 5, 8], col);
        let rev: Vec<_> = StrideIter::from_slice(&vs, 2, 3, stride(3)).rev().copied().collect();
        assert_eq!(vec![9, 6, 3], rev);
        assert_eq!(0, StrideIter::from_slice(&vs, 9, 0, stride(3)).count());
        assert_eq!(9, StrideIter::from_slice(&vs, 0, 9, stride(1)).len());
    }

    #[test]
    fn test_stride_iter_mixed_ends() {
        let vs = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let mut it = StrideIter::from_slice(&vs, 0, 4, stride(2));
        assert_eq!(Some(&0), it.next());
        assert_eq!(Some(&6), it.next_back());
        assert_eq!(Some(&2), it.next());
        assert_eq!(Some(&4), it.next());
        assert_eq!(None, it.next_back());
    }

    #[test]
    fn test_stride_iter_mut() {
        let mut vs = vec![1, 2, 3, 4, 5, 6];
        StrideIterMut::from_slice(&mut vs, 0, 3, stride(2)).for_each(|v| *v *= 10);
        assert_eq!(vec![10, 2, 30, 4, 50, 6], vs);
    }

    #[test]
    #[should_panic]
    fn test_stride_iter_out_of_slice() {
        let vs = vec![1, 2, 3];
        let _ = StrideIter::from_slice(&vs, 1, 2, stride(2));
    }

    #[test]
    #[should_panic(expected = "strided range out of slice")]
    fn test_stride_iter_offset_overflow() {
        let vs = vec![10u64, 20, 30];
        let _ = StrideIter::from_slice(&vs, 2, 3, stride(usize::MAX));
    }

    #[test]
    #[should_panic(expected = "strided range out of slice")]
    fn test_stride_iter_mut_offset_overflow() {
        let mut vs = vec![10u64, 20, 30];
        let _ = StrideIterMut::from_slice(&mut vs, 1, 2, stride(usize::MAX));
    }

    #[test]
    fn test_stride_iter_single_huge_stride() {
        // one element never steps, so any stride is in range.
        let vs = vec![10u64, 20, 30];
        let it = StrideIter::from_slice(&vs, 2, 1, stride(usize::MAX));
        assert_eq!(vec![30], it.copied().collect::<Vec<_>>());
    }
}
