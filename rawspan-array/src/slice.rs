/// Unchecked element access on contiguous one-dimensional storage.
///
/// Implemented on `[T]`, so fixed-size arrays and vectors get it
/// through unsizing and deref.
pub trait SliceExt<T> {
    /// Returns pointer to slot 0.
    /// For empty storage it points to where slot 0 would be and
    /// must not be dereferenced.
    fn first_element_ptr(&self) -> *const T;

    fn first_element_mut_ptr(&mut self) -> *mut T;

    /// # Safety
    ///
    /// Storage must not be empty.
    unsafe fn first_element_ref(&self) -> &T;

    /// # Safety
    ///
    /// Storage must not be empty.
    unsafe fn first_element_mut(&mut self) -> &mut T;

    /// Returns reference at given index without bounds check.
    ///
    /// # Safety
    ///
    /// Index must be less than the length.
    unsafe fn element_ref_at(&self, idx: usize) -> &T;

    /// # Safety
    ///
    /// Index must be less than the length.
    unsafe fn element_mut_at(&mut self, idx: usize) -> &mut T;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn first_element_ptr(&self) -> *const T {
        self.as_ptr()
    }

    #[inline]
    fn first_element_mut_ptr(&mut self) -> *mut T {
        self.as_mut_ptr()
    }

    #[inline]
    unsafe fn first_element_ref(&self) -> &T {
        debug_assert!(!self.is_empty());
        &*self.as_ptr()
    }

    #[inline]
    unsafe fn first_element_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty());
        &mut *self.as_mut_ptr()
    }

    #[inline]
    unsafe fn element_ref_at(&self, idx: usize) -> &T {
        debug_assert!(idx < self.len());
        &*self.as_ptr().add(idx)
    }

    #[inline]
    unsafe fn element_mut_at(&mut self, idx: usize) -> &mut T {
        debug_assert!(idx < self.len());
        &mut *self.as_mut_ptr().add(idx)
    }
}
