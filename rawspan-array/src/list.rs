use rawspan_common::error::{Error, Result};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::mem::MaybeUninit;

const MIN_CAPACITY: usize = 4;

/// GrowList is a growable list whose backing store is exposed.
///
/// The backing store is always fully initialized, so its whole
/// physical capacity can be viewed as `&[T]`. The first `len()`
/// slots are the logical contents; slots past the end hold
/// `T::default()`.
///
/// Growing reallocates the backing store. References obtained from
/// [`backing_array`](GrowList::backing_array) are tied to a borrow
/// of the list, so the compiler rejects mutation while they are alive.
/// Raw pointers from [`first_element_ptr`](GrowList::first_element_ptr)
/// carry no such protection: any insert, push or resize may swap in a
/// new backing store and leave them dangling.
#[derive(Debug, Clone)]
pub struct GrowList<T> {
    items: Box<[T]>,
    len: usize,
}

// Equality and hashing only consider logical contents.
impl<T: PartialEq> PartialEq for GrowList<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.items[..self.len] == other.items[..other.len]
    }
}

impl<T: Eq> Eq for GrowList<T> {}

impl<T: Hash> Hash for GrowList<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items[..self.len].hash(state)
    }
}

impl<T: Clone + Default> GrowList<T> {
    #[inline]
    pub fn new() -> Self {
        GrowList {
            items: Box::new([]),
            len: 0,
        }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        GrowList {
            items: vec![T::default(); cap].into_boxed_slice(),
            len: 0,
        }
    }

    /// Logical element count.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical length of the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items[..self.len]
    }

    /// Returns the whole backing store, including unused capacity.
    #[inline]
    pub fn backing_array(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn backing_array_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Reserve at least given number of elements in total.
    ///
    /// Panics with "capacity overflow" if the capacity cannot be
    /// represented for `T`.
    #[inline]
    pub fn reserve(&mut self, cap: usize) {
        if let Err(e) = self.try_reserve(cap) {
            panic!("{}", e)
        }
    }

    /// Reserve at least given number of elements in total, failing
    /// instead of panicking if the capacity is too large.
    #[inline]
    pub fn try_reserve(&mut self, cap: usize) -> Result<()> {
        if cap <= self.items.len() {
            return Ok(());
        }
        let new_cap = grown_capacity::<T>(self.items.len(), cap)
            .ok_or(Error::CapacityOverflow { requested: cap })?;
        let mut new_items = Vec::with_capacity(new_cap);
        new_items.extend_from_slice(&self.items[..self.len]);
        new_items.resize(new_cap, T::default());
        self.items = new_items.into_boxed_slice();
        Ok(())
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.reserve(self.len + 1);
        self.items[self.len] = value;
        self.len += 1;
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(std::mem::take(&mut self.items[self.len]))
    }

    /// Insert value at given position, shifting later elements right.
    /// Position may equal the length.
    #[inline]
    pub fn insert(&mut self, idx: usize, value: T) -> Result<()> {
        if idx > self.len {
            return Err(Error::IndexOutOfBound(format!(
                "insert position {} > list length {}",
                idx, self.len
            )));
        }
        self.reserve(self.len + 1);
        self.items[idx..=self.len].rotate_right(1);
        self.items[idx] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove value at given position, shifting later elements left.
    #[inline]
    pub fn remove(&mut self, idx: usize) -> Result<T> {
        if idx >= self.len {
            return Err(Error::IndexOutOfBound(format!(
                "remove position {} >= list length {}",
                idx, self.len
            )));
        }
        let value = std::mem::take(&mut self.items[idx]);
        self.items[idx..self.len].rotate_left(1);
        self.len -= 1;
        Ok(value)
    }

    /// Resize the logical length, filling new slots with given value.
    #[inline]
    pub fn resize(&mut self, len: usize, value: T) {
        if len > self.len {
            self.reserve(len);
            self.items[self.len..len].fill(value);
        } else {
            self.items[len..self.len].fill(T::default());
        }
        self.len = len;
    }

    #[inline]
    pub fn clear(&mut self) {
        self.resize(0, T::default())
    }

    #[inline]
    pub fn first_element_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    #[inline]
    pub fn first_element_mut_ptr(&mut self) -> *mut T {
        self.items.as_mut_ptr()
    }

    /// # Safety
    ///
    /// Backing store must not be empty, i.e. capacity is non-zero.
    #[inline]
    pub unsafe fn first_element_ref(&self) -> &T {
        debug_assert!(!self.items.is_empty());
        &*self.items.as_ptr()
    }

    /// Returns reference into the backing store without bounds check.
    ///
    /// # Safety
    ///
    /// Index must be less than capacity. Slots between length and
    /// capacity hold default values, not list contents.
    #[inline]
    pub unsafe fn element_ref_at(&self, idx: usize) -> &T {
        debug_assert!(idx < self.items.len());
        &*self.items.as_ptr().add(idx)
    }

    /// # Safety
    ///
    /// Index must be less than capacity.
    #[inline]
    pub unsafe fn element_mut_at(&mut self, idx: usize) -> &mut T {
        debug_assert!(idx < self.items.len());
        &mut *self.items.as_mut_ptr().add(idx)
    }
}

/// Next capacity that holds `cap` elements: a power of two, at least
/// double the current one, and never more bytes than `isize::MAX`.
#[inline]
fn grown_capacity<T>(current: usize, cap: usize) -> Option<usize> {
    let max_cap = match std::mem::size_of::<T>() {
        0 => usize::MAX,
        size => isize::MAX as usize / size,
    };
    if cap > max_cap {
        return None;
    }
    let new_cap = cap
        .checked_next_power_of_two()
        .unwrap_or(cap)
        .max(current.saturating_mul(2))
        .max(MIN_CAPACITY);
    Some(new_cap.min(max_cap))
}

impl<T: Clone + Default> Default for GrowList<T> {
    #[inline]
    fn default() -> Self {
        GrowList::new()
    }
}

impl<T: Clone + Default> From<Vec<T>> for GrowList<T> {
    #[inline]
    fn from(mut src: Vec<T>) -> Self {
        let len = src.len();
        // zero-sized vectors report usize::MAX capacity.
        let cap = if std::mem::size_of::<T>() == 0 {
            len
        } else {
            src.capacity()
        };
        src.resize(cap, T::default());
        GrowList {
            items: src.into_boxed_slice(),
            len,
        }
    }
}

impl<T: Clone + Default> FromIterator<T> for GrowList<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        GrowList::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Exposes the backing store of a standard vector.
///
/// Slots past `len()` are uninitialized, so they are exposed as
/// `MaybeUninit`.
pub trait VecExt<T> {
    fn backing_array(&self) -> &[MaybeUninit<T>];
}

impl<T> VecExt<T> for Vec<T> {
    #[inline]
    fn backing_array(&self) -> &[MaybeUninit<T>] {
        // # SAFETY
        //
        // Vector owns `capacity()` slots starting at its pointer and
        // MaybeUninit<T> has the same layout as T.
        unsafe { std::slice::from_raw_parts(self.as_ptr() as *const MaybeUninit<T>, self.capacity()) }
    }
}
