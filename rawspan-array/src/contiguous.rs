use crate::array2d::Array2D;
use crate::array3d::Array3D;
use crate::list::GrowList;
use crate::span2d::{Span2D, Span2DMut};
use bytemuck::Pod;

/// Contiguous is implemented by every container whose elements live in
/// one gap-free block, exposing them as a flat slice regardless of shape.
///
/// Multi-dimensional containers flatten in row-major order.
/// Growable lists expose only their logical contents.
pub trait Contiguous<T> {
    fn flat(&self) -> &[T];

    #[inline]
    fn flat_len(&self) -> usize {
        self.flat().len()
    }

    /// Reinterpret elements as native-endian bytes.
    #[inline]
    fn as_bytes(&self) -> &[u8]
    where
        T: Pod,
    {
        bytemuck::cast_slice(self.flat())
    }
}

impl<T> Contiguous<T> for [T] {
    #[inline]
    fn flat(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Contiguous<T> for [T; N] {
    #[inline]
    fn flat(&self) -> &[T] {
        self
    }
}

impl<T> Contiguous<T> for Vec<T> {
    #[inline]
    fn flat(&self) -> &[T] {
        self
    }
}

impl<T> Contiguous<T> for Span2D<'_, T> {
    #[inline]
    fn flat(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Contiguous<T> for Span2DMut<'_, T> {
    #[inline]
    fn flat(&self) -> &[T] {
        self.as_span().as_slice()
    }
}

impl<T> Contiguous<T> for Array2D<T> {
    #[inline]
    fn flat(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Contiguous<T> for Array3D<T> {
    #[inline]
    fn flat(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Clone + Default> Contiguous<T> for GrowList<T> {
    #[inline]
    fn flat(&self) -> &[T] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_views_agree() {
        let vs = vec![1u32, 2, 3, 4, 5, 6];
        let arr2 = Array2D::from_vec(vs.clone(), 2, 3).unwrap();
        let arr3 = Array3D::from_vec(vs.clone(), 1, 2, 3).unwrap();
        let list: GrowList<u32> = vs.iter().copied().collect();
        let span = Span2D::new(&vs[..], 3, 2).unwrap();
        assert_eq!(vs.flat(), arr2.flat());
        assert_eq!(vs.flat(), arr3.flat());
        assert_eq!(vs.flat(), list.flat());
        assert_eq!(vs.flat(), span.flat());
        assert_eq!(6, list.flat_len());
    }

    #[test]
    fn test_as_bytes() {
        let vs = [0x0102u16, 0x0304];
        let bytes = vs.as_bytes();
        assert_eq!(4, bytes.len());
        assert_eq!(&0x0102u16.to_ne_bytes(), &bytes[..2]);
    }
}
