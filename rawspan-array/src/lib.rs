//! Accessors over caller-owned contiguous memory.
//!
//! Every container comes with two tiers of element access.
//! The checked tier validates coordinates and reports
//! [`Error::IndexOutOfBound`](rawspan_common::error::Error::IndexOutOfBound).
//! The unchecked tier consists of `unsafe fn`s named `*_ref_at`,
//! `*_mut_at` and `first_element_*`, which compute the flat
//! row-major offset and skip all bounds checks.
pub mod array2d;
pub mod array3d;
pub mod contiguous;
pub mod list;
pub mod slice;
pub mod span2d;
pub mod stride;

pub use array2d::Array2D;
pub use array3d::Array3D;
pub use contiguous::Contiguous;
pub use list::{GrowList, VecExt};
pub use slice::SliceExt;
pub use span2d::{Span2D, Span2DMut};
pub use stride::{StrideIter, StrideIterMut};
