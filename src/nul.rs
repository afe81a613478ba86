//! Null-terminated sequences: the end is marked by a sentinel element rather
//! than by a length or an end position.

use std::ffi::CStr;

use thiserror::Error;

use crate::category::{Collection, NullTerminated};
use crate::cursor::{Cursor, Traverse, TraverseMut};

/// Element types with a terminating value.
pub trait Sentinel: PartialEq + Sized {
    const SENTINEL: Self;

    fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

macro_rules! zero_sentinel {
    ($($ty:ty),*) => {
        $(
            impl Sentinel for $ty {
                const SENTINEL: Self = 0;
            }
        )*
    };
}

zero_sentinel!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize);

impl Sentinel for char {
    const SENTINEL: Self = '\0';
}

/// Error building a null-terminated view.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SentinelError {
    /// The slice holds no sentinel element.
    #[error("no sentinel in a slice of {len} elements")]
    Missing { len: usize },
}

/// Read access to storage that ends with a sentinel element.
///
/// The returned slice contains at least one sentinel; elements after the
/// first sentinel are never visited.
pub trait NulTerminatedSeq {
    type Element: Sentinel;

    fn as_slice_with_nul(&self) -> &[Self::Element];
}

/// Mutable access to storage that ends with a sentinel element.
pub trait NulTerminatedSeqMut: NulTerminatedSeq {
    fn as_mut_slice_with_nul(&mut self) -> &mut [Self::Element];
}

fn sentinel_position<T: Sentinel>(slice: &[T]) -> Result<usize, SentinelError> {
    slice
        .iter()
        .position(Sentinel::is_sentinel)
        .ok_or(SentinelError::Missing { len: slice.len() })
}

/// A shared view of a sentinel-terminated run of elements, the equivalent of
/// a raw `const char *`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NulTerminated<'a, T> {
    // Ends with the sentinel.
    seq: &'a [T],
}

impl<'a, T: Sentinel> NulTerminated<'a, T> {
    /// Views `slice` up to and including its first sentinel.
    pub fn new(slice: &'a [T]) -> Result<Self, SentinelError> {
        let end = sentinel_position(slice)?;
        Ok(NulTerminated {
            seq: &slice[..=end],
        })
    }

    /// Views the elements starting at `ptr` up to and including the first
    /// sentinel.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of every element up to and including
    /// the first sentinel, and that memory must not be mutated for `'a`.
    pub unsafe fn from_ptr(ptr: *const T) -> Self {
        // SAFETY: the caller guarantees every element up to and including
        // the sentinel is readable and unchanged for `'a`.
        unsafe {
            let mut len = 0;
            while !(*ptr.add(len)).is_sentinel() {
                len += 1;
            }
            NulTerminated {
                seq: std::slice::from_raw_parts(ptr, len + 1),
            }
        }
    }

    /// Number of elements before the sentinel.
    pub fn len(&self) -> usize {
        self.seq.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The elements before the sentinel.
    pub fn as_slice(&self) -> &'a [T] {
        &self.seq[..self.len()]
    }
}

/// A mutable view of a sentinel-terminated run of elements, the equivalent
/// of a raw `char *`.
#[derive(Debug, PartialEq, Eq)]
pub struct NulTerminatedMut<'a, T> {
    seq: &'a mut [T],
}

impl<'a, T: Sentinel> NulTerminatedMut<'a, T> {
    /// Views `slice` up to and including its first sentinel.
    pub fn new(slice: &'a mut [T]) -> Result<Self, SentinelError> {
        let end = sentinel_position(slice)?;
        Ok(NulTerminatedMut {
            seq: &mut slice[..=end],
        })
    }

    pub fn len(&self) -> usize {
        self.seq.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.seq[..self.len()]
    }
}

impl<T: Sentinel> Collection for NulTerminated<'_, T> {
    type Category = NullTerminated;
}

impl<T: Sentinel> NulTerminatedSeq for NulTerminated<'_, T> {
    type Element = T;

    fn as_slice_with_nul(&self) -> &[T] {
        self.seq
    }
}

impl<T: Sentinel> Collection for NulTerminatedMut<'_, T> {
    type Category = NullTerminated;
}

impl<T: Sentinel> NulTerminatedSeq for NulTerminatedMut<'_, T> {
    type Element = T;

    fn as_slice_with_nul(&self) -> &[T] {
        &*self.seq
    }
}

impl<T: Sentinel> NulTerminatedSeqMut for NulTerminatedMut<'_, T> {
    fn as_mut_slice_with_nul(&mut self) -> &mut [T] {
        &mut *self.seq
    }
}

impl Collection for CStr {
    type Category = NullTerminated;
}

impl NulTerminatedSeq for CStr {
    type Element = u8;

    fn as_slice_with_nul(&self) -> &[u8] {
        self.to_bytes_with_nul()
    }
}

/// Read-only cursor over a null-terminated sequence. Only the current
/// position is kept; the end is found by inspecting the current element.
#[derive(Clone, Debug)]
pub struct NulCursor<'a, T> {
    seq: &'a [T],
    current: usize,
}

impl<'a, T: Sentinel> Cursor for NulCursor<'a, T> {
    type Item<'c> = &'a T
    where
        Self: 'c;

    fn done(&self) -> bool {
        self.seq.get(self.current).map_or(true, Sentinel::is_sentinel)
    }

    fn get(&mut self) -> Option<&'a T> {
        self.seq
            .get(self.current)
            .filter(|element| !element.is_sentinel())
    }

    fn next(&mut self) {
        self.current += 1;
    }
}

/// Mutable cursor over a null-terminated sequence.
#[derive(Debug)]
pub struct NulCursorMut<'a, T> {
    seq: &'a mut [T],
    current: usize,
}

impl<'a, T: Sentinel> Cursor for NulCursorMut<'a, T> {
    type Item<'c> = &'c mut T
    where
        Self: 'c;

    fn done(&self) -> bool {
        self.seq.get(self.current).map_or(true, Sentinel::is_sentinel)
    }

    fn get(&mut self) -> Option<&mut T> {
        self.seq
            .get_mut(self.current)
            .filter(|element| !element.is_sentinel())
    }

    fn next(&mut self) {
        self.current += 1;
    }
}

impl<'a, C> Traverse<'a, C> for NullTerminated
where
    C: NulTerminatedSeq + ?Sized + 'a,
{
    type Cursor = NulCursor<'a, C::Element>;

    fn begin(collection: &'a C) -> Self::Cursor {
        NulCursor {
            seq: collection.as_slice_with_nul(),
            current: 0,
        }
    }
}

impl<'a, C> TraverseMut<'a, C> for NullTerminated
where
    C: NulTerminatedSeqMut + ?Sized + 'a,
{
    type Cursor = NulCursorMut<'a, C::Element>;

    fn begin_mut(collection: &'a mut C) -> Self::Cursor {
        NulCursorMut {
            seq: collection.as_mut_slice_with_nul(),
            current: 0,
        }
    }
}
