//! Fixed arrays: contiguous storage whose length is part of the type.

use crate::category::{Collection, FixedArray};
use crate::cursor::{Cursor, Traverse, TraverseMut};

/// Contiguous storage of exactly `LEN` elements.
///
/// Both slices must have length `LEN`. Traversal walks indices `0..LEN` and
/// stops early rather than panicking if a slice is shorter.
pub trait FixedLength {
    type Element;

    const LEN: usize;

    fn as_slice(&self) -> &[Self::Element];

    fn as_mut_slice(&mut self) -> &mut [Self::Element];
}

impl<T, const N: usize> Collection for [T; N] {
    type Category = FixedArray;
}

impl<T, const N: usize> FixedLength for [T; N] {
    type Element = T;

    const LEN: usize = N;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

/// Read-only cursor over a fixed array: base, current index, end index.
#[derive(Clone, Debug)]
pub struct ArrayCursor<'a, T> {
    base: &'a [T],
    current: usize,
    end: usize,
}

impl<'a, T> Cursor for ArrayCursor<'a, T> {
    type Item<'c> = &'a T
    where
        Self: 'c;

    fn done(&self) -> bool {
        self.current == self.end
    }

    fn get(&mut self) -> Option<&'a T> {
        if self.done() {
            return None;
        }
        self.base.get(self.current)
    }

    fn next(&mut self) {
        self.current += 1;
    }
}

/// Mutable cursor over a fixed array. Each element is lent for one
/// iteration.
#[derive(Debug)]
pub struct ArrayCursorMut<'a, T> {
    base: &'a mut [T],
    current: usize,
    end: usize,
}

impl<'a, T> Cursor for ArrayCursorMut<'a, T> {
    type Item<'c> = &'c mut T
    where
        Self: 'c;

    fn done(&self) -> bool {
        self.current == self.end
    }

    fn get(&mut self) -> Option<&mut T> {
        if self.done() {
            return None;
        }
        self.base.get_mut(self.current)
    }

    fn next(&mut self) {
        self.current += 1;
    }
}

impl<'a, C> Traverse<'a, C> for FixedArray
where
    C: FixedLength + ?Sized + 'a,
{
    type Cursor = ArrayCursor<'a, C::Element>;

    fn begin(collection: &'a C) -> Self::Cursor {
        ArrayCursor {
            base: collection.as_slice(),
            current: 0,
            end: C::LEN,
        }
    }
}

impl<'a, C> TraverseMut<'a, C> for FixedArray
where
    C: FixedLength + ?Sized + 'a,
{
    type Cursor = ArrayCursorMut<'a, C::Element>;

    fn begin_mut(collection: &'a mut C) -> Self::Cursor {
        ArrayCursorMut {
            base: collection.as_mut_slice(),
            current: 0,
            end: C::LEN,
        }
    }
}
