//! The storage cell: the one slot per loop that keeps the collection alive.

use std::ops::Range;

use crate::nul::{NulTerminated, NulTerminatedMut};
use crate::position::Position;

/// Runtime mirror of the choice `for_each!` makes when it expands: a
/// collection expression that names a place is stored `Borrowed`, any other
/// expression is stored `Owned`. [`Cell::kind`] and [`CellMut::kind`] report
/// which one a cell holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindingKind {
    Borrowed,
    Owned,
}

/// Storage for a read-only loop.
///
/// Cloning a cell aliases a borrowed collection and deep-copies an owned
/// one.
#[derive(Clone, Debug)]
pub enum Cell<'a, C> {
    Borrowed(&'a C),
    Owned(C),
}

impl<'a, C> Cell<'a, C> {
    pub fn borrowed(collection: &'a C) -> Self {
        Cell::Borrowed(collection)
    }

    pub fn owned(collection: C) -> Self {
        Cell::Owned(collection)
    }

    pub fn kind(&self) -> BindingKind {
        match self {
            Cell::Borrowed(_) => BindingKind::Borrowed,
            Cell::Owned(_) => BindingKind::Owned,
        }
    }

    pub fn get(&self) -> &C {
        match self {
            Cell::Borrowed(collection) => collection,
            Cell::Owned(collection) => collection,
        }
    }
}

/// Storage for a loop that mutates elements.
///
/// Only handle types may be stored by value: mutating the elements of a
/// temporary container would be lost when the loop ends. Construct through
/// [`CellMut::owned`] to have that checked.
#[derive(Debug)]
pub enum CellMut<'a, C> {
    Borrowed(&'a mut C),
    Owned(C),
}

impl<'a, C> CellMut<'a, C> {
    pub fn borrowed(collection: &'a mut C) -> Self {
        CellMut::Borrowed(collection)
    }

    pub fn owned(collection: C) -> Self
    where
        C: CheapCopy,
    {
        CellMut::Owned(collection)
    }

    pub fn kind(&self) -> BindingKind {
        match self {
            CellMut::Borrowed(_) => BindingKind::Borrowed,
            CellMut::Owned(_) => BindingKind::Owned,
        }
    }

    pub fn get_mut(&mut self) -> &mut C {
        match self {
            CellMut::Borrowed(collection) => collection,
            CellMut::Owned(collection) => collection,
        }
    }
}

/// A handle that is cheap to copy and refers to storage outliving it.
///
/// Temporaries of these types may be traversed mutably, because writes go
/// through to the storage they refer to. Implement it for view types such
/// as spans or cursors into longer-lived buffers.
#[diagnostic::on_unimplemented(
    message = "elements of the temporary `{Self}` cannot be mutated by `for_each!`",
    label = "temporary collection in a mutable loop",
    note = "iterate a named collection, or pass `&mut collection`, to mutate elements in place"
)]
pub trait CheapCopy {}

impl<C: ?Sized> CheapCopy for &C {}

impl<C: ?Sized> CheapCopy for &mut C {}

impl<P: Position> CheapCopy for (P, P) {}

impl<P: Position> CheapCopy for Range<P> {}

impl<T> CheapCopy for NulTerminated<'_, T> {}

impl<T> CheapCopy for NulTerminatedMut<'_, T> {}
