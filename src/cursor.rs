//! The traversal protocol shared by all categories.

use crate::category::{Category, Collection};

/// Position state of one traversal.
///
/// `for_each!` calls `done` once before the first element, then for each
/// position `get` at most once followed by `next` and `done`. Cursors never
/// re-evaluate or re-classify the collection they were started from.
pub trait Cursor {
    /// The element handed to the loop variable. Mutable cursors lend it for
    /// one iteration; shared cursors hand out references that live as long
    /// as the collection borrow.
    type Item<'c>
    where
        Self: 'c;

    /// Whether the cursor has reached the terminal position.
    fn done(&self) -> bool;

    /// The element at the current position, `None` exactly when `done`.
    fn get(&mut self) -> Option<Self::Item<'_>>;

    /// Moves to the following position.
    fn next(&mut self);
}

/// Read-only traversal of collection `C` under this category.
pub trait Traverse<'a, C: ?Sized + 'a>: Category {
    type Cursor: Cursor;

    fn begin(collection: &'a C) -> Self::Cursor;
}

/// Mutable traversal of collection `C` under this category.
pub trait TraverseMut<'a, C: ?Sized + 'a>: Category {
    type Cursor: Cursor;

    fn begin_mut(collection: &'a mut C) -> Self::Cursor;
}

/// Method-call entry into [`Traverse`].
///
/// `for_each!` calls `foreach_begin` with method syntax so that references,
/// boxes and other `Deref` wrappers are peeled until a [`Collection`] is
/// found.
#[doc(hidden)]
pub trait Begin<'a> {
    type Cursor: Cursor;

    fn foreach_begin(&'a self) -> Self::Cursor;
}

impl<'a, C> Begin<'a> for C
where
    C: Collection + ?Sized + 'a,
    C::Category: Traverse<'a, C>,
{
    type Cursor = <C::Category as Traverse<'a, C>>::Cursor;

    fn foreach_begin(&'a self) -> Self::Cursor {
        <C::Category as Traverse<'a, C>>::begin(self)
    }
}

/// Method-call entry into [`TraverseMut`].
#[doc(hidden)]
pub trait BeginMut<'a> {
    type Cursor: Cursor;

    fn foreach_begin_mut(&'a mut self) -> Self::Cursor;
}

impl<'a, C> BeginMut<'a> for C
where
    C: Collection + ?Sized + 'a,
    C::Category: TraverseMut<'a, C>,
{
    type Cursor = <C::Category as TraverseMut<'a, C>>::Cursor;

    fn foreach_begin_mut(&'a mut self) -> Self::Cursor {
        <C::Category as TraverseMut<'a, C>>::begin_mut(self)
    }
}
