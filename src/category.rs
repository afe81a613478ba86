//! Classification of collections into the four traversal categories.

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Runtime mirror of a [`Category`] tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    SequenceContainer,
    FixedArray,
    NullTerminated,
    CursorPair,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CategoryKind::SequenceContainer => "sequence container",
            CategoryKind::FixedArray => "fixed array",
            CategoryKind::NullTerminated => "null-terminated sequence",
            CategoryKind::CursorPair => "cursor pair",
        };
        f.write_str(name)
    }
}

/// A compile-time category tag. The set of tags is closed.
pub trait Category: sealed::Sealed {
    const KIND: CategoryKind;
}

/// Dynamically sized containers that hand out an iterator over their
/// elements. See [`Sequence`](crate::Sequence).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceContainer;

/// Contiguous storage whose length is part of the type. See
/// [`FixedLength`](crate::FixedLength).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedArray;

/// Contiguous storage whose end is marked by a sentinel element. See
/// [`NulTerminatedSeq`](crate::NulTerminatedSeq).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullTerminated;

/// An explicit `(begin, end)` pair of positions. See
/// [`Position`](crate::Position).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorPair;

macro_rules! category {
    ($($tag:ident),*) => {
        $(
            impl sealed::Sealed for $tag {}

            impl Category for $tag {
                const KIND: CategoryKind = CategoryKind::$tag;
            }
        )*
    };
}

category!(SequenceContainer, FixedArray, NullTerminated, CursorPair);

/// A type that `for_each!` knows how to traverse.
///
/// The associated `Category` decides which traversal protocol applies, so a
/// type belongs to exactly one category. Besides this trait, a type author
/// implements the capability trait matching the tag:
///
/// | `Category`          | capability                                       |
/// |---------------------|--------------------------------------------------|
/// | `SequenceContainer` | [`Sequence`](crate::Sequence), optionally [`SequenceMut`](crate::SequenceMut) |
/// | `FixedArray`        | [`FixedLength`](crate::FixedLength)              |
/// | `NullTerminated`    | [`NulTerminatedSeq`](crate::NulTerminatedSeq), optionally [`NulTerminatedSeqMut`](crate::NulTerminatedSeqMut) |
/// | `CursorPair`        | built in for `(P, P)` and `Range<P>` where `P: Position` |
///
/// Do not implement `Collection` for references or smart pointers: the
/// macro reaches the collection behind them by auto-dereference.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be traversed by `for_each!`",
    label = "unclassifiable collection",
    note = "implement `foreach::Collection` with one of the four category tags"
)]
pub trait Collection {
    type Category: Category;
}

/// The category `for_each!` would use for `collection`. Nothing is
/// evaluated beyond taking the reference.
pub fn category_of<C>(_collection: &C) -> CategoryKind
where
    C: Collection + ?Sized,
{
    <C::Category as Category>::KIND
}
