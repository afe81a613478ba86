//! Cursor pairs: an explicit `(begin, end)` pair of positions.

use std::ops::Range;

use crate::category::{Collection, CursorPair};
use crate::cursor::{Cursor, Traverse, TraverseMut};

/// A position that can be compared, read and stepped forward, in the manner
/// of a counting iterator.
///
/// Traversal runs from the first position until it compares equal to the
/// second, so the second must be reachable by stepping the first. A
/// `Range` is also ordered: one whose start is not below its end is empty.
pub trait Position: Clone + PartialEq {
    type Item;

    fn get(&self) -> Self::Item;

    fn step(&mut self);
}

macro_rules! counting_position {
    ($($ty:ty),*) => {
        $(
            impl Position for $ty {
                type Item = $ty;

                fn get(&self) -> $ty {
                    *self
                }

                fn step(&mut self) {
                    *self += 1;
                }
            }
        )*
    };
}

counting_position!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize);

/// Builds the `(begin, end)` pair that `for_each!` traverses as a cursor
/// pair.
pub fn in_range<P: Position>(begin: P, end: P) -> (P, P) {
    (begin, end)
}

impl<P: Position> Collection for (P, P) {
    type Category = CursorPair;
}

impl<P: Position> Collection for Range<P> {
    type Category = CursorPair;
}

/// Cursor holding copies of both positions.
#[derive(Clone, Debug)]
pub struct PairCursor<P> {
    current: P,
    end: P,
}

impl<P: Position> PairCursor<P> {
    pub fn new(begin: P, end: P) -> Self {
        PairCursor {
            current: begin,
            end,
        }
    }
}

impl<P: Position> Cursor for PairCursor<P> {
    type Item<'c> = P::Item
    where
        Self: 'c;

    fn done(&self) -> bool {
        self.current == self.end
    }

    fn get(&mut self) -> Option<P::Item> {
        if self.done() {
            None
        } else {
            Some(self.current.get())
        }
    }

    fn next(&mut self) {
        self.current.step();
    }
}

impl<'a, P> Traverse<'a, (P, P)> for CursorPair
where
    P: Position + 'a,
{
    type Cursor = PairCursor<P>;

    fn begin(pair: &'a (P, P)) -> Self::Cursor {
        PairCursor::new(pair.0.clone(), pair.1.clone())
    }
}

// Starts at `end` when the range is reversed, as `Range` iteration yields
// nothing for `start >= end`.
fn range_cursor<P: Position + PartialOrd>(range: &Range<P>) -> PairCursor<P> {
    if range.start < range.end {
        PairCursor::new(range.start.clone(), range.end.clone())
    } else {
        PairCursor::new(range.end.clone(), range.end.clone())
    }
}

impl<'a, P> Traverse<'a, Range<P>> for CursorPair
where
    P: Position + PartialOrd + 'a,
{
    type Cursor = PairCursor<P>;

    fn begin(range: &'a Range<P>) -> Self::Cursor {
        range_cursor(range)
    }
}

// Positions are copied out of the pair, so a mutable traversal is the same
// walk. Whatever `Position::get` refers to is what the loop mutates.

impl<'a, P> TraverseMut<'a, (P, P)> for CursorPair
where
    P: Position + 'a,
{
    type Cursor = PairCursor<P>;

    fn begin_mut(pair: &'a mut (P, P)) -> Self::Cursor {
        PairCursor::new(pair.0.clone(), pair.1.clone())
    }
}

impl<'a, P> TraverseMut<'a, Range<P>> for CursorPair
where
    P: Position + PartialOrd + 'a,
{
    type Cursor = PairCursor<P>;

    fn begin_mut(range: &'a mut Range<P>) -> Self::Cursor {
        range_cursor(range)
    }
}
