//! Sequence containers: anything that can hand out an iterator over its
//! elements.

use std::collections::{
    binary_heap, btree_map, btree_set, hash_map, hash_set, linked_list, vec_deque, BTreeMap,
    BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque,
};
use std::{option, slice};

use crate::category::{Collection, SequenceContainer};
use crate::cursor::{Cursor, Traverse, TraverseMut};

/// Read access to the elements of a sequence container.
///
/// The returned iterator plays the role of a `(begin, end)` pair: it knows
/// its current position and when it has reached the end.
pub trait Sequence {
    type Iter<'a>: Iterator
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_>;
}

/// Mutable access to the elements of a sequence container.
pub trait SequenceMut: Sequence {
    type IterMut<'a>: Iterator
    where
        Self: 'a;

    fn elements_mut(&mut self) -> Self::IterMut<'_>;
}

/// Cursor over a sequence container: the underlying iterator and the element
/// at the current position.
pub struct SequenceCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
}

impl<I: Iterator> SequenceCursor<I> {
    pub fn new(mut iter: I) -> Self {
        let current = iter.next();
        SequenceCursor { iter, current }
    }
}

impl<I: Iterator> Cursor for SequenceCursor<I> {
    type Item<'c> = I::Item
    where
        Self: 'c;

    fn done(&self) -> bool {
        self.current.is_none()
    }

    fn get(&mut self) -> Option<I::Item> {
        self.current.take()
    }

    fn next(&mut self) {
        self.current = self.iter.next();
    }
}

impl<'a, C> Traverse<'a, C> for SequenceContainer
where
    C: Sequence + ?Sized + 'a,
{
    type Cursor = SequenceCursor<C::Iter<'a>>;

    fn begin(collection: &'a C) -> Self::Cursor {
        SequenceCursor::new(collection.elements())
    }
}

impl<'a, C> TraverseMut<'a, C> for SequenceContainer
where
    C: SequenceMut + ?Sized + 'a,
{
    type Cursor = SequenceCursor<C::IterMut<'a>>;

    fn begin_mut(collection: &'a mut C) -> Self::Cursor {
        SequenceCursor::new(collection.elements_mut())
    }
}

impl<T> Collection for [T] {
    type Category = SequenceContainer;
}

impl<T> Sequence for [T] {
    type Iter<'a> = slice::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> SequenceMut for [T] {
    type IterMut<'a> = slice::IterMut<'a, T>
    where
        Self: 'a;

    fn elements_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

impl<T> Collection for Vec<T> {
    type Category = SequenceContainer;
}

impl<T> Sequence for Vec<T> {
    type Iter<'a> = slice::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> SequenceMut for Vec<T> {
    type IterMut<'a> = slice::IterMut<'a, T>
    where
        Self: 'a;

    fn elements_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

impl<T> Collection for VecDeque<T> {
    type Category = SequenceContainer;
}

impl<T> Sequence for VecDeque<T> {
    type Iter<'a> = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> SequenceMut for VecDeque<T> {
    type IterMut<'a> = vec_deque::IterMut<'a, T>
    where
        Self: 'a;

    fn elements_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

impl<T> Collection for LinkedList<T> {
    type Category = SequenceContainer;
}

impl<T> Sequence for LinkedList<T> {
    type Iter<'a> = linked_list::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> SequenceMut for LinkedList<T> {
    type IterMut<'a> = linked_list::IterMut<'a, T>
    where
        Self: 'a;

    fn elements_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

// Heaps and sets only give read access: mutating an element in place would
// break their ordering or hashing invariants.

impl<T> Collection for BinaryHeap<T> {
    type Category = SequenceContainer;
}

impl<T> Sequence for BinaryHeap<T> {
    type Iter<'a> = binary_heap::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> Collection for BTreeSet<T> {
    type Category = SequenceContainer;
}

impl<T> Sequence for BTreeSet<T> {
    type Iter<'a> = btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T, S> Collection for HashSet<T, S> {
    type Category = SequenceContainer;
}

impl<T, S> Sequence for HashSet<T, S> {
    type Iter<'a> = hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Category = SequenceContainer;
}

impl<K, V> Sequence for BTreeMap<K, V> {
    type Iter<'a> = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<K, V> SequenceMut for BTreeMap<K, V> {
    type IterMut<'a> = btree_map::IterMut<'a, K, V>
    where
        Self: 'a;

    fn elements_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    type Category = SequenceContainer;
}

impl<K, V, S> Sequence for HashMap<K, V, S> {
    type Iter<'a> = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<K, V, S> SequenceMut for HashMap<K, V, S> {
    type IterMut<'a> = hash_map::IterMut<'a, K, V>
    where
        Self: 'a;

    fn elements_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

impl<T> Collection for Option<T> {
    type Category = SequenceContainer;
}

impl<T> Sequence for Option<T> {
    type Iter<'a> = option::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> SequenceMut for Option<T> {
    type IterMut<'a> = option::IterMut<'a, T>
    where
        Self: 'a;

    fn elements_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

// Strings are sequences of `char` values.

impl Collection for str {
    type Category = SequenceContainer;
}

impl Sequence for str {
    type Iter<'a> = std::str::Chars<'a>;

    fn elements(&self) -> Self::Iter<'_> {
        self.chars()
    }
}

impl Collection for String {
    type Category = SequenceContainer;
}

impl Sequence for String {
    type Iter<'a> = std::str::Chars<'a>;

    fn elements(&self) -> Self::Iter<'_> {
        self.chars()
    }
}
