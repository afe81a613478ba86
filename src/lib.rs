//! One loop syntax for sequence containers, fixed arrays, null-terminated
//! sequences and cursor pairs.
//!
//! ```
//! use foreach::for_each;
//!
//! let mut scores = vec![70, 85, 90];
//! for_each!(let score: &mut i32 in scores {
//!     *score += 5;
//! });
//! assert_eq!(scores, [75, 90, 95]);
//! ```
//!
//! The collection expression is evaluated exactly once. A named collection
//! is borrowed; a temporary is moved into the loop and dropped when the loop
//! ends. Elements of a temporary container are read-only:
//!
//! ```
//! # use foreach::for_each;
//! fn readings() -> Vec<u8> {
//!     vec![3, 1, 4]
//! }
//!
//! let mut sum = 0;
//! for_each!(let reading: u32 in readings() {
//!     sum += reading;
//! });
//! assert_eq!(sum, 8);
//! ```
//!
//! ```compile_fail
//! # use foreach::for_each;
//! for_each!(let x: &mut i32 in vec![1, 2] {
//!     *x += 1;
//! });
//! ```
//!
//! # Invocation
//!
//! ```text
//! for_each!(['label:] <binding> in <collection> <block> [else <block>])
//! ```
//!
//! The binding is either `let <pattern>` with an optional type, or an
//! existing variable that is assigned each element's value:
//!
//! - `let x` binds the element as the cursor yields it, usually a reference.
//! - `let x: &T` binds a shared reference, `let x: &mut T` a mutable one.
//!   Writing `&mut` in the type is what makes the loop mutable.
//! - `let x: T` with a non-reference type binds a copy of the element's
//!   value, converted with `From`.
//! - `x` (no `let`) assigns the element's value to `x`.
//!
//! `break`, `continue` and labels behave as in a native loop. The `else`
//! block runs only when the collection is empty:
//!
//! ```
//! # use foreach::for_each;
//! let empty: [u32; 0] = [];
//! let mut ran_else = false;
//! for_each!(let n in empty {
//!     let _ = n;
//! } else {
//!     ran_else = true;
//! });
//! assert!(ran_else);
//! ```
//!
//! # Categories
//!
//! Every traversable type implements [`Collection`], whose associated
//! [`Category`] picks one of four traversal protocols:
//!
//! ```
//! # use foreach::for_each;
//! use std::ffi::CStr;
//!
//! let mut seen = Vec::new();
//! for_each!(let n: i32 in vec![1, 2] { seen.push(n); });         // sequence container
//! for_each!(let n: i32 in [3, 4] { seen.push(n); });             // fixed array
//! let bytes = CStr::from_bytes_with_nul(b"\x05\x06\0").unwrap();
//! for_each!(let n: i32 in bytes { seen.push(n); });              // null-terminated
//! for_each!(let n: i32 in foreach::in_range(7, 9) { seen.push(n); }); // cursor pair
//! assert_eq!(seen, [1, 2, 3, 4, 5, 6, 7, 8]);
//! ```
//!
//! A type that is none of these does not compile:
//!
//! ```compile_fail
//! # use foreach::for_each;
//! struct Opaque;
//! for_each!(let x in Opaque {
//!     let _ = x;
//! });
//! ```
//!
//! and neither does a loop variable that cannot hold the elements:
//!
//! ```compile_fail
//! # use foreach::for_each;
//! let words = vec![1, 2];
//! for_each!(let word: String in words {
//!     let _ = word;
//! });
//! ```

#![deny(unsafe_op_in_unsafe_fn)]

extern crate self as foreach;

mod array;
mod category;
mod cell;
mod cursor;
mod element;
mod nul;
mod position;
mod sequence;

pub use array::{ArrayCursor, ArrayCursorMut, FixedLength};
pub use category::{
    category_of, Category, CategoryKind, Collection, CursorPair, FixedArray, NullTerminated,
    SequenceContainer,
};
pub use cell::{BindingKind, Cell, CellMut, CheapCopy};
pub use cursor::{Cursor, Traverse, TraverseMut};
pub use element::{bind_value, Element, FromElement};
pub use nul::{
    NulCursor, NulCursorMut, NulTerminated, NulTerminatedMut, NulTerminatedSeq,
    NulTerminatedSeqMut, Sentinel, SentinelError,
};
pub use position::{in_range, PairCursor, Position};
pub use sequence::{Sequence, SequenceCursor, SequenceMut};

pub use foreach_macro::for_each;

#[doc(hidden)]
pub mod __private {
    pub use crate::cursor::{Begin, BeginMut};
}
