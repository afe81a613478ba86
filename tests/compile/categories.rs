use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, LinkedList, VecDeque};
use std::ffi::CStr;
use std::rc::Rc;

use foreach::{category_of, for_each, in_range, CategoryKind, NulTerminated, NulTerminatedMut};
use test_case::test_case;

#[test]
fn vec_visits_in_order() {
    let items = vec![1, 2, 3];
    let mut seen = Vec::new();
    for_each!(let x in items {
        seen.push(*x);
    });
    assert_eq!(seen, [1, 2, 3]);
    assert_eq!(items.len(), 3);
}

#[test]
fn collection_is_evaluated_once() {
    let mut calls = 0;
    let mut make = || {
        calls += 1;
        vec![4, 5, 6]
    };
    let mut total = 0;
    for_each!(let x: i32 in make() {
        total += x;
    });
    assert_eq!(calls, 1);
    assert_eq!(total, 15);
}

#[test]
fn std_sequences_match_their_iterators() {
    let deque = VecDeque::from([3, 1, 2]);
    let mut seen = Vec::new();
    for_each!(let x: i32 in deque {
        seen.push(x);
    });
    assert_eq!(seen, deque.iter().copied().collect::<Vec<_>>());

    let list = LinkedList::from([9, 8]);
    let mut seen = Vec::new();
    for_each!(let x: i32 in list {
        seen.push(x);
    });
    assert_eq!(seen, [9, 8]);

    let set = BTreeSet::from([5, 1, 3]);
    let mut seen = Vec::new();
    for_each!(let x: i32 in set {
        seen.push(x);
    });
    assert_eq!(seen, [1, 3, 5]);

    let heap = BinaryHeap::from([2, 7, 4]);
    let mut total = 0;
    for_each!(let x: i32 in heap {
        total += x;
    });
    assert_eq!(total, 13);
}

#[test]
fn maps_yield_entries() {
    let ages = BTreeMap::from([("ada", 36), ("alan", 41)]);
    let mut names = Vec::new();
    let mut total = 0;
    for_each!(let (name, age) in ages {
        names.push(*name);
        total += *age;
    });
    assert_eq!(names, ["ada", "alan"]);
    assert_eq!(total, 77);

    let counts = HashMap::from([('a', 2), ('b', 3)]);
    let mut total = 0;
    for_each!(let (_, count): (&char, &u32) in counts {
        total += *count;
    });
    assert_eq!(total, 5);
}

#[test]
fn option_is_a_sequence_of_at_most_one() {
    let some = Some(5);
    let mut seen = Vec::new();
    for_each!(let x: i32 in some {
        seen.push(x);
    });
    assert_eq!(seen, [5]);

    let none: Option<i32> = None;
    let mut ran_else = false;
    for_each!(let x in none {
        let _ = x;
    } else {
        ran_else = true;
    });
    assert!(ran_else);
}

#[test]
fn strings_yield_chars() {
    let mut seen = String::new();
    for_each!(let c: char in "héllo" {
        seen.push(c.to_ascii_uppercase());
    });
    assert_eq!(seen, "HéLLO");

    let word = String::from("abc");
    let mut count = 0;
    for_each!(let c in word {
        assert!(c.is_ascii_lowercase());
        count += 1;
    });
    assert_eq!(count, 3);
}

#[test]
fn array_of_five_in_order() {
    let values = [10, 20, 30, 40, 50];
    let mut seen = Vec::new();
    for_each!(let x: &i32 in values {
        seen.push(*x);
    });
    assert_eq!(seen, values);
}

#[test]
fn array_temporary() {
    let mut total = 0;
    for_each!(let x: u32 in [1u8, 2, 3] {
        total += x;
    });
    assert_eq!(total, 6);
}

#[test]
fn nul_terminated_stops_at_sentinel() {
    let text = CStr::from_bytes_with_nul(b"\x01\x02\x03\0").unwrap();
    let mut seen = Vec::new();
    for_each!(let b: u8 in text {
        seen.push(b);
    });
    assert_eq!(seen, [1, 2, 3]);

    let words = [7, 8, 0, 9, 0];
    let view = NulTerminated::new(&words).unwrap();
    let mut seen = Vec::new();
    for_each!(let x: i32 in view {
        seen.push(x);
    });
    assert_eq!(seen, [7, 8]);
}

#[test]
fn nul_terminated_mut_writes_through() {
    let mut buf = [1u8, 2, 3, 0];
    let mut view = NulTerminatedMut::new(&mut buf).unwrap();
    for_each!(let b: &mut u8 in view {
        *b += 1;
    });
    assert_eq!(buf, [2, 3, 4, 0]);

    // A view is a handle, so a temporary one may be mutated through.
    for_each!(let b: &mut u8 in NulTerminatedMut::new(&mut buf).unwrap() {
        *b *= 10;
    });
    assert_eq!(buf, [20, 30, 40, 0]);
}

#[test]
fn cursor_pairs_count_up() {
    let mut seen = Vec::new();
    for_each!(let i in in_range(0, 5) {
        seen.push(i);
    });
    assert_eq!(seen, [0, 1, 2, 3, 4]);

    let mut seen = Vec::new();
    for_each!(let i in 2..5 {
        seen.push(i);
    });
    assert_eq!(seen, [2, 3, 4]);

    let pair = (1u8, 4u8);
    let mut total = 0;
    for_each!(let i: u32 in pair {
        total += i;
    });
    assert_eq!(total, 6);
}

#[test]
fn reversed_range_matches_native_loop() {
    let (start, end) = (5u8, 3u8);
    let mut seen = Vec::new();
    for_each!(let i: u8 in start..end {
        seen.push(i);
    });
    assert_eq!(seen, (start..end).collect::<Vec<_>>());
    assert!(seen.is_empty());

    let mut ran_else = false;
    for_each!(let i in u8::MAX..u8::MIN {
        seen.push(i);
    } else {
        ran_else = true;
    });
    assert!(seen.is_empty());
    assert!(ran_else);

    let (start, end) = (-2i32, -5i32);
    let mut seen = Vec::new();
    for_each!(let i in start..end {
        seen.push(i);
    });
    assert_eq!(seen, (start..end).collect::<Vec<_>>());
}

#[test]
fn empty_collections_run_else() {
    let mut ran = Vec::new();

    let empty: Vec<i32> = Vec::new();
    for_each!(let x in empty { let _ = x; } else { ran.push("vec"); });

    let empty: [i32; 0] = [];
    for_each!(let x in empty { let _ = x; } else { ran.push("array"); });

    let empty = CStr::from_bytes_with_nul(b"\0").unwrap();
    for_each!(let x in empty { let _ = x; } else { ran.push("nul"); });

    for_each!(let x in in_range(4, 4) { let _ = x; } else { ran.push("pair"); });

    assert_eq!(ran, ["vec", "array", "nul", "pair"]);
}

#[test]
fn else_is_skipped_when_not_empty() {
    let items = [1];
    let mut ran_else = false;
    for_each!(let x in items { let _ = x; } else { ran_else = true; });
    assert!(!ran_else);
}

#[test]
fn wrappers_are_traversed_through_deref() {
    let boxed = Box::new(vec![1, 2]);
    let shared = Rc::new([3, 4]);
    let items = vec![5, 6];
    let borrowed = &items;
    let mut seen = Vec::new();
    for_each!(let x: i32 in boxed {
        seen.push(x);
    });
    for_each!(let x: i32 in shared {
        seen.push(x);
    });
    for_each!(let x: i32 in borrowed {
        seen.push(x);
    });
    for_each!(let x: i32 in &items[1..] {
        seen.push(x);
    });
    assert_eq!(seen, [1, 2, 3, 4, 5, 6, 6]);
}

#[test]
fn category_of_reports_the_chosen_protocol() {
    assert_eq!(category_of(&vec![1]), CategoryKind::SequenceContainer);
    assert_eq!(category_of("text"), CategoryKind::SequenceContainer);
    assert_eq!(category_of(&[1, 2]), CategoryKind::FixedArray);
    let text = CStr::from_bytes_with_nul(b"a\0").unwrap();
    assert_eq!(category_of(text), CategoryKind::NullTerminated);
    assert_eq!(category_of(&in_range(0, 1)), CategoryKind::CursorPair);
    assert_eq!(category_of(&(0u64..1)), CategoryKind::CursorPair);
}

#[test_case(CategoryKind::SequenceContainer, "sequence container")]
#[test_case(CategoryKind::FixedArray, "fixed array")]
#[test_case(CategoryKind::NullTerminated, "null-terminated sequence")]
#[test_case(CategoryKind::CursorPair, "cursor pair")]
fn category_kind_display(kind: CategoryKind, name: &str) {
    assert_eq!(kind.to_string(), name);
}
