use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::slice;

use foreach::{for_each, Collection, Sequence, SequenceContainer};

// A container that records when it is dropped.
struct Tracked {
    items: Vec<i32>,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(drops: &Rc<Cell<usize>>) -> Self {
        Tracked {
            items: vec![1, 2, 3],
            drops: Rc::clone(drops),
        }
    }

    fn empty(drops: &Rc<Cell<usize>>) -> Self {
        Tracked {
            items: Vec::new(),
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl Collection for Tracked {
    type Category = SequenceContainer;
}

impl Sequence for Tracked {
    type Iter<'a> = slice::Iter<'a, i32>;

    fn elements(&self) -> slice::Iter<'_, i32> {
        self.items.iter()
    }
}

#[test]
fn temporary_lives_until_the_loop_ends() {
    let drops = Rc::new(Cell::new(0));
    let mut total = 0;
    for_each!(let x in Tracked::new(&drops) {
        assert_eq!(drops.get(), 0);
        total += *x;
    });
    assert_eq!(drops.get(), 1);
    assert_eq!(total, 6);
}

#[test]
fn temporary_is_dropped_once_on_break() {
    let drops = Rc::new(Cell::new(0));
    for_each!(let x in Tracked::new(&drops) {
        if *x == 2 {
            break;
        }
    });
    assert_eq!(drops.get(), 1);
}

#[test]
fn temporary_is_dropped_once_on_early_return() {
    fn find(drops: &Rc<Cell<usize>>, wanted: i32) -> bool {
        for_each!(let x in Tracked::new(drops) {
            if *x == wanted {
                return true;
            }
        });
        false
    }
    let drops = Rc::new(Cell::new(0));
    assert!(find(&drops, 2));
    assert_eq!(drops.get(), 1);
    assert!(!find(&drops, 7));
    assert_eq!(drops.get(), 2);
}

#[test]
fn temporary_is_dropped_once_on_panic() {
    let drops = Rc::new(Cell::new(0));
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        for_each!(let x in Tracked::new(&drops) {
            if *x == 2 {
                panic!("stop at two");
            }
        });
    }));
    assert!(result.is_err());
    assert_eq!(drops.get(), 1);
}

#[test]
fn named_collection_is_not_dropped_by_the_loop() {
    let drops = Rc::new(Cell::new(0));
    let tracked = Tracked::new(&drops);
    for_each!(let x in tracked {
        let _ = x;
    });
    assert_eq!(drops.get(), 0);
    drop(tracked);
    assert_eq!(drops.get(), 1);
}

#[test]
fn temporary_is_dropped_before_else_runs() {
    let drops = Rc::new(Cell::new(0));
    let mut drops_seen_by_else = None;
    for_each!(let x in Tracked::empty(&drops) {
        let _ = x;
    } else {
        drops_seen_by_else = Some(drops.get());
    });
    assert_eq!(drops_seen_by_else, Some(1));
}
