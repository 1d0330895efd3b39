//! Integration tests: element ownership across growth, shrink, copy and move.
//!
//! Every test builds sequences of `Tracked` values and checks the
//! `DropLedger` counters, so a leaked, double-dropped or needlessly cloned
//! element shows up as a count mismatch.

use std::panic::{catch_unwind, AssertUnwindSafe};

use sequence::{sequence, Sequence};
use sequence_test_utils::{DropLedger, Fuse, Tracked};

fn tracked_sequence(ledger: &DropLedger, len: u32) -> Sequence<Tracked> {
    let mut s = Sequence::new();
    for i in 0..len {
        s.push_back(ledger.track(i));
    }
    s
}

// ── Growth ──────────────────────────────────────────────────────

#[test]
fn growth_moves_elements_without_cloning() {
    let ledger = DropLedger::new();
    let s = tracked_sequence(&ledger, 100);
    assert_eq!(s.capacity(), 128);
    assert_eq!(ledger.live(), 100);
    assert_eq!(ledger.clones(), 0);
    assert_eq!(ledger.drops(), 0);
}

#[test]
fn dropping_the_sequence_releases_each_element_once() {
    let ledger = DropLedger::new();
    let s = tracked_sequence(&ledger, 10);
    drop(s);
    assert_eq!(ledger.live(), 0);
    assert_eq!(ledger.drops(), 10);
}

// ── Shrink ──────────────────────────────────────────────────────

#[test]
fn resize_down_drops_removed_elements() {
    let ledger = DropLedger::new();
    let mut s = tracked_sequence(&ledger, 5);
    s.resize(2);
    assert_eq!(ledger.live(), 2);
    assert_eq!(s.capacity(), 8);

    // Regrowing within capacity yields untracked defaults, not the old values.
    s.resize(5);
    assert_eq!(ledger.live(), 2);
    assert!(s.as_slice()[2..].iter().all(|t| !t.is_tracked()));
}

#[test]
fn clear_drops_everything_and_keeps_capacity() {
    let ledger = DropLedger::new();
    let mut s = tracked_sequence(&ledger, 6);
    let capacity = s.capacity();
    s.clear();
    assert_eq!(ledger.live(), 0);
    assert_eq!(s.capacity(), capacity);
}

#[test]
fn pop_back_hands_over_the_element() {
    let ledger = DropLedger::new();
    let mut s = tracked_sequence(&ledger, 3);
    let last = s.pop_back();
    assert_eq!(last.value(), 2);
    assert_eq!(ledger.live(), 3);
    drop(last);
    assert_eq!(ledger.live(), 2);
}

// ── Copy ────────────────────────────────────────────────────────

#[test]
fn clone_copies_only_live_elements() {
    let ledger = DropLedger::new();
    let mut a = tracked_sequence(&ledger, 5);
    a.resize(3);
    let b = a.clone();
    assert_eq!(ledger.clones(), 3);
    assert_eq!(ledger.live(), 6);
    assert_eq!(b.capacity(), a.capacity());
}

#[test]
fn clone_from_releases_previous_contents() {
    let ledger = DropLedger::new();
    let source = tracked_sequence(&ledger, 2);
    let mut target = tracked_sequence(&ledger, 4);
    target.clone_from(&source);
    assert_eq!(ledger.live(), 4);
    assert_eq!(target.len(), 2);
    assert_eq!(target.capacity(), source.capacity());
}

// ── Move ────────────────────────────────────────────────────────

#[test]
fn take_transfers_without_cloning() {
    let ledger = DropLedger::new();
    let mut a = tracked_sequence(&ledger, 4);
    let b = a.take();
    assert_eq!(ledger.clones(), 0);
    assert_eq!(ledger.live(), 4);
    assert_eq!(b.len(), 4);
    assert!(a.is_empty());
    assert!(!a.has_allocation());
}

#[test]
fn move_from_releases_target_and_keeps_source_elements() {
    let ledger = DropLedger::new();
    let mut source = tracked_sequence(&ledger, 3);
    let mut target = tracked_sequence(&ledger, 5);
    target.move_from(&mut source);
    assert_eq!(ledger.live(), 3);
    assert_eq!(ledger.clones(), 0);
    assert_eq!(
        target.iter().map(Tracked::value).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert_eq!(source.capacity(), 0);
}

#[test]
fn owned_iteration_drops_unconsumed_elements() {
    let ledger = DropLedger::new();
    let s = tracked_sequence(&ledger, 4);
    let mut iter = s.into_iter();
    let first = iter.next().unwrap();
    drop(iter);
    assert_eq!(ledger.live(), 1);
    assert_eq!(first.value(), 0);
}

// ── Unwinding ───────────────────────────────────────────────────

#[test]
fn growth_panicking_in_default_leaves_sequence_unchanged() {
    let mut s = sequence![Fuse(1), Fuse(2)];
    assert_eq!(s.capacity(), 2);
    let guard = Fuse::arm_default();
    let result = catch_unwind(AssertUnwindSafe(|| s.push_back(Fuse(3))));
    drop(guard);
    assert!(result.is_err());
    assert_eq!(s.len(), 2);
    assert_eq!(s.capacity(), 2);
    assert_eq!(s, [Fuse(1), Fuse(2)]);
    s.push_back(Fuse(3));
    assert_eq!(s, [Fuse(1), Fuse(2), Fuse(3)]);
}

#[test]
fn clone_from_panicking_in_clone_leaves_target_unchanged() {
    let source = sequence![Fuse(1), Fuse(2), Fuse(3)];
    let mut target = Sequence::with_capacity(4);
    target.push_back(Fuse(7));
    let guard = Fuse::arm_clone_after(1);
    let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    drop(guard);
    assert!(result.is_err());
    assert_eq!(target, [Fuse(7)]);
    assert_eq!(target.capacity(), 4);
    assert_eq!(source, [Fuse(1), Fuse(2), Fuse(3)]);
}
