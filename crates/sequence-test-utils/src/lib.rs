//! Test utilities and instrumented element types for Sequence development.
//!
//! Provides [`DropLedger`], a shared set of counters, and [`Tracked`], an
//! element type that reports its clones and drops to a ledger. Together they
//! let tests assert exactly when a container releases or duplicates the
//! values it owns.
//!
//! [`Fuse`] is an element type whose `Default` and `Clone` panic on demand,
//! for checking that a container is left intact when an element operation
//! unwinds.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::rc::Rc;

thread_local! {
    static DEFAULT_ARMED: Cell<bool> = const { Cell::new(false) };
    static CLONES_LEFT: Cell<Option<usize>> = const { Cell::new(None) };
}

#[derive(Debug, Default)]
struct Counts {
    live: Cell<usize>,
    clones: Cell<usize>,
    drops: Cell<usize>,
}

impl Counts {
    fn bump(cell: &Cell<usize>) {
        cell.set(cell.get() + 1);
    }
}

/// Shared counters for [`Tracked`] values.
///
/// Cloning the ledger shares the counters. Values created with
/// [`track`](DropLedger::track) and their clones are counted; default
/// (untracked) values are not.
#[derive(Clone, Debug, Default)]
pub struct DropLedger {
    counts: Rc<Counts>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracked value registered in this ledger.
    pub fn track(&self, value: u32) -> Tracked {
        Counts::bump(&self.counts.live);
        Tracked {
            value,
            ledger: Some(Rc::clone(&self.counts)),
        }
    }

    /// Tracked values currently alive.
    pub fn live(&self) -> usize {
        self.counts.live.get()
    }

    /// Total clones made of tracked values.
    pub fn clones(&self) -> usize {
        self.counts.clones.get()
    }

    /// Total tracked values dropped.
    pub fn drops(&self) -> usize {
        self.counts.drops.get()
    }
}

/// Element type that reports clones and drops to a [`DropLedger`].
///
/// `Tracked::default()` is an untracked placeholder with value 0, which is
/// what a container puts in its spare slots.
#[derive(Debug, Default)]
pub struct Tracked {
    value: u32,
    ledger: Option<Rc<Counts>>,
}

impl Tracked {
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Whether this value is counted by a ledger.
    pub fn is_tracked(&self) -> bool {
        self.ledger.is_some()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(counts) = &self.ledger {
            Counts::bump(&counts.live);
            Counts::bump(&counts.clones);
        }
        Self {
            value: self.value,
            ledger: self.ledger.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(counts) = &self.ledger {
            counts.live.set(counts.live.get() - 1);
            Counts::bump(&counts.drops);
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Element type whose `Default` and `Clone` can be armed to panic.
///
/// Arming is per thread, so parallel tests do not interfere. Every arming
/// call returns a [`FuseGuard`] that disarms both triggers when dropped,
/// including during unwinding.
#[derive(Debug, PartialEq, Eq)]
pub struct Fuse(pub u32);

impl Fuse {
    /// Make the next `Fuse::default()` on this thread panic.
    pub fn arm_default() -> FuseGuard {
        DEFAULT_ARMED.with(|armed| armed.set(true));
        FuseGuard(())
    }

    /// Allow `successful` more clones on this thread, then panic.
    pub fn arm_clone_after(successful: usize) -> FuseGuard {
        CLONES_LEFT.with(|left| left.set(Some(successful)));
        FuseGuard(())
    }
}

impl Default for Fuse {
    fn default() -> Self {
        if DEFAULT_ARMED.with(|armed| armed.replace(false)) {
            panic!("Fuse::default tripped");
        }
        Fuse(0)
    }
}

impl Clone for Fuse {
    fn clone(&self) -> Self {
        CLONES_LEFT.with(|left| match left.get() {
            Some(0) => {
                left.set(None);
                panic!("Fuse::clone tripped");
            }
            Some(n) => left.set(Some(n - 1)),
            None => {}
        });
        Fuse(self.0)
    }
}

/// Disarms every [`Fuse`] trigger on this thread when dropped.
#[must_use]
pub struct FuseGuard(());

impl Drop for FuseGuard {
    fn drop(&mut self) {
        DEFAULT_ARMED.with(|armed| armed.set(false));
        CLONES_LEFT.with(|left| left.set(None));
    }
}
