//! Input intent: what the pointer wants, sampled once per tick.
//!
//! Input callbacks only ever write here. The grid itself is mutated on the
//! tick path alone.

use std::sync::{Arc, Mutex, PoisonError};

/// Latest pointer state plus any pending clear
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerIntent {
    /// Last tracked grid coordinate
    pub target: Option<(i32, i32)>,
    /// Pointer/touch currently held
    pub held: bool,
    /// A press not yet seen by a tick. Keeps a press and release that land
    /// between two ticks from being lost.
    pub tap: bool,
    pub clear_requested: bool,
}

impl PointerIntent {
    pub fn press(&mut self, x: i32, y: i32) {
        self.target = Some((x, y));
        self.held = true;
        self.tap = true;
    }

    pub fn track(&mut self, x: i32, y: i32) {
        self.target = Some((x, y));
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    /// Coordinate to paint at this tick, if the pointer is held or was
    /// pressed since the last tick
    pub fn paint_target(&self) -> Option<(i32, i32)> {
        self.target.filter(|_| self.held || self.tap)
    }

    /// Mark the pending press as consumed by a tick
    pub fn end_tick(&mut self) {
        self.tap = false;
    }
}

/// Lock-protected intent for hosts whose input arrives on another thread.
/// Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedIntent {
    inner: Arc<Mutex<PointerIntent>>,
}

impl SharedIntent {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<T>(&self, f: impl FnOnce(&mut PointerIntent) -> T) -> T {
        // The buffer holds plain scalars, so a poisoned lock is still usable
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    pub fn press(&self, x: i32, y: i32) {
        self.with(|intent| intent.press(x, y));
    }

    pub fn track(&self, x: i32, y: i32) {
        self.with(|intent| intent.track(x, y));
    }

    pub fn release(&self) {
        self.with(PointerIntent::release);
    }

    pub fn request_clear(&self) {
        self.with(|intent| intent.clear_requested = true);
    }

    /// Copy the current intent, consuming any pending clear or tap
    pub fn sample(&self) -> PointerIntent {
        self.with(|intent| {
            let snapshot = *intent;
            intent.clear_requested = false;
            intent.end_tick();
            snapshot
        })
    }
}
