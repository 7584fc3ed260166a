// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Typed storage adapters.
//!
//! The core never inspects storage directly; it only calls [`Storage::accept`] on each occurrence
//! and [`Storage::reset_to_default`] between parses. Three concrete adapters are provided: scalar
//! (last occurrence wins), list (each occurrence appends), and an external-location sink forwarding
//! to a caller-supplied function. `Output` is distinct from the per-occurrence value type `T` so
//! that a list adapter can accept one parsed item at a time while snapshotting the accumulated
//! `Vec<T>`; bit-set-style flag accumulation is just [`ListStorage`] over a flag enum.

use parking_lot::Mutex;

/// The contract a storage adapter must satisfy. The core only ever calls [`accept`](Storage::accept)
/// and [`reset_to_default`](Storage::reset_to_default); [`snapshot`](Storage::snapshot) exists so
/// application code can read a value back out of an option after parsing, without needing to know
/// which concrete adapter backs it.
pub trait Storage<T>: Sync {
    /// The type read back by [`snapshot`](Storage::snapshot); `T` itself for scalar storage,
    /// `Vec<T>` for list storage.
    type Output: Clone;

    /// Record one parsed value. `is_initial` is `true` for the very first occurrence dispatched
    /// since the last reset, which list-like adapters use to decide whether to clear any
    /// declared-default seed value before appending (so that a declared default is visible only
    /// when the option was never given on the command line).
    fn accept(&self, value: T, is_initial: bool);

    /// Restore storage to the declared initial state.
    fn reset_to_default(&self);

    /// Read the current value back out.
    fn snapshot(&self) -> Self::Output;
}

/// Scalar storage: holds a single value, last occurrence wins.
pub struct ScalarStorage<T> {
    default: T,
    current: Mutex<T>,
}

impl<T: Clone> ScalarStorage<T> {
    /// Create new scalar storage seeded with `default`.
    pub fn new(default: T) -> Self {
        Self { current: Mutex::new(default.clone()), default }
    }
}

impl<T: Clone + Sync> Storage<T> for ScalarStorage<T> {
    type Output = T;

    fn accept(&self, value: T, _is_initial: bool) {
        *self.current.lock() = value;
    }

    fn reset_to_default(&self) {
        *self.current.lock() = self.default.clone();
    }

    fn snapshot(&self) -> T {
        self.current.lock().clone()
    }
}

/// List storage: each occurrence appends one item; a declared default seed (if any) is discarded
/// on the first real occurrence.
pub struct ListStorage<T> {
    default: Vec<T>,
    current: Mutex<Vec<T>>,
}

impl<T: Clone> ListStorage<T> {
    /// Create new list storage seeded with `default`.
    pub fn new(default: Vec<T>) -> Self {
        Self { current: Mutex::new(default.clone()), default }
    }
}

impl<T: Clone + Sync> Storage<T> for ListStorage<T> {
    type Output = Vec<T>;

    fn accept(&self, value: T, is_initial: bool) {
        let mut guard = self.current.lock();
        if is_initial && !self.default.is_empty() {
            guard.clear();
        }
        guard.push(value);
    }

    fn reset_to_default(&self) {
        *self.current.lock() = self.default.clone();
    }

    fn snapshot(&self) -> Vec<T> {
        self.current.lock().clone()
    }
}

/// External-location storage: forwards each parsed value to a caller-supplied function, for
/// programs that want the value written straight into an existing variable rather than read back
/// out of the option afterwards.
pub struct ExternalStorage<T> {
    sink: fn(T),
}

impl<T> ExternalStorage<T> {
    /// Create new external-location storage forwarding to `sink`.
    pub fn new(sink: fn(T)) -> Self {
        Self { sink }
    }
}

impl<T: Sync> Storage<T> for ExternalStorage<T> {
    type Output = ();

    fn accept(&self, value: T, _is_initial: bool) {
        (self.sink)(value);
    }

    fn reset_to_default(&self) {
        // No default is known for an external location; resetting is a no-op by design.
    }

    fn snapshot(&self) {}
}
