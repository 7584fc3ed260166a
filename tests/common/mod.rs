// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Shared test harness.
//!
//! Options declared via the registration macros are process-global, and `#[test]` functions within
//! one integration test binary run concurrently by default; [`lock`] serializes access so that tests
//! sharing a set of declared options do not observe each other's occurrence counts.

use std::sync::{Mutex, MutexGuard};

static GUARD: Mutex<()> = Mutex::new(());

/// Acquire the process-wide test lock and reset every registered option to its declared default.
/// Call this first thing in every `#[test]` function that touches the global registry.
pub fn reset() -> MutexGuard<'static, ()> {
    let guard = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    clopt::resetter::reset_command_line_parser();
    guard
}

/// Build an owned `Vec<String>` argv (without `argv[0]`) from string literals.
#[macro_export]
macro_rules! argv {
    ( $($e:expr),* $(,)? ) => {
        vec![ $($e.to_string()),* ]
    };
}
