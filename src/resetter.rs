// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The resetter (component H).

use crate::registry::Registry;

/// Restore every registered option to its declared default and clear occurrence bookkeeping,
/// without touching registration itself. Called automatically at the start of every
/// [`crate::parse_command_line_options`] invocation, and available directly for callers that want
/// to re-parse a fresh argv against the same declarations (most commonly, tests).
pub fn reset_all_option_occurrences() {
    Registry::reset_all();
}

/// As [`reset_all_option_occurrences`], documented here under the name the original `cl::`
/// interface uses. Since this crate's registrations live for the life of the process (there is no
/// registration list to tear down independently of the options themselves, as every option is a
/// `'static` value discovered through [`inventory`]), this is presently identical to
/// [`reset_all_option_occurrences`]; it is kept as a distinct, separately-documented entry point so
/// that test harnesses can call it between independent logical "runs" without committing to that
/// equivalence holding forever.
pub fn reset_command_line_parser() {
    Registry::reset_all();
}
