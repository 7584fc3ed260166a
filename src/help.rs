// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! A minimal plain-text `-help`/`-version`/`-print-options` renderer.
//!
//! This is deliberately not the column-aligned table a full implementation would build: options
//! are grouped by category in registration order and printed one per line, `  -name <VALUE>  help`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::config::ParserConfig;
use crate::flags::{Formatting, HiddenFlag};
use crate::registry::Registry;
use crate::subcommand::Subcommand;

fn default_version_message() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"))
}

static VERSION_PRINTER: Lazy<Mutex<fn() -> &'static str>> =
    Lazy::new(|| Mutex::new(default_version_message));

/// Install a custom `-version` message printer, overriding the crate-name/version default.
pub fn install_version_printer(f: fn() -> &'static str) {
    *VERSION_PRINTER.lock() = f;
}

/// Print the `-version` message to stdout.
pub fn print_version() {
    println!("{}", (VERSION_PRINTER.lock())());
}

/// Print `-help`/`-help-hidden` output for `sub`.
///
/// `include_hidden` corresponds to `-help-hidden`; `list_only` corresponds to `-help-list`/
/// `-help-list-hidden`, which print an uncategorized flat listing instead of grouping by category.
pub fn print_help(sub: &Subcommand, cfg: &ParserConfig, include_hidden: bool, list_only: bool) {
    if let Some(overview) = cfg.overview_text {
        println!("{}\n", overview);
    }

    let mut options = Registry::all_active(sub);
    options.retain(|o| match o.meta().hidden_flag {
        HiddenFlag::Visible => true,
        HiddenFlag::Hidden => include_hidden,
        HiddenFlag::ReallyHidden => false,
    });

    if list_only {
        for opt in &options {
            println!("{}", format_option_line(opt.meta()));
        }
        return;
    }

    static GENERAL_ONLY: [&crate::category::Category; 1] = [&crate::category::GENERAL];

    let mut grouped: BTreeMap<&'static str, Vec<&&'static dyn crate::option::OptionHandler>> =
        BTreeMap::new();
    for opt in &options {
        let categories: &[&crate::category::Category] =
            if opt.meta().categories.is_empty() { &GENERAL_ONLY } else { opt.meta().categories };
        for cat in categories {
            grouped.entry(cat.name).or_default().push(opt);
        }
    }

    for (category, opts) in grouped {
        println!("{}:", category);
        for opt in opts {
            println!("{}", format_option_line(opt.meta()));
        }
        println!();
    }
}

fn format_option_line(meta: &crate::option::OptionMeta) -> String {
    if meta.formatting == Formatting::Positional {
        return format!("  {}  {}", meta.value_placeholder, meta.help);
    }
    if meta.value_placeholder.is_empty() {
        format!("  -{}  {}", meta.arg_name, meta.help)
    } else {
        format!("  -{} <{}>  {}", meta.arg_name, meta.value_placeholder, meta.help)
    }
}

/// Print `-print-options`/`-print-all-options` output: each option's current value, formatted with
/// its `Debug` representation would require type information we've already erased, so this prints
/// the option's name plus occurrence count, which is all the type-erased surface exposes.
pub fn print_options(sub: &Subcommand, all: bool) {
    for opt in Registry::all_active(sub) {
        if !all && opt.occurrence_count() == 0 {
            continue;
        }
        println!("  -{} (set {} time(s))", opt.meta().arg_name, opt.occurrence_count());
    }
}

/// Find the closest registered name to an unrecognized one, for inclusion in a diagnostic hint.
/// Only compiled with the `suggestions` feature; uses Jaro-Winkler similarity and requires a
/// reasonably close match (score > 0.7) so that wildly unrelated names are not suggested.
#[cfg(feature = "suggestions")]
pub(crate) fn suggest_name<'a>(name: &str, candidates: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    candidates
        .map(|c| (c, strsim::jaro_winkler(name, c)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

static HELP_EXIT_REQUESTED: AtomicUsize = AtomicUsize::new(0);

/// Records that a built-in help/version option fired during the current dispatch, so the entry
/// point can exit 0 after the parse loop completes, per the "exit 0 after printing" contract.
pub(crate) fn mark_exit_requested() {
    HELP_EXIT_REQUESTED.store(1, Ordering::Release);
}

/// Whether a built-in help/version option fired, and clears the flag.
pub(crate) fn take_exit_requested() -> bool {
    HELP_EXIT_REQUESTED.swap(0, Ordering::AcqRel) == 1
}
