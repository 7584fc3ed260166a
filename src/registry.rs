// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The process-global registry (component A).
//!
//! Declarations made through the [`opt!`](crate::opt), [`positional!`](crate::positional),
//! [`sink!`](crate::sink) and [`consume_after!`](crate::consume_after) macros each submit an
//! [`OptionReg`] (and [`subcommand!`](crate::subcommand) declarations each submit a
//! [`SubcommandReg`]) to the [`inventory`] collection at first-touch time. The registry itself
//! holds no option storage of its own; it is simply the query surface over those collections, plus
//! the one piece of mutable process state every other component needs to agree on: which
//! subcommand is currently active.

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::flags::{Formatting, Misc, OccurrencesFlag};
use crate::option::OptionHandler;
use crate::subcommand::Subcommand;

/// A submitted option/positional/sink/consume-after registration.
pub struct OptionReg(pub &'static dyn OptionHandler);

inventory::collect!(OptionReg);

/// A submitted subcommand registration.
pub struct SubcommandReg(pub &'static Subcommand);

inventory::collect!(SubcommandReg);

static ACTIVE_SUBCOMMAND: Lazy<Mutex<&'static str>> = Lazy::new(|| Mutex::new(""));

/// The name of the subcommand active for the parse currently (or most recently) in progress.
/// `""` denotes [`TOP_LEVEL`](crate::subcommand::TOP_LEVEL).
pub(crate) fn current_active_name() -> &'static str {
    *ACTIVE_SUBCOMMAND.lock()
}

/// Records `sub` as the active subcommand. Called once by the categorizer/dispatcher after
/// `argv[1]` has been resolved (or confirmed absent).
pub(crate) fn set_active(sub: &Subcommand) {
    *ACTIVE_SUBCOMMAND.lock() = sub.name;
}

fn all_options() -> impl Iterator<Item = &'static dyn OptionHandler> {
    inventory::iter::<OptionReg>().into_iter().map(|r| r.0)
}

fn is_named(handler: &dyn OptionHandler) -> bool {
    let meta = handler.meta();
    meta.formatting != Formatting::Positional
        && meta.occurrences_flag != OccurrencesFlag::ConsumeAfter
        && !meta.misc.contains(&Misc::Sink)
}

/// The query surface over the global option/subcommand registrations. Stateless; every method
/// simply filters the process-wide [`inventory`] collections by the requested subcommand scope.
pub struct Registry;

impl Registry {
    /// Look up a named option (`Normal`, `Prefix` or `AlwaysPrefix` formatted) active in `sub` by
    /// its exact registered name.
    pub fn lookup(sub: &Subcommand, name: &str) -> Option<&'static dyn OptionHandler> {
        all_options().find(|o| is_named(*o) && o.meta().arg_name == name && o.meta().active_in(sub))
    }

    /// All `Prefix`/`AlwaysPrefix` formatted options active in `sub`, for prefix matching once an
    /// exact lookup has failed.
    pub fn prefix_candidates(sub: &Subcommand) -> Vec<&'static dyn OptionHandler> {
        all_options()
            .filter(|o| {
                matches!(o.meta().formatting, Formatting::Prefix | Formatting::AlwaysPrefix)
                    && o.meta().active_in(sub)
            })
            .collect()
    }

    /// All single-character `Grouping`-eligible options active in `sub`, for grouped-short
    /// expansion (`-lah`).
    pub fn grouping_candidates(sub: &Subcommand) -> Vec<&'static dyn OptionHandler> {
        all_options()
            .filter(|o| o.meta().misc.contains(&Misc::Grouping) && o.meta().active_in(sub))
            .collect()
    }

    /// Positional options active in `sub`, in declared order.
    pub fn positionals(sub: &Subcommand) -> Vec<&'static dyn OptionHandler> {
        all_options()
            .filter(|o| {
                o.meta().formatting == Formatting::Positional
                    && o.meta().occurrences_flag != OccurrencesFlag::ConsumeAfter
                    && o.meta().active_in(sub)
            })
            .collect()
    }

    /// The sink option active in `sub`, if any (registration guarantees at most one).
    pub fn sink(sub: &Subcommand) -> Option<&'static dyn OptionHandler> {
        all_options().find(|o| o.meta().misc.contains(&Misc::Sink) && o.meta().active_in(sub))
    }

    /// The consume-after option active in `sub`, if any (registration guarantees at most one).
    pub fn consume_after(sub: &Subcommand) -> Option<&'static dyn OptionHandler> {
        all_options().find(|o| {
            o.meta().occurrences_flag == OccurrencesFlag::ConsumeAfter && o.meta().active_in(sub)
        })
    }

    /// Every option, of any formatting, active in `sub`. Used by the validator and by help
    /// rendering, which both need the full picture rather than one matching category.
    pub fn all_active(sub: &Subcommand) -> Vec<&'static dyn OptionHandler> {
        all_options().filter(|o| o.meta().active_in(sub)).collect()
    }

    /// Look up a registered subcommand by name.
    pub fn subcommand_named(name: &str) -> Option<&'static Subcommand> {
        inventory::iter::<SubcommandReg>().into_iter().map(|r| r.0).find(|s| s.name == name)
    }

    /// Every registered subcommand, in submission order.
    pub fn all_subcommands() -> Vec<&'static Subcommand> {
        inventory::iter::<SubcommandReg>().into_iter().map(|r| r.0).collect()
    }

    /// Reset every registered option's occurrence bookkeeping and storage, and clear the active
    /// subcommand. Used between independent parses of the same process-global declarations (most
    /// commonly in tests).
    pub fn reset_all() {
        for o in all_options() {
            o.reset();
        }
        *ACTIVE_SUBCOMMAND.lock() = "";
    }
}
