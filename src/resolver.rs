// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The resolver (component E): classifies a single named or grouped-shorts token against the
//! registry of the active subcommand.
//!
//! Positional, sink and consume-after matching are driven by the dispatcher directly rather than
//! through this module, since they require progress state (how many positionals have already been
//! satisfied, whether consume-after mode has been entered) that is naturally the drive loop's own
//! bookkeeping rather than a stateless per-token classification; this module covers exactly the
//! stateless half of component E (exact, prefix and grouped-shorts matching).

use crate::option::OptionHandler;
use crate::registry::Registry;
use crate::subcommand::Subcommand;

/// The outcome of resolving a `LongOpt`/`ShortOpt`-classified token by name.
pub enum NameMatch {
    /// An exact `arg_name` hit.
    Exact(&'static dyn OptionHandler),
    /// A `Prefix`/`AlwaysPrefix` option whose name is the longest registered prefix of the token;
    /// `tail` is the remaining suffix (the implied value).
    Prefix(&'static dyn OptionHandler, String),
    /// No exact or prefix match exists.
    Unknown,
}

/// Resolve a `LongOpt`/`ShortOpt` token's name against `sub`'s registry.
///
/// Exact matches always win over prefix matches. Among prefix candidates, the longest registered
/// name wins; ties fall back to registration order (the order [`Registry::prefix_candidates`]
/// returns them in).
pub fn resolve_name(sub: &Subcommand, name: &str) -> NameMatch {
    if let Some(opt) = Registry::lookup(sub, name) {
        return NameMatch::Exact(opt);
    }

    let mut best: Option<(&'static dyn OptionHandler, &str)> = None;
    for candidate in Registry::prefix_candidates(sub) {
        let cand_name = candidate.meta().arg_name;
        if let Some(tail) = name.strip_prefix(cand_name) {
            let better = match best {
                Some((_, best_name)) => cand_name.len() > best_name.len(),
                None => true,
            };
            if better {
                best = Some((candidate, cand_name));
                let _ = tail;
            }
        }
    }

    match best {
        Some((opt, cand_name)) => {
            let tail = name[cand_name.len()..].to_string();
            NameMatch::Prefix(opt, tail)
        }
        None => NameMatch::Unknown,
    }
}

/// Attempt to resolve a [`GroupedShorts`](crate::categorizer::Token::GroupedShorts) run as a
/// sequence of distinct single-character `Grouping` options. Returns `None` if any character fails
/// to map to a distinct registered option, signalling the caller should fall back to treating the
/// run as a single short-option token instead.
pub fn resolve_group(sub: &Subcommand, chars: &str) -> Option<Vec<&'static dyn OptionHandler>> {
    let candidates = Registry::grouping_candidates(sub);
    let mut out = Vec::with_capacity(chars.chars().count());
    for c in chars.chars() {
        let name = c.to_string();
        let opt = candidates.iter().find(|o| o.meta().arg_name == name)?;
        out.push(*opt);
    }
    Some(out)
}
