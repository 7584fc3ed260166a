// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The validator (component G): post-parse cardinality and positional-arity checks.

use crate::error::{CliError, CliResult};
use crate::flags::{Formatting, OccurrencesFlag};
use crate::registry::Registry;
use crate::subcommand::Subcommand;

/// Check every option, positional and consume-after slot active in `sub` against its declared
/// cardinality. Runs once the token stream is exhausted, regardless of whether dispatch itself
/// reported an error (so that, in error-sink mode, a caller sees the fullest possible diagnostic
/// picture).
pub fn validate(sub: &Subcommand) -> CliResult<()> {
    let has_required_positional = Registry::positionals(sub)
        .iter()
        .any(|p| p.meta().occurrences_flag.requires_at_least_one());

    for opt in Registry::all_active(sub) {
        let meta = opt.meta();

        if meta.occurrences_flag == OccurrencesFlag::ConsumeAfter {
            if !has_required_positional {
                return Err(CliError::Configuration(format!(
                    "consume-after option has no preceding required positional in subcommand '{}'",
                    sub.name
                )));
            }
            continue;
        }

        if meta.occurrences_flag.requires_at_least_one() && opt.occurrence_count() == 0 {
            let label = if meta.formatting == Formatting::Positional {
                meta.value_placeholder
            } else {
                meta.arg_name
            };
            return Err(CliError::MissingRequired(label.to_string()));
        }
    }

    Ok(())
}
