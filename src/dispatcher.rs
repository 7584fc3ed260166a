// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The dispatcher (component F): drives the categorizer and resolver across argv and dispatches
//! each match to its option's `add_occurrence`.
//!
//! Two simplifications relative to the fullest reading of the design notes, recorded here rather
//! than in each call site: (1) a `PositionalEatsArgs` positional only absorbs tokens that fail to
//! resolve as a named option, rather than absorbing every token including ones that would
//! otherwise match a registered option; (2) the last character of a `Grouping` run never itself
//! takes a value (`-lah` cannot mean `-l -a -h=value`), grouped options are expected to be plain
//! switches, consistent with every corpus example of `Grouping` being paired with a bool flag.

use crate::categorizer::{classify, Token};
use crate::config::ParserConfig;
use crate::error::{CliError, CliResult};
use crate::flags::{Formatting, Misc, ValueExpectation};
use crate::option::OptionHandler;
use crate::registry::Registry;
use crate::resolver::{resolve_group, resolve_name, NameMatch};
use crate::subcommand::Subcommand;

const HELP_NAMES: &[&str] = &["help", "h"];
const HELP_HIDDEN_NAME: &str = "help-hidden";
const HELP_LIST_NAME: &str = "help-list";
const HELP_LIST_HIDDEN_NAME: &str = "help-list-hidden";
const VERSION_NAME: &str = "version";
const PRINT_OPTIONS_NAME: &str = "print-options";
const PRINT_ALL_OPTIONS_NAME: &str = "print-all-options";

/// Drive a full parse of `args` (argv with `argv[0]` already stripped) against the active
/// subcommand selected by `args[0]`, if any. Returns the subcommand the parse ran under.
pub fn dispatch(args: &[String], cfg: &ParserConfig) -> CliResult<&'static Subcommand> {
    crate::resetter::reset_all_option_occurrences();

    let (active, tail) = select_subcommand(args);
    crate::registry::set_active(active);
    log::debug!("active subcommand: '{}'", active.name);

    let mut positionals = Registry::positionals(active).into_iter();
    let mut current_positional: Option<&'static dyn OptionHandler> = positionals.next();
    let consume_after = Registry::consume_after(active);
    let mut consume_after_active = false;

    let mut i = 0usize;
    let mut raw_mode = false;

    while i < tail.len() {
        let raw = tail[i].as_str();
        let pos = i;

        if !raw_mode && raw == "--" {
            raw_mode = true;
            i += 1;
            continue;
        }

        if consume_after_active {
            let opt = consume_after.expect("consume_after_active implies consume_after is Some");
            opt.add_occurrence(pos, opt.meta().arg_name, Some(raw), false)?;
            i += 1;
            continue;
        }

        let token = if raw_mode { Token::Bareword(raw) } else { classify(raw, cfg.long_options_use_double_dash) };

        i = match token {
            Token::LongOpt(name, inline) | Token::ShortOpt(name, inline) => {
                if let Some(result) = try_builtin(active, name, cfg) {
                    result?;
                    i + 1
                } else {
                    match resolve_name(active, name) {
                        NameMatch::Exact(opt) => dispatch_named(opt, name, inline, pos, tail, i)?,
                        NameMatch::Prefix(opt, suffix) => {
                            dispatch_prefix(opt, inline, &suffix, pos)?;
                            i + 1
                        }
                        NameMatch::Unknown => {
                            let grouped = matches!(token, Token::ShortOpt(..))
                                .then(|| resolve_group(active, name))
                                .flatten();
                            match grouped {
                                Some(chain) => {
                                    dispatch_grouped(&chain, pos)?;
                                    i + 1
                                }
                                None => route_unmatched(
                                    active,
                                    raw,
                                    pos,
                                    &mut current_positional,
                                    &mut positionals,
                                    &mut consume_after_active,
                                    consume_after,
                                )?,
                            }
                        }
                    }
                }
            }
            Token::GroupedShorts(chars) => match resolve_group(active, chars) {
                Some(chain) => {
                    dispatch_grouped(&chain, pos)?;
                    i + 1
                }
                None => route_unmatched(
                    active,
                    raw,
                    pos,
                    &mut current_positional,
                    &mut positionals,
                    &mut consume_after_active,
                    consume_after,
                )?,
            },
            Token::Bareword(_) => route_unmatched(
                active,
                raw,
                pos,
                &mut current_positional,
                &mut positionals,
                &mut consume_after_active,
                consume_after,
            )?,
        };

        if current_positional.is_none() && consume_after.is_some() && !consume_after_active {
            log::debug!("entering consume-after mode");
            consume_after_active = true;
        }
    }

    Ok(active)
}

fn select_subcommand(args: &[String]) -> (&'static Subcommand, &[String]) {
    if let Some(first) = args.first() {
        if let Some(sub) = Registry::subcommand_named(first) {
            return (sub, &args[1..]);
        }
    }
    (&crate::subcommand::TOP_LEVEL, args)
}

fn dispatch_named(
    opt: &'static dyn OptionHandler,
    matched_name: &str,
    inline: Option<&str>,
    pos: usize,
    tail: &[String],
    i: usize,
) -> CliResult<usize> {
    if opt.meta().formatting == Formatting::AlwaysPrefix {
        if let Some(v) = inline {
            return Err(CliError::UnexpectedValue(matched_name.to_string(), v.to_string()));
        }
    }

    let mut next = i + 1;
    let expectation = match opt.meta().value_expectation {
        ValueExpectation::Unspecified => opt.parser_default_expectation(),
        other => other,
    };

    let value = match (expectation, inline) {
        (ValueExpectation::Disallowed, Some(v)) => {
            return Err(CliError::UnexpectedValue(matched_name.to_string(), v.to_string()));
        }
        (ValueExpectation::Disallowed, None) => None,
        (_, Some(v)) => Some(v.to_string()),
        (ValueExpectation::Required, None) => {
            let v = tail.get(next).ok_or_else(|| CliError::MissingValue(matched_name.to_string()))?;
            next += 1;
            Some(v.clone())
        }
        (ValueExpectation::Optional, None) => match tail.get(next) {
            Some(candidate) if !candidate.starts_with('-') => {
                next += 1;
                Some(candidate.clone())
            }
            _ => None,
        },
        (ValueExpectation::Unspecified, None) => None,
    };

    opt.add_occurrence(pos, matched_name, value.as_deref(), false)?;

    for _ in 0..opt.meta().additional_values {
        let extra = tail.get(next).ok_or_else(|| CliError::MissingValue(matched_name.to_string()))?;
        opt.add_occurrence(pos, matched_name, Some(extra), true)?;
        next += 1;
    }

    Ok(next)
}

fn dispatch_prefix(
    opt: &'static dyn OptionHandler,
    inline: Option<&str>,
    suffix: &str,
    pos: usize,
) -> CliResult<()> {
    if opt.meta().formatting == Formatting::AlwaysPrefix && inline.is_some() {
        return Err(CliError::UnexpectedValue(opt.meta().arg_name.to_string(), inline.unwrap().to_string()));
    }
    let value = if !suffix.is_empty() { Some(suffix) } else { inline };
    opt.add_occurrence(pos, opt.meta().arg_name, value, false)
}

fn dispatch_grouped(chain: &[&'static dyn OptionHandler], pos: usize) -> CliResult<()> {
    for opt in chain {
        opt.add_occurrence(pos, opt.meta().arg_name, None, false)?;
    }
    Ok(())
}

fn route_unmatched(
    active: &'static Subcommand,
    raw: &str,
    pos: usize,
    current_positional: &mut Option<&'static dyn OptionHandler>,
    positionals: &mut std::vec::IntoIter<&'static dyn OptionHandler>,
    consume_after_active: &mut bool,
    consume_after: Option<&'static dyn OptionHandler>,
) -> CliResult<usize> {
    if let Some(opt) = *current_positional {
        opt.add_occurrence(pos, opt.meta().arg_name, Some(raw), false)?;
        if !opt.meta().misc.contains(&Misc::PositionalEatsArgs) {
            *current_positional = positionals.next();
        }
        return Ok(pos + 1);
    }

    if let Some(opt) = consume_after {
        *consume_after_active = true;
        opt.add_occurrence(pos, opt.meta().arg_name, Some(raw), false)?;
        return Ok(pos + 1);
    }

    if let Some(opt) = Registry::sink(active) {
        opt.add_occurrence(pos, opt.meta().arg_name, Some(raw), false)?;
        return Ok(pos + 1);
    }

    #[cfg(feature = "suggestions")]
    {
        let bare = raw.trim_start_matches('-');
        let candidates = Registry::all_active(active).into_iter().map(|o| o.meta().arg_name).filter(|n| !n.is_empty());
        if let Some(suggestion) = crate::help::suggest_name(bare, candidates) {
            log::debug!("unrecognized option '{}'; closest registered name is '{}'", raw, suggestion);
        }
    }

    Err(CliError::UnknownOption(raw.to_string()))
}

fn try_builtin(sub: &'static Subcommand, name: &str, cfg: &ParserConfig) -> Option<CliResult<()>> {
    let (include_hidden, list_only) = match name {
        n if HELP_NAMES.contains(&n) => (false, false),
        HELP_HIDDEN_NAME => (true, false),
        HELP_LIST_NAME => (false, true),
        HELP_LIST_HIDDEN_NAME => (true, true),
        VERSION_NAME => {
            crate::help::print_version();
            crate::help::mark_exit_requested();
            return Some(Ok(()));
        }
        PRINT_OPTIONS_NAME => {
            crate::help::print_options(sub, false);
            crate::help::mark_exit_requested();
            return Some(Ok(()));
        }
        PRINT_ALL_OPTIONS_NAME => {
            crate::help::print_options(sub, true);
            crate::help::mark_exit_requested();
            return Some(Ok(()));
        }
        _ => return None,
    };

    crate::help::print_help(sub, cfg, include_hidden, list_only);
    crate::help::mark_exit_requested();
    Some(Ok(()))
}
