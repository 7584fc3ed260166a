// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! A declarative, LLVM-`cl::`-style command line option processing library.
//!
//! Applications declare option variables at program scope via the [`opt!`], [`opt_list!`],
//! [`positional!`], [`sink!`] and [`consume_after!`] macros; each declaration auto-registers with a
//! process-global registry the first time it is touched. [`parse_command_line_options`] is the
//! single entry point: it consumes the process's argument vector, matches tokens against the
//! registry (including prefix-matched, grouped, positional, sink, and consume-after options),
//! enforces value-expectation and occurrence-count rules, and dispatches values into their typed
//! storage.
//!
//! # Documentation
//!
//! Most of this crate's documentation lives in its submodules: [`option`] for the option record and
//! its flags, [`registry`] for the global registration surface, [`dispatcher`] for the parse
//! algorithm itself, and [`parsers`]/[`storage`] for the value-parsing and storage adapter
//! collaborators.

#![deny(bare_trait_objects)]

#[cfg(feature = "suggestions")]
extern crate strsim;

pub mod category;
pub mod categorizer;
pub mod config;
pub mod declare;
pub mod dispatcher;
pub mod envfile;
pub mod error;
pub mod flags;
pub mod help;
pub mod option;
pub mod parsers;
pub mod registry;
pub mod resetter;
pub mod resolver;
pub mod storage;
pub mod subcommand;
pub mod validator;

pub use error::{CliError, CliResult};

use config::ParserConfig;

/// Parse the process's own command-line arguments (`std::env::args`) against every currently
/// registered option, positional, sink and consume-after declaration.
///
/// Returns `Ok(())` on success. On failure, the diagnostic is printed to stderr in the
/// `<program>: <name>: <message>` form described by the error taxonomy, and the process exits with
/// status 1, the "terminating mode" contract. Built-in `-help`/`-version`/`-print-options` options
/// exit 0 immediately after printing.
///
/// Use [`try_parse_command_line_options`] instead for a non-terminating variant that returns the
/// error to the caller.
pub fn parse_command_line_options(cfg: &ParserConfig) {
    let argv: Vec<String> = std::env::args().collect();
    let argv0 = argv.first().cloned().unwrap_or_default();
    let program = cfg.resolve_program_name(&argv0);

    match try_parse_command_line_options(&argv[1..], cfg) {
        Ok(()) => {
            if help::take_exit_requested() {
                std::process::exit(0);
            }
        }
        Err(e) => {
            log::error!("{}", format_diagnostic(&program, &e));
            eprintln!("{}", format_diagnostic(&program, &e));
            eprintln!("Try '-help' for more information.");
            std::process::exit(1);
        }
    }
}

/// As [`parse_command_line_options`], but returns the error instead of terminating the process, and
/// takes an explicit `args` slice (`argv` without `argv[0]`) rather than reading the environment,
/// the form most test harnesses and embedders that want their own error-sink behavior will call
/// directly.
pub fn try_parse_command_line_options(args: &[String], cfg: &ParserConfig) -> CliResult<()> {
    let expanded = envfile::expand_env_and_response_files(args, cfg.env_var)?;
    let active = dispatcher::dispatch(&expanded, cfg)?;
    if !help::take_exit_requested() {
        validator::validate(active)?;
    }
    Ok(())
}

fn format_diagnostic(program: &str, err: &CliError) -> String {
    match err.scoped_name() {
        Some(name) => format!("{}: {}: {}", program, name, strip_scope_prefix(err)).trim_end().to_string(),
        None => format!("{}: {}", program, err),
    }
}

fn strip_scope_prefix(err: &CliError) -> String {
    // `CliError`'s `Display` impl already renders `<name>: <message>`; re-render just the message
    // portion here so `format_diagnostic` doesn't print the name twice.
    let full = err.to_string();
    match full.split_once(": ") {
        Some((_, rest)) => rest.to_string(),
        None => full,
    }
}
