// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The single error currency of the core engine.
//!
//! Every fallible operation in [`crate::categorizer`], [`crate::resolver`], [`crate::dispatcher`]
//! and [`crate::validator`] returns [`CliResult`]; the outer [`crate::parse_command_line_options`]
//! entry point is the only place this gets flattened into the legacy "print and exit" or
//! caller-supplied error-sink behaviour described by the external interface.

use thiserror::Error;

/// Result alias used throughout the core engine.
pub type CliResult<T> = Result<T, CliError>;

/// The full error taxonomy of the core engine (spec §7).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    /// A token had no match in the active subcommand, and no sink option exists to absorb it.
    #[error("{0}: unknown option")]
    UnknownOption(String),

    /// A `Required` value-expectation option was matched with no value available to consume.
    #[error("{0}: missing value")]
    MissingValue(String),

    /// An inline `=value` was supplied for an option whose value-expectation is `Disallowed`.
    #[error("{0}: unexpected value '{1}'")]
    UnexpectedValue(String, String),

    /// Cardinality was exceeded: a second occurrence hit an `Optional`/`Required` option that
    /// does not carry `DefaultOption`.
    #[error("{0}: option specified more than once")]
    DuplicateOccurrence(String),

    /// The type-specific value parser rejected the raw string.
    #[error("{0}: {1}")]
    ParseFailure(String, String),

    /// Post-parse validation: a `Required`/`OneOrMore` option, or a `Required`/`OneOrMore`
    /// positional, was never satisfied.
    #[error("{0}: must be specified")]
    MissingRequired(String),

    /// A programmer mistake caught at registration time (duplicate name, `Grouping` on a
    /// multi-character name, two consume-after options in one subcommand, and so on). Fatal;
    /// surfaced as a panic through the registration macros in debug builds, and returned here for
    /// any caller that registers options dynamically and wants to check first.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CliError {
    /// The option/positional name this error is scoped to, if any (used to format the
    /// `<program>: <name>: <message>` form from §7; `Configuration` errors have no such scope and
    /// format as `<program>: <message>`).
    pub fn scoped_name(&self) -> Option<&str> {
        match self {
            CliError::UnknownOption(n)
            | CliError::MissingValue(n)
            | CliError::UnexpectedValue(n, _)
            | CliError::DuplicateOccurrence(n)
            | CliError::ParseFailure(n, _)
            | CliError::MissingRequired(n) => Some(n),
            CliError::Configuration(_) => None,
        }
    }
}
