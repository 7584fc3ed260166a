// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Flag enums describing the cardinality, value-expectation, visibility and formatting of an
//! option, plus the small set of miscellaneous behavioral switches.

use std::collections::BTreeSet;

/// How many times an option is expected/allowed to occur across a parse.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OccurrencesFlag {
    /// Zero or one occurrence.
    Optional,
    /// Any number of occurrences, including zero.
    ZeroOrMore,
    /// Exactly one occurrence is mandatory.
    Required,
    /// At least one occurrence is mandatory, more are allowed.
    OneOrMore,
    /// Marks this option as the subcommand's consume-after slot (see [`Misc`]/positional rules).
    /// At most one option per subcommand may carry this.
    ConsumeAfter,
}

impl Default for OccurrencesFlag {
    fn default() -> Self { OccurrencesFlag::Optional }
}

impl OccurrencesFlag {
    /// Whether a second occurrence of an option with this flag is, by itself (ignoring
    /// `DefaultOption`/multi-arg continuation), a cardinality violation.
    #[inline]
    pub fn rejects_repeat(&self) -> bool {
        matches!(self, OccurrencesFlag::Optional | OccurrencesFlag::Required)
    }

    /// Whether at least one occurrence is mandatory for [`Validator`](crate::validator) to accept.
    #[inline]
    pub fn requires_at_least_one(&self) -> bool {
        matches!(self, OccurrencesFlag::Required | OccurrencesFlag::OneOrMore)
    }
}

/// Whether an option expects an accompanying value, and if so how strictly.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueExpectation {
    /// Defer to the value parser's advertised default.
    Unspecified,
    /// A value may optionally accompany the option.
    Optional,
    /// A value must accompany the option.
    Required,
    /// No value may accompany the option; an inline `=value` is an error.
    Disallowed,
}

impl Default for ValueExpectation {
    fn default() -> Self { ValueExpectation::Unspecified }
}

/// Visibility of an option in generated help output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HiddenFlag {
    /// Shown in normal `-help` output.
    Visible,
    /// Only shown with `-help-hidden`.
    Hidden,
    /// Never shown in any built-in help listing.
    ReallyHidden,
}

impl Default for HiddenFlag {
    fn default() -> Self { HiddenFlag::Visible }
}

/// How an option's name is matched against an incoming token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Formatting {
    /// Ordinary named option (`-foo`/`--foo`).
    Normal,
    /// Matched by argv ordinal rather than by name; `arg_name` must be empty.
    Positional,
    /// The option's name may form a prefix of the token, with the remainder of the token supplying
    /// the value (`-Lfoo` → option `-L`, value `foo`). The `=value` inline form is also accepted.
    Prefix,
    /// As [`Prefix`](Formatting::Prefix), but the `=value` inline form is rejected for this option
    /// (only the immediately-concatenated suffix form is accepted).
    AlwaysPrefix,
}

impl Default for Formatting {
    fn default() -> Self { Formatting::Normal }
}

/// A single miscellaneous behavioral switch that can be attached to an option.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Misc {
    /// Split the raw value at commas, dispatching the option once per resulting piece.
    CommaSeparated,
    /// A positional option (see [`Formatting::Positional`]) that greedily consumes tokens that look
    /// like options, up until the point the next positional's turn must begin. Implies
    /// `ZeroOrMore` or `OneOrMore` occurrence semantics.
    PositionalEatsArgs,
    /// The option receives any otherwise-unmatched token; at most one sink may exist per
    /// subcommand, and it carries no `arg_name`.
    Sink,
    /// A single-character option that may participate in a grouped-shorts run (`-lah`).
    Grouping,
    /// A second (and subsequent) occurrence of an `Optional` option is not a cardinality error;
    /// each occurrence simply re-dispatches (see the "open question" resolution in the design
    /// notes: arbitrarily many overrides are allowed, last one dispatched wins in storage).
    DefaultOption,
}

/// An ordered, deduplicated set of [`Misc`] switches.
pub type MiscSet = BTreeSet<Misc>;
