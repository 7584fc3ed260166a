// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The option record (component B).
//!
//! [`Opt<T>`] bundles the shared, type-erased descriptive metadata every option carries
//! ([`OptionMeta`]) with a type-specific [value parser](crate::parsers::ValueParser) and
//! [storage adapter](crate::storage::Storage). The type-erased [`OptionHandler`] trait is what the
//! registry, categorizer, resolver, dispatcher and validator actually operate on; none of those
//! components is generic over `T`.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::category::Category;
use crate::error::{CliError, CliResult};
use crate::flags::{Formatting, HiddenFlag, Misc, MiscSet, OccurrencesFlag, ValueExpectation};
use crate::parsers::ValueParser;
use crate::storage::Storage;
use crate::subcommand::Subcommand;

/// Plain descriptive data shared by every option, independent of its value type.
pub struct OptionMeta {
    /// Matched name, without leading dashes (e.g. `"verbose"` for `-verbose`/`--verbose`). Empty
    /// for positionals and the sink.
    pub arg_name: &'static str,
    /// One-line help text.
    pub help: &'static str,
    /// Placeholder shown for the value portion in usage strings (e.g. `"FILE"`).
    pub value_placeholder: &'static str,
    /// Expected occurrence cardinality.
    pub occurrences_flag: OccurrencesFlag,
    /// Expected value-taking behaviour.
    pub value_expectation: ValueExpectation,
    /// Help visibility.
    pub hidden_flag: HiddenFlag,
    /// Name-matching style.
    pub formatting: Formatting,
    /// Miscellaneous behavioral switches.
    pub misc: MiscSet,
    /// Number of additional values this option's `handle` callback consumes beyond the first
    /// (multi-arg continuation count).
    pub additional_values: usize,
    /// Help-grouping categories; empty is treated as `[&GENERAL]` by the help renderer.
    pub categories: &'static [&'static Category],
    /// Subcommands this option is registered under.
    pub subs: &'static [&'static Subcommand],
}

impl OptionMeta {
    /// Whether `sub` is one of this option's registered scopes (resolving the [`ALL`](crate::subcommand::ALL)
    /// sentinel).
    pub fn active_in(&self, sub: &Subcommand) -> bool {
        self.subs.iter().any(|s| s.name == sub.name || s.name == crate::subcommand::ALL.name)
    }
}

/// The type-erased surface every registered option, positional, sink and consume-after slot
/// presents to the engine.
pub trait OptionHandler: Sync {
    /// Shared descriptive metadata.
    fn meta(&self) -> &OptionMeta;

    /// Number of occurrences dispatched since the last reset.
    fn occurrence_count(&self) -> usize;

    /// Argv ordinal of the most recent occurrence, if any.
    fn last_position(&self) -> Option<usize>;

    /// Dispatch one occurrence: validate cardinality, parse `raw` (if a value is expected and
    /// present), and forward to storage.
    ///
    /// `matched_name` is the literal token text matched (used for prefix-formatted options where
    /// it may differ from `meta().arg_name`); `raw` is the associated value text, if any was
    /// supplied; `multi_arg` indicates this call is consuming one of `additional_values` extra
    /// tokens rather than the option's own primary value.
    fn add_occurrence(
        &self,
        pos: usize,
        matched_name: &str,
        raw: Option<&str>,
        multi_arg: bool,
    ) -> CliResult<()>;

    /// Seed storage with its declared default and clear occurrence bookkeeping. Used both prior to
    /// a fresh parse and by [`crate::resetter`].
    fn reset(&self);

    /// The parser's advertised default value-expectation, used when [`OptionMeta::value_expectation`]
    /// is [`ValueExpectation::Unspecified`].
    fn parser_default_expectation(&self) -> ValueExpectation;
}

/// A fully-typed option: descriptive metadata plus a parser and storage adapter. `T` is the
/// per-occurrence value type produced by the parser; `O` is the type read back via [`Opt::get`]
/// (equal to `T` for scalar storage, `Vec<T>` for list storage).
pub struct Opt<T: 'static, O: Clone + 'static = T> {
    meta: OptionMeta,
    parser: &'static dyn ValueParser<T>,
    storage: Box<dyn Storage<T, Output = O>>,
    occurrence_count: AtomicUsize,
    last_position: AtomicUsize,
    fully_initialized: AtomicBool,
}

const NO_POSITION: usize = usize::MAX;

impl<T: 'static, O: Clone + 'static> Opt<T, O> {
    /// Construct a new option record.
    pub fn new(
        meta: OptionMeta,
        parser: &'static dyn ValueParser<T>,
        storage: Box<dyn Storage<T, Output = O>>,
    ) -> Self {
        Self {
            meta,
            parser,
            storage,
            occurrence_count: AtomicUsize::new(0),
            last_position: AtomicUsize::new(NO_POSITION),
            fully_initialized: AtomicBool::new(false),
        }
    }

    /// Read the option's current value back out of storage.
    pub fn get(&self) -> O {
        self.storage.snapshot()
    }
}

impl<T: 'static, O: Clone + 'static> OptionHandler for Opt<T, O> {
    fn meta(&self) -> &OptionMeta {
        &self.meta
    }

    fn occurrence_count(&self) -> usize {
        self.occurrence_count.load(Ordering::Acquire)
    }

    fn last_position(&self) -> Option<usize> {
        match self.last_position.load(Ordering::Acquire) {
            NO_POSITION => None,
            p => Some(p),
        }
    }

    fn add_occurrence(
        &self,
        pos: usize,
        matched_name: &str,
        raw: Option<&str>,
        multi_arg: bool,
    ) -> CliResult<()> {
        let prior = self.occurrence_count.load(Ordering::Acquire);
        if prior > 0
            && !multi_arg
            && self.meta.occurrences_flag.rejects_repeat()
            && !self.meta.misc.contains(&Misc::DefaultOption)
        {
            return Err(CliError::DuplicateOccurrence(matched_name.to_string()));
        }

        let expectation = match self.meta.value_expectation {
            ValueExpectation::Unspecified => self.parser.default_expectation(),
            other => other,
        };

        match (expectation, raw) {
            (ValueExpectation::Disallowed, Some(v)) => {
                return Err(CliError::UnexpectedValue(matched_name.to_string(), v.to_string()));
            }
            (ValueExpectation::Required, None) => {
                return Err(CliError::MissingValue(matched_name.to_string()));
            }
            (_, Some(v)) if self.meta.misc.contains(&Misc::CommaSeparated) => {
                let is_initial = prior == 0;
                for (i, piece) in v.split(',').enumerate() {
                    let parsed = self
                        .parser
                        .parse(matched_name, piece)
                        .map_err(|msg| CliError::ParseFailure(matched_name.to_string(), msg))?;
                    self.storage.accept(parsed, is_initial && i == 0);
                }
            }
            (_, Some(v)) => {
                let parsed = self
                    .parser
                    .parse(matched_name, v)
                    .map_err(|msg| CliError::ParseFailure(matched_name.to_string(), msg))?;
                self.storage.accept(parsed, prior == 0);
            }
            (_, None) => {
                let parsed = self
                    .parser
                    .parse(matched_name, "")
                    .map_err(|msg| CliError::ParseFailure(matched_name.to_string(), msg))?;
                self.storage.accept(parsed, prior == 0);
            }
        }

        if !multi_arg {
            self.occurrence_count.fetch_add(1, Ordering::AcqRel);
        }
        self.last_position.store(pos, Ordering::Release);
        self.fully_initialized.store(true, Ordering::Release);
        Ok(())
    }

    fn reset(&self) {
        self.occurrence_count.store(0, Ordering::Release);
        self.last_position.store(NO_POSITION, Ordering::Release);
        self.fully_initialized.store(false, Ordering::Release);
        self.storage.reset_to_default();
    }

    fn parser_default_expectation(&self) -> ValueExpectation {
        self.parser.default_expectation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{BoolFlagParser, StringParser, ValueParser};
    use crate::storage::{ListStorage, ScalarStorage};
    use pretty_assertions::assert_eq;

    static STRING: StringParser = StringParser;
    static FLAG: BoolFlagParser = BoolFlagParser;

    fn meta(arg_name: &'static str) -> OptionMeta {
        OptionMeta {
            arg_name,
            help: "",
            value_placeholder: "",
            occurrences_flag: OccurrencesFlag::Optional,
            value_expectation: ValueExpectation::Unspecified,
            hidden_flag: HiddenFlag::Visible,
            formatting: Formatting::Normal,
            misc: MiscSet::new(),
            additional_values: 0,
            categories: &[],
            subs: &[],
        }
    }

    #[test]
    fn scalar_last_occurrence_wins() {
        let opt = Opt::new(meta("x"), &STRING, Box::new(ScalarStorage::new(String::new())));
        opt.add_occurrence(0, "x", Some("a"), false).unwrap();
        opt.add_occurrence(1, "x", Some("b"), false).unwrap();
        assert_eq!(opt.get(), "b".to_string());
        assert_eq!(opt.occurrence_count(), 2);
        assert_eq!(opt.last_position(), Some(1));
    }

    #[test]
    fn repeated_optional_occurrence_is_rejected_without_default_option() {
        let opt = Opt::new(meta("x"), &STRING, Box::new(ScalarStorage::new(String::new())));
        opt.add_occurrence(0, "x", Some("a"), false).unwrap();
        let err = opt.add_occurrence(1, "x", Some("b"), false).unwrap_err();
        assert_eq!(err, CliError::DuplicateOccurrence("x".to_string()));
    }

    #[test]
    fn default_option_misc_permits_repeat_overrides() {
        let mut m = meta("x");
        m.misc.insert(Misc::DefaultOption);
        let opt = Opt::new(m, &STRING, Box::new(ScalarStorage::new(String::new())));
        opt.add_occurrence(0, "x", Some("a"), false).unwrap();
        opt.add_occurrence(1, "x", Some("b"), false).unwrap();
        assert_eq!(opt.get(), "b".to_string());
    }

    #[test]
    fn disallowed_expectation_rejects_an_inline_value() {
        let opt = Opt::new(meta("v"), &FLAG, Box::new(ScalarStorage::new(false)));
        let err = opt.add_occurrence(0, "v", Some("true"), false).unwrap_err();
        assert_eq!(err, CliError::UnexpectedValue("v".to_string(), "true".to_string()));
    }

    #[test]
    fn comma_separated_value_is_split_into_individual_pieces() {
        let mut m = meta("I");
        m.misc.insert(Misc::CommaSeparated);
        let opt = Opt::new(m, &STRING, Box::new(ListStorage::new(Vec::new())));
        opt.add_occurrence(0, "I", Some("a,b,c"), false).unwrap();
        assert_eq!(opt.get(), vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        // a single occurrence of a comma-joined value still counts as one occurrence.
        assert_eq!(opt.occurrence_count(), 1);
    }

    #[test]
    fn declared_default_is_discarded_on_first_real_occurrence() {
        let opt = Opt::new(meta("I"), &STRING, Box::new(ListStorage::new(vec!["seed".to_string()])));
        assert_eq!(opt.get(), vec!["seed".to_string()]);
        opt.add_occurrence(0, "I", Some("a"), false).unwrap();
        assert_eq!(opt.get(), vec!["a".to_string()]);
    }

    #[test]
    fn reset_restores_declared_default_and_bookkeeping() {
        let opt = Opt::new(meta("x"), &STRING, Box::new(ScalarStorage::new("default".to_string())));
        opt.add_occurrence(0, "x", Some("a"), false).unwrap();
        opt.reset();
        assert_eq!(opt.get(), "default".to_string());
        assert_eq!(opt.occurrence_count(), 0);
        assert_eq!(opt.last_position(), None);
    }
}
