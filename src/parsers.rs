// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Value parsers.
//!
//! A [`ValueParser<T>`] turns the raw string an option was given on the command line into a `T`.
//! Concrete parsers for the common primitive and collection-adjacent types are provided; custom
//! types implement the trait directly.

use std::str::FromStr;

use crate::flags::ValueExpectation;

/// Converts a raw option value into `T`.
pub trait ValueParser<T>: Sync {
    /// Parse `raw` (the text following `-name=` or the next argv token). `name` is the matched
    /// option name, supplied purely for inclusion in error messages.
    fn parse(&self, name: &str, raw: &str) -> Result<T, String>;

    /// The value-expectation an option using this parser carries when it does not specify one
    /// explicitly. Flag-like parsers (e.g. [`BoolFlagParser`]) advertise [`Disallowed`](ValueExpectation::Disallowed);
    /// everything else advertises [`Required`](ValueExpectation::Required).
    fn default_expectation(&self) -> ValueExpectation {
        ValueExpectation::Required
    }
}

/// Parses via [`FromStr`], for any numeric type (`i8`..`i128`, `u8`..`u128`, `f32`, `f64`) or other
/// `FromStr` implementer whose `Err` is `Display`.
pub struct FromStrParser;

impl<T> ValueParser<T> for FromStrParser
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    fn parse(&self, name: &str, raw: &str) -> Result<T, String> {
        raw.parse::<T>().map_err(|e| format!("invalid value for '{}': {}", name, e))
    }
}

/// Parser for `String`/`&str`-valued options; never fails.
pub struct StringParser;

impl ValueParser<String> for StringParser {
    fn parse(&self, _name: &str, raw: &str) -> Result<String, String> {
        Ok(raw.to_string())
    }
}

/// Parser for a single Unicode scalar value.
pub struct CharParser;

impl ValueParser<char> for CharParser {
    fn parse(&self, name: &str, raw: &str) -> Result<char, String> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(format!("invalid value for '{}': expected a single character", name)),
        }
    }
}

/// Parser for boolean-valued options that always take an explicit value (`-flag=true`).
pub struct BoolParser;

impl ValueParser<bool> for BoolParser {
    fn parse(&self, name: &str, raw: &str) -> Result<bool, String> {
        match raw.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(format!("invalid value for '{}': expected a boolean", name)),
        }
    }
}

/// Parser for a switch that takes no value and is simply present or absent (`-verbose`).
pub struct BoolFlagParser;

impl ValueParser<bool> for BoolFlagParser {
    fn parse(&self, _name: &str, _raw: &str) -> Result<bool, String> {
        Ok(true)
    }

    fn default_expectation(&self) -> ValueExpectation {
        ValueExpectation::Disallowed
    }
}

/// Tri-state boolean: unset/true/false, for switches like `-color`/`-no-color` pairs or an
/// optional `-color[=when]` form. `raw` being empty (an occurrence with no value, the normal case
/// for a flag-style switch) yields [`TriBool::True`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TriBool {
    #[default]
    Unset,
    True,
    False,
}

/// Parser for [`TriBool`]-valued options; value is optional.
pub struct TriBoolParser;

impl ValueParser<TriBool> for TriBoolParser {
    fn parse(&self, name: &str, raw: &str) -> Result<TriBool, String> {
        if raw.is_empty() {
            return Ok(TriBool::True);
        }
        match raw.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(TriBool::True),
            "false" | "no" | "off" | "0" => Ok(TriBool::False),
            _ => Err(format!("invalid value for '{}': expected a boolean", name)),
        }
    }

    fn default_expectation(&self) -> ValueExpectation {
        ValueExpectation::Optional
    }
}

/// Parser matching the raw value against a fixed, caller-supplied table of `(literal, value)`
/// pairs, the enum/literal-list collaborator from the design notes. Used for options like
/// `-opt-level=<none|less|default|aggressive>`.
pub struct EnumParser<T: Copy + 'static> {
    table: &'static [(&'static str, T)],
}

impl<T: Copy + 'static> EnumParser<T> {
    /// Build a new enum parser over `table`.
    pub const fn new(table: &'static [(&'static str, T)]) -> Self {
        Self { table }
    }
}

impl<T: Copy + 'static + Sync> ValueParser<T> for EnumParser<T> {
    fn parse(&self, name: &str, raw: &str) -> Result<T, String> {
        self.table
            .iter()
            .find(|(literal, _)| *literal == raw)
            .map(|(_, value)| *value)
            .ok_or_else(|| {
                let choices: Vec<&str> = self.table.iter().map(|(l, _)| *l).collect();
                format!("invalid value for '{}': expected one of [{}], got '{}'", name, choices.join(", "), raw)
            })
    }
}

/// Static, `'static`-lifetime parser instances for the primitive scalar types, so declarations do
/// not each need their own `static` item.
pub static STRING_PARSER: StringParser = StringParser;
pub static CHAR_PARSER: CharParser = CharParser;
pub static BOOL_PARSER: BoolParser = BoolParser;
pub static BOOL_FLAG_PARSER: BoolFlagParser = BoolFlagParser;
pub static TRI_BOOL_PARSER: TriBoolParser = TriBoolParser;
pub static FROM_STR_PARSER: FromStrParser = FromStrParser;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bool_parser_accepts_mixed_case_literals() {
        for raw in ["true", "TRUE", "True", "1", "yes", "YES", "on"] {
            assert_eq!(BOOL_PARSER.parse("flag", raw), Ok(true));
        }
        for raw in ["false", "FALSE", "False", "0", "no", "NO", "off"] {
            assert_eq!(BOOL_PARSER.parse("flag", raw), Ok(false));
        }
    }

    #[test]
    fn bool_parser_rejects_unknown_literal() {
        assert!(BOOL_PARSER.parse("flag", "maybe").is_err());
    }

    #[test]
    fn tri_bool_parser_empty_raw_means_true_and_literals_are_case_insensitive() {
        assert_eq!(TRI_BOOL_PARSER.parse("flag", ""), Ok(TriBool::True));
        assert_eq!(TRI_BOOL_PARSER.parse("flag", "TRUE"), Ok(TriBool::True));
        assert_eq!(TRI_BOOL_PARSER.parse("flag", "FALSE"), Ok(TriBool::False));
        assert_eq!(TRI_BOOL_PARSER.parse("flag", "no"), Ok(TriBool::False));
    }
}
