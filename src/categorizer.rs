// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The categorizer (component D): classifies a single raw argv entry into a [`Token`].
//!
//! Classification here is shallow and argv-local; it does not consult the registry. A leading `-x`
//! where `x` is a digit is left ambiguous between [`Token::ShortOpt`] and [`Token::Bareword`], the
//! caller (the dispatcher, via the resolver) disambiguates using its knowledge of which short
//! options actually expect a value, per the design note in the original rules.
//!
//! The dispatcher owns the argv walk itself (index, `--` raw-mode switch, lookahead for values) and
//! calls [`classify`] per token rather than consuming an iterator, since that walk needs to jump the
//! index forward by more than one on a match with an attached value.

/// One classified argv entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `--name` or `--name=value` (or, with single-dash long options enabled, `-name`/`-name=value`).
    LongOpt(&'a str, Option<&'a str>),
    /// `-n` or `-n=value`, a single-character option token.
    ShortOpt(&'a str, Option<&'a str>),
    /// A run of single-character flags with no explicit value marker (`-lah`); may turn out, after
    /// resolution, to be a single short option taking a value instead.
    GroupedShorts(&'a str),
    /// A token with no leading dash, or any token once raw-positional mode has been entered (the
    /// dispatcher recognizes the `--` marker itself and never passes it to [`classify`]).
    Bareword(&'a str),
}

/// Classify a single argv entry in isolation. The dispatcher tracks `--`/raw-mode itself (see
/// module docs) and calls this once per token it has not already routed as a raw bareword.
pub fn classify(raw: &str, long_double_dash_only: bool) -> Token<'_> {
    if let Some(rest) = raw.strip_prefix("--") {
        let (name, value) = split_inline(rest);
        return Token::LongOpt(name, value);
    }

    if let Some(rest) = raw.strip_prefix('-') {
        if rest.is_empty() {
            // A bare "-" conventionally names stdin; treat as a bareword.
            return Token::Bareword(raw);
        }
        if !long_double_dash_only {
            let (name, value) = split_inline(rest);
            if name.chars().count() > 1 {
                return Token::LongOpt(name, value);
            }
        }
        let (name, value) = split_inline(rest);
        if value.is_some() || name.chars().count() == 1 {
            return Token::ShortOpt(name, value);
        }
        return Token::GroupedShorts(name);
    }

    Token::Bareword(raw)
}

fn split_inline(s: &str) -> (&str, Option<&str>) {
    match s.find('=') {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn double_dash_long_option_with_inline_value() {
        assert_eq!(classify("--opt=val", false), Token::LongOpt("opt", Some("val")));
    }

    #[test]
    fn double_dash_long_option_without_value() {
        assert_eq!(classify("--opt", false), Token::LongOpt("opt", None));
    }

    #[test]
    fn single_dash_multi_char_is_long_when_double_dash_not_required() {
        assert_eq!(classify("-opt", false), Token::LongOpt("opt", None));
    }

    #[test]
    fn single_dash_multi_char_is_grouped_when_double_dash_required() {
        assert_eq!(classify("-opt", true), Token::GroupedShorts("opt"));
    }

    #[test]
    fn single_dash_single_char_is_short() {
        assert_eq!(classify("-n", true), Token::ShortOpt("n", None));
        assert_eq!(classify("-n", false), Token::ShortOpt("n", None));
    }

    #[test]
    fn single_dash_single_char_with_inline_value() {
        assert_eq!(classify("-n=7", true), Token::ShortOpt("n", Some("7")));
    }

    #[test]
    fn bare_dash_is_a_bareword() {
        assert_eq!(classify("-", false), Token::Bareword("-"));
    }

    #[test]
    fn no_leading_dash_is_a_bareword() {
        assert_eq!(classify("file.txt", false), Token::Bareword("file.txt"));
    }
}
