// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

#[macro_use]
extern crate clopt;

mod common;

use clopt::config::ParserConfig;
use clopt::error::CliError;
use clopt::parsers::STRING_PARSER;
use pretty_assertions::assert_eq;

positional! {
    static INPUT: String = "INPUT", &STRING_PARSER, String::new(),
    occurrences_flag: clopt::flags::OccurrencesFlag::Required,
}

consume_after! {
    static REST = &STRING_PARSER,
}

#[test]
fn positional_is_filled_before_consume_after_takes_over() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    clopt::try_parse_command_line_options(&argv!["in.txt", "a", "b"], &cfg).unwrap();
    assert_eq!(INPUT.get(), "in.txt".to_string());
    assert_eq!(REST.get(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn missing_required_positional_is_reported() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    let result = clopt::try_parse_command_line_options(&argv![], &cfg);
    assert_eq!(result, Err(CliError::MissingRequired("INPUT".to_string())));
}

#[test]
fn consume_after_swallows_option_looking_tokens_verbatim() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    clopt::try_parse_command_line_options(&argv!["in.txt", "-not-an-option"], &cfg).unwrap();
    assert_eq!(INPUT.get(), "in.txt".to_string());
    assert_eq!(REST.get(), vec!["-not-an-option".to_string()]);
}

#[test]
fn leading_double_dash_is_dropped_not_captured_by_consume_after() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    clopt::try_parse_command_line_options(&argv!["in.txt", "--", "-x", "-y"], &cfg).unwrap();
    assert_eq!(INPUT.get(), "in.txt".to_string());
    assert_eq!(REST.get(), vec!["-x".to_string(), "-y".to_string()]);
}
