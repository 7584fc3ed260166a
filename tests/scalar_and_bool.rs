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
use clopt::parsers::{TriBool, FROM_STR_PARSER, TRI_BOOL_PARSER};
use pretty_assertions::assert_eq;

opt! {
    static N: i64 = "n", &FROM_STR_PARSER, 0,
    occurrences_flag: clopt::flags::OccurrencesFlag::Required,
}

opt! {
    static V: TriBool = "v", &TRI_BOOL_PARSER, TriBool::Unset,
}

#[test]
fn required_int_and_optional_bool_both_given() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    let result = clopt::try_parse_command_line_options(&argv!["-n", "7", "-v"], &cfg);
    assert_eq!(result, Ok(()));
    assert_eq!(N.get(), 7);
    assert_eq!(V.get(), TriBool::True);
}

#[test]
fn missing_required_int_is_reported() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    let result = clopt::try_parse_command_line_options(&argv!["-v=false"], &cfg);
    assert_eq!(result, Err(CliError::MissingRequired("n".to_string())));
}

#[test]
fn explicit_bool_values_both_parse() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    clopt::try_parse_command_line_options(&argv!["-n", "1", "-v=false"], &cfg).unwrap();
    assert_eq!(V.get(), TriBool::False);
}

#[test]
fn bool_literals_are_matched_case_insensitively() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    clopt::try_parse_command_line_options(&argv!["-n", "1", "-v=TRUE"], &cfg).unwrap();
    assert_eq!(V.get(), TriBool::True);

    clopt::try_parse_command_line_options(&argv!["-n", "1", "-v=FALSE"], &cfg).unwrap();
    assert_eq!(V.get(), TriBool::False);

    clopt::try_parse_command_line_options(&argv!["-n", "1", "-v=YES"], &cfg).unwrap();
    assert_eq!(V.get(), TriBool::True);
}
