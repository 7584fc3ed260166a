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

opt! {
    static INCLUDE_DIR: String = "L", &STRING_PARSER, String::new(),
    formatting: clopt::flags::Formatting::Prefix,
}

opt! {
    static DEFINE: String = "D", &STRING_PARSER, String::new(),
    formatting: clopt::flags::Formatting::AlwaysPrefix,
}

#[test]
fn concatenated_suffix_supplies_the_value() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    clopt::try_parse_command_line_options(&argv!["-Lfoo"], &cfg).unwrap();
    assert_eq!(INCLUDE_DIR.get(), "foo".to_string());
}

#[test]
fn inline_equals_form_also_works_for_plain_prefix() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    clopt::try_parse_command_line_options(&argv!["-L=foo"], &cfg).unwrap();
    assert_eq!(INCLUDE_DIR.get(), "foo".to_string());
}

#[test]
fn always_prefix_rejects_the_inline_equals_form() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    let result = clopt::try_parse_command_line_options(&argv!["-D=VALUE"], &cfg);
    assert_eq!(result, Err(CliError::UnexpectedValue("D".to_string(), "VALUE".to_string())));
}

#[test]
fn always_prefix_accepts_the_concatenated_form() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    clopt::try_parse_command_line_options(&argv!["-DVALUE"], &cfg).unwrap();
    assert_eq!(DEFINE.get(), "VALUE".to_string());
}
