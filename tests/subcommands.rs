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
use clopt::parsers::BOOL_FLAG_PARSER;
use pretty_assertions::assert_eq;

subcommand!(BUILD = "build", "Build the project");

opt! {
    static RELEASE: bool = "release", &BOOL_FLAG_PARSER, false,
    subs: &[&BUILD],
}

#[test]
fn option_scoped_to_a_subcommand_is_reachable_there() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    clopt::try_parse_command_line_options(&argv!["build", "-release"], &cfg).unwrap();
    assert_eq!(RELEASE.get(), true);
    assert_eq!(BUILD.is_active(), true);
}

#[test]
fn option_scoped_to_a_subcommand_is_unreachable_at_top_level() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    let result = clopt::try_parse_command_line_options(&argv!["-release"], &cfg);
    assert_eq!(result, Err(CliError::UnknownOption("release".to_string())));
    assert_eq!(BUILD.is_active(), false);
}
