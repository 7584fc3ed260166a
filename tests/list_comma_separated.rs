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
use clopt::flags::Misc;
use clopt::parsers::STRING_PARSER;
use pretty_assertions::assert_eq;

opt_list! {
    static INCLUDE: String = "I", &STRING_PARSER, Vec::new(),
    misc: {
        let mut m = clopt::flags::MiscSet::new();
        m.insert(Misc::CommaSeparated);
        m
    },
}

#[test]
fn comma_separated_pieces_accumulate_across_occurrences() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    clopt::try_parse_command_line_options(&argv!["-I", "a,b", "-I", "c"], &cfg).unwrap();
    assert_eq!(INCLUDE.get(), vec!["a".to_string(), "b".to_string(), "c".to_string()]);
}

#[test]
fn unset_list_option_reads_back_empty() {
    let _guard = common::reset();
    let cfg = ParserConfig::default();
    clopt::try_parse_command_line_options(&argv![], &cfg).unwrap();
    assert_eq!(INCLUDE.get(), Vec::<String>::new());
}
