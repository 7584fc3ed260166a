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
use clopt::parsers::BOOL_FLAG_PARSER;
use pretty_assertions::assert_eq;

opt! {
    static L: bool = "l", &BOOL_FLAG_PARSER, false,
    misc: {
        let mut m = clopt::flags::MiscSet::new();
        m.insert(Misc::Grouping);
        m
    },
}

opt! {
    static A: bool = "a", &BOOL_FLAG_PARSER, false,
    misc: {
        let mut m = clopt::flags::MiscSet::new();
        m.insert(Misc::Grouping);
        m
    },
}

opt! {
    static H: bool = "h", &BOOL_FLAG_PARSER, false,
    misc: {
        let mut m = clopt::flags::MiscSet::new();
        m.insert(Misc::Grouping);
        m
    },
}

#[test]
fn grouped_shorts_expand_to_each_flag() {
    let _guard = common::reset();
    let cfg = ParserConfig { long_options_use_double_dash: true, ..ParserConfig::default() };
    clopt::try_parse_command_line_options(&argv!["-lah"], &cfg).unwrap();
    assert_eq!(L.get(), true);
    assert_eq!(A.get(), true);
    assert_eq!(H.get(), true);
}

#[test]
fn single_short_still_works_alone() {
    let _guard = common::reset();
    let cfg = ParserConfig { long_options_use_double_dash: true, ..ParserConfig::default() };
    clopt::try_parse_command_line_options(&argv!["-l"], &cfg).unwrap();
    assert_eq!(L.get(), true);
    assert_eq!(A.get(), false);
    assert_eq!(H.get(), false);
}
