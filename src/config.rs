// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The parser-wide configuration surface.
//!
//! [`ParserConfig`] is a plain, independently-constructible value: it is not part of the global
//! option registry, so tests (and embedders with more than one logical parser front-end in the same
//! process) can build one without touching process-global state.

/// Parser-wide behavior, fixed before the first parse and read-only during it.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// When `true`, single-dash long option names (`-foo`) are rejected; only `--foo`/`--foo=value`
    /// are recognized as long options, and any single-dash token is always short/grouped.
    pub long_options_use_double_dash: bool,
    /// Override for the program name used in diagnostic prefixes. Defaults to argv[0]'s basename.
    pub program_name: Option<String>,
    /// Text shown above `-help` output.
    pub overview_text: Option<&'static str>,
    /// Name of an environment variable whose value is tokenized and prepended to argv before
    /// parsing (see [`crate::envfile`]).
    pub env_var: Option<&'static str>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            long_options_use_double_dash: false,
            program_name: None,
            overview_text: None,
            env_var: None,
        }
    }
}

impl ParserConfig {
    /// Resolve the effective program name: `program_name` if set, else the basename of `argv0`.
    pub fn resolve_program_name(&self, argv0: &str) -> String {
        match &self.program_name {
            Some(name) => name.clone(),
            None => argv0
                .rsplit(['/', '\\'])
                .next()
                .unwrap_or(argv0)
                .to_string(),
        }
    }
}
