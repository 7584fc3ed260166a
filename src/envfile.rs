// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! A best-effort response-file / environment-variable pre-pass.
//!
//! This is deliberately minimal: simple POSIX-shell-like word splitting (single and double quotes
//! respected, no escape sequences beyond the quote delimiters themselves) and recursive `@file`
//! expansion with a depth cap. Neither behavior is part of the core engine's contract; both exist
//! purely so that [`crate::config::ParserConfig::env_var`] has something concrete behind it.

use std::fs;

use crate::error::{CliError, CliResult};

const MAX_RESPONSE_FILE_DEPTH: usize = 16;

/// Tokenize `env_var`'s value (if set and non-empty) and prepend the resulting words to `argv`,
/// then expand any `@file` tokens anywhere in the result. `argv` does not include `argv[0]`.
pub fn expand_env_and_response_files(argv: &[String], env_var: Option<&str>) -> CliResult<Vec<String>> {
    let mut words = Vec::new();

    if let Some(var) = env_var {
        if !var.is_empty() {
            if let Ok(value) = std::env::var(var) {
                log::debug!("expanding environment variable '{}' into argv prefix", var);
                words.extend(shell_words(&value));
            }
        }
    }

    words.extend(argv.iter().cloned());
    expand_response_files(&words, 0)
}

fn expand_response_files(words: &[String], depth: usize) -> CliResult<Vec<String>> {
    if depth > MAX_RESPONSE_FILE_DEPTH {
        return Err(CliError::Configuration("response-file expansion exceeded maximum depth".to_string()));
    }

    let mut out = Vec::with_capacity(words.len());
    for word in words {
        if let Some(path) = word.strip_prefix('@') {
            let contents = fs::read_to_string(path).map_err(|e| {
                CliError::Configuration(format!("failed to read response file '{}': {}", path, e))
            })?;
            let nested = shell_words(&contents);
            out.extend(expand_response_files(&nested, depth + 1)?);
        } else {
            out.push(word.clone());
        }
    }
    Ok(out)
}

/// Split `input` into shell-like words, honoring single and double quotes as grouping (not
/// escaping) delimiters.
fn shell_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in input.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }
    if in_word {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_words() {
        assert_eq!(shell_words("-a -b foo"), vec!["-a", "-b", "foo"]);
    }

    #[test]
    fn respects_quotes() {
        assert_eq!(shell_words(r#"-name "hello world" 'one two'"#), vec!["-name", "hello world", "one two"]);
    }

    #[test]
    fn no_env_var_is_identity() {
        let argv = vec!["a".to_string(), "b".to_string()];
        let expanded = expand_env_and_response_files(&argv, None).unwrap();
        assert_eq!(expanded, argv);
    }
}
