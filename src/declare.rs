// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Declaration macros: `opt!`, `opt_list!`, `positional!`, `sink!` and `consume_after!`.
//!
//! Each expands to a `static` [`once_cell::sync::Lazy`]-wrapped [`Opt`](crate::option::Opt) plus an
//! [`inventory::submit!`] registration thunk. `Lazy::force` inside the submitted expression is what
//! makes the `static`'s mere presence in the binary sufficient to register it, the closest safe
//! approximation of the original static-constructor model (see `DESIGN.md`).
//!
//! Field overrides are given as trailing `name: value` pairs, matching [`OptionMeta`](crate::option::OptionMeta)'s
//! field names; any omitted field keeps the default shown in the expansion below.

#[doc(hidden)]
pub mod __priv {
    pub use inventory;
    pub use once_cell::sync::Lazy;
}

/// Declare a scalar-valued named option.
///
/// ```rust,ignore
/// clopt::opt! {
///     static VERBOSE: bool = "verbose", &clopt::parsers::BOOL_FLAG_PARSER, false,
///     help: "enable verbose output",
/// }
/// ```
#[macro_export]
macro_rules! opt {
    (static $name:ident : $elem:ty = $arg_name:expr, $parser:expr, $default:expr $(, $field:ident : $val:expr)* $(,)?) => {
        static $name: $crate::declare::__priv::Lazy<$crate::option::Opt<$elem>> =
            $crate::declare::__priv::Lazy::new(|| {
                let mut meta = $crate::option::OptionMeta {
                    arg_name: $arg_name,
                    help: "",
                    value_placeholder: "",
                    occurrences_flag: $crate::flags::OccurrencesFlag::Optional,
                    value_expectation: $crate::flags::ValueExpectation::Unspecified,
                    hidden_flag: $crate::flags::HiddenFlag::Visible,
                    formatting: $crate::flags::Formatting::Normal,
                    misc: $crate::flags::MiscSet::new(),
                    additional_values: 0,
                    categories: &[],
                    subs: &[&$crate::subcommand::TOP_LEVEL],
                };
                $( meta.$field = $val; )*
                $crate::option::Opt::new(
                    meta,
                    $parser,
                    ::std::boxed::Box::new($crate::storage::ScalarStorage::new($default)),
                )
            });
        $crate::declare::__priv::inventory::submit! {
            $crate::registry::OptionReg($crate::declare::__priv::Lazy::force(&$name))
        }
    };
}

/// Declare a list-accumulating named option (each occurrence appends).
#[macro_export]
macro_rules! opt_list {
    (static $name:ident : $elem:ty = $arg_name:expr, $parser:expr, $default:expr $(, $field:ident : $val:expr)* $(,)?) => {
        static $name: $crate::declare::__priv::Lazy<$crate::option::Opt<$elem, ::std::vec::Vec<$elem>>> =
            $crate::declare::__priv::Lazy::new(|| {
                let mut meta = $crate::option::OptionMeta {
                    arg_name: $arg_name,
                    help: "",
                    value_placeholder: "",
                    occurrences_flag: $crate::flags::OccurrencesFlag::ZeroOrMore,
                    value_expectation: $crate::flags::ValueExpectation::Unspecified,
                    hidden_flag: $crate::flags::HiddenFlag::Visible,
                    formatting: $crate::flags::Formatting::Normal,
                    misc: $crate::flags::MiscSet::new(),
                    additional_values: 0,
                    categories: &[],
                    subs: &[&$crate::subcommand::TOP_LEVEL],
                };
                $( meta.$field = $val; )*
                $crate::option::Opt::new(
                    meta,
                    $parser,
                    ::std::boxed::Box::new($crate::storage::ListStorage::new($default)),
                )
            });
        $crate::declare::__priv::inventory::submit! {
            $crate::registry::OptionReg($crate::declare::__priv::Lazy::force(&$name))
        }
    };
}

/// Declare a positional option, matched by argv ordinal rather than by name.
#[macro_export]
macro_rules! positional {
    (static $name:ident : $elem:ty = $placeholder:expr, $parser:expr, $default:expr $(, $field:ident : $val:expr)* $(,)?) => {
        static $name: $crate::declare::__priv::Lazy<$crate::option::Opt<$elem>> =
            $crate::declare::__priv::Lazy::new(|| {
                let mut meta = $crate::option::OptionMeta {
                    arg_name: "",
                    help: "",
                    value_placeholder: $placeholder,
                    occurrences_flag: $crate::flags::OccurrencesFlag::Optional,
                    value_expectation: $crate::flags::ValueExpectation::Required,
                    hidden_flag: $crate::flags::HiddenFlag::Visible,
                    formatting: $crate::flags::Formatting::Positional,
                    misc: $crate::flags::MiscSet::new(),
                    additional_values: 0,
                    categories: &[],
                    subs: &[&$crate::subcommand::TOP_LEVEL],
                };
                $( meta.$field = $val; )*
                $crate::option::Opt::new(
                    meta,
                    $parser,
                    ::std::boxed::Box::new($crate::storage::ScalarStorage::new($default)),
                )
            });
        $crate::declare::__priv::inventory::submit! {
            $crate::registry::OptionReg($crate::declare::__priv::Lazy::force(&$name))
        }
    };
}

/// Declare the sink option for a subcommand: receives any token that resolves to nothing else.
/// At most one may be registered per subcommand.
#[macro_export]
macro_rules! sink {
    (static $name:ident = $parser:expr $(, $field:ident : $val:expr)* $(,)?) => {
        static $name: $crate::declare::__priv::Lazy<$crate::option::Opt<::std::string::String, ::std::vec::Vec<::std::string::String>>> =
            $crate::declare::__priv::Lazy::new(|| {
                let mut meta = $crate::option::OptionMeta {
                    arg_name: "",
                    help: "",
                    value_placeholder: "",
                    occurrences_flag: $crate::flags::OccurrencesFlag::ZeroOrMore,
                    value_expectation: $crate::flags::ValueExpectation::Required,
                    hidden_flag: $crate::flags::HiddenFlag::ReallyHidden,
                    formatting: $crate::flags::Formatting::Normal,
                    misc: {
                        let mut m = $crate::flags::MiscSet::new();
                        m.insert($crate::flags::Misc::Sink);
                        m
                    },
                    additional_values: 0,
                    categories: &[],
                    subs: &[&$crate::subcommand::TOP_LEVEL],
                };
                $( meta.$field = $val; )*
                $crate::option::Opt::new(
                    meta,
                    $parser,
                    ::std::boxed::Box::new($crate::storage::ListStorage::new(::std::vec::Vec::new())),
                )
            });
        $crate::declare::__priv::inventory::submit! {
            $crate::registry::OptionReg($crate::declare::__priv::Lazy::force(&$name))
        }
    };
}

/// Declare the consume-after slot for a subcommand: once the required positionals are satisfied,
/// every remaining token is routed here verbatim. At most one may be registered per subcommand.
#[macro_export]
macro_rules! consume_after {
    (static $name:ident = $parser:expr $(, $field:ident : $val:expr)* $(,)?) => {
        static $name: $crate::declare::__priv::Lazy<$crate::option::Opt<::std::string::String, ::std::vec::Vec<::std::string::String>>> =
            $crate::declare::__priv::Lazy::new(|| {
                let mut meta = $crate::option::OptionMeta {
                    arg_name: "",
                    help: "",
                    value_placeholder: "ARGS",
                    occurrences_flag: $crate::flags::OccurrencesFlag::ConsumeAfter,
                    value_expectation: $crate::flags::ValueExpectation::Required,
                    hidden_flag: $crate::flags::HiddenFlag::Visible,
                    formatting: $crate::flags::Formatting::Normal,
                    misc: $crate::flags::MiscSet::new(),
                    additional_values: 0,
                    categories: &[],
                    subs: &[&$crate::subcommand::TOP_LEVEL],
                };
                $( meta.$field = $val; )*
                $crate::option::Opt::new(
                    meta,
                    $parser,
                    ::std::boxed::Box::new($crate::storage::ListStorage::new(::std::vec::Vec::new())),
                )
            });
        $crate::declare::__priv::inventory::submit! {
            $crate::registry::OptionReg($crate::declare::__priv::Lazy::force(&$name))
        }
    };
}
