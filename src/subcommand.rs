// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Named scopes activated by `argv[1]`.
//!
//! A [`Subcommand`] carries its own [`Registry`](crate::registry::Registry) view. Two distinguished
//! static instances exist: [`TOP_LEVEL`], used when argv does not begin with a recognized
//! subcommand name, and [`ALL`], a sentinel which, when listed among an option's `subs`, makes that
//! option visible in *every* subcommand's name lookup (resolved at lookup time, not copied in).

use crate::registry::current_active_name;

/// A `(name, description)` pair identifying a named parsing scope.
///
/// Ordinarily created via the [`subcommand!`](crate::subcommand) macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subcommand {
    /// Subcommand name, as matched against `argv[1]`. Empty for [`TOP_LEVEL`].
    pub name: &'static str,
    /// Help-display description.
    pub description: &'static str,
}

impl Subcommand {
    /// Construct a new subcommand descriptor.
    #[inline]
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }

    /// Truthy iff this subcommand was the one selected during the most recently completed (or
    /// currently in-progress) parse.
    ///
    /// Identity is compared by name: since subcommand names must be unique (enforced at
    /// registration, mirroring option-name uniqueness), this is equivalent to the pointer-identity
    /// comparison the design notes describe, without requiring unsafe pointer games.
    #[inline]
    pub fn is_active(&self) -> bool {
        current_active_name() == self.name
    }
}

/// The top-level scope, selected when `argv[1]` does not name a registered subcommand.
pub static TOP_LEVEL: Subcommand = Subcommand::new("", "Top level");

/// The sentinel scope meaning "every subcommand". An option listing `ALL` among its `subs` is
/// resolved as present in every subcommand's lookup table, including [`TOP_LEVEL`].
pub static ALL: Subcommand = Subcommand::new("\u{0}all\u{0}", "All subcommands");

/// Declares a `static` [`Subcommand`] and registers it with the global registry, so that
/// [`Registry::subcommand_named`](crate::registry::Registry::subcommand_named) can resolve `argv[1]`
/// against it.
///
/// # Example
///
/// ```rust
/// # #[macro_use] extern crate clopt;
/// subcommand!(BUILD = "build", "Build the project");
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! subcommand {
    ( $name:ident = $value:expr ) => {
        $crate::subcommand!($name = $value, "");
    };
    ( $name:ident = $value:expr, $description:expr ) => {
        pub static $name: $crate::subcommand::Subcommand =
            $crate::subcommand::Subcommand::new($value, $description);
        $crate::declare::__priv::inventory::submit! {
            $crate::registry::SubcommandReg(&$name)
        }
    };
}
