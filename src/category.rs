// Copyright 2017 Lyndon Brown
//
// This file is part of the `clopt` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Display-grouping labels attached to options.
//!
//! A [`Category`] carries no parsing semantics whatsoever; it exists purely to group options in
//! `-help` output. Every option carries a non-empty ordered list of category references, defaulting
//! to [`GENERAL`] when none is given explicitly.

/// A `(name, description)` pair used to group options in help output.
///
/// Categories are ordinarily created as `'static` values via the [`category!`](crate::category)
/// macro and referenced by `&'static Category` from option declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Display name, e.g. `"General options"`.
    pub name: &'static str,
    /// Longer description shown above the category's option list, if any.
    pub description: &'static str,
}

impl Category {
    /// Construct a new category descriptor.
    ///
    /// Ordinarily you will use the [`category!`](crate::category) macro rather than calling this
    /// directly.
    #[inline]
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// The default category every option belongs to when none is specified at declaration time.
pub static GENERAL: Category = Category::new("General options", "");

/// Constructs a `&'static` [`Category`].
///
/// # Example
///
/// ```rust
/// # #[macro_use] extern crate clopt;
/// static NETWORK: clopt::category::Category = category!("Network options", "Options controlling network behavior");
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! category {
    ( $name:expr ) => { $crate::category::Category::new($name, "") };
    ( $name:expr, $description:expr ) => { $crate::category::Category::new($name, $description) };
}
