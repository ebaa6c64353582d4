// This file is part of getopt, a GNU-compatible command-line option scanner.
// Copyright (C) 2025 The getopt authors

//! Option specifications
//!
//! This module defines the rules that tell the scanner which options exist and
//! whether they take an argument. A rule list is usually compiled from the
//! traditional string forms:
//!
//! - [`parse_short_specs`] reads a `getopt` optstring such as `"ab:c::"`.
//! - [`parse_long_specs`] reads a comma-separated list such as
//!   `"verbose,file:,color::"`, the format of the `--longoptions` option of the
//!   GNU `getopt` utility.
//!
//! In both forms, a single `:` suffix means the option requires an argument and
//! a double `::` suffix means the argument is optional.
//!
//! ```
//! # use getopt::option::*;
//! let short = parse_short_specs("ab:c::");
//! assert_eq!(short[0], ShortOptionSpec::new('a'));
//! assert_eq!(short[1], ShortOptionSpec::new('b').argument(OptionArgumentSpec::Required));
//! assert_eq!(short[2], ShortOptionSpec::new('c').argument(OptionArgumentSpec::Optional));
//!
//! let long = parse_long_specs("verbose,file:");
//! assert_eq!(long[0], LongOptionSpec::new("verbose"));
//! assert_eq!(long[1], LongOptionSpec::new("file").argument(OptionArgumentSpec::Required));
//! ```

use crate::config::Mode;

/// Specification for an option's argument
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum OptionArgumentSpec {
    /// The option does not take an argument. (default)
    #[default]
    None,
    /// The option requires an argument.
    Required,
    /// The option may have an argument.
    ///
    /// An optional argument must be given in the same command-line argument as
    /// the option, as in `-cVALUE` or `--color=VALUE`.
    Optional,
}

/// Specification of a short option
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ShortOptionSpec {
    /// Option character
    pub name: char,
    /// Whether this option takes an argument
    pub argument: OptionArgumentSpec,
}

impl ShortOptionSpec {
    /// Creates a new option spec that takes no argument.
    #[must_use]
    pub const fn new(name: char) -> Self {
        ShortOptionSpec {
            name,
            argument: OptionArgumentSpec::None,
        }
    }

    /// Chained setter for the [`argument`](Self::argument) field
    #[must_use]
    pub const fn argument(mut self, argument: OptionArgumentSpec) -> Self {
        self.argument = argument;
        self
    }
}

/// Returns the option name like `-f`.
impl std::fmt::Display for ShortOptionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-{}", self.name)
    }
}

/// Specification of a long option
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct LongOptionSpec {
    /// Option name, without the leading `--`
    ///
    /// The name should not be empty or include `=`.
    pub name: String,
    /// Whether this option takes an argument
    pub argument: OptionArgumentSpec,
}

impl LongOptionSpec {
    /// Creates a new option spec that takes no argument.
    #[must_use]
    pub fn new<N: Into<String>>(name: N) -> Self {
        LongOptionSpec {
            name: name.into(),
            argument: OptionArgumentSpec::None,
        }
    }

    /// Chained setter for the [`argument`](Self::argument) field
    #[must_use]
    pub fn argument(mut self, argument: OptionArgumentSpec) -> Self {
        self.argument = argument;
        self
    }
}

/// Returns the option name like `--foo`.
impl std::fmt::Display for LongOptionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "--{}", self.name)
    }
}

/// Parses a short option string.
///
/// Every character in the string names an option. A character followed by `:`
/// requires an argument, and one followed by `::` takes an optional argument.
/// The string is read literally: the GNU mode flags that may prefix an
/// optstring are not interpreted here (see [`split_optstring_flags`]).
#[must_use]
pub fn parse_short_specs(optstring: &str) -> Vec<ShortOptionSpec> {
    let mut specs = Vec::new();
    let mut chars = optstring.chars().peekable();
    while let Some(name) = chars.next() {
        let mut argument = OptionArgumentSpec::None;
        if chars.next_if_eq(&':').is_some() {
            argument = OptionArgumentSpec::Required;
            if chars.next_if_eq(&':').is_some() {
                argument = OptionArgumentSpec::Optional;
            }
        }
        specs.push(ShortOptionSpec { name, argument });
    }
    specs
}

/// Parses a comma-separated long option string.
///
/// An empty string yields no options. An item ending with `::` takes an
/// optional argument, and one ending with a single `:` requires an argument.
#[must_use]
pub fn parse_long_specs(longopts: &str) -> Vec<LongOptionSpec> {
    if longopts.is_empty() {
        return Vec::new();
    }
    longopts
        .split(',')
        .map(|item| {
            if let Some(name) = item.strip_suffix("::") {
                LongOptionSpec::new(name).argument(OptionArgumentSpec::Optional)
            } else if let Some(name) = item.strip_suffix(':') {
                LongOptionSpec::new(name).argument(OptionArgumentSpec::Required)
            } else {
                LongOptionSpec::new(item)
            }
        })
        .collect()
}

/// Separates the GNU mode flags from an optstring.
///
/// GNU `getopt` reads a leading `+` as a request for [`Mode::Posix`] and a
/// leading `-` as a request for [`Mode::InOrder`]. A `:` after that (or at the
/// very beginning) only silences diagnostics in C, so it is skipped here.
///
/// Returns the requested mode, if any, and the rest of the optstring.
#[must_use]
pub fn split_optstring_flags(optstring: &str) -> (Option<Mode>, &str) {
    let (mode, rest) = if let Some(rest) = optstring.strip_prefix('+') {
        (Some(Mode::Posix), rest)
    } else if let Some(rest) = optstring.strip_prefix('-') {
        (Some(Mode::InOrder), rest)
    } else {
        (None, optstring)
    };
    (mode, rest.strip_prefix(':').unwrap_or(rest))
}
