// This file is part of getopt, a GNU-compatible command-line option scanner.
// Copyright (C) 2025 The getopt authors

//! Scanner configuration
//!
//! A [`Config`] bundles the option specs with the two switches that select a
//! parsing behavior: the [`Emulation`] target, which decides whether and how
//! long options are recognized, and the [`Mode`], which decides what happens
//! when the scanner meets an argument that is not an option.

use crate::option::{LongOptionSpec, ShortOptionSpec};
use crate::option::{parse_long_specs, parse_short_specs, split_optstring_flags};
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

/// C function whose recognition rules are reproduced
#[derive(Clone, Copy, Debug, Default, EnumIter, Eq, Hash, PartialEq)]
pub enum Emulation {
    /// `getopt`: short options only
    #[default]
    GetOpt,
    /// `getopt_long`: short options and `--name` long options
    GetOptLong,
    /// `getopt_long_only`: like `getopt_long`, but `-name` is tried as a long
    /// option before being read as a group of short options
    GetOptLongOnly,
}

/// Behavior on arguments that are not options
#[derive(Clone, Copy, Debug, Default, EnumIter, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Skip operands and permute them after the options. (default)
    #[default]
    Gnu,
    /// Stop at the first operand.
    Posix,
    /// Report each operand in place as the argument of a pseudo-option named
    /// [`NON_OPTION`](crate::NON_OPTION).
    InOrder,
}

impl Emulation {
    /// Returns an iterator over all emulation targets.
    #[inline(always)]
    pub fn iter() -> EmulationIter {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns the name of the emulated C function.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GetOpt => "getopt",
            Self::GetOptLong => "getopt_long",
            Self::GetOptLongOnly => "getopt_long_only",
        }
    }

    /// Whether `--name` arguments are long options
    #[must_use]
    pub const fn accepts_long_options(&self) -> bool {
        !matches!(self, Self::GetOpt)
    }
}

impl Mode {
    /// Returns an iterator over all modes.
    #[inline(always)]
    pub fn iter() -> ModeIter {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns the name of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gnu => "gnu",
            Self::Posix => "posix",
            Self::InOrder => "inorder",
        }
    }

    /// Returns the mode implied by the process environment.
    ///
    /// Like GNU libc, this function selects [`Posix`](Self::Posix) when the
    /// `POSIXLY_CORRECT` environment variable is set, whatever its value, and
    /// [`Gnu`](Self::Gnu) otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        if std::env::var_os("POSIXLY_CORRECT").is_some() {
            Self::Posix
        } else {
            Self::Gnu
        }
    }
}

impl std::fmt::Display for Emulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Error value for an unknown emulation target or mode name
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
#[error("unknown name {0:?}")]
pub struct UnknownNameError(pub String);

/// Parses the name of a C function, e.g. `getopt_long`.
impl FromStr for Emulation {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, UnknownNameError> {
        Self::iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| UnknownNameError(s.to_owned()))
    }
}

/// Parses the name of a mode, e.g. `posix`.
impl FromStr for Mode {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, UnknownNameError> {
        Self::iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownNameError(s.to_owned()))
    }
}

/// Rules and behavior used by the scanner
///
/// The zero value (`Config::default()`) has no options, emulates `getopt` and
/// uses the GNU mode.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// Allowed short options
    pub short_options: Vec<ShortOptionSpec>,
    /// Allowed long options
    pub long_options: Vec<LongOptionSpec>,
    /// Function whose behavior is reproduced
    pub emulation: Emulation,
    /// Behavior on operands
    pub mode: Mode,
}

impl Config {
    /// Creates a configuration with no options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from traditional option strings.
    ///
    /// `optstring` is in the `getopt` format and may start with the GNU mode
    /// flags (`+` or `-`, optionally followed by `:`). `longopts` is a
    /// comma-separated list as accepted by [`parse_long_specs`]. Without a mode
    /// flag, the mode is taken from [`Mode::from_env`].
    #[must_use]
    pub fn from_optstrings(optstring: &str, longopts: &str, emulation: Emulation) -> Self {
        let (mode, optstring) = split_optstring_flags(optstring);
        Config {
            short_options: parse_short_specs(optstring),
            long_options: parse_long_specs(longopts),
            emulation,
            mode: mode.unwrap_or_else(Mode::from_env),
        }
    }

    /// Chained setter for the short options
    #[must_use]
    pub fn short_options<I: IntoIterator<Item = ShortOptionSpec>>(mut self, specs: I) -> Self {
        self.short_options = specs.into_iter().collect();
        self
    }

    /// Chained setter for the long options
    #[must_use]
    pub fn long_options<I: IntoIterator<Item = LongOptionSpec>>(mut self, specs: I) -> Self {
        self.long_options = specs.into_iter().collect();
        self
    }

    /// Chained setter for the emulation target
    #[must_use]
    pub fn emulation(mut self, emulation: Emulation) -> Self {
        self.emulation = emulation;
        self
    }

    /// Chained setter for the mode
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}
