// This file is part of getopt, a GNU-compatible command-line option scanner.
// Copyright (C) 2025 The getopt authors

//! Resolution of parsed option names to option specs
//!
//! Short options are matched by character. Only characters accepted by
//! [`is_option_char`] can ever match, so a spec for any other character is
//! inert.
//!
//! Long options are matched by unique prefix: `--verb` selects `verbose` if no
//! other long option starts with `verb`. A name that equals a long option name
//! exactly selects that option even if it is also a prefix of other names.

use crate::option::{LongOptionSpec, ShortOptionSpec};

/// Tests whether a character can name a short option.
///
/// A legitimate option character is a graphic ASCII character other than `-`,
/// `:` and `;`.
#[must_use]
pub const fn is_option_char(c: char) -> bool {
    c.is_ascii_graphic() && !matches!(c, '-' | ':' | ';')
}

/// Finds the spec for a short option character.
///
/// Returns the first spec with the character, or `None` if there is no such
/// spec or the character is not a legitimate option character.
#[must_use]
pub fn match_short(name: char, specs: &[ShortOptionSpec]) -> Option<&ShortOptionSpec> {
    if !is_option_char(name) {
        return None;
    }
    specs.iter().find(|spec| spec.name == name)
}

/// Result of [`match_long`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LongMatch<'a> {
    /// Exactly one spec was selected.
    Found(&'a LongOptionSpec),
    /// The name is a prefix of more than one spec name and none of them is an
    /// exact match.
    Ambiguous(Vec<&'a LongOptionSpec>),
    /// No spec was selected.
    NotFound,
}

/// Finds the spec for a long option name or its abbreviation.
///
/// If `short_specs` is given and `name` is a single character that names a
/// short option in it, the short option takes precedence and this function
/// returns [`LongMatch::NotFound`]. `getopt_long_only` uses this so that `-x`
/// stays a short option even when `x` abbreviates some long option name.
#[must_use]
pub fn match_long<'a>(
    name: &str,
    long_specs: &'a [LongOptionSpec],
    short_specs: Option<&[ShortOptionSpec]>,
) -> LongMatch<'a> {
    if let Some(short_specs) = short_specs {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if match_short(c, short_specs).is_some() {
                return LongMatch::NotFound;
            }
        }
    }

    let mut matches = Vec::new();
    for spec in long_specs {
        if spec.name == name {
            return LongMatch::Found(spec);
        }
        if spec.name.starts_with(name) {
            matches.push(spec);
        }
    }

    match matches.len() {
        0 => LongMatch::NotFound,
        1 => LongMatch::Found(matches[0]),
        _ => LongMatch::Ambiguous(matches),
    }
}
