// This file is part of getopt, a GNU-compatible command-line option scanner.
// Copyright (C) 2025 The getopt authors

//! Results of scanning an option

use thiserror::Error;

/// Option character reported for an operand in [`Mode::InOrder`]
///
/// This is the value GNU `getopt` returns in the same situation. It is not a
/// legitimate option character, so it cannot be confused with a real option.
///
/// [`Mode::InOrder`]: crate::Mode::InOrder
pub const NON_OPTION: char = '\u{1}';

/// Name of a scanned option
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum OptionName {
    /// Short option character
    Short(char),
    /// Long option name, without the leading hyphens
    Long(String),
}

impl OptionName {
    /// Returns the short option character, if this is a short option.
    #[must_use]
    pub fn as_short(&self) -> Option<char> {
        match self {
            Self::Short(c) => Some(*c),
            Self::Long(_) => None,
        }
    }

    /// Returns the long option name, if this is a long option.
    #[must_use]
    pub fn as_long(&self) -> Option<&str> {
        match self {
            Self::Short(_) => None,
            Self::Long(name) => Some(name),
        }
    }
}

/// Returns the option as written on a command line, like `-x` or `--name`.
impl std::fmt::Display for OptionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Short(c) => write!(f, "-{c}"),
            Self::Long(name) => write!(f, "--{name}"),
        }
    }
}

/// Data of a single option occurrence
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Occurrence {
    /// Option name
    pub name: OptionName,

    /// Argument to the option
    ///
    /// This is `None` if no argument was given, which is always the case for
    /// an option that does not take an argument. An empty argument, as in
    /// `--name=`, is `Some("")`.
    pub argument: Option<String>,
}

impl Occurrence {
    /// Creates an occurrence of a short option.
    #[must_use]
    pub fn short(name: char, argument: Option<String>) -> Self {
        Occurrence {
            name: OptionName::Short(name),
            argument,
        }
    }

    /// Creates an occurrence of a long option.
    #[must_use]
    pub fn long<N: Into<String>>(name: N, argument: Option<String>) -> Self {
        Occurrence {
            name: OptionName::Long(name.into()),
            argument,
        }
    }

    /// Creates an occurrence that carries an operand in the in-order mode.
    #[must_use]
    pub fn non_option<A: Into<String>>(operand: A) -> Self {
        Self::short(NON_OPTION, Some(operand.into()))
    }

    /// Whether this occurrence carries an operand rather than an option
    #[must_use]
    pub fn is_non_option(&self) -> bool {
        self.name == OptionName::Short(NON_OPTION)
    }
}

/// Type of error in an option occurrence
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The argument looks like an option, but no option spec matches it.
    ///
    /// This includes an ambiguous abbreviation of long option names.
    UnknownOption,
    /// An argument was given to a long option that does not take one.
    IllegalOptionArgument,
    /// An option requiring an argument was the last argument.
    MissingOptionArgument,
}

/// Error in scanning an option
///
/// The error carries the best-effort [`Occurrence`] of the offending option.
/// By the time the error is returned, the scanner has moved past the option,
/// so the caller may report the error and continue scanning.
///
/// The `Display` implementation produces messages worded like those of GNU
/// libc. Since the error does not record how the option was written, a long
/// option is always shown with two hyphens, even if it was given with one
/// hyphen to `getopt_long_only`.
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
#[error("{}", message(.kind, .occurrence))]
pub struct Error {
    /// Type of the error
    pub kind: ErrorKind,
    /// Option in which the error occurred
    pub occurrence: Occurrence,
}

impl Error {
    /// Creates a new error.
    #[must_use]
    pub fn new(kind: ErrorKind, occurrence: Occurrence) -> Self {
        Error { kind, occurrence }
    }
}

fn message(kind: &ErrorKind, occurrence: &Occurrence) -> String {
    use ErrorKind::*;
    match (*kind, &occurrence.name) {
        (UnknownOption, OptionName::Short(c)) => format!("invalid option -- '{c}'"),
        (UnknownOption, OptionName::Long(name)) => format!("unrecognized option '--{name}'"),
        (IllegalOptionArgument, name) => format!("option '{name}' doesn't allow an argument"),
        (MissingOptionArgument, OptionName::Short(c)) => {
            format!("option requires an argument -- '{c}'")
        }
        (MissingOptionArgument, OptionName::Long(name)) => {
            format!("option '--{name}' requires an argument")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_name_accessors() {
        assert_eq!(OptionName::Short('a').as_short(), Some('a'));
        assert_eq!(OptionName::Short('a').as_long(), None);
        assert_eq!(OptionName::Long("all".into()).as_short(), None);
        assert_eq!(OptionName::Long("all".into()).as_long(), Some("all"));
    }

    #[test]
    fn non_option_occurrence() {
        let occurrence = Occurrence::non_option("file");
        assert!(occurrence.is_non_option());
        assert_eq!(occurrence.argument.as_deref(), Some("file"));
        assert!(!Occurrence::short('a', None).is_non_option());
    }

    #[test]
    fn error_messages() {
        let error = Error::new(ErrorKind::UnknownOption, Occurrence::short('x', None));
        assert_eq!(error.to_string(), "invalid option -- 'x'");

        let error = Error::new(ErrorKind::UnknownOption, Occurrence::long("frob", None));
        assert_eq!(error.to_string(), "unrecognized option '--frob'");

        let error = Error::new(
            ErrorKind::IllegalOptionArgument,
            Occurrence::long("all", Some("yes".into())),
        );
        assert_eq!(error.to_string(), "option '--all' doesn't allow an argument");

        let error = Error::new(ErrorKind::MissingOptionArgument, Occurrence::short('f', None));
        assert_eq!(error.to_string(), "option requires an argument -- 'f'");

        let error = Error::new(ErrorKind::MissingOptionArgument, Occurrence::long("file", None));
        assert_eq!(error.to_string(), "option '--file' requires an argument");
    }
}
