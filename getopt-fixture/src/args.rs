// This file is part of getopt, a GNU-compatible command-line option scanner.
// Copyright (C) 2025 The getopt authors

//! Splitting a command line into arguments

use serde::Deserialize;

/// Splits a command line into arguments.
///
/// Arguments are separated by whitespace. Characters between single or double
/// quotes are taken literally, including whitespace and the other kind of
/// quote. The quotes themselves are removed, so `''` yields an empty argument.
/// There is no escape character, and an unclosed quote extends to the end of
/// the line.
///
/// ```
/// # use getopt_fixture::split_args;
/// assert_eq!(
///     split_args(r#"prgm -a 'two words' "it's" x''y ''"#),
///     ["prgm", "-a", "two words", "it's", "xy", ""]
/// );
/// ```
#[must_use]
pub fn split_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut quote = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                in_arg = true;
            }
            None if c.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            None => {
                current.push(c);
                in_arg = true;
            }
        }
    }
    if in_arg {
        args.push(current);
    }
    args
}

/// Argument list in a fixture record
///
/// A list can be written either as a JSON array of strings or as a single
/// command-line string, which is split by [`split_args`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum ArgList {
    List(Vec<String>),
    Line(String),
}

impl ArgList {
    /// Returns the arguments.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            ArgList::List(args) => args.clone(),
            ArgList::Line(line) => split_args(line),
        }
    }
}

impl Default for ArgList {
    fn default() -> Self {
        ArgList::List(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_separated() {
        assert_eq!(split_args("prgm  -a\tp1\n"), ["prgm", "-a", "p1"]);
        assert!(split_args("").is_empty());
        assert!(split_args("   ").is_empty());
    }

    #[test]
    fn quoted_arguments() {
        assert_eq!(split_args("'a b' \"c d\""), ["a b", "c d"]);
        assert_eq!(split_args("'\"' \"'\""), ["\"", "'"]);
        assert_eq!(split_args("--opt='x y'z"), ["--opt=x yz"]);
    }

    #[test]
    fn empty_quoted_argument() {
        assert_eq!(split_args("prgm '' \"\""), ["prgm", "", ""]);
    }

    #[test]
    fn unclosed_quote() {
        assert_eq!(split_args("a 'b c"), ["a", "b c"]);
    }

    #[test]
    fn arg_list_from_json() {
        let list: ArgList = serde_json::from_str(r#"["prgm", "a b"]"#).unwrap();
        assert_eq!(list.to_vec(), ["prgm", "a b"]);

        let line: ArgList = serde_json::from_str(r#""prgm 'a b'""#).unwrap();
        assert_eq!(line.to_vec(), ["prgm", "a b"]);
    }
}
