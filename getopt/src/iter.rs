// This file is part of getopt, a GNU-compatible command-line option scanner.
// Copyright (C) 2025 The getopt authors

//! Iterator adapters over [`State::next_option`]

use crate::config::Config;
use crate::model::{Error, Occurrence};
use crate::state::State;
use std::iter::FusedIterator;
use thiserror::Error;

/// Iterator that scans options one by one
///
/// This iterator yields the results of [`State::next_option`] until it
/// returns `None`. Errors do not stop the iteration. See [`State::iter`].
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    state: &'a mut State<T>,
    config: &'a Config,
}

impl<T: AsRef<str>> Iterator for Iter<'_, T> {
    type Item = Result<Occurrence, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.next_option(self.config)
    }
}

impl<T: AsRef<str>> FusedIterator for Iter<'_, T> {}

/// Error returned by [`State::parse`]
///
/// In addition to the error, this value contains the options that were
/// successfully scanned before the error.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{error}")]
pub struct ParseError {
    /// Options scanned before the error
    pub parsed: Vec<Occurrence>,
    /// Error that stopped parsing
    pub error: Error,
}

impl<T: AsRef<str>> State<T> {
    /// Returns an iterator that scans the remaining options.
    ///
    /// The iterator borrows the state, which reflects the progress of the
    /// iteration once the iterator is dropped.
    ///
    /// ```
    /// # use getopt::{Config, Emulation, OptionName, State};
    /// # use getopt::option::{parse_long_specs, parse_short_specs};
    /// let config = Config::new()
    ///     .short_options(parse_short_specs("v"))
    ///     .long_options(parse_long_specs("verbose,output:"))
    ///     .emulation(Emulation::GetOptLong);
    /// let mut state = State::new(["prog", "-v", "--out=a.txt", "--quiet", "in.txt"]);
    ///
    /// let names: Vec<_> = state
    ///     .iter(&config)
    ///     .map(|result| match result {
    ///         Ok(occurrence) => occurrence.name,
    ///         Err(error) => error.occurrence.name,
    ///     })
    ///     .collect();
    /// assert_eq!(
    ///     names,
    ///     [
    ///         OptionName::Short('v'),
    ///         OptionName::Long("output".to_string()),
    ///         OptionName::Long("quiet".to_string()),
    ///     ]
    /// );
    /// assert_eq!(state.parameters(), ["in.txt"]);
    /// ```
    pub fn iter<'a>(&'a mut self, config: &'a Config) -> Iter<'a, T> {
        Iter {
            state: self,
            config,
        }
    }

    /// Scans all the remaining options.
    ///
    /// Returns the scanned options in order, or stops at the first error.
    /// After a successful return, [`parameters`](Self::parameters) returns the
    /// operands. After an error, the state is positioned just past the
    /// offending option and the caller may continue scanning.
    pub fn parse(&mut self, config: &Config) -> Result<Vec<Occurrence>, ParseError> {
        let mut parsed = Vec::new();
        for result in self.iter(config) {
            match result {
                Ok(occurrence) => parsed.push(occurrence),
                Err(error) => return Err(ParseError { parsed, error }),
            }
        }
        Ok(parsed)
    }
}
