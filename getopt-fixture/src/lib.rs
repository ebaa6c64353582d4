// This file is part of getopt, a GNU-compatible command-line option scanner.
// Copyright (C) 2025 The getopt authors

//! Conformance fixtures for the `getopt` crate
//!
//! A fixture record describes one scanning session: the arguments, the option
//! specs, the emulation target and mode, and what the scanner is expected to
//! produce. Records are stored as a JSON array and typically generated by
//! running the C library's `getopt` functions on the same input.
//!
//! ```
//! # use getopt_fixture::FixtureRecord;
//! let record: FixtureRecord = serde_json::from_str(r#"{
//!     "label": "permutation",
//!     "function": "getopt",
//!     "mode": "gnu",
//!     "args": "prgm p1 -a",
//!     "opts": "a",
//!     "want_args": ["prgm", "-a", "p1"],
//!     "want_optind": 2,
//!     "want_results": [{"char": "a"}, {"signal": "done"}]
//! }"#).unwrap();
//! assert_eq!(record.check(), Ok(()));
//! ```

mod args;

pub use self::args::{ArgList, split_args};
use getopt::option::{parse_long_specs, parse_short_specs};
use getopt::{
    Config, Emulation, Error, ErrorKind, Mode, Occurrence, OptionName, State, UnknownNameError,
};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Kind of outcome of a single scanning step
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// An option was scanned successfully.
    #[default]
    #[serde(rename = "")]
    None,
    /// No more options
    Done,
    /// [`ErrorKind::UnknownOption`]
    Unknown,
    /// [`ErrorKind::IllegalOptionArgument`]
    Illegal,
    /// [`ErrorKind::MissingOptionArgument`]
    Missing,
}

/// Outcome of a single scanning step as recorded in a fixture
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct StepResult {
    /// Short option character
    pub char: Option<char>,
    /// Long option name
    pub name: Option<String>,
    /// Option argument
    pub optarg: Option<String>,
    /// Kind of outcome
    pub signal: Signal,
}

impl From<Option<Result<Occurrence, Error>>> for StepResult {
    fn from(outcome: Option<Result<Occurrence, Error>>) -> Self {
        let (occurrence, signal) = match outcome {
            None => return StepResult {
                signal: Signal::Done,
                ..StepResult::default()
            },
            Some(Ok(occurrence)) => (occurrence, Signal::None),
            Some(Err(error)) => {
                let signal = match error.kind {
                    ErrorKind::UnknownOption => Signal::Unknown,
                    ErrorKind::IllegalOptionArgument => Signal::Illegal,
                    ErrorKind::MissingOptionArgument => Signal::Missing,
                };
                (error.occurrence, signal)
            }
        };
        let (char, name) = match occurrence.name {
            OptionName::Short(c) => (Some(c), None),
            OptionName::Long(name) => (None, Some(name)),
        };
        StepResult {
            char,
            name,
            optarg: occurrence.argument,
            signal,
        }
    }
}

/// One scanning session and its expected results
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct FixtureRecord {
    /// Description of the case
    pub label: String,
    /// Name of the emulated C function, e.g. `getopt_long`
    pub function: String,
    /// Name of the mode, e.g. `posix`
    pub mode: String,
    /// Initial arguments, including the command name
    pub args: ArgList,
    /// Short option string, without mode flags
    pub opts: String,
    /// Comma-separated long option string
    pub lopts: String,
    /// Arguments after the last expected step
    pub want_args: ArgList,
    /// Index after the last expected step
    pub want_optind: usize,
    /// Expected outcome of each step, in order
    pub want_results: Vec<StepResult>,
}

/// Difference between a fixture record and the scanner's behavior
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Mismatch {
    /// The record names an unknown function or mode.
    #[error("invalid {field}: {error}")]
    InvalidName {
        field: &'static str,
        #[source]
        error: UnknownNameError,
    },
    /// A step produced an unexpected outcome.
    #[error("step {index}: expected {expected:?}, got {actual:?}")]
    Step {
        index: usize,
        expected: StepResult,
        actual: StepResult,
    },
    /// The final arguments differ.
    #[error("expected arguments {expected:?}, got {actual:?}")]
    Args {
        expected: Vec<String>,
        actual: Vec<String>,
    },
    /// The final index differs.
    #[error("expected optind {expected}, got {actual}")]
    Optind { expected: usize, actual: usize },
}

impl FixtureRecord {
    /// Returns the scanner configuration described by this record.
    pub fn config(&self) -> Result<Config, Mismatch> {
        let emulation = self
            .function
            .parse::<Emulation>()
            .map_err(|error| Mismatch::InvalidName {
                field: "function",
                error,
            })?;
        let mode = self
            .mode
            .parse::<Mode>()
            .map_err(|error| Mismatch::InvalidName {
                field: "mode",
                error,
            })?;
        Ok(Config {
            short_options: parse_short_specs(&self.opts),
            long_options: parse_long_specs(&self.lopts),
            emulation,
            mode,
        })
    }

    /// Runs the scanner on this record and compares the results.
    ///
    /// The scanner is called once per expected step. Returns all the
    /// differences found.
    pub fn check(&self) -> Result<(), Vec<Mismatch>> {
        let config = self.config().map_err(|mismatch| vec![mismatch])?;
        let mut state = State::new(self.args.to_vec());
        let mut mismatches = Vec::new();

        for (index, expected) in self.want_results.iter().enumerate() {
            let actual = StepResult::from(state.next_option(&config));
            if actual != *expected {
                mismatches.push(Mismatch::Step {
                    index,
                    expected: expected.clone(),
                    actual,
                });
            }
        }

        let expected = self.want_args.to_vec();
        if state.args() != expected.as_slice() {
            mismatches.push(Mismatch::Args {
                expected,
                actual: state.args().to_vec(),
            });
        }
        if state.optind() != self.want_optind {
            mismatches.push(Mismatch::Optind {
                expected: self.want_optind,
                actual: state.optind(),
            });
        }

        if mismatches.is_empty() {
            Ok(())
        } else {
            Err(mismatches)
        }
    }
}

/// Error in loading fixture records
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read fixture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed fixture file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads fixture records from a JSON file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<FixtureRecord>, LoadError> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Parses fixture records from a JSON array.
pub fn parse(text: &str) -> Result<Vec<FixtureRecord>, LoadError> {
    Ok(serde_json::from_str(text)?)
}
