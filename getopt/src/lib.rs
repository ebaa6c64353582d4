// This file is part of getopt, a GNU-compatible command-line option scanner.
// Copyright (C) 2025 The getopt authors

//! This crate scans command-line options the way the C library functions
//! `getopt`, `getopt_long` and `getopt_long_only` of GNU libc do.
//!
//! The scanner is incremental: a [`State`] holds the arguments and the scanning
//! position, and each call to [`State::next_option`] consumes one option. The
//! options that may appear are described by a [`Config`], which also selects
//! the [`Emulation`] target and the [`Mode`]:
//!
//! - In the [GNU mode](Mode::Gnu), options and operands may be mixed. Operands
//!   are skipped and moved after the options in the argument list.
//! - In the [POSIX mode](Mode::Posix), scanning stops at the first operand.
//! - In the [in-order mode](Mode::InOrder), each operand is reported in place
//!   as an occurrence of the pseudo-option [`NON_OPTION`].
//!
//! In any mode, a `--` argument ends the options.
//!
//! ```
//! use getopt::{Config, Emulation, Occurrence, State};
//! use getopt::option::{parse_long_specs, parse_short_specs};
//!
//! let config = Config::new()
//!     .short_options(parse_short_specs("vo:"))
//!     .long_options(parse_long_specs("verbose,output:"))
//!     .emulation(Emulation::GetOptLong);
//! let mut state = State::new(["cp", "a.txt", "--verb", "-o", "b.txt", "c.txt"]);
//!
//! let options = state.parse(&config).unwrap();
//! assert_eq!(
//!     options,
//!     [
//!         Occurrence::long("verbose", None),
//!         Occurrence::short('o', Some("b.txt".to_string())),
//!     ]
//! );
//! assert_eq!(state.parameters(), ["a.txt", "c.txt"]);
//! ```
//!
//! Errors are returned as [`Error`] values carrying the offending option. The
//! scanner never prints diagnostics itself. It emits debugging records
//! through the [`log`] facade, which are discarded unless the application
//! installs a logger.

pub mod config;
pub mod iter;
pub mod matcher;
pub mod option;

mod model;
mod state;

pub use self::config::{Config, Emulation, Mode, UnknownNameError};
pub use self::iter::{Iter, ParseError};
pub use self::model::{Error, ErrorKind, NON_OPTION, Occurrence, OptionName};
pub use self::option::{LongOptionSpec, OptionArgumentSpec, ShortOptionSpec};
pub use self::state::State;
