// This file is part of getopt, a GNU-compatible command-line option scanner.
// Copyright (C) 2025 The getopt authors

//! Incremental option scanner
//!
//! A [`State`] owns the argument list and two cursors: the index of the next
//! argument to examine ([`optind`](State::optind)) and, while in the middle of
//! a group of short options like `-abc`, the byte offset of the next option
//! character in that argument. Each call to [`State::next_option`] consumes
//! one option and returns it.
//!
//! In the [GNU mode](Mode::Gnu), operands found before an option are skipped
//! and, once the option has been consumed, moved after it. The arguments are
//! reordered in place but never added or removed, so that when scanning is
//! done all options precede all operands. The relative order of the options
//! and that of the operands are preserved.

use crate::config::{Config, Emulation, Mode};
use crate::matcher::{LongMatch, match_long, match_short};
use crate::model::{Error, ErrorKind, Occurrence};
use crate::option::{LongOptionSpec, OptionArgumentSpec};

/// Index of the first argument scanned, after the command name
const INIT_OPTIND: usize = 1;

/// Tests whether an argument starts an option.
///
/// An argument starts an option if it begins with a hyphen and is not a lone
/// hyphen.
fn is_option_like(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-')
}

/// Prefix of an argument that may be a long option
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LongPrefix {
    /// `--name`
    Double,
    /// `-name` in `getopt_long_only`
    Single,
}

/// State of the option scanner
///
/// The state is created from the whole command line, including the command
/// name at index 0, which is never scanned. The argument type `T` can be
/// anything that can be viewed as a string, such as `String` or `&str`.
///
/// ```
/// # use getopt::{Config, Occurrence, State};
/// # use getopt::option::parse_short_specs;
/// let config = Config::new().short_options(parse_short_specs("ab:"));
/// let mut state = State::new(["prog", "file", "-a", "-b", "x"]);
///
/// assert_eq!(state.next_option(&config), Some(Ok(Occurrence::short('a', None))));
/// assert_eq!(
///     state.next_option(&config),
///     Some(Ok(Occurrence::short('b', Some("x".to_string()))))
/// );
/// assert_eq!(state.next_option(&config), None);
///
/// // The operand has been moved after the options.
/// assert_eq!(state.args(), ["prog", "-a", "-b", "x", "file"]);
/// assert_eq!(state.parameters(), ["file"]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct State<T = String> {
    /// Arguments, possibly reordered by scanning
    args: Vec<T>,
    /// Index of the next argument to scan
    optind: usize,
    /// Byte offset of the next option character in `args[optind]`, or zero
    /// when not in the middle of a group of short options
    charind: usize,
    /// Whether scanning has reached the end of the options
    finished: bool,
}

impl<T: AsRef<str>> State<T> {
    /// Creates a new state that scans `args` from index 1.
    #[must_use]
    pub fn new<A: Into<Vec<T>>>(args: A) -> Self {
        State {
            args: args.into(),
            optind: INIT_OPTIND,
            charind: 0,
            finished: false,
        }
    }

    /// Resets the state to scan new arguments from index 1.
    pub fn reset<A: Into<Vec<T>>>(&mut self, args: A) {
        *self = Self::new(args);
    }

    /// Returns the arguments.
    ///
    /// The order may differ from the initial one since scanning in the GNU
    /// mode permutes the arguments.
    #[must_use]
    pub fn args(&self) -> &[T] {
        &self.args
    }

    /// Returns the arguments, consuming the state.
    #[must_use]
    pub fn into_args(self) -> Vec<T> {
        self.args
    }

    /// Returns the index of the next argument to scan.
    ///
    /// When scanning is done, this is the index of the first operand in
    /// [`args`](Self::args), or the number of arguments if there is no operand.
    #[must_use]
    pub fn optind(&self) -> usize {
        self.optind
    }

    /// Whether [`next_option`](Self::next_option) has returned `None`
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the operands.
    ///
    /// These are the arguments from [`optind`](Self::optind) on. Before
    /// scanning is done, the result may include arguments that would otherwise
    /// be scanned as options.
    #[must_use]
    pub fn parameters(&self) -> &[T] {
        self.args.get(self.optind..).unwrap_or_default()
    }

    /// Scans the next option.
    ///
    /// Returns `None` when there are no more options. This happens at the end
    /// of the arguments, at a `--` separator (which is consumed), or, in the
    /// POSIX mode, at the first operand. Once `None` has been returned, this
    /// function keeps returning `None` without modifying the state until the
    /// state is [`reset`](Self::reset).
    ///
    /// Otherwise, returns the option occurrence, or an error describing what
    /// is wrong with the option. In either case, the state has moved past the
    /// option, so scanning can be continued.
    pub fn next_option(&mut self, config: &Config) -> Option<Result<Occurrence, Error>> {
        if self.finished {
            return None;
        }
        let result = self.scan(config);
        if result.is_none() {
            self.finished = true;
            log::trace!("options end at index {}", self.optind);
        }
        result
    }

    fn scan(&mut self, config: &Config) -> Option<Result<Occurrence, Error>> {
        let arg = self.args.get(self.optind)?.as_ref();
        if self.charind == 0 && arg == "--" {
            self.optind += 1;
            return None;
        }

        let skip_start = self.optind;
        if !is_option_like(arg) {
            match config.mode {
                Mode::Posix => return None,
                Mode::InOrder => {
                    let occurrence = Occurrence::non_option(arg);
                    self.optind += 1;
                    return Some(Ok(occurrence));
                }
                Mode::Gnu => {
                    let found = (self.optind..self.args.len())
                        .find(|&i| is_option_like(self.args[i].as_ref()))?;
                    self.optind = found;
                }
            }
        }
        let skip_end = self.optind;

        let result = if self.charind == 0 && self.args[self.optind].as_ref() == "--" {
            self.optind += 1;
            None
        } else {
            self.read_option(config)
        };

        if skip_end > skip_start {
            let count = self.optind - skip_end;
            self.permute(skip_start, skip_end, count);
        }
        result
    }

    /// Moves the `count` arguments at `end` to `start`, shifting the skipped
    /// operands in `start..end` after them.
    fn permute(&mut self, start: usize, end: usize, count: usize) {
        // Rotating the whole block at once has the same effect as moving the
        // consumed arguments one by one, last first.
        self.args[start..end + count].rotate_right(count);
        self.optind = start + count;
        if count > 0 {
            log::trace!(
                "moved {count} argument(s) before {} operand(s) at index {start}",
                end - start
            );
        }
    }

    /// Advances to the next argument.
    fn next_arg(&mut self) {
        self.optind += 1;
        self.charind = 0;
    }

    /// Reads the option at the current position, which must start an option.
    fn read_option(&mut self, config: &Config) -> Option<Result<Occurrence, Error>> {
        let arg = self.args[self.optind].as_ref();

        let mut long_prefix = None;
        if self.charind == 0 {
            self.charind = 1;
            if config.emulation.accepts_long_options() && arg[1..].starts_with('-') {
                self.charind = 2;
                long_prefix = Some(LongPrefix::Double);
            } else if config.emulation == Emulation::GetOptLongOnly {
                long_prefix = Some(LongPrefix::Single);
            }
        }

        let mut long_name = "";
        if let Some(prefix) = long_prefix {
            let body = &arg[self.charind..];
            let (name, inline) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };
            long_name = name;

            let long_match = if name.is_empty() {
                LongMatch::NotFound
            } else {
                let short_specs =
                    (prefix == LongPrefix::Single).then_some(config.short_options.as_slice());
                match_long(name, &config.long_options, short_specs)
            };
            match long_match {
                LongMatch::Found(spec) => {
                    let inline = inline.map(str::to_owned);
                    return Some(self.read_long_option(spec, inline));
                }
                LongMatch::Ambiguous(specs) => {
                    log::debug!("option name {name:?} is ambiguous among {} options", specs.len());
                }
                LongMatch::NotFound => {}
            }
            if prefix == LongPrefix::Double {
                let occurrence = Occurrence::long(name, None);
                self.next_arg();
                return Some(Err(Error::new(ErrorKind::UnknownOption, occurrence)));
            }
        }

        let option = arg[self.charind..].chars().next()?;
        self.charind += option.len_utf8();
        let at_end = self.charind >= arg.len();

        let Some(spec) = match_short(option, &config.short_options) else {
            if long_prefix.is_some() {
                // getopt_long_only rejects the whole argument.
                let occurrence = Occurrence::long(long_name, None);
                self.next_arg();
                return Some(Err(Error::new(ErrorKind::UnknownOption, occurrence)));
            }
            if at_end {
                self.next_arg();
            }
            return Some(Err(Error::new(
                ErrorKind::UnknownOption,
                Occurrence::short(option, None),
            )));
        };

        if spec.argument == OptionArgumentSpec::None {
            if at_end {
                self.next_arg();
            }
            return Some(Ok(Occurrence::short(option, None)));
        }

        if !at_end {
            let value = arg[self.charind..].to_owned();
            self.next_arg();
            return Some(Ok(Occurrence::short(option, Some(value))));
        }

        self.next_arg();
        let occurrence = Occurrence::short(option, None);
        Some(match spec.argument {
            OptionArgumentSpec::Required => self.take_argument(occurrence),
            _ => Ok(occurrence),
        })
    }

    /// Completes a matched long option, which is in the current argument.
    fn read_long_option(
        &mut self,
        spec: &LongOptionSpec,
        inline: Option<String>,
    ) -> Result<Occurrence, Error> {
        self.next_arg();
        let occurrence = Occurrence::long(spec.name.as_str(), inline);
        match (spec.argument, occurrence.argument.is_some()) {
            (OptionArgumentSpec::None, true) => {
                Err(Error::new(ErrorKind::IllegalOptionArgument, occurrence))
            }
            (OptionArgumentSpec::Required, false) => self.take_argument(occurrence),
            _ => Ok(occurrence),
        }
    }

    /// Consumes the current argument as the argument to the option.
    fn take_argument(&mut self, mut occurrence: Occurrence) -> Result<Occurrence, Error> {
        match self.args.get(self.optind) {
            Some(arg) => {
                occurrence.argument = Some(arg.as_ref().to_owned());
                self.optind += 1;
                Ok(occurrence)
            }
            None => Err(Error::new(ErrorKind::MissingOptionArgument, occurrence)),
        }
    }
}
