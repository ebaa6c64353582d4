// This file is part of getopt, a GNU-compatible command-line option scanner.
// Copyright (C) 2025 The getopt authors

//! Scanning whole command lines through the public API

use assert_matches::assert_matches;
use getopt::{Config, Emulation, ErrorKind, Mode, NON_OPTION, Occurrence, OptionName, State};
use test_log::test;

#[test]
fn posix_mode_from_optstring_flag() {
    let config = Config::from_optstrings("+ab:", "", Emulation::GetOpt);
    let mut state = State::new(["prgm", "-a", "file", "-b", "x"]);
    assert_eq!(state.parse(&config), Ok(vec![Occurrence::short('a', None)]));
    assert_eq!(state.parameters(), ["file", "-b", "x"]);
}

#[test]
fn in_order_mode_from_optstring_flag() {
    let config = Config::from_optstrings("-a", "", Emulation::GetOpt);
    let mut state = State::new(["prgm", "one", "-a", "two"]);
    let occurrences = state.parse(&config).unwrap();
    assert_eq!(
        occurrences,
        [
            Occurrence::non_option("one"),
            Occurrence::short('a', None),
            Occurrence::non_option("two"),
        ]
    );
    assert!(occurrences[0].is_non_option());
    assert_eq!(occurrences[0].name, OptionName::Short(NON_OPTION));
    assert!(state.parameters().is_empty());
}

#[test]
fn mixed_short_and_long_options() {
    let config = Config::from_optstrings("+xo:", "extract,output:,level::", Emulation::GetOptLong);
    let mut state = State::new(vec![
        "tar".to_string(),
        "-xoout.tar".to_string(),
        "--level=9".to_string(),
        "--ext".to_string(),
        "--output".to_string(),
        "-".to_string(),
        "--".to_string(),
        "-x".to_string(),
    ]);
    let occurrences = state.parse(&config).unwrap();
    assert_eq!(
        occurrences,
        [
            Occurrence::short('x', None),
            Occurrence::short('o', Some("out.tar".to_string())),
            Occurrence::long("level", Some("9".to_string())),
            Occurrence::long("extract", None),
            Occurrence::long("output", Some("-".to_string())),
        ]
    );
    assert_eq!(state.optind(), 7);
    assert_eq!(state.parameters(), ["-x"]);
}

#[test]
fn errors_can_be_reported_and_skipped() {
    let config = Config::from_optstrings("+a", "all", Emulation::GetOptLongOnly);
    let mut state = State::new(["prgm", "-all", "-aq", "--alp", "-a", "--all=x"]);
    let mut messages = Vec::new();
    let mut occurrences = Vec::new();
    for result in state.iter(&config) {
        match result {
            Ok(occurrence) => occurrences.push(occurrence),
            Err(error) => messages.push(error.to_string()),
        }
    }
    assert_eq!(
        occurrences,
        [
            Occurrence::long("all", None),
            Occurrence::short('a', None),
            Occurrence::short('a', None),
        ]
    );
    assert_eq!(
        messages,
        [
            "invalid option -- 'q'",
            "unrecognized option '--alp'",
            "option '--all' doesn't allow an argument",
        ]
    );
    assert_eq!(state.optind(), 6);
}

#[test]
fn single_hyphen_unknown_option_is_rejected_whole() {
    let config = Config::from_optstrings("+a", "all", Emulation::GetOptLongOnly);
    let mut state = State::new(["prgm", "-q=1", "-a"]);
    let error = state.next_option(&config).unwrap().unwrap_err();
    assert_eq!(error.kind, ErrorKind::UnknownOption);
    assert_eq!(error.occurrence, Occurrence::long("q", None));
    assert_eq!(error.to_string(), "unrecognized option '--q'");
    assert_eq!(state.parse(&config), Ok(vec![Occurrence::short('a', None)]));
}

#[test]
fn missing_argument_at_end() {
    let config = Config::from_optstrings("+d:", "", Emulation::GetOpt);
    let mut state = State::new(["prgm", "-d"]);
    let error = state.parse(&config).unwrap_err();
    assert!(error.parsed.is_empty());
    assert_matches!(error.error.kind, ErrorKind::MissingOptionArgument);
    assert_eq!(error.error.occurrence, Occurrence::short('d', None));
    assert_eq!(error.to_string(), "option requires an argument -- 'd'");
}

#[test]
fn same_arguments_in_every_mode() {
    let args = ["prgm", "-a", "p1", "-b", "--", "-c"];
    let expected = [
        (Mode::Gnu, 2, vec!["prgm", "-a", "-b", "--", "p1", "-c"], 4),
        (Mode::Posix, 1, vec!["prgm", "-a", "p1", "-b", "--", "-c"], 2),
        (Mode::InOrder, 3, vec!["prgm", "-a", "p1", "-b", "--", "-c"], 5),
    ];
    for (mode, count, final_args, optind) in expected {
        let config = Config::from_optstrings("abc", "", Emulation::GetOpt).mode(mode);
        let mut state = State::new(args);
        let occurrences = state.parse(&config).unwrap();
        assert_eq!(occurrences.len(), count, "{mode}");
        assert_eq!(state.args(), final_args, "{mode}");
        assert_eq!(state.optind(), optind, "{mode}");
    }
}
