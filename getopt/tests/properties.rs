// This file is part of getopt, a GNU-compatible command-line option scanner.
// Copyright (C) 2025 The getopt authors

//! Properties that hold for any arguments and any configuration

use getopt::option::{parse_long_specs, parse_short_specs};
use getopt::{Config, Emulation, ErrorKind, Mode, State};
use proptest::prelude::{Strategy, TestCaseError};
use proptest::test_runner::TestRunner;
use proptest::{prop_assert, prop_assert_eq};

fn get_test_runner(cases: u32) -> TestRunner {
    TestRunner::new(proptest::test_runner::Config {
        cases,
        failure_persistence: None,
        ..proptest::test_runner::Config::default()
    })
}

fn args_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("--|-|-{1,2}[a-dπ=:]{0,4}|[a-d=]{0,3}", 0..10)
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        "[a-dπ:]{0,8}",
        proptest::collection::vec("[a-d]{1,3}:{0,2}", 0..4),
        proptest::sample::select(Emulation::iter().collect::<Vec<_>>()),
        proptest::sample::select(Mode::iter().collect::<Vec<_>>()),
    )
        .prop_map(|(optstring, longopts, emulation, mode)| Config {
            short_options: parse_short_specs(&optstring),
            long_options: parse_long_specs(&longopts.join(",")),
            emulation,
            mode,
        })
}

fn is_option_like(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-')
}

fn scan_and_verify(args: Vec<String>, config: Config) -> Result<(), TestCaseError> {
    let mut state = State::new(args.clone());
    let max_steps = args.iter().map(|arg| arg.len() + 1).sum::<usize>() + 1;
    let mut steps = 0;
    let mut prev_optind = state.optind();

    while let Some(result) = state.next_option(&config) {
        steps += 1;
        prop_assert!(steps <= max_steps, "scanning does not terminate");
        prop_assert!(state.optind() >= prev_optind);
        prev_optind = state.optind();

        if let Err(error) = result {
            if error.kind == ErrorKind::MissingOptionArgument {
                prop_assert_eq!(error.occurrence.argument, None);
            }
        }
    }

    prop_assert!(state.optind() <= args.len() + 1);

    // Done is stable.
    let optind = state.optind();
    let final_args = state.args().to_vec();
    prop_assert_eq!(state.next_option(&config), None);
    prop_assert_eq!(state.optind(), optind);
    prop_assert_eq!(state.args(), final_args.as_slice());

    // Permutation neither adds nor removes arguments.
    let mut sorted_before = args.clone();
    let mut sorted_after = final_args.clone();
    sorted_before.sort();
    sorted_after.sort();
    prop_assert_eq!(sorted_before, sorted_after);
    prop_assert_eq!(args.first(), final_args.first());

    if config.mode == Mode::Gnu {
        if !args.iter().any(|arg| arg == "--") {
            prop_assert!(!state.parameters().iter().any(|arg| is_option_like(arg)));
        }
    } else {
        prop_assert_eq!(&args, &final_args);
    }

    Ok(())
}

#[test]
fn scanning_properties() {
    get_test_runner(2048)
        .run(&(args_strategy(), config_strategy()), |(mut args, config)| {
            args.insert(0, "prgm".to_string());
            scan_and_verify(args, config)
        })
        .unwrap();
}

#[test]
fn scanning_properties_without_command_name() {
    get_test_runner(256)
        .run(&(args_strategy(), config_strategy()), |(args, config)| {
            scan_and_verify(args, config)
        })
        .unwrap();
}
