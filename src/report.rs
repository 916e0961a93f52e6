//! Operator-facing output: errors, info lines, and disambiguation hints.
//!
//! Every failure ends up here exactly once, from `main`, so the mapping
//! from error kind to output channel lives in a single place.

use crate::cli::PROGRAM;
use crate::disambiguate::invocation_hints;
use crate::dispatch::RunOutcome;
use crate::error::XtsError;
use colored::Colorize;

/// Print a yellow informational message to stdout.
pub fn info(message: &str) {
    println!("{}", message.yellow());
}

/// Print a red error message to stderr.
pub fn error(message: &str) {
    eprintln!("{}", error_line(message));
}

fn error_line(message: &str) -> String {
    format!("{} {}", "ERROR:".bold().red(), message.red())
}

/// Echo a run's captured output, step by step.
pub fn outcome(outcome: &RunOutcome) {
    for (stdout, stderr) in outcome.stdout.iter().zip(&outcome.stderr) {
        for line in stdout {
            println!("{}", line);
        }
        for line in stderr {
            eprintln!("{}", line);
        }
    }
}

/// Report a terminal error on the channel for its kind.
pub fn failure(err: &XtsError) {
    match err {
        XtsError::ConfigAmbiguous { candidates } => {
            for line in ambiguity_lines(candidates) {
                match line {
                    Line::Info(text) => info(&text),
                    Line::Plain(text) => println!("{}", text),
                }
            }
        }
        other => error(&other.to_string()),
    }
}

#[derive(Debug, PartialEq)]
enum Line {
    Info(String),
    Plain(String),
}

fn ambiguity_lines(candidates: &[String]) -> Vec<Line> {
    let mut lines = vec![
        Line::Info("Multiple xts files found in the current directory".to_string()),
        Line::Plain("Please run one of the following commands to choose the file to use\n".to_string()),
    ];
    lines.extend(
        invocation_hints(PROGRAM, candidates)
            .into_iter()
            .map(|hint| Line::Plain(format!("\t{}", hint))),
    );
    lines
}
