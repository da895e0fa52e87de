//! Maniaskin - command-line tool for inspecting legacy skin configuration

use std::process::ExitCode;

use maniaskin::cli;

fn main() -> ExitCode {
    cli::run()
}
