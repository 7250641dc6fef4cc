#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::IsTerminal;

use routegen::cli::args::{CliArgs, ColorChoice};
use routegen::cli::driver::{self, EXIT_INPUT_FAILURE};
use routegen::cli::reporter::Reporter;

fn main() {
    // Initialize tracing if ROUTEGEN_LOG or RUST_LOG is set.
    routegen::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let color = match args.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let code = match run(&args, color) {
        Ok(code) => code,
        Err(err) => {
            let label = if color { "error".red().bold().to_string() } else { "error".to_string() };
            eprintln!("{label}: {err:#}");
            EXIT_INPUT_FAILURE
        }
    };
    std::process::exit(code);
}

fn run(args: &CliArgs, color: bool) -> Result<i32> {
    let outcome = driver::execute(args)?;
    let diagnostics = &outcome.output.diagnostics;
    if !diagnostics.is_empty() {
        let mut reporter = Reporter::new(color);
        eprintln!("{}", reporter.render(diagnostics));
        eprintln!();
        eprintln!("{}", reporter.summary(diagnostics.len()));
    }
    Ok(outcome.exit_code())
}
