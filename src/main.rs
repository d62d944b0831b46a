//! # Tiny BASIC
//!
//! Runs a program file, or opens the line editor when no file is given.

use basic::term;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// A line-numbered integer BASIC.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program to run instead of opening the line editor.
    file: Option<PathBuf>,

    /// Print each line number as it executes.
    #[arg(short, long)]
    trace: bool,

    /// Lines executed between checks for Ctrl-C.
    #[arg(short, long, default_value_t = 5000)]
    cycles: usize,
}

fn main() {
    let args = Args::parse();
    let options = term::Options {
        trace: args.trace,
        cycles: args.cycles.max(1),
        styled: std::io::stdout().is_terminal(),
    };
    let result = match &args.file {
        Some(path) => term::run_file(path, options),
        None => term::main(options),
    };
    if let Err(error) = result {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
