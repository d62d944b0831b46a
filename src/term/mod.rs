/*!
## Terminal front end

Runs a program file to completion, or opens a line editor where a
program is typed in, listed and run. Output is collected in the
runtime console and written out after every batch of steps.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;

mod listing;
mod ram;

pub use listing::Listing;
pub use ram::{Ram, RAM_SIZE};

use crate::lang::Error;
use crate::mach::{Event, Runtime, Var};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Options shared by file and interactive mode.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Print `[line]` before every executed line.
    pub trace: bool,
    /// Steps per batch between interrupt checks and output flushes.
    pub cycles: usize,
    /// Emit ANSI styling. Off when output is not a terminal.
    pub styled: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            trace: false,
            cycles: 5000,
            styled: true,
        }
    }
}

fn paint(options: Options, style: Style, text: String) -> String {
    if options.styled {
        style.paint(text).to_string()
    } else {
        text
    }
}

/// Runs `runtime` for up to `options.cycles` steps. With `trace` set
/// a dimmed `[line]` goes to the console before each line.
pub fn execute(runtime: &mut Runtime<String, Ram>, options: Options) -> Event {
    if !options.trace {
        return runtime.execute(options.cycles);
    }
    for _ in 0..options.cycles {
        if runtime.is_finished() {
            return Event::Stopped;
        }
        if let Some(line) = runtime.current_line() {
            let mark = paint(options, Style::new().dimmed(), format!("[{}]", line));
            runtime.console_mut().push_str(&mark);
        }
        if let Err(error) = runtime.step() {
            return Event::Error(error);
        }
    }
    if runtime.is_finished() {
        Event::Stopped
    } else {
        Event::Running
    }
}

fn error_text(error: &Error, options: Options) -> String {
    let text = paint(options, Style::new().bold(), format!("?{}", error));
    format!("{}\n", text)
}

fn break_text(line: Option<crate::lang::Integer>) -> String {
    match line {
        Some(line) => format!("BREAK IN {}\n", line),
        None => "BREAK\n".to_string(),
    }
}

fn interrupt_flag() -> Arc<AtomicBool> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
    }
    interrupted
}

/// Runs `program` until it stops, errors fatally or is interrupted.
/// Everything printed is handed to `out` as it becomes available.
fn run_program<F>(
    program: &str,
    vars: &mut Var,
    ram: &mut Ram,
    options: Options,
    interrupted: &AtomicBool,
    mut out: F,
) -> std::io::Result<()>
where
    F: FnMut(&str) -> std::io::Result<()>,
{
    let mut runtime = Runtime::with_memory(program, String::new(), std::mem::take(ram));
    *runtime.vars_mut() = vars.clone();
    interrupted.store(false, Ordering::SeqCst);
    let result = loop {
        let event = execute(&mut runtime, options);
        let printed = std::mem::take(runtime.console_mut());
        if let Err(error) = out(&printed) {
            break Err(error);
        }
        match event {
            Event::Stopped => break Ok(()),
            Event::Running => {}
            Event::Error(error) => {
                if let Err(error) = out(&error_text(&error, options)) {
                    break Err(error);
                }
            }
        }
        if interrupted.swap(false, Ordering::SeqCst) {
            break out(&break_text(runtime.current_line()));
        }
    };
    *vars = runtime.vars().clone();
    let (_, memory) = runtime.into_parts();
    *ram = memory;
    result
}

/// Loads and runs one program file with a fresh 64K of RAM.
pub fn run_file(path: &Path, options: Options) -> std::io::Result<()> {
    let program = std::fs::read_to_string(path)?;
    let interrupted = interrupt_flag();
    let stdout = std::io::stdout();
    let mut ram = Ram::new();
    let mut vars = Var::new();
    run_program(&program, &mut vars, &mut ram, options, &interrupted, |s| {
        let mut lock = stdout.lock();
        lock.write_all(s.as_bytes())?;
        lock.flush()
    })
}

/// Interactive line editor. Numbered lines edit the listing and
/// `run`, `list`, `new` and `clear` act on it.
pub fn main(options: Options) -> std::io::Result<()> {
    let interrupted = interrupt_flag();
    let interface = Interface::new("BASIC")?;
    let mut listing = Listing::new();
    let mut ram = Ram::new();
    let mut vars = Var::new();
    interface.write_fmt(format_args!("TINY BASIC\nREADY.\n"))?;
    loop {
        let input = match interface.read_line()? {
            ReadResult::Input(input) => input,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let command = input.trim();
        if command.is_empty() {
            continue;
        }
        interface.add_history_unique(input.clone());
        if listing.enter(command) {
            continue;
        }
        match command {
            "run" => {
                let program = listing.source();
                run_program(&program, &mut vars, &mut ram, options, &interrupted, |s| {
                    interface.write_fmt(format_args!("{}", s))
                })?;
            }
            "list" => {
                for line in listing.lines() {
                    interface.write_fmt(format_args!("{}\n", line))?;
                }
            }
            "new" => listing.clear(),
            "clear" => vars.clear(),
            _ => {
                interface.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint("?SYNTAX ERROR; UNKNOWN COMMAND")
                ))?;
                continue;
            }
        }
        interface.write_fmt(format_args!("READY.\n"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(program: &str, options: Options) -> String {
        let mut s = String::new();
        let mut ram = Ram::new();
        let mut vars = Var::new();
        let interrupted = AtomicBool::new(false);
        run_program(program, &mut vars, &mut ram, options, &interrupted, |p| {
            s.push_str(p);
            Ok(())
        })
        .unwrap();
        s
    }

    #[test]
    fn test_trace_marks_each_line() {
        let options = Options {
            trace: true,
            cycles: 2,
            ..Options::default()
        };
        let s = run("10 print 1\n20 goto 40\n30 print 3\n40 print 4\n", options);
        let dim = |n: i32| Style::new().dimmed().paint(format!("[{}]", n)).to_string();
        assert_eq!(s, format!("{}1\n{}{}4\n", dim(10), dim(20), dim(40)));
    }

    #[test]
    fn test_non_fatal_error_keeps_running() {
        let s = run("10 gosub 10\n20 print 9\n", Options::default());
        let error = Style::new()
            .bold()
            .paint("?OUT OF MEMORY IN 10 (3..8); GOSUB STACK OVERFLOW");
        assert_eq!(s, format!("{}\n9\n", error));
    }

    #[test]
    fn test_fatal_error_stops() {
        let s = run("10 print 1/0\n20 print 2\n", Options::default());
        let error = Style::new()
            .bold()
            .paint("?DIVISION BY ZERO IN 10 (10..11)");
        assert_eq!(s, format!("{}\n", error));
    }

    #[test]
    fn test_memory_and_variables_outlive_a_run() {
        let mut ram = Ram::new();
        let mut vars = Var::new();
        let interrupted = AtomicBool::new(false);
        let options = Options::default();
        let discard = |_: &str| Ok(());
        run_program("10 poke 5, 77\n20 a=3\n", &mut vars, &mut ram, options, &interrupted, discard)
            .unwrap();
        let mut s = String::new();
        run_program("10 peek 5, b\n20 print a;b\n", &mut vars, &mut ram, options, &interrupted, |p| {
            s.push_str(p);
            Ok(())
        })
        .unwrap();
        assert_eq!(s, "377\n");
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        let options = Options {
            trace: true,
            styled: false,
            ..Options::default()
        };
        let s = run("10 print 1\n20 print 1/0\n", options);
        assert_eq!(s, "[10]1\n[20]?DIVISION BY ZERO IN 20 (10..11)\n");
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn test_break_message() {
        assert_eq!(break_text(Some(40)), "BREAK IN 40\n");
        assert_eq!(break_text(None), "BREAK\n");
    }
}
