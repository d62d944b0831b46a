//! # Tiny BASIC
//!
//! A line-numbered integer BASIC that runs straight from the program
//! text, one line per step. The interpreter keeps no heap state: both
//! control stacks and the line index are fixed size arrays, so it fits
//! hosts where memory is counted in kilobytes.
//!
//! Run a program file with `basic hello.bas`, or start `basic` with no
//! arguments and type the program in.
//! ```text
//! TINY BASIC
//! READY.
//! 10 print "hello"
//! run
//! hello
//! READY.
//! ```
//!
//! Embedding is a matter of handing a program and a
//! [`Console`](mach::Console) to a [`Runtime`](mach::Runtime) and
//! stepping it from the host loop.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

pub mod lang;
pub mod mach;
pub mod term;
