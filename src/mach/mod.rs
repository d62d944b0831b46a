/*!
## Rust Machine Module

This Rust module executes BASIC directly from the program text,
one line per step, with fixed size control stacks and line index.

*/

/// Nested `GOSUB` calls awaiting `RETURN`.
pub const MAX_GOSUB_DEPTH: usize = 10;
/// Nested `FOR` loops awaiting `NEXT`.
pub const MAX_FOR_DEPTH: usize = 4;
/// Distinct line numbers remembered by the line index.
pub const MAX_LINE_INDEXES: usize = 256;
/// Longest string literal `PRINT` will emit, in bytes.
pub const MAX_STRING_LEN: usize = 40;
/// Parenthesis nesting allowed in one expression.
pub const MAX_EXPRESSION_DEPTH: usize = 16;

mod expression;
mod io;
mod link;
mod operation;
mod runtime;
mod stack;
mod statement;
mod var;

pub use io::{Console, Memory, NoMemory};
pub use link::LineIndex;
pub use operation::Operation;
pub use runtime::{Event, ForFrame, Runtime};
pub use stack::Stack;
pub use var::Var;

#[cfg(test)]
mod tests;
