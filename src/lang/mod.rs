/*!
# Rust Language Module

This Rust module provides lexical analysis of the BASIC language.
Tokens are scanned on demand from the borrowed program text; the
program is never turned into a token vector.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use lex::Scanner;
pub use lex::MAX_NUMBER_LEN;
pub use token::{LexError, Literal, Operator, Span, Token, Word};

/// Every BASIC value is a signed integer.
pub type Integer = i32;
pub type LineNumber = Option<Integer>;
pub type Column = std::ops::Range<usize>;
