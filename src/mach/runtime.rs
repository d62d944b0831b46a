use super::{
    Console, LineIndex, Memory, NoMemory, Stack, Var, MAX_FOR_DEPTH, MAX_GOSUB_DEPTH,
    MAX_LINE_INDEXES,
};
use crate::error;
use crate::lang::{Error, Ident, Integer, LineNumber, Literal, Scanner, Token, Word};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## BASIC runtime
///
/// Holds every piece of interpreter state for one program: the
/// scanner cursor, both control stacks, the line index and the
/// variables. The program text is borrowed for the lifetime of
/// the runtime. Runtimes share nothing and may coexist freely.
///
/// ```
/// use basic::mach::Runtime;
/// let mut r = Runtime::new("10 let a=5\n20 print \"a=\",a\n", String::new());
/// while !r.is_finished() {
///     r.step().unwrap();
/// }
/// assert_eq!(r.console(), "a= 5\n");
/// assert_eq!(r.variable('a'), Some(5));
/// ```

pub struct Runtime<'a, C: Console, M: Memory = NoMemory> {
    pub(super) program: &'a str,
    pub(super) scanner: Scanner<'a>,
    pub(super) console: C,
    pub(super) memory: M,
    pub(super) vars: Var,
    pub(super) gosubs: Stack<usize, MAX_GOSUB_DEPTH>,
    pub(super) fors: Stack<ForFrame, MAX_FOR_DEPTH>,
    pub(super) index: LineIndex<MAX_LINE_INDEXES>,
    pub(super) line_number: LineNumber,
    pub(super) depth: usize,
    pub(super) branch: bool,
    ended: bool,
}

/// Saved state of an active `FOR` loop.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ForFrame {
    /// Start of the line after the `FOR` statement.
    pub resume: usize,
    pub var: Ident,
    /// Inclusive upper bound.
    pub to: Integer,
}

#[derive(Debug, PartialEq)]
pub enum Event {
    /// The cycle budget ran out with more program left to run.
    Running,
    /// `END` executed or the program text ran out.
    Stopped,
    Error(Error),
}

impl<'a, C: Console> Runtime<'a, C, NoMemory> {
    pub fn new(program: &'a str, console: C) -> Runtime<'a, C, NoMemory> {
        Runtime::with_memory(program, console, NoMemory)
    }
}

impl<'a, C: Console, M: Memory> Runtime<'a, C, M> {
    pub fn with_memory(program: &'a str, console: C, memory: M) -> Runtime<'a, C, M> {
        Runtime {
            program,
            scanner: Scanner::new(program),
            console,
            memory,
            vars: Var::new(),
            gosubs: Stack::new("GOSUB STACK OVERFLOW"),
            fors: Stack::new("FOR STACK OVERFLOW"),
            index: LineIndex::new(),
            line_number: None,
            depth: 0,
            branch: false,
            ended: false,
        }
    }

    /// Rewinds to the first line. Stacks and the line index are
    /// emptied; variables keep their values.
    pub fn reset(&mut self) {
        self.scanner = Scanner::new(self.program);
        self.gosubs.clear();
        self.fors.clear();
        self.index.clear();
        self.line_number = None;
        self.depth = 0;
        self.branch = false;
        self.ended = false;
    }

    /// Replaces the program text and rewinds. Variables keep their values.
    pub fn load(&mut self, program: &'a str) {
        self.program = program;
        self.reset();
    }

    pub fn clear_variables(&mut self) {
        self.vars.clear();
    }

    pub fn is_finished(&self) -> bool {
        self.ended || self.scanner.is_finished()
    }

    /// Number of the line the next step will execute.
    pub fn current_line(&self) -> LineNumber {
        if self.is_finished() {
            None
        } else {
            self.scanner.number()
        }
    }

    /// Variable by letter index, `0` for `a` through `25` for `z`.
    /// Out of range indexes read as zero.
    pub fn get_variable(&self, index: usize) -> Integer {
        match Ident::from_index(index) {
            Some(ident) => self.vars.fetch(ident),
            None => 0,
        }
    }

    /// Out of range indexes are ignored.
    pub fn set_variable(&mut self, index: usize, value: Integer) {
        if let Some(ident) = Ident::from_index(index) {
            self.vars.store(ident, value);
        }
    }

    pub fn variable(&self, name: char) -> Option<Integer> {
        Ident::try_from(name).ok().map(|ident| self.vars.fetch(ident))
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn vars_mut(&mut self) -> &mut Var {
        &mut self.vars
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    pub fn line_index(&self) -> &LineIndex<MAX_LINE_INDEXES> {
        &self.index
    }

    pub fn into_parts(self) -> (C, M) {
        (self.console, self.memory)
    }

    /// Executes exactly one program line, including any statement
    /// nested after `THEN` or `ELSE`. Does nothing once finished.
    ///
    /// Error columns are byte offsets from the start of the line.
    /// A fatal error finishes the run. Stack overflow errors are
    /// reported with the cursor already on the following line, so
    /// stepping again continues as if the push had been dropped.
    pub fn step(&mut self) -> Result<()> {
        if self.is_finished() {
            return Ok(());
        }
        let line_start = self.scanner.position();
        self.line_number = None;
        self.depth = 0;
        self.branch = false;
        match self.line_statement() {
            Ok(()) => Ok(()),
            Err(error) => {
                if error.is_fatal() {
                    self.ended = true;
                }
                let mut column = error.column();
                if column != (0..0) {
                    column.start = column.start.saturating_sub(line_start);
                    column.end = column.end.saturating_sub(line_start);
                }
                Err(error
                    .in_line_number(self.line_number)
                    .in_column(&column))
            }
        }
    }

    /// Steps up to `cycles` times.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if self.is_finished() {
                return Event::Stopped;
            }
            if let Err(error) = self.step() {
                return Event::Error(error);
            }
        }
        if self.is_finished() {
            Event::Stopped
        } else {
            Event::Running
        }
    }

    fn line_statement(&mut self) -> Result<()> {
        let number = match self.scanner.number() {
            Some(number) => number,
            None => return Err(self.unexpected(Token::Literal(Literal::Integer(0)))),
        };
        self.line_number = Some(number);
        self.index.insert(number, self.scanner.position());
        self.scanner.advance();
        self.statement()
    }

    pub(super) fn end(&mut self) {
        self.ended = true;
    }

    pub(super) fn jump(&mut self, line_number: Integer) -> Result<()> {
        let pos = match self.index.find(line_number) {
            Some(pos) => pos,
            None => self.find_line(line_number)?,
        };
        self.scanner.goto(pos);
        Ok(())
    }

    /// Scans the program from the top for a line starting with `line_number`.
    fn find_line(&self, line_number: Integer) -> Result<usize> {
        let mut scanner = Scanner::new(self.program);
        loop {
            if scanner.number() == Some(line_number) {
                return Ok(scanner.position());
            }
            while !scanner.token().is_end_of_line() {
                scanner.advance();
            }
            if scanner.token() == Token::EndOfInput {
                return Err(error!(UndefinedLine));
            }
            scanner.advance();
        }
    }

    pub(super) fn accept(&mut self, token: Token) -> Result<()> {
        if self.scanner.token() == token {
            self.scanner.advance();
            Ok(())
        } else {
            Err(self.unexpected(token))
        }
    }

    pub(super) fn accept_ident(&mut self) -> Result<Ident> {
        match self.scanner.ident() {
            Some(ident) => {
                self.scanner.advance();
                Ok(ident)
            }
            None => Err(self.unexpected(Token::Ident(Ident::default()))),
        }
    }

    pub(super) fn accept_number(&mut self) -> Result<Integer> {
        match self.scanner.number() {
            Some(number) => {
                self.scanner.advance();
                Ok(number)
            }
            None => Err(self.unexpected(Token::Literal(Literal::Integer(0)))),
        }
    }

    /// Accepts the line terminator. After a `THEN` statement an
    /// `ELSE` clause also ends the statement and is skipped.
    pub(super) fn end_of_statement(&mut self) -> Result<()> {
        match self.scanner.token() {
            Token::Newline => {
                self.scanner.advance();
                Ok(())
            }
            Token::EndOfInput => Ok(()),
            Token::Word(Word::Else) if self.branch => {
                self.skip_to_end_of_line();
                Ok(())
            }
            _ => Err(self.unexpected(Token::Newline)),
        }
    }

    pub(super) fn skip_to_end_of_line(&mut self) {
        while !self.scanner.token().is_end_of_line() {
            self.scanner.advance();
        }
        self.scanner.advance();
    }

    pub(super) fn unexpected(&self, expected: Token) -> Error {
        let column = self.scanner.column();
        match self.scanner.token() {
            Token::Error(e) => error!(SyntaxError, ..&column; e.message()),
            _ => error!(SyntaxError, ..&column; expected.expected_message()),
        }
    }
}
