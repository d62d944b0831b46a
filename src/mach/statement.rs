use super::{Console, ForFrame, Memory, Operation, Runtime, MAX_STRING_LEN};
use crate::error;
use crate::lang::{Column, Error, Literal, Operator, Token, Word};

type Result<T> = std::result::Result<T, Error>;

impl<'a, C: Console, M: Memory> Runtime<'a, C, M> {
    pub(super) fn statement(&mut self) -> Result<()> {
        let column = self.scanner.column();
        match self.scanner.token() {
            Token::Word(word) => {
                self.scanner.advance();
                self.for_word(word, column)
            }
            Token::Ident(_) => self.r#let(),
            Token::Newline | Token::EndOfInput => self.end_of_statement(),
            Token::Error(e) => Err(error!(SyntaxError, ..&column; e.message())),
            _ => Err(error!(SyntaxError, ..&column; "EXPECTED STATEMENT")),
        }
    }

    fn for_word(&mut self, word: Word, column: Column) -> Result<()> {
        use Word::*;
        let result = match word {
            Let => self.r#let(),
            Print => self.r#print(),
            If => self.r#if(),
            Goto => self.r#goto(),
            Gosub => self.r#gosub(),
            Return => self.r#return(),
            For => self.r#for(),
            Next => self.r#next(),
            Peek => self.r#peek(),
            Poke => self.r#poke(),
            End => {
                self.end();
                Ok(())
            }
            Call | Else | Rem | Then | To => {
                return Err(error!(SyntaxError, ..&column; "EXPECTED STATEMENT"))
            }
        };
        result.map_err(|e| {
            if e.column() == (0..0) {
                e.in_column(&column)
            } else {
                e
            }
        })
    }

    fn r#let(&mut self) -> Result<()> {
        let ident = self.accept_ident()?;
        self.accept(Token::Operator(Operator::Equal))?;
        let value = self.expr()?;
        self.vars.store(ident, value);
        self.end_of_statement()
    }

    fn r#print(&mut self) -> Result<()> {
        loop {
            match self.scanner.token() {
                Token::Newline | Token::EndOfInput => break,
                Token::Word(Word::Else) if self.branch => break,
                Token::Literal(Literal::String(_)) => {
                    if let Some(s) = self.scanner.string(MAX_STRING_LEN) {
                        self.console.print_text(s);
                    }
                    self.scanner.advance();
                }
                Token::Comma => {
                    self.console.print_text(" ");
                    self.scanner.advance();
                }
                Token::Semicolon => self.scanner.advance(),
                Token::Literal(Literal::Integer(_)) | Token::Ident(_) | Token::LParen => {
                    let n = self.expr()?;
                    self.console.print_number(n);
                }
                _ => return Err(self.unexpected(Token::Newline)),
            }
        }
        self.console.print_text("\n");
        self.end_of_statement()
    }

    fn r#if(&mut self) -> Result<()> {
        let condition = self.relation()?;
        self.accept(Token::Word(Word::Then))?;
        if condition != 0 {
            let branch = std::mem::replace(&mut self.branch, true);
            let result = self.statement();
            self.branch = branch;
            return result;
        }
        loop {
            match self.scanner.token() {
                Token::Word(Word::Else) => {
                    self.scanner.advance();
                    return self.statement();
                }
                Token::Newline => {
                    self.scanner.advance();
                    return Ok(());
                }
                Token::EndOfInput => return Ok(()),
                _ => self.scanner.advance(),
            }
        }
    }

    fn r#goto(&mut self) -> Result<()> {
        let column = self.scanner.column();
        let line_number = self.expr()?;
        self.jump(line_number).map_err(|e| e.in_column(&column))
    }

    fn r#gosub(&mut self) -> Result<()> {
        let column = self.scanner.column();
        let line_number = self.accept_number()?;
        self.end_of_statement()?;
        self.gosubs.push(self.scanner.position())?;
        self.jump(line_number).map_err(|e| e.in_column(&column))
    }

    fn r#return(&mut self) -> Result<()> {
        match self.gosubs.pop() {
            Some(pos) => {
                self.scanner.goto(pos);
                Ok(())
            }
            None => self.end_of_statement(),
        }
    }

    fn r#for(&mut self) -> Result<()> {
        let var = self.accept_ident()?;
        self.accept(Token::Operator(Operator::Equal))?;
        let from = self.expr()?;
        self.vars.store(var, from);
        self.accept(Token::Word(Word::To))?;
        let to = self.expr()?;
        self.end_of_statement()?;
        self.fors.push(ForFrame {
            resume: self.scanner.position(),
            var,
            to,
        })
    }

    fn r#next(&mut self) -> Result<()> {
        let column = self.scanner.column();
        let var = self.accept_ident()?;
        let frame = match self.fors.last() {
            Some(frame) if frame.var == var => *frame,
            _ => return self.end_of_statement(),
        };
        let value = Operation::sum(self.vars.fetch(var), 1).map_err(|e| e.in_column(&column))?;
        self.vars.store(var, value);
        if value <= frame.to {
            self.scanner.goto(frame.resume);
            Ok(())
        } else {
            self.fors.pop();
            self.end_of_statement()
        }
    }

    fn r#peek(&mut self) -> Result<()> {
        let address = self.expr()?;
        self.accept(Token::Comma)?;
        let var = self.accept_ident()?;
        self.end_of_statement()?;
        if let Some(value) = self.memory.peek(address) {
            self.vars.store(var, value);
        }
        Ok(())
    }

    fn r#poke(&mut self) -> Result<()> {
        let address = self.expr()?;
        self.accept(Token::Comma)?;
        let value = self.expr()?;
        self.end_of_statement()?;
        self.memory.poke(address, value);
        Ok(())
    }
}
