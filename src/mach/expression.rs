use super::{Console, Memory, Operation, Runtime, MAX_EXPRESSION_DEPTH};
use crate::error;
use crate::lang::{Error, Integer, Literal, Operator, Token};

type Result<T> = std::result::Result<T, Error>;

// relation := expr (("<"|">"|"=") expr)*
// expr     := term (("+"|"-"|"&"|"|") term)*
// term     := factor (("*"|"/"|"%") factor)*
// factor   := number | "(" expr ")" | variable

impl<'a, C: Console, M: Memory> Runtime<'a, C, M> {
    /// Nonzero means true.
    pub(super) fn relation(&mut self) -> Result<Integer> {
        let mut lhs = self.expr()?;
        while let Some(op) = self.operator(Operation::is_relational) {
            let column = self.scanner.column();
            self.scanner.advance();
            let rhs = self.expr()?;
            lhs = Operation::binary(op, lhs, rhs).map_err(|e| e.in_column(&column))?;
        }
        Ok(lhs)
    }

    pub(super) fn expr(&mut self) -> Result<Integer> {
        let mut lhs = self.term()?;
        while let Some(op) = self.operator(Operation::is_additive) {
            let column = self.scanner.column();
            self.scanner.advance();
            let rhs = self.term()?;
            lhs = Operation::binary(op, lhs, rhs).map_err(|e| e.in_column(&column))?;
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Integer> {
        let mut lhs = self.factor()?;
        while let Some(op) = self.operator(Operation::is_multiplicative) {
            let column = self.scanner.column();
            self.scanner.advance();
            let rhs = self.factor()?;
            lhs = Operation::binary(op, lhs, rhs).map_err(|e| e.in_column(&column))?;
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Integer> {
        let column = self.scanner.column();
        match self.scanner.token() {
            Token::Literal(Literal::Integer(n)) => {
                self.scanner.advance();
                Ok(n)
            }
            Token::LParen => {
                if self.depth >= MAX_EXPRESSION_DEPTH {
                    return Err(error!(FormulaTooComplex, ..&column));
                }
                self.depth += 1;
                self.scanner.advance();
                let value = self.expr()?;
                self.accept(Token::RParen)?;
                self.depth -= 1;
                Ok(value)
            }
            Token::Ident(ident) => {
                self.scanner.advance();
                Ok(self.vars.fetch(ident))
            }
            Token::Error(e) => Err(error!(SyntaxError, ..&column; e.message())),
            _ => Err(error!(SyntaxError, ..&column; "EXPECTED EXPRESSION")),
        }
    }

    fn operator(&self, tier: fn(Operator) -> bool) -> Option<Operator> {
        match self.scanner.token() {
            Token::Operator(op) if tier(op) => Some(op),
            _ => None,
        }
    }
}
