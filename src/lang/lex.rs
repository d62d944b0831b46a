use super::{token::*, Column, Integer};

/// Longest accepted numeric literal, in digits.
pub const MAX_NUMBER_LEN: usize = 6;

fn is_basic_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\r'
}

fn is_basic_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// ## Lazy one token lookahead scanner
///
/// The scanner never materializes a token list. It holds the byte
/// offset of the current token, the offset just past it, and the
/// token itself. Positions are plain offsets which may be saved
/// and later handed back to [`goto`](Scanner::goto).

#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    next: usize,
    token: Token,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        let mut scanner = Scanner {
            source,
            pos: 0,
            next: 0,
            token: Token::EndOfInput,
        };
        scanner.goto(0);
        scanner
    }

    /// Moves the cursor to a saved position and scans the token there.
    pub fn goto(&mut self, pos: usize) {
        self.pos = pos.min(self.source.len());
        self.token = self.scan();
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Byte range of the current lexeme.
    pub fn column(&self) -> Column {
        self.pos..self.next
    }

    pub fn is_finished(&self) -> bool {
        self.pos >= self.source.len() || self.token == Token::EndOfInput
    }

    pub fn advance(&mut self) {
        if self.is_finished() {
            return;
        }
        let source: &'a str = self.source;
        let bytes = source.as_bytes();
        self.pos = self.next;
        while self.pos < bytes.len() && is_basic_whitespace(bytes[self.pos]) {
            self.pos += 1;
        }
        self.token = self.scan();
        if self.token == Token::Word(Word::Rem) {
            let mut end = self.next;
            while end < bytes.len() && bytes[end] != b'\n' {
                end += 1;
            }
            self.pos = end;
            self.token = self.scan();
        }
    }

    pub fn number(&self) -> Option<Integer> {
        match self.token {
            Token::Literal(Literal::Integer(n)) => Some(n),
            _ => None,
        }
    }

    pub fn ident(&self) -> Option<Ident> {
        match self.token {
            Token::Ident(ident) => Some(ident),
            _ => None,
        }
    }

    /// Contents of the current string literal, truncated to at most
    /// `max_len` bytes without splitting a character.
    pub fn string(&self, max_len: usize) -> Option<&'a str> {
        match self.token {
            Token::Literal(Literal::String(span)) => {
                let mut end = span.end.min(span.start + max_len);
                while !self.source.is_char_boundary(end) {
                    end -= 1;
                }
                Some(&self.source[span.start..end])
            }
            _ => None,
        }
    }

    fn scan(&mut self) -> Token {
        let source: &'a str = self.source;
        let rest = &source.as_bytes()[self.pos..];
        let first = match rest.first() {
            Some(b) => *b,
            None => {
                self.next = self.pos;
                return Token::EndOfInput;
            }
        };
        if is_basic_digit(first) {
            return self.number_literal(rest);
        }
        if let Some(token) = Token::from_byte(first) {
            self.next = self.pos + 1;
            return token;
        }
        if first == b'"' {
            return self.string_literal(rest);
        }
        if let Some(word) = Word::from_prefix(rest) {
            self.next = self.pos + word.as_str().len();
            return Token::Word(word);
        }
        if first.is_ascii_lowercase() {
            self.next = self.pos + 1;
            if let Some(ident) = Ident::from_index((first - b'a') as usize) {
                return Token::Ident(ident);
            }
        }
        let mut len = 1;
        while len < rest.len() && is_continuation(rest[len]) {
            len += 1;
        }
        self.next = self.pos + len;
        Token::Error(LexError::IllegalCharacter)
    }

    fn number_literal(&mut self, rest: &[u8]) -> Token {
        let digits = rest.iter().take_while(|b| is_basic_digit(**b)).count();
        self.next = self.pos + digits;
        if digits > MAX_NUMBER_LEN {
            return Token::Error(LexError::NumberTooLong);
        }
        let value = rest[..digits]
            .iter()
            .fold(0, |acc: Integer, b| acc * 10 + Integer::from(b - b'0'));
        Token::Literal(Literal::Integer(value))
    }

    fn string_literal(&mut self, rest: &[u8]) -> Token {
        match rest[1..].iter().position(|b| *b == b'"' || *b == b'\n') {
            Some(len) if rest[1 + len] == b'"' => {
                let start = self.pos + 1;
                self.next = start + len + 1;
                Token::Literal(Literal::String(Span {
                    start,
                    end: start + len,
                }))
            }
            Some(len) => {
                self.next = self.pos + 1 + len;
                Token::Error(LexError::UnterminatedString)
            }
            None => {
                self.next = self.pos + rest.len();
                Token::Error(LexError::UnterminatedString)
            }
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        match self.token {
            Token::EndOfInput => None,
            token => {
                self.advance();
                Some(token)
            }
        }
    }
}
