pub use super::ident::Ident;
use super::Integer;

/// Keywords in match order. Matching is by case-sensitive prefix
/// and the first entry wins.
const KEYWORDS: [(&str, Word); 16] = [
    ("let", Word::Let),
    ("print", Word::Print),
    ("if", Word::If),
    ("then", Word::Then),
    ("else", Word::Else),
    ("for", Word::For),
    ("to", Word::To),
    ("next", Word::Next),
    ("goto", Word::Goto),
    ("gosub", Word::Gosub),
    ("return", Word::Return),
    ("call", Word::Call),
    ("rem", Word::Rem),
    ("peek", Word::Peek),
    ("poke", Word::Poke),
    ("end", Word::End),
];

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    EndOfInput,
    Error(LexError),
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(Ident),
    LParen,
    RParen,
    Comma,
    Semicolon,
    Hash,
    Newline,
}

impl Token {
    /// Single byte operators and punctuation.
    pub fn from_byte(byte: u8) -> Option<Token> {
        use Operator::*;
        Some(match byte {
            b'\n' => Token::Newline,
            b',' => Token::Comma,
            b';' => Token::Semicolon,
            b'+' => Token::Operator(Plus),
            b'-' => Token::Operator(Minus),
            b'&' => Token::Operator(And),
            b'|' => Token::Operator(Or),
            b'*' => Token::Operator(Multiply),
            b'/' => Token::Operator(Divide),
            b'%' => Token::Operator(Modulus),
            b'(' => Token::LParen,
            b'#' => Token::Hash,
            b')' => Token::RParen,
            b'<' => Token::Operator(Less),
            b'>' => Token::Operator(Greater),
            b'=' => Token::Operator(Equal),
            _ => return None,
        })
    }

    pub fn is_end_of_line(&self) -> bool {
        matches!(self, Token::Newline | Token::EndOfInput)
    }

    /// Message used when this token was expected and something else was found.
    pub fn expected_message(&self) -> &'static str {
        match self {
            Token::EndOfInput | Token::Newline => "EXPECTED END OF LINE",
            Token::Error(_) => "UNEXPECTED TOKEN",
            Token::Literal(_) => "EXPECTED LINE NUMBER",
            Token::Word(Word::Then) => "EXPECTED THEN",
            Token::Word(Word::To) => "EXPECTED TO",
            Token::Word(_) => "EXPECTED RESERVED WORD",
            Token::Operator(Operator::Equal) => "EXPECTED EQUAL",
            Token::Operator(_) => "EXPECTED OPERATOR",
            Token::Ident(_) => "EXPECTED VARIABLE",
            Token::LParen => "EXPECTED LEFT PARENTHESIS",
            Token::RParen => "EXPECTED RIGHT PARENTHESIS",
            Token::Comma => "EXPECTED COMMA",
            Token::Semicolon => "EXPECTED SEMICOLON",
            Token::Hash => "EXPECTED HASH",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            EndOfInput => Ok(()),
            Error(e) => write!(f, "{}", e),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Semicolon => write!(f, ";"),
            Hash => write!(f, "#"),
            Newline => writeln!(f),
        }
    }
}

/// Byte range of a string payload, quotes excluded.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Literal {
    Integer(Integer),
    String(Span),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::String(span) => write!(f, "\"{}..{}\"", span.start, span.end),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LexError {
    IllegalCharacter,
    NumberTooLong,
    UnterminatedString,
}

impl LexError {
    pub fn message(self) -> &'static str {
        match self {
            LexError::IllegalCharacter => "ILLEGAL CHARACTER",
            LexError::NumberTooLong => "NUMBER TOO LONG",
            LexError::UnterminatedString => "UNTERMINATED STRING",
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Let,
    Print,
    If,
    Then,
    Else,
    For,
    To,
    Next,
    Goto,
    Gosub,
    Return,
    Call,
    Rem,
    Peek,
    Poke,
    End,
}

impl Word {
    /// Finds the keyword that prefixes `s`, if any.
    pub fn from_prefix(s: &[u8]) -> Option<Word> {
        KEYWORDS
            .iter()
            .find(|(keyword, _)| s.starts_with(keyword.as_bytes()))
            .map(|(_, word)| *word)
    }

    pub fn as_str(self) -> &'static str {
        use Word::*;
        match self {
            Let => "let",
            Print => "print",
            If => "if",
            Then => "then",
            Else => "else",
            For => "for",
            To => "to",
            Next => "next",
            Goto => "goto",
            Gosub => "gosub",
            Return => "return",
            Call => "call",
            Rem => "rem",
            Peek => "peek",
            Poke => "poke",
            End => "end",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Divide,
    Modulus,
    Plus,
    Minus,
    And,
    Or,
    Less,
    Greater,
    Equal,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "%"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            And => write!(f, "&"),
            Or => write!(f, "|"),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
            Equal => write!(f, "="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prefix() {
        assert_eq!(Word::from_prefix(b"rem hello"), Some(Word::Rem));
        assert_eq!(Word::from_prefix(b"gosub 100"), Some(Word::Gosub));
        assert_eq!(Word::from_prefix(b"goto100"), Some(Word::Goto));
        assert_eq!(Word::from_prefix(b"pickles"), None);
        assert_eq!(Word::from_prefix(b"PRINT"), None);
    }

    #[test]
    fn test_from_byte() {
        assert_eq!(Token::from_byte(b'%'), Some(Token::Operator(Operator::Modulus)));
        assert_eq!(Token::from_byte(b'\n'), Some(Token::Newline));
        assert_eq!(Token::from_byte(b'!'), None);
    }
}
