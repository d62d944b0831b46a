use basic::lang::*;
mod common;
use common::*;

fn tokens(s: &str) -> Vec<Token> {
    Scanner::new(s).collect()
}

#[test]
fn test_six_digits_is_a_number() {
    assert_eq!(
        tokens("10 print 123456"),
        vec![
            Token::Literal(Literal::Integer(10)),
            Token::Word(Word::Print),
            Token::Literal(Literal::Integer(123456)),
        ]
    );
}

#[test]
fn test_seven_digits_is_an_error() {
    assert_eq!(
        tokens("10 print 1234567")[2],
        Token::Error(LexError::NumberTooLong)
    );
    assert_eq!(
        run("10 print 1234567"),
        "?SYNTAX ERROR IN 10 (9..16); NUMBER TOO LONG\n"
    );
}

#[test]
fn test_keywords_need_no_space() {
    assert_eq!(
        tokens("10 goto100"),
        vec![
            Token::Literal(Literal::Integer(10)),
            Token::Word(Word::Goto),
            Token::Literal(Literal::Integer(100)),
        ]
    );
}

#[test]
fn test_rem_hides_rest_of_line() {
    assert_eq!(
        tokens("10 rem hi \"there\n20 print"),
        vec![
            Token::Literal(Literal::Integer(10)),
            Token::Newline,
            Token::Literal(Literal::Integer(20)),
            Token::Word(Word::Print),
        ]
    );
}

#[test]
fn test_uppercase_is_illegal() {
    let t = tokens("10 PRINT");
    assert_eq!(
        t.iter()
            .filter(|t| **t == Token::Error(LexError::IllegalCharacter))
            .count(),
        5
    );
}

#[test]
fn test_string_literal() {
    let s = Scanner::new("\"abc\" x");
    assert_eq!(
        s.token(),
        Token::Literal(Literal::String(Span { start: 1, end: 4 }))
    );
    assert_eq!(s.string(40), Some("abc"));
    assert_eq!(s.column(), 0..5);
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        run("10 print \"abc\n20 end"),
        "?SYNTAX ERROR IN 10 (9..13); UNTERMINATED STRING\n"
    );
}

#[test]
fn test_string_running_off_the_end() {
    assert_eq!(
        run("10 print \"abc"),
        "?SYNTAX ERROR IN 10 (9..13); UNTERMINATED STRING\n"
    );
}
