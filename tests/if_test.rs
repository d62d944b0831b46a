mod common;
use common::*;

#[test]
fn test_then_else() {
    assert_eq!(run("10 if 1 then print 1 else print 2"), "1\n");
    assert_eq!(run("10 if 0 then print 1 else print 2"), "2\n");
}

#[test]
fn test_false_without_else() {
    assert_eq!(run("10 if 0 then print 1\n20 print 3"), "3\n");
}

#[test]
fn test_else_after_assignment_is_skipped() {
    assert_eq!(
        run("10 a=5\n20 if a>3 then a=1 else a=2\n30 print a"),
        "1\n"
    );
}

#[test]
fn test_nested_if_takes_inner_else() {
    assert_eq!(run("10 if 1 then if 0 then print 1 else print 2"), "2\n");
}

#[test]
fn test_then_goto() {
    assert_eq!(
        run("10 if 1 then goto 30\n20 print 2\n30 print 3"),
        "3\n"
    );
}

#[test]
fn test_string_in_skipped_branch() {
    assert_eq!(
        run("10 if 0 then print \"else\" else print 2"),
        "2\n"
    );
}

#[test]
fn test_missing_then() {
    assert_eq!(
        run("10 if 1 print 2"),
        "?SYNTAX ERROR IN 10 (8..13); EXPECTED THEN\n"
    );
}
