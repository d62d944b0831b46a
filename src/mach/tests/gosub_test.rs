use super::*;

#[test]
fn test_gosub_return() {
    let program = "\
10 gosub 100
20 print \"world\"
90 end
100 print \"hello\";
110 return
";
    assert_eq!(run(program), "hello\nworld\n");
}

#[test]
fn test_nested_returns_unwind_in_order() {
    let program = "\
10 gosub 100
20 print 1
30 end
100 gosub 200
110 print 2
120 return
200 gosub 300
210 print 3
220 return
300 print 4
310 return
";
    assert_eq!(run(program), "4\n3\n2\n1\n");
}

#[test]
fn test_return_without_gosub_continues() {
    assert_eq!(run("10 return\n20 print 7\n"), "7\n");
}

#[test]
fn test_overflow_can_be_continued() {
    let program = "10 gosub 10\n20 print d\n";
    let mut r = Runtime::new(program, String::new());
    let mut depth = 0;
    let error = loop {
        match r.step() {
            Ok(()) => depth += 1,
            Err(error) => break error,
        }
    };
    assert_eq!(depth, 10);
    assert_eq!(
        error.to_string(),
        "OUT OF MEMORY IN 10 (3..8); GOSUB STACK OVERFLOW"
    );
    assert!(!error.is_fatal());
    assert!(!r.is_finished());
    assert_eq!(r.current_line(), Some(20));
    r.set_variable(3, 42);
    assert_eq!(r.execute(10), Event::Stopped);
    assert_eq!(r.console(), "42\n");
}

#[test]
fn test_gosub_needs_literal_line() {
    assert_eq!(
        run("10 gosub a\n"),
        "?SYNTAX ERROR IN 10 (9..10); EXPECTED LINE NUMBER\n"
    );
}
