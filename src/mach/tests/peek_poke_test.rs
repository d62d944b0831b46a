use super::*;

#[test]
fn test_peek_and_poke_reach_memory() {
    let program = "10 poke 3, 7*6\n20 peek 3, a\n30 peek 99, b\n";
    let mut r = Runtime::with_memory(program, String::new(), Cells::default());
    r.set_variable(1, 5);
    assert_eq!(r.execute(10), Event::Stopped);
    assert_eq!(r.variable('a'), Some(42));
    assert_eq!(r.variable('b'), Some(5));
    assert_eq!(r.memory().writes, vec![(3, 42)]);
}

#[test]
fn test_no_memory_is_a_no_op() {
    let program = "10 a=9\n20 peek 0, a\n30 poke 0, 1\n40 print a\n";
    assert_eq!(run(program), "9\n");
}

#[test]
fn test_peek_requires_variable() {
    assert_eq!(
        run("10 peek 1, 2\n"),
        "?SYNTAX ERROR IN 10 (11..12); EXPECTED VARIABLE\n"
    );
}
