use repl_input::api::check;
use repl_input::stack::Entry;
use repl_input::{InputValidator, Validation};

#[test]
fn test_balanced_lines_are_complete() {
    for line in ["", "x;", "f(a, b);", "int v[3] = {1, 2, 3};", "{[()]}", "g(h(i(j)))"] {
        let mut validator = InputValidator::new();
        assert_eq!(validator.validate(line), Validation::Complete, "line: {line}");
        assert_eq!(validator.depth(), 0, "line: {line}");
    }
}

#[test]
fn test_paren_across_lines() {
    let mut validator = InputValidator::new();
    assert_eq!(validator.validate("("), Validation::Incomplete);
    assert_eq!(validator.depth(), 1);
    assert_eq!(validator.validate(")"), Validation::Complete);
    assert_eq!(validator.depth(), 0);
}

#[test]
fn test_block_comment_across_lines() {
    let mut validator = InputValidator::new();
    assert_eq!(validator.validate("/*"), Validation::Incomplete);
    assert_eq!(validator.open_entries(), &[Entry::Comment]);
    assert_eq!(validator.validate("*/"), Validation::Complete);
    assert!(validator.open_entries().is_empty());
}

#[test]
fn test_lone_close_is_mismatch() {
    let mut validator = InputValidator::new();
    assert_eq!(validator.validate(")"), Validation::Mismatch);
}

#[test]
fn test_bracket_in_string_is_ignored() {
    let mut validator = InputValidator::new();
    assert_eq!(validator.validate("\"(\""), Validation::Complete);
}

#[test]
fn test_reset_after_mismatch() {
    let mut validator = InputValidator::new();
    assert_eq!(validator.validate("(}"), Validation::Mismatch);
    validator.reset();
    assert_eq!(validator.validate("{}"), Validation::Complete);
    assert_eq!(validator.input(), "{}");
}

#[test]
fn test_buffer_joins_lines() {
    let mut validator = InputValidator::new();
    assert_eq!(validator.validate("{"), Validation::Incomplete);
    assert_eq!(validator.validate("}"), Validation::Complete);
    assert_eq!(validator.input(), "{\n}");
}

#[test]
fn test_reset_is_idempotent() {
    let mut once = InputValidator::new();
    once.validate("( /* x");
    once.reset();

    let mut twice = InputValidator::new();
    twice.validate("( /* x");
    twice.reset();
    twice.reset();

    assert_eq!(once.snapshot(), twice.snapshot());
    assert_eq!(twice.validate("("), Validation::Incomplete);
    assert_eq!(twice.input(), "(");
}

#[test]
fn test_repl_session() {
    let mut validator = InputValidator::new();
    let mut dispatched = Vec::new();

    for line in ["int f(int x) {", "  /* square", "     it */", "  return x * x;", "}", "f(3);"] {
        if validator.validate(line) == Validation::Complete {
            dispatched.push(validator.take_input());
        }
    }

    assert_eq!(
        dispatched,
        vec![
            "int f(int x) {\n  /* square\n     it */\n  return x * x;\n}".to_string(),
            "f(3);".to_string(),
        ]
    );
}

#[test]
fn test_check_whole_text() {
    assert_eq!(check("while (x) {\n  x--;\n}"), Validation::Complete);
    assert_eq!(check("while (x) {\n  x--;"), Validation::Incomplete);
    assert_eq!(check("s = \"unterminated"), Validation::Incomplete);
    assert_eq!(check("a[0) = 1;"), Validation::Mismatch);
}
