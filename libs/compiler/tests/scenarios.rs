use callc::{compile, compile_with, CompileError, Stage};
use callc_parser::ParseErrorKind;
use config::constants::{CompilerConfig, LexMode};
use pretty_assertions::assert_eq;

fn parse_error(source: &str) -> ParseErrorKind {
    match compile(source) {
        Err(CompileError::Parse(err)) => err.kind,
        other => panic!("expected parse error for {source:?}, got {other:?}"),
    }
}

#[test]
fn compiles_nested_call() {
    assert_eq!(
        compile("(add 10 (subtract 10 6))").unwrap(),
        "add(10, subtract(10, 6));"
    );
}

#[test]
fn compiles_zero_argument_call() {
    assert_eq!(compile("(foo)").unwrap(), "foo();");
}

#[test]
fn compiles_several_arguments() {
    assert_eq!(compile("(a 1 2 3)").unwrap(), "a(1, 2, 3);");
}

#[test]
fn compiles_nested_zero_argument_calls() {
    assert_eq!(compile("(a (b) (c))").unwrap(), "a(b(), c());");
}

#[test]
fn compiles_each_top_level_call_to_its_own_statement() {
    assert_eq!(compile("(a 1) (b (c 2))").unwrap(), "a(1);\nb(c(2));");
}

#[test]
fn sibling_after_nested_call_stays_in_outer_call() {
    assert_eq!(compile("(a (b 1) 2 (c))").unwrap(), "a(b(1), 2, c());");
}

#[test]
fn extra_spaces_do_not_change_output() {
    assert_eq!(
        compile("   (  add   10 (subtract 10   6 ) )  ").unwrap(),
        "add(10, subtract(10, 6));"
    );
}

#[test]
fn empty_source_compiles_to_nothing() {
    assert_eq!(compile("").unwrap(), "");
    assert_eq!(compile("   ").unwrap(), "");
}

#[test]
fn top_level_number_is_emitted_bare() {
    assert_eq!(compile("42 (f)").unwrap(), "42\nf();");
}

#[test]
fn unknown_character_truncates_input() {
    // The lexer stops at '#'; the unterminated tail never reaches the parser.
    assert_eq!(compile("(a 1) # (b").unwrap(), "a(1);");
    assert_eq!(compile("(a 1)\n(b 2)").unwrap(), "a(1);");
}

#[test]
fn truncation_inside_a_call_leaves_it_unterminated() {
    assert!(matches!(parse_error("(a 1 -2)"), ParseErrorKind::UnexpectedEof { .. }));
}

#[test]
fn unterminated_call_is_unexpected_end_of_input() {
    let err = compile("(add 10").unwrap_err();
    assert_eq!(err.stage(), Stage::Parse);
    assert!(err.to_string().contains("unexpected end of input"), "{err}");
}

#[test]
fn numeric_callee_is_unexpected_token() {
    let err = compile("(1 2)").unwrap_err();
    assert!(err.to_string().contains("unexpected token '1'"), "{err}");
    assert_eq!(
        parse_error("(1 2)"),
        ParseErrorKind::UnexpectedToken {
            found: "1".to_string(),
            expected: "function name".to_string(),
        }
    );
}

#[test]
fn stray_closing_paren_is_unexpected_token() {
    assert!(matches!(
        parse_error("(a))"),
        ParseErrorKind::UnexpectedToken { found, .. } if found == ")"
    ));
}

#[test]
fn strict_mode_rejects_trailing_garbage() {
    let config = CompilerConfig::default().strict();
    let err = compile_with("(a 1) # (b", &config).unwrap_err();
    assert_eq!(err.stage(), Stage::Lex);
    assert!(!err.is_internal());
}

#[test]
fn strict_mode_accepts_clean_input() {
    let config = CompilerConfig::new(LexMode::Strict, 16).unwrap();
    assert_eq!(compile_with("(a (b))", &config).unwrap(), "a(b());");
}

#[test]
fn failed_compile_has_no_partial_output() {
    // The first statement is fine; the second is not.
    assert!(compile("(a 1) (b").is_err());
}
