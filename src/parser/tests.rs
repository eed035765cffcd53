//! Unit tests for the parser module.
//!
//! This module contains tests for parsing language constructs including:
//! - Operator precedence and associativity
//! - Sequencing with `.`, `;` and `,`
//! - Calls, groups and bracket lists
//! - Import and declaration markers
//! - Syntax errors

use crate::{
    ast::ast::{Node, Tag},
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::tokens::TokenKind,
    MK_FORM,
};

use super::{
    lookups::{BindingPower, OperatorRole, OPERATOR_TABLE},
    parser::{parse, Parser, MAX_NESTING_DEPTH},
};

fn id(name: &str) -> Node {
    Node::ident(name)
}

fn int(value: i64) -> Node {
    Node::Int(value)
}

fn parse_ok(source: &str) -> Node {
    parse(source, Some("test.sono".to_string())).unwrap()
}

fn parse_err(source: &str) -> ErrorImpl {
    parse(source, Some("test.sono".to_string()))
        .unwrap_err()
        .get_internal_error()
        .clone()
}

#[test]
fn test_operator_table_bands() {
    let bp = |kind| OPERATOR_TABLE.binding_power(kind);

    assert!(bp(TokenKind::Semicolon) < bp(TokenKind::Dot));
    assert!(bp(TokenKind::Dot) < bp(TokenKind::Assignment));
    assert_eq!(bp(TokenKind::Assignment), bp(TokenKind::PlusEquals));
    assert!(bp(TokenKind::Assignment) < bp(TokenKind::Question));
    assert_eq!(bp(TokenKind::Question), bp(TokenKind::Colon));
    assert!(bp(TokenKind::Question) < bp(TokenKind::Comma));
    assert!(bp(TokenKind::Comma) < bp(TokenKind::LeftArrow));
    assert!(bp(TokenKind::LeftArrow) < bp(TokenKind::Plus));
    assert_eq!(bp(TokenKind::Plus), bp(TokenKind::Dash));
    assert!(bp(TokenKind::Plus) < bp(TokenKind::Star));
    assert_eq!(bp(TokenKind::Star), bp(TokenKind::Slash));
    assert_eq!(bp(TokenKind::Identifier), BindingPower::Default);
}

#[test]
fn test_operator_table_roles() {
    let role = |kind| OPERATOR_TABLE.get_led(kind).map(|op| op.role);

    assert_eq!(role(TokenKind::Dot), Some(OperatorRole::Sequence));
    assert_eq!(role(TokenKind::Semicolon), Some(OperatorRole::Sequence));
    assert_eq!(role(TokenKind::Comma), Some(OperatorRole::Sequence));
    assert_eq!(role(TokenKind::Question), Some(OperatorRole::Conditional));
    assert_eq!(role(TokenKind::Plus), Some(OperatorRole::Infix));
    assert_eq!(role(TokenKind::At), None);

    assert!(OPERATOR_TABLE.starts_expression(TokenKind::Star));
    assert!(OPERATOR_TABLE.starts_expression(TokenKind::At));
    assert!(!OPERATOR_TABLE.starts_expression(TokenKind::CloseParen));
    assert!(!OPERATOR_TABLE.starts_expression(TokenKind::Plus));
}

#[test]
fn test_parser_lookahead() {
    let mut parser = Parser::new("a + b", None).unwrap();

    assert_eq!(parser.current_token_kind(), TokenKind::Identifier);
    assert_eq!(parser.advance().unwrap().value, "a");
    assert_eq!(parser.current_token_kind(), TokenKind::Plus);
    assert!(parser.expect(TokenKind::Int).is_err());
    assert!(parser.expect(TokenKind::Plus).is_ok());
    assert!(parser.has_tokens());
    parser.advance().unwrap();
    assert!(!parser.has_tokens());
}

#[test]
fn test_parse_literals() {
    assert_eq!(parse_ok("1"), int(1));
    assert_eq!(parse_ok("1.5"), Node::Float(1.5));
    assert_eq!(parse_ok("'hi there'"), Node::string("hi there"));
}

#[test]
fn test_parse_identifier_case() {
    assert_eq!(parse_ok("Bc"), id("bc"));
    assert_eq!(parse_ok("SAMPLERATE"), Node::Ident("samplerate".to_string()));
}

#[test]
fn test_parse_left_associative() {
    assert_eq!(
        parse_ok("a+b-c"),
        MK_FORM!(Tag::Subtract, MK_FORM!(Tag::Add, id("a"), id("b")), id("c"))
    );
    assert_eq!(
        parse_ok("a/b*c"),
        MK_FORM!(Tag::Multiply, MK_FORM!(Tag::Divide, id("a"), id("b")), id("c"))
    );
}

#[test]
fn test_parse_multiplicative_binds_tighter() {
    assert_eq!(
        parse_ok("a+b*c"),
        MK_FORM!(Tag::Add, id("a"), MK_FORM!(Tag::Multiply, id("b"), id("c")))
    );
}

#[test]
fn test_parse_assignment_is_looser_than_comma() {
    assert_eq!(
        parse_ok("a = 1, 2"),
        MK_FORM!(Tag::Assign, id("a"), MK_FORM!(Tag::Comma, int(1), int(2)))
    );
    assert_eq!(
        parse_ok("a += b + 1"),
        MK_FORM!(Tag::AddAssign, id("a"), MK_FORM!(Tag::Add, id("b"), int(1)))
    );
}

#[test]
fn test_parse_flat_sequences() {
    assert_eq!(
        parse_ok("a,b,c"),
        MK_FORM!(Tag::Comma, id("a"), id("b"), id("c"))
    );
    assert_eq!(
        parse_ok("a.b.c"),
        MK_FORM!(Tag::Period, id("a"), id("b"), id("c"))
    );
    assert_eq!(
        parse_ok("a;b;c;"),
        MK_FORM!(Tag::Semicolon, id("a"), id("b"), id("c"))
    );
}

#[test]
fn test_parse_trailing_separator_is_absorbed() {
    assert_eq!(parse_ok("a."), MK_FORM!(Tag::Period, id("a")));
    assert_eq!(parse_ok("a,b,"), MK_FORM!(Tag::Comma, id("a"), id("b")));

    // A looser separator may follow a trailing one
    assert_eq!(
        parse_ok("a.;b"),
        MK_FORM!(Tag::Semicolon, MK_FORM!(Tag::Period, id("a")), id("b"))
    );
    assert_eq!(
        parse_ok("(a.)"),
        MK_FORM!(Tag::Paren, MK_FORM!(Tag::Period, id("a")))
    );
}

#[test]
fn test_parse_error_operator_after_trailing_separator() {
    assert_eq!(parse_err("a. + b"), ErrorImpl::MissingOperand { operator: "+".to_string() });
    assert_eq!(parse_err("a., b"), ErrorImpl::MissingOperand { operator: ",".to_string() });
    assert_eq!(parse_err("a. = b"), ErrorImpl::MissingOperand { operator: "=".to_string() });
    assert_eq!(parse_err("a. ? b"), ErrorImpl::MissingOperand { operator: "?".to_string() });
    assert_eq!(parse_err("x = 1. + 2"), ErrorImpl::MissingOperand { operator: "+".to_string() });
    assert_eq!(parse_err("a; . b"), ErrorImpl::MissingOperand { operator: ".".to_string() });

    let error = parse("a. + b", None).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_parse_semicolon_is_looser_than_period() {
    assert_eq!(
        parse_ok("a.b;c"),
        MK_FORM!(Tag::Semicolon, MK_FORM!(Tag::Period, id("a"), id("b")), id("c"))
    );
    assert_eq!(
        parse_ok("a;b.c"),
        MK_FORM!(Tag::Semicolon, id("a"), MK_FORM!(Tag::Period, id("b"), id("c")))
    );
}

#[test]
fn test_parse_call_and_group() {
    assert_eq!(parse_ok("x()"), MK_FORM!(Tag::Paren, id("x")));
    assert_eq!(parse_ok("f(a)"), MK_FORM!(Tag::Paren, id("f"), id("a")));
    assert_eq!(
        parse_ok("f(a, b)"),
        MK_FORM!(Tag::Paren, id("f"), MK_FORM!(Tag::Comma, id("a"), id("b")))
    );
    assert_eq!(parse_ok("(a)"), MK_FORM!(Tag::Paren, id("a")));

    // Only an adjacent `(` makes a call
    assert_eq!(parse_err("f (a)"), ErrorImpl::UnexpectedToken { token: "(".to_string() });
    assert_eq!(
        parse_ok("f, (a)"),
        MK_FORM!(Tag::Comma, id("f"), MK_FORM!(Tag::Paren, id("a")))
    );
    assert_eq!(
        parse_ok("(a+b)*c"),
        MK_FORM!(
            Tag::Multiply,
            MK_FORM!(Tag::Paren, MK_FORM!(Tag::Add, id("a"), id("b"))),
            id("c")
        )
    );
}

#[test]
fn test_parse_brackets() {
    assert_eq!(parse_ok("[]"), MK_FORM!(Tag::Bracket));
    assert_eq!(parse_ok("[left]"), MK_FORM!(Tag::Bracket, id("left")));
    assert_eq!(
        parse_ok("[a, b]"),
        MK_FORM!(Tag::Bracket, MK_FORM!(Tag::Comma, id("a"), id("b")))
    );
}

#[test]
fn test_parse_import() {
    assert_eq!(parse_ok("@'math'"), MK_FORM!(Tag::Import, Node::string("math")));
}

#[test]
fn test_parse_declaration() {
    assert_eq!(
        parse_ok("*phase = 0"),
        MK_FORM!(Tag::Assign, MK_FORM!(Tag::Declare, id("phase")), int(0))
    );
}

#[test]
fn test_parse_conditional() {
    assert_eq!(
        parse_ok("a ? b : c"),
        MK_FORM!(Tag::Question, id("a"), MK_FORM!(Tag::Colon, id("b"), id("c")))
    );
    assert_eq!(
        parse_ok("x = a ? b"),
        MK_FORM!(Tag::Assign, id("x"), MK_FORM!(Tag::Question, id("a"), id("b")))
    );
}

#[test]
fn test_parse_binding() {
    assert_eq!(
        parse_ok("volume <- range, x"),
        MK_FORM!(
            Tag::Comma,
            MK_FORM!(Tag::Bind, id("volume"), id("range")),
            id("x")
        )
    );
}

#[test]
fn test_parse_nesting_limit() {
    let depth = MAX_NESTING_DEPTH + 10;
    let source = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(
        parse_err(&source),
        ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        }
    );

    let depth = MAX_NESTING_DEPTH / 2;
    let source = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_ok(&source).depth(), depth + 1);
}

#[test]
fn test_parse_error_empty_program() {
    assert_eq!(parse_err(""), ErrorImpl::UnexpectedEndOfInput);
    assert_eq!(parse_err("   // nothing here"), ErrorImpl::UnexpectedEndOfInput);
}

#[test]
fn test_parse_error_missing_operand() {
    assert_eq!(parse_err("1 +"), ErrorImpl::MissingOperand { operator: "+".to_string() });
    assert_eq!(parse_err("= 2"), ErrorImpl::MissingOperand { operator: "=".to_string() });
    assert_eq!(parse_err("a * )"), ErrorImpl::MissingOperand { operator: "*".to_string() });
    assert_eq!(parse_err("a..b"), ErrorImpl::MissingOperand { operator: ".".to_string() });
    assert_eq!(parse_err("a,,b"), ErrorImpl::MissingOperand { operator: ",".to_string() });
}

#[test]
fn test_parse_error_unclosed_delimiter() {
    let error = parse("x = (1 + 2", None).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnclosedDelimiter {
            delimiter: "(".to_string(),
            expected: ")".to_string()
        }
    );
    assert_eq!(error.get_position().0, 4);

    assert_eq!(
        parse_err("f(a"),
        ErrorImpl::UnclosedDelimiter {
            delimiter: "(".to_string(),
            expected: ")".to_string()
        }
    );
    assert_eq!(
        parse_err("[a"),
        ErrorImpl::UnclosedDelimiter {
            delimiter: "[".to_string(),
            expected: "]".to_string()
        }
    );
}

#[test]
fn test_parse_error_mismatched_delimiter() {
    assert!(matches!(
        parse_err("(a]"),
        ErrorImpl::UnexpectedTokenDetailed { .. }
    ));
}

#[test]
fn test_parse_error_unmatched_delimiter() {
    assert_eq!(parse_err("a)"), ErrorImpl::UnmatchedDelimiter { delimiter: ")".to_string() });
    assert_eq!(parse_err("a]"), ErrorImpl::UnmatchedDelimiter { delimiter: "]".to_string() });
}

#[test]
fn test_parse_error_unexpected_token() {
    assert_eq!(parse_err("a b"), ErrorImpl::UnexpectedToken { token: "b".to_string() });
    assert!(matches!(parse_err("()"), ErrorImpl::UnexpectedTokenDetailed { .. }));
}

#[test]
fn test_parse_error_markers() {
    // `@` joined to a name is part of the identifier
    assert_eq!(parse_ok("@math"), id("@math"));
    assert!(matches!(parse_err("@ math"), ErrorImpl::UnexpectedTokenDetailed { .. }));
    assert!(matches!(parse_err("*1 = 2"), ErrorImpl::UnexpectedTokenDetailed { .. }));
}

#[test]
fn test_parse_error_from_lexer() {
    let error = parse("a = 'open", None).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(error.get_internal_error(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_parse_error_integer_overflow() {
    let error = parse("99999999999999999999", None).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(error.get_error_name(), "NumberParseError");
}
