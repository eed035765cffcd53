//! Utility macros for the front end.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed tokens
//! - `MK_FORM!` - Creates a tagged Form node
//!
//! These macros reduce boilerplate in the lexer, the parser and the tests.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for fixed-spelling tokens.
///
/// Generates a handler function that produces a token with the given kind
/// and advances the lexer position by the token's length.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _len: usize| {
            let span = lexer.span_of($value.len());
            lexer.advance_n($value.len());
            Ok(Some(MK_TOKEN!($kind, String::from($value), span)))
        }
    };
}

/// Creates a Form node from a tag and its children.
///
/// # Example
///
/// ```
/// use sonoparse::{MK_FORM, ast::ast::{Node, Tag}};
///
/// let sum = MK_FORM!(Tag::Add, Node::Int(1), Node::ident("a"));
/// assert_eq!(sum.to_string(), "['+', ['int', 1], 'a']");
/// ```
#[macro_export]
macro_rules! MK_FORM {
    ($tag:expr $(, $child:expr)* $(,)?) => {
        $crate::ast::ast::Node::Form($tag, vec![$($child),*])
    };
}
