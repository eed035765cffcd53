use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Int,
    Float,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,

    Assignment, // =
    PlusEquals, // +=
    LeftArrow,  // <-

    Dot,
    Semicolon,
    Colon,
    Question,
    Comma,
    At,

    Plus,
    Dash,
    Slash,
    Star,
}

impl TokenKind {
    /// The source spelling of fixed tokens, used in diagnostics.
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Int | TokenKind::Float => "number",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::PlusEquals => "+=",
            TokenKind::LeftArrow => "<-",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Comma => ",",
            TokenKind::At => "@",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One-line dump used by the `--tokens` mode of the command line tool.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Int,
            TokenKind::Float,
        ]) {
            format!("{} ({}) @{}", self.kind, self.value, self.span.start.0)
        } else {
            format!("{} () @{}", self.kind, self.span.start.0)
        }
    }
}
