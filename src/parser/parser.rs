//! Parser state and the parsing entry point.
//!
//! The parser pulls tokens from the lexer on demand and keeps exactly one
//! token of lookahead. Expression handlers live in `expr`; which handler
//! runs for which token is decided by the shared operator table in
//! `lookups`.

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Lexer, tokens::{Token, TokenKind}},
    Position,
};

use super::{expr::parse_expr, lookups::BindingPower};

/// Deepest expression nesting accepted before parsing is aborted.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of further tokens
    lexer: Lexer,
    /// The lookahead token, not yet consumed
    current: Token,
    /// Current expression nesting depth
    depth: usize,
}

impl Parser {
    /// Creates a new Parser over `source`, reading the first token.
    ///
    /// # Arguments
    ///
    /// * `source` - Program text
    /// * `file` - Optional file name used in diagnostics
    pub fn new(source: &str, file: Option<String>) -> Result<Self, Error> {
        let mut lexer = Lexer::new(source, file);
        let current = lexer.next_token()?;

        Ok(Parser {
            lexer,
            current,
            depth: 0,
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: Option<Error>) -> Result<Token, Error> {
        if self.current.kind == expected_kind {
            return self.advance();
        }

        match error {
            Some(error) => Err(error),
            None if self.current.kind == TokenKind::EOF => {
                Err(Error::new(ErrorImpl::UnexpectedEndOfInput, self.get_position()))
            }
            None => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.current.value.clone(),
                },
                self.get_position(),
            )),
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Descends one nesting level, failing past [`MAX_NESTING_DEPTH`].
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parses a whole program into its syntax tree.
///
/// The source is parsed as one expression at the loosest binding power, so
/// a program is usually a `.` or `;` sequence of statements. Any input left
/// over once that expression ends is an error.
///
/// # Arguments
///
/// * `source` - Program text
/// * `file` - Optional file name used in diagnostics, `shell` when omitted
pub fn parse(source: &str, file: Option<String>) -> Result<Node, Error> {
    let mut parser = Parser::new(source, file)?;
    let program = parse_expr(&mut parser, BindingPower::Default)?;

    if !parser.has_tokens() {
        return Ok(program);
    }

    let token = parser.current_token();
    let error = match token.kind {
        TokenKind::CloseParen | TokenKind::CloseBracket => ErrorImpl::UnmatchedDelimiter {
            delimiter: token.value.clone(),
        },
        _ => ErrorImpl::UnexpectedToken {
            token: token.value.clone(),
        },
    };

    Err(Error::new(error, parser.get_position()))
}
