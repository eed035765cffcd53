use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexing or parsing failure together with where it happened.
///
/// Errors are raised at the point of detection and abort the parse; the
/// first one wins.
#[derive(Error, Debug, Clone)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Which stage of the front end rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::NumberParseError { .. } => ErrorKind::Lex,
            _ => ErrorKind::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::MissingOperand { .. } => "MissingOperand",
            ErrorImpl::UnclosedDelimiter { .. } => "UnclosedDelimiter",
            ErrorImpl::UnmatchedDelimiter { .. } => "UnmatchedDelimiter",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literal is never closed, add a matching `'`",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss an operator?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEndOfInput => {
                ErrorTip::Suggestion(String::from("Input ended where an expression was expected"))
            }
            ErrorImpl::MissingOperand { operator } => {
                ErrorTip::Suggestion(format!("Operator `{}` is missing an operand", operator))
            }
            ErrorImpl::UnclosedDelimiter { delimiter, expected } => ErrorTip::Suggestion(
                format!("`{}` opened here is never closed, expected `{}`", delimiter, expected),
            ),
            ErrorImpl::UnmatchedDelimiter { delimiter } => {
                ErrorTip::Suggestion(format!("`{}` has no matching opening delimiter", delimiter))
            }
            ErrorImpl::NestingTooDeep { limit } => {
                ErrorTip::Suggestion(format!("Expressions may nest at most {} levels deep", limit))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexing
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },

    // Parsing
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("operator {operator:?} is missing an operand")]
    MissingOperand { operator: String },
    #[error("unclosed delimiter {delimiter:?}, expected {expected:?}")]
    UnclosedDelimiter { delimiter: String, expected: String },
    #[error("unmatched delimiter {delimiter:?}")]
    UnmatchedDelimiter { delimiter: String },
    #[error("expression nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}
