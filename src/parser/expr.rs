use crate::{
    ast::ast::{Node, Tag},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{BindingPower, Operator, OPERATOR_TABLE},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Node, Error> {
    parser.enter()?;

    // First parse NUD
    let nud = match OPERATOR_TABLE.get_nud(parser.current_token_kind()) {
        Some(nud) => nud,
        None => return Err(missing_expression(parser)),
    };

    let mut left = nud(parser)?;

    // Keep folding while the next operator binds tighter than the caller
    while let Some(operator) = OPERATOR_TABLE.get_led(parser.current_token_kind()) {
        if operator.binding_power <= bp {
            break;
        }

        left = (operator.led)(parser, left, operator)?;
    }

    parser.leave();
    Ok(left)
}

fn missing_expression(parser: &Parser) -> Error {
    let token = parser.current_token();
    let error = match token.kind {
        TokenKind::EOF => ErrorImpl::UnexpectedEndOfInput,
        kind if OPERATOR_TABLE.get_led(kind).is_some() => ErrorImpl::MissingOperand {
            operator: token.value.clone(),
        },
        _ => ErrorImpl::UnexpectedTokenDetailed {
            token: token.value.clone(),
            message: String::from("expected an expression"),
        },
    };

    Error::new(error, parser.get_position())
}

/// Fails unless the current token can begin the operand of `operator`.
fn expect_operand(parser: &Parser, operator: &Token) -> Result<(), Error> {
    if OPERATOR_TABLE.starts_expression(parser.current_token_kind()) {
        return Ok(());
    }

    Err(Error::new(
        ErrorImpl::MissingOperand {
            operator: operator.value.clone(),
        },
        operator.span.start.clone(),
    ))
}

/// Consumes the delimiter closing `open`.
fn expect_closing(parser: &mut Parser, open: &Token, close: TokenKind) -> Result<Token, Error> {
    let error = match parser.current_token_kind() {
        TokenKind::EOF => Error::new(
            ErrorImpl::UnclosedDelimiter {
                delimiter: open.value.clone(),
                expected: close.symbol().to_string(),
            },
            open.span.start.clone(),
        ),
        _ => Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: format!("expected `{}` to close `{}`", close.symbol(), open.value),
            },
            parser.get_position(),
        ),
    };

    parser.expect_error(close, Some(error))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.advance()?;

    let number_error = || {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    };

    match token.kind {
        TokenKind::Int => token.value.parse().map(Node::Int).map_err(|_| number_error()),
        TokenKind::Float => token.value.parse().map(Node::Float).map_err(|_| number_error()),
        TokenKind::String => Ok(Node::Str(token.value.clone())),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

/// An identifier, or a call when `(` follows it with no space between.
pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Node, Error> {
    let name = parser.expect(TokenKind::Identifier)?;
    let head = Node::ident(&name.value);

    let next = parser.current_token();
    if next.kind != TokenKind::OpenParen || next.span.start.0 != name.span.end.0 {
        return Ok(head);
    }

    let open = parser.advance()?;

    if parser.current_token_kind() == TokenKind::CloseParen {
        parser.advance()?;
        return Ok(Node::Form(Tag::Paren, vec![head]));
    }

    let arguments = parse_expr(parser, BindingPower::Default)?;
    expect_closing(parser, &open, TokenKind::CloseParen)?;

    Ok(Node::Form(Tag::Paren, vec![head, arguments]))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, Error> {
    let open = parser.advance()?;
    let inner = parse_expr(parser, BindingPower::Default)?;
    expect_closing(parser, &open, TokenKind::CloseParen)?;

    Ok(Node::Form(Tag::Paren, vec![inner]))
}

pub fn parse_bracket_expr(parser: &mut Parser) -> Result<Node, Error> {
    let open = parser.advance()?;

    if parser.current_token_kind() == TokenKind::CloseBracket {
        parser.advance()?;
        return Ok(Node::Form(Tag::Bracket, vec![]));
    }

    let inner = parse_expr(parser, BindingPower::Default)?;
    expect_closing(parser, &open, TokenKind::CloseBracket)?;

    Ok(Node::Form(Tag::Bracket, vec![inner]))
}

/// `@'path#symbols'`
pub fn parse_import_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance()?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected a module path string after `@`"),
        },
        parser.get_position(),
    );
    let path = parser.expect_error(TokenKind::String, Some(error))?;

    Ok(Node::Form(Tag::Import, vec![Node::Str(path.value)]))
}

/// `*name`, marking the declaration of `name`
pub fn parse_declaration_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance()?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier after declaration marker `*`"),
        },
        parser.get_position(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?;

    Ok(Node::Form(Tag::Declare, vec![Node::ident(&name.value)]))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Node, operator: Operator) -> Result<Node, Error> {
    let operator_token = parser.advance()?;
    expect_operand(parser, &operator_token)?;

    let right = parse_expr(parser, operator.binding_power)?;

    Ok(Node::Form(operator.tag, vec![left, right]))
}

/// `?` and `:` take everything up to the next `;` as their right operand,
/// so `a ? b.c` keeps the whole `.` sequence under the condition.
pub fn parse_conditional_expr(parser: &mut Parser, left: Node, operator: Operator) -> Result<Node, Error> {
    let operator_token = parser.advance()?;
    expect_operand(parser, &operator_token)?;

    let right = parse_expr(parser, BindingPower::Semicolon)?;

    Ok(Node::Form(operator.tag, vec![left, right]))
}

/// Folds `a . b . c` into a single flat form.
///
/// A trailing separator closes the sequence without adding an element. Only
/// a closer, the end of input or a looser separator may follow it.
pub fn parse_sequence_expr(parser: &mut Parser, left: Node, operator: Operator) -> Result<Node, Error> {
    let mut items = vec![left];

    while parser.current_token_kind() == operator.kind {
        let separator = parser.advance()?;

        if parser.current_token_kind() == operator.kind {
            return Err(Error::new(
                ErrorImpl::MissingOperand {
                    operator: separator.value,
                },
                separator.span.start,
            ));
        }

        if OPERATOR_TABLE.starts_expression(parser.current_token_kind()) {
            items.push(parse_expr(parser, operator.binding_power)?);
            continue;
        }

        // `a. + b`: the tighter operator has no left operand of its own
        if OPERATOR_TABLE.binding_power(parser.current_token_kind()) > operator.binding_power {
            let token = parser.current_token();
            return Err(Error::new(
                ErrorImpl::MissingOperand {
                    operator: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }

        break;
    }

    Ok(Node::Form(operator.tag, items))
}
