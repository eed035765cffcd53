use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::{ast::{Node, Tag}}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Operator precedence bands, loosest first.
///
/// An operator keeps folding into the current expression while its binding
/// power is strictly greater than the caller's minimum, which makes every
/// binary operator left-associative.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Semicolon,
    Period,
    Assignment,
    Conditional,
    Comma,
    Binding,
    Additive,
    Multiplicative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorRole {
    /// Folds into a binary form
    Infix,
    /// Collects same-level siblings into one flat form
    Sequence,
    /// Binary, but the right operand may hold a `.` sequence
    Conditional,
}

pub type NUDHandler = fn(&mut Parser) -> Result<Node, Error>;
pub type LEDHandler = fn(&mut Parser, Node, Operator) -> Result<Node, Error>;

#[derive(Clone, Copy)]
pub struct Operator {
    pub kind: TokenKind,
    pub tag: Tag,
    pub binding_power: BindingPower,
    pub role: OperatorRole,
    pub led: LEDHandler,
}

pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, Operator>;

/// Read-only table of prefix (NUD) and infix (LED) handlers.
///
/// Built once per process and shared by every parse.
pub struct OperatorTable {
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
}

impl OperatorTable {
    fn led(&mut self, kind: TokenKind, tag: Tag, binding_power: BindingPower, role: OperatorRole) {
        let led: LEDHandler = match role {
            OperatorRole::Infix => parse_binary_expr,
            OperatorRole::Sequence => parse_sequence_expr,
            OperatorRole::Conditional => parse_conditional_expr,
        };

        self.led_lookup.insert(kind, Operator { kind, tag, binding_power, role, led });
    }

    fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<Operator> {
        self.led_lookup.get(&kind).copied()
    }

    /// Whether a token of this kind can begin an expression.
    pub fn starts_expression(&self, kind: TokenKind) -> bool {
        self.nud_lookup.contains_key(&kind)
    }

    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.led_lookup.get(&kind).map(|op| op.binding_power).unwrap_or(BindingPower::Default)
    }
}

pub fn create_token_lookups() -> OperatorTable {
    let mut table = OperatorTable {
        nud_lookup: HashMap::new(),
        led_lookup: HashMap::new(),
    };

    // Sequencing
    table.led(TokenKind::Semicolon, Tag::Semicolon, BindingPower::Semicolon, OperatorRole::Sequence);
    table.led(TokenKind::Dot, Tag::Period, BindingPower::Period, OperatorRole::Sequence);
    table.led(TokenKind::Comma, Tag::Comma, BindingPower::Comma, OperatorRole::Sequence);

    // Assignment
    table.led(TokenKind::Assignment, Tag::Assign, BindingPower::Assignment, OperatorRole::Infix);
    table.led(TokenKind::PlusEquals, Tag::AddAssign, BindingPower::Assignment, OperatorRole::Infix);

    // Conditional
    table.led(TokenKind::Question, Tag::Question, BindingPower::Conditional, OperatorRole::Conditional);
    table.led(TokenKind::Colon, Tag::Colon, BindingPower::Conditional, OperatorRole::Conditional);

    table.led(TokenKind::LeftArrow, Tag::Bind, BindingPower::Binding, OperatorRole::Infix);

    // Additive and multiplicative
    table.led(TokenKind::Plus, Tag::Add, BindingPower::Additive, OperatorRole::Infix);
    table.led(TokenKind::Dash, Tag::Subtract, BindingPower::Additive, OperatorRole::Infix);
    table.led(TokenKind::Star, Tag::Multiply, BindingPower::Multiplicative, OperatorRole::Infix);
    table.led(TokenKind::Slash, Tag::Divide, BindingPower::Multiplicative, OperatorRole::Infix);

    // Literals and symbols
    table.nud(TokenKind::Int, parse_primary_expr);
    table.nud(TokenKind::Float, parse_primary_expr);
    table.nud(TokenKind::String, parse_primary_expr);
    table.nud(TokenKind::Identifier, parse_symbol_expr);
    table.nud(TokenKind::OpenParen, parse_grouping_expr);
    table.nud(TokenKind::OpenBracket, parse_bracket_expr);

    // Markers
    table.nud(TokenKind::At, parse_import_expr);
    table.nud(TokenKind::Star, parse_declaration_expr);

    table
}

lazy_static! {
    pub static ref OPERATOR_TABLE: OperatorTable = create_token_lookups();
}
