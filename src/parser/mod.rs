//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens into
//! a tree of tagged forms. It uses a Pratt parser with precedence climbing
//! and handles:
//!
//! - Binary operators with left associativity
//! - Sequencing operators (`.`, `;`, `,`) folding into flat forms
//! - Calls, grouping and bracket lists
//! - Import and declaration markers
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! registered in a shared operator table, with binding power for precedence.

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
