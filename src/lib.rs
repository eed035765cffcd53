#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorTip},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses a complete program into its syntax tree.
///
/// Diagnostics produced by this entry point name the source `shell`; use
/// [`parser::parser::parse`] to attach a file name.
pub fn parse(source: &str) -> Result<Node, Error> {
    parser::parser::parse(source, None)
}

/// Resolves a byte offset into `(line number, line text, column)`.
///
/// Line numbers start at 1, columns at 0. Returns `None` when the offset
/// lies past the end of the source.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // Offset sits at the very end of the input (e.g. an EOF token)
    let last = source.rsplit('\n').next().unwrap_or("");
    let line_number = source.matches('\n').count() + 1;
    Some((line_number, last.to_string(), last.len()))
}

/// Renders an error the way the command line tool reports it:
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `)`, ...)
/// -> shell
///   |
/// 1 | x = (1 + 2))
///   | -----------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }

    let position = error.get_position();
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, ErrorImpl};
    use crate::Position;
    use std::rc::Rc;

    const SOURCE: &str = "Hello, world!\nfoo\nbar\nTesting { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position("abc", 4).is_none());
        let (line_number, line, line_pos) = super::get_line_at_position("abc", 3).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "abc");
        assert_eq!(line_pos, 3);
    }

    #[test]
    fn test_render_error() {
        let source = "x = 1\n  y = ?";
        let error = Error::new(
            ErrorImpl::MissingOperand { operator: "?".to_string() },
            Position(12, Rc::new("test.sono".to_string())),
        );

        let rendered = super::render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("Error: MissingOperand"));
        assert_eq!(lines[1], "-> test.sono");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | y = ?");
        assert_eq!(lines[4], "  | ----^");
    }
}
