use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Produces the token matched over the next `len` bytes of the lexer's
/// remainder, or `None` for input that is skipped (whitespace, comments).
pub type RegexHandler = fn(&mut Lexer, usize) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

lazy_static! {
    // Tried in order; every pattern is anchored at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[A-Za-z@#$_][A-Za-z0-9@#$_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^'[^']*'").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^\\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=") },
        RegexPattern { regex: Regex::new("^<-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftArrow, "<-") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^\\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Question, "?") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

/// Pull-based tokenizer over a single source text.
///
/// Each call to [`Lexer::next_token`] yields the next token; once the input
/// is exhausted every further call yields an `EOF` token.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            source: source.to_string(),
            file: file_name,
        }
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        while !self.at_eof() {
            let found = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(self.remainder()).map(|m| (pattern.handler, m.end())));

            match found {
                Some((handler, len)) => {
                    if let Some(token) = handler(self, len)? {
                        return Ok(token);
                    }
                }
                None if self.at() == '\'' => {
                    return Err(Error::new(ErrorImpl::UnterminatedString, self.get_position()));
                }
                None => {
                    return Err(Error::new(ErrorImpl::UnrecognisedToken { token: self.at().to_string() }, self.get_position()));
                }
            }
        }

        Ok(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.span_of(0)))
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of the next `len` bytes starting at the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn matched(&self, len: usize) -> String {
        self.remainder()[..len].to_string()
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) -> Result<Option<Token>, Error> {
    lexer.advance_n(len);
    Ok(None)
}

fn symbol_handler(lexer: &mut Lexer, len: usize) -> Result<Option<Token>, Error> {
    let value = lexer.matched(len);
    let span = lexer.span_of(value.len());
    lexer.advance_n(value.len());

    // A lone `@` is the import marker, anything longer is a name
    if value == "@" {
        return Ok(Some(MK_TOKEN!(TokenKind::At, value, span)));
    }

    Ok(Some(MK_TOKEN!(TokenKind::Identifier, value, span)))
}

fn number_handler(lexer: &mut Lexer, len: usize) -> Result<Option<Token>, Error> {
    let matched = lexer.matched(len);
    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());

    let kind = if matched.contains('.') { TokenKind::Float } else { TokenKind::Int };
    Ok(Some(MK_TOKEN!(kind, matched, span)))
}

fn string_handler(lexer: &mut Lexer, len: usize) -> Result<Option<Token>, Error> {
    let matched = lexer.matched(len);
    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());

    // Contents are kept verbatim, there are no escapes
    let string_literal = matched[1..matched.len() - 1].to_string();
    Ok(Some(MK_TOKEN!(TokenKind::String, string_literal, span)))
}

/// Tokenizes the whole source at once, ending with a single `EOF` token.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
