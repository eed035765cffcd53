use std::fmt::Display;

/// Operator or marker heading a [`Node::Form`].
///
/// The rendered spelling returned by [`Tag::as_str`] is what evaluators
/// match on. Multiplication and the declaration marker share the `*`
/// spelling and are told apart by arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Add,       // +
    Subtract,  // -
    Multiply,  // *
    Divide,    // /
    AddAssign, // +=
    Bind,      // <-
    Assign,    // =
    Question,  // ?
    Colon,     // :
    Semicolon, // ;
    Period,    // .
    Comma,     // ,
    Paren,     // (
    Bracket,   // [
    Import,    // @
    Declare,   // * (prefix)
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Add => "+",
            Tag::Subtract => "-",
            Tag::Multiply => "*",
            Tag::Divide => "/",
            Tag::AddAssign => "+=",
            Tag::Bind => "<-",
            Tag::Assign => "=",
            Tag::Question => "?",
            Tag::Colon => ":",
            Tag::Semicolon => ";",
            Tag::Period => ".",
            Tag::Comma => ",",
            Tag::Paren => "(",
            Tag::Bracket => "[",
            Tag::Import => "@",
            Tag::Declare => "*",
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node of the syntax tree.
///
/// Atoms are identifiers (already lower-cased) and tagged literals; every
/// other construct is a `Form`: a tag followed by its ordered children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Ident(String),
    Int(i64),
    Float(f64),
    Str(String),
    Form(Tag, Vec<Node>),
}

impl Node {
    /// Builds an identifier atom, folding it to lower case.
    pub fn ident(name: &str) -> Node {
        Node::Ident(name.to_lowercase())
    }

    pub fn string(value: &str) -> Node {
        Node::Str(value.to_string())
    }

    pub fn tag(&self) -> Option<Tag> {
        match self {
            Node::Form(tag, _) => Some(*tag),
            _ => None,
        }
    }

    /// Children of a form; atoms have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Form(_, children) => children,
            _ => &[],
        }
    }

    pub fn is_atom(&self) -> bool {
        !matches!(self, Node::Form(..))
    }

    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Node::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }
}

fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Ident(name) => write!(f, "{}", quote(name)),
            Node::Int(value) => write!(f, "['int', {}]", value),
            Node::Float(value) => write!(f, "['float', {}]", value),
            Node::Str(value) => write!(f, "[{}, {}]", quote("'"), quote(value)),
            Node::Form(tag, children) => {
                write!(f, "[{}", quote(tag.as_str()))?;
                for child in children {
                    write!(f, ", {}", child)?;
                }
                write!(f, "]")
            }
        }
    }
}
