use super::ast::{Node, Tag};

/// The module reference carried by an import form `['@', ['\'', spec]]`.
///
/// `spec` is a module path optionally followed by `#` and a comma
/// separated list of symbols: `math`, `math#sin`, `math#a,b,c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub module: String,
    /// Requested symbols, empty when the whole module is imported.
    pub symbols: Vec<String>,
}

impl ImportSpec {
    pub fn parse(spec: &str) -> ImportSpec {
        match spec.split_once('#') {
            Some((module, symbols)) => ImportSpec {
                module: module.trim().to_string(),
                symbols: symbols
                    .split(',')
                    .map(str::trim)
                    .filter(|symbol| !symbol.is_empty())
                    .map(String::from)
                    .collect(),
            },
            None => ImportSpec {
                module: spec.trim().to_string(),
                symbols: vec![],
            },
        }
    }

    /// Extracts the spec from an import form, `None` for any other node.
    pub fn from_node(node: &Node) -> Option<ImportSpec> {
        match node {
            Node::Form(Tag::Import, children) => match children.as_slice() {
                [Node::Str(spec)] => Some(ImportSpec::parse(spec)),
                _ => None,
            },
            _ => None,
        }
    }
}
