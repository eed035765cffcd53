/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the tree handed to evaluators
///
/// Submodules:
/// - ast: Nodes, form tags and their rendering
/// - imports: Decoding of module references carried by import forms
pub mod ast;
pub mod imports;
