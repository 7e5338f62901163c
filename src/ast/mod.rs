/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node variants, capability dispatch, and the node arena
pub mod ast;
