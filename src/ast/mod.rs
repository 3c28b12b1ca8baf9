/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: Expression nodes and operators
/// - printer: Infix and postfix renderings of a tree
pub mod ast;
pub mod printer;
