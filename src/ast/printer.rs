//! Textual renderings of an expression tree.

use super::ast::Expr;

/// Renders `expr` in infix form with every operand parenthesized:
/// `(a)+(b)` for binary nodes and `-(x)` for negation.
pub fn render_infix(expr: &Expr) -> String {
    let mut out = String::new();
    write_infix(expr, &mut out);
    out
}

fn write_infix(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Literal(literal) => out.push_str(&literal.value.to_string()),
        Expr::Unary(unary) => {
            out.push_str(unary.operator.symbol());
            out.push('(');
            write_infix(&unary.operand, out);
            out.push(')');
        }
        Expr::Binary(binary) => {
            out.push('(');
            write_infix(&binary.left, out);
            out.push(')');
            out.push_str(binary.operator.symbol());
            out.push('(');
            write_infix(&binary.right, out);
            out.push(')');
        }
    }
}

/// Renders `expr` in postfix form: operands first, then the operator,
/// separated by single spaces.
pub fn render_postfix(expr: &Expr) -> String {
    let mut parts = Vec::new();
    collect_postfix(expr, &mut parts);
    parts.join(" ")
}

fn collect_postfix(expr: &Expr, parts: &mut Vec<String>) {
    match expr {
        Expr::Literal(literal) => parts.push(literal.value.to_string()),
        Expr::Unary(unary) => {
            collect_postfix(&unary.operand, parts);
            parts.push(unary.operator.symbol().to_string());
        }
        Expr::Binary(binary) => {
            collect_postfix(&binary.left, parts);
            collect_postfix(&binary.right, parts);
            parts.push(binary.operator.symbol().to_string());
        }
    }
}
