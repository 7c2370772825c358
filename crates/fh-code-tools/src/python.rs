//! Python-specific checks over a tree-sitter syntax tree.
//!
//! Runs only when the whole source parses as Python without syntax
//! errors; anything else (C sources, fragments) yields no findings.

use std::collections::VecDeque;

use fh_protocol::Correction;
use tree_sitter::{Node, Parser};

use crate::error::{CodeError, CodeResult};

/// Collect bare-`except` and `eval()` findings in breadth-first order.
///
/// Levels are counted over the abstract tree: syntax-only wrappers (see
/// `is_transparent`) are spliced into their parent's level.
pub fn python_findings(code: &str) -> CodeResult<Vec<Correction>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| CodeError::Parser(format!("failed to load Python grammar: {e}")))?;

    let Some(tree) = parser.parse(code, None) else {
        return Ok(Vec::new());
    };
    let root = tree.root_node();
    if root.has_error() {
        tracing::debug!("source is not valid Python, skipping Python checks");
        return Ok(Vec::new());
    }

    let mut findings = Vec::new();
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        match node.kind() {
            "except_clause" if is_bare_except(node) => findings.push(Correction {
                line: line_of(node),
                issue: "Bare except detected".into(),
                fix: "Catch a specific exception or re-raise the original error.".into(),
            }),
            "call" if calls_eval(node, code) => findings.push(Correction {
                line: line_of(node),
                issue: "Use of eval() is unsafe".into(),
                fix: "Avoid eval(); use ast.literal_eval or a safe parser.".into(),
            }),
            _ => {}
        }
        queue.extend(ast_children(node));
    }
    Ok(findings)
}

/// Named children of `node`, with transparent wrappers replaced by their
/// own children.
fn ast_children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    let mut children = Vec::new();
    for child in node.named_children(&mut cursor) {
        if is_transparent(child) {
            children.extend(ast_children(child));
        } else {
            children.push(child);
        }
    }
    children
}

/// Concrete-syntax nodes with no abstract-tree counterpart.
///
/// An `expression_statement` is kept when it wraps a bare expression (an
/// `Expr` statement) and dropped when it wraps an assignment.
fn is_transparent(node: Node) -> bool {
    match node.kind() {
        "block" | "argument_list" | "parenthesized_expression" => true,
        "expression_statement" => node.named_child_count() == 1
            && node
                .named_child(0)
                .is_some_and(|c| matches!(c.kind(), "assignment" | "augmented_assignment")),
        _ => false,
    }
}

fn line_of(node: Node) -> usize {
    node.start_position().row + 1
}

/// `except:` with no exception type; only the body (and comments) follow.
fn is_bare_except(node: Node) -> bool {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .all(|child| matches!(child.kind(), "block" | "comment"))
}

/// A call whose callee is the bare name `eval` (not `obj.eval`).
fn calls_eval(node: Node, code: &str) -> bool {
    node.child_by_field_name("function")
        .filter(|f| f.kind() == "identifier")
        .and_then(|f| f.utf8_text(code.as_bytes()).ok())
        == Some("eval")
}
