//! Structure generator — renders a data map into nested `CompoundTag`
//! construction statements.
//!
//! The walk is a depth-first pre-order over object nodes. Each object
//! materializes a fresh compound bound to its variable name; each child is
//! attached under its original key string, either as a recursively built
//! child compound or as a single type-wrapped scalar literal:
//!
//! ```text
//! tag = new CompoundTag();
//! tag.put("health", DoubleTag.valueOf(20));
//! tag_stats = new CompoundTag();
//! tag_stats.put("strength", DoubleTag.valueOf(5));
//! tag.put("stats", tag_stats);
//! ```
//!
//! The generator is pure and deterministic: an identical tree and root
//! variable name produce byte-identical output. Determinism falls out of
//! the children's insertion-ordered storage and the statement-list builder
//! below.

use crate::names::sanitize_identifier;
use crate::tree::Node;

/// Render `node` into compound-construction statements rooted at
/// `var_name`, one statement per line, no trailing newline.
///
/// Only object nodes materialize compounds; a scalar input produces the
/// empty string.
///
/// # Examples
///
/// ```
/// use datamap_core::{generate_structure, Node};
///
/// let mut tree = Node::empty_object();
/// tree.set(&["health"], Node::Double(20.0)).unwrap();
/// assert_eq!(
///     generate_structure(&tree, "tag"),
///     "tag = new CompoundTag();\ntag.put(\"health\", DoubleTag.valueOf(20));"
/// );
/// ```
pub fn generate_structure(node: &Node, var_name: &str) -> String {
    let mut lines = Vec::new();
    emit_compound(node, var_name, &mut lines);
    lines.join("\n")
}

/// Emit the construction of one object node and, in insertion order, the
/// attachment of each of its children.
///
/// Object children recurse into a synthetic variable derived from the
/// parent's variable and the sanitized key; the child compound is fully
/// built before the attaching `put`. The attach statement always quotes
/// the original, unsanitized key.
fn emit_compound(node: &Node, var: &str, lines: &mut Vec<String>) {
    let children = match node {
        Node::Object(children) => children,
        _ => return,
    };
    lines.push(format!("{} = new CompoundTag();", var));
    for (key, child) in children {
        match child {
            Node::Object(_) => {
                let child_var = format!("{}_{}", var, sanitize_identifier(key));
                emit_compound(child, &child_var, lines);
                lines.push(format!("{}.put(\"{}\", {});", var, key, child_var));
            }
            Node::String(s) => {
                // Known limitation: embedded quotes are not escaped.
                lines.push(format!("{}.put(\"{}\", StringTag.valueOf(\"{}\"));", var, key, s));
            }
            Node::Double(f) => {
                lines.push(format!(
                    "{}.put(\"{}\", DoubleTag.valueOf({}));",
                    var,
                    key,
                    format_double(*f)
                ));
            }
            Node::Boolean(b) => {
                lines.push(format!("{}.put(\"{}\", ByteTag.valueOf({}));", var, key, b));
            }
        }
    }
}

/// Format a double literal the way the target ecosystem renders numbers:
/// - Integral values drop the fractional part (20.0 → 20)
/// - No trailing fractional zeros
/// - Negative zero normalizes to 0
/// - Non-finite values fall back to the kind default 0
pub(crate) fn format_double(f: f64) -> String {
    if !f.is_finite() {
        return "0".to_string();
    }
    // Normalize -0 to 0
    let f = if f == 0.0 { 0.0 } else { f };
    if f.fract() == 0.0 && f.abs() < (i64::MAX as f64) {
        return (f as i64).to_string();
    }
    let s = format!("{}", f);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0');
        let trimmed = trimmed.trim_end_matches('.');
        trimmed.to_string()
    } else {
        s
    }
}
