//! Accessor generator — getter, setter, and sync snippets for one node.
//!
//! Given a selected path, emits the statements a mod author would paste to
//! read or write that single value at runtime. Addressing mirrors the tree
//! model by construction: one `.getCompound("segment")` lookup per path
//! segment, except the last, which becomes the type-specific accessor call.

use crate::names::{sanitize_identifier, storage_access, SYNC_CALL};
use crate::tree::Node;

/// The three statements generated for a selected node.
#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
    /// Declaration + read, e.g. `double health = ....getDouble("health");`
    pub getter: String,
    /// Write with a fixed example value, e.g. `....putDouble("health", 1.0);`
    pub setter: String,
    /// The persistence sync statement to run after the setter.
    pub sync: String,
}

/// Generate accessor snippets for the node at `path`.
///
/// Returns `None` when the path is empty or does not resolve to a node;
/// the caller is expected to suppress output in that case.
///
/// Both statements address the node through the same lookup chain: the
/// read and write sides of the persisted compound are symmetric, and that
/// symmetry is relied on by consumers of the generated code.
///
/// The setter's value is a fixed illustrative literal per kind
/// (`"new_value"`, `1.0`, `true`, or a fresh empty compound), never the
/// node's current value.
///
/// # Examples
///
/// ```
/// use datamap_core::{generate_accessor, Node};
///
/// let mut tree = Node::empty_object();
/// tree.set(&["stats", "health"], Node::Double(20.0)).unwrap();
/// let acc = generate_accessor(&tree, &["stats", "health"], "universal_laws").unwrap();
/// assert_eq!(
///     acc.getter,
///     "double health = YourModVariables.MapVariables.get(world).universal_laws.getCompound(\"stats\").getDouble(\"health\");"
/// );
/// ```
pub fn generate_accessor(tree: &Node, path: &[&str], data_map_name: &str) -> Option<Accessor> {
    let (last, parents) = path.split_last()?;
    let node = tree.get(path).ok()?;

    let mut chain = storage_access(data_map_name);
    for seg in parents {
        chain.push_str(&format!(".getCompound(\"{}\")", seg));
    }

    let var = local_variable(last);
    let (getter, setter) = match node {
        Node::String(_) => (
            format!("String {} = {}.getString(\"{}\");", var, chain, last),
            format!("{}.putString(\"{}\", \"new_value\");", chain, last),
        ),
        Node::Double(_) => (
            format!("double {} = {}.getDouble(\"{}\");", var, chain, last),
            format!("{}.putDouble(\"{}\", 1.0);", chain, last),
        ),
        Node::Boolean(_) => (
            format!("boolean {} = {}.getBoolean(\"{}\");", var, chain, last),
            format!("{}.putBoolean(\"{}\", true);", chain, last),
        ),
        Node::Object(_) => (
            format!("CompoundTag {} = {}.getCompound(\"{}\");", var, chain, last),
            format!("{}.put(\"{}\", new CompoundTag());", chain, last),
        ),
    };

    Some(Accessor {
        getter,
        setter,
        sync: SYNC_CALL.to_string(),
    })
}

/// Local variable name for the getter declaration: the sanitized final
/// segment, or `value` when the key has no alphanumeric characters left.
fn local_variable(key: &str) -> String {
    let ident = sanitize_identifier(key);
    if ident.is_empty() {
        "value".to_string()
    } else {
        ident
    }
}
