//! The data map tree model: a recursive node type with path-addressed edits.
//!
//! A data map is a nested key/value tree. Every node is either a scalar
//! (string, double, boolean) or an object holding named children; the root
//! is always an object. Nodes are addressed exclusively by **path**, the
//! ordered sequence of keys walked from the root, which keeps the model's
//! addressing isomorphic to the generated accessor code: each path segment
//! becomes one nested compound lookup.
//!
//! All three operations ([`Node::get`], [`Node::set`], [`Node::delete`]) are
//! total over well-formed paths: failures are typed, local, and recoverable.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{DataMapError, Result};

/// One node of a data map.
///
/// The four kinds are closed: adding a fifth variant will not compile until
/// every generator's dispatch is updated, which is the point.
///
/// Object children are kept as an insertion-ordered association list. Keys
/// are unique within one object; the order carries no semantic weight but is
/// preserved so that code generation and display are deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    String(String),
    Double(f64),
    Boolean(bool),
    /// Key-value pairs in insertion order.
    Object(Vec<(String, Node)>),
}

/// The payload-free discriminant of [`Node`], used for type dispatch and
/// for building default nodes on a type change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    String,
    Double,
    Boolean,
    Object,
}

impl NodeKind {
    /// The default node for this kind: empty string, `0`, `false`, or an
    /// empty object. This is the value a node takes when its type is
    /// changed without supplying a new value.
    pub fn default_node(self) -> Node {
        match self {
            NodeKind::String => Node::String(String::new()),
            NodeKind::Double => Node::Double(0.0),
            NodeKind::Boolean => Node::Boolean(false),
            NodeKind::Object => Node::empty_object(),
        }
    }
}

impl Node {
    /// An object node with no children: the value of a freshly created
    /// data map, and the node auto-vivification inserts for missing
    /// intermediate path segments.
    pub fn empty_object() -> Node {
        Node::Object(Vec::new())
    }

    /// The discriminant of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::String(_) => NodeKind::String,
            Node::Double(_) => NodeKind::Double,
            Node::Boolean(_) => NodeKind::Boolean,
            Node::Object(_) => NodeKind::Object,
        }
    }

    /// This node's children, in insertion order. Scalars have none.
    pub fn children(&self) -> &[(String, Node)] {
        match self {
            Node::Object(children) => children,
            _ => &[],
        }
    }

    /// Resolve a path to the node it addresses. The empty path resolves to
    /// `self`.
    ///
    /// # Errors
    ///
    /// - [`DataMapError::InvalidPath`] if a segment is blank or a lookup
    ///   passes through a non-object node.
    /// - [`DataMapError::NotFound`] if any key along the path is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use datamap_core::Node;
    ///
    /// let mut tree = Node::empty_object();
    /// tree.set(&["stats", "health"], Node::Double(20.0)).unwrap();
    /// assert_eq!(tree.get(&["stats", "health"]).unwrap(), &Node::Double(20.0));
    /// assert!(tree.get(&["stats", "mana"]).is_err());
    /// ```
    pub fn get(&self, path: &[&str]) -> Result<&Node> {
        check_segments(path)?;
        let mut current = self;
        for (i, seg) in path.iter().enumerate() {
            let children = match current {
                Node::Object(children) => children,
                _ => return Err(not_an_object(&path[..i])),
            };
            current = match children.iter().find(|(key, _)| key == seg) {
                Some((_, child)) => child,
                None => return Err(DataMapError::NotFound(path[..=i].join("."))),
            };
        }
        Ok(current)
    }

    /// Bind `node` at `path`, creating the tree structure on demand.
    ///
    /// Every missing intermediate segment becomes an empty object; an
    /// intermediate that exists but is a scalar is replaced by an empty
    /// object, so that `get` at `path` afterwards always yields `node`.
    /// Binding over an existing key overwrites its node in place and keeps
    /// the key's original insertion position (merge-by-overwrite; a
    /// duplicate key is not an error). The empty path replaces the whole
    /// tree.
    ///
    /// # Errors
    ///
    /// [`DataMapError::InvalidPath`] if any segment is blank or
    /// whitespace-only. The check runs before any mutation, so a rejected
    /// call leaves the tree untouched.
    pub fn set(&mut self, path: &[&str], node: Node) -> Result<()> {
        check_segments(path)?;
        let (last, parents) = match path.split_last() {
            Some(pair) => pair,
            None => {
                *self = node;
                return Ok(());
            }
        };
        let mut current = self;
        for seg in parents {
            current = current.vivify_child(seg);
        }
        *current.vivify_child(last) = node;
        Ok(())
    }

    /// Remove the mapping for the final path segment from its parent and
    /// return the removed node. Sibling keys keep their order.
    ///
    /// # Errors
    ///
    /// - [`DataMapError::InvalidPath`] for the empty path (the root cannot
    ///   be deleted), a blank segment, or a non-object parent.
    /// - [`DataMapError::NotFound`] if any key along the path is absent.
    pub fn delete(&mut self, path: &[&str]) -> Result<Node> {
        check_segments(path)?;
        let (last, parents) = match path.split_last() {
            Some(pair) => pair,
            None => {
                return Err(DataMapError::InvalidPath(
                    "the root node cannot be deleted".to_string(),
                ))
            }
        };
        let mut current = self;
        for (i, seg) in parents.iter().enumerate() {
            let children = match current {
                Node::Object(children) => children,
                _ => return Err(not_an_object(&path[..i])),
            };
            let idx = match children.iter().position(|(key, _)| key == seg) {
                Some(idx) => idx,
                None => return Err(DataMapError::NotFound(path[..=i].join("."))),
            };
            current = &mut children[idx].1;
        }
        let children = match current {
            Node::Object(children) => children,
            _ => return Err(not_an_object(parents)),
        };
        match children.iter().position(|(key, _)| key == last) {
            Some(idx) => Ok(children.remove(idx).1),
            None => Err(DataMapError::NotFound(path.join("."))),
        }
    }

    /// Get-or-insert the child bound to `key`, coercing `self` into an
    /// object first if it is a scalar. Inserted children start as empty
    /// objects; this is the auto-vivification step of [`Node::set`].
    fn vivify_child(&mut self, key: &str) -> &mut Node {
        if !matches!(self, Node::Object(_)) {
            *self = Node::empty_object();
        }
        match self {
            Node::Object(children) => {
                let idx = match children.iter().position(|(k, _)| k == key) {
                    Some(idx) => idx,
                    None => {
                        children.push((key.to_string(), Node::empty_object()));
                        children.len() - 1
                    }
                };
                &mut children[idx].1
            }
            _ => unreachable!("coerced to an object above"),
        }
    }

    /// Build a node from a JSON value. Strings, numbers, booleans, and
    /// objects map onto the four node kinds; object key order is preserved.
    ///
    /// # Errors
    ///
    /// [`DataMapError::Unsupported`] for `null`, arrays, and numbers that
    /// do not fit an `f64`; the data map model has exactly four kinds.
    pub fn from_value(value: &Value) -> Result<Node> {
        match value {
            Value::String(s) => Ok(Node::String(s.clone())),
            Value::Bool(b) => Ok(Node::Boolean(*b)),
            Value::Number(n) => match n.as_f64() {
                Some(f) => Ok(Node::Double(f)),
                None => Err(DataMapError::Unsupported(format!(
                    "number {} does not fit a double",
                    n
                ))),
            },
            Value::Object(map) => {
                let mut children = Vec::with_capacity(map.len());
                for (key, child) in map {
                    children.push((key.clone(), Node::from_value(child)?));
                }
                Ok(Node::Object(children))
            }
            Value::Null => Err(DataMapError::Unsupported(
                "null has no data map kind".to_string(),
            )),
            Value::Array(_) => Err(DataMapError::Unsupported(
                "arrays have no data map kind".to_string(),
            )),
        }
    }

    /// Convert this node back into a JSON value.
    ///
    /// Relies on `serde_json::Map` with the `preserve_order` feature so the
    /// children's insertion order survives the round trip. A non-finite
    /// double (unreachable via JSON input) falls back to the kind default
    /// `0` rather than failing.
    pub fn to_value(&self) -> Value {
        match self {
            Node::String(s) => Value::String(s.clone()),
            Node::Double(f) => {
                let number = serde_json::Number::from_f64(*f)
                    .unwrap_or_else(|| serde_json::Number::from(0));
                Value::Number(number)
            }
            Node::Boolean(b) => Value::Bool(*b),
            Node::Object(children) => {
                let mut map = Map::with_capacity(children.len());
                for (key, child) in children {
                    map.insert(key.clone(), child.to_value());
                }
                Value::Object(map)
            }
        }
    }

    /// Parse a tree from its JSON interchange form.
    ///
    /// # Errors
    ///
    /// [`DataMapError::JsonParse`] for malformed JSON, otherwise the same
    /// errors as [`Node::from_value`].
    ///
    /// # Examples
    ///
    /// ```
    /// use datamap_core::{Node, NodeKind};
    ///
    /// let tree = Node::parse(r#"{"health":20.0,"name":"Steve"}"#).unwrap();
    /// assert_eq!(tree.get(&["health"]).unwrap().kind(), NodeKind::Double);
    /// ```
    pub fn parse(json: &str) -> Result<Node> {
        let value: Value = serde_json::from_str(json)?;
        Node::from_value(&value)
    }

    /// Serialize this tree to its JSON interchange form.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Node::from_value(&value).map_err(D::Error::custom)
    }
}

/// Reject paths containing blank or whitespace-only segments before any
/// lookup or mutation happens.
fn check_segments(path: &[&str]) -> Result<()> {
    for seg in path {
        if seg.trim().is_empty() {
            return Err(DataMapError::InvalidPath(format!(
                "blank key segment in '{}'",
                path.join(".")
            )));
        }
    }
    Ok(())
}

fn not_an_object(prefix: &[&str]) -> DataMapError {
    if prefix.is_empty() {
        DataMapError::InvalidPath("the root is not an object".to_string())
    } else {
        DataMapError::InvalidPath(format!("'{}' is not an object", prefix.join(".")))
    }
}
