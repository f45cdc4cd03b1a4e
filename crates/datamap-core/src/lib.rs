//! # datamap-core
//!
//! Tree model and code generators for Minecraft **data map** boilerplate.
//!
//! A data map is a user-authored nested key/value tree (scalars: string,
//! double, boolean; containers: objects with named children). This crate
//! holds the authoritative tree with path-addressed edits and renders it
//! into the NBT construction code, event-handler scaffolding, and per-node
//! accessor statements an MCreator-based mod expects.
//!
//! ## Quick start
//!
//! ```rust
//! use datamap_core::{generate_structure, Node};
//!
//! let mut tree = Node::empty_object();
//! tree.set(&["health"], Node::Double(20.0)).unwrap();
//! tree.set(&["stats", "strength"], Node::Double(5.0)).unwrap();
//!
//! let code = generate_structure(&tree, "tag");
//! assert!(code.starts_with("tag = new CompoundTag();"));
//! assert!(code.contains("tag.put(\"stats\", tag_stats);"));
//! ```
//!
//! ## Modules
//!
//! - [`tree`] — recursive node type and the `get`/`set`/`delete` path operations
//! - [`structure`] — data map → nested `CompoundTag` construction statements
//! - [`procedure`] — complete procedure source file (imports + event wiring + guard)
//! - [`accessor`] — getter/setter/sync snippets for a single selected node
//! - [`names`] — identifier and persisted-variable name derivation
//! - [`error`] — error types for tree edits and JSON interchange

pub mod accessor;
pub mod error;
pub mod names;
pub mod procedure;
pub mod structure;
pub mod tree;

pub use accessor::{generate_accessor, Accessor};
pub use error::DataMapError;
pub use procedure::{generate_file, Platform};
pub use structure::generate_structure;
pub use tree::{Node, NodeKind};
