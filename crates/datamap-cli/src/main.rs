//! `datamap` CLI — edit data map trees and generate mod boilerplate from
//! the command line.
//!
//! The tree travels as JSON: objects become object nodes, strings/numbers/
//! booleans become the matching scalar kinds. Paths are dot-separated
//! (`stats.health`); the empty string addresses the root.
//!
//! ## Usage
//!
//! ```sh
//! # Print the NBT construction statements for a tree (stdin → stdout)
//! echo '{"health":20.0}' | datamap structure
//!
//! # Generate the full procedure file for NeoForge 1.21.1
//! datamap generate -i tree.json --name universal_laws --platform neoforge
//!
//! # Export the generated file
//! datamap generate -i tree.json -o DataMapInitProcedure.java
//!
//! # Getter/setter snippets for one node
//! datamap accessor -i tree.json --path stats.health
//!
//! # Edit the tree: set, read back, delete
//! echo '{}' | datamap set --path stats.health --kind double --value 20
//! datamap get -i tree.json --path stats
//! datamap delete -i tree.json --path stats.health -o tree.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use datamap_core::{generate_accessor, generate_file, generate_structure, Node, NodeKind, Platform};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "datamap", version, about = "Minecraft data map editor and code generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the nested CompoundTag construction statements for a tree
    Structure {
        /// Input tree JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Root compound variable name
        #[arg(long, default_value = "tag")]
        var: String,
    },
    /// Generate the complete procedure source file
    Generate {
        /// Input tree JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Data map name; also determines the persisted variable name
        #[arg(long, default_value = "universal_laws")]
        name: String,
        /// Target platform: "neoforge" (1.21.1) or "forge" (1.20.1)
        #[arg(long, default_value = "neoforge")]
        platform: String,
    },
    /// Print getter/setter/sync snippets for the node at a path
    Accessor {
        /// Input tree JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Dot-separated path to the node, e.g. "stats.health"
        #[arg(long)]
        path: String,
        /// Data map name; determines the persisted variable name
        #[arg(long, default_value = "universal_laws")]
        name: String,
    },
    /// Print the subtree at a path as JSON
    Get {
        /// Input tree JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Dot-separated path; the empty string addresses the root
        #[arg(long, default_value = "")]
        path: String,
    },
    /// Bind a node at a path and print the updated tree as JSON
    Set {
        /// Input tree JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Dot-separated path to bind
        #[arg(long)]
        path: String,
        /// Node kind: string, double, boolean, or object
        #[arg(long)]
        kind: String,
        /// Scalar value; omitted means the kind's default
        #[arg(long)]
        value: Option<String>,
    },
    /// Remove the node at a path and print the updated tree as JSON
    Delete {
        /// Input tree JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Dot-separated path to remove
        #[arg(long)]
        path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Structure { input, output, var } => {
            let tree = read_tree(input.as_deref())?;
            write_output(output.as_deref(), &generate_structure(&tree, &var))?;
        }
        Commands::Generate {
            input,
            output,
            name,
            platform,
        } => {
            let tree = read_tree(input.as_deref())?;
            let platform = parse_platform(&platform)?;
            write_output(output.as_deref(), &generate_file(&tree, &name, platform))?;
        }
        Commands::Accessor { input, path, name } => {
            let tree = read_tree(input.as_deref())?;
            let segments = parse_path(&path);
            let accessor = match generate_accessor(&tree, &segments, &name) {
                Some(accessor) => accessor,
                None => anyhow::bail!(
                    "No accessor for path '{}': the path is empty or does not resolve to a node",
                    path
                ),
            };
            println!("{}", accessor.getter);
            println!("{}", accessor.setter);
            println!("{}", accessor.sync);
        }
        Commands::Get { input, path } => {
            let tree = read_tree(input.as_deref())?;
            let segments = parse_path(&path);
            let node = tree
                .get(&segments)
                .with_context(|| format!("Failed to resolve path '{}'", path))?;
            println!("{}", node.to_json());
        }
        Commands::Set {
            input,
            output,
            path,
            kind,
            value,
        } => {
            let mut tree = read_tree(input.as_deref())?;
            let segments = parse_path(&path);
            let node = build_node(&kind, value.as_deref())?;
            tree.set(&segments, node)
                .with_context(|| format!("Failed to set path '{}'", path))?;
            write_output(output.as_deref(), &tree.to_json())?;
        }
        Commands::Delete { input, output, path } => {
            let mut tree = read_tree(input.as_deref())?;
            let segments = parse_path(&path);
            tree.delete(&segments)
                .with_context(|| format!("Failed to delete path '{}'", path))?;
            write_output(output.as_deref(), &tree.to_json())?;
        }
    }

    Ok(())
}

/// Split a dot-separated CLI path into segments. The empty string is the
/// root (no segments). Keys containing literal dots are only addressable
/// through the library API, not through this syntax.
fn parse_path(raw: &str) -> Vec<&str> {
    if raw.is_empty() {
        Vec::new()
    } else {
        raw.split('.').collect()
    }
}

/// Map the --platform flag onto a [`Platform`] variant.
fn parse_platform(raw: &str) -> Result<Platform> {
    match raw {
        "neoforge" => Ok(Platform::NeoForge),
        "forge" => Ok(Platform::Forge),
        other => anyhow::bail!(
            "Unknown platform: '{}'. Available platforms: neoforge, forge",
            other
        ),
    }
}

/// Build a node from the --kind and --value flags. An omitted value yields
/// the kind's default; object nodes take no value at all.
fn build_node(kind: &str, value: Option<&str>) -> Result<Node> {
    match kind {
        "string" => Ok(match value {
            Some(v) => Node::String(v.to_string()),
            None => NodeKind::String.default_node(),
        }),
        "double" => Ok(match value {
            Some(v) => Node::Double(
                v.parse()
                    .with_context(|| format!("Invalid double value: '{}'", v))?,
            ),
            None => NodeKind::Double.default_node(),
        }),
        "boolean" => Ok(match value {
            Some("true") => Node::Boolean(true),
            Some("false") => Node::Boolean(false),
            Some(v) => anyhow::bail!("Invalid boolean value: '{}'. Expected true or false", v),
            None => NodeKind::Boolean.default_node(),
        }),
        "object" => {
            if value.is_some() {
                anyhow::bail!("Object nodes take no --value; add children with further sets");
            }
            Ok(Node::empty_object())
        }
        other => anyhow::bail!(
            "Unknown kind: '{}'. Available kinds: string, double, boolean, object",
            other
        ),
    }
}

/// Read and parse the tree JSON from a file or stdin.
fn read_tree(path: Option<&str>) -> Result<Node> {
    let json = read_input(path)?;
    Node::parse(&json).context("Failed to parse tree JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
