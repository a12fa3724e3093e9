//! Mermaid flowchart rendering.
//!
//! Each (source, dependency) pair becomes one edge statement of the form
//! `id["path"] --> id["path"]`. Node ids are the relative path with every
//! character outside `[A-Za-z0-9_]` replaced by `_`; the path itself is
//! kept as the label.

use clap::ValueEnum;
use log::{debug, trace};
use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use crate::graph::DependencyGraph;

/// Flowchart orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Left to right
    #[default]
    #[value(name = "LR")]
    LeftRight,
    /// Right to left
    #[value(name = "RL")]
    RightLeft,
    /// Top down
    #[value(name = "TD")]
    TopDown,
    /// Top to bottom
    #[value(name = "TB")]
    TopBottom,
    /// Bottom to top
    #[value(name = "BT")]
    BottomTop,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
            Direction::TopDown => "TD",
            Direction::TopBottom => "TB",
            Direction::BottomTop => "BT",
        };
        f.write_str(s)
    }
}

/// Render `graph` as a left-to-right Mermaid flowchart.
pub fn render(graph: &DependencyGraph) -> String {
    render_with_direction(graph, Direction::default())
}

pub fn render_with_direction(graph: &DependencyGraph, direction: Direction) -> String {
    debug!("Rendering {} nodes, {} edges as Mermaid", graph.len(), graph.edge_count());
    let mut ids = NodeIds::default();
    let mut out = format!("graph {direction}\n");

    for (node, dependencies) in graph.iter() {
        let node_id = ids.id_for(node);
        for dep in dependencies {
            let dep_id = ids.id_for(dep);
            out.push_str(&format!(
                "    {}[\"{}\"] --> {}[\"{}\"]\n",
                node_id,
                escape_label(node),
                dep_id,
                escape_label(dep)
            ));
        }
    }

    out
}

/// Identifier-safe token for a relative path.
pub fn sanitize_id(path: &str) -> String {
    path.chars().map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' }).collect()
}

fn escape_label(path: &str) -> String {
    path.replace('"', "#quot;")
}

/// Assigns each path a distinct id, numbering paths whose sanitized form
/// is already taken by an earlier path.
#[derive(Default)]
struct NodeIds {
    by_path: HashMap<String, String>,
    taken: HashSet<String>,
}

impl NodeIds {
    fn id_for(&mut self, path: &str) -> String {
        if let Some(id) = self.by_path.get(path) {
            return id.clone();
        }

        let base = sanitize_id(path);
        let mut id = base.clone();
        let mut n = 2;
        while self.taken.contains(&id) {
            id = format!("{base}_{n}");
            n += 1;
        }
        if id != base {
            trace!("Node id '{}' already taken, using '{}' for {}", base, id, path);
        }

        self.taken.insert(id.clone());
        self.by_path.insert(path.to_string(), id.clone());
        id
    }
}
