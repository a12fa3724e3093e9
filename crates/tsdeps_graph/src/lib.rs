//! Dependency diagrams for JavaScript/TypeScript projects.
//!
//! This crate walks a project, resolves every import it can to a file inside
//! the project, and renders the resulting module graph as a Mermaid
//! flowchart. Rendering the flowchart to an image is delegated to the
//! Mermaid CLI.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use tsdeps_core::ResolveConfig;
//! use tsdeps_graph::{build_dependency_graph, render};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = build_dependency_graph(
//!     std::path::Path::new("/path/to/project"),
//!     &ResolveConfig::default(),
//! )?;
//!
//! println!("{}", render(&result.graph));
//! eprintln!("{} imports unresolved", result.stats.unresolved_imports);
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod graph;
mod rasterize;
mod renderer;
mod reporter;
mod types;

// Re-export public API
pub use builder::build_dependency_graph;
pub use config::Config;
pub use graph::DependencyGraph;
pub use rasterize::{RasterizeError, RasterizeOptions, rasterize};
pub use renderer::{Direction, render, render_with_direction, sanitize_id};
pub use reporter::{print_summary, print_unresolved_tree};
pub use types::{BuildResult, BuildStats, UnresolvedImport};
