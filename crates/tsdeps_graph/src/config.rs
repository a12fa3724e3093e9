use clap::Parser;
use log::debug;
use std::path::PathBuf;

use tsdeps_core::{AliasRule, DEFAULT_SOURCE_DIR, DEPENDENCY_CACHE_DIR, ResolveConfig};

use crate::{
    rasterize::{DEFAULT_MAX_EDGES, DEFAULT_MAX_TEXT_SIZE, DEFAULT_RENDERER, RasterizeOptions},
    renderer::Direction,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "graph")]
#[command(about = "Generate a Mermaid dependency diagram for a JavaScript/TypeScript project")]
pub struct Config {
    /// Root directory of the project
    pub root: PathBuf,

    /// Recognized file extensions, in resolution priority order
    #[arg(long, value_delimiter = ',', default_values = [".ts", ".tsx", ".js", ".jsx"])]
    pub extensions: Vec<String>,

    /// Alias rule PREFIX=DIR (repeatable); replaces the default `@/=src`
    #[arg(long = "alias", value_name = "PREFIX=DIR")]
    pub aliases: Vec<AliasRule>,

    /// Directory, relative to the root, that bare specifiers are looked up in
    #[arg(long, default_value = DEFAULT_SOURCE_DIR)]
    pub base_dir: PathBuf,

    /// Directory name excluded from traversal and resolution
    #[arg(long, default_value = DEPENDENCY_CACHE_DIR)]
    pub exclude_dir: String,

    /// Skip files matched by .gitignore/.ignore files
    #[arg(long)]
    pub gitignore: bool,

    /// Flowchart direction
    #[arg(long, value_enum, ignore_case = true, default_value_t = Direction::default())]
    pub direction: Direction,

    /// Write the diagram text to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also render the diagram to an image (png, svg or pdf) with the Mermaid CLI
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Mermaid CLI executable
    #[arg(long, default_value = DEFAULT_RENDERER)]
    pub mmdc: String,

    /// Maximum diagram text size accepted by the renderer
    #[arg(long, default_value_t = DEFAULT_MAX_TEXT_SIZE)]
    pub max_text_size: usize,

    /// Maximum number of edges accepted by the renderer
    #[arg(long, default_value_t = DEFAULT_MAX_EDGES)]
    pub max_edges: usize,

    /// List unresolved imports after the summary
    #[arg(long)]
    pub show_unresolved: bool,
}

impl Config {
    /// Resolution settings for the builder, falling back to the default alias table.
    pub fn resolve_config(&self) -> ResolveConfig {
        let aliases =
            if self.aliases.is_empty() { vec![AliasRule::default()] } else { self.aliases.clone() };
        let cfg = ResolveConfig {
            aliases,
            default_base: self.base_dir.clone(),
            dependency_cache_dir: self.exclude_dir.clone(),
            respect_gitignore: self.gitignore,
            ..ResolveConfig::default()
        }
        .with_extensions(&self.extensions);
        debug!("Resolve config: {:?}", cfg);
        cfg
    }

    pub fn rasterize_options(&self) -> RasterizeOptions {
        RasterizeOptions {
            program: self.mmdc.clone(),
            max_text_size: self.max_text_size,
            max_edges: self.max_edges,
        }
    }
}
