//! Core utilities for tsdeps.
//!
//! This crate provides the pieces needed to discover the module graph of a
//! JavaScript/TypeScript source tree:
//! - Extracting import specifiers from source text (pattern based)
//! - Resolving specifiers to files (relative, alias prefixes, bare names)
//! - Enumerating the source files of a project
//! - Resolution configuration and root validation

mod collector;
mod config;
mod constants;
mod error;
mod parser;
mod resolver;
mod types;

// Re-export public API
pub use collector::collect_sources;
pub use config::{AliasRule, ResolveConfig, canonical_root, normalize_extensions};
pub use constants::{
    DEFAULT_ALIAS_PREFIX, DEFAULT_EXTENSIONS, DEFAULT_SOURCE_DIR, DEPENDENCY_CACHE_DIR,
    INDEX_FILE_STEM,
};
pub use error::GraphError;
pub use parser::{Specifiers, imports_for, specifiers};
pub use resolver::{
    ResolveCache, candidate_paths, relative_to_root, resolve, resolve_uncached,
};
pub use types::{SpecClass, SpecKind, Specifier};
