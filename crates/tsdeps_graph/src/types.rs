use tsdeps_core::SpecKind;

use crate::graph::DependencyGraph;

/// An import that did not map to a file inside the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedImport {
    pub from_file: String,
    pub request: String,
    pub kind: SpecKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub files_analyzed: usize,
    /// Files that could not be read or decoded; they appear as nodes without edges
    pub unreadable_files: usize,
    pub specifiers_found: usize,
    pub resolved_imports: usize,
    pub unresolved_imports: usize,
}

#[derive(Debug, Clone)]
pub struct BuildResult {
    pub graph: DependencyGraph,
    pub stats: BuildStats,
    pub unresolved: Vec<UnresolvedImport>,
}
