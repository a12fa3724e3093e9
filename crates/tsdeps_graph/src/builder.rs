use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{path::Path, thread};

use tsdeps_core::{
    GraphError, ResolveCache, ResolveConfig, Specifier, canonical_root, collect_sources,
    imports_for, relative_to_root, resolve,
};

use crate::{
    graph::DependencyGraph,
    types::{BuildResult, BuildStats, UnresolvedImport},
};

struct FileOutcome {
    node: String,
    dependencies: Vec<String>,
    unresolved: Vec<Specifier>,
    specifiers: usize,
    readable: bool,
}

/// Build the dependency graph of every recognized file under `root`.
///
/// Only an invalid root fails the build. Unreadable files become nodes
/// without edges and unresolved imports are left out of the edge lists;
/// both are counted in the returned stats.
pub fn build_dependency_graph(root: &Path, cfg: &ResolveConfig) -> Result<BuildResult, GraphError> {
    info!("Starting dependency graph build");
    let root = canonical_root(root)?;
    info!("Using root directory: {}", root.display());

    let files = collect_sources(&root, cfg);
    info!("Found {} source files", files.len());

    let resolve_cache = ResolveCache::new();

    // Indexed collect keeps the walk order regardless of scheduling
    let outcomes: Vec<FileOutcome> =
        files.par_iter().map(|file| analyze_file(&root, cfg, file, &resolve_cache)).collect();

    let mut stats = BuildStats { files_analyzed: outcomes.len(), ..BuildStats::default() };
    let mut unresolved = Vec::new();
    let mut nodes = Vec::with_capacity(outcomes.len());

    for outcome in outcomes {
        if !outcome.readable {
            stats.unreadable_files += 1;
        }
        stats.specifiers_found += outcome.specifiers;
        stats.resolved_imports += outcome.dependencies.len();
        stats.unresolved_imports += outcome.unresolved.len();
        unresolved.extend(
            outcome
                .unresolved
                .into_iter()
                .map(|spec| UnresolvedImport {
                    from_file: outcome.node.clone(),
                    request: spec.request,
                    kind: spec.kind,
                }),
        );
        nodes.push((outcome.node, outcome.dependencies));
    }

    let graph: DependencyGraph = nodes.into_iter().collect();

    info!(
        "Dependency graph complete: {} nodes, {} edges ({} unresolved imports)",
        graph.len(),
        graph.edge_count(),
        stats.unresolved_imports
    );
    debug!("Cache statistics: resolutions={}", resolve_cache.len());

    Ok(BuildResult { graph, stats, unresolved })
}

fn analyze_file(
    root: &Path,
    cfg: &ResolveConfig,
    file: &Path,
    resolve_cache: &ResolveCache,
) -> FileOutcome {
    debug!("Thread {:?} processing: {}", thread::current().id(), file.display());

    let node = relative_to_root(root, file).unwrap_or_else(|| file.to_string_lossy().to_string());

    let (specs, readable) = match imports_for(file) {
        Ok(specs) => (specs, true),
        Err(e) => {
            warn!("Error reading imports for {}: {:#}", file.display(), e);
            (Vec::new(), false)
        }
    };

    let mut dependencies = Vec::new();
    let mut unresolved = Vec::new();

    for spec in &specs {
        trace!("Checking import: '{}'", spec.request);
        match resolve(root, cfg, file, &spec.request, resolve_cache)
            .and_then(|resolved| relative_to_root(root, &resolved))
        {
            Some(rel) => dependencies.push(rel),
            None => {
                trace!("Could not resolve import: '{}' in {}", spec.request, node);
                unresolved.push(spec.clone());
            }
        }
    }

    debug!(
        "{}: {} specifiers, {} resolved, {} unresolved",
        node,
        specs.len(),
        dependencies.len(),
        unresolved.len()
    );

    FileOutcome { node, dependencies, unresolved, specifiers: specs.len(), readable }
}
