use ignore::WalkBuilder;
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};

use crate::config::ResolveConfig;

/// Enumerate every recognized source file under `root`, sorted by path.
///
/// Directories named like the dependency cache are pruned without being
/// descended into. Entries that cannot be read are logged and skipped, as
/// are symlinks whose target lies outside `root` or inside the dependency
/// cache.
pub fn collect_sources(root: &Path, cfg: &ResolveConfig) -> Vec<PathBuf> {
    debug!("Walking directory tree from root: {}", root.display());
    let real_root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

    let mut builder = WalkBuilder::new(root);
    if cfg.respect_gitignore {
        builder.standard_filters(true).hidden(false).require_git(false);
    } else {
        builder.standard_filters(false);
    }

    let cache_dir = cfg.dependency_cache_dir.clone();
    let walker = builder
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |dent| dent.file_name() != cache_dir.as_str())
        .build();

    let mut files: Vec<PathBuf> = Vec::new();
    for res in walker {
        let dent = match res {
            Ok(dent) => dent,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        let p = dent.path();
        if !dent.file_type().is_some_and(|ft| ft.is_file()) && !p.is_file() {
            continue;
        }
        if cfg.is_excluded(p.strip_prefix(root).unwrap_or(p)) {
            trace!("Skipping file in dependency cache: {}", p.display());
            continue;
        }
        if dent.path_is_symlink() && !link_stays_inside(&real_root, cfg, p) {
            debug!("Skipping symlink pointing outside the project: {}", p.display());
            continue;
        }
        if cfg.is_recognized(p) {
            trace!("Found source file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }

    files.sort();
    debug!("Collected {} source files", files.len());
    files
}

fn link_stays_inside(real_root: &Path, cfg: &ResolveConfig, link: &Path) -> bool {
    match link.canonicalize() {
        Ok(target) => target.strip_prefix(real_root).is_ok_and(|rel| !cfg.is_excluded(rel)),
        Err(e) => {
            warn!("Failed to follow symlink {}: {}", link.display(), e);
            false
        }
    }
}
