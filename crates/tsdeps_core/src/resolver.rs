use dashmap::DashMap;
use log::{debug, trace};
use path_clean::clean;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{config::ResolveConfig, constants::INDEX_FILE_STEM, types::SpecClass};

/// Memo of resolutions keyed by (declaring directory, specifier).
pub type ResolveCache = DashMap<(PathBuf, String), Option<PathBuf>>;

/// Resolve `request` as written in `from_file`, memoizing in `cache`.
///
/// `root` must be canonical (see [`crate::canonical_root`]). Returns the
/// canonical absolute path of the resolved file, or `None` when nothing
/// inside the root matches.
pub fn resolve(
    root: &Path,
    cfg: &ResolveConfig,
    from_file: &Path,
    request: &str,
    cache: &ResolveCache,
) -> Option<PathBuf> {
    let from_dir = from_file.parent().unwrap_or(root);
    let key = (from_dir.to_path_buf(), request.to_string());
    if let Some(v) = cache.get(&key) {
        trace!("Cache hit for resolve: '{}' from {}", request, from_dir.display());
        return v.clone();
    }

    let resolved = resolve_uncached(root, cfg, from_file, request);
    cache.insert(key, resolved.clone());
    resolved
}

/// Resolve without consulting or filling a cache.
pub fn resolve_uncached(
    root: &Path,
    cfg: &ResolveConfig,
    from_file: &Path,
    request: &str,
) -> Option<PathBuf> {
    trace!("Resolving: '{}' from {}", request, from_file.display());
    if request.is_empty() {
        return None;
    }

    let (base, remainder) = match SpecClass::of(request, cfg) {
        SpecClass::Relative => {
            trace!("Resolving as relative import: '{}'", request);
            (from_file.parent().unwrap_or(root).to_path_buf(), request)
        }
        SpecClass::Aliased => {
            let alias = cfg.alias_for(request)?;
            trace!("Matched alias '{}' for request '{}'", alias.prefix, request);
            // `@` and `@/` aliases must both land under the target
            let rest = alias.strip(request).unwrap_or(request).trim_start_matches('/');
            (root.join(&alias.target), rest)
        }
        SpecClass::Bare => {
            trace!("Resolving bare specifier under {}: '{}'", cfg.default_base.display(), request);
            (root.join(&cfg.default_base), request)
        }
    };

    let target = clean(base.join(remainder));
    let found = probe(root, cfg, &target)?;

    let canonical = match found.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            debug!("Failed to canonicalize {}: {}", found.display(), e);
            return None;
        }
    };

    match canonical.strip_prefix(root) {
        Ok(rel) if !cfg.is_excluded(rel) => {
            debug!("Resolved '{}' from {} to {}", request, from_file.display(), rel.display());
            Some(canonical)
        }
        Ok(_) => {
            trace!("Resolved '{}' into excluded directory, dropping", request);
            None
        }
        Err(_) => {
            trace!("Resolved '{}' outside project root: {}", request, canonical.display());
            None
        }
    }
}

/// Candidate files for `path`, in probing order: the path itself, the
/// directory index for each extension, then the path with each extension
/// appended.
pub fn candidate_paths(path: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(1 + extensions.len() * 2);
    candidates.push(path.to_path_buf());
    candidates.extend(extensions.iter().map(|ext| path.join(format!("{INDEX_FILE_STEM}.{ext}"))));
    candidates.extend(extensions.iter().map(|ext| with_appended_extension(path, ext)));
    candidates
}

/// Path of `abs` relative to `root` with `/` separators, for graph keys.
pub fn relative_to_root(root: &Path, abs: &Path) -> Option<String> {
    let rel = abs.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel.components().map(|c| c.as_os_str().to_string_lossy()).collect();
    Some(parts.join("/"))
}

fn probe(root: &Path, cfg: &ResolveConfig, target: &Path) -> Option<PathBuf> {
    for candidate in candidate_paths(target, &cfg.extensions) {
        let rel = candidate.strip_prefix(root).unwrap_or(&candidate);
        if cfg.is_excluded(rel) {
            trace!("Skipping excluded candidate: {}", candidate.display());
            continue;
        }
        trace!("Probing candidate: {}", candidate.display());
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

fn with_appended_extension(path: &Path, ext: &str) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}
