use log::{debug, trace};
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::constants::{
    DEFAULT_ALIAS_PREFIX, DEFAULT_EXTENSIONS, DEFAULT_SOURCE_DIR, DEPENDENCY_CACHE_DIR,
};
use crate::error::GraphError;

/// A prefix-to-directory rewrite applied to specifiers before resolution.
///
/// `target` is joined onto the project root, so relative targets such as
/// `src` stay inside the project while absolute targets are used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRule {
    pub prefix: String,
    pub target: PathBuf,
}

impl AliasRule {
    pub fn new(prefix: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        Self { prefix: prefix.into(), target: target.into() }
    }

    /// Strip this rule's prefix from `request`, if it applies.
    pub fn strip<'a>(&self, request: &'a str) -> Option<&'a str> {
        request.strip_prefix(self.prefix.as_str())
    }
}

impl Default for AliasRule {
    fn default() -> Self {
        Self::new(DEFAULT_ALIAS_PREFIX, DEFAULT_SOURCE_DIR)
    }
}

impl FromStr for AliasRule {
    type Err = GraphError;

    /// Parse `PREFIX=DIR`, e.g. `@/=src` or `~/=app`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((prefix, target)) if !prefix.trim().is_empty() => {
                Ok(Self::new(prefix.trim(), target.trim()))
            }
            _ => Err(GraphError::InvalidAlias(s.to_string())),
        }
    }
}

impl fmt::Display for AliasRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.prefix, self.target.display())
    }
}

/// Everything the collector and resolver need to know about a project,
/// passed explicitly instead of living in globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveConfig {
    /// Recognized extensions without the leading dot, in probing order
    pub extensions: Vec<String>,
    /// Alias rules, tried in order; the first matching prefix wins
    pub aliases: Vec<AliasRule>,
    /// Base directory (relative to the root) for bare specifiers
    pub default_base: PathBuf,
    /// Directory name excluded from traversal and from candidate probing
    pub dependency_cache_dir: String,
    /// Honor `.gitignore`/`.ignore` files while enumerating
    pub respect_gitignore: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            aliases: vec![AliasRule::default()],
            default_base: PathBuf::from(DEFAULT_SOURCE_DIR),
            dependency_cache_dir: DEPENDENCY_CACHE_DIR.to_string(),
            respect_gitignore: false,
        }
    }
}

impl ResolveConfig {
    /// Replace the extension list, normalizing `.ts` and `ts` alike.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = normalize_extensions(extensions);
        self
    }

    pub fn with_aliases(mut self, aliases: Vec<AliasRule>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn is_recognized(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// True if any component of `path` is the dependency-cache directory.
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.components().any(|c| c.as_os_str() == self.dependency_cache_dir.as_str())
    }

    /// First alias rule whose prefix matches `request`.
    pub fn alias_for(&self, request: &str) -> Option<&AliasRule> {
        self.aliases.iter().find(|a| request.starts_with(a.prefix.as_str()))
    }
}

pub fn normalize_extensions<I, S>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .map(|e| e.as_ref().trim().trim_start_matches('.').to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Check that `root` is an existing directory and return its canonical form.
///
/// Every containment check downstream compares canonical paths, so the
/// root has to be canonical too.
pub fn canonical_root(root: &Path) -> Result<PathBuf, GraphError> {
    debug!("Validating project root: {}", root.display());
    if !root.exists() {
        return Err(GraphError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(GraphError::RootNotADirectory(root.to_path_buf()));
    }
    let canonical = root.canonicalize()?;
    trace!("Canonical root: {}", canonical.display());
    Ok(canonical)
}
