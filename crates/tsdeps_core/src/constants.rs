//! Default resolution settings.
//!
//! These mirror what TypeScript and most bundlers do out of the box for a
//! single-package web project: `src/` as the source root, `@/` pointing at
//! it, and the four common source extensions probed in TypeScript-first
//! order.

/// Extensions analyzed and probed by default (in priority order, no leading dot)
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Directory (relative to the project root) that bare specifiers and the
/// default alias are rooted at
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Prefix of the default alias rule
pub const DEFAULT_ALIAS_PREFIX: &str = "@/";

/// Package-manager cache directory excluded from traversal and resolution
pub const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// Base name of directory index files (`index.ts`, `index.tsx`, ...)
pub const INDEX_FILE_STEM: &str = "index";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions_are_typescript_first() {
        assert_eq!(DEFAULT_EXTENSIONS, &["ts", "tsx", "js", "jsx"]);
    }

    #[test]
    fn test_default_extensions_have_no_leading_dot() {
        for ext in DEFAULT_EXTENSIONS {
            assert!(!ext.starts_with('.'), "extension '{}' should not start with a dot", ext);
        }
    }

    #[test]
    fn test_default_alias_targets_source_dir() {
        assert!(DEFAULT_ALIAS_PREFIX.ends_with('/'));
        assert!(!DEFAULT_SOURCE_DIR.contains('/'));
    }
}
