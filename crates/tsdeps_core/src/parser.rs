//! Text-based import extraction.
//!
//! This is a pattern match over the raw source, not a parser. It recognizes
//! `import <bindings> from '<spec>'`, `import '<spec>'` and `import('<spec>')`
//! with single or double quotes, and skips matches that start on a line whose
//! first non-blank characters are `//`.
//!
//! Known limitations: block comments (`/* ... */`) and comments trailing a
//! statement on the same line are not suppressed, and `import` text inside
//! string or template literals is matched like real code.

use anyhow::{Context, Result};
use log::{debug, trace};
use regex::{CaptureMatches, Captures, Regex};
use std::{fs, path::Path, sync::LazyLock};

use crate::types::{SpecKind, Specifier};

static IMPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\bimport(?:(?P<dynamic>\s*\(\s*)|\s+(?P<bindings>[\w$*{}\s,]+?\s+from\s+)?)(?:'(?P<single>[^'\r\n]*)'|"(?P<double>[^"\r\n]*)")"#,
    )
    .expect("IMPORT_PATTERN regex is invalid")
});

const LINE_COMMENT: &str = "//";

/// Lazy iterator over the import specifiers of one source text, in order of
/// appearance. Call [`specifiers`] again to restart.
pub struct Specifiers<'t> {
    source: &'t str,
    matches: CaptureMatches<'static, 't>,
}

impl Iterator for Specifiers<'_> {
    type Item = Specifier;

    fn next(&mut self) -> Option<Specifier> {
        for caps in self.matches.by_ref() {
            let start = caps.get(0).map_or(0, |m| m.start());
            if starts_in_line_comment(self.source, start) {
                trace!("Skipping commented-out import at byte {}", start);
                continue;
            }
            return Some(specifier_from(&caps));
        }
        None
    }
}

/// Scan `source` for import specifiers.
pub fn specifiers(source: &str) -> Specifiers<'_> {
    Specifiers { source, matches: IMPORT_PATTERN.captures_iter(source) }
}

/// Read `file` and extract its import specifiers.
///
/// Fails if the file cannot be read or is not valid UTF-8; callers decide
/// whether that is fatal.
pub fn imports_for(file: &Path) -> Result<Vec<Specifier>> {
    trace!("Scanning file for imports: {}", file.display());
    let src =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let specs: Vec<Specifier> = specifiers(&src).collect();
    debug!("Found {} import specifiers in {}", specs.len(), file.display());
    Ok(specs)
}

fn specifier_from(caps: &Captures<'_>) -> Specifier {
    let request = caps.name("single").or_else(|| caps.name("double")).map_or("", |m| m.as_str());
    let kind = if caps.name("dynamic").is_some() {
        SpecKind::Dynamic
    } else if caps.name("bindings").is_some() {
        SpecKind::Static
    } else {
        SpecKind::SideEffect
    };
    trace!("Found {:?} import: '{}'", kind, request);
    Specifier::new(request, kind)
}

fn starts_in_line_comment(source: &str, at: usize) -> bool {
    let line_start = source[..at].rfind('\n').map_or(0, |i| i + 1);
    source[line_start..].trim_start().starts_with(LINE_COMMENT)
}
