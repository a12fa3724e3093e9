use std::{
    collections::BTreeMap,
    io::{self, Write},
};

use colored::Colorize;
use log::{debug, trace};
use tsdeps_core::SpecKind;

use crate::types::{BuildResult, UnresolvedImport};

/// One-paragraph run summary: node and edge counts plus anything skipped.
pub fn print_summary<W: Write>(
    writer: &mut W,
    result: &BuildResult,
    elapsed_ms: u128,
    num_threads: usize,
) -> io::Result<()> {
    debug!("Printing summary for {} nodes", result.graph.len());
    let stats = &result.stats;

    writeln!(
        writer,
        "{} Dependency graph: {} files, {} edges",
        "✓".green().bold(),
        result.graph.len().to_string().cyan(),
        result.graph.edge_count().to_string().cyan()
    )?;

    if stats.unresolved_imports > 0 {
        writeln!(
            writer,
            "{} {} of {} imports did not resolve to a project file",
            "⚠".yellow().bold(),
            stats.unresolved_imports.to_string().yellow(),
            stats.specifiers_found
        )?;
    }
    if stats.unreadable_files > 0 {
        writeln!(
            writer,
            "{} {} files could not be read",
            "⚠".yellow().bold(),
            stats.unreadable_files.to_string().yellow()
        )?;
    }

    writeln!(
        writer,
        "{} Finished in {}ms on {} files (using {} threads).",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan(),
        stats.files_analyzed.to_string().cyan(),
        num_threads.to_string().cyan()
    )?;
    writer.flush()?;
    Ok(())
}

/// Unresolved imports grouped by file, files in path order.
pub fn print_unresolved_tree<W: Write>(
    writer: &mut W,
    unresolved: &[UnresolvedImport],
) -> io::Result<()> {
    let mut by_file: BTreeMap<&str, Vec<&UnresolvedImport>> = BTreeMap::new();
    for u in unresolved {
        by_file.entry(u.from_file.as_str()).or_default().push(u);
    }
    debug!("Grouped unresolved imports into {} files", by_file.len());

    for (file, imports) in by_file {
        trace!("Processing file: {} with {} unresolved imports", file, imports.len());
        writeln!(writer, "{}", file.bright_white().bold())?;
        for (idx, import) in imports.iter().enumerate() {
            let prefix = if idx == imports.len() - 1 { "└──" } else { "├──" };
            writeln!(writer, "{}  {}", prefix.dimmed(), import_statement(import))?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn import_statement(import: &UnresolvedImport) -> String {
    match import.kind {
        SpecKind::Dynamic => format!("import('{}')", import.request),
        SpecKind::Static | SpecKind::SideEffect => format!("import '{}'", import.request),
    }
}
