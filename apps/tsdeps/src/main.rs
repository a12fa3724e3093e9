use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;
use tsdeps_graph::Config;

#[derive(Parser)]
#[command(name = "tsdeps")]
#[command(about = "Dependency diagrams for JavaScript/TypeScript codebases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a Mermaid dependency diagram for a JavaScript/TypeScript project
    Graph(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Graph(cfg) => {
            let num_threads = rayon::current_num_threads();
            info!(
                "Building dependency graph for {} (using {} threads)",
                cfg.root.display(),
                num_threads
            );

            let resolve_cfg = cfg.resolve_config();
            let result = tsdeps_graph::build_dependency_graph(&cfg.root, &resolve_cfg)?;
            let diagram = tsdeps_graph::render_with_direction(&result.graph, cfg.direction);

            match &cfg.output {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    let mut out = BufWriter::new(file);
                    out.write_all(diagram.as_bytes())?;
                    out.flush()?;
                    info!("Wrote diagram to {}", path.display());
                }
                None => {
                    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
                    // See https://github.com/rust-lang/rust/issues/60673
                    let mut stdout = BufWriter::new(std::io::stdout());
                    stdout.write_all(diagram.as_bytes())?;
                    stdout.flush()?;
                }
            }

            // Summary goes to stderr so stdout stays a clean diagram
            let mut stderr = BufWriter::new(std::io::stderr());
            if cfg.show_unresolved && !result.unresolved.is_empty() {
                tsdeps_graph::print_unresolved_tree(&mut stderr, &result.unresolved)?;
            }

            if let Some(image) = &cfg.image {
                tsdeps_graph::rasterize(&diagram, image, &cfg.rasterize_options())
                    .with_context(|| format!("Failed to render {}", image.display()))?;
                writeln!(stderr, "{} Rendered {}", "✓".green().bold(), image.display())?;
            }

            let elapsed_ms = start.elapsed().as_millis();
            tsdeps_graph::print_summary(&mut stderr, &result, elapsed_ms, num_threads)?;

            Ok(())
        }
    }
}
