//! Hand-off to the Mermaid CLI (`mmdc`) for image output.
//!
//! The diagram text and a small renderer configuration are written to
//! temporary files and passed to the renderer as `-i`, `-o` and `-c`. The
//! diagram text is valid whether or not this step succeeds.

use log::{debug, info};
use serde::Serialize;
use std::{
    io::{self, Write},
    path::Path,
    process::{Command, ExitStatus},
};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const DEFAULT_RENDERER: &str = "mmdc";
pub const DEFAULT_MAX_TEXT_SIZE: usize = 200_000;
pub const DEFAULT_MAX_EDGES: usize = 2_000;

#[derive(Debug, Error)]
pub enum RasterizeError {
    #[error("Failed to launch diagram renderer '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Diagram renderer '{program}' failed ({status}): {stderr}")]
    Failed { program: String, status: ExitStatus, stderr: String },

    #[error("Failed to write renderer input: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize renderer config: {0}")]
    Config(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterizeOptions {
    /// Renderer executable
    pub program: String,
    pub max_text_size: usize,
    pub max_edges: usize,
}

impl Default for RasterizeOptions {
    fn default() -> Self {
        Self {
            program: DEFAULT_RENDERER.to_string(),
            max_text_size: DEFAULT_MAX_TEXT_SIZE,
            max_edges: DEFAULT_MAX_EDGES,
        }
    }
}

/// Mermaid configuration file contents; raises the renderer's size limits
/// so large projects still render.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RendererConfig {
    max_text_size: usize,
    max_edges: usize,
}

/// Render `diagram` to the image at `output` (format chosen by the
/// renderer from the extension).
pub fn rasterize(
    diagram: &str,
    output: &Path,
    opts: &RasterizeOptions,
) -> Result<(), RasterizeError> {
    info!("Rasterizing diagram to {} with '{}'", output.display(), opts.program);

    let mut input = tempfile::Builder::new().prefix("tsdeps-").suffix(".mmd").tempfile()?;
    input.write_all(diagram.as_bytes())?;
    input.flush()?;

    let config = write_config(opts)?;

    let result = Command::new(&opts.program)
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output)
        .arg("-c")
        .arg(config.path())
        .output()
        .map_err(|source| RasterizeError::Spawn { program: opts.program.clone(), source })?;

    if !result.status.success() {
        return Err(RasterizeError::Failed {
            program: opts.program.clone(),
            status: result.status,
            stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
        });
    }

    debug!("Renderer wrote {}", output.display());
    Ok(())
}

fn write_config(opts: &RasterizeOptions) -> Result<NamedTempFile, RasterizeError> {
    let cfg = RendererConfig { max_text_size: opts.max_text_size, max_edges: opts.max_edges };
    let mut file = tempfile::Builder::new().prefix("tsdeps-").suffix(".json").tempfile()?;
    serde_json::to_writer(&mut file, &cfg)?;
    file.flush()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_json_shape() {
        let opts = RasterizeOptions { max_text_size: 10, max_edges: 3, ..Default::default() };
        let file = write_config(&opts).unwrap();
        let text = fs::read_to_string(file.path()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["maxTextSize"], 10);
        assert_eq!(v["maxEdges"], 3);
    }

    #[test]
    fn test_missing_renderer() {
        let temp_dir = TempDir::new().unwrap();
        let opts = RasterizeOptions {
            program: temp_dir.path().join("no-such-mmdc").to_string_lossy().to_string(),
            ..Default::default()
        };
        let err = rasterize("graph LR\n", &temp_dir.path().join("out.png"), &opts).unwrap_err();
        assert!(matches!(err, RasterizeError::Spawn { .. }));
    }

    #[cfg(unix)]
    fn write_script(dir: &Path, name: &str, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().to_string()
    }

    #[cfg(unix)]
    #[test]
    fn test_renderer_receives_diagram_and_config() {
        let temp_dir = TempDir::new().unwrap();
        // Arguments: -i <in> -o <out> -c <cfg>
        let program = write_script(
            temp_dir.path(),
            "fake-mmdc",
            "cp \"$2\" \"$4\" && cp \"$6\" \"$4.json\"",
        );
        let output = temp_dir.path().join("graph.png");
        let opts = RasterizeOptions { program, max_text_size: 42, ..Default::default() };

        rasterize("graph LR\n    a --> b\n", &output, &opts).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "graph LR\n    a --> b\n");
        let cfg = fs::read_to_string(temp_dir.path().join("graph.png.json")).unwrap();
        assert!(cfg.contains("\"maxTextSize\":42"), "{}", cfg);
    }

    #[cfg(unix)]
    #[test]
    fn test_renderer_failure_carries_stderr() {
        let temp_dir = TempDir::new().unwrap();
        let program =
            write_script(temp_dir.path(), "broken-mmdc", "echo 'parse error' >&2\nexit 3");
        let opts = RasterizeOptions { program, ..Default::default() };

        let err = rasterize("graph LR\n", &temp_dir.path().join("out.svg"), &opts).unwrap_err();
        match err {
            RasterizeError::Failed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "parse error");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
