//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use qmeas_ir::Observable;

/// Load an observable from a JSON IR file.
pub fn load_observable(path: &str) -> Result<Observable> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;
    let value: serde_json::Value =
        serde_json::from_str(&source).with_context(|| format!("Invalid JSON in {path}"))?;
    let observable =
        Observable::from_json(&value).with_context(|| format!("Invalid observable in {path}"))?;

    tracing::debug!(path, %observable, "loaded observable");
    Ok(observable)
}

/// Write `contents` to `output`, or print it when no file is given.
pub fn write_output(contents: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, contents).with_context(|| format!("Failed to write file: {path}"))?;
            tracing::info!(path, "wrote output");
        }
        None => println!("{contents}"),
    }
    Ok(())
}
