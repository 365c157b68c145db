//! Output materialization: temp file write and CI output publication.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::error::ResolveError;

/// Environment variable naming the CI runner's step-output file.
const OUTPUT_CHANNEL_VAR: &str = "GITHUB_OUTPUT";

/// Write `definition` as compact JSON to a fresh uniquely named file in `dir`.
///
/// The name carries the `task-definition-` prefix and `.json` suffix around a
/// random infix, so concurrent invocations sharing a temp directory never
/// collide. The file persists after the process exits; downstream pipeline
/// steps own it from here.
///
/// # Errors
///
/// Returns an error if the file cannot be created, persisted, or written.
pub fn write_task_definition(dir: &Path, definition: &Value) -> Result<PathBuf, ResolveError> {
    let file = tempfile::Builder::new()
        .prefix("task-definition-")
        .suffix(".json")
        .tempfile_in(dir)?;
    let (mut handle, path) = file.keep().map_err(|err| ResolveError::Io(err.error))?;
    handle.write_all(definition.to_string().as_bytes())?;
    info!(path = %path.display(), "wrote sanitized task definition");
    Ok(path)
}

/// Publish `path` as the step output `taskDef`.
///
/// Appends a `taskDef=<path>` line to the runner's output file when
/// `GITHUB_OUTPUT` is set, and always prints the path on stdout.
///
/// # Errors
///
/// Returns an error if the output file cannot be appended.
pub fn publish_path(path: &Path) -> Result<(), ResolveError> {
    if let Some(channel) = env::var_os(OUTPUT_CHANNEL_VAR) {
        let mut file = OpenOptions::new().create(true).append(true).open(channel)?;
        writeln!(file, "taskDef={}", path.display())?;
    }
    println!("{}", path.display());
    Ok(())
}
