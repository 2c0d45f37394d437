//! Header rendering and the locate → parse → write pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::envfile::{self, EnvTable};

/// Marker written at the top of every generated header.
const PREAMBLE: &str = "// Auto-generated from .env\n\n";

/// What a run did to the filesystem.
#[derive(Debug)]
pub enum Outcome {
    /// No `.env` at the project root; nothing was written.
    Skipped { env_path: PathBuf },
    /// Header written (overwriting any previous content).
    Generated { header_path: PathBuf },
}

/// Render the header text for a parsed table: the marker, a blank line, then
/// one `#define KEY "VALUE"` per entry in iteration order. Values are wrapped
/// in double quotes verbatim, with no escaping.
pub fn render(table: &EnvTable) -> String {
    let mut out = String::from(PREAMBLE);
    for (key, value) in table.iter() {
        out.push_str("#define ");
        out.push_str(key);
        out.push_str(" \"");
        out.push_str(value);
        out.push_str("\"\n");
    }
    out
}

/// Run the full pipeline against a project root: read `<root>/.env` and
/// rewrite `<root>/main/env_config.h`.
///
/// A missing `.env` is not an error; the run reports a skip and touches
/// nothing. Read and write failures propagate with the offending path. The
/// output directory must already exist.
pub fn generate(root: &Path) -> anyhow::Result<Outcome> {
    let env_path = root.join(".env");
    let header_path = root.join("main").join("env_config.h");

    if !env_path.exists() {
        return Ok(Outcome::Skipped { env_path });
    }

    let contents = fs::read_to_string(&env_path)
        .with_context(|| format!("Failed to read {}", env_path.display()))?;
    let table = envfile::parse(&contents);
    debug!(entries = table.len(), env = %env_path.display(), "parsed .env");

    fs::write(&header_path, render(&table))
        .with_context(|| format!("Failed to write {}", header_path.display()))?;

    Ok(Outcome::Generated { header_path })
}
