//! Report Builder Library
//!
//! Roster JSON export -> HTML report file. The binary in `main.rs` is
//! a thin argument-parsing layer over these functions.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a roster export file and render it to an HTML string.
pub fn render_roster_file(input: &Path, include_css: bool) -> Result<String> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read roster file: {}", input.display()))?;
    bb_core::render_team_json(&json, include_css)
        .with_context(|| format!("Failed to render roster: {}", input.display()))
}

/// Render a roster export file and write the report next to it.
///
/// Nothing is written when rendering fails (fail fast, no partial
/// output).
pub fn write_report(input: &Path, output: &Path, include_css: bool) -> Result<()> {
    let html = render_roster_file(input, include_css)?;
    fs::write(output, &html)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        bytes = html.len(),
        "report written"
    );
    Ok(())
}
