use anyhow::{Context, Result};
use eloview_providers::parse_log_file;
use std::path::Path;

pub fn handle(input: &Path, output: Option<&Path>) -> Result<()> {
    let events = parse_log_file(input)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    tracing::info!(events = events.len(), "parsed capture log");

    super::write_json(&events, output)
}
