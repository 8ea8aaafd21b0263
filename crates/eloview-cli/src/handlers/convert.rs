use anyhow::{Context, Result};
use chrono::Utc;
use eloview_engine::convert;
use eloview_providers::{parse_log_file, read_match_detail_file};
use eloview_runtime::Config;
use std::path::Path;

pub fn handle(
    config: &Config,
    input: &Path,
    match_details: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let mut events = parse_log_file(input)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    let detail = read_match_detail_file(match_details)
        .with_context(|| format!("failed to read {}", match_details.display()))?;

    let baseview = convert(&mut events, &detail, config.tolerances(), Utc::now())?;
    tracing::info!(
        match_id = detail.match_id,
        events = baseview.events.len(),
        duration = baseview.match_duration(),
        "built baseview"
    );

    super::write_json(&baseview, output)
}
