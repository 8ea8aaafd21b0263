use eloview::handlers;
use eloview_runtime::Config;
use eloview_testing::{MatchFixture, TestWorld};
use eloview_types::{Baseview, EloEvent};

#[test]
fn test_parse_writes_events() -> anyhow::Result<()> {
    let world = TestWorld::new()?;
    let files = world.write_match(&MatchFixture::default())?;
    let output = world.root().join("out/events.json");

    handlers::parse::handle(&files.elo_path, Some(&output))?;

    let events: Vec<EloEvent> = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert!(!events.is_empty());
    Ok(())
}

#[test]
fn test_convert_writes_baseview() -> anyhow::Result<()> {
    let world = TestWorld::new()?;
    let files = world.write_match(&MatchFixture::default())?;
    let output = world.root().join("baseview.json");

    handlers::convert::handle(
        &Config::default(),
        &files.elo_path,
        &files.match_details_path,
        Some(&output),
    )?;

    let baseview: Baseview = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(baseview.participants.len(), 10);
    Ok(())
}

#[test]
fn test_convert_rejects_truncated_capture() -> anyhow::Result<()> {
    let world = TestWorld::new()?;
    let files = world.write_match(&MatchFixture::default().truncated_at(650.0))?;
    let output = world.root().join("baseview.json");

    let result = handlers::convert::handle(
        &Config::default(),
        &files.elo_path,
        &files.match_details_path,
        Some(&output),
    );

    let message = result.unwrap_err().to_string();
    assert!(message.contains("elo duration is"), "{}", message);
    assert!(!output.exists());
    Ok(())
}
