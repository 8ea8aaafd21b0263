use eloview_engine::participant_roster;
use eloview_testing::MatchFixture;

#[test]
fn test_roster_encoding() {
    let detail = MatchFixture::default().match_detail();
    let roster = participant_roster(&detail).unwrap();

    insta::assert_json_snapshot!("fixture_roster", roster);
}
