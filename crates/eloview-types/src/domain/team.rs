pub const BLUE_TEAM: i64 = 100;
pub const RED_TEAM: i64 = 200;

/// Team of a participant: 1-5 play blue, 6-10 play red, anything else is 0.
pub fn team_id(participant_id: i64) -> i64 {
    match participant_id {
        1..=5 => BLUE_TEAM,
        6..=10 => RED_TEAM,
        _ => 0,
    }
}
