use crate::Result;
use eloview_types::MatchDetail;
use std::path::Path;

/// Decode a match-detail JSON document.
pub fn parse_match_detail(bytes: &[u8]) -> Result<MatchDetail> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Read and decode a match-detail JSON file.
pub fn read_match_detail_file(path: &Path) -> Result<MatchDetail> {
    let bytes = std::fs::read(path)?;
    parse_match_detail(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_match_detail() {
        let json = br#"{
            "matchId": 77,
            "matchDuration": 200,
            "participants": [{"participantId": 1, "championId": 103, "spell1Id": 4, "spell2Id": 14}],
            "participantIdentities": [{"participantId": 1, "player": {"summonerId": 555, "summonerName": "Faker"}}]
        }"#;

        let detail = parse_match_detail(json).unwrap();
        assert_eq!(detail.match_id, 77);
        assert_eq!(detail.participants[0].spell2_id, 14);
        assert_eq!(
            detail.participant_identities[0]
                .player
                .as_ref()
                .map(|p| p.summoner_name.as_str()),
            Some("Faker")
        );
    }

    #[test]
    fn test_parse_match_detail_invalid() {
        assert!(matches!(
            parse_match_detail(b"{not json"),
            Err(crate::Error::Json(_))
        ));
    }
}
