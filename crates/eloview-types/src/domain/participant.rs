use serde::{Deserialize, Serialize};

/// One of the ten players of a match, as published in the baseview
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Participant {
    pub participant_id: i64,
    pub summoner_id: i64,
    pub summoner_name: String,
    pub champion_id: i64,
    pub spell_1: String,
    pub spell_2: String,
}
