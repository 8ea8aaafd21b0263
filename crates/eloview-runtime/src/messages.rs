use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Request to convert one captured match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub match_id: i64,
    pub platform_id: String,
    pub elo_data_path: String,
    pub match_details_path: String,
    #[serde(default)]
    pub summoner_ids: Vec<i64>,
    /// Recompute even if a baseview already exists
    #[serde(default, rename = "override")]
    pub override_existing: bool,
}

impl ConvertRequest {
    pub fn validate(&self) -> Result<()> {
        if self.match_id == 0
            || self.platform_id.is_empty()
            || self.elo_data_path.is_empty()
            || self.match_details_path.is_empty()
            || self.summoner_ids.is_empty()
        {
            return Err(Error::InvalidRequest(
                "elo_data_path, match_details_path, match_id, platform_id, and at least one summoner_id must be set"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Store path of this match's baseview under `output_dir`.
    pub fn baseview_path(&self, output_dir: &str) -> String {
        format!(
            "{}/{}-{}.baseview.json",
            output_dir.trim_end_matches('/'),
            self.match_id,
            self.platform_id
        )
    }
}

/// Announcement that a participant's baseview is ready for stats ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedStatsIngest {
    pub baseview_path: String,
    pub baseview_type: String,
    pub match_id: i64,
    pub platform_id: String,
    pub summoner_id: i64,
}
