use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event::BaseviewEvent;
use crate::domain::Participant;

// NOTE: The baseview is the canonical, source-independent description of a
// match. Whether events came from a captured log or another collector, the
// statistics layer only ever sees this shape, with every timestamp already on
// the match API's clock.

/// Final output of one conversion job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Baseview {
    pub last_updated: DateTime<Utc>,
    pub participants: Vec<Participant>,
    pub events: Vec<BaseviewEvent>,
}

impl Baseview {
    /// Match seconds of the last event that is not a state update or game end.
    pub fn match_duration(&self) -> f64 {
        self.events
            .iter()
            .rev()
            .find(|e| !e.is_state_noise())
            .map(|e| e.seconds)
            .unwrap_or(0.0)
    }
}
