use serde::{Deserialize, Serialize};

use super::payload::EventPayload;

/// Canonical baseview event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseviewEvent {
    /// Calibrated match seconds (match API clock)
    pub seconds: f64,

    /// Event type and content; `"event"` carries the discriminator
    #[serde(flatten)]
    pub payload: EventPayload,
}

impl BaseviewEvent {
    pub fn new(seconds: f64, payload: EventPayload) -> Self {
        Self { seconds, payload }
    }

    pub fn kind(&self) -> &'static str {
        self.payload.kind()
    }

    pub(crate) fn is_state_noise(&self) -> bool {
        matches!(
            self.payload,
            EventPayload::StateUpdate(_) | EventPayload::GameEnd(_)
        )
    }
}
