// Engine - turns classified capture events into a calibrated baseview
// Sits between the source adapters (providers) and the job boundary (runtime)

pub mod builder;
pub mod calibrate;
pub mod error;
pub mod resolver;
pub mod roster;
pub mod truncation;
pub mod wards;

pub use builder::build_baseview;
pub use calibrate::{
    OFFSET_WARNING_SECS, ParticipantEvent, align_api, align_api_with, api_deaths,
    determine_offset, elo_deaths, update_match_seconds,
};
pub use error::{
    AlignmentError, Error, ParticipantError, ResolutionError, Result, TruncationError,
};
pub use resolver::EntityResolver;
pub use roster::participant_roster;
pub use truncation::{TRUNCATION_TOLERANCE_SECS, check_truncation, check_truncation_with};

use chrono::{DateTime, Utc};
use eloview_types::{Baseview, EloEvent, MatchDetail};

/// Tolerances applied while converting one match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub truncation_secs: f64,
    pub offset_warning_secs: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            truncation_secs: TRUNCATION_TOLERANCE_SECS,
            offset_warning_secs: OFFSET_WARNING_SECS,
        }
    }
}

/// Calibrate, validate and build in one pass.
///
/// `events` have their match seconds assigned as a side effect. Nothing is
/// returned unless every stage succeeds.
pub fn convert(
    events: &mut [EloEvent],
    detail: &MatchDetail,
    tolerances: Tolerances,
    last_updated: DateTime<Utc>,
) -> Result<Baseview> {
    align_api_with(events, detail, tolerances.offset_warning_secs)?;
    check_truncation_with(events, detail.match_duration, tolerances.truncation_secs)?;
    let participants = participant_roster(detail)?;
    build_baseview(events, &participants, last_updated)
}
