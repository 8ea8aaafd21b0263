use eloview_types::{EloEvent, EloPayload};

use crate::error::TruncationError;

/// Allowed disagreement between log and API durations.
pub const TRUNCATION_TOLERANCE_SECS: f64 = 30.0;

/// Fail if the log's estimated duration disagrees with the API duration.
pub fn check_truncation(
    events: &[EloEvent],
    match_duration_secs: i64,
) -> Result<(), TruncationError> {
    check_truncation_with(events, match_duration_secs, TRUNCATION_TOLERANCE_SECS)
}

pub fn check_truncation_with(
    events: &[EloEvent],
    match_duration_secs: i64,
    tolerance_secs: f64,
) -> Result<(), TruncationError> {
    if events.is_empty() {
        return Err(TruncationError::NoEvents);
    }

    let elo_seconds = elo_duration_seconds(events);
    let api_seconds = match_duration_secs as f64;
    if (elo_seconds - api_seconds).abs() > tolerance_secs {
        return Err(TruncationError::DurationMismatch {
            elo_seconds,
            api_seconds,
        });
    }
    Ok(())
}

/// Log seconds between the first event and the last significant one.
///
/// Pings keep arriving for minutes after a surrender, and the final record is
/// the end-of-game marker, so both are skipped when looking for the end.
pub fn elo_duration_seconds(events: &[EloEvent]) -> f64 {
    let (Some(first), Some((_, body))) = (events.first(), events.split_last()) else {
        return 0.0;
    };

    body.iter()
        .rev()
        .find(|e| is_significant(e))
        .map(|last| last.time - first.time)
        .unwrap_or(0.0)
}

fn is_significant(event: &EloEvent) -> bool {
    matches!(
        event.payload,
        EloPayload::Damage(_)
            | EloPayload::ChampDie(_)
            | EloPayload::ChampKill(_)
            | EloPayload::Die(_)
            | EloPayload::SpellCast(_)
            | EloPayload::NexusDestroyed(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use eloview_types::capture::{ActorRef, GameEndPayload, NexusDestroyedPayload, PingPayload};

    fn events() -> Vec<EloEvent> {
        vec![
            EloEvent::new(0.5, EloPayload::Ping(PingPayload::default())),
            EloEvent::new(10.0, EloPayload::Die(ActorRef { network_id: 1 })),
            EloEvent::new(150.0, EloPayload::Die(ActorRef { network_id: 2 })),
            EloEvent::new(
                199.3,
                EloPayload::NexusDestroyed(NexusDestroyedPayload {
                    nexus: "HQ_T2".to_string(),
                }),
            ),
            EloEvent::new(199.4, EloPayload::GameEnd(GameEndPayload {})),
        ]
    }

    #[test]
    fn test_complete_capture() {
        assert_eq!(check_truncation(&events(), 200), Ok(()));
    }

    #[test]
    fn test_truncated_capture() {
        let mut events = events();
        events.truncate(3);

        assert!(matches!(
            check_truncation(&events, 200),
            Err(TruncationError::DurationMismatch { .. })
        ));
    }

    #[test]
    fn test_final_event_is_skipped() {
        let mut events = events();
        events.pop();

        // NexusDestroyed is now last and skipped, so the estimate ends at the 150.0 death
        assert_eq!(elo_duration_seconds(&events), 149.5);
        assert!(check_truncation(&events, 200).is_err());
    }

    #[test]
    fn test_no_events() {
        assert_eq!(check_truncation(&[], 0), Err(TruncationError::NoEvents));
    }

    #[test]
    fn test_error_message() {
        let err = check_truncation(&events()[..2], 200).unwrap_err();
        assert_eq!(
            err.to_string(),
            "elo duration is 0.0, but api match duration is 200.0"
        );
    }
}
