use crate::error::ParseErrorKind;
use eloview_types::capture::NetworkIdMappingPayload;
use eloview_types::{EloEvent, EloPayload};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::tokenizer::LogRecord;

/// Record names that carry no information we convert (surrender votes, stall
/// and respawn notices). They are dropped silently.
pub const IGNORED_EVENTS: &[&str] = &[
    "END_GAME",
    "GAME_STALL",
    "DAMPENER_RESPAWN",
    "DAMPENER_RESPAWN_SOON",
    "SURRENDER_AGREED",
];

/// Classify a tokenized record into a typed capture event.
///
/// Returns `Ok(None)` for ignorable records. Any other unrecognized name is an
/// error: one malformed line rejects the whole log.
///
/// Fields the variant expects but the record omits keep their zero value.
pub fn classify(record: &LogRecord) -> Result<Option<EloEvent>, ParseErrorKind> {
    let name = record.event.as_str();
    if IGNORED_EVENTS.contains(&name) {
        return Ok(None);
    }

    let payload = match name {
        "BASIC_ATTACK" => EloPayload::BasicAttack(decode(record)?),
        "CHAMP_DIE" => EloPayload::ChampDie(decode(record)?),
        "CHAMP_KILL" => EloPayload::ChampKill(decode(record)?),
        "DAMAGE" => EloPayload::Damage(decode(record)?),
        "DIE" => EloPayload::Die(decode(record)?),
        "GAME_END" => EloPayload::GameEnd(decode(record)?),
        "ID_BARRACKS" | "ID_HERO" | "ID_TURRET" => {
            let mut mapping: NetworkIdMappingPayload = decode(record)?;
            mapping.elo_type = name.to_string();
            EloPayload::NetworkIdMapping(mapping)
        }
        "KILL" => EloPayload::Kill(decode(record)?),
        "LEVEL_UP" => EloPayload::LevelUp(decode(record)?),
        "NEXUS_DESTROYED" => EloPayload::NexusDestroyed(decode(record)?),
        "ON_CREATE" => EloPayload::OnCreate(decode(record)?),
        "ON_DELETE" => EloPayload::OnDelete(decode(record)?),
        "PING" => EloPayload::Ping(decode(record)?),
        "SPELL_CAST" => EloPayload::SpellCast(decode(record)?),
        unknown => {
            return Err(ParseErrorKind::UnknownEvent {
                name: unknown.to_string(),
            });
        }
    };

    Ok(Some(EloEvent::new(record.time()?, payload)))
}

fn decode<T: DeserializeOwned>(record: &LogRecord) -> Result<T, ParseErrorKind> {
    serde_json::from_value(Value::Object(record.to_json_map())).map_err(|err| {
        ParseErrorKind::Decode {
            event: record.event.clone(),
            message: err.to_string(),
        }
    })
}
