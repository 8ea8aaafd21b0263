use std::collections::HashMap;

use chrono::{DateTime, Utc};
use eloview_types::{
    ActorType, AttackPayload, Baseview, BaseviewEvent, BuildingKillPayload, DamagePayload,
    DeathPayload, EloEvent, EloPayload, Entity, EpicMonsterKillPayload, EventPayload,
    GameEndPayload, ItemUsedPayload, LevelUpPayload, Participant, Position,
    SlotUpgradePayload, SpawnPayload, StateUpdatePayload, WardDeathPayload, WardItemType,
    is_epic_monster, is_item_slot, is_ward_name,
};

use eloview_types::capture::PingPayload;

use crate::error::Result;
use crate::resolver::EntityResolver;
use crate::wards::{WardCast, WardCreation, place_wards};

/// Max health assumed when no later ping of the victim exists.
const DEFAULT_MAX_HEALTH: f64 = 1000.0;

/// How far after a cast pings are searched for the slot's new cooldown.
const COOLDOWN_SEARCH_SECS: f64 = 5.0;

const BASIC_ATTACK_SLOT: &str = "basic";
const REASON_NEXUS_DESTROYED: &str = "nexus_destroyed";
const REASON_UNKNOWN: &str = "unknown";

/// Replay calibrated events into a baseview.
///
/// Events must already carry match seconds. Records about actors that cannot
/// carry a canonical event (typeless or neutral) are dropped; ids that were
/// never announced are an error.
pub fn build_baseview(
    events: &[EloEvent],
    participants: &[Participant],
    last_updated: DateTime<Utc>,
) -> Result<Baseview> {
    let resolver = EntityResolver::from_events(events, participants);
    let mut builder = BaseviewBuilder::new(events, &resolver);

    for index in 0..events.len() {
        builder.add_event(index)?;
    }

    let events = builder.finish()?;
    tracing::debug!(events = events.len(), "built baseview");

    Ok(Baseview {
        last_updated,
        participants: participants.to_vec(),
        events,
    })
}

#[derive(Debug, Default)]
struct HeroState {
    dead: bool,
    ability_levels: [i64; 4],
}

struct BaseviewBuilder<'a> {
    events: &'a [EloEvent],
    resolver: &'a EntityResolver,

    output: Vec<BaseviewEvent>,
    last_position: HashMap<i64, Position>,
    heroes: HashMap<i64, HeroState>,
    nexus_destroyed: bool,

    ward_casts: Vec<WardCast>,
    ward_creations: Vec<WardCreation>,
}

impl<'a> BaseviewBuilder<'a> {
    fn new(events: &'a [EloEvent], resolver: &'a EntityResolver) -> Self {
        Self {
            events,
            resolver,
            output: Vec::new(),
            last_position: HashMap::new(),
            heroes: HashMap::new(),
            nexus_destroyed: false,
            ward_casts: Vec::new(),
            ward_creations: Vec::new(),
        }
    }

    fn add_event(&mut self, index: usize) -> Result<()> {
        let events = self.events;
        let event = &events[index];

        match &event.payload {
            EloPayload::BasicAttack(attack) => {
                let attacker = self.resolver.get(attack.network_id)?;
                let target = self.resolver.get(attack.target_network_id)?;
                if let Some(attacker_type) = attacker.kind {
                    self.emit(
                        event,
                        EventPayload::Attack(AttackPayload {
                            cooldown_expires: 0.0,
                            start: None,
                            end: None,
                            attacker_id: attacker.id,
                            attacker_type,
                            slot: BASIC_ATTACK_SLOT.to_string(),
                            target_id: target.id,
                            target_type: target.kind,
                            target_position: Some(attack.target_position),
                        }),
                    );
                }
            }

            EloPayload::ChampDie(actor) => {
                let champ = self.resolver.get(actor.network_id)?;
                if let Some(victim_id) = champ.participant_id() {
                    let position = self
                        .last_position
                        .get(&actor.network_id)
                        .copied()
                        .unwrap_or_default();
                    self.emit(
                        event,
                        EventPayload::Death(DeathPayload {
                            position,
                            victim_id,
                        }),
                    );
                }
            }

            EloPayload::Damage(damage) => {
                let attacker = self.resolver.get(damage.network_id)?;
                let victim = self.resolver.get(damage.target_network_id)?;
                if let Some(victim_type) = victim.kind {
                    let max_health = self.victim_max_health(index, damage.target_network_id);
                    self.emit(
                        event,
                        EventPayload::Damage(DamagePayload {
                            total: damage.damage,
                            percent: damage.damage * 100.0 / max_health,
                            attacker_id: attacker.id,
                            attacker_type: attacker.kind,
                            victim_id: victim.id,
                            victim_type,
                        }),
                    );
                }
            }

            EloPayload::Die(actor) => {
                let victim = self.resolver.get(actor.network_id)?;
                self.add_die(index, actor.network_id, &victim)?;
            }

            EloPayload::LevelUp(level_up) if level_up.level > 0 => {
                let champ = self.resolver.get(level_up.network_id)?;
                if let Some(participant_id) = champ.participant_id() {
                    self.emit(
                        event,
                        EventPayload::LevelUp(LevelUpPayload {
                            level: level_up.level,
                            participant_id,
                        }),
                    );
                }
            }

            EloPayload::OnCreate(object) if is_ward_name(&object.sender_name) => {
                self.ward_creations.push(WardCreation {
                    match_seconds: event.match_seconds,
                    network_id: object.network_id,
                    team_id: object.team_id,
                    position: object.position,
                });
            }

            EloPayload::Ping(ping) => {
                let person = self.resolver.get(ping.network_id)?;
                if let Some(participant_id) = person.participant_id() {
                    self.add_ping(event, ping, participant_id);
                }
            }

            EloPayload::SpellCast(cast) => {
                if let Some(item_type) = WardItemType::from_spell_name(&cast.spell_name) {
                    self.ward_casts.push(WardCast {
                        match_seconds: event.match_seconds,
                        network_id: cast.network_id,
                        end_position: cast.end_position,
                        item_type,
                    });
                    return Ok(());
                }

                let caster = self.resolver.get(cast.network_id)?;
                let cooldown_expires = self.cooldown_expiry(index, cast.network_id, &cast.slot);

                if is_item_slot(&cast.slot) {
                    if let Some(participant_id) = caster.participant_id() {
                        self.emit(
                            event,
                            EventPayload::ItemUsed(ItemUsedPayload {
                                participant_id,
                                slot: cast.slot.clone(),
                                cooldown_expires,
                            }),
                        );
                    }
                    return Ok(());
                }

                let target = self.resolver.get(cast.target_network_id)?;
                if let Some(attacker_type) = caster.kind {
                    self.emit(
                        event,
                        EventPayload::Attack(AttackPayload {
                            cooldown_expires,
                            start: Some(cast.start_position),
                            end: Some(cast.end_position),
                            attacker_id: caster.id,
                            attacker_type,
                            slot: cast.slot.clone(),
                            target_id: target.id,
                            target_type: target.kind,
                            target_position: None,
                        }),
                    );
                }
            }

            EloPayload::NexusDestroyed(_) => self.nexus_destroyed = true,

            EloPayload::GameEnd(_) => {
                let reason = if self.nexus_destroyed {
                    REASON_NEXUS_DESTROYED
                } else {
                    REASON_UNKNOWN
                };
                self.emit(
                    event,
                    EventPayload::GameEnd(GameEndPayload {
                        reason: reason.to_string(),
                    }),
                );
            }

            _ => {}
        }

        Ok(())
    }

    fn add_die(&mut self, index: usize, network_id: i64, victim: &Entity) -> Result<()> {
        let events = self.events;
        let event = &events[index];

        match victim.kind {
            Some(building_type) if building_type.is_building() => {
                self.emit(
                    event,
                    EventPayload::BuildingKill(BuildingKillPayload {
                        building_type,
                        building_id: victim.id,
                    }),
                );
            }
            _ if is_ward_name(&victim.name) => {
                self.emit(
                    event,
                    EventPayload::WardDeath(WardDeathPayload {
                        ward_id: network_id,
                    }),
                );
            }
            Some(ActorType::Monster) if is_epic_monster(victim.id) => {
                let killer_id = self.epic_killer(index)?;
                self.emit(
                    event,
                    EventPayload::EpicMonsterKill(EpicMonsterKillPayload {
                        victim_id: victim.id,
                        killer_id,
                    }),
                );
            }
            _ => {}
        }

        Ok(())
    }

    fn add_ping(&mut self, event: &EloEvent, ping: &PingPayload, participant_id: i64) {
        self.last_position.insert(ping.network_id, ping.position);

        let first_seen = !self.heroes.contains_key(&ping.network_id);
        let state = self.heroes.entry(ping.network_id).or_default();
        let respawned = first_seen || (state.dead && !ping.dead);
        state.dead = ping.dead;

        let mut upgrades = Vec::new();
        for (i, (slot, level)) in ping.ability_levels().into_iter().enumerate() {
            if level > state.ability_levels[i] {
                state.ability_levels[i] = level;
                upgrades.push(SlotUpgradePayload {
                    level,
                    slot: slot.to_string(),
                    participant_id,
                });
            }
        }

        if respawned && !ping.dead {
            self.emit(
                event,
                EventPayload::Spawn(SpawnPayload {
                    participant_id,
                    position: ping.position,
                }),
            );
        }
        for upgrade in upgrades {
            self.emit(event, EventPayload::SlotUpgrade(upgrade));
        }

        self.emit(
            event,
            EventPayload::StateUpdate(StateUpdatePayload {
                gold: ping.gold,
                health: ping.health,
                health_max: ping.health_max,
                in_grass: ping.in_grass,
                minions_killed: ping.minions_killed,
                neutral_minions_killed: ping.neutral_minions_killed,
                mana: ping.mana,
                mana_max: ping.mana_max,
                participant_id,
                position: ping.position,
                under_own_turret: ping.under_turret && !ping.under_enemy_turret,
                under_enemy_turret: ping.under_enemy_turret,
            }),
        );
    }

    fn emit(&mut self, event: &EloEvent, payload: EventPayload) {
        self.output
            .push(BaseviewEvent::new(event.match_seconds, payload));
    }

    /// Max health from the victim's next ping at or after `index`.
    fn victim_max_health(&self, index: usize, network_id: i64) -> f64 {
        self.events[index..]
            .iter()
            .find_map(|e| match &e.payload {
                EloPayload::Ping(p) if p.network_id == network_id => Some(p.health_max),
                _ => None,
            })
            .filter(|health_max| *health_max > 0.0)
            .unwrap_or(DEFAULT_MAX_HEALTH)
    }

    /// Match seconds at which a cast slot comes off cooldown.
    ///
    /// Cooldowns are only visible in pings, and the first ping after a cast
    /// does not always reflect it yet. The first ping within
    /// `COOLDOWN_SEARCH_SECS` whose expiry lies in its future wins; without one
    /// the slot is taken to be ready at cast time.
    fn cooldown_expiry(&self, index: usize, network_id: i64, slot: &str) -> f64 {
        let cast = &self.events[index];

        for e in &self.events[index..] {
            if e.match_seconds - cast.match_seconds > COOLDOWN_SEARCH_SECS {
                break;
            }
            let EloPayload::Ping(ping) = &e.payload else {
                continue;
            };
            if ping.network_id != network_id {
                continue;
            }
            if let Some(expiry) = ping.cooldown_expiry(slot)
                && expiry > e.time
            {
                return expiry + cast.match_seconds - cast.time;
            }
        }

        cast.match_seconds
    }

    /// Participant credited with an epic monster: the hero of a `KILL`
    /// record logged at the same instant as the monster's death.
    fn epic_killer(&self, index: usize) -> Result<i64> {
        let time = self.events[index].time;
        let before = self.events[..index]
            .iter()
            .rev()
            .take_while(|e| e.time == time);
        let after = self.events[index + 1..]
            .iter()
            .take_while(|e| e.time == time);

        for e in before.chain(after) {
            if let EloPayload::Kill(actor) = &e.payload {
                let killer = self.resolver.get(actor.network_id)?;
                if let Some(participant_id) = killer.participant_id() {
                    return Ok(participant_id);
                }
            }
        }
        Ok(0)
    }

    fn finish(mut self) -> Result<Vec<BaseviewEvent>> {
        let placed = place_wards(&self.ward_creations, self.ward_casts, self.resolver)?;
        self.output.extend(placed);
        self.output.sort_by(|a, b| a.seconds.total_cmp(&b.seconds));
        Ok(self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eloview_types::capture::{
        ActorRef, BasicAttackPayload, LevelUpPayload as EloLevelUp, NetworkIdMappingPayload,
        NexusDestroyedPayload, ObjectPayload, SpellCastPayload,
    };
    use eloview_types::{MONSTER_BARON, TURRET_RED_MID_OUTER, capture};

    const BLUE_HERO: i64 = 1001;
    const RED_HERO: i64 = 1006;

    fn at(time: f64, payload: EloPayload) -> EloEvent {
        EloEvent {
            time,
            match_seconds: time + 100.0,
            payload,
        }
    }

    fn hero(name: &str, network_id: i64) -> EloEvent {
        at(
            0.0,
            EloPayload::NetworkIdMapping(NetworkIdMappingPayload {
                sender_name: name.to_string(),
                network_id,
                elo_type: "ID_HERO".to_string(),
            }),
        )
    }

    fn created(time: f64, name: &str, network_id: i64) -> EloEvent {
        at(
            time,
            EloPayload::OnCreate(ObjectPayload {
                network_id,
                sender_name: name.to_string(),
                team_id: 200,
                position: Position::default(),
            }),
        )
    }

    fn ping(time: f64, network_id: i64, dead: bool, q_level: i64) -> EloEvent {
        at(
            time,
            EloPayload::Ping(PingPayload {
                network_id,
                dead,
                health: 400.0,
                health_max: 500.0,
                position: Position::new(time, 2.0, 3.0),
                q_level,
                under_turret: true,
                ..Default::default()
            }),
        )
    }

    fn roster() -> Vec<Participant> {
        [(1, "Blue"), (6, "Red")]
            .into_iter()
            .map(|(participant_id, name)| Participant {
                participant_id,
                summoner_name: name.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn build(events: &[EloEvent]) -> Vec<BaseviewEvent> {
        build_baseview(events, &roster(), Utc::now()).unwrap().events
    }

    fn payloads(events: &[BaseviewEvent], kind: &str) -> Vec<EventPayload> {
        events
            .iter()
            .filter(|e| e.kind() == kind)
            .map(|e| e.payload.clone())
            .collect()
    }

    #[test]
    fn test_damage_percent_uses_next_ping() {
        let events = vec![
            hero("Blue", BLUE_HERO),
            hero("Red", RED_HERO),
            at(
                5.0,
                EloPayload::Damage(capture::DamagePayload {
                    damage: 50.0,
                    network_id: BLUE_HERO,
                    target_network_id: RED_HERO,
                    ..Default::default()
                }),
            ),
            ping(6.0, RED_HERO, false, 0),
        ];

        let out = build(&events);
        let damage = payloads(&out, "damage");
        assert_eq!(
            damage,
            vec![EventPayload::Damage(DamagePayload {
                total: 50.0,
                percent: 10.0,
                attacker_id: 1,
                attacker_type: Some(ActorType::Hero),
                victim_id: 6,
                victim_type: ActorType::Hero,
            })]
        );
        assert_eq!(out[0].seconds, 105.0);
    }

    #[test]
    fn test_spawn_death_and_upgrades() {
        let events = vec![
            hero("Blue", BLUE_HERO),
            ping(1.0, BLUE_HERO, false, 1),
            at(2.0, EloPayload::ChampDie(ActorRef { network_id: BLUE_HERO })),
            ping(3.0, BLUE_HERO, true, 1),
            ping(4.0, BLUE_HERO, false, 2),
        ];

        let out = build(&events);

        let spawns = payloads(&out, "spawn");
        assert_eq!(spawns.len(), 2);

        let deaths = payloads(&out, "death");
        assert_eq!(
            deaths,
            vec![EventPayload::Death(DeathPayload {
                position: Position::new(1.0, 2.0, 3.0),
                victim_id: 1,
            })]
        );

        let upgrades = payloads(&out, "slot_upgrade");
        assert_eq!(upgrades.len(), 2);
        assert_eq!(
            upgrades[1],
            EventPayload::SlotUpgrade(SlotUpgradePayload {
                level: 2,
                slot: "Q".to_string(),
                participant_id: 1,
            })
        );

        let states = payloads(&out, "state_update");
        assert_eq!(states.len(), 3);
        match &states[0] {
            EventPayload::StateUpdate(state) => {
                assert!(state.under_own_turret);
                assert!(!state.under_enemy_turret);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_building_and_epic_kills() {
        let events = vec![
            hero("Blue", BLUE_HERO),
            created(1.0, "Turret_T2_C_05_A", 50),
            created(1.0, "SRU_Baron12.1.1", 60),
            at(10.0, EloPayload::Die(ActorRef { network_id: 50 })),
            at(20.0, EloPayload::Kill(ActorRef { network_id: BLUE_HERO })),
            at(20.0, EloPayload::Die(ActorRef { network_id: 60 })),
        ];

        let out = build(&events);
        assert_eq!(
            payloads(&out, "building_kill"),
            vec![EventPayload::BuildingKill(BuildingKillPayload {
                building_type: ActorType::Turret,
                building_id: TURRET_RED_MID_OUTER,
            })]
        );
        assert_eq!(
            payloads(&out, "epic_monster_kill"),
            vec![EventPayload::EpicMonsterKill(EpicMonsterKillPayload {
                victim_id: MONSTER_BARON,
                killer_id: 1,
            })]
        );
    }

    #[test]
    fn test_casts_and_items() {
        let mut cooldown_ping = ping(2.0, BLUE_HERO, false, 1);
        if let EloPayload::Ping(p) = &mut cooldown_ping.payload {
            p.q_exp = 8.0;
        }
        let cast = |slot: &str, name: &str| {
            at(
                1.0,
                EloPayload::SpellCast(SpellCastPayload {
                    spell_name: name.to_string(),
                    network_id: BLUE_HERO,
                    slot: slot.to_string(),
                    target_network_id: RED_HERO,
                    ..Default::default()
                }),
            )
        };
        let events = vec![
            hero("Blue", BLUE_HERO),
            hero("Red", RED_HERO),
            cast("Q", "EzrealMysticShot"),
            cast("Item3", "ItemRedemption"),
            cooldown_ping,
            at(
                3.0,
                EloPayload::BasicAttack(BasicAttackPayload {
                    network_id: RED_HERO,
                    target_network_id: BLUE_HERO,
                    target_position: Position::new(5.0, 5.0, 0.0),
                    ..Default::default()
                }),
            ),
        ];

        let out = build(&events);
        let attacks = payloads(&out, "attack");
        assert_eq!(attacks.len(), 2);
        match &attacks[0] {
            EventPayload::Attack(attack) => {
                assert_eq!(attack.slot, "Q");
                assert_eq!(attack.target_id, 6);
                // expiry 8.0 on the log clock, re-based by the +100 offset
                assert_eq!(attack.cooldown_expires, 108.0);
            }
            other => panic!("unexpected {:?}", other),
        }
        match &attacks[1] {
            EventPayload::Attack(attack) => {
                assert_eq!(attack.slot, "basic");
                assert_eq!(attack.attacker_id, 6);
                assert_eq!(attack.target_position, Some(Position::new(5.0, 5.0, 0.0)));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            payloads(&out, "item_used"),
            vec![EventPayload::ItemUsed(ItemUsedPayload {
                participant_id: 1,
                slot: "Item3".to_string(),
                cooldown_expires: 101.0,
            })]
        );
    }

    #[test]
    fn test_game_end_reason_and_level_up() {
        let events = vec![
            hero("Red", RED_HERO),
            at(
                5.0,
                EloPayload::LevelUp(EloLevelUp {
                    level: 0,
                    network_id: RED_HERO,
                    ..Default::default()
                }),
            ),
            at(
                6.0,
                EloPayload::LevelUp(EloLevelUp {
                    level: 2,
                    network_id: RED_HERO,
                    ..Default::default()
                }),
            ),
            at(
                9.0,
                EloPayload::NexusDestroyed(NexusDestroyedPayload {
                    nexus: "HQ_T1".to_string(),
                }),
            ),
            at(9.5, EloPayload::GameEnd(capture::GameEndPayload {})),
        ];

        let out = build(&events);
        assert_eq!(
            payloads(&out, "level_up"),
            vec![EventPayload::LevelUp(LevelUpPayload {
                level: 2,
                participant_id: 6,
            })]
        );
        assert_eq!(
            payloads(&out, "game_end"),
            vec![EventPayload::GameEnd(GameEndPayload {
                reason: "nexus_destroyed".to_string(),
            })]
        );
    }

    #[test]
    fn test_ward_placed_sorted_before_same_second_events() {
        let events = vec![
            hero("Red", RED_HERO),
            at(
                10.0,
                EloPayload::SpellCast(SpellCastPayload {
                    spell_name: "TrinketTotemLvl1".to_string(),
                    network_id: RED_HERO,
                    slot: "Trinket".to_string(),
                    ..Default::default()
                }),
            ),
            created(10.5, "SightWard", 70),
            at(10.5, EloPayload::Die(ActorRef { network_id: 70 })),
        ];

        let out = build(&events);
        assert_eq!(out[0].kind(), "ward_placed");
        assert_eq!(out[1].kind(), "ward_death");
        assert!((out[0].seconds - 110.49).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_network_id_fails() {
        let events = vec![at(1.0, EloPayload::ChampDie(ActorRef { network_id: 42 }))];

        assert!(matches!(
            build_baseview(&events, &roster(), Utc::now()),
            Err(crate::Error::Resolution(
                crate::ResolutionError::UnknownNetworkId { network_id: 42 }
            ))
        ));
    }
}
