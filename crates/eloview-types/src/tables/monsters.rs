pub const MONSTER_RIFT_HERALD: i64 = 300;
pub const MONSTER_BARON: i64 = 301;
pub const MONSTER_DRAGON_ELEMENTAL: i64 = 302;
pub const MONSTER_DRAGON_ELDER: i64 = 303;
pub const MONSTER_BLUE_SENTINEL: i64 = 304;
pub const MONSTER_BLUE_SENTINEL_MINI: i64 = 305;
pub const MONSTER_GROMP: i64 = 306;
pub const MONSTER_KRUG: i64 = 307;
pub const MONSTER_KRUG_MINI: i64 = 308;
pub const MONSTER_MURKWOLF: i64 = 309;
pub const MONSTER_MURKWOLF_MINI: i64 = 310;
pub const MONSTER_RAZOR: i64 = 311;
pub const MONSTER_RAZOR_MINI: i64 = 312;
pub const MONSTER_RED_BRAMB: i64 = 313;
pub const MONSTER_RED_BRAMB_MINI: i64 = 314;
pub const MONSTER_CRAB: i64 = 315;

// Ordered: the first matching prefix wins, so "mini" variants and the elder
// dragon must precede their shorter prefixes.
const MONSTER_PREFIXES: &[(&str, i64)] = &[
    ("riftherald", MONSTER_RIFT_HERALD),
    ("dragon_elder", MONSTER_DRAGON_ELDER),
    ("dragon", MONSTER_DRAGON_ELEMENTAL),
    ("bluemini", MONSTER_BLUE_SENTINEL_MINI),
    ("blue", MONSTER_BLUE_SENTINEL),
    ("gromp", MONSTER_GROMP),
    ("krugmini", MONSTER_KRUG_MINI),
    ("minikrug", MONSTER_KRUG_MINI),
    ("krug", MONSTER_KRUG),
    ("murkwolfmini", MONSTER_MURKWOLF_MINI),
    ("murkwolf", MONSTER_MURKWOLF),
    ("razorbeakmini", MONSTER_RAZOR_MINI),
    ("razorbeak", MONSTER_RAZOR),
    ("redmini", MONSTER_RED_BRAMB_MINI),
    ("red", MONSTER_RED_BRAMB),
    ("crab", MONSTER_CRAB),
];

/// Domain id for a jungle monster name such as `SRU_Dragon_Fire6.1.1`.
///
/// Not every monster carries the `sru_` prefix (e.g. `MiniKrug`).
pub fn monster_id(name: &str) -> Option<i64> {
    let lower = name.to_lowercase();
    let clean = lower.strip_prefix("sru_").unwrap_or(&lower);

    // Baron's spawn marker shares the prefix but is not the monster.
    if clean.starts_with("baron") {
        return (!clean.starts_with("baronspawn")).then_some(MONSTER_BARON);
    }

    MONSTER_PREFIXES
        .iter()
        .find(|(prefix, _)| clean.starts_with(prefix))
        .map(|(_, id)| *id)
}

pub fn is_epic_monster(id: i64) -> bool {
    matches!(
        id,
        MONSTER_RIFT_HERALD | MONSTER_BARON | MONSTER_DRAGON_ELEMENTAL | MONSTER_DRAGON_ELDER
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_lookup() {
        assert_eq!(monster_id("SRU_Baron12.1.1"), Some(MONSTER_BARON));
        assert_eq!(monster_id("SRU_BaronSpawn12.1.1"), None);
        assert_eq!(monster_id("SRU_Dragon_Elder6.5.1"), Some(MONSTER_DRAGON_ELDER));
        assert_eq!(monster_id("SRU_Dragon_Fire6.1.1"), Some(MONSTER_DRAGON_ELEMENTAL));
        assert_eq!(monster_id("SRU_BlueMini1.1.2"), Some(MONSTER_BLUE_SENTINEL_MINI));
        assert_eq!(monster_id("SRU_Blue1.1.1"), Some(MONSTER_BLUE_SENTINEL));
        assert_eq!(monster_id("MiniKrug"), Some(MONSTER_KRUG_MINI));
        assert_eq!(monster_id("Sru_Crab15.1.1"), Some(MONSTER_CRAB));
        assert_eq!(monster_id("Minion_T100L0S0N0001"), None);
    }

    #[test]
    fn test_epic_monsters() {
        assert!(is_epic_monster(MONSTER_BARON));
        assert!(is_epic_monster(MONSTER_RIFT_HERALD));
        assert!(!is_epic_monster(MONSTER_GROMP));
        assert!(!is_epic_monster(MONSTER_CRAB));
    }
}
