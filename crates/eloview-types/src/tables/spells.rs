const SUMMONER_SPELLS: &[(i64, &str)] = &[
    (1, "cleanse"),
    (3, "exhaust"),
    (4, "flash"),
    (6, "ghost"),
    (7, "heal"),
    (11, "smite"),
    (12, "teleport"),
    (13, "clarity"),
    (14, "ignite"),
    (21, "barrier"),
    (30, "totheking"),
    (31, "porotoss"),
    (32, "mark"),
];

/// Lowercase summoner spell name for a match API spell id.
pub fn summoner_spell_name(id: i64) -> Option<&'static str> {
    SUMMONER_SPELLS
        .iter()
        .find(|(spell_id, _)| *spell_id == id)
        .map(|(_, name)| *name)
}

/// Whether a cast slot belongs to an item rather than an ability.
pub fn is_item_slot(slot: &str) -> bool {
    slot == "Trinket"
        || slot
            .strip_prefix("Item")
            .is_some_and(|n| matches!(n, "1" | "2" | "3" | "4" | "5" | "6"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summoner_spell_name() {
        assert_eq!(summoner_spell_name(4), Some("flash"));
        assert_eq!(summoner_spell_name(14), Some("ignite"));
        assert_eq!(summoner_spell_name(99), None);
    }

    #[test]
    fn test_is_item_slot() {
        assert!(is_item_slot("Item3"));
        assert!(is_item_slot("Trinket"));
        assert!(!is_item_slot("Item7"));
        assert!(!is_item_slot("Q"));
        assert!(!is_item_slot("Summoner1"));
    }
}
