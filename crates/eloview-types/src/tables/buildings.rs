pub const TURRET_BLUE_TOP_INNER: i64 = 101;
pub const TURRET_BLUE_TOP_OUTER: i64 = 102;
pub const TURRET_BLUE_UPPER_NEXUS: i64 = 103;
pub const TURRET_BLUE_LOWER_NEXUS: i64 = 104;
pub const TURRET_BLUE_MID_BASE: i64 = 105;
pub const TURRET_BLUE_MID_INNER: i64 = 106;
pub const TURRET_BLUE_MID_OUTER: i64 = 107;
pub const TURRET_BLUE_TOP_BASE: i64 = 108;
pub const TURRET_BLUE_BOT_BASE: i64 = 109;
pub const TURRET_BLUE_BOT_INNER: i64 = 110;
pub const TURRET_BLUE_BOT_OUTER: i64 = 111;
pub const TURRET_BLUE_FOUNTAIN: i64 = 112;

pub const INHIBITOR_BLUE_TOP: i64 = 130;
pub const INHIBITOR_BLUE_MID: i64 = 131;
pub const INHIBITOR_BLUE_BOT: i64 = 132;

pub const TURRET_RED_TOP_INNER: i64 = 201;
pub const TURRET_RED_TOP_OUTER: i64 = 202;
pub const TURRET_RED_LOWER_NEXUS: i64 = 203;
pub const TURRET_RED_UPPER_NEXUS: i64 = 204;
pub const TURRET_RED_MID_BASE: i64 = 205;
pub const TURRET_RED_MID_INNER: i64 = 206;
pub const TURRET_RED_MID_OUTER: i64 = 207;
pub const TURRET_RED_TOP_BASE: i64 = 208;
pub const TURRET_RED_BOT_BASE: i64 = 209;
pub const TURRET_RED_BOT_INNER: i64 = 210;
pub const TURRET_RED_BOT_OUTER: i64 = 211;
pub const TURRET_RED_FOUNTAIN: i64 = 212;

pub const INHIBITOR_RED_TOP: i64 = 230;
pub const INHIBITOR_RED_MID: i64 = 231;
pub const INHIBITOR_RED_BOT: i64 = 232;

const TURRET_PREFIX: &str = "turret_";
const INHIBITOR_PREFIX: &str = "barracks_";

// Blue (t1) and red (t2) sides are not named symmetrically. Base turrets have
// moved between the "c" and "l"/"r" series across patches, so both spellings
// are kept.
const TURRETS: &[(&str, i64)] = &[
    ("t1_l_02_a", TURRET_BLUE_TOP_INNER),
    ("t1_l_03_a", TURRET_BLUE_TOP_OUTER),
    ("t1_c_01_a", TURRET_BLUE_UPPER_NEXUS),
    ("t1_c_02_a", TURRET_BLUE_LOWER_NEXUS),
    ("t1_c_03_a", TURRET_BLUE_MID_BASE),
    ("t1_c_04_a", TURRET_BLUE_MID_INNER),
    ("t1_c_05_a", TURRET_BLUE_MID_OUTER),
    ("t1_c_06_a", TURRET_BLUE_TOP_BASE),
    ("t1_l_01_a", TURRET_BLUE_TOP_BASE),
    ("t1_c_07_a", TURRET_BLUE_BOT_BASE),
    ("t1_r_01_a", TURRET_BLUE_BOT_BASE),
    ("t1_r_02_a", TURRET_BLUE_BOT_INNER),
    ("t1_r_03_a", TURRET_BLUE_BOT_OUTER),
    ("t2_l_01_a", TURRET_RED_TOP_BASE),
    ("t2_c_06_a", TURRET_RED_TOP_BASE),
    ("t2_l_02_a", TURRET_RED_TOP_INNER),
    ("t2_l_03_a", TURRET_RED_TOP_OUTER),
    ("t2_c_01_a", TURRET_RED_LOWER_NEXUS),
    ("t2_c_02_a", TURRET_RED_UPPER_NEXUS),
    ("t2_c_03_a", TURRET_RED_MID_BASE),
    ("t2_c_04_a", TURRET_RED_MID_INNER),
    ("t2_c_05_a", TURRET_RED_MID_OUTER),
    ("t2_r_01_a", TURRET_RED_BOT_BASE),
    ("t2_c_07_a", TURRET_RED_BOT_BASE),
    ("t2_r_02_a", TURRET_RED_BOT_INNER),
    ("t2_r_03_a", TURRET_RED_BOT_OUTER),
    ("chaosturretshrine_a", TURRET_RED_FOUNTAIN),
    ("orderturretshrine_a", TURRET_BLUE_FOUNTAIN),
];

const INHIBITORS: &[(&str, i64)] = &[
    ("t1_l1", INHIBITOR_BLUE_TOP),
    ("t1_c1", INHIBITOR_BLUE_MID),
    ("t1_r1", INHIBITOR_BLUE_BOT),
    ("t2_l1", INHIBITOR_RED_TOP),
    ("t2_c1", INHIBITOR_RED_MID),
    ("t2_r1", INHIBITOR_RED_BOT),
];

/// Whether a name uses the barracks (inhibitor) naming scheme at all.
pub fn is_inhibitor_name(name: &str) -> bool {
    name.to_lowercase().starts_with(INHIBITOR_PREFIX)
}

/// Domain id for a turret name such as `Turret_T1_C_05_A`.
///
/// Objects without the `_a` suffix share the prefix but are not turrets we
/// track; they resolve to `None`.
pub fn turret_id(name: &str) -> Option<i64> {
    lookup(&name.to_lowercase(), TURRET_PREFIX, TURRETS)
}

/// Domain id for an inhibitor name such as `Barracks_T2_R1`.
pub fn inhibitor_id(name: &str) -> Option<i64> {
    lookup(&name.to_lowercase(), INHIBITOR_PREFIX, INHIBITORS)
}

fn lookup(lower: &str, prefix: &str, table: &[(&str, i64)]) -> Option<i64> {
    let suffix = lower.strip_prefix(prefix)?;
    table
        .iter()
        .find(|(name, _)| *name == suffix)
        .map(|(_, id)| *id)
}
