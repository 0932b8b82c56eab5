// Character creation
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_POTIONS: u32 = 3;
pub const STARTING_GOLD: u64 = 100;

// Character attributes
pub const NUM_ATTRIBUTES: usize = 5;

// Experience and progression
pub const XP_PER_LEVEL: u64 = 100;
pub const LEVEL_UP_ATTRIBUTE_GAIN: i64 = 2;
pub const LEVEL_UP_HEALTH_GAIN: i64 = 20;
pub const EVOLUTION_LEVEL: u32 = 10;

/// Kaosborne evolution adds either 0 or this much to each stat.
pub const CHAOS_EVOLUTION_BONUS: i64 = 100;

// Chaos stat generator
pub const CHAOS_MULT_RANGE: (i64, i64) = (1, 101);
pub const CHAOS_DIV_RANGE: (i64, i64) = (1, 3);
pub const CHAOS_SCALE: i64 = 100;
/// Only produced when `mult == 0` and `div == 2`, which the draw range above never yields.
pub const CHAOS_JACKPOT: i64 = 99_999_999_999_999;

// Enemy scaling
pub const ENEMY_HEALTH_PER_LEVEL: i64 = 20;
pub const ENEMY_ATTRIBUTE_PER_LEVEL: i64 = 2;
pub const ENEMY_ATTACK_SPREAD: i64 = 10;

// Basic attack
pub const BASIC_ATTACK_ROLL: (i64, i64) = (1, 10);
pub const DEFEND_FLAT_REDUCTION: i64 = 5;

// Mana-gated abilities
pub const INFERNAL_RAGE_MANA_COST: i64 = 20;
pub const INFERNAL_RAGE_BONUS: i64 = 30;

// PvE rewards per enemy level
pub const XP_REWARD_PER_ENEMY_LEVEL: u64 = 50;
pub const GOLD_REWARD_PER_ENEMY_LEVEL: u64 = 20;

// Shop and potions
pub const POTION_COST: u64 = 20;
pub const POTION_HEAL_RANGE: (i64, i64) = (30, 50);

/// Separator between primary and secondary ability in a display label.
pub const ABILITY_SEPARATOR: &str = " | ";

// Roster file
/// "ARENA\0V1" little-endian; bump when the roster layout changes.
pub const ROSTER_FORMAT_MAGIC: u64 = 0x3156_0041_4E45_5241;
pub const ROSTER_FILE_NAME: &str = "roster.dat";
