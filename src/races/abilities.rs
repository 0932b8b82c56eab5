//! Ability names, flavor text and the effect family each one drives.

use crate::core::constants::ABILITY_SEPARATOR;
use crate::core::error::{ArenaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every ability a character or enemy can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    // Base race primaries
    InspiringStrike,
    StoutResolve,
    SwiftArrow,
    InfernalRage,
    HeavenlyGrace,
    DivineCharge,
    MiraculousTouch,
    SearingFlames,
    SavageBite,
    WildAnarchy,
    // Evolved primaries
    HeroicRally,
    StalwartFortress,
    ElvenGrace,
    HellfireBlast,
    DivineIntervention,
    CelestialSmite,
    MiraculousSalvation,
    DragonsFury,
    FeralRoar,
    ChaoticSurge,
    // Evolved secondaries
    GuardiansShield,
    MountainsMight,
    MysticArrow,
    DemonicFrenzy,
    CelestialLight,
    OlympianMight,
    BlessedStrike,
    AncientRoar,
    SavageCharge,
    AnarchicOnslaught,
}

impl Ability {
    pub const ALL: [Ability; 30] = [
        Ability::InspiringStrike,
        Ability::StoutResolve,
        Ability::SwiftArrow,
        Ability::InfernalRage,
        Ability::HeavenlyGrace,
        Ability::DivineCharge,
        Ability::MiraculousTouch,
        Ability::SearingFlames,
        Ability::SavageBite,
        Ability::WildAnarchy,
        Ability::HeroicRally,
        Ability::StalwartFortress,
        Ability::ElvenGrace,
        Ability::HellfireBlast,
        Ability::DivineIntervention,
        Ability::CelestialSmite,
        Ability::MiraculousSalvation,
        Ability::DragonsFury,
        Ability::FeralRoar,
        Ability::ChaoticSurge,
        Ability::GuardiansShield,
        Ability::MountainsMight,
        Ability::MysticArrow,
        Ability::DemonicFrenzy,
        Ability::CelestialLight,
        Ability::OlympianMight,
        Ability::BlessedStrike,
        Ability::AncientRoar,
        Ability::SavageCharge,
        Ability::AnarchicOnslaught,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Ability::InspiringStrike => "Inspiring Strike",
            Ability::StoutResolve => "Stout Resolve",
            Ability::SwiftArrow => "Swift Arrow",
            Ability::InfernalRage => "Infernal Rage",
            Ability::HeavenlyGrace => "Heavenly Grace",
            Ability::DivineCharge => "Divine Charge",
            Ability::MiraculousTouch => "Miraculous Touch",
            Ability::SearingFlames => "Searing Flames",
            Ability::SavageBite => "Savage Bite",
            Ability::WildAnarchy => "Wild Anarchy",
            Ability::HeroicRally => "Heroic Rally",
            Ability::StalwartFortress => "Stalwart Fortress",
            Ability::ElvenGrace => "Elven Grace",
            Ability::HellfireBlast => "Hellfire Blast",
            Ability::DivineIntervention => "Divine Intervention",
            Ability::CelestialSmite => "Celestial Smite",
            Ability::MiraculousSalvation => "Miraculous Salvation",
            Ability::DragonsFury => "Dragon's Fury",
            Ability::FeralRoar => "Feral Roar",
            Ability::ChaoticSurge => "Chaotic Surge",
            Ability::GuardiansShield => "Guardian's Shield",
            Ability::MountainsMight => "Mountain's Might",
            Ability::MysticArrow => "Mystic Arrow",
            Ability::DemonicFrenzy => "Demonic Frenzy",
            Ability::CelestialLight => "Celestial Light",
            Ability::OlympianMight => "Olympian Might",
            Ability::BlessedStrike => "Blessed Strike",
            Ability::AncientRoar => "Ancient Roar",
            Ability::SavageCharge => "Savage Charge",
            Ability::AnarchicOnslaught => "Anarchic Onslaught",
        }
    }

    /// Flavor text for the character sheet.
    pub fn description(&self) -> &'static str {
        match self {
            Ability::InspiringStrike => "A powerful blow that rallies allies and bolsters morale while damaging the enemy.",
            Ability::StoutResolve => "A defensive maneuver that steadies the fighter, reducing incoming damage and healing minor wounds.",
            Ability::SwiftArrow => "A rapid, precise attack that strikes the enemy quickly before they can react.",
            Ability::InfernalRage => "Unleashes demonic fury to deal heavy damage at the cost of some mana.",
            Ability::HeavenlyGrace => "Calls upon divine favor to gently heal and protect the user during battle.",
            Ability::DivineCharge => "A forceful, sacrificial charge that delivers extra damage to the foe.",
            Ability::MiraculousTouch => "A unique attack that simultaneously harms the enemy and restores the user's health.",
            Ability::SearingFlames => "Engulfs the target in intense fire, causing burning damage over time.",
            Ability::SavageBite => "A ferocious, animalistic attack that rips into the enemy with raw power.",
            Ability::WildAnarchy => "A chaotic assault with unpredictable effects. It may damage foes or even heal the user.",
            Ability::HeroicRally => "Inspires allies and boosts overall strength, making every strike count.",
            Ability::StalwartFortress => "Reinforces defenses to regenerate health quickly during combat.",
            Ability::ElvenGrace => "An elegant, swift attack that often doubles its damage on a successful hit.",
            Ability::HellfireBlast => "Releases a concentrated burst of infernal fire that incinerates adversaries.",
            Ability::DivineIntervention => "Summons celestial aid to dramatically heal and protect in critical moments.",
            Ability::CelestialSmite => "Delivers a devastating blow infused with heavenly power, punishing the enemy severely.",
            Ability::MiraculousSalvation => "A wondrous ability that can heal and even revive the user in desperate times.",
            Ability::DragonsFury => "Unleashes the wrath of ancient dragons to scorch and devastate opponents.",
            Ability::FeralRoar => "A primal, bone-chilling roar that boosts the user's attack while intimidating the enemy.",
            Ability::ChaoticSurge => "An unpredictable burst of energy that randomly inflicts damage or healing effects.",
            Ability::GuardiansShield => "Conjures a protective barrier that absorbs a portion of incoming damage.",
            Ability::MountainsMight => "Unleashes earth-shattering power, overwhelming foes with brute force.",
            Ability::MysticArrow => "Fires an enchanted projectile that homes in on and pierces the enemy.",
            Ability::DemonicFrenzy => "Channels unbridled fury to increase attack speed and strike multiple times.",
            Ability::CelestialLight => "Bathes the battlefield in radiant light, stunning or weakening enemies temporarily.",
            Ability::OlympianMight => "Calls upon the power of the gods to unleash a colossal, crushing strike.",
            Ability::BlessedStrike => "An attack imbued with holy energy that deals additional divine damage.",
            Ability::AncientRoar => "Emits a fearsome roar that terrifies and damages all nearby foes.",
            Ability::SavageCharge => "A full-force, unstoppable charge that overwhelms the target with raw aggression.",
            Ability::AnarchicOnslaught => "Launches a frenzied barrage of wild attacks that leave enemies reeling from the chaos.",
        }
    }

    /// The effect this ability produces when it is a character's primary.
    pub fn family(&self) -> AbilityFamily {
        match self {
            Ability::InspiringStrike | Ability::HeroicRally => AbilityFamily::StrikeAndHeal,
            Ability::StoutResolve | Ability::StalwartFortress => AbilityFamily::Fortify,
            Ability::SwiftArrow | Ability::ElvenGrace => AbilityFamily::DoubleStrike,
            Ability::InfernalRage | Ability::HellfireBlast => AbilityFamily::ManaBurst,
            Ability::HeavenlyGrace | Ability::DivineIntervention => AbilityFamily::Restore,
            Ability::DivineCharge | Ability::CelestialSmite => AbilityFamily::Charge,
            Ability::MiraculousTouch | Ability::MiraculousSalvation => AbilityFamily::Miracle,
            Ability::SearingFlames | Ability::DragonsFury => AbilityFamily::Burn,
            Ability::SavageBite | Ability::FeralRoar => AbilityFamily::Bite,
            Ability::WildAnarchy | Ability::ChaoticSurge => AbilityFamily::Chaos,
            Ability::GuardiansShield
            | Ability::MountainsMight
            | Ability::MysticArrow
            | Ability::DemonicFrenzy
            | Ability::CelestialLight
            | Ability::OlympianMight
            | Ability::BlessedStrike
            | Ability::AncientRoar
            | Ability::SavageCharge
            | Ability::AnarchicOnslaught => AbilityFamily::Basic,
        }
    }

    pub fn from_name(name: &str) -> Result<Ability> {
        let name = name.trim();
        Ability::ALL
            .into_iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| ArenaError::UnknownAbility(name.to_string()))
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One damage/heal formula shared by a base ability and its evolved form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityFamily {
    /// Strength + [10,20], heals half the bonus.
    StrikeAndHeal,
    /// No damage, heals [5,15].
    Fortify,
    /// (Strength + [5,15]) x 2.
    DoubleStrike,
    /// Costs 20 mana for strength + 30; fizzles without it.
    ManaBurst,
    /// No damage, heals [20,30].
    Restore,
    /// Strength + [15,25].
    Charge,
    /// Strength + 10, heals [10,20].
    Miracle,
    /// Strength + [20,30].
    Burn,
    /// Strength + [10,20].
    Bite,
    /// Coin flip between strength + [5,15] and a [5,15] heal.
    Chaos,
    /// Strength + [1,10].
    Basic,
}

impl AbilityFamily {
    /// Resolves a stored ability label to its effect family.
    ///
    /// Only the primary half of a `"Primary | Secondary"` label counts.
    /// Legacy labels that stored a race name instead of an ability name
    /// resolve to that race's family; anything else is a basic attack.
    pub fn from_label(label: &str) -> AbilityFamily {
        let primary = label.split(ABILITY_SEPARATOR).next().unwrap_or("").trim();
        if let Ok(ability) = Ability::from_name(primary) {
            return ability.family();
        }
        match primary {
            "Champion Human" => AbilityFamily::StrikeAndHeal,
            "Dwarven Lord" => AbilityFamily::Fortify,
            "High Elf" => AbilityFamily::DoubleStrike,
            "Archdemon" => AbilityFamily::ManaBurst,
            "Archangel" => AbilityFamily::Restore,
            "Demigod" => AbilityFamily::Charge,
            "Messiah" => AbilityFamily::Miracle,
            "Dragon" => AbilityFamily::Burn,
            "Beastman" => AbilityFamily::Bite,
            "Kaosborne" => AbilityFamily::Chaos,
            _ => AbilityFamily::Basic,
        }
    }

    /// True for families that can put damage on the opponent.
    pub fn deals_damage(&self) -> bool {
        !matches!(self, AbilityFamily::Fortify | AbilityFamily::Restore)
    }
}

/// The abilities a combatant carries: one before evolution, two after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySet {
    pub primary: Ability,
    pub secondary: Option<Ability>,
}

impl AbilitySet {
    pub fn single(primary: Ability) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn evolved(primary: Ability, secondary: Ability) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Parses `"Primary"` or `"Primary | Secondary"`.
    pub fn parse(label: &str) -> Result<Self> {
        let mut parts = label.split(ABILITY_SEPARATOR);
        let primary = Ability::from_name(parts.next().unwrap_or(""))?;
        let secondary = parts.next().map(Ability::from_name).transpose()?;
        if let Some(extra) = parts.next() {
            return Err(ArenaError::UnknownAbility(extra.to_string()));
        }
        Ok(Self { primary, secondary })
    }

    pub fn iter(&self) -> impl Iterator<Item = Ability> {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

impl fmt::Display for AbilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}{}{}", self.primary, ABILITY_SEPARATOR, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for ability in Ability::ALL {
            assert_eq!(Ability::from_name(ability.name()).unwrap(), ability);
        }
    }

    #[test]
    fn test_every_ability_has_description() {
        for ability in Ability::ALL {
            assert!(!ability.description().is_empty(), "{ability} has no text");
        }
    }

    #[test]
    fn test_unknown_ability_name() {
        assert!(matches!(
            Ability::from_name("Fireball"),
            Err(ArenaError::UnknownAbility(_))
        ));
    }

    #[test]
    fn test_base_and_evolved_primaries_share_family() {
        assert_eq!(Ability::InfernalRage.family(), Ability::HellfireBlast.family());
        assert_eq!(Ability::SwiftArrow.family(), Ability::ElvenGrace.family());
        assert_eq!(Ability::WildAnarchy.family(), Ability::ChaoticSurge.family());
    }

    #[test]
    fn test_secondaries_are_basic() {
        assert_eq!(Ability::GuardiansShield.family(), AbilityFamily::Basic);
        assert_eq!(Ability::AnarchicOnslaught.family(), AbilityFamily::Basic);
    }

    #[test]
    fn test_from_label_uses_primary_only() {
        assert_eq!(
            AbilityFamily::from_label("Hellfire Blast | Demonic Frenzy"),
            AbilityFamily::ManaBurst
        );
        assert_eq!(
            AbilityFamily::from_label("Guardian's Shield | Heroic Rally"),
            AbilityFamily::Basic
        );
    }

    #[test]
    fn test_from_label_race_aliases() {
        assert_eq!(AbilityFamily::from_label("Dwarven Lord"), AbilityFamily::Fortify);
        assert_eq!(AbilityFamily::from_label("Kaosborne"), AbilityFamily::Chaos);
        assert_eq!(AbilityFamily::from_label("Something Else"), AbilityFamily::Basic);
        assert_eq!(AbilityFamily::from_label(""), AbilityFamily::Basic);
    }

    #[test]
    fn test_ability_set_display_and_parse() {
        let set = AbilitySet::evolved(Ability::HeroicRally, Ability::GuardiansShield);
        assert_eq!(set.to_string(), "Heroic Rally | Guardian's Shield");
        assert_eq!(AbilitySet::parse(&set.to_string()).unwrap(), set);

        let single = AbilitySet::single(Ability::SavageBite);
        assert_eq!(single.to_string(), "Savage Bite");
        assert_eq!(single.iter().count(), 1);
    }

    #[test]
    fn test_ability_set_parse_rejects_garbage() {
        assert!(AbilitySet::parse("Heroic Rally | Nope").is_err());
        assert!(AbilitySet::parse("A | B | C").is_err());
    }
}
