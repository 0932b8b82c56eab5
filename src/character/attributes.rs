use crate::core::constants::NUM_ATTRIBUTES;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Strength,
    Intelligence,
    Wisdom,
    Constitution,
    Speed,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Strength,
            AttributeType::Intelligence,
            AttributeType::Wisdom,
            AttributeType::Constitution,
            AttributeType::Speed,
        ]
    }

    /// The four attributes that grow on level-up and with enemy level.
    pub fn trained() -> [AttributeType; 4] {
        [
            AttributeType::Strength,
            AttributeType::Intelligence,
            AttributeType::Wisdom,
            AttributeType::Constitution,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            AttributeType::Strength => "STR",
            AttributeType::Intelligence => "INT",
            AttributeType::Wisdom => "WIS",
            AttributeType::Constitution => "CON",
            AttributeType::Speed => "SPD",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Strength => 0,
            AttributeType::Intelligence => 1,
            AttributeType::Wisdom => 2,
            AttributeType::Constitution => 3,
            AttributeType::Speed => 4,
        }
    }
}

/// Strength, intelligence, wisdom, constitution and speed.
///
/// Values are signed: creation variance can push a stat below zero
/// (Kaosborne speed in particular).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Attributes {
    values: [i64; NUM_ATTRIBUTES],
}

impl Attributes {
    /// Builds attributes in `AttributeType::all()` order.
    pub const fn from_values(values: [i64; NUM_ATTRIBUTES]) -> Self {
        Self { values }
    }

    pub fn get(&self, attr: AttributeType) -> i64 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: AttributeType, value: i64) {
        self.values[attr.index()] = value;
    }

    pub fn add(&mut self, attr: AttributeType, amount: i64) {
        self.values[attr.index()] = self.values[attr.index()].saturating_add(amount);
    }

    pub fn strength(&self) -> i64 {
        self.get(AttributeType::Strength)
    }

    pub fn intelligence(&self) -> i64 {
        self.get(AttributeType::Intelligence)
    }

    pub fn wisdom(&self) -> i64 {
        self.get(AttributeType::Wisdom)
    }

    pub fn constitution(&self) -> i64 {
        self.get(AttributeType::Constitution)
    }

    pub fn speed(&self) -> i64 {
        self.get(AttributeType::Speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_order() {
        let attrs = Attributes::from_values([1, 2, 3, 4, 5]);
        assert_eq!(attrs.strength(), 1);
        assert_eq!(attrs.intelligence(), 2);
        assert_eq!(attrs.wisdom(), 3);
        assert_eq!(attrs.constitution(), 4);
        assert_eq!(attrs.speed(), 5);
    }

    #[test]
    fn test_get_set() {
        let mut attrs = Attributes::default();
        attrs.set(AttributeType::Strength, 16);
        assert_eq!(attrs.get(AttributeType::Strength), 16);
        assert_eq!(attrs.get(AttributeType::Speed), 0);
    }

    #[test]
    fn test_add_allows_negative() {
        let mut attrs = Attributes::from_values([10, 10, 10, 10, 0]);
        attrs.add(AttributeType::Speed, -99);
        assert_eq!(attrs.speed(), -99);
    }

    #[test]
    fn test_trained_excludes_speed() {
        assert!(!AttributeType::trained().contains(&AttributeType::Speed));
    }

    #[test]
    fn test_attribute_type_abbrev() {
        assert_eq!(AttributeType::Strength.abbrev(), "STR");
        assert_eq!(AttributeType::Intelligence.abbrev(), "INT");
        assert_eq!(AttributeType::Wisdom.abbrev(), "WIS");
        assert_eq!(AttributeType::Constitution.abbrev(), "CON");
        assert_eq!(AttributeType::Speed.abbrev(), "SPD");
    }
}
