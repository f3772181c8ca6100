//! Reference taxonomies for the matching domain.
//!
//! Both catalogs are fixed reference data: defined once here, shared by every
//! consumer (assessment scoring, opportunity validation, the REST API), never
//! mutated at runtime. Bump [`CATALOG_VERSION`] when an entry is added,
//! removed or renamed so clients can detect drift against cached copies.

pub mod abilities;
pub mod gifts;

pub use abilities::{AbilityCategory, NaturalAbility, NATURAL_ABILITIES};
pub use gifts::{SpiritualGift, SPIRITUAL_GIFTS};

pub const CATALOG_VERSION: u32 = 1;

/// Look up a spiritual gift by its stable key.
#[must_use]
pub fn gift_by_key(key: &str) -> Option<&'static SpiritualGift> {
    SPIRITUAL_GIFTS.iter().find(|gift| gift.key == key)
}

/// Look up a natural ability by its stable key.
#[must_use]
pub fn ability_by_key(key: &str) -> Option<&'static NaturalAbility> {
    NATURAL_ABILITIES.iter().find(|ability| ability.key == key)
}

/// Whether `key` names any catalog entry, gift or ability.
#[must_use]
pub fn is_known_key(key: &str) -> bool {
    gift_by_key(key).is_some() || ability_by_key(key).is_some()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn twelve_gifts() {
        assert_eq!(SPIRITUAL_GIFTS.len(), 12);
    }

    #[test]
    fn forty_abilities() {
        assert_eq!(NATURAL_ABILITIES.len(), 40);
    }

    #[test]
    fn keys_are_unique_across_both_catalogs() {
        let mut seen = HashSet::new();
        for gift in &SPIRITUAL_GIFTS {
            assert!(seen.insert(gift.key), "duplicate key {}", gift.key);
        }
        for ability in NATURAL_ABILITIES {
            assert!(seen.insert(ability.key), "duplicate key {}", ability.key);
        }
    }

    #[test]
    fn every_ability_has_ministry_applications() {
        for ability in NATURAL_ABILITIES {
            assert!(
                !ability.ministry_applications.is_empty(),
                "{} has no applications",
                ability.key
            );
        }
    }

    #[test]
    fn lookup_by_key() {
        assert_eq!(gift_by_key("TEACHING").map(|gift| gift.name), Some("Teaching"));
        assert_eq!(
            ability_by_key("CARPENTRY").map(|ability| ability.category),
            Some(AbilityCategory::Practical)
        );
        assert!(gift_by_key("JUGGLING").is_none());
        assert!(ability_by_key("TEACHING").is_none());
    }

    #[test]
    fn unknown_keys_are_not_known() {
        assert!(is_known_key("MERCY"));
        assert!(is_known_key("BASKETBALL"));
        assert!(!is_known_key("mercy"));
        assert!(!is_known_key(""));
    }
}
