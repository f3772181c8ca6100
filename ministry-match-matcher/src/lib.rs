//! Scoring logic: the opportunity match scorer and the gifts assessment.
//!
//! Everything in this crate is a pure function over small fixed-size inputs
//! (the catalogs top out at 52 keys combined), so callers are free to fan
//! out scoring across opportunities and members however they like.

pub mod assessment;

use std::collections::HashSet;

use itertools::Itertools;
use ministry_match_catalog::{ability_by_key, gift_by_key};

pub use assessment::{score_assessment, AssessmentError, GiftProfile, GiftTotal};

/// Weight added per required attribute. Required counts exactly twice as
/// much as preferred; the ratio is a design constant, not configuration.
pub const REQUIRED_WEIGHT: u32 = 10;
/// Weight added per preferred attribute.
pub const PREFERRED_WEIGHT: u32 = 5;

/// Percentage fit between a person's attribute set and one opportunity's
/// required/preferred attribute lists.
///
/// Returns 0 for an opportunity with no required and no preferred
/// attributes, so an empty opportunity never scores 100 for everyone.
/// Otherwise `earned / possible * 100`, rounded half away from zero (which
/// is round-half-up for these non-negative values).
///
/// Unknown keys never match and never fail. Duplicate keys in the input
/// lists add weight each time they appear; callers are expected to pass
/// de-duplicated lists.
#[must_use]
pub fn match_score(person: &HashSet<String>, required: &[String], preferred: &[String]) -> u8 {
    let mut earned: u32 = 0;
    let mut possible: u32 = 0;

    for key in required {
        possible += REQUIRED_WEIGHT;
        if person.contains(key) {
            earned += REQUIRED_WEIGHT;
        }
    }
    for key in preferred {
        possible += PREFERRED_WEIGHT;
        if person.contains(key) {
            earned += PREFERRED_WEIGHT;
        }
    }

    if possible == 0 {
        return 0;
    }

    let percentage = (f64::from(earned) / f64::from(possible) * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = percentage as u8;
    score
}

/// Display names of the attributes the person actually matched, in the
/// order the opportunity lists them, de-duplicated. Keys absent from both
/// catalogs fall back to the raw key.
#[must_use]
pub fn match_reasons(
    person: &HashSet<String>,
    required: &[String],
    preferred: &[String],
) -> Vec<String> {
    required
        .iter()
        .chain(preferred.iter())
        .filter(|key| person.contains(*key))
        .unique()
        .map(|key| attribute_name(key).to_owned())
        .collect()
}

fn attribute_name(key: &str) -> &str {
    gift_by_key(key)
        .map(|gift| gift.name)
        .or_else(|| ability_by_key(key).map(|ability| ability.name))
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(keys: &[&str]) -> HashSet<String> {
        keys.iter().map(|&key| key.to_owned()).collect()
    }

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|&key| key.to_owned()).collect()
    }

    #[test]
    fn full_match_scores_100() {
        let score = match_score(
            &person(&["TEACHING", "EVANGELISM"]),
            &keys(&["TEACHING"]),
            &keys(&["EVANGELISM"]),
        );
        assert_eq!(score, 100);
    }

    #[test]
    fn no_overlap_scores_0() {
        let score = match_score(&person(&[]), &keys(&["TEACHING"]), &keys(&[]));
        assert_eq!(score, 0);
    }

    #[test]
    fn half_the_required_scores_50() {
        let score = match_score(
            &person(&["TEACHING"]),
            &keys(&["TEACHING", "LEADERSHIP_ORG"]),
            &keys(&[]),
        );
        assert_eq!(score, 50);
    }

    #[test]
    fn preferred_only_opportunity_can_score_100() {
        let score = match_score(&person(&["MERCY"]), &keys(&[]), &keys(&["MERCY"]));
        assert_eq!(score, 100);
    }

    #[test]
    fn empty_opportunity_scores_0_for_everyone() {
        let score = match_score(&person(&["MERCY"]), &keys(&[]), &keys(&[]));
        assert_eq!(score, 0);
    }

    #[test]
    fn required_weighs_double_preferred() {
        // one required matched, one preferred unmatched: 10 of 15
        let score = match_score(
            &person(&["TEACHING"]),
            &keys(&["TEACHING"]),
            &keys(&["EVANGELISM"]),
        );
        assert_eq!(score, 67);
    }

    #[test]
    fn rounds_half_up() {
        // 15 of 40 is 37.5
        let score = match_score(
            &person(&["TEACHING", "MUSIC_VOCAL"]),
            &keys(&["TEACHING", "MERCY", "GIVING"]),
            &keys(&["MUSIC_VOCAL", "DRAMA"]),
        );
        assert_eq!(score, 38);
    }

    #[test]
    fn duplicate_keys_add_weight_twice() {
        // [TEACHING, TEACHING] + [DRAMA]: earned 20 of possible 25
        let score = match_score(
            &person(&["TEACHING"]),
            &keys(&["TEACHING", "TEACHING"]),
            &keys(&["DRAMA"]),
        );
        assert_eq!(score, 80);
    }

    #[test]
    fn unknown_keys_never_match() {
        let score = match_score(
            &person(&["NOT_A_GIFT"]),
            &keys(&["NOT_A_GIFT_EITHER"]),
            &keys(&[]),
        );
        assert_eq!(score, 0);
    }

    #[test]
    fn adding_a_matched_key_never_lowers_the_score() {
        let required = keys(&["TEACHING", "MERCY", "GIVING"]);
        let preferred = keys(&["DRAMA", "COOKING"]);
        let mut attributes = person(&[]);
        let mut previous = match_score(&attributes, &required, &preferred);
        for key in required.iter().chain(preferred.iter()) {
            attributes.insert(key.clone());
            let next = match_score(&attributes, &required, &preferred);
            assert!(next >= previous, "{next} < {previous} after adding {key}");
            previous = next;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let attributes = person(&["TEACHING", "COOKING"]);
        let required = keys(&["TEACHING", "MERCY"]);
        let preferred = keys(&["COOKING"]);
        assert_eq!(
            match_score(&attributes, &required, &preferred),
            match_score(&attributes, &required, &preferred)
        );
    }

    #[test]
    fn reasons_use_display_names_in_list_order() {
        let reasons = match_reasons(
            &person(&["TEACHING", "COOKING"]),
            &keys(&["TEACHING", "MERCY"]),
            &keys(&["COOKING", "TEACHING"]),
        );
        assert_eq!(reasons, vec!["Teaching".to_owned(), "Cooking".to_owned()]);
    }

    #[test]
    fn reasons_fall_back_to_raw_key_for_unknown_attributes() {
        let reasons = match_reasons(&person(&["MYSTERY"]), &keys(&["MYSTERY"]), &keys(&[]));
        assert_eq!(reasons, vec!["MYSTERY".to_owned()]);
    }
}
