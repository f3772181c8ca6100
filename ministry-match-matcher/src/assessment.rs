//! Scoring for the spiritual-gifts assessment.
//!
//! The quiz cycles through the twelve-gift taxonomy five times, so question
//! `i` belongs to gift `i % 12` and each gift accumulates at most
//! `5 * ANSWER_SCALE_MAX` points.

use core::cmp::Reverse;

use itertools::Itertools;
use ministry_match_catalog::SPIRITUAL_GIFTS;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const ASSESSMENT_QUESTION_COUNT: usize = 60;
/// Answers are Likert values 0 ("not at all like me") to 4 ("very much like me").
pub const ANSWER_SCALE_MAX: u8 = 4;
/// How many of the highest-scoring gifts make up a member's profile.
pub const PROFILE_GIFT_COUNT: usize = 3;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("expected 60 answers, got {0}")]
    WrongAnswerCount(usize),
    #[error("answer {index} out of range: {value} (scale is 0 to 4)")]
    AnswerOutOfRange { index: usize, value: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftTotal {
    pub gift: String,
    pub total: u32,
}

/// The scored outcome of one assessment submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftProfile {
    /// One entry per gift, in catalog order.
    pub totals: Vec<GiftTotal>,
    /// Keys of the top [`PROFILE_GIFT_COUNT`] gifts, ties broken by catalog
    /// order so re-submitting identical answers yields an identical profile.
    pub top_gifts: Vec<String>,
}

/// Score a completed assessment into per-gift totals and a top-gifts list.
pub fn score_assessment(answers: &[u8]) -> Result<GiftProfile, AssessmentError> {
    if answers.len() != ASSESSMENT_QUESTION_COUNT {
        return Err(AssessmentError::WrongAnswerCount(answers.len()));
    }
    if let Some((index, &value)) = answers
        .iter()
        .find_position(|&&value| value > ANSWER_SCALE_MAX)
    {
        return Err(AssessmentError::AnswerOutOfRange { index, value });
    }

    let mut totals = vec![0_u32; SPIRITUAL_GIFTS.len()];
    for (index, &value) in answers.iter().enumerate() {
        totals[index % SPIRITUAL_GIFTS.len()] += u32::from(value);
    }

    let top_gifts: Vec<String> = totals
        .iter()
        .enumerate()
        .sorted_by_key(|&(index, &total)| (Reverse(total), index))
        .take(PROFILE_GIFT_COUNT)
        .map(|(index, _)| SPIRITUAL_GIFTS[index].key.to_owned())
        .collect();

    debug!(?top_gifts, "scored assessment");

    Ok(GiftProfile {
        totals: totals
            .into_iter()
            .zip(SPIRITUAL_GIFTS.iter())
            .map(|(total, gift)| GiftTotal {
                gift: gift.key.to_owned(),
                total,
            })
            .collect(),
        top_gifts,
    })
}
