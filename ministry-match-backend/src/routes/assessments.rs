use axum::extract::{Path, State};
use axum::Json;
use ministry_match_catalog::ability_by_key;
use ministry_match_matcher::score_assessment;
use ministry_match_store::{MemberProfile, Store};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;

#[derive(Deserialize)]
pub struct AssessmentSubmission {
    /// Likert answers for all 60 questions, in question order.
    pub answers: Vec<u8>,
    /// Self-reported natural-ability keys.
    #[serde(default)]
    pub abilities: Vec<String>,
}

/// Scores a submitted assessment and stores the resulting profile.
/// Re-submitting replaces the previous profile (re-assessment).
pub async fn submit(
    State(store): State<Store>,
    Path((organization, member)): Path<(String, String)>,
    Json(submission): Json<AssessmentSubmission>,
) -> Result<Json<MemberProfile>, AppError> {
    for key in &submission.abilities {
        if ability_by_key(key).is_none() {
            return Err(AppError::UnknownAttributeKey(key.clone()));
        }
    }

    let scored = score_assessment(&submission.answers)?;
    let profile = MemberProfile {
        gifts: scored.top_gifts,
        abilities: submission.abilities,
        gift_totals: scored.totals,
    };
    store.put_profile(&organization, &member, profile.clone()).await;
    info!(organization, member, gifts = ?profile.gifts, "stored assessment");
    Ok(Json(profile))
}

pub async fn profile(
    State(store): State<Store>,
    Path((organization, member)): Path<(String, String)>,
) -> Result<Json<MemberProfile>, AppError> {
    Ok(Json(store.profile(&organization, &member).await?))
}
