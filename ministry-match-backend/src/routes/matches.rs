use std::collections::HashSet;

use axum::extract::{Path, Query, State};
use axum::Json;
use itertools::Itertools;
use ministry_match_matcher::{match_reasons, match_score};
use ministry_match_store::{Opportunity, Store};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Deserialize)]
pub struct MatchQuery {
    /// Drop entries scoring below this percentage.
    pub min_score: Option<u8>,
}

#[derive(Serialize)]
pub struct MatchEntry {
    pub opportunity: Opportunity,
    pub score: u8,
    /// Display names of the attributes that earned the score.
    pub reasons: Vec<String>,
}

/// Scores every opportunity in the member's organization against their
/// profile. Scores are never persisted; each request recomputes them.
pub async fn list(
    State(store): State<Store>,
    Path((organization, member)): Path<(String, String)>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<Vec<MatchEntry>>, AppError> {
    let profile = store.profile(&organization, &member).await?;
    let person: HashSet<String> = profile
        .gifts
        .iter()
        .chain(profile.abilities.iter())
        .cloned()
        .collect();

    let entries = store
        .opportunities(&organization)
        .await
        .into_iter()
        .map(|opportunity| score_opportunity(&person, opportunity))
        .filter(|entry| entry.score >= query.min_score.unwrap_or(0))
        .sorted_by(|left, right| {
            right
                .score
                .cmp(&left.score)
                .then_with(|| left.opportunity.title.cmp(&right.opportunity.title))
                .then_with(|| left.opportunity.id.cmp(&right.opportunity.id))
        })
        .collect();

    Ok(Json(entries))
}

fn score_opportunity(person: &HashSet<String>, opportunity: Opportunity) -> MatchEntry {
    let required: Vec<String> = opportunity
        .required_gifts
        .iter()
        .chain(opportunity.required_abilities.iter())
        .cloned()
        .collect();
    let preferred: Vec<String> = opportunity
        .preferred_gifts
        .iter()
        .chain(opportunity.preferred_abilities.iter())
        .cloned()
        .collect();

    MatchEntry {
        score: match_score(person, &required, &preferred),
        reasons: match_reasons(person, &required, &preferred),
        opportunity,
    }
}
