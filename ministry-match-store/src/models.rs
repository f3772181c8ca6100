use ministry_match_matcher::GiftTotal;
use serde::{Deserialize, Serialize};

/// A ministry opportunity as organization admins maintain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: u64,
    pub organization: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub required_gifts: Vec<String>,
    #[serde(default)]
    pub preferred_gifts: Vec<String>,
    #[serde(default)]
    pub required_abilities: Vec<String>,
    #[serde(default)]
    pub preferred_abilities: Vec<String>,
}

/// Payload for creating or replacing an opportunity; the store assigns the
/// id and organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOpportunity {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub required_gifts: Vec<String>,
    #[serde(default)]
    pub preferred_gifts: Vec<String>,
    #[serde(default)]
    pub required_abilities: Vec<String>,
    #[serde(default)]
    pub preferred_abilities: Vec<String>,
}

/// A member's assessment outcome: top gifts, self-reported abilities and
/// the per-gift totals behind them. Written once per submission, read-only
/// afterward until the member re-assesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub gifts: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub gift_totals: Vec<GiftTotal>,
}
