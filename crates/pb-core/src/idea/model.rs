use serde::{Deserialize, Serialize};

use super::readiness::{classify, Readiness, ReadinessTier};
use crate::ids::IdeaId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub pantry_coverage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshness_boost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_fit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<f64>,
}

/// Snapshot of an `ideas` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    #[serde(skip_serializing)]
    pub id: IdeaId,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at_ms: i64,
    #[serde(default, rename = "updatedAt")]
    pub updated_at_ms: i64,
    #[serde(default)]
    pub missing_count: u32,
    pub readiness_tier: ReadinessTier,
    #[serde(default)]
    pub total_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_breakdown: Option<ScoreBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub allow_substitutions: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Idea fields supplied by the caller on create/update.
///
/// `missing_count` is the raw count (possibly negative or fractional); it is
/// classified before being written. `created_at_ms` is kept when given,
/// otherwise the store stamps it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDraft {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub missing_count: f64,
    #[serde(default)]
    pub total_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_breakdown: Option<ScoreBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub allow_substitutions: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at_ms: Option<i64>,
}

impl IdeaDraft {
    pub fn readiness(&self) -> Readiness {
        classify(self.missing_count)
    }

    /// Nothing worth saving: both title and prompt are blank.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.prompt.trim().is_empty()
    }
}
