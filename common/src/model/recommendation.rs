use serde::{Deserialize, Serialize};

use super::learning_resource::LearningResource;

/// Result of `POST /ai/recommend-path`. Produced fresh per request and
/// replaced wholesale on the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendationResponse {
    pub summary: String,
    pub resources: Vec<LearningResource>,
    #[serde(default, deserialize_with = "super::minutes")]
    pub total_estimated_minutes: f64,
    #[serde(default)]
    pub explanation: String,
}
