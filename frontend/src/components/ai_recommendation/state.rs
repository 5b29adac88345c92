use common::views::recommendation::RecommendationState;

use crate::config::ACTION_THROTTLE_MS;
use crate::pacing::Throttled;

pub struct AiRecommendationComponent {
    pub form: RecommendationState,
    pub submit: Throttled<()>,
}

impl AiRecommendationComponent {
    pub fn new() -> Self {
        Self {
            form: RecommendationState::default(),
            submit: Throttled::new(ACTION_THROTTLE_MS),
        }
    }
}
