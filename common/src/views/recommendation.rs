//! State of the recommendation form and its last result.

use crate::model::learning_resource::LearningResource;
use crate::model::recommendation::AiRecommendationResponse;
use crate::pacing::{RequestSequence, RequestToken};
use crate::requests::{parse_max_items, RecommendRequest};

#[derive(Debug)]
pub struct RecommendationState {
    pub goal: String,
    /// Raw text of the max-items input.
    pub max_items_input: String,
    pub loading: bool,
    pub result: Option<AiRecommendationResponse>,
    pub error: Option<String>,
    pub selected: Option<LearningResource>,
    submissions: RequestSequence,
}

impl Default for RecommendationState {
    fn default() -> Self {
        Self {
            goal: String::new(),
            max_items_input: "1".to_string(),
            loading: false,
            result: None,
            error: None,
            selected: None,
            submissions: RequestSequence::default(),
        }
    }
}

impl RecommendationState {
    pub fn max_items(&self) -> f64 {
        parse_max_items(&self.max_items_input)
    }

    /// Starts a submission. Allowed from any state; a newer submission
    /// supersedes an older one still in flight.
    pub fn begin_submit(&mut self) -> (RequestToken, RecommendRequest) {
        self.loading = true;
        self.error = None;
        let request = RecommendRequest {
            goal: self.goal.clone(),
            max_items: self.max_items(),
        };
        (self.submissions.issue(), request)
    }

    /// Applies a submission outcome. Success replaces the result wholesale;
    /// failure clears it. Returns `false` for superseded submissions.
    pub fn finish_submit(
        &mut self,
        token: RequestToken,
        outcome: Result<AiRecommendationResponse, String>,
    ) -> bool {
        if !self.submissions.is_latest(token) {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(response) => {
                self.result = Some(response);
                self.error = None;
            }
            Err(message) => {
                self.result = None;
                self.error = Some(message);
            }
        }
        true
    }

    /// Opens the detail view on an already fetched recommendation.
    pub fn select(&mut self, index: usize) -> bool {
        let resource = self
            .result
            .as_ref()
            .and_then(|r| r.resources.get(index))
            .cloned();
        match resource {
            Some(resource) => {
                self.selected = Some(resource);
                true
            }
            None => false,
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
