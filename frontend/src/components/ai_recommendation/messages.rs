use common::model::recommendation::AiRecommendationResponse;
use common::pacing::RequestToken;

#[derive(Clone)]
pub enum Msg {
    UpdateGoal(String),
    UpdateMaxItems(String),
    Submit,
    SubmitThrottleElapsed,
    Received(RequestToken, Result<AiRecommendationResponse, String>),
    Select(usize),
    CloseDetail,
    DismissError,
}
