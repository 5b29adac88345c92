use common::model::learning_resource::LearningResource;
use common::model::page::ResourcePage;
use common::pacing::{RequestToken, Ticket};

#[derive(Clone)]
pub enum Msg {
    SearchInput(String),
    SearchSettled(Ticket),
    TagInput(String),
    TagSettled(Ticket),
    SetResourceType(String),
    SetDifficulty(String),
    RequestPage(u32),
    PageThrottleElapsed,
    Fetch,
    Loaded(RequestToken, Result<ResourcePage, String>),
    ViewDetails(String),
    DetailThrottleElapsed,
    DetailLoaded(String, Result<LearningResource, String>),
    CloseDetail,
    DismissError,
}
