//! HTTP client for the catalogue API.
//!
//! Each call logs its failure to the browser console and returns an
//! [`ApiError`] whose message is already fit for display.

use common::errors::{ApiError, ApiFailure};
use common::model::learning_resource::LearningResource;
use common::model::page::ResourcePage;
use common::model::recommendation::AiRecommendationResponse;
use common::requests::{RecommendRequest, ResourceQuery};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::API_URL;

/// `GET /resources` with the given filters and paging.
pub async fn fetch_resources(query: &ResourceQuery) -> Result<ResourcePage, ApiError> {
    let pairs = query.to_pairs();
    let request = Request::get(&format!("{}/resources", API_URL))
        .query(pairs.iter().map(|(key, value)| (*key, value.as_str())));

    send_json(request)
        .await
        .map_err(|failure| report("Error fetching resources:", failure))
}

/// `GET /resources/{id}`. A missing resource fails with "Resource not found."
/// unless the backend supplies its own message.
pub async fn fetch_resource_by_id(id: &str) -> Result<LearningResource, ApiError> {
    let request = Request::get(&format!("{}/resources/{}", API_URL, id));

    send_json(request)
        .await
        .map_err(|failure| report("Error fetching resource:", failure))
}

/// `POST /ai/recommend-path` with `{goal, maxItems}`.
pub async fn get_ai_recommendations(
    request: &RecommendRequest,
) -> Result<AiRecommendationResponse, ApiError> {
    post_json(&format!("{}/ai/recommend-path", API_URL), request)
        .await
        .map_err(|failure| report("Error fetching AI recommendations:", failure))
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiFailure> {
    let response = request.send().await.map_err(classify)?;
    read_json(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiFailure> {
    let response = Request::post(url)
        .json(body)
        .map_err(classify)?
        .send()
        .await
        .map_err(classify)?;
    read_json(response).await
}

/// Decodes a success body, or turns a non-2xx answer into a response failure
/// keeping its body for message extraction.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiFailure::from_response(status, &body));
    }
    response.json::<T>().await.map_err(classify)
}

/// `fetch` only rejects when no response arrived, which surfaces as a
/// JavaScript error. Everything else is a client-side transport problem.
fn classify(error: gloo_net::Error) -> ApiFailure {
    match error {
        gloo_net::Error::JsError(_) => ApiFailure::Network,
        gloo_net::Error::SerdeError(e) => ApiFailure::Transport(e.to_string()),
        gloo_net::Error::GlooError(message) => ApiFailure::Transport(message),
    }
}

fn report(context: &str, failure: ApiFailure) -> ApiError {
    let error = ApiError::from(failure);
    gloo_console::error!(context.to_string(), error.message().to_string());
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::errors::NETWORK_ERROR_MESSAGE;

    #[test]
    fn client_side_failures_are_transport_errors() {
        let failure = classify(gloo_net::Error::GlooError("body already used".to_string()));
        assert_eq!(failure, ApiFailure::Transport("body already used".to_string()));
        assert_eq!(failure.message(), "body already used");
    }

    #[test]
    fn decode_failures_keep_the_decoder_message() {
        let decode = serde_json::from_str::<ResourcePage>("not json").unwrap_err();
        let expected = decode.to_string();
        let failure = classify(gloo_net::Error::SerdeError(decode));
        assert_eq!(failure, ApiFailure::Transport(expected));
        assert_ne!(failure.message(), NETWORK_ERROR_MESSAGE);
    }
}
