use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// The caller's credential, forwarded upstream untouched.
#[derive(Clone)]
pub struct ApiKey(pub HeaderValue);

#[derive(Debug)]
pub enum Error {
    MissingApiKey,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::MissingApiKey => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing API Key" })),
            )
                .into_response(),
        }
    }
}

pub fn get_api_key_from_parts(parts: &Parts) -> Result<ApiKey, Error> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .cloned()
        .map(ApiKey)
        .ok_or(Error::MissingApiKey)
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ApiKey {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        get_api_key_from_parts(parts).map_err(|err| {
            tracing::debug!("Rejected request without an Authorization header");
            err
        })
    }
}
