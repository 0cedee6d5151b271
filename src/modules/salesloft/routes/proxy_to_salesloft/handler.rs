use super::service::service;
use super::types::request;
use crate::{modules::auth::middleware::ApiKey, types::Context, utils::payload::JsonPayload};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    ApiKey(api_key): ApiKey,
    JsonPayload(data): JsonPayload,
) -> impl IntoResponse {
    service(ctx, request::Payload { api_key, data }).await
}
