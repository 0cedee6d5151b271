use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// Any JSON document, accepted regardless of the request's `Content-Type`.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

#[derive(Debug)]
pub enum Rejection {
    InvalidPayload,
    UnreadableBody(BytesRejection),
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidPayload => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "Invalid or missing JSON payload" })),
            )
                .into_response(),
            Self::UnreadableBody(rejection) => rejection.into_response(),
        }
    }
}

pub fn parse(body: &[u8]) -> Result<Value, Rejection> {
    serde_json::from_slice::<Value>(body).map_err(|err| {
        tracing::debug!("Rejected request body: {}", err);
        Rejection::InvalidPayload
    })
}

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for JsonPayload {
    type Rejection = Rejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(Rejection::UnreadableBody)?;

        parse(&body).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_json_document() {
        assert_eq!(parse(br#"{"cadence_id": 42}"#).unwrap(), json!({ "cadence_id": 42 }));
        assert_eq!(parse(b"[]").unwrap(), json!([]));
        assert_eq!(parse(b" {} ").unwrap(), json!({}));
    }

    #[test]
    fn rejects_empty_body() {
        assert!(matches!(parse(b""), Err(Rejection::InvalidPayload)));
        assert!(matches!(parse(b"   "), Err(Rejection::InvalidPayload)));
    }

    #[test]
    fn rejects_plain_text() {
        assert!(matches!(parse(b"hello"), Err(Rejection::InvalidPayload)));
        assert!(matches!(parse(b"{\"cadence_id\": "), Err(Rejection::InvalidPayload)));
    }

    #[test]
    fn invalid_payload_maps_to_422() {
        let res = Rejection::InvalidPayload.into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
