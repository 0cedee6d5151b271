use crate::{types::Context, utils};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use bytes::Bytes;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
pub enum Error {
    RequestNotSent(reqwest::Error),
    FailedToReadResponse(reqwest::Error),
}

impl Error {
    /// Full description of the transport failure, including its causes.
    pub fn details(&self) -> String {
        match self {
            Self::RequestNotSent(err) | Self::FailedToReadResponse(err) => {
                utils::error::chain(err)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestNotSent(err) => write!(f, "Failed to send request to Salesloft: {}", err),
            Self::FailedToReadResponse(err) => {
                write!(f, "Failed to read Salesloft response: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RequestNotSent(err) | Self::FailedToReadResponse(err) => Some(err),
        }
    }
}

pub struct CadenceImportPayload {
    pub api_key: HeaderValue,
    pub data: Value,
}

#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

pub async fn create_cadence_import(
    ctx: Arc<Context>,
    payload: CadenceImportPayload,
) -> Result<UpstreamResponse, Error> {
    let res = ctx
        .salesloft
        .http_client
        .post(ctx.salesloft.api_endpoint.as_str())
        .header(header::AUTHORIZATION, payload.api_key)
        .header(header::CONTENT_TYPE, "application/json")
        .json(&payload.data)
        .send()
        .await
        .map_err(Error::RequestNotSent)?;

    let status = res.status();
    let headers = res.headers().clone();
    let body = res.bytes().await.map_err(Error::FailedToReadResponse)?;

    Ok(UpstreamResponse {
        status,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Config, SalesloftConfig, ToContext};
    use core::time::Duration;
    use serde_json::json;

    fn context_for(api_endpoint: String, timeout: Duration) -> Arc<Context> {
        let config = Config {
            salesloft: SalesloftConfig {
                api_endpoint,
                timeout,
            },
            ..Config::default()
        };
        Arc::new(config.to_context().unwrap())
    }

    #[tokio::test]
    async fn forwards_credential_and_payload() {
        let server = httpmock::MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST)
                    .path("/v2/cadence_imports.json")
                    .header("authorization", "Bearer token123")
                    .header("content-type", "application/json")
                    .json_body(json!({ "cadence_id": 42 }));
                then.status(201)
                    .header("x-request-id", "req-1")
                    .body(r#"{"id": 99}"#);
            })
            .await;

        let ctx = context_for(server.url("/v2/cadence_imports.json"), Duration::from_secs(5));
        let res = create_cadence_import(
            ctx,
            CadenceImportPayload {
                api_key: HeaderValue::from_static("Bearer token123"),
                data: json!({ "cadence_id": 42 }),
            },
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert_eq!(res.status, StatusCode::CREATED);
        assert_eq!(res.headers["x-request-id"], "req-1");
        assert_eq!(&res.body[..], br#"{"id": 99}"#);
    }

    #[tokio::test]
    async fn upstream_error_status_is_not_an_error() {
        let server = httpmock::MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST);
                then.status(422).body(r#"{"errors":{"cadence_id":["is invalid"]}}"#);
            })
            .await;

        let ctx = context_for(server.url("/v2/cadence_imports.json"), Duration::from_secs(5));
        let res = create_cadence_import(
            ctx,
            CadenceImportPayload {
                api_key: HeaderValue::from_static("token123"),
                data: json!({}),
            },
        )
        .await
        .unwrap();

        assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn connection_refused_is_request_not_sent() {
        // Bind then drop so the port refuses connections.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let ctx = context_for(
            format!("http://127.0.0.1:{}/v2/cadence_imports.json", port),
            Duration::from_secs(2),
        );
        let err = create_cadence_import(
            ctx,
            CadenceImportPayload {
                api_key: HeaderValue::from_static("token123"),
                data: json!({ "cadence_id": 42 }),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::RequestNotSent(_)));
        assert!(err.details().contains("error sending request"));
    }
}
