pub mod request {
    use axum::http::HeaderValue;
    use serde_json::Value;

    pub struct Payload {
        pub api_key: HeaderValue,
        pub data: Value,
    }
}

pub mod response {
    use axum::{
        body::Body,
        extract::Json,
        http::StatusCode,
        response::{IntoResponse, Response as HttpResponse},
    };
    use serde_json::json;

    use crate::{modules::salesloft::service::UpstreamResponse, utils::headers};

    pub enum Success {
        Relayed(UpstreamResponse),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> HttpResponse {
            match self {
                Self::Relayed(upstream) => {
                    let mut res = HttpResponse::new(Body::from(upstream.body));
                    *res.status_mut() = upstream.status;
                    *res.headers_mut() = headers::end_to_end(&upstream.headers);
                    res
                }
            }
        }
    }

    pub enum Error {
        FailedToReachSalesloft(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> HttpResponse {
            match self {
                Self::FailedToReachSalesloft(details) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Failed to reach Salesloft API",
                        "details": details
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
