use super::types::{request, response};
use crate::{modules::salesloft, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::info!("Incoming JSON sent to Salesloft: {}", payload.data);

    let res = salesloft::service::create_cadence_import(
        ctx,
        salesloft::service::CadenceImportPayload {
            api_key: payload.api_key,
            data: payload.data,
        },
    )
    .await
    .map_err(|err| {
        let details = err.details();
        tracing::error!("Request to Salesloft failed: {}", details);
        response::Error::FailedToReachSalesloft(details)
    })?;

    tracing::info!(
        "Salesloft API response ({}): {}",
        res.status,
        String::from_utf8_lossy(&res.body)
    );

    Ok(response::Success::Relayed(res))
}
