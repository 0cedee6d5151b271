mod proxy_to_salesloft;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().nest("/proxy-to-salesloft", proxy_to_salesloft::get_router())
}
