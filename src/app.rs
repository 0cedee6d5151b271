use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = Router::new()
            .merge(modules::get_router())
            .with_state(ctx.clone())
            .layer(
                ServiceBuilder::new()
                    .layer(trace::TraceLayer::new_for_http())
                    .layer(
                        cors::CorsLayer::new()
                            .allow_methods([Method::OPTIONS, Method::POST])
                            .allow_headers(cors::Any)
                            .allow_origin(cors::Any),
                    )
                    .layer(DefaultBodyLimit::max(1024 * 1024 * 10)),
            );

        Self { ctx, router }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let listener =
            TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port)).await?;

        tracing::info!(
            "App is running on {} (relaying to {}, timeout {:?})",
            listener.local_addr()?,
            self.ctx.salesloft.api_endpoint,
            self.ctx.salesloft.timeout
        );

        axum::serve(listener, self.router).await
    }
}
