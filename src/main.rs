use salesloft_proxy_rs::{
    app::App,
    types::{Config, ToContext},
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let ctx = match Config::from_env().and_then(|config| config.to_context()) {
        Ok(ctx) => Arc::new(ctx),
        Err(err) => {
            tracing::error!("Failed to load configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = App::new(ctx).serve().await {
        tracing::error!("Server error: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
