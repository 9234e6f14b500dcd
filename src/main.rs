use std::sync::Arc;
use tableside_backend_rs::{
    app::App,
    types::{Config, Context, ToContext},
};
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let ctx: Arc<Context> = Arc::new(Config::default().to_context().await);

    if let Err(err) = App::new(ctx).serve().await {
        tracing::error!("Server stopped unexpectedly: {}", err);
    }
}
