mod handler;
mod service;
mod types;

use crate::types::Context;
use axum::routing::{delete, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/revokerole", delete(handler::handler))
}
