mod handler;
mod service;
mod types;

use crate::types::Context;
use axum::routing::{get, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/vendor/:vendor_id/items/:item_id", get(handler::handler))
}
