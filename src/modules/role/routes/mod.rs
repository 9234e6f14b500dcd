mod get;
mod grant;
mod list;
mod revoke;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(get::get_router())
        .merge(grant::get_router())
        .merge(revoke::get_router())
}
