mod add;
mod get;
mod lines;
mod remove;
mod update;

use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(get::get_router())
        .merge(lines::get_router())
        .merge(add::get_router())
        .merge(update::get_router())
        .merge(remove::get_router())
}
