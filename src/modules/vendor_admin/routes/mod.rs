mod add;
mod get;
mod list;
mod remove;
mod user_vendors;

use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(add::get_router())
        .merge(get::get_router())
        .merge(remove::get_router())
        .merge(user_vendors::get_router())
}
