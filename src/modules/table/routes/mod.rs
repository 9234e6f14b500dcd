mod assign;
mod create;
mod delete;
mod free;
mod get;
mod list;
mod mine;
mod needs_service;
mod release;
mod serviced;
mod update;

use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(create::get_router())
        .merge(get::get_router())
        .merge(update::get_router())
        .merge(delete::get_router())
        .merge(mine::get_router())
        .merge(assign::get_router())
        .merge(needs_service::get_router())
        .merge(serviced::get_router())
        .merge(release::get_router())
        .merge(free::get_router())
}
