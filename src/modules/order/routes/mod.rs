mod checkout;
mod complete;
mod delete;
mod list;
mod vendor_list;

use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(checkout::get_router())
        .merge(list::get_router())
        .merge(vendor_list::get_router())
        .merge(complete::get_router())
        .merge(delete::get_router())
}
